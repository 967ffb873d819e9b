use shipfinder_catalog::ShipMatch;
use shipfinder_protocol::SelectionItem;

use crate::error::{FlowError, Result};

/// Final pick-one-of-many resolution over the candidates narrowing left
/// behind. Choices are keyed by each candidate's stable surrogate id; an
/// exact name is accepted as well, but only while it is unique among the
/// remaining candidates.
#[derive(Debug)]
pub struct SelectionResolver {
    candidates: Vec<ShipMatch>,
}

impl SelectionResolver {
    /// Requires at least two candidates; fewer is a caller contract violation,
    /// not a user-facing condition.
    pub fn new(candidates: Vec<ShipMatch>) -> Result<Self> {
        if candidates.len() < 2 {
            log::error!(
                "selection requested with {} candidate(s)",
                candidates.len()
            );
            return Err(FlowError::InvalidSessionState(
                "selection requires at least two candidates",
            ));
        }
        Ok(Self { candidates })
    }

    /// Internal constructor for call sites that have already checked the
    /// candidate count.
    pub(crate) fn from_matches(candidates: Vec<ShipMatch>) -> Self {
        debug_assert!(candidates.len() >= 2);
        Self { candidates }
    }

    #[must_use]
    pub fn candidates(&self) -> &[ShipMatch] {
        &self.candidates
    }

    /// One selection item per candidate, in candidate order.
    #[must_use]
    pub fn choices(&self) -> Vec<SelectionItem> {
        self.candidates
            .iter()
            .map(|m| SelectionItem {
                id: m.id.to_string(),
                label: m.ship.name.clone(),
                summary: m.ship.to_string(),
            })
            .collect()
    }

    /// Resolve a raw pick to a candidate. `None` means the pick did not match
    /// (or matched ambiguously); the caller re-presents the same choice set.
    #[must_use]
    pub fn resolve(&self, raw: &str) -> Option<&ShipMatch> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        if let Ok(id) = raw.parse::<usize>() {
            if let Some(m) = self.candidates.iter().find(|m| m.id == id) {
                return Some(m);
            }
        }

        let mut by_name = self.candidates.iter().filter(|m| m.ship.name == raw);
        match (by_name.next(), by_name.next()) {
            (Some(m), None) => Some(m),
            (Some(_), Some(_)) => {
                log::warn!("pick \"{raw}\" matches more than one candidate");
                None
            }
            _ => None,
        }
    }
}
