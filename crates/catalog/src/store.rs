use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};
use crate::seed;
use crate::ship::{Ship, ShipQuery};

/// An immutable, ordered collection of fully-specified records. Built once at
/// startup; filtering never mutates it.
#[derive(Debug, Clone)]
pub struct Catalog {
    ships: Vec<Ship>,
}

/// A single filter hit. `id` is the record's position in catalog order and
/// doubles as its stable surrogate identifier for selection prompts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipMatch {
    pub id: usize,
    pub ship: Ship,
}

impl Catalog {
    /// Build a catalog from explicit records, validating the catalog
    /// invariant: every record is fully specified.
    pub fn new(ships: Vec<Ship>) -> Result<Self> {
        for (index, ship) in ships.iter().enumerate() {
            if let Some(reason) = invalid_reason(ship) {
                return Err(CatalogError::InvalidRecord {
                    index,
                    reason: reason.to_string(),
                });
            }
        }
        Ok(Self { ships })
    }

    /// The builtin seed fleet.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            ships: seed::builtin_ships(),
        }
    }

    /// Load records from a JSON file (an array of ships).
    pub fn from_json_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let ships: Vec<Ship> = serde_json::from_str(&text)?;
        log::debug!("loaded {} records from {}", ships.len(), path.display());
        Self::new(ships)
    }

    /// Partial-match filter: keeps every record the query matches, in catalog
    /// order. Pure and deterministic; an empty result is not an error.
    #[must_use]
    pub fn find_matches(&self, query: &ShipQuery) -> Vec<ShipMatch> {
        let matches: Vec<ShipMatch> = self
            .ships
            .iter()
            .enumerate()
            .filter(|(_, ship)| query.matches(ship))
            .map(|(id, ship)| ShipMatch {
                id,
                ship: ship.clone(),
            })
            .collect();
        log::debug!(
            "{} of {} records match {:?}",
            matches.len(),
            self.ships.len(),
            query
        );
        matches
    }

    #[must_use]
    pub fn get(&self, id: usize) -> Option<&Ship> {
        self.ships.get(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ships.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ship> {
        self.ships.iter()
    }
}

fn invalid_reason(ship: &Ship) -> Option<&'static str> {
    if ship.name.trim().is_empty() {
        return Some("name must not be empty");
    }
    if ship.engines.is_empty() {
        return Some("engines must not be empty");
    }
    if ship.weapons.is_empty() {
        return Some("weapons must not be empty");
    }
    None
}
