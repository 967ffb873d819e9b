use std::sync::Arc;

use shipfinder_catalog::{Catalog, ShipMatch, ShipQuery};

use crate::config::FlowConfig;
use crate::field::{FieldAnswer, FieldId};
use crate::resolver::SelectionResolver;

/// One in-flight narrowing session. Owns its query and candidate state
/// outright; concurrent sessions are independent values sharing only the
/// immutable catalog.
pub struct NarrowingSession {
    catalog: Arc<Catalog>,
    config: FlowConfig,
    query: ShipQuery,
    /// `None` until the first accepted answer (or seeded query) runs a search.
    candidates: Option<Vec<ShipMatch>>,
}

/// Result of submitting one raw answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The answer narrowed the candidate set; the flow advances to the next
    /// field. `feedback`, when present, is informational only.
    Accepted {
        remaining: usize,
        feedback: Option<String>,
    },
    /// The answer was unparseable or would have left no candidates. State is
    /// unchanged and the same field should be asked again.
    Rejected { feedback: String },
}

/// Terminal disposition of a completed narrowing pass.
pub enum SessionOutcome {
    /// Exactly one record matched.
    Resolved(ShipMatch),
    /// Two or more records matched; the user picks one.
    Choosing(SelectionResolver),
    /// Nothing matched the accumulated criteria.
    Failed,
}

impl NarrowingSession {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, config: FlowConfig) -> Self {
        Self {
            catalog,
            config,
            query: ShipQuery::new(),
            candidates: None,
        }
    }

    /// Start from pre-filled criteria. A non-empty query is searched
    /// immediately so activation and option computation see its candidates.
    #[must_use]
    pub fn with_query(catalog: Arc<Catalog>, config: FlowConfig, query: ShipQuery) -> Self {
        let candidates = if query.is_empty() {
            None
        } else {
            Some(catalog.find_matches(&query))
        };
        Self {
            catalog,
            config,
            query,
            candidates,
        }
    }

    /// Should this field still be asked? A question is skipped once the
    /// answer can no longer distinguish any remaining candidate.
    #[must_use]
    pub fn is_active(&self, field: FieldId) -> bool {
        let Some(candidates) = &self.candidates else {
            // No search has run yet; every question can discriminate.
            return true;
        };
        if candidates.len() < 2 {
            log::debug!(
                "skipping {}: {} candidate(s) left",
                field.name(),
                candidates.len()
            );
            return false;
        }
        let distinct = field.distinct_count(candidates);
        if distinct < 2 {
            log::debug!(
                "skipping {}: only {} distinct value(s) left",
                field.name(),
                distinct
            );
            return false;
        }
        true
    }

    /// Legal answer options for the field, computed from the current
    /// candidates. `None` before any search has run; the caller then presents
    /// the field's default option set instead.
    #[must_use]
    pub fn options_for(&self, field: FieldId) -> Option<Vec<FieldAnswer>> {
        self.candidates
            .as_deref()
            .map(|candidates| field.options(candidates))
    }

    /// Validate one raw answer against the remaining search space. An accepted
    /// answer commits both the tightened query and its match set; a rejected
    /// answer leaves the session exactly as it was.
    pub fn submit(&mut self, field: FieldId, raw: &str) -> SubmitOutcome {
        let answer = match field.parse(raw) {
            Ok(answer) => answer,
            Err(err) => {
                log::warn!("{err}");
                return SubmitOutcome::Rejected {
                    feedback: format!("\"{}\" is not a valid option", raw.trim()),
                };
            }
        };

        let mut trial = self.query.clone();
        answer.apply(&mut trial);
        let matches = self.catalog.find_matches(&trial);

        if matches.is_empty() {
            log::warn!(
                "{} = {} would leave no candidates, rejecting",
                field.name(),
                answer.label()
            );
            return SubmitOutcome::Rejected {
                feedback: format!("\"{}\" is not a valid option", answer.label()),
            };
        }

        let remaining = matches.len();
        let feedback = (remaining > self.config.feedback_threshold).then(|| {
            format!("Still {remaining} options matching your criteria. Let's get some more details!")
        });

        log::debug!(
            "accepted {} = {}, {} candidate(s) remain",
            field.name(),
            answer.label(),
            remaining
        );
        self.query = trial;
        self.candidates = Some(matches);
        SubmitOutcome::Accepted {
            remaining,
            feedback,
        }
    }

    #[must_use]
    pub fn query(&self) -> &ShipQuery {
        &self.query
    }

    #[must_use]
    pub fn candidates(&self) -> Option<&[ShipMatch]> {
        self.candidates.as_deref()
    }

    /// Finish narrowing: run the accumulated query once more against the full
    /// catalog and branch on how many records survive.
    #[must_use]
    pub fn complete(self) -> SessionOutcome {
        let mut matches = self.catalog.find_matches(&self.query);
        match matches.len() {
            0 => {
                log::debug!("no records match the final query {:?}", self.query);
                SessionOutcome::Failed
            }
            1 => SessionOutcome::Resolved(matches.remove(0)),
            _ => SessionOutcome::Choosing(SelectionResolver::from_matches(matches)),
        }
    }
}
