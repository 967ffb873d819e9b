use std::path::Path;

use serde::Deserialize;

use crate::error::{FlowError, Result};

pub const DEFAULT_FEEDBACK_THRESHOLD: usize = 5;

/// Tuning knobs for the narrowing flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowConfig {
    /// When more than this many candidates remain after an accepted answer,
    /// the user gets a "still N options" nudge. Informational only.
    pub feedback_threshold: usize,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            feedback_threshold: DEFAULT_FEEDBACK_THRESHOLD,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawFlowConfig {
    feedback_threshold: Option<usize>,
}

impl FlowConfig {
    pub fn from_toml_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| FlowError::Config(format!("failed to read {}: {e}", path.display())))?;
        let raw: RawFlowConfig = toml::from_str(&text)
            .map_err(|e| FlowError::Config(format!("failed to parse {}: {e}", path.display())))?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawFlowConfig) -> Result<Self> {
        let config = Self {
            feedback_threshold: raw
                .feedback_threshold
                .unwrap_or(DEFAULT_FEEDBACK_THRESHOLD),
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.feedback_threshold == 0 {
            return Err(FlowError::Config(
                "feedback_threshold must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
