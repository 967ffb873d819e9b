use thiserror::Error;

pub type Result<T> = std::result::Result<T, CatalogError>;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid catalog record #{index}: {reason}")]
    InvalidRecord { index: usize, reason: String },
}

/// A raw answer could not be read as a value of the field it was given for.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("\"{value}\" is not a valid {field}")]
pub struct FieldParseError {
    field: &'static str,
    value: String,
}

impl FieldParseError {
    pub(crate) fn new(field: &'static str, value: &str) -> Self {
        Self {
            field,
            value: value.trim().to_string(),
        }
    }

    /// The offending raw input, trimmed.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}
