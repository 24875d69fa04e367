use thiserror::Error;

/// A show date that is not a zero-padded `YYYY-MM-DD` calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed show date {value:?}: expected a YYYY-MM-DD calendar date")]
pub struct MalformedDateError {
    pub value: String,
}

impl MalformedDateError {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}
