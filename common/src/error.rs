use thiserror::Error;

/// Raised when a piece of text does not name a variant of a domain enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind}: '{input}'")]
pub struct ParseLabelError {
    /// Human name of the enum being parsed (e.g. "role").
    pub kind: &'static str,
    /// The rejected input, as given.
    pub input: String,
}

impl ParseLabelError {
    pub fn new(kind: &'static str, input: &str) -> Self {
        Self {
            kind,
            input: input.to_string(),
        }
    }
}
