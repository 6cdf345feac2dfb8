use thiserror::Error;

/// Reasons a [`User`](crate::models::user::User) can fail validation.
///
/// The display strings are the messages handed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name is required.")]
    MissingName,
    #[error("Email is required.")]
    MissingEmail,
}

/// Outcome of validating a user: a success flag plus a human readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub ok: bool,
    pub message: String,
}

impl ValidationResult {
    pub const VALID_MESSAGE: &'static str = "Valid";

    pub fn valid() -> Self {
        Self {
            ok: true,
            message: Self::VALID_MESSAGE.to_string(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.ok
    }

    /// Converts back into a `Result`, keeping the failure message as the error.
    pub fn into_result(self) -> Result<(), String> {
        if self.ok { Ok(()) } else { Err(self.message) }
    }
}

impl From<Result<(), ValidationError>> for ValidationResult {
    fn from(outcome: Result<(), ValidationError>) -> Self {
        match outcome {
            Ok(()) => Self::valid(),
            Err(e) => Self::invalid(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(ValidationError::MissingName.to_string(), "Name is required.");
        assert_eq!(ValidationError::MissingEmail.to_string(), "Email is required.");
    }

    #[test]
    fn from_outcome() {
        assert_eq!(
            ValidationResult::from(Ok::<(), ValidationError>(())),
            ValidationResult::valid()
        );
        assert_eq!(
            ValidationResult::from(Err(ValidationError::MissingEmail)),
            ValidationResult {
                ok: false,
                message: "Email is required.".to_string(),
            }
        );
    }

    #[test]
    fn into_result_keeps_message() {
        assert_eq!(ValidationResult::valid().into_result(), Ok(()));
        assert_eq!(
            ValidationResult::invalid("Name is required.").into_result(),
            Err("Name is required.".to_string())
        );
    }
}
