use herald_common::models::user::User;
use herald_common::models::validation::{ValidationError, ValidationResult};

/// Validates users before anything is sent to them.
///
/// Rules run in order and the first failure wins:
/// 1. the name must not be empty,
/// 2. the email must not be empty.
///
/// Roles are not checked. [`Role`](herald_common::models::role::Role) is a closed
/// enum, so an invalid role cannot be constructed.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserValidator;

impl UserValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(&self, user: &User) -> ValidationResult {
        ValidationResult::from(self.check(user))
    }

    /// Same rules as [`validate`](Self::validate), as a `Result`.
    pub fn check(&self, user: &User) -> Result<(), ValidationError> {
        require_name(user)?;
        require_email(user)?;
        Ok(())
    }
}

fn require_name(user: &User) -> Result<(), ValidationError> {
    if user.name.is_empty() {
        return Err(ValidationError::MissingName);
    }
    Ok(())
}

fn require_email(user: &User) -> Result<(), ValidationError> {
    if user.email.is_empty() {
        return Err(ValidationError::MissingEmail);
    }
    Ok(())
}
