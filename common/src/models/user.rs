use crate::models::role::Role;

/// A user that can receive notifications.
///
/// Users are plain values: there are no setters, a changed user is a new `User`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl User {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role,
        }
    }

    pub fn role_display_name(&self) -> &'static str {
        self.role.label()
    }

    pub fn can_manage_users(&self) -> bool {
        self.role.can_manage_users()
    }
}
