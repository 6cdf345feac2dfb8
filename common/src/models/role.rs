use std::fmt;
use std::str::FromStr;

use crate::error::ParseLabelError;
use crate::models::{Labelled, parse_labelled};

/// The role a [`User`](crate::models::user::User) holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Member,
    Guest,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Member, Role::Guest];

    /// Human readable name of the role.
    pub const fn label(self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Member => "Member",
            Role::Guest => "Guest",
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Member => "member",
            Role::Guest => "guest",
        }
    }

    /// Only administrators may manage other users.
    pub const fn can_manage_users(self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl Labelled for Role {
    const KIND: &'static str = "role";
    const ALL: &'static [Self] = &Role::ALL;

    fn key(self) -> &'static str {
        Role::key(self)
    }

    fn label(self) -> &'static str {
        Role::label(self)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Role {
    type Err = ParseLabelError;

    /// Parses `"admin"`, `"Administrator"`, `"member"`, `"guest"` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_labelled(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_roles() {
        assert_eq!(Role::Admin.label(), "Administrator");
        assert_eq!(Role::Member.label(), "Member");
        assert_eq!(Role::Guest.label(), "Guest");
        assert_eq!(Role::Admin.to_string(), "Administrator");
    }

    #[test]
    fn only_admin_can_manage_users() {
        for role in Role::ALL {
            assert_eq!(role.can_manage_users(), role == Role::Admin);
        }
    }

    #[test]
    fn parses_keys_and_labels() {
        assert_eq!("admin".parse::<Role>(), Ok(Role::Admin));
        assert_eq!("ADMINISTRATOR".parse::<Role>(), Ok(Role::Admin));
        assert_eq!(" guest ".parse::<Role>(), Ok(Role::Guest));

        let err = "owner".parse::<Role>().unwrap_err();
        assert_eq!(err.to_string(), "invalid role: 'owner'");
    }
}
