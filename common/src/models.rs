//! # Domain Models
//!
//! The core data structures of the notification domain.
//!
//! ## Closed Sets
//! * [`role::Role`]: What a user is allowed to do.
//! * [`notification::NotificationType`]: The channel a notification travels on.
//! * [`notification::Priority`]: How urgent a notification is.
//!
//! ## Value Objects
//! * [`user::User`]: Identity plus role.
//! * [`notification::Notification`]: Message content, channel, priority and read state.
//! * [`preference::NotificationPreference`]: A user's opt-in for one channel.
//! * [`validation::ValidationResult`]: Outcome of validating a user.
//!
//! ## Design Principles
//! * **Immutability**: Values are never updated in place; a change produces a new value.
//! * **Unrepresentable states**: Roles, channels and priorities are enums, so there is
//!   no "unknown" case to guard against at runtime.

pub mod notification;
pub mod preference;
pub mod role;
pub mod user;
pub mod validation;

use crate::error::ParseLabelError;

/// A closed enum whose variants can be named in text.
///
/// Each variant answers to its lowercase `key` and its display `label`,
/// both matched case-insensitively.
pub(crate) trait Labelled: Copy + 'static {
    const KIND: &'static str;
    const ALL: &'static [Self];

    fn key(self) -> &'static str;
    fn label(self) -> &'static str;
}

pub(crate) fn parse_labelled<T: Labelled>(input: &str) -> Result<T, ParseLabelError> {
    let needle = input.trim();
    T::ALL
        .iter()
        .copied()
        .find(|variant| {
            needle.eq_ignore_ascii_case(variant.key())
                || needle.eq_ignore_ascii_case(variant.label())
        })
        .ok_or_else(|| ParseLabelError::new(T::KIND, input))
}
