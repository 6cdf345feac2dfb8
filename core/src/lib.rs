//! # Herald Core
//!
//! Application services of the notification domain.
//!
//! * [`validator::UserValidator`]: Checks that a user can be addressed.
//! * [`formatter::NotificationFormatter`]: Renders users and notifications as text.
//! * [`manager::NotificationManager`]: Validates, formats and hands the outcome to the caller.
//! * [`dispatch::Dispatch`]: The outbound seam adapters implement to receive outcomes.
//!
//! Everything here is synchronous. Continuations run on the caller's thread
//! before the call that triggered them returns.

pub mod dispatch;
pub mod formatter;
pub mod manager;
pub mod validator;
