//! # Notification Manager
//!
//! Implements the "send a notification" use case.
//!
//! The manager validates the recipient, formats the notification and hands the
//! result to one of two caller supplied continuations. There is no queue and no
//! deferred delivery: the continuation has run by the time the call returns.

use herald_common::models::notification::Notification;
use herald_common::models::preference::NotificationPreference;
use herald_common::models::user::User;
use tracing::{debug, info, trace};

use crate::dispatch::Dispatch;
use crate::formatter::NotificationFormatter;
use crate::validator::UserValidator;

/// Application service orchestrating validation, formatting and dispatch.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotificationManager {
    validator: UserValidator,
    formatter: NotificationFormatter,
}

impl NotificationManager {
    pub fn new(validator: UserValidator, formatter: NotificationFormatter) -> Self {
        Self {
            validator,
            formatter,
        }
    }

    pub fn formatter(&self) -> &NotificationFormatter {
        &self.formatter
    }

    /// Sends `notification` to `user`.
    ///
    /// Exactly one of the continuations is invoked, exactly once:
    /// * `on_sent` with `"Sent to <name>: <formatted>"` if the user is valid,
    /// * `on_error` with the validation message otherwise.
    pub fn send_notification<S, E>(
        &self,
        user: &User,
        notification: &Notification,
        on_sent: S,
        on_error: E,
    ) where
        S: FnOnce(String),
        E: FnOnce(String),
    {
        if let Err(reason) = self.validator.validate(user).into_result() {
            debug!(user_id = %user.id, reason = %reason, "recipient rejected");
            on_error(reason);
            return;
        }

        let formatted = self.formatter.format_notification(notification);
        info!(
            user_id = %user.id,
            notification_id = %notification.id,
            channel = notification.type_label(),
            "notification sent"
        );
        on_sent(format!("Sent to {}: {}", user.name, formatted));
    }

    /// Like [`send_notification`](Self::send_notification), but honours the
    /// user's preferences first.
    ///
    /// If the first preference for this user and channel does not allow the
    /// notification, nothing is sent, no continuation runs and `false` is returned.
    /// A missing preference counts as opted in.
    pub fn send_if_enabled<S, E>(
        &self,
        user: &User,
        notification: &Notification,
        preferences: &[NotificationPreference],
        on_sent: S,
        on_error: E,
    ) -> bool
    where
        S: FnOnce(String),
        E: FnOnce(String),
    {
        let opted_out = preferences
            .iter()
            .find(|pref| pref.applies_to(&user.id, notification.notification_type))
            .is_some_and(|pref| !pref.allows(notification));

        if opted_out {
            debug!(
                user_id = %user.id,
                channel = notification.type_label(),
                "channel disabled by preference"
            );
            return false;
        }

        self.send_notification(user, notification, on_sent, on_error);
        true
    }

    /// Routes the outcome of [`send_if_enabled`](Self::send_if_enabled) to a
    /// [`Dispatch`] implementation. Returns `false` when a preference muted the
    /// channel, in which case `target` is not called at all.
    pub fn dispatch(
        &self,
        user: &User,
        notification: &Notification,
        preferences: &[NotificationPreference],
        target: &dyn Dispatch,
    ) -> bool {
        self.send_if_enabled(
            user,
            notification,
            preferences,
            |message| target.sent(&message),
            |reason| target.failed(&reason),
        )
    }

    /// One `title (Priority)` line per notification, in input order, separated by
    /// newlines. An empty slice yields an empty string.
    pub fn summarize_all(&self, notifications: &[Notification]) -> String {
        trace!(count = notifications.len(), "summarizing notifications");
        notifications
            .iter()
            .map(|n| self.formatter.format_summary_line(n))
            .collect::<Vec<String>>()
            .join("\n")
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
