use herald_common::models::notification::Notification;
use herald_common::models::user::User;

/// Turns domain values into display strings. Holds no state.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotificationFormatter;

impl NotificationFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Three lines: `[Type] title`, the body, then `Priority: Label`.
    pub fn format_notification(&self, notification: &Notification) -> String {
        format!(
            "[{}] {}\n{}\nPriority: {}",
            notification.type_label(),
            notification.title,
            notification.body,
            notification.priority_label()
        )
    }

    /// `name (email) - Role`.
    pub fn format_user(&self, user: &User) -> String {
        format!(
            "{} ({}) - {}",
            user.name,
            user.email,
            user.role_display_name()
        )
    }

    /// One summary entry: `title (Priority)`.
    pub fn format_summary_line(&self, notification: &Notification) -> String {
        format!("{} ({})", notification.title, notification.priority_label())
    }
}
