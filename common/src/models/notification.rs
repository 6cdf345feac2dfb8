use std::fmt;
use std::str::FromStr;

use crate::error::ParseLabelError;
use crate::models::{Labelled, parse_labelled};

/// The channel a notification is delivered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationType {
    Email,
    Push,
    Sms,
}

impl NotificationType {
    pub const ALL: [NotificationType; 3] = [
        NotificationType::Email,
        NotificationType::Push,
        NotificationType::Sms,
    ];

    /// Display label of the channel.
    ///
    /// Both [`Notification`] and
    /// [`NotificationPreference`](crate::models::preference::NotificationPreference)
    /// delegate here.
    pub const fn label(self) -> &'static str {
        match self {
            NotificationType::Email => "Email",
            NotificationType::Push => "Push",
            NotificationType::Sms => "SMS",
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            NotificationType::Email => "email",
            NotificationType::Push => "push",
            NotificationType::Sms => "sms",
        }
    }
}

impl Labelled for NotificationType {
    const KIND: &'static str = "notification type";
    const ALL: &'static [Self] = &NotificationType::ALL;

    fn key(self) -> &'static str {
        NotificationType::key(self)
    }

    fn label(self) -> &'static str {
        NotificationType::label(self)
    }
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for NotificationType {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_labelled(s)
    }
}

/// Urgency of a notification. Ordered `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub const fn label(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Only `High` counts as urgent.
    pub const fn is_urgent(self) -> bool {
        matches!(self, Priority::High)
    }
}

impl Labelled for Priority {
    const KIND: &'static str = "priority";
    const ALL: &'static [Self] = &Priority::ALL;

    fn key(self) -> &'static str {
        Priority::key(self)
    }

    fn label(self) -> &'static str {
        Priority::label(self)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Priority {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_labelled(s)
    }
}

/// A single message addressed to a user.
///
/// Read state is part of the value: [`Notification::mark_read`] hands back a new
/// notification instead of flipping a flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub body: String,
    pub notification_type: NotificationType,
    pub priority: Priority,
    pub read: bool,
}

impl Notification {
    /// Creates an unread notification.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
        notification_type: NotificationType,
        priority: Priority,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            body: body.into(),
            notification_type,
            priority,
            read: false,
        }
    }

    pub fn type_label(&self) -> &'static str {
        self.notification_type.label()
    }

    pub fn priority_label(&self) -> &'static str {
        self.priority.label()
    }

    pub fn is_urgent(&self) -> bool {
        self.priority.is_urgent()
    }

    pub fn is_read(&self) -> bool {
        self.read
    }

    pub fn mark_read(self) -> Self {
        Self { read: true, ..self }
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
