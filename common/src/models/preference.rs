use crate::models::notification::{Notification, NotificationType};

/// A user's opt-in (or opt-out) for a single notification channel.
///
/// One preference per `(user_id, notification_type)` pair is the intended usage;
/// nothing here enforces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationPreference {
    pub user_id: String,
    pub notification_type: NotificationType,
    pub enabled: bool,
}

impl NotificationPreference {
    pub fn new(
        user_id: impl Into<String>,
        notification_type: NotificationType,
        enabled: bool,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            notification_type,
            enabled,
        }
    }

    pub fn type_label(&self) -> &'static str {
        self.notification_type.label()
    }

    /// Whether this preference lets `notification` through.
    pub fn allows(&self, notification: &Notification) -> bool {
        self.enabled && self.notification_type == notification.notification_type
    }

    pub fn applies_to(&self, user_id: &str, notification_type: NotificationType) -> bool {
        self.user_id == user_id && self.notification_type == notification_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::notification::Priority;

    #[test]
    fn type_label_matches_notification() {
        for notification_type in NotificationType::ALL {
            let pref = NotificationPreference::new("u1", notification_type, true);
            let n = Notification::new("n", "t", "b", notification_type, Priority::Low);
            assert_eq!(pref.type_label(), n.type_label());
        }
    }

    #[test]
    fn allows_requires_enabled_and_same_channel() {
        let email = Notification::new("n", "t", "b", NotificationType::Email, Priority::Low);

        assert!(NotificationPreference::new("u1", NotificationType::Email, true).allows(&email));
        assert!(!NotificationPreference::new("u1", NotificationType::Email, false).allows(&email));
        assert!(!NotificationPreference::new("u1", NotificationType::Sms, true).allows(&email));
    }

    #[test]
    fn applies_to_matches_user_and_channel() {
        let pref = NotificationPreference::new("u1", NotificationType::Push, false);
        assert!(pref.applies_to("u1", NotificationType::Push));
        assert!(!pref.applies_to("u2", NotificationType::Push));
        assert!(!pref.applies_to("u1", NotificationType::Email));
    }
}
