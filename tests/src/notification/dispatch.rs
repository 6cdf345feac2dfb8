#![cfg(test)]
use std::cell::RefCell;

use herald_common::models::notification::{Notification, NotificationType, Priority};
use herald_common::models::preference::NotificationPreference;
use herald_common::models::role::Role;
use herald_common::models::user::User;
use herald_core::dispatch::Dispatch;
use herald_core::manager::NotificationManager;

#[derive(Default)]
struct Recorder {
    sent: RefCell<Vec<String>>,
    failed: RefCell<Vec<String>>,
}

impl Dispatch for Recorder {
    fn sent(&self, message: &str) {
        self.sent.borrow_mut().push(message.to_string());
    }

    fn failed(&self, reason: &str) {
        self.failed.borrow_mut().push(reason.to_string());
    }
}

fn sms() -> Notification {
    Notification::new("n9", "Code", "123456", NotificationType::Sms, Priority::Medium)
}

#[test]
fn dispatch_routes_success() {
    let recorder = Recorder::default();
    let admin = User::new("a", "Ann", "ann@example.com", Role::Admin);

    assert!(NotificationManager::default().dispatch(&admin, &sms(), &[], &recorder));

    assert_eq!(
        recorder.sent.into_inner(),
        vec!["Sent to Ann: [SMS] Code\n123456\nPriority: Medium".to_string()]
    );
    assert!(recorder.failed.into_inner().is_empty());
}

#[test]
fn dispatch_routes_failure() {
    let recorder = Recorder::default();
    let no_email = User::new("a", "Ann", "", Role::Admin);

    assert!(NotificationManager::default().dispatch(&no_email, &sms(), &[], &recorder));

    assert!(recorder.sent.into_inner().is_empty());
    assert_eq!(recorder.failed.into_inner(), vec!["Email is required.".to_string()]);
}

#[test]
fn muted_channel_reaches_neither_side() {
    let recorder = Recorder::default();
    let ann = User::new("a", "Ann", "ann@example.com", Role::Member);
    let prefs = [
        NotificationPreference::new("a", NotificationType::Email, true),
        NotificationPreference::new("a", NotificationType::Sms, false),
    ];

    assert!(!NotificationManager::default().dispatch(&ann, &sms(), &prefs, &recorder));

    assert!(recorder.sent.into_inner().is_empty());
    assert!(recorder.failed.into_inner().is_empty());
}
