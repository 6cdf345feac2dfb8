#![cfg(test)]
use std::cell::{Cell, RefCell};

use herald_common::models::notification::{Notification, NotificationType, Priority};
use herald_common::models::preference::NotificationPreference;
use herald_common::models::role::Role;
use herald_common::models::user::User;
use herald_core::formatter::NotificationFormatter;
use herald_core::manager::NotificationManager;
use herald_core::validator::UserValidator;

fn reminder() -> Notification {
    Notification::new(
        "n1",
        "Reminder",
        "Meeting at 3pm",
        NotificationType::Push,
        Priority::High,
    )
}

fn manager() -> NotificationManager {
    NotificationManager::new(UserValidator::new(), NotificationFormatter::new())
}

/// Every send must invoke exactly one continuation, exactly once, before returning.
#[test]
fn exactly_one_continuation_per_send() {
    let users = [
        User::new("1", "Bob", "bob@example.com", Role::Member),
        User::new("2", "", "x@y.com", Role::Admin),
        User::new("3", "Eve", "", Role::Guest),
        User::new("4", "", "", Role::Guest),
    ];

    for user in &users {
        let sent = Cell::new(0);
        let failed = Cell::new(0);

        manager().send_notification(
            user,
            &reminder(),
            |_| sent.set(sent.get() + 1),
            |_| failed.set(failed.get() + 1),
        );

        assert_eq!(
            sent.get() + failed.get(),
            1,
            "user {} triggered {} continuations",
            user.id,
            sent.get() + failed.get()
        );
        assert_eq!(sent.get() == 1, UserValidator::new().validate(user).ok);
    }
}

#[test]
fn sent_message_for_bob() {
    let received = RefCell::new(None);

    manager().send_notification(
        &User::new("1", "Bob", "bob@example.com", Role::Member),
        &reminder(),
        |msg| *received.borrow_mut() = Some(msg),
        |msg| panic!("unexpected error: {msg}"),
    );

    assert_eq!(
        received.into_inner().as_deref(),
        Some("Sent to Bob: [Push] Reminder\nMeeting at 3pm\nPriority: High")
    );
}

#[test]
fn error_message_matches_validator() {
    let nameless = User::new("2", "", "x@y.com", Role::Member);
    let received = RefCell::new(None);

    manager().send_notification(
        &nameless,
        &reminder(),
        |msg| panic!("unexpected success: {msg}"),
        |msg| *received.borrow_mut() = Some(msg),
    );

    let expected = UserValidator::new().validate(&nameless).message;
    assert_eq!(received.into_inner(), Some(expected));
}

#[test]
fn read_state_does_not_change_output() {
    let unread = reminder();
    let read = unread.clone().mark_read();
    let formatter = NotificationFormatter::new();

    assert_eq!(formatter.format_notification(&unread), formatter.format_notification(&read));
    assert_eq!(manager().summarize_all(&[read]), "Reminder (High)");
}

#[test]
fn summary_of_every_priority() {
    let notifications: Vec<Notification> = Priority::ALL
        .iter()
        .map(|p| Notification::new(p.key(), p.label(), "", NotificationType::Email, *p))
        .collect();

    assert_eq!(
        manager().summarize_all(&notifications),
        "Low (Low)\nMedium (Medium)\nHigh (High)"
    );
}

#[test]
fn preferences_of_other_users_are_ignored() {
    let bob = User::new("bob", "Bob", "bob@example.com", Role::Member);
    let prefs = [NotificationPreference::new("alice", NotificationType::Push, false)];
    let sent = Cell::new(false);

    let delivered = manager().send_if_enabled(
        &bob,
        &reminder(),
        &prefs,
        |_| sent.set(true),
        |msg| panic!("unexpected error: {msg}"),
    );

    assert!(delivered);
    assert!(sent.get());
}

#[test]
fn enabled_preference_still_validates() {
    let guest = User::new("g", "Guest", "", Role::Guest);
    let prefs = [NotificationPreference::new("g", NotificationType::Push, true)];
    let error = RefCell::new(String::new());

    let delivered = manager().send_if_enabled(
        &guest,
        &reminder(),
        &prefs,
        |msg| panic!("unexpected success: {msg}"),
        |msg| *error.borrow_mut() = msg,
    );

    assert!(delivered);
    assert_eq!(error.into_inner(), "Email is required.");
}
