use std::cell::RefCell;

use herald_common::config::Config;
use herald_common::models::notification::Notification;
use herald_common::models::preference::NotificationPreference;
use herald_common::models::user::User;
use herald_common::success;
use herald_core::dispatch::Dispatch;
use herald_core::manager::NotificationManager;
use tracing::warn;

use crate::commands::SendArgs;
use crate::terminal::print;

/// Prints deliveries to the terminal and keeps a failure for the exit status.
///
/// Failures are not printed here; `main` reports the returned error.
#[derive(Default)]
struct TerminalDispatch {
    failure: RefCell<Option<String>>,
}

impl Dispatch for TerminalDispatch {
    fn sent(&self, message: &str) {
        success!("notification delivered");
        print::outcome("Success:", message);
    }

    fn failed(&self, reason: &str) {
        self.failure.replace(Some(reason.to_string()));
    }
}

pub fn send(manager: &NotificationManager, args: SendArgs, cfg: &Config) -> anyhow::Result<()> {
    let user = User::new(args.id, args.name, args.email, args.role);
    let notification = Notification::new(
        "n1",
        args.title,
        args.body,
        args.notification_type,
        args.priority,
    );
    let preferences: Vec<NotificationPreference> = args
        .muted
        .iter()
        .map(|muted| NotificationPreference::new(user.id.clone(), *muted, false))
        .collect();

    if cfg.shows_details() {
        print::set_key_width(["Recipient"]);
        print::aligned_line("Recipient", manager.formatter().format_user(&user));
    }

    let terminal = TerminalDispatch::default();
    if !manager.dispatch(&user, &notification, &preferences, &terminal) {
        warn!(
            "{} notifications are disabled for user {}",
            notification.type_label(),
            user.id
        );
        return Ok(());
    }

    if let Some(reason) = terminal.failure.into_inner() {
        anyhow::bail!("notification not sent: {reason}");
    }
    Ok(())
}
