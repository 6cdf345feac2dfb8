use herald_common::config::Config;
use herald_common::models::notification::{Notification, NotificationType, Priority};
use herald_core::manager::NotificationManager;

use crate::hprint;
use crate::terminal::print;

/// Parses `TITLE:PRIORITY`. The last colon separates the priority, so titles may
/// contain colons themselves.
pub fn parse_item(s: &str) -> Result<(String, Priority), String> {
    let Some((title, priority)) = s.rsplit_once(':') else {
        return Err(format!("expected TITLE:PRIORITY, got '{s}'"));
    };
    let priority = priority.parse::<Priority>().map_err(|e| e.to_string())?;
    Ok((title.to_string(), priority))
}

pub fn summary(manager: &NotificationManager, items: Vec<(String, Priority)>, cfg: &Config) {
    let notifications: Vec<Notification> = items
        .into_iter()
        .enumerate()
        .map(|(idx, (title, priority))| {
            Notification::new(format!("n{}", idx + 1), title, "", NotificationType::Email, priority)
        })
        .collect();

    if notifications.is_empty() {
        if cfg.shows_details() {
            print::print_status("No notifications to summarize");
        }
        return;
    }

    let urgent = notifications.iter().filter(|n| n.is_urgent()).count();
    hprint!(&manager.summarize_all(&notifications));

    if cfg.shows_details() {
        hprint!();
        print::fat_separator();
        print::centerln(&format!("{} notifications, {} urgent", notifications.len(), urgent));
    }
}
