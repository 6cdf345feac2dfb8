use herald_common::config::Config;
use herald_common::models::notification::NotificationType;
use herald_common::models::preference::NotificationPreference;

use crate::terminal::{format, print};

/// One preference per channel for `user_id`, enabled when listed in `enabled`.
pub fn build_preferences(
    user_id: &str,
    enabled: &[NotificationType],
) -> Vec<NotificationPreference> {
    NotificationType::ALL
        .iter()
        .map(|channel| NotificationPreference::new(user_id, *channel, enabled.contains(channel)))
        .collect()
}

pub fn prefs(user_id: &str, enabled: &[NotificationType], cfg: &Config) {
    let preferences = build_preferences(user_id, enabled);

    if cfg.shows_details() {
        print::tree_head(0, user_id);
    }
    print::as_tree_one_level(preferences.iter().map(format::preference_to_detail).collect());
}
