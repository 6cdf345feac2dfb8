use crate::terminal::colors;
use colored::*;
use herald_common::models::notification::{Notification, Priority};
use herald_common::models::preference::NotificationPreference;

type Detail = (String, ColoredString);

pub fn priority_to_colored(priority: Priority) -> ColoredString {
    let color = match priority {
        Priority::Low => colors::PRIORITY_LOW,
        Priority::Medium => colors::PRIORITY_MEDIUM,
        Priority::High => colors::PRIORITY_HIGH,
    };
    priority.label().color(color)
}

pub fn yes_no(flag: bool) -> ColoredString {
    if flag {
        "yes".color(colors::ENABLED).bold()
    } else {
        "no".color(colors::DISABLED)
    }
}

pub fn notification_to_details(notification: &Notification) -> Vec<Detail> {
    vec![
        ("Type".to_string(), notification.type_label().normal()),
        ("Priority".to_string(), priority_to_colored(notification.priority)),
        ("Urgent".to_string(), yes_no(notification.is_urgent())),
        ("Read".to_string(), yes_no(notification.is_read())),
    ]
}

pub fn preference_to_detail(preference: &NotificationPreference) -> Detail {
    let state: ColoredString = if preference.enabled {
        "enabled".color(colors::ENABLED)
    } else {
        "disabled".color(colors::DISABLED)
    };
    (preference.type_label().to_string(), state)
}
