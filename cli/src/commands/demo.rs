use herald_common::config::Config;
use herald_common::models::notification::{Notification, NotificationType, Priority};
use herald_common::models::role::Role;
use herald_common::models::user::User;
use herald_core::manager::NotificationManager;

use crate::terminal::{format, print};

pub fn demo(manager: &NotificationManager, cfg: &Config) {
    let user = User::new("1", "Bob", "bob@example.com", Role::Member);
    let notification = Notification::new(
        "n1",
        "Reminder",
        "Meeting at 3pm",
        NotificationType::Push,
        Priority::High,
    );

    if cfg.shows_details() {
        print_user(manager, &user);
        print_notification(&notification);
    }

    manager.send_notification(
        &user,
        &notification,
        |message| print::outcome("Success:", &message),
        |message| print::outcome("Error:", &message),
    );
}

fn print_user(manager: &NotificationManager, user: &User) {
    print::set_key_width(["User", "Role", "Can manage users"]);
    print::aligned_line("User", manager.formatter().format_user(user));
    print::aligned_line("Role", user.role_display_name());
    print::aligned_line("Can manage users", format::yes_no(user.can_manage_users()));
}

fn print_notification(notification: &Notification) {
    print::tree_head(0, &notification.title);
    print::as_tree_one_level(format::notification_to_details(notification));
}
