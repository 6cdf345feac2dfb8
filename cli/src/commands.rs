pub mod demo;
pub mod prefs;
pub mod send;
pub mod summary;

use clap::{ArgAction, Parser, Subcommand};
use herald_common::models::notification::{NotificationType, Priority};
use herald_common::models::role::Role;

#[derive(Parser)]
#[command(name = "herald")]
#[command(about = "Validate users and send them notifications.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Reduce output (-q drops banner and headers, -qq only prints outcomes)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the built-in demonstration
    #[command(alias = "d")]
    Demo,
    /// Send a notification to a user
    #[command(alias = "s")]
    Send(SendArgs),
    /// Summarize a list of notifications
    #[command(alias = "y")]
    Summary {
        /// A notification as TITLE:PRIORITY, may be repeated
        #[arg(long = "item", value_parser = summary::parse_item)]
        items: Vec<(String, Priority)>,
    },
    /// Show a user's notification preferences
    #[command(alias = "p")]
    Prefs {
        #[arg(long, default_value = "u1")]
        user_id: String,
        /// Channel the user opted into, may be repeated
        #[arg(long = "enable")]
        enabled: Vec<NotificationType>,
    },
}

#[derive(clap::Args)]
pub struct SendArgs {
    #[arg(long, default_value = "u1")]
    pub id: String,
    #[arg(long, default_value = "Bob")]
    pub name: String,
    #[arg(long, default_value = "bob@example.com")]
    pub email: String,
    /// admin, member or guest
    #[arg(long, default_value = "member")]
    pub role: Role,
    #[arg(long)]
    pub title: String,
    #[arg(long, default_value = "")]
    pub body: String,
    /// email, push or sms
    #[arg(long = "type", default_value = "email")]
    pub notification_type: NotificationType,
    /// low, medium or high
    #[arg(long, default_value = "medium")]
    pub priority: Priority,
    /// Channel the user opted out of, may be repeated
    #[arg(long = "mute")]
    pub muted: Vec<NotificationType>,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
