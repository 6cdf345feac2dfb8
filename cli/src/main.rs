mod commands;
mod terminal;

use commands::{CommandLine, Commands, demo, prefs, send, summary};
use herald_common::config::Config;
use herald_core::manager::NotificationManager;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        quiet: commands.quiet,
        no_banner: commands.no_banner,
    };

    logging::init_logging(&cfg)?;
    print::banner(&cfg);

    let manager = NotificationManager::default();

    let outcome = match commands.command.unwrap_or(Commands::Demo) {
        Commands::Demo => {
            print::header("demonstration", &cfg);
            demo::demo(&manager, &cfg);
            Ok(())
        }
        Commands::Send(args) => {
            print::header("sending notification", &cfg);
            send::send(&manager, args, &cfg)
        }
        Commands::Summary { items } => {
            print::header("summary", &cfg);
            summary::summary(&manager, items, &cfg);
            Ok(())
        }
        Commands::Prefs { user_id, enabled } => {
            print::header("preferences", &cfg);
            prefs::prefs(&user_id, &enabled, &cfg);
            Ok(())
        }
    };

    print::end_of_program(&cfg);
    outcome
}
