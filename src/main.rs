//! # Command Line Interface
//!
//! The subcommands are in the `commands` module of the library.

mod cli;

use env_logger;
#[cfg(windows)]
use colored;
use log::error;
use tqkit::commands;
use tqkit::commands::CommandError;

fn main() -> Result<(),Box<dyn std::error::Error>>
{
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    #[cfg(windows)]
    let _ = colored::control::set_virtual_terminal(true);

    let main_cmd = cli::build_cli();
    let matches = main_cmd.clone().get_matches();

    match matches.subcommand() {
        Some(("scan",cmd)) => commands::langx::scan(cmd),
        Some(("verify",cmd)) => commands::langx::verify(cmd),
        Some(("correct",cmd)) => commands::langx::correct(cmd),
        Some(("completions",cmd)) => commands::completions::generate(main_cmd,cmd),
        _ => {
            error!("No subcommand was found, try `tqkit --help`");
            Err(Box::new(CommandError::InvalidCommand))
        }
    }
}
