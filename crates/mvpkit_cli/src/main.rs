//! `mvpkit` entry point.
//!
//! # Responsibility
//! - Parse arguments, bootstrap logging, dispatch to command handlers.
//! - Report failures on stderr with a non-zero exit code.

mod cli;
mod cmd;
mod feed;

use clap::Parser;
use cli::{Cli, Commands};
use mvpkit_core::{default_log_level, init_logging};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_ref() {
        let level = cli.log_level.as_deref().unwrap_or_else(|| default_log_level());
        if let Err(err) = init_logging(level, log_dir) {
            eprintln!("warning: logging disabled: {err}");
        }
    }

    let result = match cli.command {
        Commands::Posts(command) => cmd::run_post_command(&cli.db, command).await,
        Commands::Task(command) => cmd::run_task_command(&cli.db, command),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
