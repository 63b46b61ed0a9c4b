//! Release Prep CLI
//!
//! Checks that a logme source tree is ready for a release and optionally
//! brings the project files up to date.

mod cli;
mod commands;
mod error;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::Cli;
use commands::ReleaseArgs;
use error::Result;

fn main() {
    let code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", "ERROR".red().bold(), e);
            e.exit_code()
        }
    };
    std::process::exit(code);
}

fn run() -> Result<i32> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    let Some(version) = cli.version.as_deref() else {
        Cli::command().write_help(&mut std::io::stderr())?;
        eprintln!("\n{}: missing required argument: version", "ERROR".red().bold());
        return Ok(2);
    };

    commands::run_release(&ReleaseArgs {
        root: &cli.root,
        version,
        update: cli.update,
        json: cli.json,
    })
}
