//! Skewcheck - package version checks for bundler builds
//!
//! Command line front end: reads build statistics from disk, runs the
//! version check and reports through the terminal.

use std::process::ExitCode;

use clap::Parser;

mod cli;
mod commands;
mod logging;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init_tracing(cli.log_level) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    let result = match cli.command {
        Commands::Check(args) => commands::check::run(args).await,
        Commands::Version => {
            commands::version::run();
            Ok(false)
        }
        Commands::Completions(args) => {
            commands::completions::run(&args);
            Ok(false)
        }
    };

    match result {
        Ok(false) => ExitCode::SUCCESS,
        Ok(true) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{:?}", miette::Report::new(e));
            ExitCode::from(2)
        }
    }
}
