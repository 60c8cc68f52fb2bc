//! Rolodex - contacts, favorites and favoriting activity from the terminal
//!
//! Main entry point for the command-line application.

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use rolodex_infra::config;
use rolodex_lib::commands::failure_message;
use rolodex_lib::utils::logging::init_tracing;
use rolodex_lib::{AppContext, Cli};

#[tokio::main]
async fn main() -> ExitCode {
    let dotenv = dotenvy::dotenv();
    let cli = Cli::parse();

    let config = match config::load_or_default(cli.config.clone()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = init_tracing(&config.logging.level) {
        eprintln!("warning: logging disabled: {err}");
    }

    match dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(err) => tracing::debug!(error = %err, "no .env file loaded"),
    }

    let context = match AppContext::new(config) {
        Ok(context) => context,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = std::io::stdout();
    let result = cli.command.execute(&context, &mut stdout, cli.json).await;
    let _ = stdout.flush();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", failure_message(&err));
            ExitCode::FAILURE
        }
    }
}
