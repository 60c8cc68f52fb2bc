use std::io::Write;
use std::time::Instant;

use clap::Subcommand;
use rolodex_domain::RolodexError;
use serde::Serialize;
use tracing::warn;

use crate::utils::logging::{error_label, log_command_execution};
use crate::AppContext;

pub mod contacts;
pub mod export;
pub mod favorites;
pub mod stats;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch a fresh batch of contacts and list them
    Contacts(contacts::Command),
    /// Manage favorite contacts
    #[command(subcommand)]
    Favorites(favorites::Command),
    /// Show when favorites were added over the last six hours
    Stats,
    /// Write the favorites to a dated JSON file
    Export(export::Command),
}

impl Command {
    /// Stable identifier for logging
    pub fn name(&self) -> &'static str {
        match self {
            Self::Contacts(_) => "contacts",
            Self::Favorites(command) => command.name(),
            Self::Stats => "stats",
            Self::Export(_) => "export",
        }
    }

    /// Run the command, writing its output to `out`.
    pub async fn execute<W: Write>(
        self,
        context: &AppContext,
        out: &mut W,
        json: bool,
    ) -> anyhow::Result<()> {
        let name = self.name();
        let started = Instant::now();

        let result = match self {
            Self::Contacts(o) => contacts::handle(o, context, out, json).await,
            Self::Favorites(o) => favorites::handle(o, context, out, json).await,
            Self::Stats => stats::handle(context, out, json).await,
            Self::Export(o) => export::handle(o, context, out, json).await,
        };

        log_command_execution(name, started.elapsed(), result.is_ok());
        if let Some(error) = result.as_ref().err().and_then(|e| e.downcast_ref::<RolodexError>()) {
            warn!(
                command = name,
                error_type = error_label(error),
                error = %error,
                "command failed"
            );
        }

        result
    }
}

const RETRY_HINT: &str = "The contact source may be temporarily unavailable. Please try again.";

/// Message printed for a failed command.
///
/// Retryable failures carry a hint so the user knows the same command may
/// succeed later.
pub fn failure_message(error: &anyhow::Error) -> String {
    match error.downcast_ref::<RolodexError>() {
        Some(domain) if domain.is_retryable() => format!("{error:#}\n{RETRY_HINT}"),
        _ => format!("{error:#}"),
    }
}

/// Pretty JSON followed by a newline
pub(crate) fn write_json<W: Write, T: Serialize + ?Sized>(
    out: &mut W,
    value: &T,
) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
