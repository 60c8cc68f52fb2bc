//! Top-level argument parsing

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Command;

#[derive(Parser, Debug)]
#[command(
    name = "rolodex",
    version,
    about = "Browse generated contacts, keep favorites and see when you favorited them"
)]
pub struct Cli {
    /// Read configuration from this file instead of the environment or the
    /// standard locations
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
