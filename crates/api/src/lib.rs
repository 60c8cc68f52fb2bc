//! # Rolodex application
//!
//! Command-line front end over the favorites store and the activity stats
//! engine. `main.rs` parses arguments and hands off to [`commands`]; every
//! service is built once in [`AppContext`].

pub mod cli;
pub mod commands;
pub mod context;
pub mod utils;

pub use cli::Cli;
pub use context::AppContext;
