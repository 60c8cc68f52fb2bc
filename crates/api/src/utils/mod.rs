//! Logging helpers shared by the binary and the command handlers

pub mod logging;
