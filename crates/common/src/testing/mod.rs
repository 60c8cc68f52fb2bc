//! Testing utilities and helpers
//!
//! - **[`temp`]**: Temporary directory helpers

pub mod temp;

pub use temp::TempDir;
