//! Small utilities shared across Rolodex crates.
//!
//! # Feature Tiers
//!
//! - default: wall-clock abstraction ([`Clock`], [`SystemClock`],
//!   [`MockClock`])
//! - `test-utils`: temporary directory helpers for integration tests

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

pub mod time;

// Testing utilities
// ---------------------------------------------------------------
#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use time::{Clock, MockClock, SystemClock};
