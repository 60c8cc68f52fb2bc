//! # Rolodex Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port/adapter interfaces (traits) for storage, contact fetching, export
//! - The favorites store and the activity stats engine
//! - Use cases wiring them together
//!
//! ## Architecture Principles
//! - Only depends on `rolodex-common` and `rolodex-domain`
//! - No filesystem, HTTP, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod contacts;
pub mod export;
pub mod favorites;
pub mod stats;

// Re-export specific items to avoid ambiguity
pub use contacts::ports::ContactSource;
pub use contacts::{ContactRoster, ContactsService};
pub use export::ports::ExportSink;
pub use export::FavoritesExporter;
pub use favorites::ports::KeyValueStore;
pub use favorites::FavoritesService;
pub use rolodex_common::Clock;
pub use stats::{compute_hourly_stats, format_hour, peak_bucket, total_in_window};
pub use stats::ActivityStatsService;
