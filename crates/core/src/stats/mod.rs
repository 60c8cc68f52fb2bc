//! Activity stats engine: trailing 6-hour histogram of favoriting activity

pub mod engine;
pub mod service;

pub use engine::{compute_hourly_stats, format_hour, peak_bucket, summarize, total_in_window};
pub use service::ActivityStatsService;
