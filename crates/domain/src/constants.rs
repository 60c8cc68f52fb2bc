//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Persistence keys
pub const FAVORITES_KEY: &str = "contact_favorites";
pub const ROSTER_KEY: &str = "contact_roster";

// Activity stats window
pub const STATS_WINDOW_HOURS: u32 = 6;
pub const HOURS_PER_DAY: u32 = 24;

// Contact source
pub const DEFAULT_CONTACTS_BASE_URL: &str = "https://randomuser.me";
pub const DEFAULT_FETCH_COUNT: u32 = 10;
pub const MAX_FETCH_COUNT: u32 = 5000;
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_HTTP_MAX_ATTEMPTS: u32 = 3;

// Export
pub const EXPORT_FILE_PREFIX: &str = "favorites_export_";
pub const DEFAULT_EXPORT_DIR: &str = "exports";

// Storage
pub const DEFAULT_STORAGE_DIR: &str = ".rolodex";
pub const DEFAULT_LOG_LEVEL: &str = "info";
