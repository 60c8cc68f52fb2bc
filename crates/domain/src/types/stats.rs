//! Favoriting activity statistics types

use serde::{Deserialize, Serialize};

/* -------------------------------------------------------------------------- */
/* Hourly Histogram */
/* -------------------------------------------------------------------------- */

/// Favorites recorded during one local hour-of-day inside the trailing
/// window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyBucket {
    /// Local wall-clock hour, 0-23
    pub hour: u32,
    /// Favorites whose local hour equals `hour`
    pub count: u32,
}

impl HourlyBucket {
    /// Bucket for `hour` with nothing counted yet
    pub fn empty(hour: u32) -> Self {
        Self { hour, count: 0 }
    }
}

/* -------------------------------------------------------------------------- */
/* Summary */
/* -------------------------------------------------------------------------- */

/// Everything the stats view shows in one value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivitySummary {
    /// Six buckets, oldest hour first
    pub buckets: Vec<HourlyBucket>,

    /// Sum of bucket counts
    pub total_in_window: u32,

    /// Size of the whole favorites collection, inside the window or not
    pub total_favorites: usize,

    /// Hour with the most favorites; `None` when the window is empty
    pub peak_hour: Option<u32>,
}
