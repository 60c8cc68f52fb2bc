//! Hourly bucketing of favorite timestamps
//!
//! Buckets are keyed by local hour-of-day only, not by calendar date. A
//! favorite recorded 24 hours (or any whole number of days) before an
//! in-window hour lands in that hour's bucket as well. Callers that need
//! date-accurate counts must pre-filter the entries.

use chrono::{DateTime, TimeZone, Timelike};
use rolodex_domain::constants::{HOURS_PER_DAY, STATS_WINDOW_HOURS};
use rolodex_domain::{ActivitySummary, FavoriteEntry, HourlyBucket};

/// Build the trailing-window histogram ending at `now`'s hour.
///
/// Returns exactly six buckets, oldest hour first. Entry timestamps are
/// converted into `now`'s time zone before bucketing; timestamps outside
/// chrono's representable range are skipped.
pub fn compute_hourly_stats<Tz: TimeZone>(
    now: &DateTime<Tz>,
    entries: &[FavoriteEntry],
) -> Vec<HourlyBucket> {
    let current_hour = now.hour();
    let zone = now.timezone();

    let mut buckets: Vec<HourlyBucket> = (0..STATS_WINDOW_HOURS)
        .rev()
        .map(|offset| HourlyBucket::empty((current_hour + HOURS_PER_DAY - offset) % HOURS_PER_DAY))
        .collect();

    for entry in entries {
        let Some(favorited_hour) = hour_in_zone(entry.favorited_at, &zone) else {
            continue;
        };

        if hours_between(favorited_hour, current_hour) >= STATS_WINDOW_HOURS {
            continue;
        }

        if let Some(bucket) = buckets.iter_mut().find(|bucket| bucket.hour == favorited_hour) {
            bucket.count += 1;
        }
    }

    buckets
}

/// 12-hour clock label: `0 -> "12 AM"`, `13 -> "1 PM"`.
///
/// Hours past 23 wrap around the day.
pub fn format_hour(hour: u32) -> String {
    match hour % HOURS_PER_DAY {
        0 => "12 AM".to_string(),
        h @ 1..=11 => format!("{h} AM"),
        12 => "12 PM".to_string(),
        h => format!("{} PM", h - 12),
    }
}

/// Sum of all bucket counts
pub fn total_in_window(buckets: &[HourlyBucket]) -> u32 {
    buckets.iter().map(|bucket| bucket.count).sum()
}

/// Bucket with the highest count; the later bucket wins ties.
///
/// `None` when every bucket is empty.
pub fn peak_bucket(buckets: &[HourlyBucket]) -> Option<&HourlyBucket> {
    buckets
        .iter()
        .fold(None::<&HourlyBucket>, |best, bucket| match best {
            Some(current) if current.count > bucket.count => Some(current),
            _ => Some(bucket),
        })
        .filter(|bucket| bucket.count > 0)
}

/// Histogram plus derived totals for one point in time.
pub fn summarize<Tz: TimeZone>(now: &DateTime<Tz>, entries: &[FavoriteEntry]) -> ActivitySummary {
    let buckets = compute_hourly_stats(now, entries);
    let total_in_window = total_in_window(&buckets);
    let peak_hour = peak_bucket(&buckets).map(|bucket| bucket.hour);

    ActivitySummary { buckets, total_in_window, total_favorites: entries.len(), peak_hour }
}

fn hour_in_zone<Tz: TimeZone>(millis: i64, zone: &Tz) -> Option<u32> {
    zone.timestamp_millis_opt(millis).single().map(|instant| instant.hour())
}

fn hours_between(earlier: u32, later: u32) -> u32 {
    (later + HOURS_PER_DAY - earlier) % HOURS_PER_DAY
}
