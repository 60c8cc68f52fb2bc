//! Activity stats service - binds the engine to the favorites store

use std::sync::Arc;

use chrono::{Local, TimeZone};
use rolodex_common::Clock;
use rolodex_domain::{ActivitySummary, HourlyBucket};
use tracing::debug;

use super::engine::{compute_hourly_stats, summarize};
use crate::favorites::FavoritesService;

/// Derives favoriting statistics from the current favorites collection
pub struct ActivityStatsService {
    favorites: Arc<FavoritesService>,
    clock: Arc<dyn Clock>,
}

impl ActivityStatsService {
    /// Stats over `favorites`, with `clock` supplying the current hour
    pub fn new(favorites: Arc<FavoritesService>, clock: Arc<dyn Clock>) -> Self {
        Self { favorites, clock }
    }

    /// Six hourly buckets ending at the current local hour
    pub async fn hourly_stats(&self) -> Vec<HourlyBucket> {
        self.hourly_stats_in(&Local).await
    }

    /// Histogram, window total, overall total and peak hour in local time
    pub async fn summary(&self) -> ActivitySummary {
        self.summary_in(&Local).await
    }

    /// [`Self::hourly_stats`] evaluated in an explicit time zone
    pub async fn hourly_stats_in<Tz: TimeZone>(&self, zone: &Tz) -> Vec<HourlyBucket> {
        let favorites = self.favorites.list().await;
        let now = self.clock.now().with_timezone(zone);
        compute_hourly_stats(&now, favorites.entries())
    }

    /// [`Self::summary`] evaluated in an explicit time zone
    pub async fn summary_in<Tz: TimeZone>(&self, zone: &Tz) -> ActivitySummary {
        let favorites = self.favorites.list().await;
        let now = self.clock.now().with_timezone(zone);
        let summary = summarize(&now, favorites.entries());

        debug!(
            total_favorites = summary.total_favorites,
            total_in_window = summary.total_in_window,
            peak_hour = ?summary.peak_hour,
            "computed activity summary"
        );

        summary
    }
}
