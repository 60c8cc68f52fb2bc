use std::io::Write;

use rolodex_core::format_hour;
use serde::Serialize;

use super::write_json;
use crate::AppContext;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BucketView {
    hour: u32,
    label: String,
    count: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatsView {
    buckets: Vec<BucketView>,
    total_in_window: u32,
    total_favorites: usize,
    peak_hour: Option<String>,
}

const BAR_WIDTH: u32 = 20;

pub async fn handle<W: Write>(context: &AppContext, out: &mut W, json: bool) -> anyhow::Result<()> {
    let summary = context.stats.summary().await;

    let view = StatsView {
        buckets: summary
            .buckets
            .iter()
            .map(|bucket| BucketView {
                hour: bucket.hour,
                label: format_hour(bucket.hour),
                count: bucket.count,
            })
            .collect(),
        total_in_window: summary.total_in_window,
        total_favorites: summary.total_favorites,
        peak_hour: summary.peak_hour.map(format_hour),
    };

    if json {
        return write_json(out, &view);
    }

    writeln!(out, "Favorites added in the last 6 hours")?;
    for bucket in &view.buckets {
        let bar = "#".repeat(bucket.count.min(BAR_WIDTH) as usize);
        writeln!(out, "{:>5}  {:<20} {}", bucket.label, bar, bucket.count)?;
    }
    writeln!(out)?;
    writeln!(out, "In window:       {}", view.total_in_window)?;
    writeln!(out, "Total favorites: {}", view.total_favorites)?;
    writeln!(out, "Peak hour:       {}", view.peak_hour.as_deref().unwrap_or("N/A"))?;
    Ok(())
}
