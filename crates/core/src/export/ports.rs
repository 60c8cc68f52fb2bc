//! Port interfaces for writing favorites exports

use std::path::PathBuf;

use async_trait::async_trait;
use rolodex_domain::{FavoritesExport, Result};

/// Destination for a serialized favorites export
#[async_trait]
pub trait ExportSink: Send + Sync {
    /// Write `export` under `file_name` and return where it landed
    async fn write(&self, file_name: &str, export: &FavoritesExport) -> Result<PathBuf>;
}
