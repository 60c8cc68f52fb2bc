//! Filesystem sink for favorites exports

use std::path::PathBuf;

use async_trait::async_trait;
use rolodex_core::ExportSink;
use rolodex_domain::{FavoritesExport, Result};
use tokio::fs;
use tracing::debug;

use crate::errors::InfraError;

/// Writes pretty-printed export documents into one directory
#[derive(Debug, Clone)]
pub struct FileExportWriter {
    directory: PathBuf,
}

impl FileExportWriter {
    /// Writer targeting `directory`, created on first export
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self { directory: directory.into() }
    }
}

#[async_trait]
impl ExportSink for FileExportWriter {
    async fn write(&self, file_name: &str, export: &FavoritesExport) -> Result<PathBuf> {
        let document = serde_json::to_string_pretty(export).map_err(InfraError::from)?;

        fs::create_dir_all(&self.directory).await.map_err(InfraError::from)?;
        let path = self.directory.join(file_name);
        fs::write(&path, document).await.map_err(InfraError::from)?;

        debug!(path = %path.display(), "wrote favorites export");
        Ok(path)
    }
}
