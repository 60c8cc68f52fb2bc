//! Standalone favorites export document
//!
//! Write-once and human readable. Nothing in the application reads it back.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoritesExport {
    /// ISO-8601 instant of the export
    pub export_date: String,
    pub total_favorites: usize,
    pub favorites: Vec<ExportedContact>,
}

/// Flattened per-contact summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedContact {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// ISO-8601 instant the contact was favorited
    pub favorited_at: String,
}
