//! Favorites export: flattened, human-readable snapshot of the collection

pub mod ports;

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use rolodex_common::Clock;
use rolodex_domain::constants::EXPORT_FILE_PREFIX;
use rolodex_domain::{
    ExportedContact, FavoriteEntry, FavoritesCollection, FavoritesExport, Result, RolodexError,
};
use tracing::info;

use self::ports::ExportSink;
use crate::favorites::FavoritesService;

/// Build the export document for `favorites` as of `exported_at`.
///
/// # Errors
/// `InvalidInput` when there is nothing to export, `Serialization` when an
/// entry's timestamp has no calendar representation.
pub fn build_export(
    favorites: &FavoritesCollection,
    exported_at: DateTime<Utc>,
) -> Result<FavoritesExport> {
    if favorites.is_empty() {
        return Err(RolodexError::InvalidInput("no favorite contacts to export".into()));
    }

    let exported = favorites.iter().map(exported_contact).collect::<Result<Vec<_>>>()?;

    Ok(FavoritesExport {
        export_date: iso_timestamp(exported_at),
        total_favorites: favorites.len(),
        favorites: exported,
    })
}

/// `favorites_export_YYYY-MM-DD.json`, dated in UTC
pub fn export_file_name(exported_at: DateTime<Utc>) -> String {
    format!("{EXPORT_FILE_PREFIX}{}.json", exported_at.format("%Y-%m-%d"))
}

fn exported_contact(entry: &FavoriteEntry) -> Result<ExportedContact> {
    let favorited_at =
        Utc.timestamp_millis_opt(entry.favorited_at).single().map(iso_timestamp).ok_or_else(|| {
            RolodexError::Serialization(format!(
                "favorite {} has an out-of-range timestamp {}",
                entry.id, entry.favorited_at
            ))
        })?;

    Ok(ExportedContact {
        id: entry.contact.id.clone(),
        name: entry.contact.full_name(),
        email: entry.contact.email.clone(),
        phone: entry.contact.phone.clone(),
        favorited_at,
    })
}

fn iso_timestamp(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Export use case: snapshot the favorites and hand them to a sink
pub struct FavoritesExporter {
    favorites: Arc<FavoritesService>,
    sink: Arc<dyn ExportSink>,
    clock: Arc<dyn Clock>,
}

impl FavoritesExporter {
    pub fn new(
        favorites: Arc<FavoritesService>,
        sink: Arc<dyn ExportSink>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { favorites, sink, clock }
    }

    /// Write the current favorites and return the written location
    pub async fn export(&self) -> Result<PathBuf> {
        let now = self.clock.now();
        let favorites = self.favorites.list().await;
        let document = build_export(&favorites, now)?;

        let location = self.sink.write(&export_file_name(now), &document).await?;
        info!(
            total = document.total_favorites,
            location = %location.display(),
            "exported favorites"
        );
        Ok(location)
    }
}

#[cfg(test)]
mod tests {
    use rolodex_domain::{Contact, ContactName, ContactPicture};

    use super::*;

    fn entry(id: &str, first: &str, last: &str, favorited_at: i64) -> FavoriteEntry {
        let contact = Contact {
            id: id.to_string(),
            name: ContactName { first: first.into(), last: last.into() },
            email: format!("{id}@example.com"),
            phone: "555-0100".into(),
            picture: ContactPicture::default(),
        };
        FavoriteEntry::new(contact, favorited_at)
    }

    #[test]
    fn empty_collection_is_rejected() {
        let err = build_export(&FavoritesCollection::new(), Utc::now()).unwrap_err();
        assert!(matches!(err, RolodexError::InvalidInput(_)));
    }

    #[test]
    fn flattens_entries_in_order() {
        let exported_at = Utc.with_ymd_and_hms(2024, 5, 1, 14, 0, 0).unwrap();
        let favorites: FavoritesCollection = vec![
            entry("u1", "Ada", "Lovelace", exported_at.timestamp_millis() - 1_500),
            entry("u2", "Grace", "Hopper", 0),
        ]
        .into();

        let document = build_export(&favorites, exported_at).unwrap();

        assert_eq!(document.export_date, "2024-05-01T14:00:00.000Z");
        assert_eq!(document.total_favorites, 2);
        assert_eq!(document.favorites[0].name, "Ada Lovelace");
        assert_eq!(document.favorites[0].favorited_at, "2024-05-01T13:59:58.500Z");
        assert_eq!(document.favorites[1].id, "u2");
        assert_eq!(document.favorites[1].favorited_at, "1970-01-01T00:00:00.000Z");
    }

    #[test]
    fn unrepresentable_timestamp_fails_the_export() {
        let mut broken = entry("u2", "Grace", "Hopper", 0);
        broken.favorited_at = i64::MAX;
        let favorites: FavoritesCollection =
            vec![entry("u1", "Ada", "Lovelace", 0), broken].into();

        let err = build_export(&favorites, Utc::now()).unwrap_err();

        match err {
            RolodexError::Serialization(msg) => assert!(msg.contains("u2")),
            other => panic!("expected serialization error, got {other:?}"),
        }
    }

    #[test]
    fn document_uses_camel_case_keys() {
        let favorites: FavoritesCollection = vec![entry("u1", "Ada", "Lovelace", 0)].into();
        let document = build_export(&favorites, Utc::now()).unwrap();

        let value = serde_json::to_value(&document).unwrap();

        assert!(value.get("exportDate").is_some());
        assert_eq!(value["totalFavorites"], 1);
        assert!(value["favorites"][0].get("favoritedAt").is_some());
    }

    #[test]
    fn file_name_is_dated() {
        let exported_at = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 0).unwrap();
        assert_eq!(export_file_name(exported_at), "favorites_export_2024-12-31.json");
    }
}
