//! Integration tests for the contacts use case, the roster and exporting

mod support;

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use rolodex_common::MockClock;
use rolodex_core::{ContactRoster, ContactsService, FavoritesExporter, FavoritesService};
use rolodex_domain::constants::ROSTER_KEY;
use rolodex_domain::RolodexError;
use support::{contact, MemoryStore, RecordingSink, StaticContactSource};

#[tokio::test]
async fn refresh_returns_contacts_and_saves_roster() {
    let store = MemoryStore::new();
    let source = StaticContactSource::ok(vec![contact("u1"), contact("u2"), contact("u3")]);
    let contacts =
        ContactsService::new(source.clone(), Arc::new(ContactRoster::new(store.clone())));

    let fetched = contacts.refresh(2).await.unwrap();

    assert_eq!(fetched.len(), 2);
    assert_eq!(*source.calls.lock().unwrap(), vec![2]);
    assert!(store.raw(ROSTER_KEY).is_some());
    assert_eq!(contacts.find("u2").await.unwrap(), contact("u2"));
}

#[tokio::test]
async fn every_refresh_hits_the_source_and_replaces_roster() {
    let store = MemoryStore::new();
    let source = StaticContactSource::ok(vec![contact("u1"), contact("u2")]);
    let contacts =
        ContactsService::new(source.clone(), Arc::new(ContactRoster::new(store.clone())));

    contacts.refresh(2).await.unwrap();
    contacts.refresh(1).await.unwrap();

    assert_eq!(*source.calls.lock().unwrap(), vec![2, 1]);
    let err = contacts.find("u2").await.unwrap_err();
    assert!(matches!(err, RolodexError::NotFound(_)));
}

#[tokio::test]
async fn refresh_rejects_out_of_range_counts() {
    let source = StaticContactSource::ok(vec![contact("u1")]);
    let contacts =
        ContactsService::new(source.clone(), Arc::new(ContactRoster::new(MemoryStore::new())));

    assert!(matches!(contacts.refresh(0).await, Err(RolodexError::InvalidInput(_))));
    assert!(matches!(contacts.refresh(10_000).await, Err(RolodexError::InvalidInput(_))));
    assert!(source.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn source_errors_propagate_and_keep_previous_roster() {
    let store = MemoryStore::new();
    ContactRoster::new(store.clone()).save(&[contact("kept")]).await.unwrap();
    let source = StaticContactSource::failing(RolodexError::Network("HTTP 503".into()));
    let contacts = ContactsService::new(source, Arc::new(ContactRoster::new(store)));

    let err = contacts.refresh(5).await.unwrap_err();

    assert!(err.is_retryable());
    assert_eq!(contacts.find("kept").await.unwrap().id, "kept");
}

#[tokio::test]
async fn malformed_roster_is_ignored() {
    let roster = ContactRoster::new(MemoryStore::with_blob(ROSTER_KEY, "[{]"));

    assert!(roster.load().await.is_empty());
}

#[tokio::test]
async fn exporter_writes_dated_document() {
    let clock = MockClock::new(Utc.with_ymd_and_hms(2024, 5, 1, 14, 0, 0).unwrap());
    let favorites = Arc::new(FavoritesService::new(MemoryStore::new(), Arc::new(clock.clone())));
    favorites.add(&contact("u1")).await.unwrap();
    favorites.add(&contact("u2")).await.unwrap();
    let sink = Arc::new(RecordingSink::default());
    let exporter = FavoritesExporter::new(favorites, sink.clone(), Arc::new(clock));

    let location = exporter.export().await.unwrap();

    assert!(location.ends_with("favorites_export_2024-05-01.json"));
    let written = sink.written.lock().unwrap();
    let (file_name, document) = &written[0];
    assert_eq!(file_name, "favorites_export_2024-05-01.json");
    assert_eq!(document.total_favorites, 2);
    assert_eq!(document.favorites[1].name, "Test U2");
    assert_eq!(document.favorites[0].favorited_at, "2024-05-01T14:00:00.000Z");
}

#[tokio::test]
async fn exporting_nothing_is_rejected_without_writing() {
    let favorites = Arc::new(FavoritesService::new(
        MemoryStore::new(),
        Arc::new(MockClock::at_millis(0)),
    ));
    let sink = Arc::new(RecordingSink::default());
    let exporter = FavoritesExporter::new(favorites, sink.clone(), Arc::new(MockClock::at_millis(0)));

    let err = exporter.export().await.unwrap_err();

    assert!(matches!(err, RolodexError::InvalidInput(_)));
    assert!(sink.written.lock().unwrap().is_empty());
}
