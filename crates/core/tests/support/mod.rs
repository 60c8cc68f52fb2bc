//! Shared test helpers for `rolodex-core` integration tests.
//!
//! In-memory and failure-injecting implementations of the core ports so the
//! favorites, stats and export tests can focus on behaviour.

#![allow(dead_code)]

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rolodex_core::{ContactSource, ExportSink, KeyValueStore};
use rolodex_domain::{
    Contact, ContactName, ContactPicture, FavoritesExport, Result as DomainResult, RolodexError,
};

/// Build a contact with predictable fields derived from `id`.
pub fn contact(id: &str) -> Contact {
    Contact {
        id: id.to_string(),
        name: ContactName { first: "Test".into(), last: id.to_uppercase() },
        email: format!("{id}@example.com"),
        phone: "555-0100".into(),
        picture: ContactPicture {
            large: format!("https://example.com/{id}/large.jpg"),
            medium: format!("https://example.com/{id}/medium.jpg"),
            thumbnail: format!("https://example.com/{id}/thumb.jpg"),
        },
    }
}

/// In-memory key-value store that counts writes.
#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
    writes: Mutex<usize>,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Seed a raw blob, bypassing the service.
    pub fn with_blob(key: &str, blob: &str) -> Arc<Self> {
        let store = Self::default();
        store.values.lock().unwrap().insert(key.to_string(), blob.to_string());
        Arc::new(store)
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    pub fn write_count(&self) -> usize {
        *self.writes.lock().unwrap()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> DomainResult<Option<String>> {
        Ok(self.raw(key))
    }

    async fn set(&self, key: &str, value: &str) -> DomainResult<()> {
        *self.writes.lock().unwrap() += 1;
        self.values.lock().unwrap().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store whose reads and/or writes fail on demand.
#[derive(Default)]
pub struct FailingStore {
    pub fail_reads: bool,
    pub fail_writes: bool,
    inner: MemoryStore,
}

impl FailingStore {
    pub fn reads() -> Arc<Self> {
        Arc::new(Self { fail_reads: true, ..Self::default() })
    }

    pub fn writes() -> Arc<Self> {
        Arc::new(Self { fail_writes: true, ..Self::default() })
    }
}

#[async_trait]
impl KeyValueStore for FailingStore {
    async fn get(&self, key: &str) -> DomainResult<Option<String>> {
        if self.fail_reads {
            return Err(RolodexError::Storage("simulated read failure".into()));
        }
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> DomainResult<()> {
        if self.fail_writes {
            return Err(RolodexError::Storage("simulated write failure".into()));
        }
        self.inner.set(key, value).await
    }
}

/// Store that yields to the scheduler after taking its read snapshot, so two
/// concurrent read-modify-write sequences interleave deterministically.
#[derive(Default)]
pub struct InterleavingStore {
    inner: MemoryStore,
}

impl InterleavingStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.inner.raw(key)
    }
}

#[async_trait]
impl KeyValueStore for InterleavingStore {
    async fn get(&self, key: &str) -> DomainResult<Option<String>> {
        let snapshot = self.inner.raw(key);
        tokio::task::yield_now().await;
        Ok(snapshot)
    }

    async fn set(&self, key: &str, value: &str) -> DomainResult<()> {
        self.inner.set(key, value).await
    }
}

/// Contact source returning a fixed batch (truncated to the requested count)
/// or a fixed error.
pub struct StaticContactSource {
    result: DomainResult<Vec<Contact>>,
    pub calls: Mutex<Vec<u32>>,
}

impl StaticContactSource {
    pub fn ok(contacts: Vec<Contact>) -> Arc<Self> {
        Arc::new(Self { result: Ok(contacts), calls: Mutex::new(Vec::new()) })
    }

    pub fn failing(error: RolodexError) -> Arc<Self> {
        Arc::new(Self { result: Err(error), calls: Mutex::new(Vec::new()) })
    }
}

#[async_trait]
impl ContactSource for StaticContactSource {
    async fn fetch_contacts(&self, count: u32) -> DomainResult<Vec<Contact>> {
        self.calls.lock().unwrap().push(count);
        self.result
            .clone()
            .map(|contacts| contacts.into_iter().take(count as usize).collect())
    }
}

/// Export sink that keeps written documents in memory.
#[derive(Default)]
pub struct RecordingSink {
    pub written: Mutex<Vec<(String, FavoritesExport)>>,
}

#[async_trait]
impl ExportSink for RecordingSink {
    async fn write(&self, file_name: &str, export: &FavoritesExport) -> DomainResult<PathBuf> {
        self.written.lock().unwrap().push((file_name.to_string(), export.clone()));
        Ok(PathBuf::from("/virtual").join(file_name))
    }
}
