//! Favorites store - core business logic
//!
//! The whole collection lives in one blob under one key. Every mutation reads
//! the blob, modifies it in memory, and writes the full result back.
//!
//! # Concurrency
//!
//! By default nothing guards that read-modify-write sequence: two mutations
//! racing on the same key can both read the same snapshot and the last write
//! wins. [`FavoritesService::with_serialized_writes`] puts every mutation
//! behind a single in-process mutex so callers sharing one service instance
//! never lose updates.

use std::sync::Arc;

use rolodex_common::Clock;
use rolodex_domain::constants::FAVORITES_KEY;
use rolodex_domain::{Contact, FavoriteEntry, FavoritesCollection, Result, RolodexError};
use tokio::sync::{Mutex, MutexGuard};
use tracing::{debug, error, info, warn};

use super::ports::KeyValueStore;

/// Favorites store service
pub struct FavoritesService {
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    key: String,
    write_lock: Option<Mutex<()>>,
}

impl FavoritesService {
    /// Create a new favorites service persisting under the default key
    pub fn new(store: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock, key: FAVORITES_KEY.to_string(), write_lock: None }
    }

    /// Persist under a different storage key
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Configure whether mutations are serialized through one in-process
    /// queue.
    ///
    /// Disabled by default, which keeps last-write-wins semantics for
    /// concurrent mutations.
    pub fn with_serialized_writes(mut self, enabled: bool) -> Self {
        self.write_lock = enabled.then(|| Mutex::new(()));
        self
    }

    /// Storage key the collection is persisted under
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the persisted collection.
    ///
    /// Never fails: a missing key, a storage read error, or a malformed blob
    /// all yield an empty collection. The latter two are logged.
    pub async fn list(&self) -> FavoritesCollection {
        let blob = match self.store.get(&self.key).await {
            Ok(Some(blob)) => blob,
            Ok(None) => {
                debug!(key = %self.key, "no favorites stored yet");
                return FavoritesCollection::new();
            }
            Err(err) => {
                warn!(key = %self.key, error = %err, "failed to read favorites; using empty list");
                return FavoritesCollection::new();
            }
        };

        match serde_json::from_str::<FavoritesCollection>(&blob) {
            Ok(favorites) => favorites,
            Err(err) => {
                warn!(
                    key = %self.key,
                    error = %err,
                    "stored favorites are malformed; using empty list"
                );
                FavoritesCollection::new()
            }
        }
    }

    /// Whether `id` is currently favorited
    pub async fn is_favorite(&self, id: &str) -> Result<bool> {
        validate_id(id)?;
        Ok(self.list().await.contains(id))
    }

    /// The stored entry for `id`, if favorited
    pub async fn get(&self, id: &str) -> Result<Option<FavoriteEntry>> {
        validate_id(id)?;
        Ok(self.list().await.get(id).cloned())
    }

    /// Number of favorites currently stored
    pub async fn count(&self) -> usize {
        self.list().await.len()
    }

    /// Favorite `contact`, stamping it with the current time.
    ///
    /// Idempotent: an already-favorited id is left untouched, including its
    /// original timestamp, and nothing is written.
    pub async fn add(&self, contact: &Contact) -> Result<()> {
        validate_id(&contact.id)?;
        let _guard = self.lock_writes().await;
        self.add_unlocked(contact).await
    }

    /// Unfavorite `id`. Absent ids are a no-op and nothing is written.
    pub async fn remove(&self, id: &str) -> Result<()> {
        validate_id(id)?;
        let _guard = self.lock_writes().await;
        self.remove_unlocked(id).await
    }

    /// Invert membership of `contact` and return the new state
    /// (`true` = now favorited).
    pub async fn toggle(&self, contact: &Contact) -> Result<bool> {
        validate_id(&contact.id)?;
        let _guard = self.lock_writes().await;

        if self.list().await.contains(&contact.id) {
            self.remove_unlocked(&contact.id).await?;
            Ok(false)
        } else {
            self.add_unlocked(contact).await?;
            Ok(true)
        }
    }

    async fn add_unlocked(&self, contact: &Contact) -> Result<()> {
        let mut favorites = self.list().await;
        let entry = FavoriteEntry::new(contact.clone(), self.clock.now_millis());

        if !favorites.insert(entry) {
            debug!(contact_id = %contact.id, "contact already favorited");
            return Ok(());
        }

        self.persist(&favorites).await?;
        info!(contact_id = %contact.id, total = favorites.len(), "favorite added");
        Ok(())
    }

    async fn remove_unlocked(&self, id: &str) -> Result<()> {
        let mut favorites = self.list().await;

        if favorites.remove(id).is_none() {
            debug!(contact_id = %id, "contact was not a favorite");
            return Ok(());
        }

        self.persist(&favorites).await?;
        info!(contact_id = %id, total = favorites.len(), "favorite removed");
        Ok(())
    }

    async fn persist(&self, favorites: &FavoritesCollection) -> Result<()> {
        let blob = serde_json::to_string(favorites).map_err(|err| {
            RolodexError::Serialization(format!("failed to encode favorites: {err}"))
        })?;

        self.store.set(&self.key, &blob).await.map_err(|err| {
            error!(key = %self.key, error = %err, "failed to persist favorites");
            err
        })
    }

    async fn lock_writes(&self) -> Option<MutexGuard<'_, ()>> {
        match &self.write_lock {
            Some(lock) => Some(lock.lock().await),
            None => None,
        }
    }
}

fn validate_id(id: &str) -> Result<()> {
    if id.trim().is_empty() {
        return Err(RolodexError::InvalidInput("contact id must not be empty".into()));
    }
    Ok(())
}
