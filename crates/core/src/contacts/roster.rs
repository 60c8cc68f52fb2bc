//! The last batch of fetched contacts
//!
//! Favoriting needs the full contact snapshot, but a command-line front end
//! only has an id between invocations. The roster keeps the most recent batch
//! under its own key so ids can be resolved back to contacts. It is replaced
//! wholesale on every fetch and never served instead of fetching.

use std::sync::Arc;

use rolodex_domain::constants::ROSTER_KEY;
use rolodex_domain::{Contact, Result, RolodexError};
use tracing::warn;

use crate::favorites::ports::KeyValueStore;

/// Most recently fetched contacts, persisted under `contact_roster`
pub struct ContactRoster {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl ContactRoster {
    /// Roster kept in `store`
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store, key: ROSTER_KEY.to_string() }
    }

    /// Replace the roster with `contacts`
    pub async fn save(&self, contacts: &[Contact]) -> Result<()> {
        let blob = serde_json::to_string(contacts).map_err(|err| {
            RolodexError::Serialization(format!("failed to encode contact roster: {err}"))
        })?;
        self.store.set(&self.key, &blob).await
    }

    /// Last saved batch; empty when nothing (readable) was saved
    pub async fn load(&self) -> Vec<Contact> {
        match self.store.get(&self.key).await {
            Ok(Some(blob)) => serde_json::from_str(&blob).unwrap_or_else(|err| {
                warn!(key = %self.key, error = %err, "contact roster is malformed; ignoring it");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(key = %self.key, error = %err, "failed to read contact roster");
                Vec::new()
            }
        }
    }

    /// Contact with `id` from the last batch
    pub async fn find(&self, id: &str) -> Result<Contact> {
        self.load().await.into_iter().find(|contact| contact.id == id).ok_or_else(|| {
            RolodexError::NotFound(format!(
                "contact '{id}' is not in the last fetched batch"
            ))
        })
    }
}
