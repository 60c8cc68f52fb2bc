//! Contacts use case: fetch a fresh batch and remember it as the roster

use std::sync::Arc;

use rolodex_domain::constants::MAX_FETCH_COUNT;
use rolodex_domain::{Contact, Result, RolodexError};
use tracing::{info, warn};

use super::ports::ContactSource;
use super::roster::ContactRoster;

/// Fetches contact batches and remembers the latest one
pub struct ContactsService {
    source: Arc<dyn ContactSource>,
    roster: Arc<ContactRoster>,
}

impl ContactsService {
    /// Service fetching from `source` and recording into `roster`
    pub fn new(source: Arc<dyn ContactSource>, roster: Arc<ContactRoster>) -> Self {
        Self { source, roster }
    }

    /// Fetch `count` contacts from the source and store them as the roster.
    ///
    /// A failure to store the roster is logged but does not fail the fetch;
    /// the contacts are still returned.
    pub async fn refresh(&self, count: u32) -> Result<Vec<Contact>> {
        if count == 0 || count > MAX_FETCH_COUNT {
            return Err(RolodexError::InvalidInput(format!(
                "contact count must be between 1 and {MAX_FETCH_COUNT}, got {count}"
            )));
        }

        let contacts = self.source.fetch_contacts(count).await?;
        info!(requested = count, received = contacts.len(), "fetched contacts");

        if let Err(err) = self.roster.save(&contacts).await {
            warn!(error = %err, "failed to store contact roster");
        }

        Ok(contacts)
    }

    /// Resolve `id` against the last fetched batch
    pub async fn find(&self, id: &str) -> Result<Contact> {
        self.roster.find(id).await
    }

    /// Roster updated by [`Self::refresh`]
    pub fn roster(&self) -> &ContactRoster {
        &self.roster
    }
}
