//! Port interfaces for the remote contact source

use async_trait::async_trait;
use rolodex_domain::{Contact, Result};

/// Remote generator of contact records
#[async_trait]
pub trait ContactSource: Send + Sync {
    /// Fetch a fresh batch of `count` contacts.
    ///
    /// Every call is a full fetch; implementations must not cache.
    async fn fetch_contacts(&self, count: u32) -> Result<Vec<Contact>>;
}
