//! Port interfaces for favorites persistence
//!
//! These traits define the boundaries between core business logic
//! and infrastructure implementations.

use async_trait::async_trait;
use rolodex_domain::Result;

/// Durable key-value storage holding one string blob per key.
///
/// Writes replace the whole value. Implementations must not leave a
/// partially written value behind when `set` fails.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the blob stored under `key`, `None` if the key was never written
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the blob stored under `key`
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}
