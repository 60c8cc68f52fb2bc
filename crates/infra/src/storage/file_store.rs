//! File-backed key-value store
//!
//! Each key maps to `{root}/{key}.json`. Writes go to a sibling temp file
//! that is then renamed over the target, so a crash mid-write leaves the
//! previous value intact.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use rolodex_core::KeyValueStore;
use rolodex_domain::{Result, RolodexError};
use tokio::fs;
use tracing::debug;

use crate::errors::InfraError;

#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    root: PathBuf,
}

impl FileKeyValueStore {
    /// Store rooted at `root`. The directory is created on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory holding the `{key}.json` files
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File holding `key`
    ///
    /// # Errors
    /// `InvalidInput` for keys that are empty or not made of ASCII
    /// alphanumerics, `_`, `-` and `.` (no leading dot).
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));

        if !valid {
            return Err(RolodexError::InvalidInput(format!("invalid storage key '{key}'")));
        }

        Ok(self.root.join(format!("{key}.json")))
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;

        match fs::read_to_string(&path).await {
            Ok(contents) => {
                debug!(key, path = %path.display(), bytes = contents.len(), "read stored value");
                Ok(Some(contents))
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(InfraError::from(err).into()),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        let staging = path.with_extension("json.tmp");

        fs::create_dir_all(&self.root).await.map_err(InfraError::from)?;
        fs::write(&staging, value).await.map_err(InfraError::from)?;

        if let Err(err) = fs::rename(&staging, &path).await {
            let _ = fs::remove_file(&staging).await;
            return Err(InfraError::from(err).into());
        }

        debug!(key, path = %path.display(), bytes = value.len(), "wrote stored value");
        Ok(())
    }
}
