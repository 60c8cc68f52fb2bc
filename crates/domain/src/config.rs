//! Configuration structures
//!
//! Every section has defaults so partial config files are accepted. Loading
//! (env vars, file probing) lives in `rolodex-infra::config`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CONTACTS_BASE_URL, DEFAULT_EXPORT_DIR, DEFAULT_FETCH_COUNT,
    DEFAULT_HTTP_MAX_ATTEMPTS, DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_LOG_LEVEL, DEFAULT_STORAGE_DIR,
};
use crate::impl_domain_enum_conversions;

/// Top-level application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub contacts: ContactSourceConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Which key-value adapter backs the favorites store
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// One JSON file per key under `StorageConfig::path`
    #[default]
    File,
    /// Process-local map; nothing survives a restart
    Memory,
}

impl_domain_enum_conversions!(StorageBackend {
    File => "file",
    Memory => "memory",
});

/// Durable key-value storage settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,
    #[serde(default = "default_storage_path")]
    pub path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { backend: StorageBackend::default(), path: default_storage_path() }
    }
}

/// Remote random-user API settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSourceConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_fetch_count")]
    pub default_count: u32,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

impl Default for ContactSourceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            default_count: default_fetch_count(),
            timeout_seconds: default_timeout_seconds(),
            max_attempts: default_max_attempts(),
        }
    }
}

/// Favorites export settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_export_dir")]
    pub directory: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self { directory: default_export_dir() }
    }
}

/// Log filter used when `RUST_LOG` is not set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level() }
    }
}

fn default_storage_path() -> PathBuf {
    PathBuf::from(DEFAULT_STORAGE_DIR)
}

fn default_base_url() -> String {
    DEFAULT_CONTACTS_BASE_URL.to_string()
}

fn default_fetch_count() -> u32 {
    DEFAULT_FETCH_COUNT
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECS
}

fn default_max_attempts() -> u32 {
    DEFAULT_HTTP_MAX_ATTEMPTS
}

fn default_export_dir() -> PathBuf {
    PathBuf::from(DEFAULT_EXPORT_DIR)
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_yields_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.contacts.default_count, 10);
        assert_eq!(config.storage.backend, StorageBackend::File);
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config: Config =
            serde_json::from_str(r#"{ "contacts": { "default_count": 25 } }"#).unwrap();

        assert_eq!(config.contacts.default_count, 25);
        assert_eq!(config.contacts.base_url, DEFAULT_CONTACTS_BASE_URL);
        assert_eq!(config.contacts.max_attempts, DEFAULT_HTTP_MAX_ATTEMPTS);
    }

    #[test]
    fn storage_backend_parses_lowercase() {
        let config: Config =
            serde_json::from_str(r#"{ "storage": { "backend": "memory" } }"#).unwrap();
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!("Memory".parse::<StorageBackend>().unwrap(), StorageBackend::Memory);
    }
}
