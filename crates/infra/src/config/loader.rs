//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If `ROLODEX_STORAGE_PATH` is missing, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `ROLODEX_STORAGE_PATH`: Storage directory (required for env loading)
//! - `ROLODEX_STORAGE_BACKEND`: `file` or `memory`
//! - `ROLODEX_API_BASE_URL`: Random-user API base URL
//! - `ROLODEX_FETCH_COUNT`: Contacts fetched per refresh
//! - `ROLODEX_HTTP_TIMEOUT`: HTTP timeout in seconds
//! - `ROLODEX_HTTP_MAX_ATTEMPTS`: Total HTTP attempts per request
//! - `ROLODEX_EXPORT_DIR`: Directory for favorites exports
//! - `ROLODEX_LOG_LEVEL`: Default log filter
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./rolodex.json` or `./rolodex.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. `../../config.json` or `../../config.toml` (grandparent directory)
//! 5. Relative to executable location

use std::path::{Path, PathBuf};
use std::str::FromStr;

use rolodex_domain::constants::MAX_FETCH_COUNT;
use rolodex_domain::{
    Config, ContactSourceConfig, ExportConfig, LoggingConfig, Result, RolodexError,
    StorageBackend, StorageConfig,
};

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If the required
/// variable is missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `RolodexError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - A value is out of range
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration for the command-line front end
///
/// An explicit `path` must exist and parse. Without one, environment
/// variables win when `ROLODEX_STORAGE_PATH` is set, then the first probed
/// config file, then [`Config::default`].
///
/// # Errors
/// Returns `RolodexError::Config` when the selected source is invalid. A
/// missing optional source is not an error.
pub fn load_or_default(path: Option<PathBuf>) -> Result<Config> {
    if path.is_some() {
        return load_from_file(path);
    }

    if std::env::var_os("ROLODEX_STORAGE_PATH").is_some() {
        return load_from_env();
    }

    match probe_config_paths() {
        Some(found) => load_from_file(Some(found)),
        None => {
            tracing::info!("No configuration found; using defaults");
            Ok(Config::default())
        }
    }
}

/// Load configuration from environment variables
///
/// `ROLODEX_STORAGE_PATH` must be present; every other variable falls back
/// to its default.
///
/// # Environment Variables
/// See module documentation for the complete list.
///
/// # Errors
/// Returns `RolodexError::Config` if the required variable is missing
/// or any variable has an invalid value.
pub fn load_from_env() -> Result<Config> {
    let storage_path = env_var("ROLODEX_STORAGE_PATH")?;
    let backend = match std::env::var("ROLODEX_STORAGE_BACKEND") {
        Ok(raw) => StorageBackend::from_str(&raw).map_err(RolodexError::Config)?,
        Err(_) => StorageBackend::default(),
    };

    let defaults = ContactSourceConfig::default();
    let base_url = std::env::var("ROLODEX_API_BASE_URL").unwrap_or(defaults.base_url);
    let default_count =
        env_parse("ROLODEX_FETCH_COUNT", "fetch count")?.unwrap_or(defaults.default_count);
    let timeout_seconds =
        env_parse("ROLODEX_HTTP_TIMEOUT", "HTTP timeout")?.unwrap_or(defaults.timeout_seconds);
    let max_attempts = env_parse("ROLODEX_HTTP_MAX_ATTEMPTS", "HTTP max attempts")?
        .unwrap_or(defaults.max_attempts);

    let export_dir = std::env::var("ROLODEX_EXPORT_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| ExportConfig::default().directory);
    let log_level =
        std::env::var("ROLODEX_LOG_LEVEL").unwrap_or_else(|_| LoggingConfig::default().level);

    validate(Config {
        storage: StorageConfig { backend, path: PathBuf::from(storage_path) },
        contacts: ContactSourceConfig { base_url, default_count, timeout_seconds, max_attempts },
        export: ExportConfig { directory: export_dir },
        logging: LoggingConfig { level: log_level },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Arguments
/// * `path` - Optional path to config file. If `None`, uses
///   [`probe_config_paths`].
///
/// # Errors
/// Returns `RolodexError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - A value is out of range
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(RolodexError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            RolodexError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| RolodexError::Config(format!("Failed to read config file: {}", e)))?;

    validate(parse_config(&contents, &config_path)?)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| RolodexError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| RolodexError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(RolodexError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Reject values the services would refuse at use time
fn validate(config: Config) -> Result<Config> {
    let count = config.contacts.default_count;
    if count == 0 || count > MAX_FETCH_COUNT {
        return Err(RolodexError::Config(format!(
            "contacts.default_count must be between 1 and {MAX_FETCH_COUNT}, got {count}"
        )));
    }

    if config.contacts.max_attempts == 0 {
        return Err(RolodexError::Config("contacts.max_attempts must be at least 1".into()));
    }

    if config.contacts.timeout_seconds == 0 {
        return Err(RolodexError::Config("contacts.timeout_seconds must be at least 1".into()));
    }

    if config.contacts.base_url.trim().is_empty() {
        return Err(RolodexError::Config("contacts.base_url must not be empty".into()));
    }

    if config.storage.path.as_os_str().is_empty() {
        return Err(RolodexError::Config("storage.path must not be empty".into()));
    }

    Ok(config)
}

/// Probe multiple paths for configuration files
///
/// Searches for config files in the following locations (in order):
/// 1. Current working directory (`./config.{json,toml}`,
///    `./rolodex.{json,toml}`)
/// 2. Parent directories (up to 2 levels)
/// 3. Relative to executable location
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(candidates_in(&cwd));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(candidates_in(exe_dir));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

fn candidates_in(dir: &Path) -> Vec<PathBuf> {
    vec![
        dir.join("config.json"),
        dir.join("config.toml"),
        dir.join("rolodex.json"),
        dir.join("rolodex.toml"),
        dir.join("../config.json"),
        dir.join("../config.toml"),
        dir.join("../../config.json"),
        dir.join("../../config.toml"),
    ]
}

/// Get required environment variable
///
/// # Errors
/// Returns `RolodexError::Config` if the variable is not set.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        RolodexError::Config(format!("Missing required environment variable: {}", key))
    })
}

/// Parse an optional numeric environment variable
///
/// # Errors
/// Returns `RolodexError::Config` if the variable is set but does not parse.
fn env_parse<T>(key: &str, label: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| RolodexError::Config(format!("Invalid {}: {}", label, e))),
        Err(_) => Ok(None),
    }
}
