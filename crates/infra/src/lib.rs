//! # Rolodex Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - Key-value storage adapters (file-backed and in-memory)
//! - The HTTP client and the random-user contact source
//! - The filesystem export writer
//! - Configuration loading
//!
//! ## Architecture
//! - Implements traits defined in `rolodex-core`
//! - Depends on `rolodex-domain` and `rolodex-core`
//! - Contains all "impure" code (filesystem and network I/O)

pub mod config;
pub mod contacts;
pub mod errors;
pub mod export;
pub mod http;
pub mod storage;

// Re-export commonly used items
pub use contacts::RandomUserClient;
pub use errors::InfraError;
pub use export::FileExportWriter;
pub use http::{HttpClient, HttpClientBuilder};
pub use storage::{FileKeyValueStore, MemoryKeyValueStore};
