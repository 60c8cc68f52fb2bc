//! Application context - dependency injection container

use std::path::PathBuf;
use std::sync::Arc;

use rolodex_common::{Clock, SystemClock};
use rolodex_core::{
    ActivityStatsService, ContactRoster, ContactSource, ContactsService, FavoritesExporter,
    FavoritesService, KeyValueStore,
};
use rolodex_domain::{Config, Result, StorageBackend};
use rolodex_infra::{FileExportWriter, FileKeyValueStore, MemoryKeyValueStore, RandomUserClient};
use tracing::info;

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub clock: Arc<dyn Clock>,
    pub favorites: Arc<FavoritesService>,
    pub stats: Arc<ActivityStatsService>,
    pub contacts: Arc<ContactsService>,
    pub exporter: Arc<FavoritesExporter>,
}

impl AppContext {
    /// Wire production adapters from `config`.
    ///
    /// # Errors
    /// `Config` when the contact source settings are unusable.
    pub fn new(config: Config) -> Result<Self> {
        let source = Arc::new(RandomUserClient::from_config(&config.contacts)?);
        Ok(Self::with_adapters(config, source, Arc::new(SystemClock)))
    }

    /// Wire the context around an explicit contact source and clock.
    ///
    /// Storage and export adapters still follow `config`.
    pub fn with_adapters(
        config: Config,
        source: Arc<dyn ContactSource>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let store: Arc<dyn KeyValueStore> = match config.storage.backend {
            StorageBackend::File => Arc::new(FileKeyValueStore::new(&config.storage.path)),
            StorageBackend::Memory => Arc::new(MemoryKeyValueStore::new()),
        };

        let favorites = Arc::new(
            FavoritesService::new(store.clone(), clock.clone()).with_serialized_writes(true),
        );
        let stats = Arc::new(ActivityStatsService::new(favorites.clone(), clock.clone()));
        let contacts =
            Arc::new(ContactsService::new(source, Arc::new(ContactRoster::new(store))));
        let exporter = Arc::new(FavoritesExporter::new(
            favorites.clone(),
            Arc::new(FileExportWriter::new(&config.export.directory)),
            clock.clone(),
        ));

        info!(
            backend = %config.storage.backend,
            storage_path = %config.storage.path.display(),
            "application context initialized"
        );

        Self { config, clock, favorites, stats, contacts, exporter }
    }

    /// Exporter writing into `directory` instead of the configured one
    pub fn exporter_to(&self, directory: PathBuf) -> FavoritesExporter {
        FavoritesExporter::new(
            self.favorites.clone(),
            Arc::new(FileExportWriter::new(directory)),
            self.clock.clone(),
        )
    }
}
