//! Test context for unified test setup
//!
//! Builds a store seeded with the fixture dataset and the full service
//! stack over it.

use std::sync::{Arc, Once};
use tempfile::TempDir;
use CampusHub::config::{BackendKind, Settings};
use CampusHub::database::{open_store, DatabaseService, Dataset, JsonFileBackend, StorageBackend, Store};
use CampusHub::services::ServiceFactory;

use super::test_data::test_dataset;

static INIT: Once = Once::new();

/// Initialize test logging once per test binary
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("CampusHub=debug")
            .with_test_writer()
            .try_init();
    });
}

/// Unified test context that manages all test components
pub struct TestContext {
    pub services: ServiceFactory,
    pub database: DatabaseService,
    pub settings: Settings,
    /// Backing directory for JSON-backed contexts
    pub temp_dir: Option<TempDir>,
}

impl TestContext {
    /// In-memory context over the fixture dataset
    pub fn new() -> Self {
        Self::with_dataset(test_dataset())
    }

    pub fn with_dataset(data: Dataset) -> Self {
        init_test_env();
        let settings = Settings::default();
        let database = DatabaseService::new(Arc::new(Store::in_memory(data)));
        let services = ServiceFactory::new(database.clone(), settings.clone());

        Self {
            services,
            database,
            settings,
            temp_dir: None,
        }
    }

    /// Context persisting to JSON files in a temporary directory
    pub fn new_json() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        init_test_env();
        let temp_dir = tempfile::tempdir()?;
        JsonFileBackend::new(temp_dir.path()).save(&test_dataset())?;

        let mut settings = Settings::default();
        settings.storage.backend = BackendKind::Json;
        settings.storage.data_dir = temp_dir.path().to_string_lossy().to_string();
        settings.storage.persist_on_write = true;

        let database = DatabaseService::new(open_store(&settings.storage)?);
        let services = ServiceFactory::new(database.clone(), settings.clone());

        Ok(Self {
            services,
            database,
            settings,
            temp_dir: Some(temp_dir),
        })
    }

    /// Reload the data directory from disk, bypassing the live store
    pub fn reload_from_disk(&self) -> Option<Dataset> {
        let dir = self.temp_dir.as_ref()?;
        JsonFileBackend::new(dir.path()).load().ok()
    }
}
