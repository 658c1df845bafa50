//! Shared store management

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use crate::config::{BackendKind, StorageConfig};
use crate::utils::errors::{CampusError, Result};
use crate::utils::logging::{log_store_operation, log_store_rejection};
use super::backend::{Dataset, JsonFileBackend, MemoryBackend, StorageBackend};

/// Handle cloned into every repository
pub type DatabasePool = Arc<Store>;

/// Working copy of the dataset plus the backend it is persisted to.
///
/// Writers are serialized by the lock; each `mutate` runs to completion
/// before the next one starts. A mutation only becomes visible once its
/// save has succeeded.
#[derive(Debug)]
pub struct Store {
    data: RwLock<Dataset>,
    backend: Arc<dyn StorageBackend>,
    persist_on_write: bool,
}

impl Store {
    /// Load the dataset from `backend`
    pub fn open(backend: Box<dyn StorageBackend>, persist_on_write: bool) -> Result<Self> {
        let data = backend.load()?;
        Ok(Self {
            data: RwLock::new(data),
            backend: Arc::from(backend),
            persist_on_write,
        })
    }

    /// Store over a memory backend seeded with `data`
    pub fn in_memory(data: Dataset) -> Self {
        Self {
            data: RwLock::new(data.clone()),
            backend: Arc::new(MemoryBackend::new(data)),
            persist_on_write: true,
        }
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Run a read-only closure against the dataset
    pub async fn query<T>(&self, operation: &str, f: impl FnOnce(&Dataset) -> T) -> T {
        let started = Instant::now();
        let guard = self.data.read().await;
        let out = f(&*guard);
        log_store_operation(operation, self.backend.name(), started.elapsed().as_millis() as u64, true);
        out
    }

    /// Run a mutating closure against a working copy, then persist when
    /// configured to.
    ///
    /// The copy replaces the live dataset only after the closure and the
    /// save both succeed; on any `Err` the live dataset is untouched.
    pub async fn mutate<T>(&self, operation: &str, f: impl FnOnce(&mut Dataset) -> Result<T>) -> Result<T> {
        let started = Instant::now();
        let mut guard = self.data.write().await;
        let mut working = guard.clone();

        let out = match f(&mut working) {
            Ok(out) => out,
            Err(e) => {
                log_store_rejection(operation, self.backend.name(), &e);
                return Err(e);
            }
        };

        if self.persist_on_write {
            working = match self.save_blocking(working).await {
                Ok(saved) => saved,
                Err(e) => {
                    log_store_operation(operation, self.backend.name(), started.elapsed().as_millis() as u64, false);
                    return Err(e);
                }
            };
        }

        *guard = working;
        log_store_operation(operation, self.backend.name(), started.elapsed().as_millis() as u64, true);
        Ok(out)
    }

    /// Persist the current dataset regardless of `persist_on_write`
    pub async fn flush(&self) -> Result<()> {
        let snapshot = self.data.read().await.clone();
        self.save_blocking(snapshot).await.map(|_| ())
    }

    /// Backend saves do file I/O, so they run on the blocking pool.
    /// Hands the dataset back once it is written.
    async fn save_blocking(&self, data: Dataset) -> Result<Dataset> {
        let backend = Arc::clone(&self.backend);
        tokio::task::spawn_blocking(move || backend.save(&data).map(|()| data))
            .await
            .map_err(|e| CampusError::Storage(format!("save task failed: {}", e)))?
    }

    /// Copy of the whole dataset
    pub async fn snapshot(&self) -> Dataset {
        self.data.read().await.clone()
    }

    pub fn health_check(&self) -> Result<()> {
        self.backend.health_check()
    }
}

/// Open the store described by `config`.
///
/// The memory backend is seeded from `data_dir` when it exists, mirroring
/// the mock JSON files, and never writes back.
pub fn open_store(config: &StorageConfig) -> Result<DatabasePool> {
    let store = match config.backend {
        BackendKind::Memory => {
            let seed = if Path::new(&config.data_dir).is_dir() {
                JsonFileBackend::new(&config.data_dir).load()?
            } else {
                Dataset::default()
            };
            Store::open(Box::new(MemoryBackend::new(seed)), config.persist_on_write)?
        }
        BackendKind::Json => {
            Store::open(Box::new(JsonFileBackend::new(&config.data_dir)), config.persist_on_write)?
        }
    };

    tracing::info!(backend = store.backend_name(), "Store opened successfully");
    Ok(Arc::new(store))
}
