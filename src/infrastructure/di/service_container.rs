//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::TreeService;
use crate::config::Settings;
use crate::infrastructure::store::JsonFileStore;
use crate::infrastructure::traits::{FileSystem, RealFileSystem, TreeStore};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Record store behind the tree service
    pub store: Arc<dyn TreeStore>,
}

impl ServiceContainer {
    /// Create a new service container with the JSON file store from `settings`.
    pub fn new(settings: Settings) -> Self {
        let fs: Arc<dyn FileSystem> = Arc::new(RealFileSystem);
        let store = Arc::new(JsonFileStore::new(fs, settings.store_path()));
        Self::with_store(settings, store)
    }

    /// Create a service container with a custom store (e.g. `InMemoryStore` in tests).
    pub fn with_store(settings: Settings, store: Arc<dyn TreeStore>) -> Self {
        Self {
            settings: Arc::new(settings),
            store,
        }
    }

    pub fn tree_service(&self) -> TreeService {
        TreeService::new(Arc::clone(&self.store), self.settings.pretty_json)
    }
}
