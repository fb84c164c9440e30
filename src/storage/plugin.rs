//! Storage plugin wiring the active key-value backend.
use std::ops::{Deref, DerefMut};

use bevy::prelude::*;

use crate::core::AppConfig;

use super::store::{FileStore, KeyValueStore, MemoryStore};

/// Resource wrapping the active key-value backend.
#[derive(Resource)]
pub struct LocalStorage {
    backend: Box<dyn KeyValueStore>,
    label: &'static str,
}

impl LocalStorage {
    pub fn new(backend: Box<dyn KeyValueStore>, label: &'static str) -> Self {
        Self { backend, label }
    }

    /// Volatile storage, used by tests and as the fallback backend.
    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStore::new()), "memory")
    }

    pub fn label(&self) -> &'static str {
        self.label
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl Deref for LocalStorage {
    type Target = dyn KeyValueStore;

    fn deref(&self) -> &Self::Target {
        self.backend.as_ref()
    }
}

impl DerefMut for LocalStorage {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.backend.as_mut()
    }
}

pub struct StoragePlugin;

impl Plugin for StoragePlugin {
    fn build(&self, app: &mut App) {
        let path = app
            .world()
            .get_resource::<AppConfig>()
            .map(|config| config.storage.file_path())
            .unwrap_or_else(|| AppConfig::default().storage.file_path());

        let storage = match FileStore::open(&path) {
            Ok(store) => {
                info!("StoragePlugin using file store at {:?}", store.path());
                LocalStorage::new(Box::new(store), "file")
            }
            Err(err) => {
                warn!(
                    "Failed to open {:?} ({}). Values will not survive a restart.",
                    path, err
                );
                LocalStorage::in_memory()
            }
        };

        app.insert_resource(storage);
    }
}
