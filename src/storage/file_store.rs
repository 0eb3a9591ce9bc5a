// src/storage/file_store.rs
// DOCUMENTATION: JSON-file backed implementation of the Storage trait
// PURPOSE: In-memory entity tables with optional persistence across restarts

use crate::storage::{Entity, Storage, StorageError, Tables};
use std::fs;
use std::path::PathBuf;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Thread-safe store holding all entity tables behind a single RwLock
/// With a path configured, every mutation rewrites the JSON document;
/// without one the store is purely in-memory (the test fake)
pub struct FileStore {
    tables: RwLock<Tables>,
    path: Option<PathBuf>,
}

impl FileStore {
    /// Open a store backed by the given JSON file, loading existing data
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();

        let tables = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            serde_json::from_str(&raw)?
        } else {
            Tables::default()
        };

        log::info!("Opened storage file: {}", path.display());

        Ok(FileStore {
            tables: RwLock::new(tables),
            path: Some(path),
        })
    }

    /// Purely in-memory store; nothing survives drop
    pub fn ephemeral() -> Self {
        FileStore {
            tables: RwLock::new(Tables::default()),
            path: None,
        }
    }

    /// Rewrite the backing file from the current tables
    /// Writes a sibling temp file first, then renames over the target so a
    /// crash mid-write never truncates existing data
    fn persist(&self, tables: &Tables) -> Result<(), StorageError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let raw = serde_json::to_vec_pretty(tables)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, raw)?;
        fs::rename(&tmp, path)?;

        Ok(())
    }
}

impl Storage for FileStore {
    async fn get<E: Entity>(&self, id: Uuid) -> Option<E> {
        let tables = self.tables.read().await;
        E::table(&tables).get(&id).cloned()
    }

    async fn all<E: Entity>(&self) -> Vec<E> {
        let tables = self.tables.read().await;
        E::table(&tables).values().cloned().collect()
    }

    async fn save<E: Entity>(&self, entity: E) -> Result<(), StorageError> {
        let mut tables = self.tables.write().await;
        E::table_mut(&mut tables).insert(entity.id(), entity);
        self.persist(&tables)
    }

    async fn delete<E: Entity>(&self, id: Uuid) -> Result<bool, StorageError> {
        let mut tables = self.tables.write().await;

        if E::table_mut(&mut tables).remove(&id).is_none() {
            return Ok(false);
        }

        self.persist(&tables)?;
        log::debug!("Deleted {} {}", E::KIND, id);
        Ok(true)
    }

    async fn count<E: Entity>(&self) -> usize {
        let tables = self.tables.read().await;
        E::table(&tables).len()
    }
}
