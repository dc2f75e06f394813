//! # Chart Storage
//!
//! Create-and-fetch persistence for birth charts, keyed by an auto-increment
//! id starting at 1. There is no update or delete.
//!
//! Two backends:
//! - [`MemoryStore`]: lives for the process, nothing touches disk.
//! - [`JsonFileStore`]: one JSON document holding every chart. Each create
//!   rewrites it via `.tmp` + `rename()` so a crash never leaves a torn file.

use std::collections::BTreeMap;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::StorageBackend;
use crate::core::chart::{BirthChart, NewBirthChart};

#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    Serialize(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "storage I/O error: {e}"),
            StoreError::Serialize(e) => write!(f, "storage format error: {e}"),
        }
    }
}

impl std::error::Error for StoreError {}

#[async_trait]
pub trait ChartStore: Send + Sync {
    /// Returns the backend name, for logs.
    fn name(&self) -> &str;

    /// Stores `chart` and returns it with its assigned id.
    async fn create(&self, chart: NewBirthChart) -> Result<BirthChart, StoreError>;

    /// Fetches a chart. A missing id is `Ok(None)`, not an error.
    async fn get(&self, id: i64) -> Result<Option<BirthChart>, StoreError>;
}

// ============================================================================
// Shared table
// ============================================================================

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChartTable {
    next_id: i64,
    charts: BTreeMap<i64, BirthChart>,
}

impl ChartTable {
    /// Moves `next_id` past the highest stored id, so a hand-edited file
    /// can't make `insert` overwrite an existing chart.
    fn repair_next_id(&mut self) {
        if let Some(&max_id) = self.charts.keys().next_back()
            && self.next_id <= max_id
        {
            warn!("nextId {} is not above stored id {}, advancing", self.next_id, max_id);
            self.next_id = max_id + 1;
        }
    }

    fn insert(&mut self, chart: NewBirthChart) -> BirthChart {
        let id = self.next_id.max(1);
        self.next_id = id + 1;
        let stored = chart.with_id(id);
        self.charts.insert(id, stored.clone());
        stored
    }
}

// ============================================================================
// In-memory backend
// ============================================================================

#[derive(Default)]
pub struct MemoryStore {
    table: Mutex<ChartTable>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ChartStore for MemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn create(&self, chart: NewBirthChart) -> Result<BirthChart, StoreError> {
        let stored = self.table.lock().await.insert(chart);
        debug!("Stored chart {} in memory", stored.id);
        Ok(stored)
    }

    async fn get(&self, id: i64) -> Result<Option<BirthChart>, StoreError> {
        Ok(self.table.lock().await.charts.get(&id).cloned())
    }
}

// ============================================================================
// JSON file backend
// ============================================================================

pub struct JsonFileStore {
    path: PathBuf,
    table: Mutex<ChartTable>,
}

impl JsonFileStore {
    /// Opens (or starts) the chart file at `path`. A missing file is an
    /// empty store; a malformed one is an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let table = if path.exists() {
            let json = std::fs::read_to_string(&path).map_err(StoreError::Io)?;
            let mut table: ChartTable =
                serde_json::from_str(&json).map_err(StoreError::Serialize)?;
            table.repair_next_id();
            info!("Loaded {} charts from {}", table.charts.len(), path.display());
            table
        } else {
            info!("No chart file at {}, starting empty", path.display());
            ChartTable::default()
        };
        Ok(Self {
            path,
            table: Mutex::new(table),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Atomically write `data` as JSON to `path` (via `.tmp` + rename).
async fn atomic_write_json<T: Serialize>(path: &Path, data: &T) -> Result<(), StoreError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent).await.map_err(StoreError::Io)?;
    }
    let tmp_path = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(data).map_err(StoreError::Serialize)?;
    tokio::fs::write(&tmp_path, json).await.map_err(StoreError::Io)?;
    tokio::fs::rename(&tmp_path, path).await.map_err(StoreError::Io)?;
    Ok(())
}

#[async_trait]
impl ChartStore for JsonFileStore {
    fn name(&self) -> &str {
        "file"
    }

    async fn create(&self, chart: NewBirthChart) -> Result<BirthChart, StoreError> {
        let mut table = self.table.lock().await;
        let previous_next_id = table.next_id;
        let stored = table.insert(chart);

        if let Err(e) = atomic_write_json(&self.path, &*table).await {
            warn!("Failed to persist chart {}: {}", stored.id, e);
            table.charts.remove(&stored.id);
            table.next_id = previous_next_id;
            return Err(e);
        }

        debug!("Stored chart {} in {}", stored.id, self.path.display());
        Ok(stored)
    }

    async fn get(&self, id: i64) -> Result<Option<BirthChart>, StoreError> {
        Ok(self.table.lock().await.charts.get(&id).cloned())
    }
}

/// Builds the configured backend.
pub fn open_store(backend: StorageBackend, path: &Path) -> Result<Arc<dyn ChartStore>, StoreError> {
    match backend {
        StorageBackend::Memory => {
            info!("Using in-memory chart store");
            Ok(Arc::new(MemoryStore::new()))
        }
        StorageBackend::File => {
            info!("Using chart file {}", path.display());
            Ok(Arc::new(JsonFileStore::open(path)?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_new_chart;

    #[tokio::test]
    async fn test_memory_store_assigns_sequential_ids() {
        let store = MemoryStore::new();
        let first = store.create(sample_new_chart()).await.unwrap();
        let second = store.create(sample_new_chart()).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.get(2).await.unwrap(), Some(second));
    }

    #[tokio::test]
    async fn test_memory_store_missing_id_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get(42).await.unwrap(), None);
        assert_eq!(store.get(-1).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("charts.json");

        let store = JsonFileStore::open(&path).unwrap();
        let created = store.create(sample_new_chart()).await.unwrap();
        assert_eq!(created.id, 1);
        assert!(path.exists());
        assert!(!path.with_extension("tmp").exists());
        drop(store);

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get(1).await.unwrap(), Some(created));
        let next = reopened.create(sample_new_chart()).await.unwrap();
        assert_eq!(next.id, 2);
    }

    #[tokio::test]
    async fn test_file_store_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("charts.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(JsonFileStore::open(&path), Err(StoreError::Serialize(_))));
    }

    #[tokio::test]
    async fn test_file_store_rolls_back_failed_write() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the file should be makes the rename fail.
        let path = dir.path().join("charts.json");
        std::fs::create_dir_all(path.join("blocker")).unwrap();

        let store = JsonFileStore {
            path: path.clone(),
            table: Mutex::new(ChartTable::default()),
        };
        assert!(store.create(sample_new_chart()).await.is_err());
        assert_eq!(store.get(1).await.unwrap(), None);
        assert_eq!(store.table.lock().await.next_id, 0);
    }

    #[tokio::test]
    async fn test_open_store_selects_backend() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("charts.json");

        let memory = open_store(StorageBackend::Memory, &path).unwrap();
        assert_eq!(memory.name(), "memory");
        memory.create(sample_new_chart()).await.unwrap();
        assert!(!path.exists());

        let file = open_store(StorageBackend::File, &path).unwrap();
        assert_eq!(file.name(), "file");
        file.create(sample_new_chart()).await.unwrap();
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_file_store_stale_next_id_never_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("charts.json");
        let mut table = ChartTable::default();
        table.charts.insert(1, sample_new_chart().with_id(1));
        table.charts.insert(2, sample_new_chart().with_id(2));
        table.next_id = 1;
        std::fs::write(&path, serde_json::to_string(&table).unwrap()).unwrap();

        let store = JsonFileStore::open(&path).unwrap();
        let created = store
            .create(NewBirthChart {
                name: "Ravi".into(),
                ..sample_new_chart()
            })
            .await
            .unwrap();
        assert_eq!(created.id, 3);
        assert_eq!(store.get(1).await.unwrap().unwrap().name, "Asha");
        assert_eq!(store.get(2).await.unwrap().unwrap().name, "Asha");
    }
}
