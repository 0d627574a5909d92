//! Local-inventory collaborators.
//!
//! The resolver reads through [`LocalInventory::lookup_by_barcode`]; callers
//! write through [`LocalInventory::upsert`] when saving back an external hit
//! or a manually entered product.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use shelfscan_core::InventoryItem;
use tokio::sync::{Mutex, RwLock};

use crate::error::InventoryError;

/// Read/write access to the shop's own catalog, keyed by barcode.
#[async_trait]
pub trait LocalInventory: Send + Sync {
    /// # Errors
    ///
    /// Returns [`InventoryError`] if the backend cannot be read.
    async fn lookup_by_barcode(&self, barcode: &str)
        -> Result<Option<InventoryItem>, InventoryError>;

    /// Inserts `item`, replacing any existing row with the same barcode.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError`] if the backend cannot be written.
    async fn upsert(&self, item: InventoryItem) -> Result<(), InventoryError>;
}

/// Process-local inventory. Used by tests and as a scratch store.
#[derive(Debug, Default)]
pub struct InMemoryInventory {
    items: RwLock<HashMap<String, InventoryItem>>,
}

impl InMemoryInventory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_items(items: impl IntoIterator<Item = InventoryItem>) -> Self {
        let items = items
            .into_iter()
            .map(|item| (item.barcode.clone(), item))
            .collect();
        Self {
            items: RwLock::new(items),
        }
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

#[async_trait]
impl LocalInventory for InMemoryInventory {
    async fn lookup_by_barcode(
        &self,
        barcode: &str,
    ) -> Result<Option<InventoryItem>, InventoryError> {
        Ok(self.items.read().await.get(barcode).cloned())
    }

    async fn upsert(&self, item: InventoryItem) -> Result<(), InventoryError> {
        self.items.write().await.insert(item.barcode.clone(), item);
        Ok(())
    }
}

/// Inventory persisted as a YAML list of [`InventoryItem`]s.
///
/// A missing or empty file is an empty inventory. Writes are
/// read-modify-write under a lock and land via a temp file + rename, so a
/// crashed write never leaves a truncated file behind.
#[derive(Debug)]
pub struct YamlInventory {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl YamlInventory {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns every item, sorted by barcode.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError`] if the file exists but cannot be read or
    /// parsed.
    pub async fn list(&self) -> Result<Vec<InventoryItem>, InventoryError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(InventoryError::Io {
                    path: self.path.clone(),
                    source: e,
                })
            }
        };

        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_yaml::from_str::<Vec<InventoryItem>>(&raw).map_err(|e| InventoryError::Yaml {
            path: self.path.clone(),
            source: e,
        })
    }

    async fn write_all(&self, items: &[InventoryItem]) -> Result<(), InventoryError> {
        let io_err = |source: std::io::Error| InventoryError::Io {
            path: self.path.clone(),
            source,
        };

        let serialized = serde_yaml::to_string(items).map_err(|e| InventoryError::Yaml {
            path: self.path.clone(),
            source: e,
        })?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(io_err)?;
        }

        let tmp = self.path.with_extension("yaml.tmp");
        tokio::fs::write(&tmp, serialized).await.map_err(io_err)?;
        tokio::fs::rename(&tmp, &self.path).await.map_err(io_err)?;
        Ok(())
    }
}

#[async_trait]
impl LocalInventory for YamlInventory {
    async fn lookup_by_barcode(
        &self,
        barcode: &str,
    ) -> Result<Option<InventoryItem>, InventoryError> {
        let items = self.list().await?;
        Ok(items.into_iter().find(|item| item.barcode == barcode))
    }

    async fn upsert(&self, item: InventoryItem) -> Result<(), InventoryError> {
        let _guard = self.write_lock.lock().await;
        let mut items = self.list().await?;

        match items.iter_mut().find(|existing| existing.barcode == item.barcode) {
            Some(existing) => *existing = item,
            None => items.push(item),
        }
        items.sort_by(|a, b| a.barcode.cmp(&b.barcode));

        self.write_all(&items).await?;
        tracing::debug!(path = %self.path.display(), count = items.len(), "inventory written");
        Ok(())
    }
}
