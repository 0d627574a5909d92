//! Caller-side persistence of external hits.
//!
//! Save-back runs off the lookup path: the record has already been returned
//! by the time the write happens, and a failed write is only logged.

use std::sync::Arc;

use shelfscan_core::{InventoryItem, SaveBackPolicy};
use tokio::task::JoinHandle;

use crate::inventory::LocalInventory;

/// Applies `policy` to a save-back row from [`crate::Resolution`].
///
/// With [`SaveBackPolicy::Persist`] the upsert runs on a spawned task whose
/// handle is returned so short-lived callers (the CLI) can wait for it.
/// With [`SaveBackPolicy::LogOnly`] nothing is written and `None` is
/// returned.
///
/// Must be called from within a Tokio runtime when persisting.
pub fn spawn_save_back(
    inventory: Arc<dyn LocalInventory>,
    item: InventoryItem,
    policy: SaveBackPolicy,
) -> Option<JoinHandle<()>> {
    match policy {
        SaveBackPolicy::LogOnly => {
            tracing::info!(
                barcode = %item.barcode,
                origin = ?item.origin,
                "external hit not saved to inventory (save-back policy: log)"
            );
            None
        }
        SaveBackPolicy::Persist => Some(tokio::spawn(async move {
            let barcode = item.barcode.clone();
            match inventory.upsert(item).await {
                Ok(()) => tracing::info!(barcode = %barcode, "saved external hit to inventory"),
                Err(e) => tracing::warn!(
                    barcode = %barcode,
                    error = %e,
                    "failed to save external hit to inventory"
                ),
            }
        })),
    }
}
