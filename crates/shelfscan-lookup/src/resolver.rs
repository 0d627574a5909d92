//! Barcode resolution: local inventory first, then the external catalogs in
//! priority order, then the manual-entry sentinel.

use shelfscan_core::{CatalogConfig, InventoryItem, ProductRecord, ProductSource};

use crate::client::CatalogClient;
use crate::error::LookupError;
use crate::inventory::LocalInventory;
use crate::probes::{default_probes, Probe};

/// The outcome of one lookup, with the row a caller may persist.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub record: ProductRecord,
    /// Populated only for external hits. Persisting it is the caller's call
    /// and must not affect `record`.
    pub save_back: Option<InventoryItem>,
}

impl Resolution {
    fn terminal(record: ProductRecord) -> Self {
        Self {
            record,
            save_back: None,
        }
    }
}

/// Resolves barcodes against an ordered list of catalog probes.
///
/// The probe list is the priority order; the resolver holds no other state,
/// so one instance can serve any number of concurrent lookups.
pub struct Resolver {
    probes: Vec<Box<dyn Probe>>,
}

impl Resolver {
    /// Creates a resolver that tries `probes` in the given order.
    #[must_use]
    pub fn new(probes: Vec<Box<dyn Probe>>) -> Self {
        Self { probes }
    }

    /// Creates a resolver over the five default catalogs.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Http`] if the HTTP client cannot be built.
    pub fn from_config(config: &CatalogConfig) -> Result<Self, LookupError> {
        let client = CatalogClient::from_config(config)?;
        Ok(Self::new(default_probes(&client, config)))
    }

    /// Sources in the order they are tried.
    #[must_use]
    pub fn sources(&self) -> Vec<ProductSource> {
        self.probes.iter().map(|p| p.source()).collect()
    }

    /// Produces exactly one record for `barcode`.
    ///
    /// Never fails: catalog and inventory errors are logged and treated as
    /// misses, and a total miss yields [`ProductRecord::not_found`]. A panic
    /// inside a probe is a defect and is not caught.
    pub async fn resolve(&self, barcode: &str, inventory: &dyn LocalInventory) -> ProductRecord {
        self.resolve_detailed(barcode, inventory).await.record
    }

    /// Like [`Resolver::resolve`], also returning the save-back row for an
    /// external hit.
    ///
    /// Each step is awaited before the next one starts and the first hit
    /// ends the lookup. Dropping the future abandons any in-flight request.
    pub async fn resolve_detailed(
        &self,
        barcode: &str,
        inventory: &dyn LocalInventory,
    ) -> Resolution {
        if barcode.trim().is_empty() {
            tracing::warn!("blank barcode; skipping lookup");
            return Resolution::terminal(ProductRecord::not_found());
        }

        if let Some(record) = lookup_local(barcode, inventory).await {
            tracing::info!(barcode, source = %record.source, "resolved from local inventory");
            return Resolution::terminal(record);
        }

        for probe in &self.probes {
            let source = probe.source();
            match probe.probe(barcode).await {
                Ok(Some(record)) if !record.found || record.name.trim().is_empty() => {
                    tracing::debug!(
                        barcode,
                        source = %source,
                        "catalog returned an unfound record; treating as not found"
                    );
                }
                Ok(Some(record)) if record.source != source => {
                    tracing::warn!(
                        barcode,
                        source = %source,
                        tagged = %record.source,
                        "catalog record carries another source tag; treating as not found"
                    );
                }
                Ok(Some(record)) => {
                    tracing::info!(
                        barcode,
                        source = %source,
                        name = %record.name,
                        "resolved from catalog"
                    );
                    let save_back = InventoryItem::from_record(barcode, &record);
                    return Resolution { record, save_back };
                }
                Ok(None) => {
                    tracing::debug!(barcode, source = %source, "not found in catalog");
                }
                Err(e) => {
                    tracing::warn!(
                        barcode,
                        source = %source,
                        error = %e,
                        "catalog lookup failed; treating as not found"
                    );
                }
            }
        }

        tracing::info!(
            barcode,
            "no source recognised barcode; falling back to manual entry"
        );
        Resolution::terminal(ProductRecord::not_found())
    }
}

/// Reads the local inventory, demoting read failures to a miss.
async fn lookup_local(barcode: &str, inventory: &dyn LocalInventory) -> Option<ProductRecord> {
    match inventory.lookup_by_barcode(barcode).await {
        Ok(Some(item)) => {
            let record = item.to_record();
            if record.is_none() {
                tracing::warn!(barcode, "local inventory row has no name; ignoring it");
            }
            record
        }
        Ok(None) => None,
        Err(e) => {
            tracing::warn!(
                barcode,
                error = %e,
                "local inventory lookup failed; continuing with catalogs"
            );
            None
        }
    }
}

#[cfg(test)]
#[path = "resolver_test.rs"]
mod tests;
