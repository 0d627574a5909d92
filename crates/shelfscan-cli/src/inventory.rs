use anyhow::bail;
use chrono::Utc;
use shelfscan_core::{AppConfig, InventoryItem, ProductSource};
use shelfscan_lookup::{LocalInventory, YamlInventory};

/// Fields typed in by the shopkeeper after a miss.
#[derive(Debug)]
pub(crate) struct ManualEntry {
    pub barcode: String,
    pub name: String,
    pub brand: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

/// Validates a manual entry and turns it into an inventory row.
///
/// The barcode is stored exactly as given, since lookups match it verbatim.
pub(crate) fn build_manual_item(entry: ManualEntry) -> anyhow::Result<InventoryItem> {
    let barcode = entry.barcode;
    let name = entry.name.trim().to_owned();
    if barcode.trim().is_empty() {
        bail!("barcode must not be empty");
    }
    if name.is_empty() {
        bail!("name must not be empty");
    }
    if let Some(price) = entry.price {
        if !price.is_finite() || price < 0.0 {
            bail!("price must be a non-negative number, got {price}");
        }
    }

    Ok(InventoryItem {
        barcode,
        name,
        brand: entry.brand,
        price: entry.price,
        category: entry.category,
        description: entry.description,
        image_url: entry.image_url,
        origin: Some(ProductSource::Manual),
        updated_at: Utc::now(),
    })
}

pub(crate) async fn run_add(config: &AppConfig, item: InventoryItem) -> anyhow::Result<()> {
    let inventory = YamlInventory::new(&config.inventory_path);
    let barcode = item.barcode.clone();
    inventory.upsert(item).await?;
    tracing::info!(
        barcode = %barcode,
        path = %inventory.path().display(),
        "inventory item saved"
    );
    println!("saved {barcode}");
    Ok(())
}

pub(crate) async fn run_list(config: &AppConfig, json: bool) -> anyhow::Result<()> {
    let inventory = YamlInventory::new(&config.inventory_path);
    let items = inventory.list().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    if items.is_empty() {
        println!("inventory is empty ({})", inventory.path().display());
        return Ok(());
    }
    for item in &items {
        let price = item
            .price
            .map_or_else(|| "-".to_string(), |p| format!("{p:.2}"));
        println!("{}\t{}\t{}", item.barcode, item.name, price);
    }
    Ok(())
}
