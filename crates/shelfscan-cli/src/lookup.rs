use std::fmt::Write as _;
use std::sync::Arc;

use shelfscan_core::{AppConfig, ProductRecord};
use shelfscan_lookup::{spawn_save_back, Resolver, YamlInventory};

pub(crate) async fn run_lookup(
    config: &AppConfig,
    barcode: &str,
    json: bool,
) -> anyhow::Result<()> {
    let inventory = Arc::new(YamlInventory::new(&config.inventory_path));
    let resolver = Resolver::from_config(&config.catalog)?;

    let resolution = resolver.resolve_detailed(barcode, &*inventory).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&resolution.record)?);
    } else {
        print!("{}", format_record(&resolution.record));
    }

    if let Some(item) = resolution.save_back {
        // The process exits right after this, so wait for the write here.
        if let Some(handle) = spawn_save_back(inventory, item, config.save_back) {
            if let Err(e) = handle.await {
                tracing::warn!(error = %e, "save-back task did not complete");
            }
        }
    }

    if !resolution.record.found {
        eprintln!(
            "not found; enter it manually with: shelfscan inventory add {barcode} --name <NAME>"
        );
    }

    Ok(())
}

/// Human-readable rendering, one `key: value` line per present field.
pub(crate) fn format_record(record: &ProductRecord) -> String {
    let mut out = String::new();
    if !record.found {
        let _ = writeln!(out, "found: false");
        let _ = writeln!(out, "source: {}", record.source);
        return out;
    }

    let _ = writeln!(out, "name: {}", record.name);
    if let Some(brand) = &record.brand {
        let _ = writeln!(out, "brand: {brand}");
    }
    if let Some(price) = record.price {
        let _ = writeln!(out, "price: {price:.2}");
    }
    if let Some(category) = &record.category {
        let _ = writeln!(out, "category: {category}");
    }
    if let Some(description) = &record.description {
        let _ = writeln!(out, "description: {description}");
    }
    if let Some(image_url) = &record.image_url {
        let _ = writeln!(out, "image: {image_url}");
    }
    let _ = writeln!(out, "source: {}", record.source);
    out
}
