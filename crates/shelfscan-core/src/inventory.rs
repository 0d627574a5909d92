use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::products::{Category, ProductRecord, ProductSource};

/// A row in the shop's own inventory, keyed by barcode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub barcode: String,
    pub name: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    /// Free text; matched against the fixed taxonomy when converted.
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Origin of the data when it was written (`"manual"`, `"open_food_facts"`, ...).
    #[serde(default)]
    pub origin: Option<ProductSource>,
    pub updated_at: DateTime<Utc>,
}

impl InventoryItem {
    /// Converts this row into a `source = local` record.
    ///
    /// Returns `None` for rows with a blank name; such rows cannot satisfy
    /// the found-record invariant and are treated as absent.
    #[must_use]
    pub fn to_record(&self) -> Option<ProductRecord> {
        let record = ProductRecord::found(self.name.clone(), ProductSource::Local)?
            .with_brand(self.brand.clone())
            .with_price(self.price)
            .with_category(self.category.as_deref().map(Category::from))
            .with_description(self.description.clone())
            .with_image_url(self.image_url.clone());
        Some(record)
    }

    /// Builds the write-back row for a record that was located externally or
    /// entered by hand.
    ///
    /// Returns `None` for records without a name (the manual sentinel before
    /// the user has filled it in).
    #[must_use]
    pub fn from_record(barcode: &str, record: &ProductRecord) -> Option<Self> {
        if record.name.trim().is_empty() {
            return None;
        }
        Some(Self {
            barcode: barcode.to_owned(),
            name: record.name.clone(),
            brand: record.brand.clone(),
            price: record.price,
            category: record.category.as_ref().map(|c| c.as_str().to_owned()),
            description: record.description.clone(),
            image_url: record.image_url.clone(),
            origin: Some(record.source),
            updated_at: Utc::now(),
        })
    }
}
