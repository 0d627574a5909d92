//! Raw response shapes for the external catalogs.
//!
//! ## Open Food / Beauty / Products Facts (`/api/v0/product/{code}.json`)
//! All three share one shape. `status` is `1` when the product exists and
//! `0` otherwise. Most product fields are optional and frequently present as
//! empty strings.
//!
//! ## Google Books (`/books/v1/volumes?q=isbn:{code}`)
//! `items` is omitted entirely when `totalItems` is `0`.
//!
//! ## Open Library (`/api/books?bibkeys=ISBN:{code}&format=json&jscmd=data`)
//! A JSON object keyed by the requested bibkey. Unknown ISBNs produce `{}`.
//! Only the medium and large cover sizes are used.

use std::collections::HashMap;

use serde::Deserialize;

/// Envelope returned by the three "Facts" catalogs.
#[derive(Debug, Deserialize)]
pub struct FactsResponse {
    /// `1` = found. Some mirrors send it as a string, so it is kept loose.
    #[serde(default)]
    pub status: Option<serde_json::Value>,
    #[serde(default)]
    pub product: Option<FactsProduct>,
}

impl FactsResponse {
    /// The catalog's own found flag: `status == 1`.
    #[must_use]
    pub fn status_found(&self) -> bool {
        match &self.status {
            Some(serde_json::Value::Number(n)) => n.as_i64() == Some(1),
            Some(serde_json::Value::String(s)) => s.trim() == "1",
            _ => false,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct FactsProduct {
    /// Name in the requested locale.
    #[serde(default)]
    pub product_name: Option<String>,
    /// Generic descriptive name, e.g. `"Glucose biscuits"`.
    #[serde(default)]
    pub generic_name: Option<String>,
    /// Comma-separated brand list as typed by contributors.
    #[serde(default)]
    pub brands: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Response from the Google Books volume search.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleBooksResponse {
    #[serde(default)]
    pub items: Vec<GoogleBooksVolume>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleBooksVolume {
    #[serde(default)]
    pub volume_info: Option<VolumeInfo>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeInfo {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_links: Option<ImageLinks>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageLinks {
    #[serde(default)]
    pub small_thumbnail: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
}

/// Open Library `jscmd=data` response, keyed by bibkey (`"ISBN:{code}"`).
pub type OpenLibraryResponse = HashMap<String, OpenLibraryBook>;

#[derive(Debug, Default, Deserialize)]
pub struct OpenLibraryBook {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub authors: Vec<OpenLibraryAuthor>,
    #[serde(default)]
    pub cover: Option<OpenLibraryCover>,
}

#[derive(Debug, Deserialize)]
pub struct OpenLibraryAuthor {
    pub name: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct OpenLibraryCover {
    #[serde(default)]
    pub medium: Option<String>,
    #[serde(default)]
    pub large: Option<String>,
}
