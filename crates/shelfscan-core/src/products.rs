use std::fmt;

use serde::{Deserialize, Serialize};

/// Where a [`ProductRecord`] came from.
///
/// Exactly one origin contributes to a found record; results from different
/// sources are never merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductSource {
    /// The shopkeeper's own inventory.
    Local,
    /// Open Food Facts (food catalog).
    OpenFoodFacts,
    /// Open Beauty Facts (beauty / personal-care catalog).
    OpenBeautyFacts,
    /// Open Products Facts (general-products catalog).
    OpenProductsFacts,
    /// Google Books volume search (book metadata A).
    GoogleBooks,
    /// Open Library books API (book metadata B).
    OpenLibrary,
    /// No source recognised the barcode; the user enters details by hand.
    Manual,
}

impl ProductSource {
    /// Stable snake_case tag, identical to the serialized form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::OpenFoodFacts => "open_food_facts",
            Self::OpenBeautyFacts => "open_beauty_facts",
            Self::OpenProductsFacts => "open_products_facts",
            Self::GoogleBooks => "google_books",
            Self::OpenLibrary => "open_library",
            Self::Manual => "manual",
        }
    }

    /// Returns `true` for the five external catalogs.
    #[must_use]
    pub fn is_external(self) -> bool {
        !matches!(self, Self::Local | Self::Manual)
    }
}

impl fmt::Display for ProductSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Product category.
///
/// The four named variants form the fixed taxonomy the catalog adapters map
/// into. `Custom` carries free text, typically typed in by the shopkeeper.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Food,
    PersonalCare,
    Books,
    Other,
    Custom(String),
}

impl Category {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Food => "food",
            Self::PersonalCare => "personal care",
            Self::Books => "books",
            Self::Other => "other",
            Self::Custom(s) => s,
        }
    }
}

impl From<String> for Category {
    fn from(raw: String) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "food" => Self::Food,
            "personal care" => Self::PersonalCare,
            "books" => Self::Books,
            "other" => Self::Other,
            _ => Self::Custom(raw),
        }
    }
}

impl From<&str> for Category {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_owned())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        match category {
            Category::Custom(s) => s,
            other => other.as_str().to_owned(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The normalized result of one barcode lookup.
///
/// Records are built fresh per lookup and never mutated afterwards. The
/// only constructors are [`ProductRecord::found`] and
/// [`ProductRecord::not_found`]:
///
/// - `found == false` implies `source == Manual`, an empty `name` and every
///   optional field `None`.
/// - `found == true` implies a non-blank `name` and a non-`Manual` source.
///
/// Other crates cannot build one with a struct literal:
///
/// ```compile_fail
/// use shelfscan_core::{ProductRecord, ProductSource};
///
/// let record = ProductRecord {
///     name: String::new(),
///     brand: None,
///     price: None,
///     category: None,
///     description: None,
///     image_url: None,
///     source: ProductSource::Local,
///     found: false,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ProductRecord {
    pub name: String,
    pub brand: Option<String>,
    /// Non-negative and finite when present.
    pub price: Option<f64>,
    pub category: Option<Category>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub source: ProductSource,
    pub found: bool,
}

impl ProductRecord {
    /// Starts a found record attributed to `source`.
    ///
    /// Returns `None` when `name` is blank or `source` is
    /// [`ProductSource::Manual`], since neither can describe a located product.
    #[must_use]
    pub fn found(name: impl Into<String>, source: ProductSource) -> Option<Self> {
        let name = name.into().trim().to_owned();
        if name.is_empty() || source == ProductSource::Manual {
            return None;
        }
        Some(Self {
            name,
            brand: None,
            price: None,
            category: None,
            description: None,
            image_url: None,
            source,
            found: true,
        })
    }

    /// The manual-entry sentinel returned when every source misses.
    #[must_use]
    pub fn not_found() -> Self {
        Self {
            name: String::new(),
            brand: None,
            price: None,
            category: None,
            description: None,
            image_url: None,
            source: ProductSource::Manual,
            found: false,
        }
    }

    #[must_use]
    pub fn with_brand(mut self, brand: Option<String>) -> Self {
        self.brand = non_blank(brand);
        self
    }

    /// Negative, NaN and infinite prices are dropped.
    #[must_use]
    pub fn with_price(mut self, price: Option<f64>) -> Self {
        self.price = price.filter(|p| p.is_finite() && *p >= 0.0);
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: Option<Category>) -> Self {
        self.category = category.filter(|c| !c.as_str().trim().is_empty());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = non_blank(description);
        self
    }

    #[must_use]
    pub fn with_image_url(mut self, image_url: Option<String>) -> Self {
        self.image_url = non_blank(image_url);
        self
    }
}

/// Trims and maps empty strings to `None`.
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_owned())
        .filter(|s| !s.is_empty())
}
