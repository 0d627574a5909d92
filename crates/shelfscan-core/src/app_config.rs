use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// What the caller does with a record found in an external catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaveBackPolicy {
    /// Log the intent to save; write nothing.
    #[default]
    LogOnly,
    /// Upsert the record into local inventory in the background.
    Persist,
}

impl std::fmt::Display for SaveBackPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SaveBackPolicy::LogOnly => write!(f, "log"),
            SaveBackPolicy::Persist => write!(f, "persist"),
        }
    }
}

pub const DEFAULT_OPEN_FOOD_FACTS_URL: &str = "https://world.openfoodfacts.org";
pub const DEFAULT_OPEN_BEAUTY_FACTS_URL: &str = "https://world.openbeautyfacts.org";
pub const DEFAULT_OPEN_PRODUCTS_FACTS_URL: &str = "https://world.openproductsfacts.org";
pub const DEFAULT_GOOGLE_BOOKS_URL: &str = "https://www.googleapis.com";
pub const DEFAULT_OPEN_LIBRARY_URL: &str = "https://openlibrary.org";
pub const DEFAULT_CATALOG_USER_AGENT: &str = "shelfscan/0.1 (storefront-lookup)";

/// Transport settings and base URLs for the external catalogs.
///
/// Base URLs are overridable so tests can point every catalog at a mock
/// server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub open_food_facts_url: String,
    pub open_beauty_facts_url: String,
    pub open_products_facts_url: String,
    pub google_books_url: String,
    pub open_library_url: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: 10,
            user_agent: DEFAULT_CATALOG_USER_AGENT.to_string(),
            open_food_facts_url: DEFAULT_OPEN_FOOD_FACTS_URL.to_string(),
            open_beauty_facts_url: DEFAULT_OPEN_BEAUTY_FACTS_URL.to_string(),
            open_products_facts_url: DEFAULT_OPEN_PRODUCTS_FACTS_URL.to_string(),
            google_books_url: DEFAULT_GOOGLE_BOOKS_URL.to_string(),
            open_library_url: DEFAULT_OPEN_LIBRARY_URL.to_string(),
        }
    }
}

impl CatalogConfig {
    /// Points every catalog at the same base URL.
    #[must_use]
    pub fn with_single_base_url(base_url: &str) -> Self {
        Self {
            open_food_facts_url: base_url.to_string(),
            open_beauty_facts_url: base_url.to_string(),
            open_products_facts_url: base_url.to_string(),
            google_books_url: base_url.to_string(),
            open_library_url: base_url.to_string(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub inventory_path: PathBuf,
    pub save_back: SaveBackPolicy,
    pub catalog: CatalogConfig,
}
