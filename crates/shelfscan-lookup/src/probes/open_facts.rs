//! Open Food Facts, Open Beauty Facts and Open Products Facts.
//!
//! The three catalogs run the same software and differ only in host and in
//! the category their products fall under.

use async_trait::async_trait;
use shelfscan_core::{Category, ProductRecord, ProductSource};

use super::Probe;
use crate::client::CatalogClient;
use crate::error::LookupError;
use crate::normalize::normalize_facts;
use crate::types::FactsResponse;

pub struct FactsProbe {
    client: CatalogClient,
    base_url: String,
    source: ProductSource,
    category: Category,
}

impl FactsProbe {
    #[must_use]
    pub fn new(
        client: CatalogClient,
        base_url: &str,
        source: ProductSource,
        category: Category,
    ) -> Self {
        Self {
            client,
            base_url: base_url.to_owned(),
            source,
            category,
        }
    }

    #[must_use]
    pub fn open_food_facts(client: CatalogClient, base_url: &str) -> Self {
        Self::new(client, base_url, ProductSource::OpenFoodFacts, Category::Food)
    }

    #[must_use]
    pub fn open_beauty_facts(client: CatalogClient, base_url: &str) -> Self {
        Self::new(
            client,
            base_url,
            ProductSource::OpenBeautyFacts,
            Category::PersonalCare,
        )
    }

    #[must_use]
    pub fn open_products_facts(client: CatalogClient, base_url: &str) -> Self {
        Self::new(
            client,
            base_url,
            ProductSource::OpenProductsFacts,
            Category::Other,
        )
    }
}

#[async_trait]
impl Probe for FactsProbe {
    fn source(&self) -> ProductSource {
        self.source
    }

    async fn probe(&self, barcode: &str) -> Result<Option<ProductRecord>, LookupError> {
        let file = format!("{barcode}.json");
        let url = CatalogClient::endpoint(
            &self.base_url,
            &["api", "v0", "product", file.as_str()],
            &[],
        )?;
        let Some(response) = self.client.get_json::<FactsResponse>(&url).await? else {
            return Ok(None);
        };
        Ok(normalize_facts(response, self.source, self.category.clone()))
    }
}
