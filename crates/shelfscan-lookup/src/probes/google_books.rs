//! Google Books volume search by ISBN.

use async_trait::async_trait;
use shelfscan_core::{ProductRecord, ProductSource};

use super::Probe;
use crate::client::CatalogClient;
use crate::error::LookupError;
use crate::normalize::normalize_google_books;
use crate::types::GoogleBooksResponse;

pub struct GoogleBooksProbe {
    client: CatalogClient,
    base_url: String,
}

impl GoogleBooksProbe {
    #[must_use]
    pub fn new(client: CatalogClient, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.to_owned(),
        }
    }
}

#[async_trait]
impl Probe for GoogleBooksProbe {
    fn source(&self) -> ProductSource {
        ProductSource::GoogleBooks
    }

    async fn probe(&self, barcode: &str) -> Result<Option<ProductRecord>, LookupError> {
        let query = format!("isbn:{barcode}");
        let url = CatalogClient::endpoint(
            &self.base_url,
            &["books", "v1", "volumes"],
            &[("q", query.as_str())],
        )?;
        let Some(response) = self.client.get_json::<GoogleBooksResponse>(&url).await? else {
            return Ok(None);
        };
        Ok(normalize_google_books(response))
    }
}
