//! Open Library books API, keyed by `ISBN:{barcode}`.

use async_trait::async_trait;
use shelfscan_core::{ProductRecord, ProductSource};

use super::Probe;
use crate::client::CatalogClient;
use crate::error::LookupError;
use crate::normalize::normalize_open_library;
use crate::types::OpenLibraryResponse;

pub struct OpenLibraryProbe {
    client: CatalogClient,
    base_url: String,
}

impl OpenLibraryProbe {
    #[must_use]
    pub fn new(client: CatalogClient, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.to_owned(),
        }
    }
}

/// The bibkey Open Library echoes back as the response key.
pub(crate) fn isbn_bibkey(barcode: &str) -> String {
    format!("ISBN:{barcode}")
}

#[async_trait]
impl Probe for OpenLibraryProbe {
    fn source(&self) -> ProductSource {
        ProductSource::OpenLibrary
    }

    async fn probe(&self, barcode: &str) -> Result<Option<ProductRecord>, LookupError> {
        let bibkey = isbn_bibkey(barcode);
        let url = CatalogClient::endpoint(
            &self.base_url,
            &["api", "books"],
            &[("bibkeys", bibkey.as_str()), ("format", "json"), ("jscmd", "data")],
        )?;
        let Some(response) = self.client.get_json::<OpenLibraryResponse>(&url).await? else {
            return Ok(None);
        };
        Ok(normalize_open_library(response, &bibkey))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bibkey_prefixes_isbn() {
        assert_eq!(isbn_bibkey("9780140328721"), "ISBN:9780140328721");
    }
}
