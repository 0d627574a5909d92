//! External catalog probes.
//!
//! Each probe wraps one catalog and answers "found / not found" for a
//! barcode, normalizing its own response shape. The resolver only sees the
//! [`Probe`] trait, so adding a catalog means adding a type here and
//! slotting it into [`default_probes`].

mod google_books;
mod open_facts;
mod open_library;

pub use google_books::GoogleBooksProbe;
pub use open_facts::FactsProbe;
pub use open_library::OpenLibraryProbe;

use async_trait::async_trait;
use shelfscan_core::{CatalogConfig, ProductRecord, ProductSource};

use crate::client::CatalogClient;
use crate::error::LookupError;

/// One external catalog.
#[async_trait]
pub trait Probe: Send + Sync {
    /// The tag attached to every record this probe produces.
    fn source(&self) -> ProductSource;

    /// Looks up `barcode`, passed through verbatim.
    ///
    /// `Ok(None)` is a clean miss.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError`] on transport failure, a non-2xx status or a
    /// malformed payload.
    async fn probe(&self, barcode: &str) -> Result<Option<ProductRecord>, LookupError>;
}

/// The five catalogs in lookup priority order: food, beauty, general
/// products, Google Books, Open Library.
#[must_use]
pub fn default_probes(client: &CatalogClient, config: &CatalogConfig) -> Vec<Box<dyn Probe>> {
    vec![
        Box::new(FactsProbe::open_food_facts(
            client.clone(),
            &config.open_food_facts_url,
        )),
        Box::new(FactsProbe::open_beauty_facts(
            client.clone(),
            &config.open_beauty_facts_url,
        )),
        Box::new(FactsProbe::open_products_facts(
            client.clone(),
            &config.open_products_facts_url,
        )),
        Box::new(GoogleBooksProbe::new(
            client.clone(),
            &config.google_books_url,
        )),
        Box::new(OpenLibraryProbe::new(
            client.clone(),
            &config.open_library_url,
        )),
    ]
}
