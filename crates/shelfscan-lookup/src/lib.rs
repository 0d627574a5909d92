//! Universal product lookup for shelfscan.
//!
//! Given a scanned barcode, [`Resolver`] checks the shop's own inventory,
//! then probes external catalogs (Open Food Facts, Open Beauty Facts, Open
//! Products Facts, Google Books, Open Library) in that order and returns the
//! first hit, normalized to a [`shelfscan_core::ProductRecord`]. When nothing
//! matches, the manual-entry sentinel is returned instead of an error.

pub mod client;
pub mod error;
pub mod inventory;
pub mod normalize;
pub mod probes;
pub mod resolver;
pub mod save_back;
pub mod types;

pub use client::CatalogClient;
pub use error::{InventoryError, LookupError};
pub use inventory::{InMemoryInventory, LocalInventory, YamlInventory};
pub use probes::{default_probes, FactsProbe, GoogleBooksProbe, OpenLibraryProbe, Probe};
pub use resolver::{Resolution, Resolver};
pub use save_back::spawn_save_back;
