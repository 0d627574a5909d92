use std::path::PathBuf;

use thiserror::Error;

/// Failures from a single external catalog.
///
/// The resolver demotes every variant to "not found for this source"; none
/// of them reach the caller of [`crate::Resolver::resolve`].
#[derive(Debug, Error)]
pub enum LookupError {
    /// Network, TLS or timeout failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid catalog base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

/// Failures from a local-inventory backend.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("inventory I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("inventory YAML error at {}: {source}", path.display())]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}
