//! Shared HTTP client for the external product catalogs.
//!
//! Wraps `reqwest` with catalog-specific status handling and typed JSON
//! decoding. Timeouts are owned here, at the transport layer; the resolver
//! itself has no deadline of its own.

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use shelfscan_core::CatalogConfig;

use crate::error::LookupError;

/// Cheap to clone; every probe holds its own handle to the same pool.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
}

impl CatalogClient {
    /// Creates a client with the given request timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, LookupError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(timeout_secs.min(5)))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Creates a client from the catalog section of the app config.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::Http`] if the underlying client cannot be built.
    pub fn from_config(config: &CatalogConfig) -> Result<Self, LookupError> {
        Self::new(config.request_timeout_secs, &config.user_agent)
    }

    /// Sends a GET request and decodes the JSON body into `T`.
    ///
    /// A 404 is a clean miss and yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// - [`LookupError::Http`] on network failure or timeout.
    /// - [`LookupError::UnexpectedStatus`] for any other non-2xx status.
    /// - [`LookupError::Deserialize`] if the body does not match `T`.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        url: &Url,
    ) -> Result<Option<T>, LookupError> {
        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !status.is_success() {
            return Err(LookupError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str::<T>(&body)
            .map(Some)
            .map_err(|e| LookupError::Deserialize {
                context: url.to_string(),
                source: e,
            })
    }

    /// Builds a request URL from a catalog base URL, extra path segments and
    /// query parameters.
    ///
    /// Segments and query values are percent-encoded, so a barcode is passed
    /// through verbatim without being able to alter the path.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::InvalidBaseUrl`] if `base_url` does not parse or
    /// cannot carry a path.
    pub(crate) fn endpoint(
        base_url: &str,
        segments: &[&str],
        query: &[(&str, &str)],
    ) -> Result<Url, LookupError> {
        let invalid = |reason: String| LookupError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason,
        };

        let mut url =
            Url::parse(base_url.trim_end_matches('/')).map_err(|e| invalid(e.to_string()))?;

        url.path_segments_mut()
            .map_err(|()| invalid("URL cannot be a base".to_owned()))?
            .pop_if_empty()
            .extend(segments);

        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in query {
                pairs.append_pair(k, v);
            }
        }

        Ok(url)
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
