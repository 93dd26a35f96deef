//! HTTP client for the asset catalog's metadata search API.
//!
//! Wraps `reqwest` with catalog-specific error handling, API key management,
//! and typed response deserialization. The catalog is an Immich-style server:
//! authentication is an `x-api-key` header and metadata search is a POST with
//! a JSON filter body.

use std::time::Duration;

use chrono::NaiveDate;
use reqwest::Client;
use serde_json::json;

use crate::error::CatalogError;
use crate::types::{MetadataSearchResponse, RawAsset};

/// Filters applied to every metadata search page.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    /// Records requested per page (the catalog may return fewer).
    pub page_size: u32,
    /// Only photos captured on or after this day.
    pub taken_after: Option<NaiveDate>,
    /// Only photos captured on or before this day.
    pub taken_before: Option<NaiveDate>,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            page_size: 100,
            taken_after: None,
            taken_before: None,
        }
    }
}

/// Client for the asset catalog REST API.
///
/// Use [`CatalogClient::new`] for production or [`CatalogClient::with_base_url`]
/// to point at a mock server in tests.
pub struct CatalogClient {
    client: Client,
    api_url: String,
    api_key: String,
}

impl CatalogClient {
    /// Creates a client for the catalog at `api_url` (e.g.
    /// `http://immich.local:2283/api`).
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Unavailable`] if the underlying
    /// `reqwest::Client` cannot be constructed.
    pub fn new(api_url: &str, api_key: &str, timeout_secs: u64) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("geosnap/0.1 (round-selection)")
            .build()?;

        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_owned(),
            api_key: api_key.to_owned(),
        })
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Unavailable`] if the underlying
    /// `reqwest::Client` cannot be constructed.
    pub fn with_base_url(base_url: &str, api_key: &str) -> Result<Self, CatalogError> {
        Self::new(base_url, api_key, 30)
    }

    /// The normalized catalog API base URL, without a trailing slash.
    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Fetches one page of asset records from the metadata search endpoint.
    ///
    /// Pages are 1-based. An empty `items` list means the catalog is
    /// exhausted. Dateless and GPS-less records are returned as-is; filtering
    /// them is the pool builder's job.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Unavailable`] on network failure.
    /// - [`CatalogError::Upstream`] on a non-2xx HTTP status.
    /// - [`CatalogError::Deserialize`] if the body does not match the
    ///   expected shape.
    pub async fn search_metadata_page(
        &self,
        page: u32,
        query: &SearchQuery,
    ) -> Result<Vec<RawAsset>, CatalogError> {
        let url = format!("{}/search/metadata", self.api_url);

        let mut body = json!({
            "withExif": true,
            "isNotInAlbum": false,
            "size": query.page_size,
            "page": page,
        });
        if let Some(after) = query.taken_after {
            body["takenAfter"] = json!(format!("{after}T00:00:00.000Z"));
        }
        if let Some(before) = query.taken_before {
            body["takenBefore"] = json!(format!("{before}T23:59:59.999Z"));
        }

        let response = self
            .client
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("Accept", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Upstream {
                status: status.as_u16(),
                url,
            });
        }

        let text = response.text().await?;
        let parsed: MetadataSearchResponse =
            serde_json::from_str(&text).map_err(|e| CatalogError::Deserialize {
                context: format!("search/metadata page {page}"),
                source: e,
            })?;

        Ok(parsed.assets.items)
    }
}
