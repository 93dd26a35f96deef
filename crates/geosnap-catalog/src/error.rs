use thiserror::Error;

/// Errors returned by the asset catalog client and pool builder.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog could not be reached: connection failure, timeout, or TLS
    /// error from the underlying HTTP client.
    #[error("cannot reach asset catalog: {0}")]
    Unavailable(#[from] reqwest::Error),

    /// The catalog answered with a non-success HTTP status.
    #[error("asset catalog returned HTTP {status} for {url}")]
    Upstream { status: u16, url: String },

    /// The response body could not be deserialized into the expected shape.
    #[error("unexpected catalog response for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// Pagination finished with fewer valid geotagged photos than requested.
    #[error("not enough geotagged photos in the catalog: found {found}, need {required}")]
    InsufficientCandidates { found: usize, required: usize },
}
