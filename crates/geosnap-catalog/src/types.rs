//! Wire types for the asset catalog's metadata search endpoint.
//!
//! Every field a record may legitimately lack is an `Option` with
//! `#[serde(default)]` — a photo without GPS exif is a normal occurrence,
//! not a deserialization failure. Conversion into a validated
//! [`crate::PhotoCandidate`] happens separately.

use serde::Deserialize;

/// Top-level envelope of a `search/metadata` response.
#[derive(Debug, Deserialize)]
pub struct MetadataSearchResponse {
    pub assets: AssetPage,
}

/// One page of asset records. The pool builder drives pagination by page
/// number, so the catalog's own next-page cursor is ignored.
#[derive(Debug, Deserialize)]
pub struct AssetPage {
    #[serde(default)]
    pub items: Vec<RawAsset>,
}

/// A raw asset record as reported by the catalog. All metadata is optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAsset {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub exif_info: Option<RawExif>,
}

/// Exif block attached to an asset record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawExif {
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    /// Capture instant as an ISO 8601 string, usually with a UTC offset.
    #[serde(default)]
    pub date_time_original: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}
