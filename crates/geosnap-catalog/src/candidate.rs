//! Validated photo candidates.
//!
//! [`PhotoCandidate::from_raw`] is the only way a raw catalog record enters
//! the typed pipeline: both coordinates must be present, finite and non-zero,
//! and the capture timestamp must parse. Anything else is dropped here and
//! never represented downstream — no sentinel values.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::types::RawAsset;

/// Opaque display handles for a candidate, passed through to the caller
/// untouched. The game core never fetches image bytes itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRefs {
    /// Preview-quality image endpoint on the catalog.
    pub preview_url: String,
    /// Original-quality image endpoint on the catalog.
    pub original_url: String,
    /// Human-facing catalog page for the photo.
    pub catalog_url: String,
}

/// A geotagged, dated photo eligible for round selection.
///
/// Fields are public for the consuming session/API layer, but production
/// code must only obtain values through [`PhotoCandidate::from_raw`], which
/// enforces the coordinate and timestamp invariants. Literal construction
/// is reserved for test fixtures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhotoCandidate {
    pub id: String,
    /// Degrees, finite, each axis non-zero.
    pub latitude: f64,
    pub longitude: f64,
    pub captured_at: DateTime<FixedOffset>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub display: DisplayRefs,
}

impl PhotoCandidate {
    /// Validates a raw catalog record into a candidate.
    ///
    /// Returns `None` when the record lacks an id, has a missing,
    /// zero-valued, or non-finite coordinate on either axis, or carries an
    /// unparseable capture timestamp. `api_url` is the catalog API base used
    /// to build the display references.
    #[must_use]
    pub fn from_raw(raw: RawAsset, api_url: &str) -> Option<Self> {
        let id = raw.id.filter(|s| !s.is_empty())?;
        let exif = raw.exif_info?;

        let latitude = exif.latitude?;
        let longitude = exif.longitude?;
        if !latitude.is_finite() || !longitude.is_finite() {
            return None;
        }
        // A zero coordinate means "no GPS fix" in practice, not the equator
        // or prime meridian; either axis at zero drops the record.
        if latitude == 0.0 || longitude == 0.0 {
            return None;
        }

        let captured_at = parse_capture_timestamp(exif.date_time_original.as_deref()?)?;

        let api_url = api_url.trim_end_matches('/');
        let display = DisplayRefs {
            preview_url: format!("{api_url}/assets/{id}/thumbnail?size=preview"),
            original_url: format!("{api_url}/assets/{id}/original"),
            catalog_url: format!("{}/photos/{id}", api_url.trim_end_matches("/api")),
        };

        Some(Self {
            id,
            latitude,
            longitude,
            captured_at,
            city: exif.city,
            state: exif.state,
            country: exif.country,
            display,
        })
    }

    /// Calendar day of capture, in the timestamp's own reporting offset.
    #[must_use]
    pub fn day_key(&self) -> NaiveDate {
        self.captured_at.date_naive()
    }
}

/// Parses an exif capture timestamp: RFC 3339 first, then a bare
/// `YYYY-MM-DDTHH:MM:SS` local form treated as UTC.
fn parse_capture_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt);
    }
    raw.parse::<NaiveDateTime>()
        .ok()
        .map(|naive| naive.and_utc().fixed_offset())
}
