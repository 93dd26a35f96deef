//! Shared fixtures for unit tests.

use chrono::{DateTime, NaiveDate};
use geosnap_catalog::{DisplayRefs, PhotoCandidate};

/// A candidate at the given point, captured at 12:00 UTC on 2024-06-`day`.
pub(crate) fn candidate(id: &str, lat: f64, lon: f64, day: u32) -> PhotoCandidate {
    let stamp = format!("2024-06-{day:02}T12:00:00+00:00");
    PhotoCandidate {
        id: id.to_string(),
        latitude: lat,
        longitude: lon,
        captured_at: DateTime::parse_from_rfc3339(&stamp).expect("valid fixture timestamp"),
        city: None,
        state: None,
        country: None,
        display: DisplayRefs {
            preview_url: format!("http://cat.local/api/assets/{id}/thumbnail?size=preview"),
            original_url: format!("http://cat.local/api/assets/{id}/original"),
            catalog_url: format!("http://cat.local/photos/{id}"),
        },
    }
}

pub(crate) fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, d).expect("valid fixture day")
}
