//! Partitioning candidates by capture calendar day.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use geosnap_catalog::PhotoCandidate;

use crate::error::SelectionError;

/// Candidates grouped by the date component of their capture timestamp, in
/// the timestamp's own reporting offset.
///
/// A `BTreeMap` keeps the key order stable, so sampling is fully determined
/// by the supplied random source rather than by hash iteration order.
pub type DayBuckets = BTreeMap<NaiveDate, Vec<PhotoCandidate>>;

/// Groups candidates by capture day. Recomputed fresh on every call; every
/// candidate lands in exactly one bucket.
#[must_use]
pub fn day_buckets(candidates: Vec<PhotoCandidate>) -> DayBuckets {
    let mut buckets = DayBuckets::new();
    for candidate in candidates {
        buckets
            .entry(candidate.day_key())
            .or_default()
            .push(candidate);
    }
    buckets
}

/// Fast-fail check run before sampling: a request for `required` rounds is
/// structurally impossible when fewer distinct days exist, so there is no
/// point spending the sampler's attempt budget on it.
///
/// # Errors
///
/// Returns [`SelectionError::InsufficientDays`] with found/required counts.
pub fn require_distinct_days(buckets: &DayBuckets, required: usize) -> Result<(), SelectionError> {
    let found = buckets.len();
    if found < required {
        return Err(SelectionError::InsufficientDays { found, required });
    }
    Ok(())
}
