//! Paginated candidate pool construction.
//!
//! Scans the catalog page by page, runs every raw record through the
//! validating parse, and aggregates the survivors into an id-deduplicated
//! pool. Malformed records are dropped silently; only aggregate
//! insufficiency is an error.

use std::collections::HashSet;

use crate::candidate::PhotoCandidate;
use crate::client::{CatalogClient, SearchQuery};
use crate::error::CatalogError;

/// An id-keyed set of validated candidates, in first-seen order.
#[derive(Debug, Default)]
pub struct CandidatePool {
    candidates: Vec<PhotoCandidate>,
    seen_ids: HashSet<String>,
}

impl CandidatePool {
    /// Adds a candidate unless its id is already present. Returns whether the
    /// candidate was inserted.
    fn insert(&mut self, candidate: PhotoCandidate) -> bool {
        if self.seen_ids.contains(&candidate.id) {
            return false;
        }
        self.seen_ids.insert(candidate.id.clone());
        self.candidates.push(candidate);
        true
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PhotoCandidate> {
        self.candidates.iter()
    }

    /// Consumes the pool, yielding candidates in first-seen order.
    #[must_use]
    pub fn into_candidates(self) -> Vec<PhotoCandidate> {
        self.candidates
    }
}

impl<'a> IntoIterator for &'a CandidatePool {
    type Item = &'a PhotoCandidate;
    type IntoIter = std::slice::Iter<'a, PhotoCandidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.iter()
    }
}

/// Builds a candidate pool by paginating the catalog's metadata search.
///
/// Requests pages starting at 1 until the catalog returns an empty page or
/// `max_pages` is reached. Records without usable GPS or capture metadata are
/// skipped; duplicate ids are ignored after their first occurrence.
///
/// # Errors
///
/// - [`CatalogError::InsufficientCandidates`] if, after pagination ends, the
///   pool holds fewer than `required` candidates.
/// - Any [`CatalogError`] from the underlying page fetches, propagated
///   without retry.
pub async fn build_candidate_pool(
    client: &CatalogClient,
    query: &SearchQuery,
    required: usize,
    max_pages: usize,
) -> Result<CandidatePool, CatalogError> {
    let mut pool = CandidatePool::default();

    for page in 1..=u32::try_from(max_pages).unwrap_or(u32::MAX) {
        let items = client.search_metadata_page(page, query).await?;
        if items.is_empty() {
            break;
        }

        let page_total = items.len();
        let mut kept = 0usize;
        for raw in items {
            if let Some(candidate) = PhotoCandidate::from_raw(raw, client.api_url()) {
                if pool.insert(candidate) {
                    kept += 1;
                }
            }
        }
        tracing::debug!(
            page,
            page_total,
            kept,
            pool_size = pool.len(),
            "scanned catalog page"
        );
    }

    if pool.len() < required {
        return Err(CatalogError::InsufficientCandidates {
            found: pool.len(),
            required,
        });
    }

    Ok(pool)
}
