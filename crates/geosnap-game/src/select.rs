//! End-to-end round selection: pool, bucket check, sample.

use chrono::NaiveDate;
use geosnap_catalog::{build_candidate_pool, CatalogClient, PhotoCandidate, SearchQuery};
use geosnap_core::AppConfig;
use rand::Rng;

use crate::buckets::{day_buckets, require_distinct_days};
use crate::error::SelectionError;
use crate::sampler::sample;

/// Knobs for one round-selection call.
#[derive(Debug, Clone)]
pub struct SelectionOptions {
    /// Photos to select (rounds per game).
    pub rounds: usize,
    /// Minimum pairwise distance between selected photos.
    pub min_separation_km: f64,
    /// Pagination ceiling when scanning the catalog.
    pub max_pages: usize,
    pub page_size: u32,
    pub taken_after: Option<NaiveDate>,
    pub taken_before: Option<NaiveDate>,
}

impl Default for SelectionOptions {
    fn default() -> Self {
        Self {
            rounds: 5,
            min_separation_km: 1.0,
            max_pages: 20,
            page_size: 100,
            taken_after: None,
            taken_before: None,
        }
    }
}

impl SelectionOptions {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            rounds: config.rounds_per_game,
            min_separation_km: config.min_separation_km,
            max_pages: config.max_pages,
            page_size: config.page_size,
            taken_after: None,
            taken_before: None,
        }
    }
}

/// Selects an ordered set of exactly `options.rounds` photos for a game.
///
/// Builds the candidate pool from the catalog, fast-fails if the pool spans
/// too few distinct days, then runs the diversity sampler. The caller owns
/// the random source; independent concurrent calls must each supply their
/// own generator.
///
/// # Errors
///
/// Any [`SelectionError`]; never a partial selection.
pub async fn select_rounds<R: Rng + ?Sized>(
    client: &CatalogClient,
    options: &SelectionOptions,
    rng: &mut R,
) -> Result<Vec<PhotoCandidate>, SelectionError> {
    let query = SearchQuery {
        page_size: options.page_size,
        taken_after: options.taken_after,
        taken_before: options.taken_before,
    };

    let pool = build_candidate_pool(client, &query, options.rounds, options.max_pages).await?;
    tracing::debug!(pool_size = pool.len(), "candidate pool built");

    let buckets = day_buckets(pool.into_candidates());
    require_distinct_days(&buckets, options.rounds)?;

    let selection = sample(&buckets, options.rounds, options.min_separation_km, rng)?;
    tracing::info!(
        rounds = selection.len(),
        days = buckets.len(),
        min_separation_km = options.min_separation_km,
        "round selection complete"
    );
    Ok(selection)
}
