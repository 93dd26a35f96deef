//! Diversity-constrained round sampling.
//!
//! Greedy, single-pass heuristic: shuffle the day order, then let each day
//! contribute at most one candidate that keeps the minimum pairwise
//! separation. It never backtracks across days, so it can fail even when a
//! valid selection exists (an earlier day may consume the only photo that
//! would have left a later day viable). That is a deliberate trade of
//! completeness for simplicity and bounded runtime; changing it would change
//! observable selections under fixed seeds.

use geosnap_catalog::PhotoCandidate;
use geosnap_core::haversine_km;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::buckets::DayBuckets;
use crate::error::SelectionError;

/// Selects `count` candidates, no two from the same day and no two closer
/// than `min_separation_km`.
///
/// All randomness flows through `rng`; a fixed seed reproduces a fixed
/// selection. The scan visits at most `day_count * 10` days as a safety
/// ceiling against pathological inputs.
///
/// # Errors
///
/// Returns [`SelectionError::InsufficientDiverseSelection`] with the number
/// of candidates found if the day list or attempt budget runs out first.
/// Never returns a partial selection.
pub fn sample<R: Rng + ?Sized>(
    buckets: &DayBuckets,
    count: usize,
    min_separation_km: f64,
    rng: &mut R,
) -> Result<Vec<PhotoCandidate>, SelectionError> {
    let mut days: Vec<_> = buckets.keys().collect();
    days.shuffle(rng);

    let max_day_visits = buckets.len().saturating_mul(10);
    let mut day_visits = 0usize;
    let mut selected: Vec<PhotoCandidate> = Vec::with_capacity(count);

    for day in days {
        if selected.len() >= count {
            break;
        }
        day_visits += 1;
        if day_visits > max_day_visits {
            break;
        }

        let mut day_candidates: Vec<&PhotoCandidate> = buckets[day].iter().collect();
        day_candidates.shuffle(rng);

        for candidate in day_candidates {
            let far_enough = selected.iter().all(|picked| {
                haversine_km(
                    candidate.latitude,
                    candidate.longitude,
                    picked.latitude,
                    picked.longitude,
                ) >= min_separation_km
            });
            if far_enough {
                selected.push(candidate.clone());
                break;
            }
        }
    }

    if selected.len() < count {
        tracing::debug!(
            found = selected.len(),
            required = count,
            min_separation_km,
            days = buckets.len(),
            "diversity sampling fell short"
        );
        return Err(SelectionError::InsufficientDiverseSelection {
            found: selected.len(),
            required: count,
        });
    }

    Ok(selected)
}
