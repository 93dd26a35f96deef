//! Distance-to-score curve for guess evaluation.
//!
//! The curve is piecewise: a flat top tier inside the perfect radius, a flat
//! 4000-point band under 1 km, then linearly interpolated bands down to zero.
//! Only the top tier scales with `max_points`; every other band uses fixed
//! point constants. That asymmetry is deliberate and part of the observable
//! scoring behavior — changing `max_points` must not reshape the lower bands.

use serde::Serialize;

use crate::geo::haversine_km;

/// Guesses closer than this many kilometers earn the full `max_points`.
pub const DEFAULT_PERFECT_RADIUS_KM: f64 = 0.1;

/// Outcome of scoring a single guess against a round's actual location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GuessOutcome {
    /// Great-circle distance between guess and actual, in kilometers.
    pub distance_km: f64,
    /// Points awarded, in `[0, max_points]`.
    pub score: u32,
}

/// Scores a guess `distance_km` kilometers from the actual location, using
/// the default perfect radius of 0.1 km.
#[must_use]
pub fn score(distance_km: f64, max_points: u32) -> u32 {
    score_with_perfect_radius(distance_km, max_points, DEFAULT_PERFECT_RADIUS_KM)
}

/// Scores a guess with an explicit perfect-guess radius.
///
/// The result is truncated toward zero and clamped into `[0, max_points]`.
/// Monotonically non-increasing in `distance_km` over the whole domain.
#[must_use]
pub fn score_with_perfect_radius(
    distance_km: f64,
    max_points: u32,
    perfect_radius_km: f64,
) -> u32 {
    if distance_km < perfect_radius_km {
        return max_points;
    }

    let raw = if distance_km < 1.0 {
        4000.0
    } else if distance_km < 10.0 {
        3000.0 - (distance_km - 1.0) / 9.0 * 1000.0
    } else if distance_km < 50.0 {
        2000.0 - (distance_km - 10.0) / 40.0 * 1000.0
    } else if distance_km < 100.0 {
        1000.0 - (distance_km - 50.0) / 50.0 * 500.0
    } else if distance_km < 500.0 {
        500.0 - (distance_km - 100.0) / 400.0 * 400.0
    } else if distance_km < 1000.0 {
        100.0 - (distance_km - 500.0) / 500.0 * 50.0
    } else {
        (50.0 * (1.0 - (distance_km / 10_000.0).min(1.0))).max(0.0)
    };

    let truncated = raw.trunc();
    if truncated <= 0.0 {
        return 0;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let points = truncated as u64;
    u32::try_from(points.min(u64::from(max_points))).unwrap_or(max_points)
}

/// Computes the [`GuessOutcome`] for a submitted guess against a round's
/// actual coordinate.
///
/// Pure function of its inputs; coordinate validation is the caller's
/// responsibility (non-finite inputs yield a NaN distance and a zero score).
#[must_use]
pub fn score_guess(
    guess_lat: f64,
    guess_lon: f64,
    actual_lat: f64,
    actual_lon: f64,
    max_points: u32,
    perfect_radius_km: f64,
) -> GuessOutcome {
    let distance_km = haversine_km(guess_lat, guess_lon, actual_lat, actual_lon);
    GuessOutcome {
        distance_km,
        score: score_with_perfect_radius(distance_km, max_points, perfect_radius_km),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_guess_earns_max_points() {
        assert_eq!(score(0.05, 5000), 5000);
        assert_eq!(score(0.0, 5000), 5000);
    }

    #[test]
    fn sub_kilometer_band_is_flat_4000() {
        assert_eq!(score(0.1, 5000), 4000);
        assert_eq!(score(0.5, 5000), 4000);
        assert_eq!(score(0.999, 5000), 4000);
    }

    #[test]
    fn five_km_lands_strictly_between_2000_and_3000() {
        let s = score(5.0, 5000);
        assert!(s > 2000 && s < 3000, "expected (2000, 3000), got {s}");
        // (5 - 1) / 9 * 1000 = 444.4, truncated off 3000.
        assert_eq!(s, 2555);
    }

    #[test]
    fn band_boundaries_are_continuous() {
        assert_eq!(score(1.0, 5000), 3000);
        assert_eq!(score(10.0, 5000), 2000);
        assert_eq!(score(50.0, 5000), 1000);
        assert_eq!(score(100.0, 5000), 500);
        assert_eq!(score(500.0, 5000), 100);
        assert_eq!(score(1000.0, 5000), 45);
    }

    #[test]
    fn far_tier_decays_linearly_to_zero() {
        assert_eq!(score(2000.0, 5000), 40);
        assert_eq!(score(5000.0, 5000), 25);
        assert_eq!(score(10_000.0, 5000), 0);
        assert_eq!(score(25_000.0, 5000), 0);
    }

    #[test]
    fn score_never_increases_with_distance() {
        let mut d = 0.0;
        let mut previous = score(d, 5000);
        while d < 12_000.0 {
            d += 0.37;
            let current = score(d, 5000);
            assert!(
                current <= previous,
                "score increased from {previous} to {current} at {d} km"
            );
            previous = current;
        }
    }

    #[test]
    fn low_max_points_clamps_fixed_bands() {
        // The 4000-point band is a fixed constant; a smaller max_points caps it.
        assert_eq!(score(0.5, 3000), 3000);
        assert_eq!(score(0.05, 3000), 3000);
        assert_eq!(score(5.0, 3000), 2555);
    }

    #[test]
    fn max_points_only_scales_top_tier() {
        assert_eq!(score(0.05, 10_000), 10_000);
        // Everything below the perfect radius band keeps its fixed value.
        assert_eq!(score(0.5, 10_000), 4000);
        assert_eq!(score(5.0, 10_000), 2555);
    }

    #[test]
    fn custom_perfect_radius_widens_top_tier() {
        assert_eq!(score_with_perfect_radius(0.4, 5000, 0.5), 5000);
        assert_eq!(score_with_perfect_radius(0.6, 5000, 0.5), 4000);
    }

    #[test]
    fn score_guess_composes_distance_and_curve() {
        // Quarter great-circle: ~10007.5 km away, deep in the zero tail.
        let outcome = score_guess(0.0, 0.0, 0.0, 90.0, 5000, 0.1);
        assert!((outcome.distance_km - 10_007.5).abs() < 1.0);
        assert_eq!(outcome.score, 0);

        let exact = score_guess(48.8566, 2.3522, 48.8566, 2.3522, 5000, 0.1);
        assert!(exact.distance_km.abs() < 1e-9);
        assert_eq!(exact.score, 5000);
    }
}
