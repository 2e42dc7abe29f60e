//! Bounded stability arithmetic shared by every subsystem.
//!
//! All stability-like scalars in the runtime live in a closed interval and
//! evolve by bounded random walk. Centralizing the walk and the clamp makes
//! the dominant invariant -- "no update ever leaves the interval" -- hold by
//! construction everywhere.

use rand::Rng;

/// Apply one bounded random-walk step to `current`.
///
/// Adds a uniform draw from `[-amplitude, amplitude)` and clamps the result
/// into `[min, max]`. The result is always within the interval, regardless
/// of where `current` started.
pub fn random_walk(current: f64, amplitude: f64, min: f64, max: f64, rng: &mut impl Rng) -> f64 {
    let delta = rng.random_range(-amplitude..amplitude);
    (current + delta).clamp(min, max)
}

/// Drift `current` upward by `step`, never exceeding `ceiling`.
///
/// Values already at or above the ceiling are returned unchanged.
pub fn drift_toward(current: f64, step: f64, ceiling: f64) -> f64 {
    if current < ceiling {
        (current + step).min(ceiling)
    } else {
        current
    }
}

/// Ratio of an entity count to a capacity threshold.
///
/// Used for workload/load derivation in the growable collections. Both
/// counts are small (single digits); the conversion through `u32` keeps
/// the cast lossless.
pub fn load_ratio(count: usize, capacity: usize) -> f64 {
    let count = u32::try_from(count).map_or(f64::MAX, f64::from);
    let capacity = u32::try_from(capacity).map_or(f64::MAX, f64::from);
    if capacity <= 0.0 { 0.0 } else { count / capacity }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    #[test]
    fn random_walk_never_leaves_interval() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut value = 0.95;
        for _ in 0..10_000 {
            value = random_walk(value, 0.01, 0.8, 1.0, &mut rng);
            assert!((0.8..=1.0).contains(&value));
        }
    }

    #[test]
    fn random_walk_clamps_out_of_range_start() {
        let mut rng = SmallRng::seed_from_u64(42);
        let value = random_walk(5.0, 0.01, 0.0, 1.0, &mut rng);
        assert!((0.0..=1.0).contains(&value));
    }

    #[test]
    fn drift_stops_at_ceiling() {
        let mut value = 0.88;
        for _ in 0..100 {
            value = drift_toward(value, 0.01, 0.9);
        }
        assert!((value - 0.9).abs() < 1e-12);
    }

    #[test]
    fn drift_leaves_values_above_ceiling_alone() {
        let value = drift_toward(0.95, 0.01, 0.9);
        assert!((value - 0.95).abs() < 1e-12);
    }

    #[test]
    fn load_ratio_basic() {
        assert!((load_ratio(4, 5) - 0.8).abs() < 1e-12);
        assert!(load_ratio(0, 7).abs() < 1e-12);
        assert!(load_ratio(3, 0).abs() < 1e-12);
    }
}
