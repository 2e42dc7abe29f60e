//! The void substrate: the base layer every other subsystem sits on.
//!
//! A single-entity subsystem tracking a depth/stability pair. Stability
//! walks within `[0.8, 1.0]`; depth follows stability between 3 and 11
//! layers. High stability deepens the substrate, low stability contracts
//! it.

use rand::Rng;
use tracing::debug;

use omega_types::{SubstrateSnapshot, SubstrateState};

use crate::stability;

/// Depth assigned at initialization.
const INITIAL_DEPTH: u32 = 7;
/// Stability assigned at initialization.
const INITIAL_STABILITY: f64 = 0.95;
/// Fluctuations applied per tick.
const INITIAL_FLUCTUATION_RATE: u32 = 3;
/// Maximum substrate depth.
const MAX_DEPTH: u32 = 11;
/// Minimum substrate depth while live.
const MIN_DEPTH: u32 = 3;
/// Per-tick stability walk amplitude.
const WALK_AMPLITUDE: f64 = 0.01;
/// Lower stability bound while live.
const STABILITY_FLOOR: f64 = 0.8;
/// Upper stability bound.
const STABILITY_CEILING: f64 = 1.0;

/// The foundational reality substrate.
///
/// Lifecycle: [`initialize`](Self::initialize) is an idempotent guard;
/// [`process`](Self::process) and [`shutdown`](Self::shutdown) are no-ops
/// while uninitialized.
#[derive(Debug, Clone, PartialEq)]
pub struct VoidSubstrate {
    initialized: bool,
    depth: u32,
    stability: f64,
    fluctuation_rate: u32,
    state: SubstrateState,
}

impl VoidSubstrate {
    /// Create a dormant substrate.
    pub const fn new() -> Self {
        Self {
            initialized: false,
            depth: 0,
            stability: 0.0,
            fluctuation_rate: 0,
            state: SubstrateState::Dormant,
        }
    }

    /// Bring the substrate live with its fixed starting values.
    ///
    /// No-op if already initialized, so a double start never resets a
    /// running substrate.
    pub fn initialize(&mut self) {
        if self.initialized {
            return;
        }
        self.initialized = true;
        self.depth = INITIAL_DEPTH;
        self.stability = INITIAL_STABILITY;
        self.fluctuation_rate = INITIAL_FLUCTUATION_RATE;
        self.state = SubstrateState::Active;
        debug!(
            depth = self.depth,
            stability = self.stability,
            "void substrate initialized"
        );
    }

    /// Apply one tick of void fluctuation.
    ///
    /// Stability walks within `[0.8, 1.0]`; depth grows toward 11 above
    /// 0.98 and shrinks toward 3 below 0.85. The state label derives from
    /// the 0.9 threshold.
    pub fn process(&mut self, rng: &mut impl Rng) {
        if !self.initialized {
            return;
        }

        self.stability = stability::random_walk(
            self.stability,
            WALK_AMPLITUDE,
            STABILITY_FLOOR,
            STABILITY_CEILING,
            rng,
        );

        if self.stability > 0.98 {
            let next = self.depth.saturating_add(1).min(MAX_DEPTH);
            if next != self.depth {
                debug!(depth = next, "void substrate deepened");
            }
            self.depth = next;
        } else if self.stability < 0.85 {
            let next = self.depth.saturating_sub(1).max(MIN_DEPTH);
            if next != self.depth {
                debug!(depth = next, "void substrate contracted");
            }
            self.depth = next;
        }

        self.state = if self.stability > 0.9 {
            SubstrateState::Stable
        } else {
            SubstrateState::Fluctuating
        };
    }

    /// Reset to construction defaults. No-op while uninitialized.
    pub fn shutdown(&mut self) {
        if !self.initialized {
            return;
        }
        *self = Self::new();
        debug!("void substrate shut down");
    }

    /// Whether the substrate is live.
    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Current substrate stability.
    pub const fn stability(&self) -> f64 {
        self.stability
    }

    /// Current void depth.
    pub const fn depth(&self) -> u32 {
        self.depth
    }

    /// Derived state label.
    pub const fn state(&self) -> SubstrateState {
        self.state
    }

    /// Read-only view for the runtime's snapshot surface.
    pub fn snapshot(&self) -> SubstrateSnapshot {
        SubstrateSnapshot {
            state: self.state,
            depth: self.depth,
            stability: self.stability,
            fluctuation_rate: self.fluctuation_rate,
        }
    }
}

impl Default for VoidSubstrate {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    #[test]
    fn initialize_sets_fixed_starting_values() {
        let mut substrate = VoidSubstrate::new();
        substrate.initialize();
        assert!(substrate.is_initialized());
        assert_eq!(substrate.depth(), 7);
        assert!((substrate.stability() - 0.95).abs() < 1e-12);
        assert_eq!(substrate.state(), SubstrateState::Active);
    }

    #[test]
    fn initialize_is_an_idempotent_guard() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut substrate = VoidSubstrate::new();
        substrate.initialize();
        for _ in 0..50 {
            substrate.process(&mut rng);
        }
        let before = substrate.clone();
        substrate.initialize();
        assert_eq!(substrate, before);
    }

    #[test]
    fn process_before_initialize_is_a_no_op() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut substrate = VoidSubstrate::new();
        substrate.process(&mut rng);
        assert_eq!(substrate, VoidSubstrate::new());
    }

    #[test]
    fn stability_and_depth_stay_bounded() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut substrate = VoidSubstrate::new();
        substrate.initialize();
        for _ in 0..2_000 {
            substrate.process(&mut rng);
            assert!((0.8..=1.0).contains(&substrate.stability()));
            assert!((3..=11).contains(&substrate.depth()));
        }
    }

    #[test]
    fn state_label_follows_stability_threshold() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut substrate = VoidSubstrate::new();
        substrate.initialize();
        substrate.process(&mut rng);
        let expected = if substrate.stability() > 0.9 {
            SubstrateState::Stable
        } else {
            SubstrateState::Fluctuating
        };
        assert_eq!(substrate.state(), expected);
    }

    #[test]
    fn shutdown_returns_to_dormant_defaults() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut substrate = VoidSubstrate::new();
        substrate.initialize();
        substrate.process(&mut rng);
        substrate.shutdown();
        assert_eq!(substrate, VoidSubstrate::new());
        assert_eq!(substrate.state(), SubstrateState::Dormant);
    }

    #[test]
    fn same_seed_reproduces_the_same_walk() {
        let mut a = VoidSubstrate::new();
        let mut b = VoidSubstrate::new();
        a.initialize();
        b.initialize();
        let mut rng_a = SmallRng::seed_from_u64(7);
        let mut rng_b = SmallRng::seed_from_u64(7);
        for _ in 0..100 {
            a.process(&mut rng_a);
            b.process(&mut rng_b);
        }
        assert_eq!(a, b);
    }
}
