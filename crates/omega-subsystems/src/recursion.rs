//! The recursion layer set: a growable, shrinkable stack of reality layers.
//!
//! Layers iterate independently each tick; deeper layers fluctuate harder.
//! The set's depth is never stored -- it is always the number of living
//! layers. A highly stable set grows by one layer per qualifying tick (up
//! to the fixed ceiling); layers whose stability collapses below 0.3 are
//! removed on the next pass.

use rand::Rng;
use tracing::debug;

use omega_types::{LayerSnapshot, LayerState, RecursionSnapshot, RecursionState};

/// Fixed ceiling on the number of layers.
const MAX_LAYERS: usize = 13;
/// Number of layers seeded at initialization.
const SEED_LAYERS: u32 = 3;
/// Stability of the first seeded layer; each subsequent seed is 0.05 lower.
const SEED_STABILITY: f64 = 0.9;
/// Seed-stability decrement per layer index.
const SEED_STABILITY_STEP: f64 = 0.05;
/// Stability of a layer born from a growth event.
const SPAWN_STABILITY: f64 = 0.9;
/// Set-level stability reported between initialization and the first tick.
const INITIAL_SET_STABILITY: f64 = 0.88;
/// Base per-iteration walk amplitude, before depth scaling.
const WALK_AMPLITUDE: f64 = 0.05;
/// Layers below this stability are culled.
const CULL_THRESHOLD: f64 = 0.3;
/// Average stability required to grow a new layer.
const GROWTH_THRESHOLD: f64 = 0.95;

/// A single recursive reality layer.
#[derive(Debug, Clone, PartialEq)]
pub struct RecursiveLayer {
    index: u32,
    stability: f64,
    iterations: u64,
    state: LayerState,
}

impl RecursiveLayer {
    /// Create a forming layer at the given creation index.
    pub const fn new(index: u32, initial_stability: f64) -> Self {
        Self {
            index,
            stability: initial_stability,
            iterations: 0,
            state: LayerState::Forming,
        }
    }

    /// Run one iteration: a depth-scaled bounded walk plus label derivation.
    ///
    /// The walk amplitude grows with the layer index (`1 + 0.1 * index`),
    /// so deeper layers are the first to destabilize.
    pub fn iterate(&mut self, rng: &mut impl Rng) {
        self.iterations = self.iterations.saturating_add(1);

        let amplitude = WALK_AMPLITUDE * (1.0 + 0.1 * f64::from(self.index));
        self.stability = crate::stability::random_walk(self.stability, amplitude, 0.0, 1.0, rng);

        self.state = if self.stability > 0.9 {
            LayerState::Stable
        } else if self.stability > 0.5 {
            LayerState::Fluctuating
        } else {
            LayerState::Unstable
        };
    }

    /// Creation-order index.
    pub const fn index(&self) -> u32 {
        self.index
    }

    /// Current layer stability in `[0, 1]`.
    pub const fn stability(&self) -> f64 {
        self.stability
    }

    /// Iterations processed so far.
    pub const fn iterations(&self) -> u64 {
        self.iterations
    }

    /// Derived state label.
    pub const fn state(&self) -> LayerState {
        self.state
    }

    /// Read-only view of this layer.
    pub const fn snapshot(&self) -> LayerSnapshot {
        LayerSnapshot {
            index: self.index,
            stability: self.stability,
            iterations: self.iterations,
            state: self.state,
        }
    }

    #[cfg(test)]
    pub(crate) const fn set_stability(&mut self, value: f64) {
        self.stability = value;
    }
}

/// The growable/shrinkable set of recursive layers.
#[derive(Debug, Clone, PartialEq)]
pub struct RecursionLayerSet {
    initialized: bool,
    layers: Vec<RecursiveLayer>,
    next_index: u32,
    stability: f64,
    state: RecursionState,
}

impl RecursionLayerSet {
    /// Create a dormant, empty layer set.
    pub const fn new() -> Self {
        Self {
            initialized: false,
            layers: Vec::new(),
            next_index: 0,
            stability: 0.0,
            state: RecursionState::Dormant,
        }
    }

    /// Seed the set with three layers of decreasing stability.
    ///
    /// No-op if already initialized.
    pub fn initialize(&mut self) {
        if self.initialized {
            return;
        }
        self.initialized = true;
        self.layers = (0..SEED_LAYERS)
            .map(|index| {
                RecursiveLayer::new(index, SEED_STABILITY - SEED_STABILITY_STEP * f64::from(index))
            })
            .collect();
        self.next_index = SEED_LAYERS;
        self.stability = INITIAL_SET_STABILITY;
        self.state = RecursionState::Recursing;
        debug!(depth = self.layers.len(), "recursion layers initialized");
    }

    /// Run one tick: iterate every layer, grow on high average stability,
    /// cull collapsed layers, re-derive the set label.
    ///
    /// The growth check uses the average over the layers that just
    /// iterated; at most one layer is added per tick. Culling collects
    /// survivors rather than mutating mid-iteration.
    pub fn process(&mut self, rng: &mut impl Rng) {
        if !self.initialized {
            return;
        }

        for layer in &mut self.layers {
            layer.iterate(rng);
        }

        let average = self.average_stability();
        self.stability = average;

        if average > GROWTH_THRESHOLD && self.layers.len() < MAX_LAYERS {
            self.layers
                .push(RecursiveLayer::new(self.next_index, SPAWN_STABILITY));
            self.next_index = self.next_index.saturating_add(1);
            debug!(depth = self.layers.len(), "recursion layer added");
        }

        let before = self.layers.len();
        self.layers.retain(|layer| layer.stability() >= CULL_THRESHOLD);
        if self.layers.len() < before {
            debug!(
                removed = before.saturating_sub(self.layers.len()),
                depth = self.layers.len(),
                "unstable recursion layers culled"
            );
        }

        self.state = if average > 0.8 {
            RecursionState::StableRecursion
        } else {
            RecursionState::ChaoticRecursion
        };
    }

    /// Clear all layers and return to dormancy. No-op while uninitialized.
    pub fn shutdown(&mut self) {
        if !self.initialized {
            return;
        }
        *self = Self::new();
        debug!("recursion layers shut down");
    }

    /// Whether the set is live.
    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Current depth. Always the number of living layers.
    pub const fn depth(&self) -> usize {
        self.layers.len()
    }

    /// The fixed layer ceiling.
    pub const fn max_layers(&self) -> usize {
        MAX_LAYERS
    }

    /// Average stability across living layers, 0 if there are none.
    pub fn average_stability(&self) -> f64 {
        if self.layers.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.layers.iter().map(RecursiveLayer::stability).sum();
        let count = u32::try_from(self.layers.len()).map_or(f64::MAX, f64::from);
        sum / count
    }

    /// The set's reported stability: 0.88 between initialization and the
    /// first tick, the layer average afterwards.
    pub const fn stability(&self) -> f64 {
        self.stability
    }

    /// Derived state label.
    pub const fn state(&self) -> RecursionState {
        self.state
    }

    /// The living layers, in creation order.
    pub fn layers(&self) -> &[RecursiveLayer] {
        &self.layers
    }

    /// Read-only view for the runtime's snapshot surface.
    pub fn snapshot(&self) -> RecursionSnapshot {
        RecursionSnapshot {
            state: self.state,
            depth: self.layers.len(),
            max_layers: MAX_LAYERS,
            stability: self.stability,
            layers: self.layers.iter().map(RecursiveLayer::snapshot).collect(),
        }
    }

    #[cfg(test)]
    pub(crate) fn layers_mut(&mut self) -> &mut Vec<RecursiveLayer> {
        &mut self.layers
    }
}

impl Default for RecursionLayerSet {
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
    fn initialize_seeds_three_layers_with_decreasing_stability() {
        let mut set = RecursionLayerSet::new();
        set.initialize();
        assert_eq!(set.depth(), 3);
        let stabilities: Vec<f64> = set.layers().iter().map(RecursiveLayer::stability).collect();
        let expected = [0.90, 0.85, 0.80];
        for (actual, want) in stabilities.iter().zip(expected.iter()) {
            assert!((actual - want).abs() < 1e-12);
        }
        assert!((set.stability() - 0.88).abs() < 1e-12);
        assert_eq!(set.state(), RecursionState::Recursing);
    }

    #[test]
    fn depth_always_equals_layer_count() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut set = RecursionLayerSet::new();
        set.initialize();
        for _ in 0..500 {
            set.process(&mut rng);
            assert_eq!(set.depth(), set.layers().len());
            assert!(set.depth() <= set.max_layers());
        }
    }

    #[test]
    fn layer_stabilities_stay_in_unit_interval() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut set = RecursionLayerSet::new();
        set.initialize();
        for _ in 0..500 {
            set.process(&mut rng);
            for layer in set.layers() {
                assert!((0.0..=1.0).contains(&layer.stability()));
            }
        }
    }

    #[test]
    fn collapsed_layer_is_removed_on_next_process() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut set = RecursionLayerSet::new();
        set.initialize();
        if let Some(layer) = set.layers_mut().first_mut() {
            // Far enough below the cull threshold that one bounded
            // iteration step cannot pull it back above 0.3.
            layer.set_stability(0.1);
        }
        set.process(&mut rng);
        // The pinned layer cannot climb back above the cull threshold in
        // one bounded step, and the remaining average is far below the
        // growth threshold, so the set shrinks by exactly one.
        assert_eq!(set.depth(), 2);
        assert!(set.layers().iter().all(|layer| layer.stability() >= 0.3));
    }

    #[test]
    fn high_average_grows_exactly_one_layer() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut set = RecursionLayerSet::new();
        set.initialize();
        // Pin every layer near the top so the post-iteration average
        // clears the growth threshold (walk amplitude is at most ~0.06).
        for layer in set.layers_mut() {
            layer.set_stability(1.0);
        }
        let before = set.depth();
        set.process(&mut rng);
        assert_eq!(set.depth(), before.saturating_add(1));
    }

    #[test]
    fn growth_respects_the_ceiling() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut set = RecursionLayerSet::new();
        set.initialize();
        for _ in 0..2_000 {
            for layer in set.layers_mut() {
                layer.set_stability(1.0);
            }
            set.process(&mut rng);
            assert!(set.depth() <= set.max_layers());
        }
        assert_eq!(set.depth(), set.max_layers());
    }

    #[test]
    fn spawned_layers_get_fresh_indices() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut set = RecursionLayerSet::new();
        set.initialize();
        for layer in set.layers_mut() {
            layer.set_stability(1.0);
        }
        set.process(&mut rng);
        let indices: Vec<u32> = set.layers().iter().map(RecursiveLayer::index).collect();
        let mut deduped = indices.clone();
        deduped.dedup();
        assert_eq!(indices, deduped);
        assert_eq!(set.layers().last().map(RecursiveLayer::index), Some(3));
    }

    #[test]
    fn shutdown_clears_everything() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut set = RecursionLayerSet::new();
        set.initialize();
        set.process(&mut rng);
        set.shutdown();
        assert_eq!(set, RecursionLayerSet::new());
        assert_eq!(set.depth(), 0);
        assert_eq!(set.state(), RecursionState::Dormant);
    }
}
