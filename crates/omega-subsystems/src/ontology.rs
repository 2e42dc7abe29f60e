//! The ontology framework: a discrete state machine over seven fixed
//! existential states.
//!
//! Transitions are probabilistic: the less existentially stable the
//! framework, the more likely the current state jumps to a uniformly
//! random member of the set. Drawing the current state again never counts
//! as a transition. External collaborators may force a transition, which
//! always counts.

use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::debug;

use omega_types::{FrameworkMode, OntologySnapshot, OntologyState};

/// Existential stability assigned at initialization.
const INITIAL_STABILITY: f64 = 0.92;
/// Per-tick stability walk amplitude.
const WALK_AMPLITUDE: f64 = 0.025;
/// Lower stability bound while live.
const STABILITY_FLOOR: f64 = 0.5;
/// Upper stability bound.
const STABILITY_CEILING: f64 = 1.0;
/// Scale factor mapping instability to transition probability.
const TRANSITION_PRESSURE: f64 = 0.3;

/// Processor of existential state transitions.
///
/// `current` is `None` while dormant -- the undefined sentinel left
/// behind by shutdown.
#[derive(Debug, Clone, PartialEq)]
pub struct OntologyFramework {
    initialized: bool,
    current: Option<OntologyState>,
    existential_stability: f64,
    transition_count: u64,
    mode: FrameworkMode,
}

impl OntologyFramework {
    /// Create a dormant framework with no defined state.
    pub const fn new() -> Self {
        Self {
            initialized: false,
            current: None,
            existential_stability: 0.0,
            transition_count: 0,
            mode: FrameworkMode::Dormant,
        }
    }

    /// Enter basic existence. No-op if already initialized.
    pub fn initialize(&mut self) {
        if self.initialized {
            return;
        }
        self.initialized = true;
        self.current = Some(OntologyState::Being);
        self.existential_stability = INITIAL_STABILITY;
        self.transition_count = 0;
        self.mode = FrameworkMode::Active;
        debug!(state = ?self.current, "ontology framework initialized");
    }

    /// Run one tick: maybe transition, then walk stability and re-derive
    /// the mode.
    ///
    /// The transition probability is `(1 - stability) * 0.3`, so a
    /// perfectly stable framework never transitions spontaneously.
    pub fn process(&mut self, rng: &mut impl Rng) {
        if !self.initialized {
            return;
        }

        let transition_probability = (1.0 - self.existential_stability) * TRANSITION_PRESSURE;
        if rng.random_range(0.0..1.0) < transition_probability {
            self.transition_to_random_state(rng);
        }

        self.existential_stability = crate::stability::random_walk(
            self.existential_stability,
            WALK_AMPLITUDE,
            STABILITY_FLOOR,
            STABILITY_CEILING,
            rng,
        );

        self.mode = if self.existential_stability > 0.95 {
            FrameworkMode::Transcendent
        } else if self.existential_stability > 0.8 {
            FrameworkMode::Stable
        } else if self.existential_stability > 0.6 {
            FrameworkMode::Fluctuating
        } else {
            FrameworkMode::Chaotic
        };
    }

    fn transition_to_random_state(&mut self, rng: &mut impl Rng) {
        let Some(candidate) = OntologyState::ALL.choose(rng).copied() else {
            return;
        };
        if Some(candidate) == self.current {
            // Re-drawing the current state is not a transition.
            return;
        }
        debug!(from = ?self.current, to = ?candidate, "ontological transition");
        self.current = Some(candidate);
        self.transition_count = self.transition_count.saturating_add(1);
    }

    /// Force a transition to `target`.
    ///
    /// Always counts as a transition, even to the current state. Returns
    /// `false` (and does nothing) while dormant.
    pub fn force_transition(&mut self, target: OntologyState) -> bool {
        if !self.initialized {
            return false;
        }
        debug!(from = ?self.current, to = ?target, "forced ontological transition");
        self.current = Some(target);
        self.transition_count = self.transition_count.saturating_add(1);
        true
    }

    /// Return to the undefined sentinel. No-op while uninitialized.
    pub fn shutdown(&mut self) {
        if !self.initialized {
            return;
        }
        *self = Self::new();
        debug!("ontology framework shut down");
    }

    /// Whether the framework is live.
    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Current existential state; `None` while dormant.
    pub const fn current(&self) -> Option<OntologyState> {
        self.current
    }

    /// Existential stability in `[0.5, 1.0]` while live.
    pub const fn existential_stability(&self) -> f64 {
        self.existential_stability
    }

    /// Number of counted transitions.
    pub const fn transition_count(&self) -> u64 {
        self.transition_count
    }

    /// Derived operating mode.
    pub const fn mode(&self) -> FrameworkMode {
        self.mode
    }

    /// Read-only view for the runtime's snapshot surface.
    pub const fn snapshot(&self) -> OntologySnapshot {
        OntologySnapshot {
            mode: self.mode,
            current: self.current,
            existential_stability: self.existential_stability,
            transition_count: self.transition_count,
        }
    }
}

impl Default for OntologyFramework {
    fn default() -> Self {
        Self::new()
    }
}
