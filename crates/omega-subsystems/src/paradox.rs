//! The paradox resolver: a growable pool of logical contradictions being
//! worked toward resolution.
//!
//! Resolution speed scales with the resolver's efficiency and inversely
//! with each paradox's complexity. Resolved paradoxes leave the active
//! set and bump a monotonic counter. New paradoxes spawn from a fixed
//! pool while capacity remains; sustained workload erodes efficiency and
//! slack restores it.

use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::debug;

use omega_types::{ParadoxSnapshot, ResolverSnapshot, ResolverState};

/// Soft ceiling on concurrently active paradoxes.
const CAPACITY_THRESHOLD: usize = 5;
/// Efficiency assigned at initialization.
const INITIAL_EFFICIENCY: f64 = 0.85;
/// Efficiency floor under sustained workload.
const EFFICIENCY_FLOOR: f64 = 0.3;
/// Efficiency ceiling under slack.
const EFFICIENCY_CEILING: f64 = 0.95;
/// Per-tick probability of a new paradox spawning (capacity permitting).
const SPAWN_PROBABILITY: f64 = 0.1;
/// Workload above which efficiency erodes.
const OVERLOAD_THRESHOLD: f64 = 0.8;
/// Workload below which efficiency recovers.
const SLACK_THRESHOLD: f64 = 0.4;
/// Per-tick efficiency erosion when overloaded.
const EROSION_STEP: f64 = 0.02;
/// Per-tick efficiency recovery when slack.
const RECOVERY_STEP: f64 = 0.01;

/// The three foundational paradoxes seeded at initialization.
const SEED_PARADOXES: [(&str, &str, f64); 3] = [
    ("LIAR_PARADOX", "This statement is false", 0.7),
    ("SHIP_OF_THESEUS", "Identity through change", 0.5),
    ("QUANTUM_MEASUREMENT", "Observer effect contradiction", 0.8),
];

/// Pool of paradoxes that may spawn during processing.
const SPAWN_POOL: [(&str, &str); 6] = [
    ("TEMPORAL_PARADOX", "Time travel causality violation"),
    ("LOGICAL_CONTRADICTION", "Contradictory logical statement"),
    ("EXISTENTIAL_PARADOX", "Existence versus non-existence"),
    ("CAUSAL_LOOP", "Effect precedes cause"),
    ("INFINITE_REGRESSION", "Endless recursive definition"),
    ("SELF_REFERENCE", "Statement refers to itself"),
];

/// A single unresolved contradiction.
#[derive(Debug, Clone, PartialEq)]
pub struct Paradox {
    name: String,
    description: String,
    complexity: f64,
    resolution_progress: f64,
    resolved: bool,
}

impl Paradox {
    /// Create an unresolved paradox of the given complexity.
    pub fn new(name: impl Into<String>, description: impl Into<String>, complexity: f64) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            complexity,
            resolution_progress: 0.0,
            resolved: false,
        }
    }

    /// Advance resolution by one step.
    ///
    /// `draw` is the random multiplier in `[0.5, 1.0]`; it is a parameter
    /// so deterministic tests can drive resolution with a fixed rate. The
    /// first time progress reaches 1.0 it is clamped there (overshoot is
    /// not preserved) and the paradox flips to resolved.
    pub fn advance(&mut self, efficiency: f64, draw: f64) {
        if self.resolved {
            return;
        }
        let rate = efficiency / (self.complexity * 2.0);
        self.resolution_progress += rate * draw;
        if self.resolution_progress >= 1.0 {
            self.resolution_progress = 1.0;
            self.resolved = true;
        }
    }

    /// Paradox name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolution difficulty in `(0, 1]`.
    pub const fn complexity(&self) -> f64 {
        self.complexity
    }

    /// Progress toward resolution in `[0, 1]`.
    pub const fn resolution_progress(&self) -> f64 {
        self.resolution_progress
    }

    /// Whether the paradox has been resolved.
    pub const fn is_resolved(&self) -> bool {
        self.resolved
    }

    /// Read-only view of this paradox.
    pub fn snapshot(&self) -> ParadoxSnapshot {
        ParadoxSnapshot {
            name: self.name.clone(),
            description: self.description.clone(),
            complexity: self.complexity,
            resolution_progress: self.resolution_progress,
            resolved: self.resolved,
        }
    }

    #[cfg(test)]
    pub(crate) const fn set_progress(&mut self, value: f64) {
        self.resolution_progress = value;
    }
}

/// The harmonization system working the active paradox set.
#[derive(Debug, Clone, PartialEq)]
pub struct ParadoxResolver {
    initialized: bool,
    active: Vec<Paradox>,
    resolved_count: u64,
    efficiency: f64,
    state: ResolverState,
}

impl ParadoxResolver {
    /// Create a dormant resolver.
    pub const fn new() -> Self {
        Self {
            initialized: false,
            active: Vec::new(),
            resolved_count: 0,
            efficiency: 0.0,
            state: ResolverState::Dormant,
        }
    }

    /// Seed the three foundational paradoxes. No-op if already initialized.
    pub fn initialize(&mut self) {
        if self.initialized {
            return;
        }
        self.initialized = true;
        self.active = SEED_PARADOXES
            .iter()
            .map(|&(name, description, complexity)| Paradox::new(name, description, complexity))
            .collect();
        self.resolved_count = 0;
        self.efficiency = INITIAL_EFFICIENCY;
        self.state = ResolverState::Harmonizing;
        debug!(
            active = self.active.len(),
            efficiency = self.efficiency,
            "paradox resolver initialized"
        );
    }

    /// Run one resolution pass.
    ///
    /// Advances every unresolved paradox, removes the newly resolved ones
    /// (collect-survivors, counter bumped by the number removed), rolls
    /// for a spawn, then adjusts efficiency from the post-spawn workload
    /// and re-derives the state label.
    pub fn process(&mut self, rng: &mut impl Rng) {
        if !self.initialized {
            return;
        }

        for paradox in &mut self.active {
            let draw = rng.random_range(0.5..1.0);
            paradox.advance(self.efficiency, draw);
        }

        let before = self.active.len();
        self.active.retain(|paradox| !paradox.is_resolved());
        let resolved = before.saturating_sub(self.active.len());
        if resolved > 0 {
            self.resolved_count = self
                .resolved_count
                .saturating_add(u64::try_from(resolved).unwrap_or(u64::MAX));
            debug!(resolved, total = self.resolved_count, "paradoxes resolved");
        }

        if rng.random_range(0.0..1.0) < SPAWN_PROBABILITY && self.active.len() < CAPACITY_THRESHOLD
        {
            self.spawn_paradox(rng);
        }

        let workload = crate::stability::load_ratio(self.active.len(), CAPACITY_THRESHOLD);
        if workload > OVERLOAD_THRESHOLD {
            self.efficiency = (self.efficiency - EROSION_STEP).max(EFFICIENCY_FLOOR);
        } else if workload < SLACK_THRESHOLD {
            self.efficiency = (self.efficiency + RECOVERY_STEP).min(EFFICIENCY_CEILING);
        }

        self.state = if self.active.is_empty() {
            ResolverState::HarmonyAchieved
        } else if self.efficiency > 0.8 {
            ResolverState::EfficientResolution
        } else if self.efficiency > 0.5 {
            ResolverState::StandardResolution
        } else {
            ResolverState::StrugglingResolution
        };
    }

    fn spawn_paradox(&mut self, rng: &mut impl Rng) {
        let Some(&(name, description)) = SPAWN_POOL.choose(rng) else {
            return;
        };
        let complexity = rng.random_range(0.3..0.9);
        debug!(name, complexity, "paradox spawned");
        self.active.push(Paradox::new(name, description, complexity));
    }

    /// Clear the active set and return to dormancy. No-op while
    /// uninitialized.
    pub fn shutdown(&mut self) {
        if !self.initialized {
            return;
        }
        *self = Self::new();
        debug!("paradox resolver shut down");
    }

    /// Whether the resolver is live.
    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Currently active paradoxes.
    pub fn active(&self) -> &[Paradox] {
        &self.active
    }

    /// Total paradoxes resolved this session.
    pub const fn resolved_count(&self) -> u64 {
        self.resolved_count
    }

    /// Current harmonization efficiency.
    pub const fn efficiency(&self) -> f64 {
        self.efficiency
    }

    /// The soft capacity ceiling.
    pub const fn capacity_threshold(&self) -> usize {
        CAPACITY_THRESHOLD
    }

    /// Derived state label.
    pub const fn state(&self) -> ResolverState {
        self.state
    }

    /// Read-only view for the runtime's snapshot surface.
    pub fn snapshot(&self) -> ResolverSnapshot {
        ResolverSnapshot {
            state: self.state,
            efficiency: self.efficiency,
            resolved_count: self.resolved_count,
            capacity_threshold: CAPACITY_THRESHOLD,
            active: self.active.iter().map(Paradox::snapshot).collect(),
        }
    }

    #[cfg(test)]
    pub(crate) fn active_mut(&mut self) -> &mut Vec<Paradox> {
        &mut self.active
    }
}

impl Default for ParadoxResolver {
    fn default() -> Self {
        Self::new()
    }
}
