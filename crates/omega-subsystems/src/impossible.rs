//! The impossible computation engine: a pool of mathematically undefined
//! calculations ground toward symbolic "results".
//!
//! Structurally a sibling of the paradox resolver, but with its own
//! constants, spawn pool, and a result string attached to every finished
//! calculation. Progress scales with the engine's computational stability
//! and inversely with calculation complexity.

use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::debug;

use omega_types::{CalculationSnapshot, ComputationSnapshot, ComputationState};

/// Soft ceiling on concurrently active calculations.
const CAPACITY_THRESHOLD: usize = 7;
/// Computational stability assigned at initialization.
const INITIAL_STABILITY: f64 = 0.87;
/// Stability floor under sustained load.
const STABILITY_FLOOR: f64 = 0.4;
/// Stability ceiling under slack.
const STABILITY_CEILING: f64 = 0.95;
/// Per-tick probability of a new calculation spawning (capacity permitting).
const SPAWN_PROBABILITY: f64 = 0.15;
/// Load above which stability erodes.
const OVERLOAD_THRESHOLD: f64 = 0.9;
/// Load below which stability recovers.
const SLACK_THRESHOLD: f64 = 0.3;
/// Per-tick stability erosion when overloaded.
const EROSION_STEP: f64 = 0.03;
/// Per-tick stability recovery when slack.
const RECOVERY_STEP: f64 = 0.02;
/// Scale factor applied to stability when deriving the progress rate.
const RATE_SCALE: f64 = 0.3;

/// The four foundational calculations seeded at initialization.
const SEED_CALCULATIONS: [(&str, &str, f64); 4] = [
    ("INFINITE_SERIES", "\u{2211}(1/n) where n\u{2192}\u{221e}", 0.9),
    ("SQUARE_CIRCLE", "Squaring the circle", 0.8),
    ("DIVISION_BY_ZERO", "Dividing by absolute zero", 0.95),
    ("ZENO_PARADOX", "Achilles and the tortoise", 0.6),
];

/// Pool of calculations that may spawn during processing.
const SPAWN_POOL: [(&str, &str); 8] = [
    ("HYPERBOLIC_GEOMETRY", "Parallel lines that meet"),
    ("FRACTAL_DIMENSION", "Non-integer dimensionality"),
    ("IMAGINARY_EXPONENTIATION", "i raised to itself"),
    ("INFINITE_FACTORIAL", "Factorial of infinity"),
    ("NEGATIVE_DIMENSION", "Space with dimension below zero"),
    ("QUANTUM_SUPERPOSITION_MATH", "Arithmetic over superposed values"),
    ("TEMPORAL_CALCULUS", "Derivatives with respect to causality"),
    ("PARADOXICAL_INTEGRATION", "Integral over a contradiction"),
];

/// Symbolic results assigned to finished calculations.
const RESULT_POOL: [&str; 8] = [
    "\u{221e} + 1",
    "\u{221a}(-1)\u{b2}",
    "0/0 = \u{3a9}",
    "\u{3c0} = 4",
    "1 = 0.999...",
    "\u{221e}/\u{221e} = \u{3c6}",
    "i^i = real",
    "null + undefined",
];

/// A single impossible calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct ImpossibleCalculation {
    name: String,
    description: String,
    complexity: f64,
    progress: f64,
    completed: bool,
    result: Option<String>,
}

impl ImpossibleCalculation {
    /// Create an incomplete calculation of the given complexity.
    pub fn new(name: impl Into<String>, description: impl Into<String>, complexity: f64) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            complexity,
            progress: 0.0,
            completed: false,
            result: None,
        }
    }

    /// Advance the computation by one step.
    ///
    /// `draw` is the random multiplier in `[0.5, 1.0]`, taken as a
    /// parameter so deterministic tests can fix the rate. Completion
    /// clamps progress to 1.0; the result string is assigned separately
    /// by the engine since it needs another random draw.
    pub fn advance(&mut self, stability: f64, draw: f64) {
        if self.completed {
            return;
        }
        let rate = stability * RATE_SCALE / (self.complexity * 3.0);
        self.progress += rate * draw;
        if self.progress >= 1.0 {
            self.progress = 1.0;
            self.completed = true;
        }
    }

    /// Calculation name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Computation difficulty in `(0, 1]`.
    pub const fn complexity(&self) -> f64 {
        self.complexity
    }

    /// Progress toward completion in `[0, 1]`.
    pub const fn progress(&self) -> f64 {
        self.progress
    }

    /// Whether the calculation has completed.
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Symbolic result, present once completed.
    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    /// Read-only view of this calculation.
    pub fn snapshot(&self) -> CalculationSnapshot {
        CalculationSnapshot {
            name: self.name.clone(),
            description: self.description.clone(),
            complexity: self.complexity,
            progress: self.progress,
            completed: self.completed,
            result: self.result.clone(),
        }
    }

    #[cfg(test)]
    pub(crate) const fn set_progress(&mut self, value: f64) {
        self.progress = value;
    }
}

/// The engine grinding through the active calculation set.
#[derive(Debug, Clone, PartialEq)]
pub struct ImpossibleComputationEngine {
    initialized: bool,
    active: Vec<ImpossibleCalculation>,
    completed_count: u64,
    computational_stability: f64,
    state: ComputationState,
}

impl ImpossibleComputationEngine {
    /// Create a dormant engine.
    pub const fn new() -> Self {
        Self {
            initialized: false,
            active: Vec::new(),
            completed_count: 0,
            computational_stability: 0.0,
            state: ComputationState::Dormant,
        }
    }

    /// Seed the four foundational calculations. No-op if already
    /// initialized.
    pub fn initialize(&mut self) {
        if self.initialized {
            return;
        }
        self.initialized = true;
        self.active = SEED_CALCULATIONS
            .iter()
            .map(|&(name, description, complexity)| {
                ImpossibleCalculation::new(name, description, complexity)
            })
            .collect();
        self.completed_count = 0;
        self.computational_stability = INITIAL_STABILITY;
        self.state = ComputationState::Computing;
        debug!(
            active = self.active.len(),
            stability = self.computational_stability,
            "impossible computation engine initialized"
        );
    }

    /// Run one computation pass.
    ///
    /// Advances every calculation, assigns a symbolic result to the newly
    /// completed ones before removing them, rolls for a spawn, then
    /// adjusts stability from the post-spawn load and re-derives the
    /// state label.
    pub fn process(&mut self, rng: &mut impl Rng) {
        if !self.initialized {
            return;
        }

        for calculation in &mut self.active {
            let draw = rng.random_range(0.5..1.0);
            calculation.advance(self.computational_stability, draw);
            if calculation.completed && calculation.result.is_none() {
                let result = RESULT_POOL.choose(rng).copied().unwrap_or("undefined");
                debug!(name = calculation.name.as_str(), result, "calculation completed");
                calculation.result = Some(result.to_owned());
            }
        }

        let before = self.active.len();
        self.active.retain(|calculation| !calculation.is_completed());
        let completed = before.saturating_sub(self.active.len());
        if completed > 0 {
            self.completed_count = self
                .completed_count
                .saturating_add(u64::try_from(completed).unwrap_or(u64::MAX));
        }

        if rng.random_range(0.0..1.0) < SPAWN_PROBABILITY && self.active.len() < CAPACITY_THRESHOLD
        {
            self.spawn_calculation(rng);
        }

        let load = crate::stability::load_ratio(self.active.len(), CAPACITY_THRESHOLD);
        if load > OVERLOAD_THRESHOLD {
            self.computational_stability =
                (self.computational_stability - EROSION_STEP).max(STABILITY_FLOOR);
        } else if load < SLACK_THRESHOLD {
            self.computational_stability =
                (self.computational_stability + RECOVERY_STEP).min(STABILITY_CEILING);
        }

        self.state = if self.active.is_empty() {
            ComputationState::Idle
        } else if self.computational_stability > 0.9 {
            ComputationState::StableComputation
        } else if self.computational_stability > 0.7 {
            ComputationState::StandardComputation
        } else if self.computational_stability > 0.5 {
            ComputationState::UnstableComputation
        } else {
            ComputationState::ChaoticComputation
        };
    }

    fn spawn_calculation(&mut self, rng: &mut impl Rng) {
        let Some(&(name, description)) = SPAWN_POOL.choose(rng) else {
            return;
        };
        let complexity = rng.random_range(0.4..0.9);
        debug!(name, complexity, "impossible calculation spawned");
        self.active
            .push(ImpossibleCalculation::new(name, description, complexity));
    }

    /// Clear the active set and return to dormancy. No-op while
    /// uninitialized.
    pub fn shutdown(&mut self) {
        if !self.initialized {
            return;
        }
        *self = Self::new();
        debug!("impossible computation engine shut down");
    }

    /// Whether the engine is live.
    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Currently active calculations.
    pub fn active(&self) -> &[ImpossibleCalculation] {
        &self.active
    }

    /// Total calculations completed this session.
    pub const fn completed_count(&self) -> u64 {
        self.completed_count
    }

    /// Current computational stability.
    pub const fn computational_stability(&self) -> f64 {
        self.computational_stability
    }

    /// The soft capacity ceiling.
    pub const fn capacity_threshold(&self) -> usize {
        CAPACITY_THRESHOLD
    }

    /// Derived state label.
    pub const fn state(&self) -> ComputationState {
        self.state
    }

    /// Read-only view for the runtime's snapshot surface.
    pub fn snapshot(&self) -> ComputationSnapshot {
        ComputationSnapshot {
            state: self.state,
            computational_stability: self.computational_stability,
            completed_count: self.completed_count,
            capacity_threshold: CAPACITY_THRESHOLD,
            active: self.active.iter().map(ImpossibleCalculation::snapshot).collect(),
        }
    }

    #[cfg(test)]
    pub(crate) fn active_mut(&mut self) -> &mut Vec<ImpossibleCalculation> {
        &mut self.active
    }
}

impl Default for ImpossibleComputationEngine {
    fn default() -> Self {
        Self::new()
    }
}
