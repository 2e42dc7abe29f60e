//! Enumeration types for the Omega simulation runtime.
//!
//! Every state label a subsystem can report lives here, alongside the
//! runtime-wide mode and phase enumerations. Labels are always *derived*
//! from numeric state inside the owning subsystem — these enums carry no
//! behavior of their own.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Runtime mode and phase
// ---------------------------------------------------------------------------

/// Overall operating mode of the runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum RuntimeMode {
    /// The runtime has not been started (or has been stopped).
    Inactive,
    /// The runtime is started and accepts ticks.
    Simulation,
}

/// Coarse progression label derived purely from the tick counter.
///
/// The variant order matches the progression order, so the derived
/// [`Ord`] makes "phase never goes backwards" directly testable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum SimulationPhase {
    /// Ticks 0..100.
    Initialization,
    /// Ticks 100..500.
    Stabilization,
    /// Ticks 500..1000.
    Exploration,
    /// Ticks 1000..2000.
    Transcendence,
    /// Ticks 2000 and beyond.
    OmegaState,
}

// ---------------------------------------------------------------------------
// Void substrate
// ---------------------------------------------------------------------------

/// State label of the void substrate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum SubstrateState {
    /// Not initialized.
    Dormant,
    /// Freshly initialized, no fluctuation processed yet.
    Active,
    /// Substrate stability above 0.9.
    Stable,
    /// Substrate stability at or below 0.9.
    Fluctuating,
}

// ---------------------------------------------------------------------------
// Recursion layers
// ---------------------------------------------------------------------------

/// State label of a single recursive layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum LayerState {
    /// Freshly created, no iteration processed yet.
    Forming,
    /// Layer stability above 0.9.
    Stable,
    /// Layer stability above 0.5.
    Fluctuating,
    /// Layer stability at or below 0.5.
    Unstable,
}

/// State label of the recursion layer set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum RecursionState {
    /// Not initialized.
    Dormant,
    /// Freshly initialized, no iteration processed yet.
    Recursing,
    /// Average layer stability above 0.8.
    StableRecursion,
    /// Average layer stability at or below 0.8.
    ChaoticRecursion,
}

// ---------------------------------------------------------------------------
// Ontology framework
// ---------------------------------------------------------------------------

/// The fixed set of existential states the ontology framework moves through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum OntologyState {
    /// Basic existence; the starting state.
    Being,
    /// Absence of existence.
    NonBeing,
    /// Existence not yet actualized.
    PotentialBeing,
    /// Existence about existence.
    MetaBeing,
    /// Simultaneous contradictory existence.
    QuantumSuperposition,
    /// Existence that refutes itself.
    ParadoxicalExistence,
    /// Existence beyond the other six.
    TranscendentState,
}

impl OntologyState {
    /// All members of the fixed state set, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Being,
        Self::NonBeing,
        Self::PotentialBeing,
        Self::MetaBeing,
        Self::QuantumSuperposition,
        Self::ParadoxicalExistence,
        Self::TranscendentState,
    ];
}

/// Operating mode of the ontology framework, derived from existential
/// stability thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum FrameworkMode {
    /// Not initialized.
    Dormant,
    /// Freshly initialized, no transition processed yet.
    Active,
    /// Existential stability above 0.95.
    Transcendent,
    /// Existential stability above 0.8.
    Stable,
    /// Existential stability above 0.6.
    Fluctuating,
    /// Existential stability at or below 0.6.
    Chaotic,
}

// ---------------------------------------------------------------------------
// Paradox resolver
// ---------------------------------------------------------------------------

/// State label of the paradox resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum ResolverState {
    /// Not initialized.
    Dormant,
    /// Freshly initialized, no resolution pass processed yet.
    Harmonizing,
    /// No active paradoxes remain.
    HarmonyAchieved,
    /// Efficiency above 0.8.
    EfficientResolution,
    /// Efficiency above 0.5.
    StandardResolution,
    /// Efficiency at or below 0.5.
    StrugglingResolution,
}

// ---------------------------------------------------------------------------
// Impossible computation engine
// ---------------------------------------------------------------------------

/// State label of the impossible computation engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum ComputationState {
    /// Not initialized.
    Dormant,
    /// Freshly initialized, no computation pass processed yet.
    Computing,
    /// No active calculations remain.
    Idle,
    /// Computational stability above 0.9.
    StableComputation,
    /// Computational stability above 0.7.
    StandardComputation,
    /// Computational stability above 0.5.
    UnstableComputation,
    /// Computational stability at or below 0.5.
    ChaoticComputation,
}

// ---------------------------------------------------------------------------
// Glyphs and static catalog data
// ---------------------------------------------------------------------------

/// Category of a symbolic glyph (also used for hypergraph nodes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum GlyphCategory {
    /// Core reality-anchoring glyphs.
    Fundamental,
    /// Glyphs tied to the recursion layers.
    Recursive,
    /// Glyphs tied to paradox resolution.
    Paradoxical,
    /// Glyphs tied to ontological states.
    Ontological,
    /// Glyphs tied to impossible computation.
    Mathematical,
    /// Elemental-force glyphs.
    Elemental,
    /// Highest-order glyphs.
    Transcendent,
}

/// Kind of a scroll sector in the static catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum SectorKind {
    /// Void manipulation and reality anchoring.
    Foundation,
    /// Recursion protocols and depth management.
    Recursive,
    /// Paradox resolution techniques.
    Paradoxical,
    /// Elemental forces and their interactions.
    Elemental,
    /// Transcendence protocols and omega-state management.
    Transcendent,
}
