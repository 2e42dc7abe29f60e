//! Entity structs and read-surface snapshot types for the Omega runtime.
//!
//! Everything here is plain serializable data. The dashboard and visual
//! layer consume these types read-only; all mutation happens inside the
//! runtime's tick.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{
    ComputationState, FrameworkMode, GlyphCategory, LayerState, OntologyState, RecursionState,
    ResolverState, RuntimeMode, SectorKind, SimulationPhase, SubstrateState,
};
use crate::ids::RunId;

// ---------------------------------------------------------------------------
// Glyphs
// ---------------------------------------------------------------------------

/// A symbolic glyph from the fixed catalog.
///
/// The `active` flag is the only field external commands may toggle; all
/// other mutation happens inside the runtime's tick. Power and stability
/// stay within `[0.1, 1.0]` once the catalog is generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Glyph {
    /// Unique display name, also the lookup key for activation commands.
    pub name: String,
    /// Single-character symbolic representation.
    pub symbol: String,
    /// Catalog category.
    pub category: GlyphCategory,
    /// Symbolic potency in `[0.1, 1.0]`.
    pub power: f64,
    /// How settled the glyph is, in `[0.1, 1.0]`.
    pub stability: f64,
    /// Whether the glyph is currently active.
    pub active: bool,
    /// Flavor-text description of what the glyph does.
    pub effect: String,
    /// One to three ontological states the glyph resonates with.
    pub associated_states: Vec<OntologyState>,
}

// ---------------------------------------------------------------------------
// Static catalog data (generated once at start, never mutated by ticks)
// ---------------------------------------------------------------------------

/// A sector of the scroll archive, grouping related glyphs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ScrollSector {
    /// Sector display name.
    pub name: String,
    /// What the sector contains.
    pub description: String,
    /// Names of the glyphs filed under this sector.
    pub contained_glyphs: Vec<String>,
    /// Sector classification.
    pub kind: SectorKind,
    /// Whether the sector has been loaded into the running session.
    pub loaded: bool,
}

/// A node of the static hypergraph visualized by the external 3D scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct HypergraphNode {
    /// Node display name.
    pub name: String,
    /// Node classification (shares the glyph category space).
    pub category: GlyphCategory,
    /// Scene x coordinate.
    pub x: f64,
    /// Scene y coordinate.
    pub y: f64,
    /// Scene z coordinate.
    pub z: f64,
    /// Names of connected nodes (connections are bidirectional).
    pub connections: Vec<String>,
    /// Whether the node renders as active.
    pub active: bool,
}

// ---------------------------------------------------------------------------
// Aggregate simulation state
// ---------------------------------------------------------------------------

/// Aggregate, externally read-only view of the running simulation.
///
/// Recomputed at the end of every tick. `overall_stability` is the
/// equal-weighted mean of the five subsystem stabilities and therefore
/// stays in `[0, 1]`; it is zeroed on `stop()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SimulationState {
    /// Identifier of the current session, present while started.
    pub run_id: Option<RunId>,
    /// Current operating mode.
    pub mode: RuntimeMode,
    /// Number of completed ticks in this session (monotonic).
    pub tick_count: u64,
    /// Progression phase derived purely from `tick_count`.
    pub phase: SimulationPhase,
    /// Equal-weighted mean of the five subsystem stabilities.
    pub overall_stability: f64,
    /// Size of the glyph catalog.
    pub glyph_count: usize,
    /// Size of the static hypergraph, set once at start.
    pub hypergraph_node_count: usize,
    /// Wall-clock time the session started, present while started.
    pub started_at: Option<DateTime<Utc>>,
}

impl SimulationState {
    /// The inactive state: no session, zeroed aggregate metrics.
    pub const fn inactive() -> Self {
        Self {
            run_id: None,
            mode: RuntimeMode::Inactive,
            tick_count: 0,
            phase: SimulationPhase::Initialization,
            overall_stability: 0.0,
            glyph_count: 0,
            hypergraph_node_count: 0,
            started_at: None,
        }
    }
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::inactive()
    }
}

// ---------------------------------------------------------------------------
// Per-subsystem snapshots
// ---------------------------------------------------------------------------

/// Read-only view of the void substrate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SubstrateSnapshot {
    /// Derived state label.
    pub state: SubstrateState,
    /// Void depth, in `[3, 11]` while live.
    pub depth: u32,
    /// Substrate stability, in `[0.8, 1.0]` while live.
    pub stability: f64,
    /// Fluctuations applied per tick.
    pub fluctuation_rate: u32,
}

/// Read-only view of a single recursive layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct LayerSnapshot {
    /// Creation-order index of the layer.
    pub index: u32,
    /// Layer stability in `[0, 1]`.
    pub stability: f64,
    /// Number of iterations this layer has processed.
    pub iterations: u64,
    /// Derived state label.
    pub state: LayerState,
}

/// Read-only view of the recursion layer set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct RecursionSnapshot {
    /// Derived state label.
    pub state: RecursionState,
    /// Number of living layers (always equals `layers.len()`).
    pub depth: usize,
    /// Fixed ceiling on the number of layers.
    pub max_layers: usize,
    /// Average stability across all living layers (0 if none).
    pub stability: f64,
    /// The living layers, in creation order.
    pub layers: Vec<LayerSnapshot>,
}

/// Read-only view of the ontology framework.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct OntologySnapshot {
    /// Derived operating mode.
    pub mode: FrameworkMode,
    /// Current existential state; `None` is the undefined sentinel.
    pub current: Option<OntologyState>,
    /// Existential stability in `[0.5, 1.0]` while live.
    pub existential_stability: f64,
    /// Number of counted transitions (monotonic while live).
    pub transition_count: u64,
}

/// Read-only view of a single unresolved paradox.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ParadoxSnapshot {
    /// Paradox name.
    pub name: String,
    /// Short description of the contradiction.
    pub description: String,
    /// Resolution difficulty in `(0, 1]`.
    pub complexity: f64,
    /// Progress toward resolution in `[0, 1]`.
    pub resolution_progress: f64,
    /// Whether the paradox has been resolved.
    pub resolved: bool,
}

/// Read-only view of the paradox resolver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ResolverSnapshot {
    /// Derived state label.
    pub state: ResolverState,
    /// Harmonization efficiency in `[0.3, 0.95]` while live.
    pub efficiency: f64,
    /// Total paradoxes resolved this session (monotonic).
    pub resolved_count: u64,
    /// Soft ceiling controlling spawn and workload derivation.
    pub capacity_threshold: usize,
    /// Currently active paradoxes.
    pub active: Vec<ParadoxSnapshot>,
}

/// Read-only view of a single impossible calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CalculationSnapshot {
    /// Calculation name.
    pub name: String,
    /// What is (symbolically) being computed.
    pub description: String,
    /// Computation difficulty in `(0, 1]`.
    pub complexity: f64,
    /// Progress toward completion in `[0, 1]`.
    pub progress: f64,
    /// Whether the calculation has completed.
    pub completed: bool,
    /// Symbolic result, assigned on completion. Flavor text, not math.
    pub result: Option<String>,
}

/// Read-only view of the impossible computation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ComputationSnapshot {
    /// Derived state label.
    pub state: ComputationState,
    /// Computational stability in `[0.4, 0.95]` while live.
    pub computational_stability: f64,
    /// Total calculations completed this session (monotonic).
    pub completed_count: u64,
    /// Soft ceiling controlling spawn and load derivation.
    pub capacity_threshold: usize,
    /// Currently active calculations.
    pub active: Vec<CalculationSnapshot>,
}

/// Full read surface of the runtime: aggregate state, every subsystem,
/// and the static catalog data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct RuntimeSnapshot {
    /// Aggregate simulation state.
    pub state: SimulationState,
    /// Void substrate view.
    pub substrate: SubstrateSnapshot,
    /// Recursion layer set view.
    pub recursion: RecursionSnapshot,
    /// Ontology framework view.
    pub ontology: OntologySnapshot,
    /// Paradox resolver view.
    pub resolver: ResolverSnapshot,
    /// Impossible computation engine view.
    pub computation: ComputationSnapshot,
    /// Full glyph catalog, active flags included.
    pub glyphs: Vec<Glyph>,
    /// Static scroll sectors loaded at start.
    pub sectors: Vec<ScrollSector>,
    /// Static hypergraph generated at start.
    pub hypergraph: Vec<HypergraphNode>,
}
