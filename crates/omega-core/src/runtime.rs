//! The simulation runtime: exclusive owner of every subsystem and the
//! single mutation point for all simulation state.
//!
//! All coupling between subsystems happens here: each tick runs every
//! subsystem's `process()` in a fixed order, then reads their stabilities
//! to recompute the aggregate. Subsystems never reference each other.
//! Callers must not issue concurrent mutating calls on the same runtime;
//! wrap it in a single-writer lock if shared across tasks.

use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::{debug, info};

use omega_subsystems::{
    GlyphError, GlyphRegistry, ImpossibleComputationEngine, OntologyFramework, ParadoxResolver,
    RecursionLayerSet, VoidSubstrate, catalog,
};
use omega_types::{
    HypergraphNode, OntologyState, RunId, RuntimeMode, RuntimeSnapshot, ScrollSector,
    SimulationPhase, SimulationState,
};

use crate::clock::{ClockError, RuntimeClock};

/// Equal weight applied to each of the five subsystem stabilities.
const SUBSYSTEM_WEIGHT: f64 = 0.2;

/// Errors surfaced by runtime commands.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    /// A tick or command was issued before `start()`.
    #[error("runtime is not started")]
    NotStarted,

    /// A glyph command named a glyph outside the catalog.
    #[error(transparent)]
    Glyph(#[from] GlyphError),

    /// The tick counter cannot advance further.
    #[error(transparent)]
    Clock(#[from] ClockError),
}

/// Summary of one completed tick.
#[derive(Debug, Clone, PartialEq)]
pub struct TickSummary {
    /// The tick number that was executed.
    pub tick: u64,
    /// Phase after this tick.
    pub phase: SimulationPhase,
    /// Aggregate stability after this tick.
    pub overall_stability: f64,
    /// Existential state after this tick.
    pub ontology_state: Option<OntologyState>,
    /// Paradoxes resolved so far this session.
    pub paradoxes_resolved: u64,
    /// Calculations completed so far this session.
    pub calculations_completed: u64,
    /// Glyphs active at end of tick.
    pub active_glyphs: usize,
}

/// The tick-driven simulation runtime.
///
/// Owns exactly one of each subsystem plus the static catalog data and
/// the aggregate [`SimulationState`]. `start()`/`stop()` toggle the mode
/// that gates `tick()`.
#[derive(Debug)]
pub struct SimulationRuntime {
    substrate: VoidSubstrate,
    recursion: RecursionLayerSet,
    ontology: OntologyFramework,
    resolver: ParadoxResolver,
    computation: ImpossibleComputationEngine,
    registry: GlyphRegistry,
    sectors: Vec<ScrollSector>,
    hypergraph: Vec<HypergraphNode>,
    clock: RuntimeClock,
    rng: SmallRng,
    state: SimulationState,
}

impl SimulationRuntime {
    /// Create an inactive runtime with a seeded random source.
    ///
    /// The same seed reproduces the same tick sequence, catalog rolls
    /// included.
    pub fn new(seed: u64) -> Self {
        Self {
            substrate: VoidSubstrate::new(),
            recursion: RecursionLayerSet::new(),
            ontology: OntologyFramework::new(),
            resolver: ParadoxResolver::new(),
            computation: ImpossibleComputationEngine::new(),
            registry: GlyphRegistry::new(),
            sectors: Vec::new(),
            hypergraph: Vec::new(),
            clock: RuntimeClock::new(),
            rng: SmallRng::seed_from_u64(seed),
            state: SimulationState::inactive(),
        }
    }

    /// Start a session: initialize every subsystem in the fixed order and
    /// load the static catalog data.
    ///
    /// Returns `false` (leaving the running session untouched) if already
    /// started.
    pub fn start(&mut self) -> bool {
        if self.state.mode == RuntimeMode::Simulation {
            return false;
        }

        self.substrate.initialize();
        self.recursion.initialize();
        self.ontology.initialize();
        self.resolver.initialize();
        self.computation.initialize();

        self.registry.load(&mut self.rng);
        self.sectors = catalog::generate_sectors();
        for sector in &mut self.sectors {
            sector.loaded = true;
        }
        self.hypergraph = catalog::generate_hypergraph(&mut self.rng);

        self.clock.reset();
        self.state = SimulationState {
            run_id: Some(RunId::new()),
            mode: RuntimeMode::Simulation,
            tick_count: 0,
            phase: SimulationPhase::Initialization,
            overall_stability: self.mean_subsystem_stability(),
            glyph_count: self.registry.len(),
            hypergraph_node_count: self.hypergraph.len(),
            started_at: Some(Utc::now()),
        };

        info!(
            run_id = %self.state.run_id.map(|id| id.to_string()).unwrap_or_default(),
            glyphs = self.state.glyph_count,
            sectors = self.sectors.len(),
            hypergraph_nodes = self.state.hypergraph_node_count,
            "simulation started"
        );
        true
    }

    /// Stop the session: shut every subsystem down in the fixed order and
    /// discard the catalog data.
    ///
    /// Returns `false` if not started.
    pub fn stop(&mut self) -> bool {
        if self.state.mode == RuntimeMode::Inactive {
            return false;
        }

        self.substrate.shutdown();
        self.recursion.shutdown();
        self.ontology.shutdown();
        self.resolver.shutdown();
        self.computation.shutdown();

        self.registry.clear();
        self.sectors.clear();
        self.hypergraph.clear();
        self.clock.reset();

        let final_tick = self.state.tick_count;
        self.state = SimulationState::inactive();
        info!(final_tick, "simulation stopped");
        true
    }

    /// Run one tick.
    ///
    /// Subsystems process in the fixed order (substrate, recursion,
    /// ontology, resolver, computation), then the glyph catalog updates,
    /// the clock advances, and the aggregate state is recomputed.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::NotStarted`] before `start()`, or
    /// [`RuntimeError::Clock`] if the tick counter would overflow.
    pub fn tick(&mut self) -> Result<TickSummary, RuntimeError> {
        if self.state.mode != RuntimeMode::Simulation {
            return Err(RuntimeError::NotStarted);
        }

        self.substrate.process(&mut self.rng);
        self.recursion.process(&mut self.rng);
        self.ontology.process(&mut self.rng);
        self.resolver.process(&mut self.rng);
        self.computation.process(&mut self.rng);
        self.registry.process(&mut self.rng);

        let tick = self.clock.advance()?;
        self.state.tick_count = tick;
        self.state.phase = self.clock.phase();
        self.state.overall_stability = self.mean_subsystem_stability();

        let summary = TickSummary {
            tick,
            phase: self.state.phase,
            overall_stability: self.state.overall_stability,
            ontology_state: self.ontology.current(),
            paradoxes_resolved: self.resolver.resolved_count(),
            calculations_completed: self.computation.completed_count(),
            active_glyphs: self.registry.active().count(),
        };
        debug!(
            tick,
            phase = ?summary.phase,
            overall_stability = summary.overall_stability,
            "tick completed"
        );
        Ok(summary)
    }

    /// Activate the named glyph.
    ///
    /// Returns `Ok(true)` on a state change, `Ok(false)` if the glyph is
    /// already active.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::NotStarted`] before `start()`, or
    /// [`RuntimeError::Glyph`] for an unknown name.
    pub fn activate_glyph(&mut self, name: &str) -> Result<bool, RuntimeError> {
        if self.state.mode != RuntimeMode::Simulation {
            return Err(RuntimeError::NotStarted);
        }
        Ok(self.registry.activate(name, &mut self.rng)?)
    }

    /// Deactivate the named glyph. Same contract as
    /// [`activate_glyph`](Self::activate_glyph).
    pub fn deactivate_glyph(&mut self, name: &str) -> Result<bool, RuntimeError> {
        if self.state.mode != RuntimeMode::Simulation {
            return Err(RuntimeError::NotStarted);
        }
        Ok(self.registry.deactivate(name)?)
    }

    /// Force the ontology framework into the given existential state.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::NotStarted`] before `start()`.
    pub fn force_ontological_transition(
        &mut self,
        target: OntologyState,
    ) -> Result<(), RuntimeError> {
        if self.ontology.force_transition(target) {
            Ok(())
        } else {
            Err(RuntimeError::NotStarted)
        }
    }

    /// Equal-weighted mean of the five subsystem stabilities.
    fn mean_subsystem_stability(&self) -> f64 {
        SUBSYSTEM_WEIGHT
            * (self.substrate.stability()
                + self.recursion.stability()
                + self.ontology.existential_stability()
                + self.resolver.efficiency()
                + self.computation.computational_stability())
    }

    /// Whether a session is running.
    pub fn is_started(&self) -> bool {
        self.state.mode == RuntimeMode::Simulation
    }

    /// The aggregate simulation state.
    pub const fn state(&self) -> &SimulationState {
        &self.state
    }

    /// The glyph registry (read-only).
    pub const fn registry(&self) -> &GlyphRegistry {
        &self.registry
    }

    /// The static scroll sectors loaded at start.
    pub fn sectors(&self) -> &[ScrollSector] {
        &self.sectors
    }

    /// The static hypergraph generated at start.
    pub fn hypergraph(&self) -> &[HypergraphNode] {
        &self.hypergraph
    }

    /// Full non-mutating read surface: aggregate state, every subsystem
    /// view, and the static catalog data.
    pub fn snapshot(&self) -> RuntimeSnapshot {
        RuntimeSnapshot {
            state: self.state.clone(),
            substrate: self.substrate.snapshot(),
            recursion: self.recursion.snapshot(),
            ontology: self.ontology.snapshot(),
            resolver: self.resolver.snapshot(),
            computation: self.computation.snapshot(),
            glyphs: self.registry.glyphs().to_vec(),
            sectors: self.sectors.clone(),
            hypergraph: self.hypergraph.clone(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::arithmetic_side_effects)]
mod tests {
    use omega_types::{
        ComputationState, FrameworkMode, RecursionState, ResolverState, SubstrateState,
    };

    use super::*;

    #[test]
    fn start_brings_every_subsystem_live() {
        let mut runtime = SimulationRuntime::new(42);
        assert!(runtime.start());
        let snapshot = runtime.snapshot();
        assert_eq!(snapshot.state.mode, RuntimeMode::Simulation);
        assert!(snapshot.state.run_id.is_some());
        assert!(snapshot.state.started_at.is_some());
        assert_eq!(snapshot.state.glyph_count, 15);
        assert_eq!(snapshot.state.hypergraph_node_count, 11);
        assert_eq!(snapshot.sectors.len(), 5);
        assert!(snapshot.sectors.iter().all(|sector| sector.loaded));
        assert_eq!(snapshot.substrate.state, SubstrateState::Active);
        assert_eq!(snapshot.recursion.state, RecursionState::Recursing);
        assert_eq!(snapshot.ontology.mode, FrameworkMode::Active);
        assert_eq!(snapshot.resolver.state, ResolverState::Harmonizing);
        assert_eq!(snapshot.computation.state, ComputationState::Computing);
        // Before the first tick the aggregate is the mean of the five
        // initial stabilities: 0.2 * (0.95 + 0.88 + 0.92 + 0.85 + 0.87).
        assert!((snapshot.state.overall_stability - 0.894).abs() < 1e-12);
    }

    #[test]
    fn double_start_does_not_reset_progress() {
        let mut runtime = SimulationRuntime::new(42);
        assert!(runtime.start());
        for _ in 0..20 {
            assert!(runtime.tick().is_ok());
        }
        let before = runtime.state().clone();
        assert!(!runtime.start());
        assert_eq!(runtime.state().tick_count, before.tick_count);
        assert_eq!(runtime.state().run_id, before.run_id);
    }

    #[test]
    fn tick_before_start_is_refused() {
        let mut runtime = SimulationRuntime::new(42);
        assert!(matches!(runtime.tick(), Err(RuntimeError::NotStarted)));
    }

    #[test]
    fn tick_count_is_monotonic_and_stability_bounded() {
        let mut runtime = SimulationRuntime::new(42);
        runtime.start();
        let mut previous = 0;
        for _ in 0..300 {
            let summary = runtime.tick();
            assert!(summary.as_ref().is_ok_and(|s| s.tick == previous + 1));
            previous = summary.as_ref().map_or(previous, |s| s.tick);
            assert!(
                summary
                    .as_ref()
                    .is_ok_and(|s| (0.0..=1.0).contains(&s.overall_stability))
            );
        }
        assert_eq!(runtime.state().tick_count, 300);
    }

    #[test]
    fn phase_crosses_the_first_boundary_at_tick_100() {
        let mut runtime = SimulationRuntime::new(42);
        runtime.start();
        for _ in 0..99 {
            let _ = runtime.tick();
        }
        assert_eq!(runtime.state().phase, SimulationPhase::Initialization);
        let _ = runtime.tick();
        assert_eq!(runtime.state().phase, SimulationPhase::Stabilization);
    }

    #[test]
    fn overall_stability_is_the_mean_of_the_five_subsystems() {
        let mut runtime = SimulationRuntime::new(42);
        runtime.start();
        let _ = runtime.tick();
        let snapshot = runtime.snapshot();
        let expected = 0.2
            * (snapshot.substrate.stability
                + snapshot.recursion.stability
                + snapshot.ontology.existential_stability
                + snapshot.resolver.efficiency
                + snapshot.computation.computational_stability);
        assert!((snapshot.state.overall_stability - expected).abs() < 1e-12);
    }

    #[test]
    fn glyph_activation_round_trip() {
        let mut runtime = SimulationRuntime::new(42);
        runtime.start();
        assert!(matches!(runtime.activate_glyph("Omega Point"), Ok(true)));
        assert!(matches!(runtime.activate_glyph("Omega Point"), Ok(false)));
        assert!(matches!(runtime.deactivate_glyph("Omega Point"), Ok(true)));
        let glyph = runtime.registry().find("Omega Point");
        assert!(glyph.is_some_and(|glyph| !glyph.active));
        assert_eq!(runtime.registry().active().count(), 0);
        // Deactivating an already-inactive glyph is not an error.
        assert!(matches!(runtime.deactivate_glyph("Omega Point"), Ok(false)));
    }

    #[test]
    fn unknown_glyph_is_a_typed_error() {
        let mut runtime = SimulationRuntime::new(42);
        runtime.start();
        assert!(matches!(
            runtime.activate_glyph("No Such Sigil"),
            Err(RuntimeError::Glyph(GlyphError::Unknown(_)))
        ));
    }

    #[test]
    fn glyph_commands_before_start_are_refused() {
        let mut runtime = SimulationRuntime::new(42);
        assert!(matches!(
            runtime.activate_glyph("Omega Point"),
            Err(RuntimeError::NotStarted)
        ));
        assert!(matches!(
            runtime.force_ontological_transition(OntologyState::MetaBeing),
            Err(RuntimeError::NotStarted)
        ));
    }

    #[test]
    fn forced_transition_reaches_the_snapshot() {
        let mut runtime = SimulationRuntime::new(42);
        runtime.start();
        assert!(
            runtime
                .force_ontological_transition(OntologyState::QuantumSuperposition)
                .is_ok()
        );
        let snapshot = runtime.snapshot();
        assert_eq!(
            snapshot.ontology.current,
            Some(OntologyState::QuantumSuperposition)
        );
        assert_eq!(snapshot.ontology.transition_count, 1);
    }

    #[test]
    fn stop_resets_everything_to_the_inactive_sentinel() {
        let mut runtime = SimulationRuntime::new(42);
        runtime.start();
        for _ in 0..50 {
            let _ = runtime.tick();
        }
        assert!(runtime.stop());
        let snapshot = runtime.snapshot();
        assert_eq!(snapshot.state, SimulationState::inactive());
        assert_eq!(snapshot.substrate.state, SubstrateState::Dormant);
        assert_eq!(snapshot.recursion.state, RecursionState::Dormant);
        assert_eq!(snapshot.ontology.mode, FrameworkMode::Dormant);
        assert!(snapshot.ontology.current.is_none());
        assert_eq!(snapshot.resolver.state, ResolverState::Dormant);
        assert_eq!(snapshot.computation.state, ComputationState::Dormant);
        assert!(snapshot.glyphs.is_empty());
        assert!(snapshot.sectors.is_empty());
        assert!(snapshot.hypergraph.is_empty());
        // Stopping twice is a no-op.
        assert!(!runtime.stop());
        // Ticking after stop is refused again.
        assert!(matches!(runtime.tick(), Err(RuntimeError::NotStarted)));
    }

    #[test]
    fn same_seed_reproduces_the_same_run() {
        let mut a = SimulationRuntime::new(7);
        let mut b = SimulationRuntime::new(7);
        a.start();
        b.start();
        for _ in 0..100 {
            let left = a.tick();
            let right = b.tick();
            assert_eq!(left.ok(), right.ok());
        }
        assert_eq!(a.snapshot().substrate, b.snapshot().substrate);
        assert_eq!(a.snapshot().recursion, b.snapshot().recursion);
        assert_eq!(a.snapshot().glyphs, b.snapshot().glyphs);
    }

    #[test]
    fn restart_begins_a_fresh_session() {
        let mut runtime = SimulationRuntime::new(42);
        runtime.start();
        let first_run = runtime.state().run_id;
        for _ in 0..10 {
            let _ = runtime.tick();
        }
        runtime.stop();
        assert!(runtime.start());
        assert_eq!(runtime.state().tick_count, 0);
        assert_ne!(runtime.state().run_id, first_run);
    }
}
