//! Orchestration, configuration, and tick loop for the Omega simulation
//! runtime.
//!
//! This crate owns the fixed tick order that drives the simulation:
//! void substrate, recursion layers, ontology, paradox resolution,
//! impossible computation, glyph catalog, then aggregate recomputation.
//!
//! # Modules
//!
//! - [`clock`] -- Tick counter and phase derivation from tick thresholds.
//! - [`config`] -- Configuration loading from `omega-config.yaml` into
//!   strongly-typed structs.
//! - [`runtime`] -- [`SimulationRuntime`], the exclusive owner of every
//!   subsystem and the single mutation point.
//! - [`runner`] -- Async tick loop with pause/resume/stop controls and
//!   bounded runs.
//!
//! [`SimulationRuntime`]: runtime::SimulationRuntime

pub mod clock;
pub mod config;
pub mod runner;
pub mod runtime;

pub use clock::{ClockError, RuntimeClock, phase_for_tick};
pub use config::{ConfigError, RuntimeConfig};
pub use runner::{
    NoOpCallback, RunEndReason, RunOutcome, RunnerControl, TickCallback, run_simulation,
};
pub use runtime::{RuntimeError, SimulationRuntime, TickSummary};
