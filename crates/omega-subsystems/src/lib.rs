//! Subsystem state machines for the Omega simulation runtime.
//!
//! Each subsystem is a self-contained state machine with the same
//! lifecycle: `initialize()` is an idempotent guard, `process(rng)` runs
//! one tick and is a no-op while dormant, `shutdown()` returns to
//! construction defaults. Subsystems never reference each other; the
//! orchestrator in `omega-core` reads each one's stability after its
//! `process()` call and does all the coupling.
//!
//! # Modules
//!
//! - [`stability`] -- Bounded walk/clamp arithmetic shared by every subsystem
//! - [`substrate`] -- The void substrate (depth/stability pair)
//! - [`recursion`] -- The growable/shrinkable recursion layer set
//! - [`ontology`] -- The seven-state existential framework
//! - [`paradox`] -- The paradox resolver and its active set
//! - [`impossible`] -- The impossible computation engine
//! - [`glyph`] -- The glyph registry and its activation commands
//! - [`catalog`] -- Static glyph/sector/hypergraph generation

pub mod catalog;
pub mod glyph;
pub mod impossible;
pub mod ontology;
pub mod paradox;
pub mod recursion;
pub mod stability;
pub mod substrate;

pub use glyph::{GlyphError, GlyphRegistry};
pub use impossible::{ImpossibleCalculation, ImpossibleComputationEngine};
pub use ontology::OntologyFramework;
pub use paradox::{Paradox, ParadoxResolver};
pub use recursion::{RecursionLayerSet, RecursiveLayer};
pub use substrate::VoidSubstrate;
