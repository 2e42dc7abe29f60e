//! Shared type definitions for the Omega simulation runtime.
//!
//! This crate is the single source of truth for all types crossing the
//! runtime's read surface. Types defined here flow downstream to
//! `TypeScript` via `ts-rs` for the external dashboard and visual layer.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrapper for the session identifier
//! - [`enums`] -- State labels, modes, phases, and catalog categories
//! - [`structs`] -- Entity structs and read-surface snapshot types

pub mod enums;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{
    ComputationState, FrameworkMode, GlyphCategory, LayerState, OntologyState, RecursionState,
    ResolverState, RuntimeMode, SectorKind, SimulationPhase, SubstrateState,
};
pub use ids::RunId;
pub use structs::{
    CalculationSnapshot, ComputationSnapshot, Glyph, HypergraphNode, LayerSnapshot,
    OntologySnapshot, ParadoxSnapshot, RecursionSnapshot, ResolverSnapshot, RuntimeSnapshot,
    ScrollSector, SimulationState, SubstrateSnapshot,
};

#[cfg(test)]
mod tests {
    //! Integration tests for type exports and `TypeScript` binding generation.

    #[test]
    fn export_bindings() {
        // ts-rs generates TypeScript bindings when types with
        // #[ts(export)] are used. Importing them here triggers generation.
        // The actual files are written to the `bindings/` directory
        // relative to the crate root.
        use ts_rs::TS;

        // IDs
        let _ = crate::ids::RunId::export_all();

        // Enums
        let _ = crate::enums::RuntimeMode::export_all();
        let _ = crate::enums::SimulationPhase::export_all();
        let _ = crate::enums::SubstrateState::export_all();
        let _ = crate::enums::LayerState::export_all();
        let _ = crate::enums::RecursionState::export_all();
        let _ = crate::enums::OntologyState::export_all();
        let _ = crate::enums::FrameworkMode::export_all();
        let _ = crate::enums::ResolverState::export_all();
        let _ = crate::enums::ComputationState::export_all();
        let _ = crate::enums::GlyphCategory::export_all();
        let _ = crate::enums::SectorKind::export_all();

        // Structs
        let _ = crate::structs::Glyph::export_all();
        let _ = crate::structs::ScrollSector::export_all();
        let _ = crate::structs::HypergraphNode::export_all();
        let _ = crate::structs::SimulationState::export_all();
        let _ = crate::structs::SubstrateSnapshot::export_all();
        let _ = crate::structs::LayerSnapshot::export_all();
        let _ = crate::structs::RecursionSnapshot::export_all();
        let _ = crate::structs::OntologySnapshot::export_all();
        let _ = crate::structs::ParadoxSnapshot::export_all();
        let _ = crate::structs::ResolverSnapshot::export_all();
        let _ = crate::structs::CalculationSnapshot::export_all();
        let _ = crate::structs::ComputationSnapshot::export_all();
        let _ = crate::structs::RuntimeSnapshot::export_all();
    }
}
