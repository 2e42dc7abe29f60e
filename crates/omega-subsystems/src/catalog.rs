//! Static catalog data: the fixed glyph set, the scroll sectors, and the
//! hypergraph topology.
//!
//! Names, symbols, categories, sector membership, and node coordinates
//! are fixed tables. Per-glyph power/stability/effect/state associations
//! and the hypergraph edge set are drawn once from the injected random
//! source at load time and never regenerated afterwards.

use std::collections::BTreeMap;

use rand::Rng;
use rand::seq::IndexedRandom;

use omega_types::{Glyph, GlyphCategory, HypergraphNode, OntologyState, ScrollSector, SectorKind};

/// Fresh glyphs draw power uniformly from this range.
const POWER_RANGE: std::ops::Range<f64> = 0.5..1.0;
/// Fresh glyphs draw stability uniformly from this range.
const STABILITY_RANGE: std::ops::Range<f64> = 0.7..1.0;
/// Nodes closer than this may be connected.
const CONNECTION_DISTANCE: f64 = 8.0;
/// Probability that a close-enough node pair is connected.
const CONNECTION_PROBABILITY: f64 = 0.6;

/// The fixed fifteen-glyph catalog: name, symbol, category.
const GLYPH_TABLE: [(&str, &str, GlyphCategory); 15] = [
    ("Void Anchor", "\u{26ab}", GlyphCategory::Fundamental),
    ("Infinity Loop", "\u{221e}", GlyphCategory::Recursive),
    ("Paradox Knot", "\u{26ad}", GlyphCategory::Paradoxical),
    ("Reality Spiral", "\u{1f300}", GlyphCategory::Ontological),
    ("Math Nexus", "\u{2211}", GlyphCategory::Mathematical),
    ("Fire Essence", "\u{1f525}", GlyphCategory::Elemental),
    ("Water Flow", "\u{1f30a}", GlyphCategory::Elemental),
    ("Earth Core", "\u{1f5ff}", GlyphCategory::Elemental),
    ("Air Vortex", "\u{1f32a}", GlyphCategory::Elemental),
    ("Void Essence", "\u{25ef}", GlyphCategory::Elemental),
    ("Omega Point", "\u{3a9}", GlyphCategory::Transcendent),
    ("Alpha Source", "\u{391}", GlyphCategory::Transcendent),
    ("Phi Resonance", "\u{3a6}", GlyphCategory::Transcendent),
    ("Tau Cycle", "\u{3a4}", GlyphCategory::Transcendent),
    ("Delta Transform", "\u{394}", GlyphCategory::Transcendent),
];

/// Effects a fresh glyph may carry.
const EFFECT_POOL: [&str; 8] = [
    "Stabilizes void fluctuations",
    "Enhances recursive depth",
    "Harmonizes paradoxes",
    "Accelerates mathematical computation",
    "Transcends ontological boundaries",
    "Amplifies existential resonance",
    "Balances reality layers",
    "Focuses hypergraph connections",
];

/// The fixed scroll sectors: name, description, member glyphs, kind.
const SECTOR_TABLE: [(&str, &str, &[&str], SectorKind); 5] = [
    (
        "Foundation Sector",
        "Contains the basic principles of void manipulation and reality anchoring",
        &["Void Anchor", "Reality Spiral"],
        SectorKind::Foundation,
    ),
    (
        "Recursion Sector",
        "Houses the infinite recursion protocols and depth management algorithms",
        &["Infinity Loop", "Math Nexus"],
        SectorKind::Recursive,
    ),
    (
        "Paradox Sector",
        "Manages paradox resolution techniques and logical contradiction handling",
        &["Paradox Knot", "Omega Point"],
        SectorKind::Paradoxical,
    ),
    (
        "Elemental Sector",
        "Controls elemental forces and their interactions within the simulation",
        &["Fire Essence", "Water Flow", "Earth Core", "Air Vortex"],
        SectorKind::Elemental,
    ),
    (
        "Transcendence Sector",
        "Contains the highest-level transcendence protocols and omega-state management",
        &["Omega Point", "Alpha Source", "Phi Resonance"],
        SectorKind::Transcendent,
    ),
];

/// The fixed hypergraph nodes: name, category, position.
const NODE_TABLE: [(&str, GlyphCategory, f64, f64, f64); 11] = [
    ("Void Core", GlyphCategory::Fundamental, 0.0, 0.0, 0.0),
    ("Reality Anchor", GlyphCategory::Fundamental, 5.0, 0.0, 0.0),
    ("Recursion Hub", GlyphCategory::Recursive, 0.0, 5.0, 0.0),
    ("Paradox Nexus", GlyphCategory::Paradoxical, 0.0, 0.0, 5.0),
    ("Math Engine", GlyphCategory::Mathematical, -5.0, 0.0, 0.0),
    ("Fire Node", GlyphCategory::Elemental, 3.0, 3.0, 0.0),
    ("Water Node", GlyphCategory::Elemental, -3.0, 3.0, 0.0),
    ("Earth Node", GlyphCategory::Elemental, 0.0, -3.0, 3.0),
    ("Air Node", GlyphCategory::Elemental, 0.0, 3.0, 3.0),
    ("Omega Terminal", GlyphCategory::Transcendent, 0.0, 0.0, 8.0),
    ("Alpha Source", GlyphCategory::Transcendent, 0.0, 0.0, -8.0),
];

/// Build the fixed glyph catalog.
///
/// Every glyph starts inactive with randomized power, stability, effect,
/// and one to three distinct associated existential states.
pub fn generate_glyphs(rng: &mut impl Rng) -> Vec<Glyph> {
    GLYPH_TABLE
        .iter()
        .map(|&(name, symbol, category)| {
            let effect = EFFECT_POOL.choose(rng).copied().unwrap_or_default();
            Glyph {
                name: name.to_owned(),
                symbol: symbol.to_owned(),
                category,
                power: rng.random_range(POWER_RANGE),
                stability: rng.random_range(STABILITY_RANGE),
                active: false,
                effect: effect.to_owned(),
                associated_states: draw_associated_states(rng),
            }
        })
        .collect()
}

/// One to three distinct existential states, sampled with duplicates
/// silently dropped (so a glyph may end up with fewer than drawn).
fn draw_associated_states(rng: &mut impl Rng) -> Vec<OntologyState> {
    let draws = rng.random_range(1..=3_u8);
    let mut states: Vec<OntologyState> = Vec::new();
    for _ in 0..draws {
        if let Some(state) = OntologyState::ALL.choose(rng).copied() {
            if !states.contains(&state) {
                states.push(state);
            }
        }
    }
    states
}

/// Build the fixed scroll sector set. Sectors start unloaded.
pub fn generate_sectors() -> Vec<ScrollSector> {
    SECTOR_TABLE
        .iter()
        .map(|&(name, description, glyphs, kind)| ScrollSector {
            name: name.to_owned(),
            description: description.to_owned(),
            contained_glyphs: glyphs.iter().map(|&glyph| glyph.to_owned()).collect(),
            kind,
            loaded: false,
        })
        .collect()
}

/// Build the hypergraph topology.
///
/// Node identity and position are fixed; the edge set is drawn once at
/// load time. A pair of nodes closer than the connection distance is
/// linked with probability 0.6, and every edge is recorded on both
/// endpoints.
pub fn generate_hypergraph(rng: &mut impl Rng) -> Vec<HypergraphNode> {
    let mut connections: BTreeMap<&str, Vec<String>> = BTreeMap::new();

    for (position, &(name_a, _, xa, ya, za)) in NODE_TABLE.iter().enumerate() {
        for &(name_b, _, xb, yb, zb) in NODE_TABLE.iter().skip(position.saturating_add(1)) {
            let distance = ((xa - xb).powi(2) + (ya - yb).powi(2) + (za - zb).powi(2)).sqrt();
            if distance < CONNECTION_DISTANCE && rng.random_range(0.0..1.0) < CONNECTION_PROBABILITY
            {
                connections.entry(name_a).or_default().push(name_b.to_owned());
                connections.entry(name_b).or_default().push(name_a.to_owned());
            }
        }
    }

    NODE_TABLE
        .iter()
        .map(|&(name, category, x, y, z)| HypergraphNode {
            name: name.to_owned(),
            category,
            x,
            y,
            z,
            connections: connections.remove(name).unwrap_or_default(),
            active: true,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    #[test]
    fn catalog_has_fifteen_inactive_glyphs_with_bounded_fields() {
        let mut rng = SmallRng::seed_from_u64(42);
        let glyphs = generate_glyphs(&mut rng);
        assert_eq!(glyphs.len(), 15);
        for glyph in &glyphs {
            assert!(!glyph.active);
            assert!((0.5..1.0).contains(&glyph.power));
            assert!((0.7..1.0).contains(&glyph.stability));
            assert!(!glyph.effect.is_empty());
            assert!((1..=3).contains(&glyph.associated_states.len()));
        }
    }

    #[test]
    fn glyph_names_are_unique() {
        let mut rng = SmallRng::seed_from_u64(42);
        let glyphs = generate_glyphs(&mut rng);
        let names: BTreeSet<&str> = glyphs.iter().map(|glyph| glyph.name.as_str()).collect();
        assert_eq!(names.len(), glyphs.len());
    }

    #[test]
    fn associated_states_are_distinct() {
        let mut rng = SmallRng::seed_from_u64(42);
        for glyph in generate_glyphs(&mut rng) {
            let distinct: BTreeSet<OntologyState> =
                glyph.associated_states.iter().copied().collect();
            assert_eq!(distinct.len(), glyph.associated_states.len());
        }
    }

    #[test]
    fn sectors_reference_only_catalog_glyphs() {
        let mut rng = SmallRng::seed_from_u64(42);
        let names: BTreeSet<String> = generate_glyphs(&mut rng)
            .into_iter()
            .map(|glyph| glyph.name)
            .collect();
        let sectors = generate_sectors();
        assert_eq!(sectors.len(), 5);
        for sector in &sectors {
            assert!(!sector.loaded);
            for member in &sector.contained_glyphs {
                assert!(names.contains(member), "unknown member {member}");
            }
        }
    }

    #[test]
    fn hypergraph_edges_are_bidirectional() {
        let mut rng = SmallRng::seed_from_u64(42);
        let nodes = generate_hypergraph(&mut rng);
        assert_eq!(nodes.len(), 11);
        for node in &nodes {
            for neighbor in &node.connections {
                let other = nodes.iter().find(|candidate| &candidate.name == neighbor);
                assert!(
                    other.is_some_and(|other| other.connections.contains(&node.name)),
                    "edge {} -> {neighbor} is not mirrored",
                    node.name
                );
            }
        }
    }

    #[test]
    fn distant_nodes_are_never_connected() {
        // Omega Terminal (0,0,8) and Alpha Source (0,0,-8) are 16 apart.
        let mut rng = SmallRng::seed_from_u64(42);
        let nodes = generate_hypergraph(&mut rng);
        let terminal = nodes.iter().find(|node| node.name == "Omega Terminal");
        assert!(
            terminal.is_some_and(|node| !node.connections.iter().any(|name| name == "Alpha Source"))
        );
    }

    #[test]
    fn same_seed_reproduces_the_same_topology() {
        let mut rng_a = SmallRng::seed_from_u64(7);
        let mut rng_b = SmallRng::seed_from_u64(7);
        assert_eq!(generate_hypergraph(&mut rng_a), generate_hypergraph(&mut rng_b));
    }
}
