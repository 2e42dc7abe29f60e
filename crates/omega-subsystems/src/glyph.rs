//! The glyph registry: the fixed catalog plus its active subset.
//!
//! The catalog is generated once at load and never grows or shrinks.
//! The `active` flag is the only externally toggleable field; power and
//! stability evolve only inside the per-tick update. The per-tick update
//! deliberately covers the whole catalog, not just the active subset:
//! active glyphs fluctuate, inactive glyphs settle upward toward 0.9.
//! Lookups by unknown name are the one typed error surface in the
//! subsystem layer.

use rand::Rng;
use thiserror::Error;
use tracing::debug;

use omega_types::Glyph;

use crate::catalog;
use crate::stability;

/// Per-tick power walk amplitude for active glyphs.
const POWER_AMPLITUDE: f64 = 0.05;
/// Per-tick stability walk amplitude for active glyphs.
const STABILITY_AMPLITUDE: f64 = 0.025;
/// Power and stability floor for catalog glyphs.
const FIELD_FLOOR: f64 = 0.1;
/// Power and stability ceiling for catalog glyphs.
const FIELD_CEILING: f64 = 1.0;
/// Per-tick stability recovery for inactive glyphs.
const SETTLE_STEP: f64 = 0.01;
/// Inactive glyphs settle toward this value and no further.
const SETTLE_CEILING: f64 = 0.9;
/// Upper bound of the random stability cost paid on activation.
const ACTIVATION_COST: f64 = 0.1;
/// Stability never drops below this on activation.
const ACTIVATION_FLOOR: f64 = 0.3;
/// Fixed stability recovery on deactivation.
const DEACTIVATION_RECOVERY: f64 = 0.05;

/// Glyph lookup failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GlyphError {
    /// The named glyph is not in the catalog.
    #[error("unknown glyph: {0}")]
    Unknown(String),
}

/// The catalog of symbolic glyphs and their activation state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GlyphRegistry {
    glyphs: Vec<Glyph>,
}

impl GlyphRegistry {
    /// Create an empty, unloaded registry.
    pub const fn new() -> Self {
        Self { glyphs: Vec::new() }
    }

    /// Generate the fixed catalog. No-op if already loaded.
    pub fn load(&mut self, rng: &mut impl Rng) {
        if !self.glyphs.is_empty() {
            return;
        }
        self.glyphs = catalog::generate_glyphs(rng);
        debug!(count = self.glyphs.len(), "glyph catalog loaded");
    }

    /// Discard the catalog. No-op if not loaded.
    pub fn clear(&mut self) {
        if self.glyphs.is_empty() {
            return;
        }
        self.glyphs.clear();
        debug!("glyph catalog cleared");
    }

    /// Activate the named glyph, paying a random stability cost.
    ///
    /// Returns `Ok(true)` on a state change, `Ok(false)` if the glyph is
    /// already active, and [`GlyphError::Unknown`] for names outside the
    /// catalog.
    pub fn activate(&mut self, name: &str, rng: &mut impl Rng) -> Result<bool, GlyphError> {
        let glyph = self
            .glyphs
            .iter_mut()
            .find(|glyph| glyph.name == name)
            .ok_or_else(|| GlyphError::Unknown(name.to_owned()))?;
        if glyph.active {
            return Ok(false);
        }
        glyph.active = true;
        let cost = rng.random_range(0.0..ACTIVATION_COST);
        glyph.stability = (glyph.stability - cost).max(ACTIVATION_FLOOR);
        debug!(name, stability = glyph.stability, "glyph activated");
        Ok(true)
    }

    /// Deactivate the named glyph, restoring a little stability.
    ///
    /// Same result contract as [`activate`](Self::activate).
    pub fn deactivate(&mut self, name: &str) -> Result<bool, GlyphError> {
        let glyph = self
            .glyphs
            .iter_mut()
            .find(|glyph| glyph.name == name)
            .ok_or_else(|| GlyphError::Unknown(name.to_owned()))?;
        if !glyph.active {
            return Ok(false);
        }
        glyph.active = false;
        glyph.stability = (glyph.stability + DEACTIVATION_RECOVERY).min(FIELD_CEILING);
        debug!(name, stability = glyph.stability, "glyph deactivated");
        Ok(true)
    }

    /// Run one tick over the whole catalog.
    ///
    /// Active glyphs fluctuate in power and stability within
    /// `[0.1, 1.0]`; inactive glyphs settle upward toward 0.9.
    pub fn process(&mut self, rng: &mut impl Rng) {
        for glyph in &mut self.glyphs {
            if glyph.active {
                glyph.power = stability::random_walk(
                    glyph.power,
                    POWER_AMPLITUDE,
                    FIELD_FLOOR,
                    FIELD_CEILING,
                    rng,
                );
                glyph.stability = stability::random_walk(
                    glyph.stability,
                    STABILITY_AMPLITUDE,
                    FIELD_FLOOR,
                    FIELD_CEILING,
                    rng,
                );
            } else {
                glyph.stability =
                    stability::drift_toward(glyph.stability, SETTLE_STEP, SETTLE_CEILING);
            }
        }
    }

    /// Whether the catalog has been loaded.
    pub fn is_loaded(&self) -> bool {
        !self.glyphs.is_empty()
    }

    /// Number of glyphs in the catalog.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Whether the catalog is empty (not yet loaded).
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// The full catalog, active flags included.
    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    /// Look up a glyph by name.
    pub fn find(&self, name: &str) -> Option<&Glyph> {
        self.glyphs.iter().find(|glyph| glyph.name == name)
    }

    /// The currently active glyphs.
    pub fn active(&self) -> impl Iterator<Item = &Glyph> {
        self.glyphs.iter().filter(|glyph| glyph.active)
    }

    /// The currently inactive (available) glyphs.
    pub fn available(&self) -> impl Iterator<Item = &Glyph> {
        self.glyphs.iter().filter(|glyph| !glyph.active)
    }
}
