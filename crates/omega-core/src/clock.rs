//! Tick counting and phase derivation for the Omega runtime.
//!
//! The clock is the single source of truth for temporal state: the tick
//! counter is stored, the phase is always computed from it. Advancement
//! uses checked arithmetic so the counter can never silently wrap.

use omega_types::SimulationPhase;

/// Tick-count thresholds for phase derivation, in ascending order.
const STABILIZATION_AT: u64 = 100;
const EXPLORATION_AT: u64 = 500;
const TRANSCENDENCE_AT: u64 = 1_000;
const OMEGA_STATE_AT: u64 = 2_000;

/// Errors that can occur during clock operations.
#[derive(Debug, thiserror::Error)]
pub enum ClockError {
    /// Tick counter would overflow.
    #[error("tick counter overflow: cannot advance beyond u64::MAX")]
    TickOverflow,
}

/// Derive the simulation phase from a tick count.
///
/// The phase is a non-decreasing step function of the tick count with
/// fixed thresholds at 100, 500, 1000, and 2000.
pub const fn phase_for_tick(tick: u64) -> SimulationPhase {
    if tick < STABILIZATION_AT {
        SimulationPhase::Initialization
    } else if tick < EXPLORATION_AT {
        SimulationPhase::Stabilization
    } else if tick < TRANSCENDENCE_AT {
        SimulationPhase::Exploration
    } else if tick < OMEGA_STATE_AT {
        SimulationPhase::Transcendence
    } else {
        SimulationPhase::OmegaState
    }
}

/// The runtime's tick counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RuntimeClock {
    tick: u64,
}

impl RuntimeClock {
    /// Create a clock at tick 0.
    pub const fn new() -> Self {
        Self { tick: 0 }
    }

    /// Create a clock at an explicit tick (useful for testing and state
    /// restoration).
    pub const fn at_tick(tick: u64) -> Self {
        Self { tick }
    }

    /// Advance by one tick and return the new count.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::TickOverflow`] if the counter is at
    /// `u64::MAX`.
    pub fn advance(&mut self) -> Result<u64, ClockError> {
        self.tick = self.tick.checked_add(1).ok_or(ClockError::TickOverflow)?;
        Ok(self.tick)
    }

    /// Reset to tick 0.
    pub const fn reset(&mut self) {
        self.tick = 0;
    }

    /// Number of completed ticks.
    pub const fn tick(&self) -> u64 {
        self.tick
    }

    /// Phase derived from the current tick count.
    pub const fn phase(&self) -> SimulationPhase {
        phase_for_tick(self.tick)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_boundaries_are_exact() {
        assert_eq!(phase_for_tick(0), SimulationPhase::Initialization);
        assert_eq!(phase_for_tick(99), SimulationPhase::Initialization);
        assert_eq!(phase_for_tick(100), SimulationPhase::Stabilization);
        assert_eq!(phase_for_tick(499), SimulationPhase::Stabilization);
        assert_eq!(phase_for_tick(500), SimulationPhase::Exploration);
        assert_eq!(phase_for_tick(999), SimulationPhase::Exploration);
        assert_eq!(phase_for_tick(1_000), SimulationPhase::Transcendence);
        assert_eq!(phase_for_tick(1_999), SimulationPhase::Transcendence);
        assert_eq!(phase_for_tick(2_000), SimulationPhase::OmegaState);
        assert_eq!(phase_for_tick(u64::MAX), SimulationPhase::OmegaState);
    }

    #[test]
    fn phase_is_monotonic_in_tick_count() {
        let mut previous = phase_for_tick(0);
        for tick in 1..2_500 {
            let phase = phase_for_tick(tick);
            assert!(phase >= previous, "phase regressed at tick {tick}");
            previous = phase;
        }
    }

    #[test]
    fn advance_counts_up_from_zero() {
        let mut clock = RuntimeClock::new();
        assert_eq!(clock.tick(), 0);
        assert!(matches!(clock.advance(), Ok(1)));
        assert!(matches!(clock.advance(), Ok(2)));
        assert_eq!(clock.tick(), 2);
    }

    #[test]
    fn advance_refuses_to_wrap() {
        let mut clock = RuntimeClock::at_tick(u64::MAX);
        assert!(matches!(clock.advance(), Err(ClockError::TickOverflow)));
        assert_eq!(clock.tick(), u64::MAX);
    }

    #[test]
    fn reset_returns_to_tick_zero() {
        let mut clock = RuntimeClock::new();
        for _ in 0..10 {
            let _ = clock.advance();
        }
        clock.reset();
        assert_eq!(clock.tick(), 0);
        assert_eq!(clock.phase(), SimulationPhase::Initialization);
    }
}
