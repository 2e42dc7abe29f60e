//! Tick loop runner with external controls.
//!
//! The runtime itself is synchronous; this module supplies the periodic
//! caller the core otherwise leaves external. [`run_simulation`] drives
//! [`SimulationRuntime::tick`] at a fixed (runtime-adjustable) cadence
//! with support for:
//!
//! - **Bounded runs**: stop after `max_ticks` (0 = unlimited)
//! - **Pause/resume**: halt and continue the loop without stopping
//! - **Clean stop**: external stop request between ticks
//!
//! All control fields are atomics behind an [`Arc`] so an outer shell can
//! flip them from another task without locks on the hot path. The runtime
//! itself is owned exclusively by the loop, which preserves the
//! no-concurrent-mutation contract.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use tokio::sync::Notify;
use tracing::info;

use crate::runtime::{RuntimeError, SimulationRuntime, TickSummary};

/// Reason why a simulation run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunEndReason {
    /// Reached the configured `max_ticks` limit.
    MaxTicksReached,
    /// An external stop was requested.
    StopRequested,
}

/// Errors that can occur during the simulation run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// A tick execution failed.
    #[error("tick error: {source}")]
    Tick {
        /// The underlying runtime error.
        #[from]
        source: RuntimeError,
    },
}

/// Result of a bounded simulation run.
#[derive(Debug)]
pub struct RunOutcome {
    /// Why the run ended.
    pub end_reason: RunEndReason,
    /// The last tick summary, if any tick completed.
    pub final_summary: Option<TickSummary>,
    /// Total number of ticks executed.
    pub total_ticks: u64,
}

/// Shared control state for a running tick loop.
#[derive(Debug)]
pub struct RunnerControl {
    paused: AtomicBool,
    resume_notify: Notify,
    stop_requested: AtomicBool,
    tick_interval_ms: AtomicU64,
    max_ticks: u64,
}

impl RunnerControl {
    /// Create control state with the given cadence and tick bound
    /// (0 = unlimited).
    pub const fn new(tick_interval_ms: u64, max_ticks: u64) -> Self {
        Self {
            paused: AtomicBool::new(false),
            resume_notify: Notify::const_new(),
            stop_requested: AtomicBool::new(false),
            tick_interval_ms: AtomicU64::new(tick_interval_ms),
            max_ticks,
        }
    }

    /// Pause the loop. The next iteration sleeps until resumed.
    pub fn pause(&self) {
        self.paused.store(true, Ordering::Release);
    }

    /// Resume the loop and wake it if it is waiting.
    pub fn resume(&self) {
        self.paused.store(false, Ordering::Release);
        self.resume_notify.notify_one();
    }

    /// Whether the loop is paused.
    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::Acquire)
    }

    /// Block until no longer paused. Returns immediately if not paused.
    pub async fn wait_if_paused(&self) {
        while self.paused.load(Ordering::Acquire) {
            self.resume_notify.notified().await;
        }
    }

    /// Request a clean stop before the next tick.
    pub fn request_stop(&self) {
        self.stop_requested.store(true, Ordering::Release);
        self.resume_notify.notify_one();
    }

    /// Whether a stop has been requested.
    pub fn is_stop_requested(&self) -> bool {
        self.stop_requested.load(Ordering::Acquire)
    }

    /// Current tick interval in milliseconds.
    pub fn tick_interval_ms(&self) -> u64 {
        self.tick_interval_ms.load(Ordering::Acquire)
    }

    /// Adjust the tick interval at runtime.
    pub fn set_tick_interval_ms(&self, ms: u64) {
        self.tick_interval_ms.store(ms, Ordering::Release);
    }

    /// Whether the tick bound has been reached.
    pub const fn tick_limit_reached(&self, current_tick: u64) -> bool {
        self.max_ticks > 0 && current_tick >= self.max_ticks
    }
}

/// Callback invoked after each tick completes.
///
/// Implementations can forward summaries to a dashboard, write metrics,
/// and so on.
pub trait TickCallback: Send {
    /// Called after a tick completes successfully.
    fn on_tick(&mut self, summary: &TickSummary, runtime: &SimulationRuntime);
}

/// A no-op tick callback for testing.
pub struct NoOpCallback;

impl TickCallback for NoOpCallback {
    fn on_tick(&mut self, _summary: &TickSummary, _runtime: &SimulationRuntime) {}
}

/// Drive the tick loop until a termination condition is met.
///
/// The runtime must already be started; the loop does not call `start()`
/// or `stop()` itself, leaving session lifecycle to the caller.
///
/// # Errors
///
/// Returns [`RunnerError::Tick`] if a tick fails (runtime not started,
/// tick counter overflow).
pub async fn run_simulation(
    runtime: &mut SimulationRuntime,
    control: &Arc<RunnerControl>,
    callback: &mut dyn TickCallback,
) -> Result<RunOutcome, RunnerError> {
    let mut last_summary: Option<TickSummary> = None;
    let mut total_ticks: u64 = 0;

    info!(
        max_ticks = control.max_ticks,
        tick_interval_ms = control.tick_interval_ms(),
        "run loop starting"
    );

    loop {
        if control.is_paused() {
            info!("run loop paused, waiting for resume");
            control.wait_if_paused().await;
            info!("run loop resumed");
        }

        if control.is_stop_requested() {
            info!(total_ticks, "stop requested");
            return Ok(RunOutcome {
                end_reason: RunEndReason::StopRequested,
                final_summary: last_summary,
                total_ticks,
            });
        }

        let summary = runtime.tick()?;
        total_ticks = total_ticks.saturating_add(1);
        callback.on_tick(&summary, runtime);

        if control.tick_limit_reached(summary.tick) {
            info!(tick = summary.tick, max_ticks = control.max_ticks, "tick limit reached");
            return Ok(RunOutcome {
                end_reason: RunEndReason::MaxTicksReached,
                final_summary: Some(summary),
                total_ticks,
            });
        }

        last_summary = Some(summary);

        let interval_ms = control.tick_interval_ms();
        if interval_ms > 0 {
            tokio::time::sleep(tokio::time::Duration::from_millis(interval_ms)).await;
        }
    }
}
