//! Engine binary for the Omega simulation runtime.
//!
//! Loads configuration, starts a session, and drives the tick loop until
//! the configured tick bound (or forever if unbounded). On exit the final
//! runtime snapshot is written to stdout as JSON for the outer shell.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from `omega-config.yaml`
//! 3. Construct and start the seeded runtime
//! 4. Run the tick loop until a termination condition is met
//! 5. Emit the final snapshot and stop the session

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use omega_core::config::RuntimeConfig;
use omega_core::runner::{self, NoOpCallback, RunnerControl};
use omega_core::runtime::SimulationRuntime;

/// Default configuration file path, relative to the working directory.
const CONFIG_PATH: &str = "omega-config.yaml";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone())),
        )
        .with_target(true)
        .init();

    info!(
        world_name = config.world.name,
        seed = config.world.seed,
        tick_interval_ms = config.ticks.interval_ms,
        max_ticks = config.ticks.max_ticks,
        "omega-engine starting"
    );

    let mut runtime = SimulationRuntime::new(config.world.seed);
    runtime.start();

    let control = Arc::new(RunnerControl::new(
        config.ticks.interval_ms,
        config.ticks.max_ticks,
    ));
    let mut callback = NoOpCallback;

    let outcome = runner::run_simulation(&mut runtime, &control, &mut callback)
        .await
        .context("simulation run failed")?;

    info!(
        reason = ?outcome.end_reason,
        total_ticks = outcome.total_ticks,
        final_phase = ?outcome.final_summary.as_ref().map(|summary| summary.phase),
        "run ended"
    );

    let snapshot = runtime.snapshot();
    let rendered =
        serde_json::to_string_pretty(&snapshot).context("failed to render final snapshot")?;
    println!("{rendered}");

    runtime.stop();
    Ok(())
}

/// Load configuration, falling back to defaults when the file is absent.
fn load_config() -> anyhow::Result<RuntimeConfig> {
    let path = Path::new(CONFIG_PATH);
    if path.exists() {
        RuntimeConfig::from_file(path).with_context(|| format!("failed to load {CONFIG_PATH}"))
    } else {
        Ok(RuntimeConfig::default())
    }
}
