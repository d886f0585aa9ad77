//! separation: the 40×40 reference scenario of the separation-barrier model.
//!
//! Palestinians start in the lower half of a toroidal grid, settlers in the
//! upper half with settlements pushed below the midline, and a rear-guard row
//! closes the top edge.  Violence against a settler walls off a cell near the
//! victim; the run reports how the barrier grows alongside the violence.
//!
//! Set `RUST_LOG=debug` to see every barrier placement and relocation.

use std::time::Instant;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sb_agent::{AgentStore, Breed};
use sb_behavior::{SeparationBehavior, ViolenceTally};
use sb_core::{ModelParams, SimConfig, Tick};
use sb_sim::{DataCollector, SimBuilder, SimObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:              u64 = 42;
const MAX_TICKS:         u64 = 1_000;
const SNAPSHOT_INTERVAL: u64 = 100;
const REPORT_INTERVAL:   u64 = 100;

// ── Observer wrapper with progress logging ────────────────────────────────────

struct ProgressObserver {
    inner: DataCollector,
}

impl SimObserver for ProgressObserver {
    fn on_tick_start(&mut self, tick: Tick) {
        self.inner.on_tick_start(tick);
    }

    fn on_tick_end(&mut self, tick: Tick, violence: &ViolenceTally, agents: &AgentStore) {
        self.inner.on_tick_end(tick, violence, agents);
        if tick.0.is_multiple_of(REPORT_INTERVAL) {
            info!(
                %tick,
                violence = violence.this_tick,
                cumulative = violence.cumulative,
                barriers = agents.count_breed(Breed::Barrier),
                "progress"
            );
        }
    }

    fn on_snapshot(&mut self, tick: Tick, agents: &AgentStore) {
        self.inner.on_snapshot(tick, agents);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let params = ModelParams::default();
    let config = SimConfig {
        seed:                    SEED,
        max_ticks:               MAX_TICKS,
        snapshot_interval_ticks: SNAPSHOT_INTERVAL,
    };
    println!("=== separation — barrier model ===");
    println!(
        "Grid: {}×{} (torus: {})  |  Ticks: {}  |  Seed: {}",
        params.width, params.height, params.torus, config.max_ticks, config.seed
    );
    println!();

    // 1. Build and seed.
    let mut sim = SimBuilder::new(config, params.clone(), SeparationBehavior).build()?;
    let agents = &sim.world.agents;
    println!(
        "Seeded: {} settlers, {} Palestinians, {} rear-guard cells",
        agents.count_breed(Breed::Settler),
        agents.count_breed(Breed::Palestinian),
        agents.count_breed(Breed::RearGuard),
    );

    // 2. Run.
    let mut obs = ProgressObserver { inner: DataCollector::new() };
    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!(
        "  model rows : {}\n  agent rows : {}",
        obs.inner.model_rows().len(),
        obs.inner.agent_rows().len()
    );
    println!();

    // 3. Violence and barrier growth at each report interval.
    println!("{:<8} {:>10} {:>12} {:>10}", "Tick", "Violence", "Cumulative", "Barriers");
    println!("{}", "-".repeat(43));
    for row in obs.inner.model_rows().iter().filter(|r| r.tick.is_multiple_of(REPORT_INTERVAL)) {
        println!(
            "{:<8} {:>10} {:>12} {:>10}",
            row.tick, row.violence_this_tick, row.cumulative_violence, row.barriers
        );
    }
    println!();

    // 4. Machine-readable summary.
    let summary = serde_json::json!({
        "params": params,
        "seed":   SEED,
        "final":  obs.inner.latest(),
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
