//! The `Sim` struct and its tick loop.

use sb_behavior::{BehaviorModel, World};
use sb_core::{SimClock, SimConfig, Tick};
use sb_schedule::RandomActivation;
use tracing::{debug, info};

use crate::{NoopObserver, SimObserver, SimResult};

/// The main simulation runner.
///
/// Holds the world, the scheduler and the behavior model, and drives one
/// activation pass per tick.  Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<B: BehaviorModel> {
    pub config: SimConfig,

    pub clock: SimClock,

    /// Grid, agents, RNG and violence tally.
    pub world: World,

    /// Agents activated each tick, in registration order before shuffling.
    pub scheduler: RandomActivation,

    pub behavior: B,
}

impl<B: BehaviorModel> Sim<B> {
    // ── Public API ────────────────────────────────────────────────────────

    /// `true` until the clock reaches `config.max_ticks`.
    pub fn running(&self) -> bool {
        self.clock.current_tick < self.config.end_tick()
    }

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        info!(
            from = %self.clock.current_tick,
            to = %self.config.end_tick(),
            agents = self.world.agents.len(),
            "run started"
        );
        while self.running() {
            self.observed_tick(observer)?;
        }
        observer.on_sim_end(self.clock.current_tick);
        info!(
            tick = %self.clock.current_tick,
            cumulative_violence = self.world.violence.cumulative,
            "run finished"
        );
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.observed_tick(observer)?;
        }
        Ok(())
    }

    /// Advance one tick without an observer.  Returns the number of agents
    /// activated.
    pub fn step(&mut self) -> SimResult<usize> {
        self.observed_tick(&mut NoopObserver)
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn observed_tick<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<usize> {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);
        let activated = self.process_tick(now)?;
        observer.on_tick_end(now, &self.world.violence, &self.world.agents);
        if self.config.is_snapshot_tick(now) {
            observer.on_snapshot(now, &self.world.agents);
        }
        self.clock.advance();
        Ok(activated)
    }

    fn process_tick(&mut self, now: Tick) -> SimResult<usize> {
        let world = &mut self.world;

        world.agents.reset_transient();
        world.violence.begin_tick();

        // The order is a copy, so agents registered below cannot join it.
        let order = self.scheduler.begin_tick(&mut world.rng);
        for &agent in &order {
            self.behavior.step(world, agent)?;
        }

        for agent in world.take_spawned() {
            self.scheduler.register(agent);
        }
        world.violence.end_tick();

        debug!(
            tick = %now,
            activated = order.len(),
            violence = world.violence.this_tick,
            "tick complete"
        );
        Ok(order.len())
    }
}
