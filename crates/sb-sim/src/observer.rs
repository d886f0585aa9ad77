//! Simulation observer trait for progress reporting and data collection.

use sb_agent::AgentStore;
use sb_behavior::ViolenceTally;
use sb_core::Tick;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: violence printer
///
/// ```rust,ignore
/// struct ViolencePrinter;
///
/// impl SimObserver for ViolencePrinter {
///     fn on_tick_end(&mut self, tick: Tick, violence: &ViolenceTally, _: &AgentStore) {
///         println!("{tick}: {} this tick, {} total", violence.this_tick, violence.cumulative);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any agent acts.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once every agent has acted and the violence tally is final.
    fn on_tick_end(&mut self, _tick: Tick, _violence: &ViolenceTally, _agents: &AgentStore) {}

    /// Called after `on_tick_end` on snapshot ticks
    /// (every `config.snapshot_interval_ticks`).
    fn on_snapshot(&mut self, _tick: Tick, _agents: &AgentStore) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
