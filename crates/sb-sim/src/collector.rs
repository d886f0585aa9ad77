//! In-memory data collection: one model row per tick, agent rows on
//! snapshot ticks.

use sb_agent::{AgentSnapshot, AgentStore, Breed};
use sb_behavior::ViolenceTally;
use sb_core::Tick;

use crate::SimObserver;

/// Model-level state after one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModelRow {
    pub tick:                u64,
    pub violence_this_tick:  u64,
    pub cumulative_violence: u64,
    pub settlers:            u64,
    pub palestinians:        u64,
    pub barriers:            u64,
}

/// One agent's reportable state at one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentRow {
    pub tick:     u64,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub snapshot: AgentSnapshot,
}

/// A [`SimObserver`] that keeps every row in memory.
#[derive(Debug, Default)]
pub struct DataCollector {
    model_rows: Vec<ModelRow>,
    agent_rows: Vec<AgentRow>,
}

impl DataCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn model_rows(&self) -> &[ModelRow] {
        &self.model_rows
    }

    pub fn agent_rows(&self) -> &[AgentRow] {
        &self.agent_rows
    }

    /// The most recent model row, if any tick has completed.
    pub fn latest(&self) -> Option<&ModelRow> {
        self.model_rows.last()
    }

    /// Agent rows recorded at `tick`.
    pub fn agents_at(&self, tick: Tick) -> impl Iterator<Item = &AgentRow> + '_ {
        self.agent_rows.iter().filter(move |r| r.tick == tick.0)
    }
}

impl SimObserver for DataCollector {
    fn on_tick_end(&mut self, tick: Tick, violence: &ViolenceTally, agents: &AgentStore) {
        self.model_rows.push(ModelRow {
            tick:                tick.0,
            violence_this_tick:  violence.this_tick,
            cumulative_violence: violence.cumulative,
            settlers:            agents.count_breed(Breed::Settler) as u64,
            palestinians:        agents.count_breed(Breed::Palestinian) as u64,
            barriers:            agents.count_breed(Breed::Barrier) as u64,
        });
    }

    fn on_snapshot(&mut self, tick: Tick, agents: &AgentStore) {
        self.agent_rows.extend(
            agents.iter().map(|a| AgentRow { tick: tick.0, snapshot: a.snapshot() }),
        );
    }
}
