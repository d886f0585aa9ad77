//! `RandomActivation`: randomized, single-activation-per-tick scheduler.
//!
//! # Ordering
//!
//! Agents are kept in registration order.  Each tick the scheduler copies that
//! list and shuffles the copy with the shared [`SimRng`], so the order is
//! re-randomized every tick yet fully determined by the seed.  Because the
//! caller iterates the copy, registering a new agent mid-tick cannot cause it
//! (or anyone else) to be activated twice.

use std::collections::HashSet;

use sb_core::{AgentId, SimRng};

#[derive(Default)]
pub struct RandomActivation {
    agents:     Vec<AgentId>,
    registered: HashSet<AgentId>,
    /// Completed calls to [`begin_tick`](Self::begin_tick).
    steps:      u64,
}

impl RandomActivation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `agent` to the activation list.
    ///
    /// Returns `false` (and changes nothing) if it is already registered.
    pub fn register(&mut self, agent: AgentId) -> bool {
        if !self.registered.insert(agent) {
            return false;
        }
        self.agents.push(agent);
        true
    }

    /// Shuffled activation order for one tick.  Consumes one shuffle's worth
    /// of draws from `rng`.
    pub fn begin_tick(&mut self, rng: &mut SimRng) -> Vec<AgentId> {
        let mut order = self.agents.clone();
        rng.shuffle(&mut order);
        self.steps += 1;
        order
    }

    pub fn contains(&self, agent: AgentId) -> bool {
        self.registered.contains(&agent)
    }

    /// Registered agents in registration order.
    pub fn agents(&self) -> &[AgentId] {
        &self.agents
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }
}
