//! `AgentStore`: every agent ever created, indexed by `AgentId`.
//!
//! Ids are handed out in creation order (`AgentId(n)` is the n-th agent) and
//! agents are never deleted, so `agents[id.index()]` is always valid for an
//! id this store issued.

use sb_core::{AgentId, Cell, SbError, SbResult};

use crate::{Agent, AgentKind, Breed};

#[derive(Default)]
pub struct AgentStore {
    agents: Vec<Agent>,
}

impl AgentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { agents: Vec::with_capacity(capacity) }
    }

    /// Create an agent and return its freshly assigned id.
    ///
    /// The store does not touch the grid; placing the agent is the caller's
    /// job.
    pub fn spawn(&mut self, kind: AgentKind, pos: Cell, vision: u32) -> SbResult<AgentId> {
        let id = next_id(self.agents.len())?;
        self.agents.push(Agent { id, pos, vision, kind });
        Ok(id)
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn get(&self, id: AgentId) -> SbResult<&Agent> {
        self.agents.get(id.index()).ok_or(SbError::AgentNotFound(id))
    }

    pub fn get_mut(&mut self, id: AgentId) -> SbResult<&mut Agent> {
        self.agents.get_mut(id.index()).ok_or(SbError::AgentNotFound(id))
    }

    /// Breed of `id`, or `None` for an id this store never issued.
    #[inline]
    pub fn breed_of(&self, id: AgentId) -> Option<Breed> {
        self.agents.get(id.index()).map(Agent::breed)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Agent> {
        self.agents.iter()
    }

    /// Iterator over all `AgentId`s in ascending order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.agents.iter().map(|a| a.id)
    }

    pub fn count_breed(&self, breed: Breed) -> usize {
        self.agents.iter().filter(|a| a.breed() == breed).count()
    }

    /// Clear the transient flags of every agent.
    pub fn reset_transient(&mut self) {
        for agent in &mut self.agents {
            agent.reset_transient();
        }
    }
}

/// The id for the agent created after `issued` others.
pub(crate) fn next_id(issued: usize) -> SbResult<AgentId> {
    AgentId::try_from(issued).map_err(|_| SbError::IdSpaceExhausted(issued))
}
