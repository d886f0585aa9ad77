//! The mutable simulation context handed to every behavior call.

use sb_agent::{Agent, AgentKind, AgentStore, Breed, PalestinianState, SettlerState};
use sb_core::{AgentId, Cell, ModelParams, SimRng};
use sb_grid::{Connectivity, Grid, GridError};

use crate::{BehaviorError, BehaviorResult, ViolenceTally};

/// Everything one run mutates during a tick.
///
/// Independent runs own independent `World`s, so several simulations can run
/// side by side and tests can inject a seeded RNG.
pub struct World {
    pub params:   ModelParams,
    pub grid:     Grid,
    pub agents:   AgentStore,
    /// The single shared random stream.
    pub rng:      SimRng,
    pub violence: ViolenceTally,
    /// Agents created by behaviors this tick and not yet handed to the
    /// scheduler.
    spawned:      Vec<AgentId>,
}

impl World {
    /// An empty grid sized from `params`.
    pub fn new(params: ModelParams, rng: SimRng) -> Self {
        let grid = Grid::new(params.width, params.height, params.torus);
        Self {
            agents: AgentStore::with_capacity(params.cell_count()),
            params,
            grid,
            rng,
            violence: ViolenceTally::default(),
            spawned: Vec::new(),
        }
    }

    // ── Creation ──────────────────────────────────────────────────────────

    /// Create an agent and put it on `cell`.
    ///
    /// Fails without creating anything if `cell` is off the grid or taken.
    pub fn spawn(&mut self, kind: AgentKind, cell: Cell, vision: u32) -> BehaviorResult<AgentId> {
        if !self.grid.contains(cell) {
            return Err(GridError::OutOfBounds(cell).into());
        }
        if let Some(occupant) = self.grid.occupant(cell) {
            return Err(GridError::CellOccupied { cell, occupant }.into());
        }
        let id = self.agents.spawn(kind, cell, vision)?;
        self.grid.place(id, cell)?;
        Ok(id)
    }

    pub fn spawn_settler(&mut self, cell: Cell) -> BehaviorResult<AgentId> {
        let vision = self.params.settler_vision;
        self.spawn(AgentKind::Settler(SettlerState::default()), cell, vision)
    }

    pub fn spawn_palestinian(&mut self, cell: Cell) -> BehaviorResult<AgentId> {
        let vision = self.params.palestinian_vision;
        self.spawn(AgentKind::Palestinian(PalestinianState::default()), cell, vision)
    }

    pub fn spawn_barrier(&mut self, cell: Cell) -> BehaviorResult<AgentId> {
        self.spawn(AgentKind::Barrier, cell, 1)
    }

    pub fn spawn_rear_guard(&mut self, cell: Cell) -> BehaviorResult<AgentId> {
        self.spawn(AgentKind::RearGuard, cell, 1)
    }

    /// Record an agent created mid-tick so the scheduler can pick it up.
    pub(crate) fn note_spawned(&mut self, agent: AgentId) {
        self.spawned.push(agent);
    }

    /// Drain agents created by behaviors since the last call.
    pub fn take_spawned(&mut self) -> Vec<AgentId> {
        std::mem::take(&mut self.spawned)
    }

    // ── Position ──────────────────────────────────────────────────────────

    /// Grid position of `agent`, checked against its cached copy.
    pub fn position(&self, agent: AgentId) -> BehaviorResult<Cell> {
        let cached = self.agents.get(agent)?.pos;
        let actual = self.grid.position_of(agent).ok_or(GridError::NotPlaced(agent))?;
        if cached != actual {
            return Err(BehaviorError::StaleAgent { agent, cached, actual });
        }
        Ok(actual)
    }

    /// Move `agent` to `to` on the grid and refresh its cached position.
    pub fn move_agent(&mut self, agent: AgentId, to: Cell) -> BehaviorResult<()> {
        let mover = self.agents.get_mut(agent)?;
        self.grid.move_agent(agent, to)?;
        mover.pos = to;
        Ok(())
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Moore neighborhood of `cell` within `radius`, centre excluded.
    pub fn neighborhood(&self, cell: Cell, radius: u32) -> Vec<Cell> {
        self.grid.neighborhood(cell, Connectivity::Moore, radius, false)
    }

    /// Breed of the agent on `cell`, if any.
    pub fn breed_at(&self, cell: Cell) -> Option<Breed> {
        self.grid.occupant(cell).and_then(|id| self.agents.breed_of(id))
    }

    /// Occupants of `cells` whose breed is `breed`, in enumeration order.
    pub fn occupants_of_breed(&self, cells: &[Cell], breed: Breed) -> Vec<AgentId> {
        cells
            .iter()
            .filter_map(|&c| self.grid.occupant(c))
            .filter(|&id| self.agents.breed_of(id) == Some(breed))
            .collect()
    }

    pub fn agent(&self, agent: AgentId) -> BehaviorResult<&Agent> {
        Ok(self.agents.get(agent)?)
    }

    pub fn agent_mut(&mut self, agent: AgentId) -> BehaviorResult<&mut Agent> {
        Ok(self.agents.get_mut(agent)?)
    }
}
