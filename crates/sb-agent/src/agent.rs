//! The `Agent` record and its per-breed state.
//!
//! An agent's position is owned by the grid; `Agent::pos` is a cached copy
//! that the simulation context rewrites on every move.

use sb_core::{AgentId, Cell};

use crate::{AgentSnapshot, Breed};

/// Transient settler flags, cleared at the start of every tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SettlerState {
    pub violent: bool,
    pub victim:  bool,
}

/// Palestinian state.
///
/// `violent`, `victim` and `suicide` are transient.  `anger` persists across
/// ticks and decays toward zero.  `freedom` and `blockage` are recomputed from
/// the current neighborhood before every use.
#[derive(Clone, Debug, PartialEq)]
pub struct PalestinianState {
    pub violent:  bool,
    pub victim:   bool,
    pub suicide:  bool,
    pub anger:    f64,
    pub freedom:  f64,
    pub blockage: f64,
}

impl Default for PalestinianState {
    fn default() -> Self {
        Self {
            violent:  false,
            victim:   false,
            suicide:  false,
            anger:    0.0,
            freedom:  1.0,
            blockage: 0.0,
        }
    }
}

impl PalestinianState {
    /// Lower anger by `step`, never below zero.
    #[inline]
    pub fn decay_anger(&mut self, step: f64) {
        self.anger = (self.anger - step).max(0.0);
    }

    /// Raise anger by `step` (negative steps are ignored).
    #[inline]
    pub fn add_anger(&mut self, step: f64) {
        self.anger += step.max(0.0);
    }
}

/// Per-breed payload of an [`Agent`].
#[derive(Clone, Debug, PartialEq)]
pub enum AgentKind {
    Settler(SettlerState),
    Palestinian(PalestinianState),
    Barrier,
    RearGuard,
}

impl AgentKind {
    pub fn breed(&self) -> Breed {
        match self {
            AgentKind::Settler(_)     => Breed::Settler,
            AgentKind::Palestinian(_) => Breed::Palestinian,
            AgentKind::Barrier        => Breed::Barrier,
            AgentKind::RearGuard      => Breed::RearGuard,
        }
    }
}

/// One agent on the grid.
#[derive(Clone, Debug, PartialEq)]
pub struct Agent {
    pub id:     AgentId,
    /// Cached copy of the grid position.
    pub pos:    Cell,
    /// Neighborhood radius for perception and relocation search.
    pub vision: u32,
    pub kind:   AgentKind,
}

impl Agent {
    #[inline]
    pub fn breed(&self) -> Breed {
        self.kind.breed()
    }

    /// Clear `violent`, `victim` and `suicide`.  Terrain is untouched.
    pub fn reset_transient(&mut self) {
        match &mut self.kind {
            AgentKind::Settler(s) => {
                s.violent = false;
                s.victim = false;
            }
            AgentKind::Palestinian(p) => {
                p.violent = false;
                p.victim = false;
                p.suicide = false;
            }
            AgentKind::Barrier | AgentKind::RearGuard => {}
        }
    }

    pub fn as_settler_mut(&mut self) -> Option<&mut SettlerState> {
        match &mut self.kind {
            AgentKind::Settler(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_palestinian(&self) -> Option<&PalestinianState> {
        match &self.kind {
            AgentKind::Palestinian(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_palestinian_mut(&mut self) -> Option<&mut PalestinianState> {
        match &mut self.kind {
            AgentKind::Palestinian(p) => Some(p),
            _ => None,
        }
    }

    /// `true` if the agent is flagged violent this tick.
    pub fn is_violent(&self) -> bool {
        match &self.kind {
            AgentKind::Settler(s)     => s.violent,
            AgentKind::Palestinian(p) => p.violent,
            _ => false,
        }
    }

    /// `true` if the agent was attacked this tick.
    pub fn is_victim(&self) -> bool {
        match &self.kind {
            AgentKind::Settler(s)     => s.victim,
            AgentKind::Palestinian(p) => p.victim,
            _ => false,
        }
    }

    /// Read-only reporting row for this agent.
    pub fn snapshot(&self) -> AgentSnapshot {
        let (suicide, anger, freedom) = match &self.kind {
            AgentKind::Palestinian(p) => (p.suicide, p.anger, p.freedom),
            _ => (false, 0.0, 1.0),
        };
        AgentSnapshot {
            agent_id: self.id.0,
            x:        self.pos.x,
            y:        self.pos.y,
            breed:    self.breed(),
            violent:  self.is_violent(),
            victim:   self.is_victim(),
            suicide,
            anger,
            freedom,
        }
    }
}
