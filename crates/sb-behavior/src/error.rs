use thiserror::Error;

use sb_agent::Breed;
use sb_core::{AgentId, Cell, SbError};
use sb_grid::GridError;

#[derive(Debug, Error)]
pub enum BehaviorError {
    #[error(transparent)]
    Core(#[from] SbError),

    #[error("grid invariant violated: {0}")]
    Grid(#[from] GridError),

    /// No empty cell anywhere on the grid.  Recoverable: the caller aborts
    /// the operation that needed the move.
    #[error("no empty cell left to relocate {0}")]
    RelocationExhausted(AgentId),

    #[error("{agent} ({breed}) cannot be activated by this behavior")]
    NotSchedulable { agent: AgentId, breed: Breed },

    #[error("{agent} caches position {cached} but the grid has it at {actual}")]
    StaleAgent { agent: AgentId, cached: Cell, actual: Cell },
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
