//! Grid error type.

use thiserror::Error;

use sb_core::{AgentId, Cell};

/// Errors produced by `sb-grid`.
///
/// Every variant signals a broken occupancy invariant in the caller; none of
/// them is expected in a correct run.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("cell {cell} is already occupied by {occupant}")]
    CellOccupied { cell: Cell, occupant: AgentId },

    #[error("cell {0} is outside the grid")]
    OutOfBounds(Cell),

    #[error("agent {0} is not on the grid")]
    NotPlaced(AgentId),

    #[error("agent {agent} is already placed at {at}")]
    AlreadyPlaced { agent: AgentId, at: Cell },
}

pub type GridResult<T> = Result<T, GridError>;
