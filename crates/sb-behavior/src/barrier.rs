//! Barrier construction triggered by violence against a settler.
//!
//! # Target selection
//!
//! | `greed_level` | Target cell                                                  |
//! |---------------|--------------------------------------------------------------|
//! | `0`           | The attacker's own cell                                      |
//! | `g > 0`       | Furthest eligible cell within radius `g + 1` of the victim   |
//!
//! A cell is eligible if it is empty or held by a Palestinian.  Settlers,
//! barriers and rear-guard cells are never displaced.  The ranking is the
//! wrap-aware Euclidean distance from the victim, sorted stably so equal
//! distances keep neighborhood enumeration order; no randomness is involved.
//!
//! A Palestinian on the target is relocated first (anchored at the target
//! cell).  If relocation is impossible the placement is aborted and the grid
//! is left exactly as it was.

use sb_agent::Breed;
use sb_core::{AgentId, Cell};
use sb_grid::{furthest_first, Connectivity};
use tracing::{debug, warn};

use crate::{relocate, BehaviorError, BehaviorResult, World};

/// Why a barrier was not built.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AbortReason {
    /// Every candidate cell holds a non-displaceable agent.
    NoEligibleCell,
    /// The target's occupant had nowhere to go.
    RelocationExhausted,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BarrierOutcome {
    Built {
        cell:      Cell,
        barrier:   AgentId,
        /// The Palestinian moved off `cell`, if there was one.
        displaced: Option<AgentId>,
    },
    Aborted(AbortReason),
}

/// `true` if a barrier may go on `cell`.
fn eligible(world: &World, cell: Cell) -> bool {
    world.breed_at(cell).is_none_or(Breed::can_be_displaced)
}

/// Pick the barrier site for an attack from `trigger` on the settler at
/// `victim`.  Pure: reads the grid, draws nothing.
pub fn select_target(world: &World, trigger: Cell, victim: Cell) -> Option<Cell> {
    match world.params.greed_level {
        0 => Some(trigger).filter(|&c| eligible(world, c)),
        greed => {
            let candidates =
                world.grid.neighborhood(victim, Connectivity::Moore, greed.saturating_add(1), false);
            furthest_first(victim, &candidates, world.grid.metric_extent())
                .into_iter()
                .find(|&c| eligible(world, c))
        }
    }
}

/// Build a permanent barrier in response to an attack from `trigger` on the
/// settler at `victim`.
pub fn place_barrier(world: &mut World, trigger: Cell, victim: Cell) -> BehaviorResult<BarrierOutcome> {
    let Some(cell) = select_target(world, trigger, victim) else {
        debug!(%trigger, %victim, "no eligible barrier cell");
        return Ok(BarrierOutcome::Aborted(AbortReason::NoEligibleCell));
    };

    let displaced = world.grid.occupant(cell);
    if let Some(occupant) = displaced {
        match relocate(world, occupant, cell) {
            Ok(_) => {}
            Err(BehaviorError::RelocationExhausted(_)) => {
                warn!(%cell, %occupant, "grid full, barrier placement aborted");
                return Ok(BarrierOutcome::Aborted(AbortReason::RelocationExhausted));
            }
            Err(e) => return Err(e),
        }
    }

    let barrier = world.spawn_barrier(cell)?;
    debug!(%cell, %barrier, ?displaced, "barrier built");
    Ok(BarrierOutcome::Built { cell, barrier, displaced })
}
