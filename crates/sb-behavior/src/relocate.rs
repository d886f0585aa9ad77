//! Relocation of an agent evicted from its cell.

use sb_core::{AgentId, Cell};
use sb_grid::{nearest_first, Connectivity};
use tracing::debug;

use crate::{BehaviorError, BehaviorResult, World};

/// Move `agent` to the empty cell nearest to `anchor`.
///
/// The search covers the Moore neighborhood of `anchor` (centre included)
/// within the agent's own vision, ranked nearest first with the wrap-aware
/// metric; ties keep enumeration order.  If that neighborhood has no empty
/// cell, the agent goes to a uniformly random empty cell anywhere on the grid
/// (one draw).  Returns the new cell.
///
/// # Errors
///
/// [`BehaviorError::RelocationExhausted`] when the grid has no empty cell at
/// all.  Nothing is modified in that case.
pub fn relocate(world: &mut World, agent: AgentId, anchor: Cell) -> BehaviorResult<Cell> {
    let vision = world.agent(agent)?.vision;
    let candidates = world.grid.neighborhood(anchor, Connectivity::Moore, vision, true);
    let ranked = nearest_first(anchor, &candidates, world.grid.metric_extent());

    let dest = match ranked.into_iter().find(|&c| world.grid.is_empty(c)) {
        Some(cell) => cell,
        None => {
            let fallback = world
                .grid
                .random_empty_cell(&mut world.rng)
                .ok_or(BehaviorError::RelocationExhausted(agent))?;
            debug!(%agent, %anchor, to = %fallback, "local search exhausted, relocating globally");
            fallback
        }
    };

    world.move_agent(agent, dest)?;
    debug!(%agent, to = %dest, "relocated");
    Ok(dest)
}
