//! Settler behavior.

use sb_agent::Breed;
use sb_core::AgentId;
use tracing::debug;

use crate::{receive_violence, BehaviorError, BehaviorResult, World};

/// One settler activation.
///
/// 1. Clear `violent` and `victim`.
/// 2. Look at the Moore neighborhood within `vision`.
/// 3. If a Palestinian is in sight, draw once; below `settler_violence_rate`
///    pick one uniformly (one draw), flag `violent`, count one unit of
///    violence and run the victim's reception handler.
/// 4. Growth (only when `settler_growth_rate > 0`): if a neighbor cell is
///    empty, draw once; below the rate, pick an empty neighbor uniformly (one
///    draw) and spawn a settler there.  The newcomer first acts next tick.
pub fn step(world: &mut World, agent: AgentId) -> BehaviorResult<()> {
    let (vision, breed) = {
        let me = world.agent_mut(agent)?;
        me.reset_transient();
        (me.vision, me.breed())
    };
    if breed != Breed::Settler {
        return Err(BehaviorError::NotSchedulable { agent, breed });
    }
    let pos = world.position(agent)?;

    let cells = world.neighborhood(pos, vision);
    let palestinians = world.occupants_of_breed(&cells, Breed::Palestinian);
    if !palestinians.is_empty() && world.rng.uniform() < world.params.settler_violence_rate {
        if let Some(&victim) = world.rng.choose(&palestinians) {
            if let Some(s) = world.agent_mut(agent)?.as_settler_mut() {
                s.violent = true;
            }
            world.violence.record(1);
            receive_violence(world, victim, agent)?;
        }
    }

    if world.params.settler_growth_rate > 0.0 {
        let empties: Vec<_> = cells.into_iter().filter(|&c| world.grid.is_empty(c)).collect();
        if !empties.is_empty() && world.rng.uniform() < world.params.settler_growth_rate {
            if let Some(&cell) = world.rng.choose(&empties) {
                let child = world.spawn_settler(cell)?;
                world.note_spawned(child);
                debug!(parent = %agent, %child, %cell, "settlement grew");
            }
        }
    }
    Ok(())
}
