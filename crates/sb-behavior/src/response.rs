//! Violence reception handlers.
//!
//! These run synchronously inside the attacker's step and are the only code
//! path where one agent's behavior mutates another agent.

use sb_agent::AgentKind;
use sb_core::AgentId;

use crate::{place_barrier, BarrierOutcome, BehaviorResult, World};

/// Apply an attack by `aggressor` on `victim`.
///
/// - Settler victim: flagged `victim`, then a barrier is placed using the
///   aggressor's cell as trigger and the settler's own cell as victim
///   position.  Returns the placement outcome.
/// - Palestinian victim: flagged `victim` and its anger raised by
///   `anger_increment`.  Returns `None`.
/// - Terrain is never a victim; attacks on it are ignored.
pub fn receive_violence(
    world:     &mut World,
    victim:    AgentId,
    aggressor: AgentId,
) -> BehaviorResult<Option<BarrierOutcome>> {
    let anger_step = world.params.anger_increment;
    let target = world.agent_mut(victim)?;
    match &mut target.kind {
        AgentKind::Settler(s) => {
            s.victim = true;
        }
        AgentKind::Palestinian(p) => {
            p.victim = true;
            p.add_anger(anger_step);
            return Ok(None);
        }
        AgentKind::Barrier | AgentKind::RearGuard => return Ok(None),
    }

    let trigger = world.position(aggressor)?;
    let at = world.position(victim)?;
    place_barrier(world, trigger, at).map(Some)
}
