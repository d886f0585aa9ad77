//! The `BehaviorModel` trait: the per-agent decision seam.

use sb_agent::Breed;
use sb_core::{AgentId, SbError};

use crate::{palestinian, settler, BehaviorError, BehaviorResult, World};

/// Pluggable per-tick agent behavior.
///
/// The simulation loop calls [`step`][Self::step] once per scheduled agent per
/// tick, in the scheduler's order, with exclusive access to the [`World`].
pub trait BehaviorModel: 'static {
    fn step(&self, world: &mut World, agent: AgentId) -> BehaviorResult<()>;
}

/// The barrier model: settlers and Palestinians act, terrain never does.
///
/// Activating a barrier or rear-guard cell is an invariant violation, as is
/// activating an id the world never issued.
pub struct SeparationBehavior;

impl BehaviorModel for SeparationBehavior {
    fn step(&self, world: &mut World, agent: AgentId) -> BehaviorResult<()> {
        match world.agents.breed_of(agent) {
            Some(Breed::Settler)     => settler::step(world, agent),
            Some(Breed::Palestinian) => palestinian::step(world, agent),
            Some(breed)              => Err(BehaviorError::NotSchedulable { agent, breed }),
            None                     => Err(SbError::AgentNotFound(agent).into()),
        }
    }
}
