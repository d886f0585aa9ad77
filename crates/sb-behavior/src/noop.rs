//! A no-op behavior model: agents never act.

use sb_core::AgentId;

use crate::{BehaviorModel, BehaviorResult, World};

/// A [`BehaviorModel`] that leaves the world untouched.
///
/// Useful in tests that exercise the tick loop without any agent decisions.
pub struct NoopBehavior;

impl BehaviorModel for NoopBehavior {
    fn step(&self, _world: &mut World, _agent: AgentId) -> BehaviorResult<()> {
        Ok(())
    }
}
