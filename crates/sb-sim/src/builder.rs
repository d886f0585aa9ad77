//! Fluent builder for constructing a [`Sim`].

use sb_behavior::{BehaviorModel, World};
use sb_core::{ModelParams, SimConfig, SimRng};
use sb_schedule::RandomActivation;

use crate::{populate, Sim, SimError, SimResult};

/// Fluent builder for [`Sim<B>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: seed, tick limit, snapshot interval
/// - [`ModelParams`]: grid size, densities, rates
/// - `B: BehaviorModel`: usually [`sb_behavior::SeparationBehavior`]
///
/// # Optional inputs
///
/// | Method      | Default                                              |
/// |-------------|------------------------------------------------------|
/// | `.world(w)` | Empty grid seeded by [`populate`] with `config.seed` |
///
/// Every agent with a behavior present at build time is registered with the
/// scheduler in ascending id order.
pub struct SimBuilder<B: BehaviorModel> {
    config:   SimConfig,
    params:   ModelParams,
    world:    Option<World>,
    behavior: B,
}

impl<B: BehaviorModel> SimBuilder<B> {
    pub fn new(config: SimConfig, params: ModelParams, behavior: B) -> Self {
        Self { config, params, world: None, behavior }
    }

    /// Start from a hand-built world instead of density seeding.
    ///
    /// The world's own parameters and RNG are used; the builder's
    /// `ModelParams` and `config.seed` are ignored.
    pub fn world(mut self, world: World) -> Self {
        self.world = Some(world);
        self
    }

    /// Validate parameters, seed the grid if needed, register agents and
    /// return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<B>> {
        let world = match self.world {
            Some(world) => {
                validate(&world.params)?;
                world
            }
            None => {
                validate(&self.params)?;
                let mut world = World::new(self.params, SimRng::new(self.config.seed));
                populate(&mut world)?;
                world
            }
        };

        let mut scheduler = RandomActivation::new();
        for agent in world.agents.iter().filter(|a| a.breed().has_behavior()) {
            scheduler.register(agent.id);
        }

        Ok(Sim {
            clock:    self.config.make_clock(),
            config:   self.config,
            world,
            scheduler,
            behavior: self.behavior,
        })
    }
}

fn validate(params: &ModelParams) -> SimResult<()> {
    params.validate().map_err(|e| SimError::Config(e.to_string()))
}
