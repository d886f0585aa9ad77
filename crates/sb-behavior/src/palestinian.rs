//! Palestinian behavior and its probability model.
//!
//! # Probability model
//!
//! ```text
//! freedom   = 1 - restrictive_neighbors / neighborhood_size
//! blockage  = barrier_neighbors / neighborhood_size
//! pressure  = (1 - freedom) · c + anger · k₂
//! P(violence) = (1 - exp(-k₁ · pressure)) · (1 - blockage)
//! P(suicide)  = P(violence) · suicide_rate
//! ```
//!
//! Restrictive neighbors are settlers, rear-guard cells and barriers.  An
//! empty neighborhood (only possible on a degenerate grid) reads as
//! `freedom = 1, blockage = 0`.

use sb_agent::Breed;
use sb_core::{AgentId, Cell, ModelParams};
use tracing::debug;

use crate::{receive_violence, BehaviorError, BehaviorResult, World};

/// Freedom and blockage measured around one cell.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LocalPressure {
    pub freedom:  f64,
    pub blockage: f64,
}

/// Measure freedom and blockage in the Moore neighborhood of `pos`.
pub fn local_pressure(world: &World, pos: Cell, vision: u32) -> LocalPressure {
    let cells = world.neighborhood(pos, vision);
    if cells.is_empty() {
        return LocalPressure { freedom: 1.0, blockage: 0.0 };
    }

    let (mut restrictive, mut barriers) = (0usize, 0usize);
    for breed in cells.iter().filter_map(|&c| world.breed_at(c)) {
        if breed.restricts_freedom() {
            restrictive += 1;
        }
        if breed == Breed::Barrier {
            barriers += 1;
        }
    }
    let size = cells.len() as f64;
    LocalPressure {
        freedom:  1.0 - restrictive as f64 / size,
        blockage: barriers as f64 / size,
    }
}

/// `P(violence)` for the given local state.  Always in `[0, 1)` for finite,
/// non-negative parameters.
pub fn violence_probability(pressure: LocalPressure, anger: f64, params: &ModelParams) -> f64 {
    let load = (1.0 - pressure.freedom) * params.occupation_weight + anger * params.anger_weight;
    (1.0 - (-params.violence_scale * load).exp()) * (1.0 - pressure.blockage)
}

/// One Palestinian activation.
///
/// 1. Clear `violent`, `victim` and `suicide`; decay anger by `anger_decay`.
/// 2. Recompute freedom and blockage from the current neighborhood.
/// 3. Draw once (`r`).
///    - `r < P(suicide)`: flag `suicide`, reset anger, count
///      `suicide_penalty` units of violence.  Nothing else happens.
///    - `r < P(violence)` with a settler in sight: pick one uniformly (one
///      draw), flag `violent`, reset anger, count one unit of violence and
///      run the settler's reception handler (which may build a barrier).
pub fn step(world: &mut World, agent: AgentId) -> BehaviorResult<()> {
    let decay = world.params.anger_decay;
    let (vision, breed) = {
        let me = world.agent_mut(agent)?;
        me.reset_transient();
        if let Some(p) = me.as_palestinian_mut() {
            p.decay_anger(decay);
        }
        (me.vision, me.breed())
    };
    if breed != Breed::Palestinian {
        return Err(BehaviorError::NotSchedulable { agent, breed });
    }
    let pos = world.position(agent)?;

    let pressure = local_pressure(world, pos, vision);
    let anger = {
        let me = world.agent_mut(agent)?;
        let p = me.as_palestinian_mut().ok_or(BehaviorError::NotSchedulable { agent, breed })?;
        p.freedom = pressure.freedom;
        p.blockage = pressure.blockage;
        p.anger
    };

    let p_violence = violence_probability(pressure, anger, &world.params);
    let p_suicide = p_violence * world.params.suicide_rate;
    let r = world.rng.uniform();

    if r < p_suicide {
        if let Some(p) = world.agent_mut(agent)?.as_palestinian_mut() {
            p.suicide = true;
            p.anger = 0.0;
        }
        world.violence.record(world.params.suicide_penalty);
        debug!(%agent, %pos, "suicide attack");
        return Ok(());
    }

    if r < p_violence {
        let cells = world.neighborhood(pos, vision);
        let settlers = world.occupants_of_breed(&cells, Breed::Settler);
        if let Some(&victim) = world.rng.choose(&settlers) {
            if let Some(p) = world.agent_mut(agent)?.as_palestinian_mut() {
                p.violent = true;
                p.anger = 0.0;
            }
            world.violence.record(1);
            receive_violence(world, victim, agent)?;
        }
    }
    Ok(())
}
