//! `sb-behavior`: the interaction and barrier-construction engine.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                     |
//! |-----------------|--------------------------------------------------------------|
//! | [`context`]     | `World`: grid, agents, RNG, parameters and violence tally   |
//! | [`tally`]       | `ViolenceTally`: per-tick and cumulative counters           |
//! | [`settler`]     | Settler per-tick behavior (violence, growth)                 |
//! | [`palestinian`] | Palestinian per-tick behavior and the probability model      |
//! | [`response`]    | Violence reception handlers                                  |
//! | [`barrier`]     | `place_barrier`, `BarrierOutcome`                            |
//! | [`relocate`]    | `relocate`: nearest empty cell with a global fallback       |
//! | [`model`]       | `BehaviorModel` trait, `SeparationBehavior` breed dispatch   |
//! | [`noop`]        | `NoopBehavior`: agents never act                            |
//! | [`error`]       | `BehaviorError`, `BehaviorResult<T>`                         |
//!
//! # Execution model
//!
//! Everything runs on one thread, one agent at a time.  Each behavior gets
//! `&mut World` and may mutate the grid and other agents directly: a settler
//! attacked by a Palestinian triggers barrier construction synchronously,
//! inside the attacker's own step.  Reception handlers are the only place
//! where one agent's behavior writes another agent's state.  There is no
//! double-buffering, so agents activated later in a tick see the effects of
//! agents activated earlier.
//!
//! # Random draws
//!
//! All randomness comes from `World::rng`, in the order documented on each
//! behavior function, so a fixed seed fixes the whole trajectory.

pub mod barrier;
pub mod context;
pub mod error;
pub mod model;
pub mod noop;
pub mod palestinian;
pub mod relocate;
pub mod response;
pub mod settler;
pub mod tally;


pub use barrier::{place_barrier, AbortReason, BarrierOutcome};
pub use context::World;
pub use error::{BehaviorError, BehaviorResult};
pub use model::{BehaviorModel, SeparationBehavior};
pub use noop::NoopBehavior;
pub use palestinian::{local_pressure, violence_probability, LocalPressure};
pub use relocate::relocate;
pub use response::receive_violence;
pub use tally::ViolenceTally;
