//! `sb-core`: foundational types for the separation-barrier simulation.
//!
//! This crate is a dependency of every other `sb-*` crate.  It has no `sb-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                             |
//! | [`cell`]        | `Cell`, wrap-aware Euclidean distance                 |
//! | [`time`]        | `Tick`, `SimClock`, `SimConfig`                       |
//! | [`params`]      | `ModelParams`: every tunable knob of the model       |
//! | [`rng`]         | `SimRng` (the single shared random stream)            |
//! | [`error`]       | `SbError`, `SbResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod cell;
pub mod error;
pub mod ids;
pub mod params;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::Cell;
pub use error::{SbError, SbResult};
pub use ids::AgentId;
pub use params::ModelParams;
pub use rng::SimRng;
pub use time::{SimClock, SimConfig, Tick};
