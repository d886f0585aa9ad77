//! `sb-grid`: the spatial index of the separation-barrier model.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                        |
//! |-----------|-----------------------------------------------------------------|
//! | [`grid`]  | `Grid` (single occupancy, torus or bounded), `Connectivity`     |
//! | [`rank`]  | Stable distance ranking of candidate cells                      |
//! | [`error`] | `GridError`, `GridResult<T>`                                    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |
//! | `fx-hash` | FxHash instead of SipHash for the position index.          |

pub mod error;
pub mod grid;
pub mod rank;

#[cfg(test)]
mod tests;

pub use error::{GridError, GridResult};
pub use grid::{Connectivity, Grid};
pub use rank::{furthest_first, nearest_first};
