//! `sb-agent`: agent breeds and storage for the separation-barrier model.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`breed`]    | `Breed` with capability checks                               |
//! | [`agent`]    | `Agent`, `AgentKind`, `SettlerState`, `PalestinianState`     |
//! | [`store`]    | `AgentStore`: id-indexed storage, monotonic id assignment   |
//! | [`snapshot`] | `AgentSnapshot`: read-only per-agent reporting row          |
//!
//! Barrier and rear-guard agents are terrain: they carry no state, are never
//! scheduled, and are never moved or removed once created.

pub mod agent;
pub mod breed;
pub mod snapshot;
pub mod store;

#[cfg(test)]
mod tests;

pub use agent::{Agent, AgentKind, PalestinianState, SettlerState};
pub use breed::Breed;
pub use snapshot::AgentSnapshot;
pub use store::AgentStore;
