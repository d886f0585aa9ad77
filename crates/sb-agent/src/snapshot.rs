//! Plain data row describing one agent at one tick.

use crate::Breed;

/// Read-only per-agent state exposed for reporting and visualization.
///
/// `anger` and `freedom` are only meaningful for Palestinians; other breeds
/// report `0.0` and `1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentSnapshot {
    pub agent_id: u32,
    pub x:        u32,
    pub y:        u32,
    pub breed:    Breed,
    pub violent:  bool,
    pub victim:   bool,
    pub suicide:  bool,
    pub anger:    f64,
    pub freedom:  f64,
}
