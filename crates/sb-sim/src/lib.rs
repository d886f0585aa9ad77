//! `sb-sim`: tick loop orchestrator for the separation-barrier model.
//!
//! # Tick loop
//!
//! ```text
//! while sim.running():
//!   ① Reset       clear every agent's violent / victim / suicide flags and
//!                 zero the per-tick violence counter.
//!   ② Activate    shuffle the registered agents with the shared RNG and run
//!                 BehaviorModel::step for each, once, in that order.
//!   ③ Register    settlers spawned during ② join the schedule; they first
//!                 act next tick.
//!   ④ Account     fold this tick's violence into the cumulative total and
//!                 notify the observer (model row, optional snapshot).
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use sb_behavior::SeparationBehavior;
//! use sb_core::{ModelParams, SimConfig};
//! use sb_sim::{DataCollector, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default(), ModelParams::default(), SeparationBehavior)
//!     .build()?;
//! let mut collector = DataCollector::new();
//! sim.run(&mut collector)?;
//! ```

pub mod builder;
pub mod collector;
pub mod error;
pub mod observer;
pub mod populate;
pub mod sim;


pub use builder::SimBuilder;
pub use collector::{AgentRow, DataCollector, ModelRow};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use populate::populate;
pub use sim::Sim;
