//! `sb-schedule`: per-tick agent activation.
//!
//! [`RandomActivation`] activates every registered agent exactly once per
//! tick in an order re-shuffled from the shared RNG each tick.  Agents
//! registered while a tick is running are not part of that tick's order.

pub mod activation;


pub use activation::RandomActivation;
