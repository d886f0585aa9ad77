//! Base error type.
//!
//! Sub-crates define their own error enums and wrap `SbError` as one variant.

use thiserror::Error;

use crate::AgentId;

/// The top-level error type for `sb-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum SbError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("agent id space exhausted after {0} agents")]
    IdSpaceExhausted(usize),
}

/// Shorthand result type for all `sb-*` crates.
pub type SbResult<T> = Result<T, SbError>;
