//! Error types for the simulation.
//!
//! Only the configuration boundary can fail. Broken internal invariants
//! (wrong sensor counts, mismatched weight vectors) panic instead.

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading or validating parameters.
#[derive(Error, Debug)]
pub enum Error {
    /// Reading the parameter file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The parameter file is not valid JSON for [`Params`](super::params::Params).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The parameters describe a world that cannot be simulated.
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),
}
