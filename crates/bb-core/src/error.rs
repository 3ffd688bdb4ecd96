//! Error types for the density engine.
//!
//! Only parameter-domain violations surface to callers; numerical edge cases
//! (degenerate terms, underflow) are absorbed inside `bb-math` and never
//! appear here.

use thiserror::Error;

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A parameter lies outside the distribution's domain.
    #[error("domain error: {param} must be {requirement}, got {value}")]
    Domain {
        param: &'static str,
        requirement: &'static str,
        value: f64,
    },

    /// Payload could not be encoded for output.
    #[error("output encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

impl Error {
    /// True for parameter-domain violations (the caller kept its last-valid
    /// state and should fix its inputs).
    pub fn is_domain(&self) -> bool {
        matches!(self, Error::Domain { .. })
    }
}
