//! Errors produced while deriving parameters or building estimators.
//!
//! Nothing is recovered locally: every error aborts the estimation run and is
//! reported once at the process boundary.

use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, EstimateError>;

/// Estimation error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EstimateError {
    /// A field does not fit any native integer container.
    #[error("unsupported field width: {bits} bits (at most 64 supported)")]
    UnsupportedWidth { bits: u32 },

    /// A human-readable quantity or float could not be parsed.
    #[error("malformed quantity: {0:?}")]
    MalformedQuantity(String),

    /// A structural parameter is outside of its valid domain.
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),

    /// The report could not be rendered.
    #[error("failed to render report: {0}")]
    Render(String),
}
