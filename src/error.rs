//! Error types for scenario construction and dispatch
//!
//! Kernels never fail: non-positive elapsed time is a defined physical case
//! (zero field) and denominators are floored where it is physically justified.
//! What remains fallible is the glue around them: an unsupported combination
//! of dimensionality, geometry and release, a query grid whose coordinate
//! components disagree in shape, or a configuration that cannot be parsed.

use thiserror::Error;

/// Errors raised while building or dispatching a transport scenario.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransportError {
    /// No evaluator exists for this (dimensionality, geometry, release) triple.
    #[error("Unsupported scenario: {dimensionality} with {geometry} source and {release} release")]
    UnsupportedScenario {
        dimensionality: String,
        geometry: String,
        release: String,
    },

    /// Query coordinate components (or paired arrays) do not share a shape.
    #[error("Shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    /// A configured parameter is outside its physical domain.
    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: String, reason: String },

    /// An evaluated field contains NaN or Inf.
    #[error("Non-finite concentration in {scenario} at t = {time}: {detail}")]
    NonFinite {
        scenario: String,
        time: f64,
        detail: String,
    },

    /// The configuration could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl TransportError {
    /// Create an invalid parameter error.
    pub fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for TransportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}
