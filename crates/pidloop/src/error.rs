//! Error types for pidloop
//!
//! The update step never fails. These errors only come out of the opt-in
//! configuration path (`ControllerConfig::validate`, JSON loading).

use thiserror::Error;

/// Result type alias using PidError
pub type Result<T> = std::result::Result<T, PidError>;

/// Configuration errors
#[derive(Debug, Error)]
pub enum PidError {
    #[error("Invalid step: {0} (must be finite and > 0)")]
    InvalidStep(f64),

    #[error("Non-finite gain {name}: {value}")]
    NonFiniteGain { name: &'static str, value: f64 },

    #[error("Inverted {which} limits: lower {lower} > upper {upper}")]
    InvertedLimits {
        which: &'static str,
        lower: f64,
        upper: f64,
    },

    #[error("Invalid max_diff: {0} (must be >= 0)")]
    NegativeMaxDiff(f64),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for PidError {
    fn from(err: serde_json::Error) -> Self {
        PidError::Config(err.to_string())
    }
}
