//! # pidloop
//!
//! Discrete-time PID controller for fixed-step control loops.
//!
//! ## Update Step
//!
//! ```text
//! integral = clamp(integral + e × step, windup_limits)
//! u        = clamp(P·e + I·integral + D·(e − e_prev) / step, output_limits)
//! u        = prev_u ± min(|u − prev_u|, max_diff)
//! ```
//!
//! Where:
//! - e: Error sample for this step
//! - step: Fixed sampling interval
//! - max_diff: Optional slew limit between consecutive outputs
//!
//! ## Example
//!
//! ```
//! use pidloop::Controller;
//!
//! let mut pid = Controller::new(1.0, 0.0, 0.0, 1.0).with_output_limits((-10.0, 10.0));
//! assert_eq!(pid.call(3.0), 3.0);
//! assert_eq!(pid.call(20.0), 10.0);
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod limits;

// Re-export commonly used types at crate root
pub use config::ControllerConfig;
pub use controller::{Controller, PidTerms};
pub use error::{PidError, Result};
pub use limits::{clamp, Limits};

/// pidloop version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default proportional gain for [`ControllerConfig::default`]
pub const DEFAULT_P: f64 = 1.0;

/// Default step for [`ControllerConfig::default`]
pub const DEFAULT_STEP: f64 = 1.0;
