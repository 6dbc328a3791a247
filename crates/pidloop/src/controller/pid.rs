//! Fixed-step PID controller with windup, output and slew limiting

use crate::config::ControllerConfig;
use crate::error::Result;
use crate::limits::{clamp, Limits};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Proportional, integral and derivative contributions from the last call
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PidTerms {
    pub proportional: f64,
    pub integral: f64,
    pub derivative: f64,
}

impl PidTerms {
    /// Unclamped controller output
    pub fn sum(&self) -> f64 {
        self.proportional + self.integral + self.derivative
    }
}

impl From<PidTerms> for (f64, f64, f64) {
    fn from(t: PidTerms) -> Self {
        (t.proportional, t.integral, t.derivative)
    }
}

/// Discrete-time PID controller
///
/// Must be called once per `step`. Memory (`integral`, `prev_error`,
/// `prev_output`) persists across calls; the step itself is never
/// validated here, see [`ControllerConfig::validate`].
#[derive(Debug, Clone)]
pub struct Controller {
    // Gains
    p: f64,
    i: f64,
    d: f64,

    // Step and limits
    step: f64,
    output_limits: Limits,
    max_diff: Option<f64>,
    windup_limits: Limits,

    // Memory
    integral: f64,
    prev_error: f64,
    prev_output: f64,

    terms: PidTerms,
}

impl Controller {
    /// Unbounded controller with the given gains and step
    pub fn new(p: f64, i: f64, d: f64, step: f64) -> Self {
        Self::from_config(ControllerConfig::new(p, i, d, step))
    }

    /// Build from a config without validating it
    pub fn from_config(config: ControllerConfig) -> Self {
        Self {
            p: config.p,
            i: config.i,
            d: config.d,
            step: config.step,
            output_limits: config.output_limits,
            max_diff: config.max_diff,
            windup_limits: config.windup_limits,
            integral: 0.0,
            prev_error: 0.0,
            prev_output: 0.0,
            terms: PidTerms::default(),
        }
    }

    /// Build from a config, rejecting it if [`ControllerConfig::validate`]
    /// fails
    pub fn try_from_config(config: ControllerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    pub fn with_output_limits(mut self, limits: impl Into<Limits>) -> Self {
        self.output_limits = limits.into();
        self
    }

    pub fn with_max_diff(mut self, max_diff: f64) -> Self {
        self.max_diff = Some(max_diff);
        self
    }

    pub fn with_windup_limits(mut self, limits: impl Into<Limits>) -> Self {
        self.windup_limits = limits.into();
        self
    }

    /// Run one control step and return the actuating signal
    pub fn call(&mut self, error: f64) -> f64 {
        let proportional = self.p * error;

        // Anti-windup acts on the accumulator, so a sign change in error
        // starts unwinding immediately
        self.integral = clamp(self.integral + error * self.step, self.windup_limits);
        let integral = self.i * self.integral;

        let derivative = self.d * (error - self.prev_error) / self.step;
        self.prev_error = error;

        self.terms = PidTerms {
            proportional,
            integral,
            derivative,
        };

        let raw = self.terms.sum();
        let mut output = clamp(raw, self.output_limits);
        if output != raw {
            debug!(raw, output, "Output clamped");
        }

        if let Some(max_diff) = self.max_diff {
            let diff = output - self.prev_output;
            if diff > max_diff {
                output = self.prev_output + max_diff;
            } else if diff < -max_diff {
                output = self.prev_output - max_diff;
            }
            if diff.abs() > max_diff {
                debug!(
                    prev_output = self.prev_output,
                    requested = self.prev_output + diff,
                    output,
                    "Output slew limited"
                );
            }
        }

        self.prev_output = output;

        trace!(
            error,
            p = proportional,
            i = integral,
            d = derivative,
            integral_acc = self.integral,
            output,
            "PID step"
        );

        output
    }

    /// Reset integral and derivative memory
    ///
    /// The last output and the term snapshot are kept so slew limiting
    /// continues from where the actuator actually is.
    pub fn clear(&mut self) {
        debug!(
            integral = self.integral,
            prev_error = self.prev_error,
            "Clearing PID memory"
        );
        self.integral = 0.0;
        self.prev_error = 0.0;
    }

    pub fn set_p(&mut self, p: f64) {
        debug!(old = self.p, new = p, "Set proportional gain");
        self.p = p;
    }

    pub fn set_i(&mut self, i: f64) {
        debug!(old = self.i, new = i, "Set integral gain");
        self.i = i;
    }

    pub fn set_d(&mut self, d: f64) {
        debug!(old = self.d, new = d, "Set derivative gain");
        self.d = d;
    }

    /// Change the step; the caller's loop must change cadence to match
    pub fn set_step(&mut self, step: f64) {
        debug!(old = self.step, new = step, "Set step");
        self.step = step;
    }

    pub fn set_output_limits(&mut self, limits: impl Into<Limits>) {
        self.output_limits = limits.into();
    }

    /// New windup limits apply from the next call; the current integral is
    /// not re-clamped until then.
    pub fn set_windup_limits(&mut self, limits: impl Into<Limits>) {
        self.windup_limits = limits.into();
    }

    pub fn set_max_diff(&mut self, max_diff: Option<f64>) {
        self.max_diff = max_diff;
    }

    /// `(proportional, integral, derivative)` from the last call
    pub fn current_terms(&self) -> (f64, f64, f64) {
        self.terms.into()
    }

    pub fn terms(&self) -> PidTerms {
        self.terms
    }

    pub fn p(&self) -> f64 {
        self.p
    }

    pub fn i(&self) -> f64 {
        self.i
    }

    pub fn d(&self) -> f64 {
        self.d
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn output_limits(&self) -> Limits {
        self.output_limits
    }

    pub fn windup_limits(&self) -> Limits {
        self.windup_limits
    }

    pub fn max_diff(&self) -> Option<f64> {
        self.max_diff
    }

    /// Accumulated `error * step`, after windup clamping
    pub fn integral(&self) -> f64 {
        self.integral
    }

    pub fn prev_error(&self) -> f64 {
        self.prev_error
    }

    pub fn prev_output(&self) -> f64 {
        self.prev_output
    }

    /// Snapshot of the current configuration
    pub fn config(&self) -> ControllerConfig {
        ControllerConfig {
            p: self.p,
            i: self.i,
            d: self.d,
            step: self.step,
            output_limits: self.output_limits,
            max_diff: self.max_diff,
            windup_limits: self.windup_limits,
        }
    }
}

impl std::fmt::Display for Controller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "PID(P={}, I={}, D={}, step={}, integral={:.4}, output={:.4})",
            self.p, self.i, self.d, self.step, self.integral, self.prev_output
        )
    }
}
