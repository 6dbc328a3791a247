//! Controller configuration

use crate::error::{PidError, Result};
use crate::limits::Limits;
use serde::{Deserialize, Serialize};

/// Gains, step and limits for a [`Controller`](crate::Controller)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Proportional gain
    pub p: f64,
    /// Integral gain
    pub i: f64,
    /// Derivative gain
    pub d: f64,
    /// Fixed sampling interval (seconds, or whatever unit the caller's
    /// loop runs in)
    pub step: f64,
    /// Clamp applied to the summed output
    pub output_limits: Limits,
    /// Maximum change in output between consecutive calls
    pub max_diff: Option<f64>,
    /// Clamp applied to the integral accumulator
    pub windup_limits: Limits,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            p: crate::DEFAULT_P,
            i: 0.0,
            d: 0.0,
            step: crate::DEFAULT_STEP,
            output_limits: Limits::UNBOUNDED,
            max_diff: None,
            windup_limits: Limits::UNBOUNDED,
        }
    }
}

impl ControllerConfig {
    pub fn new(p: f64, i: f64, d: f64, step: f64) -> Self {
        Self {
            p,
            i,
            d,
            step,
            ..Default::default()
        }
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

    /// Parse a JSON document; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the configuration for values the controller would accept
    /// silently but that are almost certainly caller mistakes.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("p", self.p), ("i", self.i), ("d", self.d)] {
            if !value.is_finite() {
                return Err(PidError::NonFiniteGain { name, value });
            }
        }

        if !(self.step.is_finite() && self.step > 0.0) {
            return Err(PidError::InvalidStep(self.step));
        }

        for (which, limits) in [
            ("output", self.output_limits),
            ("windup", self.windup_limits),
        ] {
            if let (Some(lower), Some(upper)) = (limits.lower, limits.upper) {
                if lower > upper {
                    return Err(PidError::InvertedLimits {
                        which,
                        lower,
                        upper,
                    });
                }
            }
        }

        match self.max_diff {
            Some(m) if m < 0.0 || m.is_nan() => Err(PidError::NegativeMaxDiff(m)),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let cfg = ControllerConfig::default();
        assert!(cfg.validate().is_ok());
        assert!(cfg.output_limits.is_unbounded());
        assert!(cfg.max_diff.is_none());
    }

    #[test]
    fn test_zero_step_rejected() {
        let cfg = ControllerConfig::new(1.0, 0.0, 0.0, 0.0);
        assert!(matches!(cfg.validate(), Err(PidError::InvalidStep(_))));
    }

    #[test]
    fn test_inverted_limits_rejected() {
        let cfg = ControllerConfig::default().with_windup_limits((3.0, -3.0));
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("windup"));
    }

    #[test]
    fn test_negative_max_diff_rejected() {
        let cfg = ControllerConfig::default().with_max_diff(-0.5);
        assert!(matches!(cfg.validate(), Err(PidError::NegativeMaxDiff(_))));
    }

    #[test]
    fn test_nan_gain_rejected() {
        let cfg = ControllerConfig::new(f64::NAN, 0.0, 0.0, 1.0);
        assert!(matches!(
            cfg.validate(),
            Err(PidError::NonFiniteGain { name: "p", .. })
        ));
    }

    #[test]
    fn test_from_json_partial() {
        let cfg = ControllerConfig::from_json_str(
            r#"{
                "p": 2.0,
                "step": 0.01,
                "output_limits": { "lower": -10.0, "upper": 10.0 },
                "max_diff": 0.5
            }"#,
        )
        .unwrap();

        assert_eq!(cfg.p, 2.0);
        assert_eq!(cfg.i, 0.0);
        assert_eq!(cfg.step, 0.01);
        assert_eq!(cfg.output_limits, Limits::new(-10.0, 10.0));
        assert_eq!(cfg.max_diff, Some(0.5));
        assert!(cfg.windup_limits.is_unbounded());
    }

    #[test]
    fn test_json_roundtrip_preserves_config() {
        let cfg = ControllerConfig::new(1.5, 0.2, 0.05, 0.1)
            .with_output_limits(Limits::lower_only(0.0))
            .with_windup_limits(Limits::symmetric(4.0));
        let json = cfg.to_json_string().unwrap();
        assert_eq!(ControllerConfig::from_json_str(&json).unwrap(), cfg);
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(
            ControllerConfig::from_json_str("{\"p\": \"fast\"}"),
            Err(PidError::Config(_))
        ));
    }
}
