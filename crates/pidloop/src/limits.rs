//! Optional lower/upper bounds and the clamp policy shared by output and
//! integral windup limiting.

use serde::{Deserialize, Serialize};

/// A pair of independent, optional bounds
///
/// `None` on a side means unbounded on that side. Pairs with
/// `lower > upper` are accepted; clamping then resolves to the upper bound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Limits {
    /// Lower bound
    #[serde(default)]
    pub lower: Option<f64>,
    /// Upper bound
    #[serde(default)]
    pub upper: Option<f64>,
}

impl Limits {
    /// No bound on either side
    pub const UNBOUNDED: Self = Self {
        lower: None,
        upper: None,
    };

    pub fn new(lower: f64, upper: f64) -> Self {
        Self {
            lower: Some(lower),
            upper: Some(upper),
        }
    }

    pub fn lower_only(lower: f64) -> Self {
        Self {
            lower: Some(lower),
            upper: None,
        }
    }

    pub fn upper_only(upper: f64) -> Self {
        Self {
            lower: None,
            upper: Some(upper),
        }
    }

    /// `[-magnitude, magnitude]`
    pub fn symmetric(magnitude: f64) -> Self {
        Self::new(-magnitude, magnitude)
    }

    pub fn is_unbounded(&self) -> bool {
        self.lower.is_none() && self.upper.is_none()
    }

    /// True when both bounds are set and `lower > upper`
    pub fn is_inverted(&self) -> bool {
        matches!((self.lower, self.upper), (Some(lo), Some(hi)) if lo > hi)
    }

    /// Whether `value` needs no clamping
    pub fn contains(&self, value: f64) -> bool {
        let under_upper = match self.upper {
            Some(hi) => value <= hi,
            None => true,
        };
        let over_lower = match self.lower {
            Some(lo) => value >= lo,
            None => true,
        };
        under_upper && over_lower
    }

    #[inline]
    pub fn clamp(&self, value: f64) -> f64 {
        clamp(value, *self)
    }
}

impl From<(Option<f64>, Option<f64>)> for Limits {
    fn from((lower, upper): (Option<f64>, Option<f64>)) -> Self {
        Self { lower, upper }
    }
}

impl From<(f64, f64)> for Limits {
    fn from((lower, upper): (f64, f64)) -> Self {
        Self::new(lower, upper)
    }
}

/// Clamp `value` into `limits`
///
/// The upper bound is checked first, so it wins when both bounds are
/// violated (only possible for an inverted pair).
#[inline]
pub fn clamp(value: f64, limits: Limits) -> f64 {
    match limits {
        Limits {
            upper: Some(hi), ..
        } if value > hi => hi,
        Limits {
            lower: Some(lo), ..
        } if value < lo => lo,
        _ => value,
    }
}
