use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::MAX_CONFIDENCE;

/// Confidence expressed as an integer percentage clamped to [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Confidence(u8);

impl Confidence {
    pub const ZERO: Confidence = Confidence(0);
    pub const MAX: Confidence = Confidence(MAX_CONFIDENCE);

    /// Create a new Confidence, clamping to [0, 100].
    pub fn new(value: u8) -> Self {
        Self(value.min(MAX_CONFIDENCE))
    }

    /// Round a real-valued percentage to the nearest integer, clamped to [0, 100].
    /// Non-finite input collapses to zero.
    pub fn from_f64(value: f64) -> Self {
        if !value.is_finite() {
            return Self::ZERO;
        }
        Self(value.round().clamp(0.0, MAX_CONFIDENCE as f64) as u8)
    }

    /// Get the raw percentage.
    pub fn value(self) -> u8 {
        self.0
    }

    /// The percentage as f64, for weighted blending.
    pub fn as_f64(self) -> f64 {
        self.0 as f64
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl From<u8> for Confidence {
    fn from(value: u8) -> Self {
        Self::new(value)
    }
}

impl From<Confidence> for u8 {
    fn from(c: Confidence) -> Self {
        c.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_above_hundred() {
        assert_eq!(Confidence::new(250).value(), 100);
    }

    #[test]
    fn from_f64_rounds_half_away_from_zero() {
        assert_eq!(Confidence::from_f64(53.5).value(), 54);
        assert_eq!(Confidence::from_f64(53.49).value(), 53);
    }

    #[test]
    fn from_f64_handles_out_of_range_and_nan() {
        assert_eq!(Confidence::from_f64(-4.0).value(), 0);
        assert_eq!(Confidence::from_f64(180.0).value(), 100);
        assert_eq!(Confidence::from_f64(f64::NAN).value(), 0);
    }
}
