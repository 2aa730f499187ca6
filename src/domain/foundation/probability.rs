//! Probability value object (0.0-1.0 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{whole_percent, ValidationError};

/// A probability between 0 and 1 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Probability(f64);

impl Probability {
    /// Creates a Probability, returning error if out of range or not finite.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(ValidationError::out_of_range("probability", 0.0, 1.0, value));
        }
        Ok(Self(value))
    }

    /// Returns the raw value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns the value as a whole percent (0-100).
    pub fn as_percent(&self) -> u8 {
        whole_percent(self.0) as u8
    }
}

impl fmt::Display for Probability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percent())
    }
}
