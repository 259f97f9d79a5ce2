//! Unit-free normalized scores.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Intensity along one dimension, in points from [`NormalizedValue::MIN`]
/// to [`NormalizedValue::MAX`].
///
/// Absence of data is expressed as `Option<NormalizedValue>`, never as 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i16", into = "i16")]
pub struct NormalizedValue(i16);

impl NormalizedValue {
    pub const MIN: i16 = 0;
    pub const MAX: i16 = 10;

    pub fn new(points: i16) -> Result<Self, CoreError> {
        if !(Self::MIN..=Self::MAX).contains(&points) {
            return Err(CoreError::Validation(format!(
                "Normalized value {points} out of range ({}..={})",
                Self::MIN,
                Self::MAX
            )));
        }
        Ok(Self(points))
    }

    /// Scale `consumed` as a share of `total` onto the points range.
    ///
    /// A non-positive total scores 0. Fractions are truncated.
    pub fn calculate(consumed: f64, total: f64) -> Result<Self, CoreError> {
        if !consumed.is_finite() || !total.is_finite() || consumed < 0.0 {
            return Err(CoreError::Validation(format!(
                "Cannot normalize consumption {consumed} of {total}"
            )));
        }
        if total <= 0.0 {
            return Ok(Self(Self::MIN));
        }
        let scaled = consumed * f64::from(Self::MAX) / total;
        if scaled > f64::from(Self::MAX) {
            return Err(CoreError::Validation(format!(
                "Consumption {consumed} exceeds total {total}"
            )));
        }
        Ok(Self(scaled as i16))
    }

    pub fn points(self) -> i16 {
        self.0
    }
}

impl TryFrom<i16> for NormalizedValue {
    type Error = CoreError;

    fn try_from(points: i16) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl From<NormalizedValue> for i16 {
    fn from(value: NormalizedValue) -> Self {
        value.0
    }
}
