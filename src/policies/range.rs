use serde::{Deserialize, Serialize};

use crate::error::{Result, WrapperError};
use crate::field::{Correction, Policy};
use crate::numeric::{clamp, Numeric};

/// Keeps an integer score inside `0..=100`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Percent;

impl Percent {
    pub const MIN: i32 = 0;
    pub const MAX: i32 = 100;
}

impl Policy<i32> for Percent {
    fn correct(&self, value: i32) -> i32 {
        clamp(value, Self::MIN, Self::MAX)
    }
}

/// Keeps any number inside `[min, max]`.
///
/// Out-of-range input is saturated to the nearest bound, never rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBounds<T>", bound(deserialize = "T: Numeric + Deserialize<'de>"))]
pub struct Clamped<T> {
    min: T,
    max: T,
    correction: Correction,
}

#[derive(Deserialize)]
struct RawBounds<T> {
    min: T,
    max: T,
    #[serde(default)]
    correction: Correction,
}

impl<T: Numeric> TryFrom<RawBounds<T>> for Clamped<T> {
    type Error = WrapperError;

    fn try_from(raw: RawBounds<T>) -> Result<Self> {
        Ok(Clamped::new(raw.min, raw.max)?.with_correction(raw.correction))
    }
}

impl<T: Numeric> Clamped<T> {
    /// Fails when `min > max` or either bound is unordered (NaN).
    pub fn new(min: T, max: T) -> Result<Self> {
        match min.partial_cmp(&max) {
            Some(std::cmp::Ordering::Greater) | None => {
                Err(WrapperError::inverted_bounds(min, max))
            }
            _ => Ok(Clamped::ordered(min, max)),
        }
    }

    /// For bounds already known to be ordered.
    pub(crate) fn ordered(min: T, max: T) -> Self {
        debug_assert!(min <= max, "bounds must be ordered");
        Clamped {
            min,
            max,
            correction: Correction::OnWrite,
        }
    }

    /// Clamp lazily on read instead of on write.
    pub fn with_correction(mut self, correction: Correction) -> Self {
        self.correction = correction;
        self
    }

    pub fn min(&self) -> T {
        self.min
    }

    pub fn max(&self) -> T {
        self.max
    }
}

impl<T: Numeric> Policy<T> for Clamped<T> {
    fn correction(&self) -> Correction {
        self.correction
    }

    fn correct(&self, value: T) -> T {
        clamp(value, self.min, self.max)
    }
}
