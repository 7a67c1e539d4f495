use std::fmt::Debug;
use std::ops::{Add, Mul, Sub};

/// Any ordered number: integers and floats alike.
///
/// Implemented automatically for every type with the required operators.
pub trait Numeric:
    Copy + PartialOrd + Debug + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self>
{
}

impl<T> Numeric for T where
    T: Copy + PartialOrd + Debug + Add<Output = T> + Sub<Output = T> + Mul<Output = T>
{
}

/// Saturate `value` into `[min, max]`. Callers guarantee `min <= max`.
///
/// Values that don't compare at all (float NaN) land on `min`.
pub fn clamp<T: Numeric>(value: T, min: T, max: T) -> T {
    match (value.partial_cmp(&min), value.partial_cmp(&max)) {
        (None, _) | (_, None) => min,
        _ if value < min => min,
        _ if value > max => max,
        _ => value,
    }
}
