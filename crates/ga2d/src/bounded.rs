//! Bounded integer scalar with compile-time limits.
//!
//! Purpose
//! - Confine a value to a closed interval `[MIN, MAX]` so illegal values
//!   cannot be constructed downstream (angle sub-fields, quadrant selectors).
//! - Assignment outside the interval is a typed failure, never a truncation.

use thiserror::Error;

/// Assignment outside the interval of a [`Bounded`] scalar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("value {value} outside [{min}, {max}]")]
pub struct RangeError {
    pub value: i64,
    pub min: i64,
    pub max: i64,
}

/// Integer confined to `[MIN, MAX]`.
///
/// Invariants:
/// - `MIN <= value <= MAX` always holds after `new`/`set`.
/// - `Default` is 0; callers that default-construct assume `MIN <= 0 <= MAX`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Bounded<const MIN: i64, const MAX: i64>(i64);

impl<const MIN: i64, const MAX: i64> Bounded<MIN, MAX> {
    pub const MIN: i64 = MIN;
    pub const MAX: i64 = MAX;

    pub fn new(value: i64) -> Result<Self, RangeError> {
        if value < MIN || value > MAX {
            return Err(RangeError {
                value,
                min: MIN,
                max: MAX,
            });
        }
        Ok(Self(value))
    }

    /// Construct without validating; `value` must already be in `[MIN, MAX]`.
    pub(crate) const fn new_unchecked(value: i64) -> Self {
        debug_assert!(MIN <= value && value <= MAX);
        Self(value)
    }

    pub fn set(&mut self, value: i64) -> Result<(), RangeError> {
        *self = Self::new(value)?;
        Ok(())
    }

    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl<const MIN: i64, const MAX: i64> From<Bounded<MIN, MAX>> for i64 {
    #[inline]
    fn from(value: Bounded<MIN, MAX>) -> i64 {
        value.0
    }
}

impl<const MIN: i64, const MAX: i64> PartialEq<i64> for Bounded<MIN, MAX> {
    #[inline]
    fn eq(&self, other: &i64) -> bool {
        self.0 == *other
    }
}

/// Whole revolutions of an angle.
pub type Turns = Bounded<0, { i16::MAX as i64 }>;
/// Degree remainder of an angle after turns are folded out.
pub type DegreesField = Bounded<-359, 359>;
/// Minute sub-field of an angle.
pub type MinutesField = Bounded<0, 59>;
/// Second sub-field of an angle.
pub type SecondsField = Bounded<0, 59>;
