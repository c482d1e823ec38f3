//! Angles with a canonical radian value and a turns/degrees/minutes/seconds view.
//!
//! Purpose
//! - Keep radians as the single source of truth; the four-field view is
//!   recomputed from radians on demand, and setting any field recomputes
//!   radians.
//! - Equality, ordering and arithmetic all operate on radians.
//!
//! Conventions
//! - `turns >= 0` counts whole revolutions; the degree remainder lives in
//!   `[-359, 359]`; minutes/seconds in `[0, 59]`.
//! - Minutes and seconds always contribute positively, so e.g. -45°30' means
//!   -44.5 decimal degrees. Folding and unfolding use the same convention and
//!   round-trip within integer field precision.

mod parse;


use std::f64::consts::PI;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use thiserror::Error;

use crate::bounded::{DegreesField, MinutesField, RangeError, SecondsField, Turns};

/// Angle literal failed the grammar (see [`AngleFields::parse`]).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AngleError {
    #[error("invalid angle literal: {input:?}")]
    InvalidString { input: String },
}

/// Output unit for [`Angle::format`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AngleUnit {
    Radians,
    Degrees,
}

/// The turns/degrees/minutes/seconds view of an [`Angle`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AngleFields {
    pub turns: Turns,
    pub degrees: DegreesField,
    pub minutes: MinutesField,
    pub seconds: SecondsField,
}

/// Angle stored canonically in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Angle {
    radians: f64,
}

impl Angle {
    pub const ANGLE_45: Angle = Angle {
        radians: std::f64::consts::FRAC_PI_4,
    };
    pub const ANGLE_90: Angle = Angle {
        radians: std::f64::consts::FRAC_PI_2,
    };
    pub const ANGLE_180: Angle = Angle { radians: PI };
    /// One full turn.
    pub const ANGLE_360: Angle = Angle {
        radians: std::f64::consts::TAU,
    };

    #[inline]
    pub const fn from_radians(radians: f64) -> Self {
        Self { radians }
    }

    pub fn new(
        turns: Turns,
        degrees: DegreesField,
        minutes: MinutesField,
        seconds: SecondsField,
    ) -> Self {
        Self {
            radians: radians_from_raw(turns.get(), degrees.get(), minutes.get(), seconds.get()),
        }
    }

    pub fn from_fields(fields: AngleFields) -> Self {
        Self::new(fields.turns, fields.degrees, fields.minutes, fields.seconds)
    }

    /// Validating shorthand for [`Angle::new`] with raw integer fields.
    pub fn from_dms(turns: i64, degrees: i64, minutes: i64, seconds: i64) -> Result<Self, RangeError> {
        Ok(Self::new(
            Turns::new(turns)?,
            DegreesField::new(degrees)?,
            MinutesField::new(minutes)?,
            SecondsField::new(seconds)?,
        ))
    }

    #[inline]
    pub const fn radians(&self) -> f64 {
        self.radians
    }

    /// The four-field view, recomputed from radians.
    ///
    /// Fails only when the radian value is too large for the turns field.
    pub fn fields(&self) -> Result<AngleFields, RangeError> {
        let (turns, degrees, minutes, seconds) = self.raw_fields();
        Ok(AngleFields {
            turns: Turns::new(turns)?,
            degrees: DegreesField::new(degrees)?,
            minutes: MinutesField::new(minutes)?,
            seconds: SecondsField::new(seconds)?,
        })
    }

    /// Fold radians into `(turns, degrees, minutes, seconds)`.
    ///
    /// Works in arc-seconds and snaps near-integral values before flooring:
    /// the degree conversion of an exactly-built 405° lands at 404.999…,
    /// which a bare floor would report as 404°59'59".
    fn raw_fields(&self) -> (i64, i64, i64, i64) {
        let mut total_seconds = 180.0 * self.radians / PI * 3600.0;
        let snapped = total_seconds.round();
        if (total_seconds - snapped).abs() < 1e-4 {
            total_seconds = snapped;
        }
        let turns = (total_seconds.abs() / (360.0 * 3600.0)).floor() as i64;
        if total_seconds < 0.0 {
            total_seconds += (turns * 360 * 3600) as f64;
        } else {
            total_seconds -= (turns * 360 * 3600) as f64;
        }
        let degrees = (total_seconds / 3600.0).floor() as i64;
        let remainder = (total_seconds - (degrees * 3600) as f64).abs();
        let minutes = (remainder / 60.0).floor() as i64;
        let seconds = (remainder - (minutes * 60) as f64).floor() as i64;
        (turns, degrees, minutes, seconds)
    }

    pub fn set_turns(&mut self, value: Turns) {
        let (turns, degrees, minutes, seconds) = self.raw_fields();
        if turns == value.get() {
            return;
        }
        self.radians = radians_from_raw(value.get(), degrees, minutes, seconds);
    }

    pub fn set_degrees(&mut self, value: DegreesField) {
        let (turns, degrees, minutes, seconds) = self.raw_fields();
        if degrees == value.get() {
            return;
        }
        self.radians = radians_from_raw(turns, value.get(), minutes, seconds);
    }

    pub fn set_minutes(&mut self, value: MinutesField) {
        let (turns, degrees, minutes, seconds) = self.raw_fields();
        if minutes == value.get() {
            return;
        }
        self.radians = radians_from_raw(turns, degrees, value.get(), seconds);
    }

    pub fn set_seconds(&mut self, value: SecondsField) {
        let (turns, degrees, minutes, seconds) = self.raw_fields();
        if seconds == value.get() {
            return;
        }
        self.radians = radians_from_raw(turns, degrees, minutes, value.get());
    }

    /// Render as `D°M'S"` (turns folded into the degree figure) or as the raw
    /// radian decimal.
    pub fn format(&self, unit: AngleUnit) -> String {
        match unit {
            AngleUnit::Degrees => {
                let (turns, degrees, minutes, seconds) = self.raw_fields();
                let total = degrees + if degrees >= 0 { turns * 360 } else { -turns * 360 };
                format!("{total}\u{b0}{minutes}'{seconds}\"")
            }
            AngleUnit::Radians => format!("{}", self.radians),
        }
    }
}

/// Unfold `(turns, degrees, minutes, seconds)` into radians.
#[inline]
fn radians_from_raw(turns: i64, degrees: i64, minutes: i64, seconds: i64) -> f64 {
    let decimal = degrees as f64 + minutes as f64 / 60.0 + seconds as f64 / 3600.0;
    PI * decimal / 180.0 + turns as f64 * 2.0 * PI
}

impl Add for Angle {
    type Output = Angle;
    #[inline]
    fn add(self, rhs: Angle) -> Angle {
        Angle::from_radians(self.radians + rhs.radians)
    }
}
impl Add<f64> for Angle {
    type Output = Angle;
    #[inline]
    fn add(self, rhs: f64) -> Angle {
        Angle::from_radians(self.radians + rhs)
    }
}
impl Add<Angle> for f64 {
    type Output = Angle;
    #[inline]
    fn add(self, rhs: Angle) -> Angle {
        Angle::from_radians(self + rhs.radians)
    }
}
impl AddAssign for Angle {
    #[inline]
    fn add_assign(&mut self, rhs: Angle) {
        self.radians += rhs.radians;
    }
}
impl AddAssign<f64> for Angle {
    #[inline]
    fn add_assign(&mut self, rhs: f64) {
        self.radians += rhs;
    }
}

impl Sub for Angle {
    type Output = Angle;
    #[inline]
    fn sub(self, rhs: Angle) -> Angle {
        Angle::from_radians(self.radians - rhs.radians)
    }
}
impl Sub<f64> for Angle {
    type Output = Angle;
    #[inline]
    fn sub(self, rhs: f64) -> Angle {
        Angle::from_radians(self.radians - rhs)
    }
}
impl Sub<Angle> for f64 {
    type Output = Angle;
    #[inline]
    fn sub(self, rhs: Angle) -> Angle {
        Angle::from_radians(self - rhs.radians)
    }
}
impl SubAssign for Angle {
    #[inline]
    fn sub_assign(&mut self, rhs: Angle) {
        self.radians -= rhs.radians;
    }
}
impl SubAssign<f64> for Angle {
    #[inline]
    fn sub_assign(&mut self, rhs: f64) {
        self.radians -= rhs;
    }
}

impl Neg for Angle {
    type Output = Angle;
    #[inline]
    fn neg(self) -> Angle {
        Angle::from_radians(-self.radians)
    }
}

impl From<Angle> for f64 {
    #[inline]
    fn from(value: Angle) -> f64 {
        value.radians
    }
}
