//! Angle literal decoding.
//!
//! Grammar: `sign? digits "°" (digits1-2 "'")? (digits1-2 "\"")?` with the
//! minute/second groups in `[0, 59]` when present. A missing group means the
//! field is zero. Turns are folded out of the integer-degree part beyond
//! ±360, matching the radians→fields canonicalization. Failure never
//! partially populates a result.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use super::{Angle, AngleError, AngleFields};
use crate::bounded::{DegreesField, MinutesField, SecondsField, Turns};

static ANGLE_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(-?[0-9]+)\u{b0}(?:([0-5]?[0-9])')?(?:([0-5]?[0-9])")?$"#)
        .expect("angle literal pattern compiles")
});

impl AngleFields {
    /// Decode an angle literal such as `-45°30'15"`.
    pub fn parse(input: &str) -> Result<Self, AngleError> {
        let invalid = || AngleError::InvalidString {
            input: input.to_string(),
        };
        let caps = ANGLE_LITERAL.captures(input).ok_or_else(invalid)?;

        let whole: i64 = caps[1].parse().map_err(|_| invalid())?;
        let minutes: i64 = match caps.get(2) {
            Some(m) => m.as_str().parse().map_err(|_| invalid())?,
            None => 0,
        };
        let seconds: i64 = match caps.get(3) {
            Some(m) => m.as_str().parse().map_err(|_| invalid())?,
            None => 0,
        };

        let turns = whole.abs() / 360;
        let degrees = whole - whole.signum() * turns * 360;

        Ok(AngleFields {
            turns: Turns::new(turns).map_err(|_| invalid())?,
            degrees: DegreesField::new(degrees).map_err(|_| invalid())?,
            minutes: MinutesField::new(minutes).map_err(|_| invalid())?,
            seconds: SecondsField::new(seconds).map_err(|_| invalid())?,
        })
    }
}

impl FromStr for Angle {
    type Err = AngleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Angle::from_fields(AngleFields::parse(s)?))
    }
}
