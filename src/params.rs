//! Output and clock-model selectors parsed from the two configuration tokens

use std::{collections::HashMap, fmt, str::FromStr};

use lazy_static::lazy_static;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::LogicError;

/// The textual representation to render the computed angle in
#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AngleFormat {
    /// Plain decimal degrees (`"90"`)
    Degrees,
    /// Radians rounded to 5 significant digits (`"1.5708"`)
    Radians,
    /// Sexagesimal degree-minute-second notation (`"102.0'0''"`)
    /// <https://en.wikipedia.org/wiki/Minute_and_second_of_arc>
    DegreesMinutesSeconds,
}

/// The movement model of the hour hand
#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ClockType {
    /// The hour hand jumps between hour marks, independently of the minute hand
    Quartz,
    /// The hour hand creeps continuously between hour marks (0.5 degrees per minute)
    Mechanical,
}

lazy_static! {
    static ref ANGLE_FORMAT_TOKENS: HashMap<&'static str, AngleFormat> = [
        ("deg", AngleFormat::Degrees),
        ("rad", AngleFormat::Radians),
        ("dms", AngleFormat::DegreesMinutesSeconds),
    ]
    .iter()
    .copied()
    .collect();
    static ref CLOCK_TYPE_TOKENS: HashMap<&'static str, ClockType> = [
        ("quar", ClockType::Quartz),
        ("mech", ClockType::Mechanical),
    ]
    .iter()
    .copied()
    .collect();
}

impl FromStr for AngleFormat {
    type Err = LogicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ANGLE_FORMAT_TOKENS
            .get(s)
            .copied()
            .ok_or(LogicError::AngleFormat)
    }
}

impl fmt::Display for AngleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Self::Degrees => "deg",
            Self::Radians => "rad",
            Self::DegreesMinutesSeconds => "dms",
        };

        write!(f, "{token}")
    }
}

impl FromStr for ClockType {
    type Err = LogicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CLOCK_TYPE_TOKENS
            .get(s)
            .copied()
            .ok_or(LogicError::ClockFormat)
    }
}

impl fmt::Display for ClockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Self::Quartz => "quar",
            Self::Mechanical => "mech",
        };

        write!(f, "{token}")
    }
}

/// Both selectors of a single computation.
///
/// Constructed atomically: either both tokens are recognized
/// or the whole construction fails with no partial assignment.
#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Parameters {
    angle_format: AngleFormat,
    clock_type: ClockType,
}

impl Parameters {
    /// Build the selector pair
    pub fn new(angle_format: AngleFormat, clock_type: ClockType) -> Self {
        Self {
            angle_format,
            clock_type,
        }
    }

    /// Look both tokens up in the fixed tables, the angle format first.
    /// A bad angle format token fails the construction
    /// before the clock type token is even inspected.
    ///
    /// # Errors
    /// `LogicError::AngleFormat` or `LogicError::ClockFormat`
    /// naming the unrecognized token.
    pub fn from_tokens(angle_format: &str, clock_type: &str) -> Result<Self, LogicError> {
        let angle_format = angle_format.parse()?;
        let clock_type = clock_type.parse()?;
        Ok(Self::new(angle_format, clock_type))
    }

    /// The selected output representation
    pub fn angle_format(self) -> AngleFormat {
        self.angle_format
    }

    /// The selected hour hand movement model
    pub fn clock_type(self) -> ClockType {
        self.clock_type
    }
}
