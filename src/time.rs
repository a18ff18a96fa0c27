//! The time of day as it appears on a clock face.
//!
//! Parsing and validation are deliberately separate steps: a string like
//! `"13:00 PM"` matches the grammar and parses fine, but fails the
//! [`Time::is_valid`] check. Callers decide which failure they care about.

use std::{fmt, str::FromStr};

use lazy_static::lazy_static;
use regex::Regex;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    consts::HOURS_ON_FACE,
    errors::{FormatError, LogicError},
};

/// The 12-hour cycle marker following the time value
#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Meridiem {
    /// Before midday
    Am,
    /// After midday
    Pm,
}

impl FromStr for Meridiem {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AM" => Ok(Self::Am),
            "PM" => Ok(Self::Pm),
            _ => Err(FormatError::Time),
        }
    }
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = match self {
            Self::Am => "AM",
            Self::Pm => "PM",
        };

        write!(f, "{marker}")
    }
}

/// A clock reading in either the 24-hour (`"19:48"`)
/// or the 12-hour (`"10:33 PM"`) convention.
///
/// Immutable once parsed. The value is structural only:
/// check [`Self::is_valid`] before feeding it to any computation.
#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Time {
    hour: u8,
    minute: u8,
    meridiem: Option<Meridiem>,
}

lazy_static! {
    static ref TIME_RE: Regex = Regex::new(
        r"(?x)                          # enables verbose mode (to allow these comments)
        ^                                   # match the whole line from the start
        (?P<hour>\d{1,2})                       # hour VALUE (0..=99) - requires more validation!
        :                                       # literal separator
        (?P<minute>\d{1,2})                     # minute VALUE (0..=99) - requires more validation!
        (?:\x20                                 # marker group starts with exactly one space
            (?P<meridiem>AM|PM)                     # either of the two literal markers
        )?                                      # the whole 12-hour marker is optional
        $                                   # match the whole line till the end
        ",
    )
    .expect("Time regex is valid");
}

impl FromStr for Time {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let capture = TIME_RE.captures(s).ok_or(FormatError::Time)?;

        // the regex guarantees 1..=2 decimal digits, so the `u8` parse cannot fail
        let hour = capture.name("hour").ok_or(FormatError::Time)?;
        let hour = hour.as_str().parse().map_err(|_| FormatError::Time)?;

        let minute = capture.name("minute").ok_or(FormatError::Time)?;
        let minute = minute.as_str().parse().map_err(|_| FormatError::Time)?;

        let meridiem = capture
            .name("meridiem")
            .map(|m| m.as_str().parse())
            .transpose()?;

        Ok(Self {
            hour,
            minute,
            meridiem,
        })
    }
}

impl Time {
    /// The hour value exactly as parsed:
    /// 24-hour when no marker is present, 12-hour otherwise
    pub fn hour(self) -> u8 {
        self.hour
    }

    /// The minute value exactly as parsed
    pub fn minute(self) -> u8 {
        self.minute
    }

    /// The 12-hour cycle marker, if the string carried one
    pub fn meridiem(self) -> Option<Meridiem> {
        self.meridiem
    }

    /// Whether the parsed fields are in range for their convention:
    /// `minute < 60` and `hour < 24` (no marker) or `hour < 12` (with a marker)
    pub fn is_valid(self) -> bool {
        let hour_in_range = match self.meridiem {
            None => self.hour < HOURS_ON_FACE * 2,
            Some(_) => self.hour < HOURS_ON_FACE,
        };

        hour_in_range && self.minute < 60
    }

    /// Ensure validity, producing the same error
    /// the computation stage would produce later
    pub fn validated(self) -> Result<Self, LogicError> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(LogicError::Time)
        }
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hour, self.minute)?;
        if let Some(marker) = self.meridiem {
            write!(f, " {marker}")?;
        }

        Ok(())
    }
}
