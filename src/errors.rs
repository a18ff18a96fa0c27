//! Failures of the computation pipeline

use std::{error::Error, fmt};

use crate::enum_trivial_from_impl;

/// The input string does not match the expected lexical grammar
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FormatError {
    /// Not a `hh:mm` or `hh:mm AM/PM` time string
    Time,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::Time => "time format is not valid",
        };

        write!(f, "{msg}")
    }
}

impl Error for FormatError {}

/// The input is lexically well-formed but semantically invalid
/// or not in the recognized enumeration
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LogicError {
    /// Hour or minute out of range for the given meridiem marker
    Time,
    /// The angle format token is not one of `deg`, `rad`, `dms`
    AngleFormat,
    /// The clock type token is not one of `quar`, `mech`
    ClockFormat,
}

impl fmt::Display for LogicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::Time => "time is not valid",
            Self::AngleFormat => "angle format is not valid",
            Self::ClockFormat => "clock format is not valid",
        };

        write!(f, "{msg}")
    }
}

impl Error for LogicError {}

/// Any failure a full parse-validate-compute chain can produce
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ClockError {
    /// Lexical error while parsing the time string
    Format(FormatError),
    /// Semantic error in any of the three inputs
    Logic(LogicError),
}

enum_trivial_from_impl!(FormatError => ClockError:Format);
enum_trivial_from_impl!(LogicError => ClockError:Logic);

impl fmt::Display for ClockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Format(inner) => write!(f, "{inner}"),
            Self::Logic(inner) => write!(f, "{inner}"),
        }
    }
}

impl Error for ClockError {}
