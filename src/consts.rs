//! Clock-face and sexagesimal constants

pub(crate) const HOURS_ON_FACE: u8 = 12;
pub(crate) const MINUTE_TICKS_PER_HOUR: u8 = 5;

pub(crate) const MINUTES_IN_DEGREE: u8 = 60;
pub(crate) const SECONDS_IN_MINUTE: u8 = 60;

pub(crate) const FULL_TURN_DEG: f64 = 360.0;
pub(crate) const HALF_TURN_DEG: f64 = FULL_TURN_DEG / 2.0;

/// One minute tick of the dial is 1/60 of the full turn
pub(crate) const DEG_IN_MINUTE_TICK: f64 = FULL_TURN_DEG / 60.0;

/// A mechanical hour hand moves 12 times slower than the minute hand
pub(crate) const HOUR_HAND_CREEP_DEG_PER_MINUTE: f64 =
    DEG_IN_MINUTE_TICK / (HOURS_ON_FACE as f64);
