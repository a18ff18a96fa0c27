//! The angle between the hands and its textual rendering.
//!
//! The angle is a pure function of a validated [`Time`] and the
//! [`Parameters`], recomputed on every request. Both inputs can be replaced
//! wholesale on an existing calculator, so one instance can serve a whole
//! sequence of queries.

use crate::{
    consts::{
        DEG_IN_MINUTE_TICK, FULL_TURN_DEG, HALF_TURN_DEG, HOURS_ON_FACE,
        HOUR_HAND_CREEP_DEG_PER_MINUTE, MINUTES_IN_DEGREE, MINUTE_TICKS_PER_HOUR,
        SECONDS_IN_MINUTE,
    },
    errors::LogicError,
    params::{AngleFormat, ClockType, Parameters},
    time::Time,
    utils::{div_mod, round_significant},
};

const RADIANS_SIGNIFICANT_DIGITS: i32 = 5;

/// Computes the non-reflex angle between the hour and the minute hands
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub struct AngleCalculator {
    time: Time,
    parameters: Parameters,
}

impl AngleCalculator {
    /// Pair a clock reading with the output and clock-model selectors
    pub fn new(time: Time, parameters: Parameters) -> Self {
        Self { time, parameters }
    }

    /// The current clock reading
    pub fn time(self) -> Time {
        self.time
    }

    /// Replace the clock reading, keeping the selectors
    pub fn set_time(&mut self, time: Time) {
        self.time = time;
    }

    /// The current selectors
    pub fn parameters(self) -> Parameters {
        self.parameters
    }

    /// Replace the selectors, keeping the clock reading
    pub fn set_parameters(&mut self, parameters: Parameters) {
        self.parameters = parameters;
    }

    /// The angle between the hands in degrees, always in `[0, 180]`.
    ///
    /// The validity of the time is re-verified here even if the caller
    /// already checked it: the calculator never trusts an earlier check.
    ///
    /// # Errors
    /// `LogicError::Time` for an out-of-range clock reading.
    pub fn angle(self) -> Result<f64, LogicError> {
        let time = self.time.validated()?;

        // fold both conventions into the dial interval [0..12);
        // the meridiem marker carries no further information about the hands
        let h12 = time.hour() % HOURS_ON_FACE;

        // both hands in the common minute-tick unit, then the gap in degrees
        let hour_hand_ticks = f64::from(h12 * MINUTE_TICKS_PER_HOUR);
        let mut angle = (hour_hand_ticks - f64::from(time.minute())).abs() * DEG_IN_MINUTE_TICK;

        if self.parameters.clock_type() == ClockType::Mechanical {
            angle += f64::from(time.minute()) * HOUR_HAND_CREEP_DEG_PER_MINUTE;
        }

        // the creep correction can push the raw value past the full turn
        // (e.g. 0:56 is 336 + 28), so wrap before picking the side
        angle %= FULL_TURN_DEG;

        // always report the non-reflex angle
        if angle > HALF_TURN_DEG {
            angle = FULL_TURN_DEG - angle;
        }

        Ok(angle)
    }

    /// The angle rendered in the selected [`AngleFormat`]
    ///
    /// # Errors
    /// `LogicError::Time` for an out-of-range clock reading.
    pub fn render(self) -> Result<String, LogicError> {
        let angle = self.angle()?;

        let rendered = match self.parameters.angle_format() {
            AngleFormat::Degrees => angle.to_string(),
            AngleFormat::Radians => render_radians(angle),
            AngleFormat::DegreesMinutesSeconds => render_dms(angle),
        };
        Ok(rendered)
    }
}

fn render_radians(angle: f64) -> String {
    let radians = angle.to_radians();
    round_significant(radians, RADIANS_SIGNIFICANT_DIGITS).to_string()
}

fn render_dms(angle: f64) -> String {
    let sec_in_min = u32::from(SECONDS_IN_MINUTE);
    let sec_in_deg = sec_in_min * u32::from(MINUTES_IN_DEGREE);

    // a negative value would saturate the cast to 0 and hide the breakage
    debug_assert!(angle >= 0.0, "angle must be non-negative, got {angle}");

    // hand angles are whole multiples of half a degree (1800''),
    // so the floor-based decomposition is exact
    let total_seconds = (angle * f64::from(sec_in_deg)).floor() as u32;
    let (degrees, rest) = div_mod(total_seconds, sec_in_deg);
    let (minutes, seconds) = div_mod(rest, sec_in_min);

    format!("{degrees}.{minutes}'{seconds}''")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calculator(time: &str, angle_format: &str, clock_type: &str) -> AngleCalculator {
        let time = time.parse().unwrap();
        let parameters = Parameters::from_tokens(angle_format, clock_type).unwrap();
        AngleCalculator::new(time, parameters)
    }

    fn angle_of(time: &str, clock_type: &str) -> f64 {
        calculator(time, "deg", clock_type).angle().unwrap()
    }

    #[test]
    fn right_angle_at_three() {
        assert_eq!(angle_of("3:00", "quar"), 90.0);
        assert_eq!(angle_of("3:00", "mech"), 90.0);
    }

    #[test]
    fn straight_angle_at_six() {
        // exactly the boundary: no reflex correction
        assert_eq!(angle_of("6:00", "quar"), 180.0);
    }

    #[test]
    fn zero_angle_at_noon() {
        assert_eq!(angle_of("12:00", "quar"), 0.0);
        assert_eq!(angle_of("0:00", "mech"), 0.0);
    }

    #[test]
    fn reflex_angle_flipped() {
        // raw separation of 0:59 is 354 degrees
        assert_eq!(angle_of("0:59", "quar"), 6.0);
        // raw separation of 11:05 is 300 degrees
        assert_eq!(angle_of("11:05", "quar"), 60.0);
    }

    #[test]
    fn creep_past_the_full_turn_wraps_around() {
        // raw mechanical value of 0:56 is 336 + 28 = 364 degrees
        assert_eq!(angle_of("0:56", "mech"), 4.0);
        assert_eq!(
            calculator("0:56", "dms", "mech").render().unwrap(),
            "4.0'0''"
        );
        // the biggest raw value of all: 336 + 29.5 = 383.5 degrees
        assert_eq!(angle_of("0:59", "mech"), 23.5);
    }

    #[test]
    fn quartz_ignores_hour_hand_creep() {
        assert_eq!(angle_of("3:15", "quar"), 0.0);
    }

    #[test]
    fn mechanical_hour_hand_creeps() {
        assert_eq!(angle_of("3:15", "mech"), 7.5);
    }

    #[test]
    fn movement_models_agree_only_on_the_hour() {
        assert_eq!(angle_of("7:00", "quar"), angle_of("7:00", "mech"));
        for minute in 1..60_u8 {
            let time = format!("3:{minute:02}");
            assert_ne!(angle_of(&time, "quar"), angle_of(&time, "mech"));
        }
    }

    #[test]
    fn meridiem_marker_never_changes_the_angle() {
        for (am_or_pm, offset) in [("AM", 0), ("PM", 12)] {
            for hour in 0..12_u8 {
                for minute in [0, 17, 33, 59] {
                    let twelve = format!("{hour}:{minute:02} {am_or_pm}");
                    let twenty_four = format!("{}:{minute:02}", hour + offset);
                    assert_eq!(angle_of(&twelve, "mech"), angle_of(&twenty_four, "mech"));
                }
            }
        }
    }

    #[test]
    fn whole_domain_stays_in_range() {
        for clock_type in ["quar", "mech"] {
            for hour in 0..24_u8 {
                for minute in 0..60_u8 {
                    let angle = angle_of(&format!("{hour}:{minute:02}"), clock_type);
                    assert!((0.0..=180.0).contains(&angle), "{hour}:{minute} -> {angle}");
                }
            }
        }
    }

    #[test]
    fn invalid_time_rejected_at_computation() {
        let calc = calculator("13:00 PM", "deg", "quar");
        assert_eq!(calc.angle(), Err(LogicError::Time));
        assert_eq!(calc.render(), Err(LogicError::Time));
    }

    #[test]
    fn degrees_render_without_padding() {
        assert_eq!(calculator("3:00", "deg", "mech").render().unwrap(), "90");
        assert_eq!(calculator("3:15", "deg", "mech").render().unwrap(), "7.5");
    }

    #[test]
    fn radians_render_with_five_significant_digits() {
        assert_eq!(calculator("15:00", "rad", "mech").render().unwrap(), "1.5708");
        assert_eq!(calculator("9:17 AM", "rad", "quar").render().unwrap(), "2.9322");
    }

    #[test]
    fn radians_render_zero_angle() {
        assert_eq!(calculator("12:00", "rad", "quar").render().unwrap(), "0");
    }

    #[test]
    fn dms_renders_whole_degrees() {
        assert_eq!(
            calculator("09:00 PM", "dms", "quar").render().unwrap(),
            "90.0'0''"
        );
        assert_eq!(
            calculator("19:48", "dms", "mech").render().unwrap(),
            "102.0'0''"
        );
    }

    #[test]
    fn dms_renders_the_half_degree_as_thirty_minutes() {
        assert_eq!(
            calculator("3:15", "dms", "mech").render().unwrap(),
            "7.30'0''"
        );
    }

    #[test]
    fn replacing_the_time_wholesale() {
        let mut calc = calculator("3:00", "deg", "quar");
        assert_eq!(calc.render().unwrap(), "90");

        calc.set_time("6:00".parse().unwrap());
        assert_eq!(calc.time(), "6:00".parse().unwrap());
        assert_eq!(calc.render().unwrap(), "180");
    }

    #[test]
    fn replacing_the_parameters_wholesale() {
        let mut calc = calculator("3:00", "deg", "quar");

        let in_radians = Parameters::from_tokens("rad", "quar").unwrap();
        calc.set_parameters(in_radians);
        assert_eq!(calc.parameters(), in_radians);
        assert_eq!(calc.render().unwrap(), "1.5708");
    }
}
