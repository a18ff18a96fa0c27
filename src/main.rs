//! Command-line shell around the [`clock_angle`] pipeline:
//! checks argument presence, reports errors, maps the exit code.

use std::{env, process};

use log::debug;

use clock_angle::{AngleCalculator, ClockError, Parameters, Time};

const USAGE: &str = "The program requires 3 arguments:
[time (hh:mm, hh:mm AM/PM)]
[output format (deg, rad, dms)]
[clock type (quar, mech)]

Example: \"10:33 PM\" deg quar";

fn run(time: &str, angle_format: &str, clock_type: &str) -> Result<String, ClockError> {
    let time: Time = time.parse()?;
    let time = time.validated()?;
    let parameters = Parameters::from_tokens(angle_format, clock_type)?;
    debug!("parsed time {time}, parameters {parameters:?}");

    let calculator = AngleCalculator::new(time, parameters);
    Ok(calculator.render()?)
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() < 3 {
        println!("{USAGE}");
        process::exit(-1);
    }

    match run(&args[0], &args[1], &args[2]) {
        Ok(angle) => println!("{angle}"),
        // reported but deliberately not reflected in the exit code,
        // matching the long-standing behavior of this tool
        Err(err) => println!("Logic error: {err}"),
    }
}
