//! Running the ship's diagnostic program, which reports the result of each of its self-tests
//! before printing a diagnostic code

use log::{debug, info, warn};

use crate::{
    intcode::{parse_program, run_program},
    Config, Error, Result,
};

/// System ID of the air conditioner unit
pub const AIR_CONDITIONER: i64 = 1;
/// System ID of the thermal radiator controller
pub const THERMAL_RADIATOR: i64 = 5;

/// Run `program` for the given system, returning the diagnostic code it finishes with.  Every
/// output before the code is a test result, where anything other than `0` is a failure.
pub fn diagnostic_code(program: &[i64], system_id: i64) -> Result<i64> {
    let outputs = run_program(program, [system_id])?;
    let (&code, tests) = outputs
        .split_last()
        .ok_or_else(|| Error::NoSolution(format!("system {} produced no output", system_id)))?;

    let failures = tests.iter().filter(|&&result| result != 0).count();
    if failures > 0 {
        warn!(
            "{} of {} diagnostic tests failed for system {}",
            failures,
            tests.len(),
            system_id
        );
    }
    debug!("System {} passed {} tests", system_id, tests.len() - failures);
    Ok(code)
}

/// Returns the diagnostic codes for the air conditioner and the thermal radiator controller
pub fn solve(text: &str) -> Result<(i64, i64)> {
    let program = parse_program(text)?;
    Ok((
        diagnostic_code(&program, AIR_CONDITIONER)?,
        diagnostic_code(&program, THERMAL_RADIATOR)?,
    ))
}

pub fn run(config: &Config) -> Result<()> {
    let (air_conditioner, radiator) = solve(&config.read_input()?)?;
    info!("Ran diagnostics from {:?}", config.input);
    println!("AIR CONDITIONER  : {}", air_conditioner);
    println!("THERMAL RADIATOR : {}", radiator);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Outputs 0 for each passing test, then echoes the system ID multiplied by 100
    const SELF_TEST: &str = "3,17,104,0,104,0,1002,17,100,18,4,18,99,0,0,0,0,0,0";

    #[test]
    fn code_follows_test_results() {
        let program = parse_program(SELF_TEST).unwrap();
        assert_eq!(diagnostic_code(&program, AIR_CONDITIONER).unwrap(), 100);
        assert_eq!(diagnostic_code(&program, THERMAL_RADIATOR).unwrap(), 500);
        assert_eq!(solve(SELF_TEST).unwrap(), (100, 500));
    }

    #[test]
    fn failed_tests_still_give_a_code() {
        let program = parse_program("3,0,104,7,4,0,99").unwrap();
        assert_eq!(diagnostic_code(&program, 5).unwrap(), 5);
    }

    #[test]
    fn comparing_with_eight() {
        let program = parse_program("3,9,8,9,10,9,4,9,99,-1,8").unwrap();
        assert_eq!(diagnostic_code(&program, 8).unwrap(), 1);
        assert_eq!(diagnostic_code(&program, THERMAL_RADIATOR).unwrap(), 0);
    }

    #[test]
    fn no_output() {
        let program = parse_program("3,0,99").unwrap();
        assert!(matches!(
            diagnostic_code(&program, AIR_CONDITIONER),
            Err(Error::NoSolution(_))
        ));
    }
}
