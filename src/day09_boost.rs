//! The BOOST program, which checks the intcode machine's relative mode and large memory before
//! doing any real work

use log::{info, warn};

use crate::{
    intcode::{parse_program, run_program},
    Config, Error, Result,
};

/// Input which puts BOOST into self-test mode
pub const TEST_MODE: i64 = 1;
/// Input which puts BOOST into sensor boost mode
pub const SENSOR_BOOST: i64 = 2;

/// Run BOOST in the given mode, returning the single value it outputs.  If the machine is faulty,
/// BOOST outputs the opcodes which didn't work instead.
pub fn boost(program: &[i64], mode: i64) -> Result<i64> {
    let outputs = run_program(program, [mode])?;
    match outputs.as_slice() {
        [value] => Ok(*value),
        [] => Err(Error::NoSolution(format!("BOOST gave no output in mode {}", mode))),
        faulty => {
            warn!("BOOST reported faulty opcodes: {:?}", faulty);
            Err(Error::NoSolution(format!(
                "BOOST found {} faulty opcodes in mode {}",
                faulty.len(),
                mode
            )))
        }
    }
}

/// Returns the BOOST keycode and the coordinates of the distress signal
pub fn solve(text: &str) -> Result<(i64, i64)> {
    let program = parse_program(text)?;
    Ok((boost(&program, TEST_MODE)?, boost(&program, SENSOR_BOOST)?))
}

pub fn run(config: &Config) -> Result<()> {
    let (keycode, coordinates) = solve(&config.read_input()?)?;
    info!("Ran BOOST from {:?}", config.input);
    println!("BOOST KEYCODE : {}", keycode);
    println!("COORDINATES   : {}", coordinates);
    Ok(())
}
