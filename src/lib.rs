//! Solutions to a handful of small 2019 puzzles.  Each day's module exposes pure functions which
//! do the actual work, plus a `run` function which reads the input named by a [`Config`] and
//! prints the answers.

pub mod config;
pub mod day01_fuel;
pub mod day02_intcode;
pub mod day03_wires;
pub mod day04_password;
pub mod day05_diagnostics;
pub mod day06_orbits;
pub mod day07_amplifiers;
pub mod day08_image;
pub mod day09_boost;
mod error;
pub mod intcode;
mod utils;

pub use config::Config;
pub use error::{Error, Result};

/// Every day which has a solution in this crate
pub const DAYS: [u8; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];

/// Solve the puzzle for `day`, reading (and writing) files as described by `config`
pub fn run(day: u8, config: &Config) -> Result<()> {
    log::debug!("Running day {} with {:?}", day, config);
    match day {
        1 => day01_fuel::run(config),
        2 => day02_intcode::run(config),
        3 => day03_wires::run(config),
        4 => day04_password::run(config),
        5 => day05_diagnostics::run(config),
        6 => day06_orbits::run(config),
        7 => day07_amplifiers::run(config),
        8 => day08_image::run(config),
        9 => day09_boost::run(config),
        _ => Err(Error::UnknownDay(day)),
    }
}
