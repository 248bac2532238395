//! Fuel needed to launch modules of a given mass

use log::{debug, info};

use crate::{Config, Error, Result};

/// Fuel needed to lift `mass` on its own: a third of the mass (rounded down), minus 2
pub fn fuel_for_mass(mass: i64) -> i64 {
    mass / 3 - 2
}

/// Fuel needed to lift `mass`, plus the fuel to lift that fuel, and so on until the extra fuel
/// needed would be zero or negative.
pub fn total_fuel_for_mass(mass: i64) -> i64 {
    std::iter::successors(Some(fuel_for_mass(mass)), |&fuel| Some(fuel_for_mass(fuel)))
        .take_while(|&fuel| fuel > 0)
        .sum()
}

/// Parse one mass per line, skipping blank lines
pub fn parse_masses(text: &str) -> Result<Vec<i64>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            line.trim().parse().map_err(|e| Error::Parse {
                line: i + 1,
                message: format!("bad mass {:?}: {}", line, e),
            })
        })
        .collect()
}

/// Returns the total fuel for every module, first ignoring and then including the mass of the
/// fuel itself
pub fn solve(text: &str) -> Result<(i64, i64)> {
    let masses = parse_masses(text)?;
    debug!("Read {} module masses", masses.len());
    let modules_only = masses.iter().copied().map(fuel_for_mass).sum();
    let with_fuel = masses.iter().copied().map(total_fuel_for_mass).sum();
    Ok((modules_only, with_fuel))
}

pub fn run(config: &Config) -> Result<()> {
    let (modules_only, with_fuel) = solve(&config.read_input()?)?;
    info!("Solved fuel requirements for {:?}", config.input);
    println!("TOTAL FUEL NEEDED (MODULES)   : {}", modules_only);
    println!("TOTAL FUEL NEEDED (WITH FUEL) : {}", with_fuel);
    Ok(())
}
