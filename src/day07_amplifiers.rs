//! A chain of amplifiers, each running its own copy of one intcode program.  Each amplifier is
//! given a phase setting, then fed the previous amplifier's output signal.

use std::{cmp::Reverse, ops::Range};

use itertools::Itertools;
use log::{debug, info};

use crate::{
    intcode::{parse_program, Machine, State},
    Config, Error, Result,
};

pub const NUM_AMPLIFIERS: usize = 5;
/// Phase settings when each amplifier's output feeds the next one in a line
pub const CHAIN_PHASES: Range<i64> = 0..5;
/// Phase settings when the last amplifier's output loops back to the first
pub const FEEDBACK_PHASES: Range<i64> = 5..10;

/// Pass a signal of `0` once through the amplifiers, in order
pub fn chain_output(program: &[i64], phases: &[i64]) -> Result<i64> {
    phases.iter().try_fold(0, |signal, &phase| {
        let mut amp = Machine::new(program.to_vec());
        amp.extend_inputs([phase, signal]);
        amp.run_to_halt()?;
        first_signal(&amp.take_outputs())
    })
}

/// Loop a signal of `0` round the amplifiers until the last one halts, returning the last signal
/// it produced
pub fn feedback_output(program: &[i64], phases: &[i64]) -> Result<i64> {
    let mut amps = phases
        .iter()
        .map(|&phase| {
            let mut amp = Machine::new(program.to_vec());
            amp.push_input(phase);
            amp
        })
        .collect_vec();

    let mut signal = 0;
    let mut rounds = 0;
    loop {
        let mut last_state = State::Halted;
        for amp in &mut amps {
            amp.push_input(signal);
            last_state = amp.run()?;
            signal = last_signal(&amp.take_outputs())?;
        }
        rounds += 1;
        if last_state == State::Halted {
            debug!("Phases {:?} gave {} after {} rounds", phases, signal, rounds);
            return Ok(signal);
        }
    }
}

fn first_signal(outputs: &[i64]) -> Result<i64> {
    outputs.first().copied().ok_or_else(no_signal)
}

fn last_signal(outputs: &[i64]) -> Result<i64> {
    outputs.last().copied().ok_or_else(no_signal)
}

fn no_signal() -> Error {
    Error::NoSolution("an amplifier produced no signal".to_owned())
}

/// Try every ordering of `phases`, returning the largest signal that `amplify` produces along
/// with the phase settings which produced it.  On a tie, the earliest ordering wins.
pub fn max_signal(
    program: &[i64],
    phases: Range<i64>,
    amplify: impl Fn(&[i64], &[i64]) -> Result<i64>,
) -> Result<(i64, Vec<i64>)> {
    let best = itertools::process_results(
        phases
            .clone()
            .permutations(NUM_AMPLIFIERS)
            .map(|order| amplify(program, &order).map(|signal| (signal, order))),
        |results| results.min_by_key(|(signal, _)| Reverse(*signal)),
    )?;
    best.ok_or_else(|| Error::NoSolution(format!("not enough phase settings in {:?}", phases)))
}

/// Returns the highest signal from a chain of amplifiers, and from a feedback loop
pub fn solve(text: &str) -> Result<(i64, i64)> {
    let program = parse_program(text)?;
    let (chain, _) = max_signal(&program, CHAIN_PHASES, chain_output)?;
    let (feedback, _) = max_signal(&program, FEEDBACK_PHASES, feedback_output)?;
    Ok((chain, feedback))
}

pub fn run(config: &Config) -> Result<()> {
    let program = parse_program(&config.read_input()?)?;
    info!("Loaded amplifier program from {:?}", config.input);

    let (chain, chain_phases) = max_signal(&program, CHAIN_PHASES, chain_output)?;
    println!("MAX SETTING OUTPUT : {}", chain);
    println!("MAX SETTINGS       : {}", chain_phases.iter().join(" "));

    let (feedback, feedback_phases) = max_signal(&program, FEEDBACK_PHASES, feedback_output)?;
    println!("MAX RELOOP OUTPUT  : {}", feedback);
    println!("MAX RELOOP         : {}", feedback_phases.iter().join(" "));
    Ok(())
}
