//! The gravity assist program: patch two inputs of an intcode program and look at what it leaves
//! behind in memory

use itertools::iproduct;
use log::{debug, info};

use crate::{
    intcode::{parse_program, Machine},
    Config, Error, Result,
};

/// The output which the gravity assist program has to produce
pub const TARGET_OUTPUT: i64 = 19690720;

/// Run `program` until it halts, returning the final state of memory
pub fn execute(program: Vec<i64>) -> Result<Vec<i64>> {
    let mut machine = Machine::new(program);
    machine.run_to_halt()?;
    Ok(machine.into_memory())
}

/// Run a copy of `program` with addresses 1 and 2 replaced by `noun` and `verb`, returning the
/// value left at address 0
pub fn run_with(program: &[i64], noun: i64, verb: i64) -> Result<i64> {
    if program.len() < 3 {
        return Err(Error::OutOfBounds { address: 2 });
    }
    let mut memory = program.to_vec();
    memory[1] = noun;
    memory[2] = verb;
    Ok(execute(memory)?[0])
}

/// Find the `(noun, verb)` pair (each in `0..=99`) which makes `program` output `target`.
/// Combinations which crash the machine are skipped.
pub fn find_noun_verb(program: &[i64], target: i64) -> Result<(i64, i64)> {
    iproduct!(0..=99, 0..=99)
        .find(|&(noun, verb)| matches!(run_with(program, noun, verb), Ok(out) if out == target))
        .ok_or_else(|| Error::NoSolution(format!("no noun/verb produces {}", target)))
}

/// Returns the output for the '1202 program alarm' state, and `100 * noun + verb` for the
/// inputs which produce [`TARGET_OUTPUT`]
pub fn solve(text: &str) -> Result<(i64, i64)> {
    let program = parse_program(text)?;
    debug!("Loaded program of {} values", program.len());
    let alarm = run_with(&program, 12, 2)?;
    let (noun, verb) = find_noun_verb(&program, TARGET_OUTPUT)?;
    debug!("Noun {} and verb {} produce {}", noun, verb, TARGET_OUTPUT);
    Ok((alarm, 100 * noun + verb))
}

pub fn run(config: &Config) -> Result<()> {
    let (alarm, answer) = solve(&config.read_input()?)?;
    info!("Ran gravity assist program from {:?}", config.input);
    println!("OUTPUT (1202) : {}", alarm);
    println!("NOUN/VERB     : {}", answer);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_program(text: &str) -> Vec<i64> {
        execute(parse_program(text).unwrap()).unwrap()
    }

    #[test]
    fn small_programs() {
        assert_eq!(run_program("1,0,0,0,99"), vec![2, 0, 0, 0, 99]);
        assert_eq!(run_program("2,3,0,3,99"), vec![2, 3, 0, 6, 99]);
        assert_eq!(run_program("2,4,4,5,99,0"), vec![2, 4, 4, 5, 99, 9801]);
        assert_eq!(
            run_program("1,1,1,4,99,5,6,0,99"),
            vec![30, 1, 1, 4, 2, 5, 6, 0, 99]
        );
    }

    #[test]
    fn longer_example() {
        let memory = run_program("1,9,10,3,2,3,11,0,99,30,40,50\n");
        assert_eq!(memory[0], 3500);
        assert_eq!(memory[3], 70);
    }

    #[test]
    fn unknown_opcode() {
        let memory = parse_program("1,0,0,0,42,0,0,0").unwrap();
        assert!(matches!(
            execute(memory),
            Err(Error::UnknownOpcode { opcode: 42, pc: 4 })
        ));
    }

    #[test]
    fn running_off_the_end() {
        let memory = parse_program("1,0,0,0").unwrap();
        assert!(matches!(
            execute(memory),
            Err(Error::OutOfBounds { address: 4 })
        ));
    }

    #[test]
    fn writes_past_the_end_grow_memory() {
        assert_eq!(run_program("1,0,0,7,99"), vec![1, 0, 0, 7, 99, 0, 0, 2]);
        let memory = parse_program("1,0,0,-1,99").unwrap();
        assert!(matches!(
            execute(memory),
            Err(Error::OutOfBounds { address: -1 })
        ));
    }

    #[test]
    fn noun_and_verb_are_addresses() {
        let program = parse_program("1,9,10,3,2,3,11,0,99,30,40,50").unwrap();
        assert_eq!(run_with(&program, 9, 10).unwrap(), 3500);
    }

    #[test]
    fn noun_verb_search() {
        // Output is `memory[noun] + memory[verb]`, and only 99 + 30 makes 129
        let program = parse_program("1,0,0,0,99,10,20,30").unwrap();
        assert_eq!(find_noun_verb(&program, 129).unwrap(), (4, 7));
        assert_eq!(run_with(&program, 4, 7).unwrap(), 129);
    }

    #[test]
    fn noun_verb_search_without_answer() {
        let program = parse_program("1,0,0,0,99,10,20,30").unwrap();
        assert!(matches!(
            find_noun_verb(&program, 1000),
            Err(Error::NoSolution(_))
        ));
    }
}
