//! The intcode machine: a tape of integers which is both the program and its working memory.
//!
//! Each instruction is an opcode (the last two decimal digits) followed by its parameters.  The
//! remaining digits of the opcode give each parameter's mode, starting with the hundreds
//! digit for the first parameter.

use std::collections::VecDeque;

use log::trace;

use crate::{Error, Result};

/// Addresses at or beyond this are rejected rather than allocated
const MEMORY_LIMIT: usize = 1 << 24;

/// Parse a comma-separated list of integers
pub fn parse_program(text: &str) -> Result<Vec<i64>> {
    text.trim()
        .split(',')
        .enumerate()
        .map(|(pos, value)| {
            value.trim().parse().map_err(|e| Error::Parse {
                line: 1,
                message: format!("bad value {:?} at position {}: {}", value, pos, e),
            })
        })
        .collect()
}

/// Run `program` to completion with the given inputs, returning everything it outputs
pub fn run_program(program: &[i64], inputs: impl IntoIterator<Item = i64>) -> Result<Vec<i64>> {
    let mut machine = Machine::new(program.to_vec());
    machine.extend_inputs(inputs);
    machine.run_to_halt()?;
    Ok(machine.take_outputs())
}

/////////////
// MACHINE //
/////////////

/// Why [`Machine::run`] stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Reached a halt instruction.  Running again will do nothing.
    Halted,
    /// Reached an input instruction with no input queued.  Running again (after pushing some
    /// input) carries on from that instruction.
    NeedsInput,
}

#[derive(Debug, Clone)]
pub struct Machine {
    memory: Vec<i64>,
    pc: usize,
    relative_base: i64,
    inputs: VecDeque<i64>,
    outputs: Vec<i64>,
}

impl Machine {
    pub fn new(program: Vec<i64>) -> Self {
        Self {
            memory: program,
            pc: 0,
            relative_base: 0,
            inputs: VecDeque::new(),
            outputs: Vec::new(),
        }
    }

    /// Memory as it stands.  Addresses past the end hold `0`.
    pub fn memory(&self) -> &[i64] {
        &self.memory
    }

    pub fn into_memory(self) -> Vec<i64> {
        self.memory
    }

    /// Position of the next instruction to run
    pub fn pc(&self) -> usize {
        self.pc
    }

    pub fn get(&self, address: i64) -> Result<i64> {
        let index = index(address)?;
        Ok(self.memory.get(index).copied().unwrap_or(0))
    }

    /// Overwrite one value, growing memory if `address` is past the end
    pub fn set(&mut self, address: i64, value: i64) -> Result<()> {
        let index = index(address)?;
        if index >= self.memory.len() {
            self.memory.resize(index + 1, 0);
        }
        self.memory[index] = value;
        Ok(())
    }

    /// Queue a value to be read by the next input instruction
    pub fn push_input(&mut self, value: i64) {
        self.inputs.push_back(value);
    }

    pub fn extend_inputs(&mut self, values: impl IntoIterator<Item = i64>) {
        self.inputs.extend(values);
    }

    /// Everything output since the last call to `take_outputs`
    pub fn outputs(&self) -> &[i64] {
        &self.outputs
    }

    pub fn take_outputs(&mut self) -> Vec<i64> {
        std::mem::take(&mut self.outputs)
    }

    /// Run until the program halts, treating a request for more input as an error
    pub fn run_to_halt(&mut self) -> Result<()> {
        match self.run()? {
            State::Halted => Ok(()),
            State::NeedsInput => Err(Error::MissingInput { pc: self.pc }),
        }
    }

    /// Run until the program either halts or runs out of input
    pub fn run(&mut self) -> Result<State> {
        loop {
            let pc = self.pc;
            let value = *self
                .memory
                .get(pc)
                .ok_or(Error::OutOfBounds { address: pc as i64 })?;
            let instr = Instruction::decode(value, pc)?;
            trace!("{:>5}: {:?} {:?}", pc, instr.op, instr.modes);

            match instr.op {
                Op::Halt => return Ok(State::Halted),
                Op::Add | Op::Mul => {
                    let lhs = self.param(instr, 0)?;
                    let rhs = self.param(instr, 1)?;
                    let result = match instr.op {
                        Op::Add => lhs.checked_add(rhs),
                        _ => lhs.checked_mul(rhs),
                    }
                    .ok_or(Error::Overflow { pc })?;
                    self.write(instr, 2, result)?;
                }
                Op::Input => {
                    let value = match self.inputs.pop_front() {
                        Some(v) => v,
                        None => return Ok(State::NeedsInput),
                    };
                    self.write(instr, 0, value)?;
                }
                Op::Output => {
                    let value = self.param(instr, 0)?;
                    self.outputs.push(value);
                }
                Op::JumpIfTrue | Op::JumpIfFalse => {
                    let test = self.param(instr, 0)?;
                    let target = self.param(instr, 1)?;
                    if (test != 0) == (instr.op == Op::JumpIfTrue) {
                        self.pc = index(target)?;
                        continue;
                    }
                }
                Op::LessThan | Op::Equals => {
                    let lhs = self.param(instr, 0)?;
                    let rhs = self.param(instr, 1)?;
                    let holds = match instr.op {
                        Op::LessThan => lhs < rhs,
                        _ => lhs == rhs,
                    };
                    self.write(instr, 2, i64::from(holds))?;
                }
                Op::AdjustBase => {
                    let offset = self.param(instr, 0)?;
                    self.relative_base = self
                        .relative_base
                        .checked_add(offset)
                        .ok_or(Error::Overflow { pc })?;
                }
            }
            self.pc = pc + 1 + instr.op.num_params();
        }
    }

    /// The value of parameter `n` of the current instruction, exactly as written in memory
    fn raw_param(&self, n: usize) -> Result<i64> {
        self.get((self.pc + 1 + n) as i64)
    }

    /// The address which parameter `n` refers to
    fn address(&self, instr: Instruction, n: usize) -> Result<i64> {
        let raw = self.raw_param(n)?;
        match instr.modes[n] {
            Mode::Relative => self
                .relative_base
                .checked_add(raw)
                .ok_or(Error::Overflow { pc: self.pc }),
            // Immediate-mode writes go to the written address, like position mode
            Mode::Position | Mode::Immediate => Ok(raw),
        }
    }

    fn param(&self, instr: Instruction, n: usize) -> Result<i64> {
        match instr.modes[n] {
            Mode::Immediate => self.raw_param(n),
            Mode::Position | Mode::Relative => self.get(self.address(instr, n)?),
        }
    }

    fn write(&mut self, instr: Instruction, n: usize, value: i64) -> Result<()> {
        let address = self.address(instr, n)?;
        self.set(address, value)
    }
}

fn index(address: i64) -> Result<usize> {
    usize::try_from(address)
        .ok()
        .filter(|&idx| idx < MEMORY_LIMIT)
        .ok_or(Error::OutOfBounds { address })
}

//////////////////
// INSTRUCTIONS //
//////////////////

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Add,
    Mul,
    Input,
    Output,
    JumpIfTrue,
    JumpIfFalse,
    LessThan,
    Equals,
    AdjustBase,
    Halt,
}

impl Op {
    fn from_opcode(opcode: i64) -> Option<Self> {
        Some(match opcode {
            1 => Self::Add,
            2 => Self::Mul,
            3 => Self::Input,
            4 => Self::Output,
            5 => Self::JumpIfTrue,
            6 => Self::JumpIfFalse,
            7 => Self::LessThan,
            8 => Self::Equals,
            9 => Self::AdjustBase,
            99 => Self::Halt,
            _ => return None,
        })
    }

    fn num_params(self) -> usize {
        match self {
            Self::Halt => 0,
            Self::Input | Self::Output | Self::AdjustBase => 1,
            Self::JumpIfTrue | Self::JumpIfFalse => 2,
            Self::Add | Self::Mul | Self::LessThan | Self::Equals => 3,
        }
    }
}

/// How a parameter is turned into a value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// The parameter is an address
    Position,
    /// The parameter is the value itself
    Immediate,
    /// The parameter is an address, relative to the machine's relative base
    Relative,
}

impl Mode {
    fn from_digit(digit: i64, pc: usize) -> Result<Self> {
        match digit {
            0 => Ok(Self::Position),
            1 => Ok(Self::Immediate),
            2 => Ok(Self::Relative),
            _ => Err(Error::InvalidMode { mode: digit, pc }),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Instruction {
    op: Op,
    modes: [Mode; 3],
}

impl Instruction {
    fn decode(value: i64, pc: usize) -> Result<Self> {
        let op = Some(value)
            .filter(|v| (0..100_000).contains(v))
            .and_then(|v| Op::from_opcode(v % 100))
            .ok_or(Error::UnknownOpcode { opcode: value, pc })?;
        let mut modes = [Mode::Position; 3];
        let mut digits = value / 100;
        for mode in &mut modes {
            *mode = Mode::from_digit(digits % 10, pc)?;
            digits /= 10;
        }
        Ok(Self { op, modes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_memory(text: &str) -> Vec<i64> {
        let mut machine = Machine::new(parse_program(text).unwrap());
        machine.run_to_halt().unwrap();
        machine.into_memory()
    }

    fn outputs(text: &str, inputs: &[i64]) -> Vec<i64> {
        run_program(&parse_program(text).unwrap(), inputs.iter().copied()).unwrap()
    }

    fn run_without_input(program: &[i64]) -> Result<Vec<i64>> {
        run_program(program, std::iter::empty())
    }

    #[test]
    fn decode_modes() {
        let instr = Instruction::decode(1002, 0).unwrap();
        assert_eq!(instr.op, Op::Mul);
        assert_eq!(
            instr.modes,
            [Mode::Position, Mode::Immediate, Mode::Position]
        );
        let instr = Instruction::decode(21101, 0).unwrap();
        assert_eq!(instr.modes, [Mode::Immediate, Mode::Immediate, Mode::Relative]);
        assert!(matches!(
            Instruction::decode(301, 7),
            Err(Error::InvalidMode { mode: 3, pc: 7 })
        ));
        assert!(matches!(
            Instruction::decode(-1, 2),
            Err(Error::UnknownOpcode { opcode: -1, pc: 2 })
        ));
    }

    #[test]
    fn immediate_parameters() {
        assert_eq!(run_to_memory("1002,4,3,4,33"), vec![1002, 4, 3, 4, 99]);
        assert_eq!(run_to_memory("1101,100,-1,4,0"), vec![1101, 100, -1, 4, 99]);
    }

    #[test]
    fn comparisons() {
        // Position mode, then immediate mode, for `input == 8` and `input < 8`
        for program in ["3,9,8,9,10,9,4,9,99,-1,8", "3,3,1108,-1,8,3,4,3,99"] {
            assert_eq!(outputs(program, &[8]), vec![1]);
            assert_eq!(outputs(program, &[7]), vec![0]);
        }
        for program in ["3,9,7,9,10,9,4,9,99,-1,8", "3,3,1107,-1,8,3,4,3,99"] {
            assert_eq!(outputs(program, &[7]), vec![1]);
            assert_eq!(outputs(program, &[8]), vec![0]);
        }
    }

    #[test]
    fn jumps() {
        for program in [
            "3,12,6,12,15,1,13,14,13,4,13,99,-1,0,1,9",
            "3,3,1105,-1,9,1101,0,0,12,4,12,99,1",
        ] {
            assert_eq!(outputs(program, &[0]), vec![0]);
            assert_eq!(outputs(program, &[5]), vec![1]);
        }
    }

    #[test]
    fn compare_with_eight() {
        let program = "3,21,1008,21,8,20,1005,20,22,107,8,21,20,1006,20,31,\
                       1106,0,36,98,0,0,1002,21,125,20,4,20,1105,1,46,104,\
                       999,1105,1,46,1101,1000,1,20,4,20,1105,1,46,98,99";
        assert_eq!(outputs(program, &[7]), vec![999]);
        assert_eq!(outputs(program, &[8]), vec![1000]);
        assert_eq!(outputs(program, &[9]), vec![1001]);
    }

    #[test]
    fn relative_base_and_large_memory() {
        let quine = "109,1,204,-1,1001,100,1,100,1008,100,16,101,1006,101,0,99";
        assert_eq!(outputs(quine, &[]), parse_program(quine).unwrap());
        assert_eq!(
            outputs("1102,34915192,34915192,7,4,7,99,0", &[]),
            vec![1219070632396864]
        );
        assert_eq!(
            outputs("104,1125899906842624,99", &[]),
            vec![1125899906842624]
        );
    }

    #[test]
    fn relative_writes() {
        // Base becomes 10, then input is written to 10 - 3 = 7 and output from there
        assert_eq!(outputs("109,10,203,-3,204,-3,99", &[42]), vec![42]);
    }

    #[test]
    fn pauses_for_input() {
        let mut machine = Machine::new(parse_program("3,9,4,9,3,9,4,9,99,0").unwrap());
        assert_eq!(machine.run().unwrap(), State::NeedsInput);
        assert_eq!(machine.pc(), 0);
        machine.push_input(5);
        assert_eq!(machine.run().unwrap(), State::NeedsInput);
        assert_eq!(machine.take_outputs(), vec![5]);
        machine.push_input(6);
        assert_eq!(machine.run().unwrap(), State::Halted);
        assert_eq!(machine.outputs(), &[6]);
        // Halted machines stay halted
        assert_eq!(machine.run().unwrap(), State::Halted);
    }

    #[test]
    fn missing_input_is_an_error_when_running_to_halt() {
        assert!(matches!(
            run_without_input(&[3, 0, 99]),
            Err(Error::MissingInput { pc: 0 })
        ));
    }

    #[test]
    fn bad_addresses() {
        assert!(matches!(
            run_without_input(&[4, -5, 99]),
            Err(Error::OutOfBounds { address: -5 })
        ));
        assert!(matches!(
            run_without_input(&[1105, 1, -2, 99]),
            Err(Error::OutOfBounds { address: -2 })
        ));
        assert!(matches!(
            run_without_input(&[1101, 1, 1, 1 << 40, 99]),
            Err(Error::OutOfBounds { address }) if address == 1 << 40
        ));
        assert!(matches!(
            run_without_input(&[1101, 1, 1, 3]),
            Err(Error::OutOfBounds { address: 4 })
        ));
    }

    #[test]
    fn overflow_is_an_error() {
        assert!(matches!(
            run_without_input(&[1102, i64::MAX, 2, 0, 99]),
            Err(Error::Overflow { pc: 0 })
        ));
    }

    #[test]
    fn bad_value() {
        assert!(matches!(
            parse_program("1,2,x"),
            Err(Error::Parse { line: 1, .. })
        ));
    }
}
