//! The Intcode computer used throughout the 2019 puzzles.
//!
//! A [`Machine`] owns a flat memory that grows when written past its end
//! (reads past the end see `0`), an instruction pointer, a relative base, and
//! a queue of pending inputs. [`Machine::run`] executes until something the
//! caller has to react to happens: an output, a read with no input queued, or
//! a halt.
//!
//! ```
//! use advent_archive::intcode::{Event, Machine};
//!
//! let mut machine: Machine = "3,0,4,0,99".parse().unwrap();
//! machine.push_input(7);
//! assert_eq!(machine.run().unwrap(), Event::Output(7));
//! assert_eq!(machine.run().unwrap(), Event::Halted);
//! ```

use std::collections::VecDeque;
use std::num::ParseIntError;
use std::str::FromStr;

use thiserror::Error;

use crate::debugln;

pub type Word = i64;

/// Writes at or past this address are refused.
pub const MEMORY_LIMIT: usize = 1 << 24;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid program: {0}")]
    Parse(#[from] ParseIntError),
    #[error("unknown opcode {opcode} at {ip}")]
    UnknownOpcode { opcode: Word, ip: usize },
    #[error("unknown parameter mode {mode} at {ip}")]
    UnknownMode { mode: Word, ip: usize },
    #[error("instruction at {ip} writes through an immediate parameter")]
    WriteToImmediate { ip: usize },
    #[error("instruction at {ip} addresses negative memory {address}")]
    NegativeAddress { address: Word, ip: usize },
    #[error("address {address} is past the memory limit")]
    MemoryLimit { address: usize },
    #[error("instruction at {ip} overflows a word")]
    Overflow { ip: usize },
    #[error("instruction at {ip} needs input but none is queued")]
    InputStarved { ip: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Why [`Machine::run`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Output(Word),
    /// The next instruction reads input and the queue is empty. Running again
    /// after pushing input resumes at that instruction.
    AwaitingInput,
    Halted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Position,
    Immediate,
    Relative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Opcode {
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

impl Opcode {
    /// Splits an instruction `ABCDE` into opcode `DE` and the modes `C`, `B`,
    /// `A` of its first, second and third parameters.
    fn decode(instruction: Word, ip: usize) -> Result<(Self, [Mode; 3])> {
        let opcode = match instruction % 100 {
            1 => Opcode::Add,
            2 => Opcode::Mul,
            3 => Opcode::Input,
            4 => Opcode::Output,
            5 => Opcode::JumpIfTrue,
            6 => Opcode::JumpIfFalse,
            7 => Opcode::LessThan,
            8 => Opcode::Equals,
            9 => Opcode::AdjustBase,
            99 => Opcode::Halt,
            _ => {
                return Err(Error::UnknownOpcode {
                    opcode: instruction,
                    ip,
                })
            }
        };

        let mut modes = [Mode::Position; 3];
        let mut rest = instruction / 100;
        for mode in &mut modes {
            *mode = match rest % 10 {
                0 => Mode::Position,
                1 => Mode::Immediate,
                2 => Mode::Relative,
                mode => return Err(Error::UnknownMode { mode, ip }),
            };
            rest /= 10;
        }

        Ok((opcode, modes))
    }
}

/// Parses comma-separated words, ignoring surrounding whitespace.
pub fn parse_program(s: &str) -> Result<Vec<Word>> {
    s.trim()
        .split(',')
        .map(|word| word.trim().parse::<Word>().map_err(Error::from))
        .collect()
}

/// Renders byte-sized outputs as text, skipping anything outside `0..=255`.
pub fn ascii_output(outputs: &[Word]) -> String {
    outputs
        .iter()
        .filter_map(|&word| u8::try_from(word).ok())
        .map(char::from)
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Machine {
    memory: Vec<Word>,
    ip: usize,
    relative_base: Word,
    inputs: VecDeque<Word>,
    halted: bool,
}

impl FromStr for Machine {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_program(s).map(Self::new)
    }
}

impl Machine {
    pub fn new(program: Vec<Word>) -> Self {
        Self {
            memory: program,
            ..Self::default()
        }
    }

    pub fn push_input(&mut self, word: Word) {
        self.inputs.push_back(word);
    }

    /// Queues each byte of `s` as one input word.
    pub fn push_ascii(&mut self, s: &str) {
        self.inputs.extend(s.bytes().map(Word::from));
    }

    pub fn has_pending_input(&self) -> bool {
        !self.inputs.is_empty()
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    pub fn read(&self, address: usize) -> Word {
        self.memory.get(address).copied().unwrap_or(0)
    }

    pub fn write(&mut self, address: usize, value: Word) -> Result<()> {
        if address >= MEMORY_LIMIT {
            return Err(Error::MemoryLimit { address });
        }
        if address >= self.memory.len() {
            self.memory.resize(address + 1, 0);
        }
        self.memory[address] = value;
        Ok(())
    }

    /// Executes instructions until the next [`Event`].
    ///
    /// Once halted, the machine keeps reporting [`Event::Halted`].
    pub fn run(&mut self) -> Result<Event> {
        if self.halted {
            return Ok(Event::Halted);
        }
        loop {
            if let Some(event) = self.step()? {
                return Ok(event);
            }
        }
    }

    /// Runs to completion with the inputs already queued, returning every
    /// output.
    pub fn run_to_halt(&mut self) -> Result<Vec<Word>> {
        let mut outputs = Vec::new();
        loop {
            match self.run()? {
                Event::Output(word) => outputs.push(word),
                Event::Halted => return Ok(outputs),
                Event::AwaitingInput => return Err(Error::InputStarved { ip: self.ip }),
            }
        }
    }

    /// Collects outputs until the machine wants more input or halts.
    pub fn run_until_input(&mut self) -> Result<Vec<Word>> {
        let mut outputs = Vec::new();
        loop {
            match self.run()? {
                Event::Output(word) => outputs.push(word),
                Event::AwaitingInput | Event::Halted => return Ok(outputs),
            }
        }
    }

    fn address(&self, word: Word) -> Result<usize> {
        usize::try_from(word).map_err(|_| Error::NegativeAddress {
            address: word,
            ip: self.ip,
        })
    }

    fn checked(&self, value: Option<Word>) -> Result<Word> {
        value.ok_or(Error::Overflow { ip: self.ip })
    }

    fn relative(&self, raw: Word) -> Result<usize> {
        self.address(self.checked(raw.checked_add(self.relative_base))?)
    }

    /// The value of the `n`th parameter (1-based) of the current instruction.
    fn param(&self, n: usize, modes: [Mode; 3]) -> Result<Word> {
        let raw = self.read(self.ip + n);
        match modes[n - 1] {
            Mode::Position => Ok(self.read(self.address(raw)?)),
            Mode::Immediate => Ok(raw),
            Mode::Relative => Ok(self.read(self.relative(raw)?)),
        }
    }

    /// Writes `value` where the `n`th parameter points.
    fn store(&mut self, n: usize, modes: [Mode; 3], value: Word) -> Result<()> {
        let raw = self.read(self.ip + n);
        let address = match modes[n - 1] {
            Mode::Position => self.address(raw)?,
            Mode::Immediate => return Err(Error::WriteToImmediate { ip: self.ip }),
            Mode::Relative => self.relative(raw)?,
        };
        self.write(address, value)
    }

    fn step(&mut self) -> Result<Option<Event>> {
        let (opcode, modes) = Opcode::decode(self.read(self.ip), self.ip)?;

        match opcode {
            Opcode::Add => {
                let (a, b) = (self.param(1, modes)?, self.param(2, modes)?);
                let value = self.checked(a.checked_add(b))?;
                self.store(3, modes, value)?;
                self.ip += 4;
            }
            Opcode::Mul => {
                let (a, b) = (self.param(1, modes)?, self.param(2, modes)?);
                let value = self.checked(a.checked_mul(b))?;
                self.store(3, modes, value)?;
                self.ip += 4;
            }
            Opcode::Input => {
                let Some(value) = self.inputs.pop_front() else {
                    return Ok(Some(Event::AwaitingInput));
                };
                self.store(1, modes, value)?;
                self.ip += 2;
            }
            Opcode::Output => {
                let value = self.param(1, modes)?;
                self.ip += 2;
                return Ok(Some(Event::Output(value)));
            }
            Opcode::JumpIfTrue => {
                if self.param(1, modes)? != 0 {
                    self.ip = self.address(self.param(2, modes)?)?;
                } else {
                    self.ip += 3;
                }
            }
            Opcode::JumpIfFalse => {
                if self.param(1, modes)? == 0 {
                    self.ip = self.address(self.param(2, modes)?)?;
                } else {
                    self.ip += 3;
                }
            }
            Opcode::LessThan => {
                let value = Word::from(self.param(1, modes)? < self.param(2, modes)?);
                self.store(3, modes, value)?;
                self.ip += 4;
            }
            Opcode::Equals => {
                let value = Word::from(self.param(1, modes)? == self.param(2, modes)?);
                self.store(3, modes, value)?;
                self.ip += 4;
            }
            Opcode::AdjustBase => {
                let offset = self.param(1, modes)?;
                self.relative_base = self.checked(self.relative_base.checked_add(offset))?;
                self.ip += 2;
            }
            Opcode::Halt => {
                debugln!("intcode: halted at {}", self.ip);
                self.halted = true;
                return Ok(Some(Event::Halted));
            }
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_modes() {
        assert_eq!(
            Opcode::decode(1002, 0),
            Ok((Opcode::Mul, [Mode::Position, Mode::Immediate, Mode::Position]))
        );
        assert_eq!(
            Opcode::decode(21101, 0),
            Ok((Opcode::Add, [Mode::Immediate, Mode::Immediate, Mode::Relative]))
        );
        assert_eq!(
            Opcode::decode(99, 0),
            Ok((Opcode::Halt, [Mode::Position; 3]))
        );
    }

    #[test]
    fn decode_rejects_garbage() {
        assert_eq!(
            Opcode::decode(42, 7),
            Err(Error::UnknownOpcode { opcode: 42, ip: 7 })
        );
        assert_eq!(
            Opcode::decode(301, 3),
            Err(Error::UnknownMode { mode: 3, ip: 3 })
        );
    }

    #[test]
    fn memory_grows_on_write() {
        let mut machine = Machine::new(vec![99]);
        assert_eq!(machine.read(1000), 0);
        machine.write(1000, 5).unwrap();
        assert_eq!(machine.read(1000), 5);
        assert_eq!(
            machine.write(MEMORY_LIMIT, 1),
            Err(Error::MemoryLimit {
                address: MEMORY_LIMIT
            })
        );
    }

    #[test]
    fn awaits_input_without_consuming_the_instruction() {
        let mut machine: Machine = "3,0,4,0,99".parse().unwrap();
        assert_eq!(machine.run(), Ok(Event::AwaitingInput));
        assert_eq!(machine.run(), Ok(Event::AwaitingInput));
        machine.push_input(-3);
        assert_eq!(machine.run(), Ok(Event::Output(-3)));
        assert_eq!(machine.run(), Ok(Event::Halted));
        assert!(machine.is_halted());
        assert_eq!(machine.run(), Ok(Event::Halted));
    }

    #[test]
    fn run_to_halt_reports_starvation() {
        let mut machine: Machine = "3,0,99".parse().unwrap();
        assert_eq!(machine.run_to_halt(), Err(Error::InputStarved { ip: 0 }));
    }

    #[test]
    fn immediate_destination_is_an_error() {
        let mut machine: Machine = "11101,1,1,0,99".parse().unwrap();
        assert_eq!(machine.run(), Err(Error::WriteToImmediate { ip: 0 }));
    }

    #[test]
    fn negative_address_is_an_error() {
        let mut machine: Machine = "4,-1,99".parse().unwrap();
        assert_eq!(
            machine.run(),
            Err(Error::NegativeAddress { address: -1, ip: 0 })
        );
    }

    #[test]
    fn overflow_is_an_error() {
        let mut add: Machine = "1101,9223372036854775807,1,0,99".parse().unwrap();
        assert_eq!(add.run(), Err(Error::Overflow { ip: 0 }));

        let mut mul: Machine = "1102,4611686018427387904,2,0,99".parse().unwrap();
        assert_eq!(mul.run(), Err(Error::Overflow { ip: 0 }));

        let mut base: Machine = "109,9223372036854775807,209,1,99".parse().unwrap();
        assert_eq!(base.run(), Err(Error::Overflow { ip: 2 }));

        let mut max: Machine = "1101,9223372036854775806,1,0,4,0,99".parse().unwrap();
        assert_eq!(max.run(), Ok(Event::Output(Word::MAX)));
    }

    #[test]
    fn ascii_round_trip() {
        let mut machine: Machine = "3,50,4,50,3,50,4,50,104,1000,99".parse().unwrap();
        machine.push_ascii("hi");
        let outputs = machine.run_to_halt().unwrap();
        assert_eq!(outputs, [104, 105, 1000]);
        assert_eq!(ascii_output(&outputs), "hi");
    }

    #[test]
    fn parse_tolerates_whitespace() {
        assert_eq!(parse_program(" 1, 2 ,3\n"), Ok(vec![1, 2, 3]));
        assert!(matches!(parse_program("1,,2"), Err(Error::Parse(_))));
    }
}
