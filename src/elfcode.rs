//! The wrist device's register machine from the 2018 puzzles.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::helpers::parse;

pub type Word = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Opcode {
    Addr,
    Addi,
    Mulr,
    Muli,
    Banr,
    Bani,
    Borr,
    Bori,
    Setr,
    Seti,
    Gtir,
    Gtri,
    Gtrr,
    Eqir,
    Eqri,
    Eqrr,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown opcode `{0}`")]
pub struct UnknownOpcode(String);

impl Opcode {
    pub const ALL: [Opcode; 16] = [
        Opcode::Addr,
        Opcode::Addi,
        Opcode::Mulr,
        Opcode::Muli,
        Opcode::Banr,
        Opcode::Bani,
        Opcode::Borr,
        Opcode::Bori,
        Opcode::Setr,
        Opcode::Seti,
        Opcode::Gtir,
        Opcode::Gtri,
        Opcode::Gtrr,
        Opcode::Eqir,
        Opcode::Eqri,
        Opcode::Eqrr,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Opcode::Addr => "addr",
            Opcode::Addi => "addi",
            Opcode::Mulr => "mulr",
            Opcode::Muli => "muli",
            Opcode::Banr => "banr",
            Opcode::Bani => "bani",
            Opcode::Borr => "borr",
            Opcode::Bori => "bori",
            Opcode::Setr => "setr",
            Opcode::Seti => "seti",
            Opcode::Gtir => "gtir",
            Opcode::Gtri => "gtri",
            Opcode::Gtrr => "gtrr",
            Opcode::Eqir => "eqir",
            Opcode::Eqri => "eqri",
            Opcode::Eqrr => "eqrr",
        }
    }

    /// Executes this opcode on a copy of `registers`.
    ///
    /// Returns `None` if an operand used as a register does not name one, or
    /// if the result overflows a [`Word`].
    pub fn apply<const N: usize>(
        self,
        registers: &[Word; N],
        a: Word,
        b: Word,
        c: Word,
    ) -> Option<[Word; N]> {
        let reg = |i: Word| -> Option<Word> {
            let i = usize::try_from(i).ok()?;
            registers.get(i).copied()
        };

        let value = match self {
            Opcode::Addr => reg(a)?.checked_add(reg(b)?)?,
            Opcode::Addi => reg(a)?.checked_add(b)?,
            Opcode::Mulr => reg(a)?.checked_mul(reg(b)?)?,
            Opcode::Muli => reg(a)?.checked_mul(b)?,
            Opcode::Banr => reg(a)? & reg(b)?,
            Opcode::Bani => reg(a)? & b,
            Opcode::Borr => reg(a)? | reg(b)?,
            Opcode::Bori => reg(a)? | b,
            Opcode::Setr => reg(a)?,
            Opcode::Seti => a,
            Opcode::Gtir => Word::from(a > reg(b)?),
            Opcode::Gtri => Word::from(reg(a)? > b),
            Opcode::Gtrr => Word::from(reg(a)? > reg(b)?),
            Opcode::Eqir => Word::from(a == reg(b)?),
            Opcode::Eqri => Word::from(reg(a)? == b),
            Opcode::Eqrr => Word::from(reg(a)? == reg(b)?),
        };

        let c = usize::try_from(c).ok().filter(|&c| c < N)?;
        let mut out = *registers;
        out[c] = value;
        Some(out)
    }
}

impl FromStr for Opcode {
    type Err = UnknownOpcode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Opcode::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| UnknownOpcode(s.to_owned()))
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub op: Opcode,
    pub a: Word,
    pub b: Word,
    pub c: Word,
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.op, self.a, self.b, self.c)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    /// The register the instruction pointer is bound to, if any.
    pub ip_register: Option<usize>,
    pub instructions: Vec<Instruction>,
}

impl Program {
    /// Parses an optional `#ip N` header followed by one instruction per line.
    pub fn parse(input: &str) -> Option<Self> {
        let mut lines = input.lines().map(str::trim).filter(|l| !l.is_empty()).peekable();

        let ip_register = match lines.peek() {
            Some(header) if header.starts_with("#ip") => {
                let register = parse::from_str(header, parsing::ip_header()).ok()?;
                lines.next();
                Some(register)
            }
            _ => None,
        };

        let instructions = lines
            .map(|line| parse::from_str(line, Instruction::parser()).ok())
            .collect::<Option<Vec<_>>>()?;

        Some(Self {
            ip_register,
            instructions,
        })
    }
}

/// Runs a [`Program`] with `N` registers.
#[derive(Debug, Clone)]
pub struct Cpu<'p, const N: usize> {
    program: &'p Program,
    pub registers: [Word; N],
    ip: Word,
    executed: u64,
}

impl<'p, const N: usize> Cpu<'p, N> {
    pub fn new(program: &'p Program, registers: [Word; N]) -> Self {
        Self {
            program,
            registers,
            ip: 0,
            executed: 0,
        }
    }

    /// The index of the next instruction, or `None` once the instruction
    /// pointer has left the program.
    pub fn ip(&self) -> Option<usize> {
        usize::try_from(self.ip)
            .ok()
            .filter(|&ip| ip < self.program.instructions.len())
    }

    /// The instruction about to run.
    pub fn current(&self) -> Option<&'p Instruction> {
        let program = self.program;
        self.ip().map(|ip| &program.instructions[ip])
    }

    /// Number of instructions executed so far.
    pub fn executed(&self) -> u64 {
        self.executed
    }

    /// Executes one instruction. Returns `false` if the program has halted,
    /// either by leaving its bounds or by naming a register that does not
    /// exist. A program bound to a missing register halts at once.
    pub fn step(&mut self) -> bool {
        let Some(inst) = self.current().copied() else {
            return false;
        };

        let bound = match self.program.ip_register {
            Some(r) if r >= N => return false,
            bound => bound,
        };
        if let Some(r) = bound {
            self.registers[r] = self.ip;
        }

        let Some(registers) = inst.op.apply(&self.registers, inst.a, inst.b, inst.c) else {
            return false;
        };
        self.registers = registers;

        if let Some(r) = bound {
            self.ip = self.registers[r];
        }
        let Some(next) = self.ip.checked_add(1) else {
            return false;
        };
        self.ip = next;
        self.executed += 1;
        true
    }

    pub fn run(&mut self) {
        while self.step() {}
    }
}

mod parsing {
    use super::*;

    use crate::helpers::parse;

    mod c {
        pub use combine::{
            error::StreamError,
            parser::char::{letter, spaces, string},
            stream::StreamErrorFor,
            *,
        };
    }

    use c::{ParseError, Parser, Stream, StreamError};

    pub(super) fn ip_header<Input>() -> impl Parser<Input, Output = usize>
    where
        Input: Stream<Token = char>,
        Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
    {
        c::string("#ip").with(parse::padded_integer())
    }

    impl Instruction {
        pub fn parser<Input>() -> impl Parser<Input, Output = Self>
        where
            Input: Stream<Token = char>,
            Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
        {
            let op = c::many1::<String, _, _>(c::letter()).and_then(|name| {
                name.parse::<Opcode>()
                    .map_err(c::StreamErrorFor::<Input>::message_format)
            });

            (
                op,
                parse::padded_integer(),
                parse::padded_integer(),
                parse::padded_integer(),
                c::spaces(),
            )
                .map(|(op, a, b, c, _)| Instruction { op, a, b, c })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
#ip 0
seti 5 0 1
seti 6 0 2
addi 0 1 0
addr 1 2 3
setr 1 0 0
seti 8 0 4
seti 9 0 5";

    #[test]
    fn sample_matches_three_opcodes() {
        let before = [3, 2, 1, 1];
        let after = [3, 2, 2, 1];
        let matching: Vec<Opcode> = Opcode::ALL
            .into_iter()
            .filter(|op| op.apply(&before, 2, 1, 2) == Some(after))
            .collect();
        assert_eq!(matching, [Opcode::Addi, Opcode::Mulr, Opcode::Seti]);
    }

    #[test]
    fn out_of_range_registers() {
        assert_eq!(Opcode::Addr.apply(&[0; 4], 4, 0, 0), None);
        assert_eq!(Opcode::Seti.apply(&[0; 4], 9, 0, 4), None);
        assert_eq!(Opcode::Seti.apply(&[0; 4], 9, 0, 3), Some([0, 0, 0, 9]));
        assert_eq!(Opcode::Gtir.apply(&[0; 4], 9, 0, -1), None);
    }

    #[test]
    fn parse_program() {
        let program = Program::parse(EXAMPLE).unwrap();
        assert_eq!(program.ip_register, Some(0));
        assert_eq!(program.instructions.len(), 7);
        assert_eq!(
            program.instructions[2],
            Instruction {
                op: Opcode::Addi,
                a: 0,
                b: 1,
                c: 0
            }
        );
        assert!(Program::parse("#ip 0\nfoo 1 2 3").is_none());
    }

    #[test]
    fn bound_instruction_pointer() {
        let program = Program::parse(EXAMPLE).unwrap();
        let mut cpu = Cpu::new(&program, [0; 6]);
        cpu.run();
        assert_eq!(cpu.registers, [6, 5, 6, 0, 0, 9]);
        assert_eq!(cpu.executed(), 5);
    }

    #[test]
    fn missing_ip_register_halts() {
        let program = Program::parse("#ip 9\nseti 1 0 0").unwrap();
        assert_eq!(program.ip_register, Some(9));

        let mut cpu = Cpu::new(&program, [0; 6]);
        assert!(!cpu.step());
        cpu.run();
        assert_eq!(cpu.registers, [0; 6]);
        assert_eq!(cpu.executed(), 0);
    }

    #[test]
    fn overflow_halts() {
        assert_eq!(Opcode::Addi.apply(&[Word::MAX], 0, 1, 0), None);
        assert_eq!(Opcode::Mulr.apply(&[Word::MAX, 2], 0, 1, 0), None);

        let program = Program::parse(&format!("seti {} 0 0\nmuli 0 2 0", Word::MAX)).unwrap();
        let mut cpu = Cpu::new(&program, [0; 2]);
        cpu.run();
        assert_eq!(cpu.registers[0], Word::MAX);
        assert_eq!(cpu.executed(), 1);
    }

    #[test]
    fn opcode_names_round_trip() {
        for op in Opcode::ALL {
            assert_eq!(op.name().parse::<Opcode>(), Ok(op));
        }
        assert!("nope".parse::<Opcode>().is_err());
    }
}
