//! 2019 Day 21: Springdroid Adventure

use std::fmt;

use advent_archive::{
    debugln,
    helpers::parse,
    intcode::{ascii_output, Machine},
};

/// Jump if there is a hole in the next three tiles and ground to land on.
const WALK_SCRIPT: &str = "\
NOT A J
NOT B T
OR T J
NOT C T
OR T J
AND D J
WALK";

/// As above, but only if the droid can step or jump again after landing.
const RUN_SCRIPT: &str = "\
NOT A J
NOT B T
OR T J
NOT C T
OR T J
AND D J
NOT E T
NOT T T
OR H T
AND T J
RUN";

/// Hull sections (`#` for ground) each script must get across before it is
/// sent to the droid.
const WALK_HULLS: &[&str] = &[
    "#####.###########",
    "#####...#########",
    "#####..#.########",
    "#####.#..########",
];

const RUN_HULLS: &[&str] = &[
    "#####.###########",
    "#####...#########",
    "#####..#.########",
    "#####.#.##.#.####",
    "#####.##.##..####",
    "#####.#.#...#####",
    "#####...##.#.#.##",
];

const MAX_INSTRUCTIONS: usize = 15;
/// The droid jumps this many tiles forward.
const JUMP: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    And,
    Or,
    Not,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Register {
    /// Whether there is ground this many tiles ahead, counting from 1.
    Sensor(usize),
    Temp,
    Jump,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Instruction {
    op: Op,
    x: Register,
    y: Register,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Walk,
    Run,
}

impl Mode {
    fn range(self) -> usize {
        match self {
            Mode::Walk => 4,
            Mode::Run => 9,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Script {
    instructions: Vec<Instruction>,
    mode: Mode,
}

impl Script {
    /// Parses instructions ending in `WALK` or `RUN`, rejecting scripts the
    /// droid would refuse.
    fn parse(input: &str) -> Option<Self> {
        let mut lines: Vec<&str> = input.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        let mode = match lines.pop()? {
            "WALK" => Mode::Walk,
            "RUN" => Mode::Run,
            _ => return None,
        };
        let instructions = lines
            .into_iter()
            .map(|line| parse::from_str(line, Instruction::parser()).ok())
            .collect::<Option<Vec<_>>>()?;

        let in_range = |r: Register| !matches!(r, Register::Sensor(n) if n > mode.range());
        if instructions.len() > MAX_INSTRUCTIONS || !instructions.iter().all(|i| in_range(i.x)) {
            return None;
        }
        Some(Self { instructions, mode })
    }

    /// Whether the droid jumps, given `ground[i]` for the tile `i + 1` ahead.
    fn jumps(&self, ground: &[bool]) -> bool {
        let mut temp = false;
        let mut jump = false;
        for inst in &self.instructions {
            let x = match inst.x {
                Register::Sensor(n) => ground.get(n - 1).copied().unwrap_or(true),
                Register::Temp => temp,
                Register::Jump => jump,
            };
            let y = match inst.y {
                Register::Temp => &mut temp,
                _ => &mut jump,
            };
            *y = match inst.op {
                Op::And => x && *y,
                Op::Or => x || *y,
                Op::Not => !x,
            };
        }
        jump
    }

    /// Walks the droid across `hull` (`#` for ground). Past the end is all
    /// ground.
    fn crosses(&self, hull: &str) -> bool {
        let ground: Vec<bool> = hull.chars().map(|ch| ch == '#').collect();
        let mut pos = 0;
        while pos < ground.len() {
            if !ground[pos] {
                return false;
            }
            let ahead: Vec<bool> = (1..=self.mode.range())
                .map(|d| ground.get(pos + d).copied().unwrap_or(true))
                .collect();
            pos += if self.jumps(&ahead) { JUMP } else { 1 };
        }
        true
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Register::Sensor(n) => write!(f, "{}", char::from(b'A' + *n as u8 - 1)),
            Register::Temp => f.write_str("T"),
            Register::Jump => f.write_str("J"),
        }
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for inst in &self.instructions {
            let op = match inst.op {
                Op::And => "AND",
                Op::Or => "OR",
                Op::Not => "NOT",
            };
            writeln!(f, "{op} {} {}", inst.x, inst.y)?;
        }
        match self.mode {
            Mode::Walk => writeln!(f, "WALK"),
            Mode::Run => writeln!(f, "RUN"),
        }
    }
}

/// Parses `script` and checks it against every one of `hulls`.
fn validated(script: &str, hulls: &[&str]) -> Option<Script> {
    let script = Script::parse(script)?;
    if let Some(hull) = hulls.iter().find(|hull| !script.crosses(hull)) {
        debugln!("script falls into {hull}");
        return None;
    }
    Some(script)
}

/// Runs the droid with `script`, returning the hull damage it reports.
fn survey(input: &str, script: &str, hulls: &[&str]) -> Option<i64> {
    let script = validated(script, hulls)?;
    let mut machine: Machine = input.parse().ok()?;
    machine.push_ascii(&script.to_string());
    let outputs = machine.run_to_halt().ok()?;
    match outputs.last() {
        Some(&damage) if damage > 127 => Some(damage),
        _ => {
            debugln!("{}", ascii_output(&outputs));
            None
        }
    }
}

pub fn part_one(input: &str) -> Option<i64> {
    survey(input, WALK_SCRIPT, WALK_HULLS)
}

pub fn part_two(input: &str) -> Option<i64> {
    survey(input, RUN_SCRIPT, RUN_HULLS)
}

fn main() {
    let input = &advent_archive::read_file("inputs", 2019, 21);
    advent_archive::solve!(1, part_one, input);
    advent_archive::solve!(2, part_two, input);
}

mod parsing {
    use super::*;

    mod c {
        pub use combine::{
            parser::char::{char, string},
            *,
        };
    }

    use c::{ParseError, Parser, Stream};

    fn register<Input>() -> impl Parser<Input, Output = Register>
    where
        Input: Stream<Token = char>,
        Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
    {
        c::one_of("ABCDEFGHITJ".chars()).map(|ch| match ch {
            'T' => Register::Temp,
            'J' => Register::Jump,
            sensor => Register::Sensor((sensor as u8 - b'A') as usize + 1),
        })
    }

    impl Instruction {
        pub fn parser<Input>() -> impl Parser<Input, Output = Self>
        where
            Input: Stream<Token = char>,
            Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
        {
            let op = c::choice((
                c::string("AND").map(|_| Op::And),
                c::string("OR").map(|_| Op::Or),
                c::string("NOT").map(|_| Op::Not),
            ));
            let writable = c::choice((
                c::char('T').map(|_| Register::Temp),
                c::char('J').map(|_| Register::Jump),
            ));
            (op, c::char(' '), register(), c::char(' '), writable)
                .map(|(op, _, x, _, y)| Instruction { op, x, y })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_scripts() {
        let walk = Script::parse(WALK_SCRIPT).unwrap();
        assert_eq!(walk.mode, Mode::Walk);
        assert_eq!(walk.instructions.len(), 6);
        assert_eq!(
            walk.instructions[1],
            Instruction {
                op: Op::Not,
                x: Register::Sensor(2),
                y: Register::Temp
            }
        );
        assert_eq!(walk.to_string(), format!("{WALK_SCRIPT}\n"));

        assert!(Script::parse("NOT E J\nWALK").is_none());
        assert!(Script::parse("NOT E J\nRUN").is_some());
        assert!(Script::parse("NOT A B\nWALK").is_none());
        assert!(Script::parse("NOT A J").is_none());
    }

    #[test]
    fn jump_decision() {
        let script = Script::parse(
            "\
OR D T
AND A T
AND B T
AND C T
NOT T T
AND D T
OR T J
RUN",
        )
        .unwrap();
        assert!(script.jumps(&[false, true, true, true]));
        assert!(!script.jumps(&[true, true, true, true]));
    }

    #[test]
    fn test_part_one() {
        let walk = validated(WALK_SCRIPT, WALK_HULLS).unwrap();
        assert!(!walk.crosses("#####.#.##.#.####"));
        assert!(validated(WALK_SCRIPT, RUN_HULLS).is_none());
    }

    #[test]
    fn test_part_two() {
        assert!(validated(RUN_SCRIPT, RUN_HULLS).is_some());
        assert!(validated(RUN_SCRIPT, WALK_HULLS).is_some());
    }

    #[test]
    fn survey_refuses_a_falling_script() {
        // Reports damage 1000 to any script it is sent.
        let program = "104,1000,99";
        assert_eq!(survey(program, "AND A J\nWALK", WALK_HULLS), None);
        assert_eq!(survey(program, WALK_SCRIPT, WALK_HULLS), Some(1000));
    }
}
