//! 2018 Day 16: Chronal Classification

use std::collections::BTreeSet;

use advent_archive::{
    debugln,
    elfcode::{Opcode, Word},
    helpers::{parse, Itertools},
};

type Registers = [Word; 4];

/// An unknown instruction, `[opcode number, a, b, c]`.
type RawInstruction = [Word; 4];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Sample {
    before: Registers,
    instruction: RawInstruction,
    after: Registers,
}

impl Sample {
    fn matches(&self, op: Opcode) -> bool {
        let [_, a, b, c] = self.instruction;
        op.apply(&self.before, a, b, c) == Some(self.after)
    }

    fn number(&self) -> usize {
        self.instruction[0] as usize
    }
}

fn parse_input(input: &str) -> Option<(Vec<Sample>, Vec<RawInstruction>)> {
    let mut samples = Vec::new();
    let mut program = Vec::new();
    let blocks = input.lines().map(str::trim).split_by(|l| l.is_empty());
    for block in &blocks {
        let block: Vec<&str> = block.collect();
        if block.is_empty() {
            continue;
        }
        if block[0].starts_with("Before") {
            samples.push(parse::from_str(&block.join("\n"), Sample::parser()).ok()?);
        } else {
            for line in block {
                program.push(parse::from_str(line, parsing::raw_instruction()).ok()?);
            }
        }
    }
    Some((samples, program))
}

/// Works out which opcode each number stands for, by repeatedly fixing the
/// numbers only one opcode still fits.
fn deduce(samples: &[Sample]) -> Option<[Opcode; 16]> {
    let mut candidates: Vec<BTreeSet<Opcode>> = vec![Opcode::ALL.into_iter().collect(); 16];
    for sample in samples {
        candidates
            .get_mut(sample.number())?
            .retain(|&op| sample.matches(op));
    }

    let mut known: [Option<Opcode>; 16] = [None; 16];
    while known.iter().any(Option::is_none) {
        let (number, op) = candidates
            .iter()
            .enumerate()
            .find(|(n, ops)| known[*n].is_none() && ops.len() == 1)
            .and_then(|(n, ops)| Some((n, *ops.first()?)))?;
        debugln!("{number} is {op}");
        known[number] = Some(op);
        for ops in &mut candidates {
            ops.remove(&op);
        }
    }

    let mut table = [Opcode::Addr; 16];
    for (slot, op) in table.iter_mut().zip(known) {
        *slot = op?;
    }
    Some(table)
}

/// The number of samples that fit three or more opcodes.
pub fn part_one(input: &str) -> Option<usize> {
    let (samples, _) = parse_input(input)?;
    Some(
        samples
            .iter()
            .filter(|s| Opcode::ALL.into_iter().filter(|&op| s.matches(op)).count() >= 3)
            .count(),
    )
}

pub fn part_two(input: &str) -> Option<Word> {
    let (samples, program) = parse_input(input)?;
    let table = deduce(&samples)?;

    let mut registers: Registers = [0; 4];
    for [number, a, b, c] in program {
        let op = table.get(usize::try_from(number).ok()?)?;
        registers = op.apply(&registers, a, b, c)?;
    }
    Some(registers[0])
}

fn main() {
    let input = &advent_archive::read_file("inputs", 2018, 16);
    advent_archive::solve!(1, part_one, input);
    advent_archive::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
Before: [3, 2, 1, 1]
9 2 1 2
After:  [3, 2, 2, 1]



9 0 0 1
";

    /// Small deterministic generator for building samples.
    struct Lcg(u64);

    impl Lcg {
        fn below(&mut self, n: u64) -> Word {
            self.0 = self
                .0
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            ((self.0 >> 33) % n) as Word
        }
    }

    /// A shuffled opcode table and a sample set generated from it.
    fn generated_samples() -> ([Opcode; 16], Vec<Sample>) {
        let mut table = Opcode::ALL;
        table.reverse();
        table.swap(0, 7);
        table.swap(3, 12);

        let mut rng = Lcg(2018);
        let mut samples = Vec::new();
        for _ in 0..60 {
            for (number, op) in table.iter().enumerate() {
                let before = [rng.below(4), rng.below(4), rng.below(4), rng.below(4)];
                let (a, b, c) = (rng.below(4), rng.below(4), rng.below(4));
                let after = op.apply(&before, a, b, c).unwrap();
                samples.push(Sample {
                    before,
                    instruction: [number as Word, a, b, c],
                    after,
                });
            }
        }
        (table, samples)
    }

    #[test]
    fn test_part_one() {
        assert_eq!(part_one(EXAMPLE), Some(1));
    }

    #[test]
    fn parse_blocks() {
        let (samples, program) = parse_input(EXAMPLE).unwrap();
        assert_eq!(
            samples,
            [Sample {
                before: [3, 2, 1, 1],
                instruction: [9, 2, 1, 2],
                after: [3, 2, 2, 1],
            }]
        );
        assert_eq!(program, [[9, 0, 0, 1]]);
    }

    #[test]
    fn deduces_opcode_numbers() {
        let (table, samples) = generated_samples();
        assert_eq!(deduce(&samples), Some(table));
    }

    #[test]
    fn test_part_two() {
        let (table, samples) = generated_samples();
        let number = |op: Opcode| table.iter().position(|&t| t == op).unwrap();

        let mut input = String::new();
        for s in &samples {
            let [n, a, b, c] = s.instruction;
            input += &format!(
                "Before: {:?}\n{n} {a} {b} {c}\nAfter:  {:?}\n\n",
                s.before, s.after
            );
        }
        input += "\n\n";
        // r0 = 6 * 7
        input += &format!("{} 6 0 1\n", number(Opcode::Seti));
        input += &format!("{} 1 7 0\n", number(Opcode::Muli));

        assert_eq!(part_two(&input), Some(42));
    }
}

mod parsing {
    use super::*;

    mod c {
        pub use combine::{
            error::StreamError,
            parser::char::{newline, spaces, string},
            stream::StreamErrorFor,
            *,
        };
    }

    use c::{ParseError, Parser, Stream, StreamError};

    fn registers<Input>() -> impl Parser<Input, Output = Registers>
    where
        Input: Stream<Token = char>,
        Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
    {
        c::between(
            c::token('['),
            c::token(']'),
            c::sep_by1::<Vec<Word>, _, _, _>(
                parse::padded_integer::<_, Word>(),
                c::token(','),
            ),
        )
        .and_then(|values| {
            Registers::try_from(values)
                .map_err(|_| c::StreamErrorFor::<Input>::expected_static_message("four registers"))
        })
    }

    pub(super) fn raw_instruction<Input>() -> impl Parser<Input, Output = RawInstruction>
    where
        Input: Stream<Token = char>,
        Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
    {
        (
            parse::decimal_integer(),
            parse::padded_integer(),
            parse::padded_integer(),
            parse::padded_integer(),
        )
            .map(|(n, a, b, c)| [n, a, b, c])
    }

    impl Sample {
        pub fn parser<Input>() -> impl Parser<Input, Output = Self>
        where
            Input: Stream<Token = char>,
            Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
        {
            (
                c::string("Before:").skip(c::spaces()).with(registers()),
                c::newline().with(raw_instruction()),
                c::newline()
                    .with(c::string("After:"))
                    .skip(c::spaces())
                    .with(registers()),
            )
                .map(|(before, instruction, after)| Sample {
                    before,
                    instruction,
                    after,
                })
        }
    }
}
