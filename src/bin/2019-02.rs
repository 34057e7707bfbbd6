//! 2019 Day 2: 1202 Program Alarm

use advent_archive::intcode::{self, Machine, Word};

const TARGET: Word = 19_690_720;

/// Runs the program with `noun` and `verb` patched into addresses 1 and 2,
/// returning what ends up at address 0.
fn run_with(program: &[Word], noun: Word, verb: Word) -> intcode::Result<Word> {
    let mut machine = Machine::new(program.to_vec());
    machine.write(1, noun)?;
    machine.write(2, verb)?;
    machine.run_to_halt()?;
    Ok(machine.read(0))
}

/// The first `(noun, verb)` pair, both below 100, producing `target`.
fn find_inputs(program: &[Word], target: Word) -> Option<(Word, Word)> {
    (0..100)
        .flat_map(|noun| (0..100).map(move |verb| (noun, verb)))
        .find(|&(noun, verb)| run_with(program, noun, verb).ok() == Some(target))
}

pub fn part_one(input: &str) -> Option<Word> {
    let program = intcode::parse_program(input).ok()?;
    run_with(&program, 12, 2).ok()
}

pub fn part_two(input: &str) -> Option<Word> {
    let program = intcode::parse_program(input).ok()?;
    let (noun, verb) = find_inputs(&program, TARGET)?;
    Some(100 * noun + verb)
}

fn main() {
    let input = &advent_archive::read_file("inputs", 2019, 2);
    advent_archive::solve!(1, part_one, input);
    advent_archive::solve!(2, part_two, input);
}
