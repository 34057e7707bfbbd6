//! 2019 Day 5: Sunny with a Chance of Asteroids

use advent_archive::{
    debugln,
    intcode::{Machine, Word},
};

const AIR_CONDITIONER: Word = 1;
const THERMAL_RADIATORS: Word = 5;

/// Runs the diagnostic for `system`, returning its final output. Every
/// output before it is a test result and must be zero.
fn diagnostic(input: &str, system: Word) -> Option<Word> {
    let mut machine: Machine = input.parse().ok()?;
    machine.push_input(system);
    let outputs = machine.run_to_halt().ok()?;
    let (&code, checks) = outputs.split_last()?;
    if let Some(failed) = checks.iter().position(|&check| check != 0) {
        debugln!("diagnostic check {failed} failed with {}", checks[failed]);
        return None;
    }
    Some(code)
}

pub fn part_one(input: &str) -> Option<Word> {
    diagnostic(input, AIR_CONDITIONER)
}

pub fn part_two(input: &str) -> Option<Word> {
    diagnostic(input, THERMAL_RADIATORS)
}

fn main() {
    let input = &advent_archive::read_file("inputs", 2019, 5);
    advent_archive::solve!(1, part_one, input);
    advent_archive::solve!(2, part_two, input);
}
