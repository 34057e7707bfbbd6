//! 2018 Day 1: Chronal Calibration

use std::collections::HashSet;

use advent_archive::debugln;

/// Gives up looking for a repeated frequency after this many passes over
/// the changes.
const MAX_PASSES: usize = 1_000;

fn parse_changes(input: &str) -> Option<Vec<i64>> {
    input
        .split(|ch: char| ch == ',' || ch.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| word.parse().ok())
        .collect()
}

pub fn part_one(input: &str) -> Option<i64> {
    Some(parse_changes(input)?.iter().sum())
}

/// The first running frequency reached twice, cycling through the changes.
pub fn part_two(input: &str) -> Option<i64> {
    let changes = parse_changes(input)?;
    if changes.is_empty() {
        return None;
    }

    let mut seen = HashSet::from([0]);
    let mut frequency = 0;
    for (i, change) in changes.iter().cycle().enumerate() {
        if i >= changes.len() * MAX_PASSES {
            debugln!("no repeat after {MAX_PASSES} passes");
            return None;
        }
        frequency += change;
        if !seen.insert(frequency) {
            return Some(frequency);
        }
    }
    unreachable!("cycling a non-empty list never ends")
}

fn main() {
    let input = &advent_archive::read_file("inputs", 2018, 1);
    advent_archive::solve!(1, part_one, input);
    advent_archive::solve!(2, part_two, input);
}
