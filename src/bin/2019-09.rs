//! 2019 Day 9: Sensor Boost

use advent_archive::{
    debugln,
    intcode::{Machine, Word},
};

const TEST_MODE: Word = 1;
const SENSOR_BOOST: Word = 2;

/// Runs BOOST in `mode`. More than one output means the self-test found
/// broken opcodes, which it lists.
fn boost(input: &str, mode: Word) -> Option<Word> {
    let mut machine: Machine = input.parse().ok()?;
    machine.push_input(mode);
    match machine.run_to_halt().ok()?.as_slice() {
        &[keycode] => Some(keycode),
        broken => {
            debugln!("malfunctioning opcodes: {broken:?}");
            None
        }
    }
}

pub fn part_one(input: &str) -> Option<Word> {
    boost(input, TEST_MODE)
}

pub fn part_two(input: &str) -> Option<Word> {
    boost(input, SENSOR_BOOST)
}

fn main() {
    let input = &advent_archive::read_file("inputs", 2019, 9);
    advent_archive::solve!(1, part_one, input);
    advent_archive::solve!(2, part_two, input);
}
