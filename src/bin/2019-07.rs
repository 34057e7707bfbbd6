//! 2019 Day 7: Amplification Circuit

use itertools::Itertools;

use advent_archive::intcode::{self, Event, Machine, Word};

const AMPLIFIERS: usize = 5;

/// Sends `0` through the amplifiers, feeding E's output back into A until
/// they halt. Returns the last signal E produced.
fn signal(program: &[Word], phases: &[Word]) -> intcode::Result<Option<Word>> {
    let mut amps: Vec<Machine> = phases
        .iter()
        .map(|&phase| {
            let mut amp = Machine::new(program.to_vec());
            amp.push_input(phase);
            amp
        })
        .collect();

    let mut signal = 0;
    let mut last_from_e = None;
    loop {
        for (i, amp) in amps.iter_mut().enumerate() {
            amp.push_input(signal);
            match amp.run()? {
                Event::Output(out) => signal = out,
                Event::Halted | Event::AwaitingInput => return Ok(last_from_e),
            }
            if i == AMPLIFIERS - 1 {
                last_from_e = Some(signal);
            }
        }
    }
}

fn max_signal(input: &str, phases: std::ops::Range<Word>) -> Option<Word> {
    let program = intcode::parse_program(input).ok()?;
    phases
        .permutations(AMPLIFIERS)
        .filter_map(|order| signal(&program, &order).ok().flatten())
        .max()
}

pub fn part_one(input: &str) -> Option<Word> {
    max_signal(input, 0..5)
}

pub fn part_two(input: &str) -> Option<Word> {
    max_signal(input, 5..10)
}

fn main() {
    let input = &advent_archive::read_file("inputs", 2019, 7);
    advent_archive::solve!(1, part_one, input);
    advent_archive::solve!(2, part_two, input);
}
