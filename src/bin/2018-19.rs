//! 2018 Day 19: Go With The Flow

use advent_archive::{
    debugln,
    elfcode::{Cpu, Program, Word},
};

/// Where the program's main loop starts once its setup code has run.
const MAIN_LOOP: usize = 1;

pub fn part_one(input: &str) -> Option<Word> {
    let program = Program::parse(input)?;
    let mut cpu = Cpu::new(&program, [0; 6]);
    cpu.run();
    Some(cpu.registers[0])
}

fn divisor_sum(n: Word) -> Word {
    (1..)
        .take_while(|d| d * d <= n)
        .filter(|d| n % d == 0)
        .map(|d| if d * d == n { d } else { d + n / d })
        .sum()
}

/// The program sums the divisors of a large number the slow way. Let it
/// build that number, then do the sum here.
pub fn part_two(input: &str) -> Option<Word> {
    let program = Program::parse(input)?;
    let mut cpu = Cpu::new(&program, [1, 0, 0, 0, 0, 0]);

    while cpu.ip() != Some(MAIN_LOOP) {
        if !cpu.step() {
            return Some(cpu.registers[0]);
        }
    }

    let target = cpu.registers.into_iter().max()?;
    debugln!("summing the divisors of {target}");
    Some(divisor_sum(target))
}

fn main() {
    let input = &advent_archive::read_file("inputs", 2018, 19);
    advent_archive::solve!(1, part_one, input);
    advent_archive::solve!(2, part_two, input);
}
