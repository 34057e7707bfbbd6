//! 2018 Day 21: Chronal Conversion

use std::collections::HashSet;

use advent_archive::{
    debugln,
    elfcode::{Cpu, Opcode, Program, Word},
};

/// The only place the program reads register 0: an `eqrr` that halts when
/// the register matches. Returns its index and the register it compares
/// against.
fn halting_check(program: &Program) -> Option<(usize, usize)> {
    program
        .instructions
        .iter()
        .enumerate()
        .find_map(|(i, inst)| match (inst.op, inst.a, inst.b) {
            (Opcode::Eqrr, 0, other) | (Opcode::Eqrr, other, 0) => {
                Some((i, usize::try_from(other).ok()?))
            }
            _ => None,
        })
}

/// Every value the halting check compares register 0 against, in order,
/// up to the first repeat.
fn compared_values(program: &Program) -> Option<Vec<Word>> {
    let (check, other) = halting_check(program)?;

    // Nothing matches a negative register 0, so the program keeps cycling.
    let mut cpu = Cpu::new(program, [-1, 0, 0, 0, 0, 0]);
    let mut seen = HashSet::new();
    let mut values = Vec::new();
    loop {
        if cpu.ip() == Some(check) {
            let value = *cpu.registers.get(other)?;
            if !seen.insert(value) {
                debugln!("{value} repeats after {} values", values.len());
                return Some(values);
            }
            values.push(value);
        }
        if !cpu.step() {
            return Some(values);
        }
    }
}

/// The register 0 value halting the program soonest.
pub fn part_one(input: &str) -> Option<Word> {
    let program = Program::parse(input)?;
    let (check, other) = halting_check(&program)?;
    let mut cpu = Cpu::new(&program, [-1, 0, 0, 0, 0, 0]);
    while cpu.ip() != Some(check) {
        if !cpu.step() {
            return None;
        }
    }
    cpu.registers.get(other).copied()
}

/// The register 0 value halting the program last, before the compared
/// values start repeating.
pub fn part_two(input: &str) -> Option<Word> {
    let program = Program::parse(input)?;
    compared_values(&program)?.last().copied()
}

fn main() {
    let input = &advent_archive::read_file("inputs", 2018, 21);
    advent_archive::solve!(1, part_one, input);
    advent_archive::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    // Counts up by 3 modulo 8, halting once the count matches register 0.
    const COUNTER: &str = "\
#ip 1
seti 0 0 5
addi 5 3 5
bani 5 7 5
eqrr 5 0 4
addr 4 1 1
seti 0 0 1";

    #[test]
    fn test_part_one() {
        assert_eq!(part_one(COUNTER), Some(3));
    }

    #[test]
    fn test_part_two() {
        assert_eq!(part_two(COUNTER), Some(0));
    }

    #[test]
    fn every_value_until_repeat() {
        let program = Program::parse(COUNTER).unwrap();
        assert_eq!(
            compared_values(&program),
            Some(vec![3, 6, 1, 4, 7, 2, 5, 0])
        );
        assert_eq!(halting_check(&program), Some((3, 5)));
    }

    #[test]
    fn halting_value_halts() {
        let program = Program::parse(COUNTER).unwrap();
        let mut cpu = Cpu::new(&program, [4, 0, 0, 0, 0, 0]);
        cpu.run();
        assert_eq!(cpu.registers[5], 4);
    }
}
