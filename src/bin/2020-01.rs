//! 2020 Day 1: Report Repair

use itertools::Itertools;

const TARGET: u32 = 2020;

fn parse_entries(input: &str) -> Option<Vec<u32>> {
    input
        .split_whitespace()
        .map(|word| word.parse().ok())
        .collect()
}

/// The product of the first `n` entries that sum to [`TARGET`].
fn product_of_combination(entries: &[u32], n: usize) -> Option<u32> {
    entries
        .iter()
        .copied()
        .combinations(n)
        .find(|combo| combo.iter().sum::<u32>() == TARGET)
        .map(|combo| combo.iter().product())
}

pub fn part_one(input: &str) -> Option<u32> {
    product_of_combination(&parse_entries(input)?, 2)
}

pub fn part_two(input: &str) -> Option<u32> {
    product_of_combination(&parse_entries(input)?, 3)
}

fn main() {
    let input = &advent_archive::read_file("inputs", 2020, 1);
    advent_archive::solve!(1, part_one, input);
    advent_archive::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "1721\n979\n366\n299\n675\n1456\n";

    #[test]
    fn test_part_one() {
        assert_eq!(part_one(EXAMPLE), Some(514579));
    }

    #[test]
    fn test_part_two() {
        assert_eq!(part_two(EXAMPLE), Some(241861950));
    }

    #[test]
    fn no_combination() {
        assert_eq!(part_one("1\n2\n"), None);
    }
}
