//! 2018 Day 2: Inventory Management System

use std::collections::HashMap;

use itertools::Itertools;

/// Whether some letter appears exactly twice, and whether some letter
/// appears exactly three times.
fn repeats(id: &str) -> (bool, bool) {
    let mut counts: HashMap<char, u32> = HashMap::new();
    for ch in id.chars() {
        *counts.entry(ch).or_default() += 1;
    }
    let twice = counts.values().any(|&n| n == 2);
    let thrice = counts.values().any(|&n| n == 3);
    (twice, thrice)
}

pub fn part_one(input: &str) -> Option<usize> {
    let (twos, threes) = input
        .lines()
        .map(repeats)
        .fold((0, 0), |(twos, threes), (two, three)| {
            (twos + usize::from(two), threes + usize::from(three))
        });
    Some(twos * threes)
}

/// The letters shared by the two ids that differ in exactly one position.
pub fn part_two(input: &str) -> Option<String> {
    let ids: Vec<&str> = input.lines().filter(|l| !l.is_empty()).collect();
    ids.iter().tuple_combinations().find_map(|(a, b)| {
        if a.len() != b.len() {
            return None;
        }
        let common: String = a
            .chars()
            .zip(b.chars())
            .filter(|(x, y)| x == y)
            .map(|(x, _)| x)
            .collect();
        (common.len() + 1 == a.len()).then_some(common)
    })
}

fn main() {
    let input = &advent_archive::read_file("inputs", 2018, 2);
    advent_archive::solve!(1, part_one, input);
    advent_archive::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_repeats() {
        assert_eq!(repeats("abcdef"), (false, false));
        assert_eq!(repeats("bababc"), (true, true));
        assert_eq!(repeats("abbcde"), (true, false));
        assert_eq!(repeats("abcccd"), (false, true));
        assert_eq!(repeats("ababab"), (false, true));
    }

    #[test]
    fn test_part_one() {
        let input = "abcdef\nbababc\nabbcde\nabcccd\naabcdd\nabcdee\nababab\n";
        assert_eq!(part_one(input), Some(12));
    }

    #[test]
    fn test_part_two() {
        let input = "abcde\nfghij\nklmno\npqrst\nfguij\naxcye\nwvxyz\n";
        assert_eq!(part_two(input), Some("fgij".to_owned()));
    }
}
