//! 2019 Day 4: Secure Container

use itertools::Itertools;

fn digits(n: u32) -> Vec<u8> {
    n.to_string().bytes().map(|b| b - b'0').collect()
}

/// Lengths of the runs of equal digits, if the digits never decrease.
fn runs(n: u32) -> Option<Vec<usize>> {
    let digits = digits(n);
    if digits.iter().tuple_windows().any(|(a, b)| a > b) {
        return None;
    }
    Some(
        digits
            .iter()
            .dedup_with_count()
            .map(|(count, _)| count)
            .collect(),
    )
}

fn is_candidate(n: u32) -> bool {
    runs(n).map_or(false, |runs| runs.iter().any(|&len| len >= 2))
}

fn has_exact_pair(n: u32) -> bool {
    runs(n).map_or(false, |runs| runs.contains(&2))
}

fn parse(input: &str) -> Option<(u32, u32)> {
    let (lo, hi) = input.trim().split_once('-')?;
    Some((lo.parse().ok()?, hi.parse().ok()?))
}

pub fn part_one(input: &str) -> Option<usize> {
    let (lo, hi) = parse(input)?;
    Some((lo..=hi).filter(|&n| is_candidate(n)).count())
}

pub fn part_two(input: &str) -> Option<usize> {
    let (lo, hi) = parse(input)?;
    Some((lo..=hi).filter(|&n| has_exact_pair(n)).count())
}

fn main() {
    let input = &advent_archive::read_file("inputs", 2019, 4);
    advent_archive::solve!(1, part_one, input);
    advent_archive::solve!(2, part_two, input);
}
