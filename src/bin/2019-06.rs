//! 2019 Day 6: Universal Orbit Map

use std::collections::HashMap;

/// Each object mapped to the object it orbits.
type Orbits<'a> = HashMap<&'a str, &'a str>;

fn parse(input: &str) -> Option<Orbits<'_>> {
    input
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(|line| {
            let (center, satellite) = line.split_once(')')?;
            Some((satellite, center))
        })
        .collect()
}

/// Every object `object` orbits, nearest first.
fn ancestors<'a>(orbits: &Orbits<'a>, object: &'a str) -> Vec<&'a str> {
    std::iter::successors(orbits.get(object).copied(), |o| orbits.get(o).copied())
        .take(orbits.len())
        .collect()
}

pub fn part_one(input: &str) -> Option<usize> {
    let orbits = parse(input)?;
    Some(orbits.keys().map(|&o| ancestors(&orbits, o).len()).sum())
}

/// Orbital transfers needed to move from what `YOU` orbit to what `SAN`
/// orbits.
pub fn part_two(input: &str) -> Option<usize> {
    let orbits = parse(input)?;
    let you = ancestors(&orbits, "YOU");
    let san = ancestors(&orbits, "SAN");

    let depth: HashMap<&str, usize> = you.iter().enumerate().map(|(d, &o)| (o, d)).collect();
    san.iter()
        .enumerate()
        .find_map(|(d, o)| depth.get(o).map(|&other| d + other))
}

fn main() {
    let input = &advent_archive::read_file("inputs", 2019, 6);
    advent_archive::solve!(1, part_one, input);
    advent_archive::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "COM)B\nB)C\nC)D\nD)E\nE)F\nB)G\nG)H\nD)I\nE)J\nJ)K\nK)L";

    #[test]
    fn test_part_one() {
        assert_eq!(part_one(EXAMPLE), Some(42));
    }

    #[test]
    fn test_part_two() {
        let input = format!("{EXAMPLE}\nK)YOU\nI)SAN");
        assert_eq!(part_two(&input), Some(4));
        assert_eq!(part_two(EXAMPLE), None);
    }
}
