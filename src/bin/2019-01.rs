//! 2019 Day 1: The Tyranny of the Rocket Equation

fn parse(input: &str) -> Option<Vec<i64>> {
    input
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| l.trim().parse().ok())
        .collect()
}

fn fuel(mass: i64) -> i64 {
    (mass / 3 - 2).max(0)
}

/// Fuel for the module plus fuel for that fuel, until it needs none.
fn total_fuel(mass: i64) -> i64 {
    std::iter::successors(Some(fuel(mass)), |&f| Some(fuel(f)))
        .take_while(|&f| f > 0)
        .sum()
}

pub fn part_one(input: &str) -> Option<i64> {
    Some(parse(input)?.into_iter().map(fuel).sum())
}

pub fn part_two(input: &str) -> Option<i64> {
    Some(parse(input)?.into_iter().map(total_fuel).sum())
}

fn main() {
    let input = &advent_archive::read_file("inputs", 2019, 1);
    advent_archive::solve!(1, part_one, input);
    advent_archive::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_one() {
        assert_eq!(fuel(12), 2);
        assert_eq!(fuel(14), 2);
        assert_eq!(fuel(1969), 654);
        assert_eq!(fuel(100756), 33583);
        assert_eq!(part_one("12\n14\n"), Some(4));
    }

    #[test]
    fn test_part_two() {
        assert_eq!(total_fuel(14), 2);
        assert_eq!(total_fuel(1969), 966);
        assert_eq!(total_fuel(100756), 50346);
        assert_eq!(part_two("1969\n100756"), Some(51312));
    }
}
