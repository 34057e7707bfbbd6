//! 2018 Day 11: Chronal Charge

use rayon::prelude::*;

const SIZE: usize = 300;

fn power_level(x: usize, y: usize, serial: i32) -> i32 {
    let rack_id = x as i32 + 10;
    let power = (rack_id * y as i32 + serial) * rack_id;
    (power / 100) % 10 - 5
}

/// Summed-area table over the grid, 1-indexed with a zero border so
/// `sums[y][x]` is the total of every cell up to and including `(x, y)`.
struct Sums(Vec<Vec<i32>>);

impl Sums {
    fn new(serial: i32) -> Self {
        let mut sums = vec![vec![0; SIZE + 1]; SIZE + 1];
        for y in 1..=SIZE {
            for x in 1..=SIZE {
                sums[y][x] =
                    power_level(x, y, serial) + sums[y - 1][x] + sums[y][x - 1] - sums[y - 1][x - 1];
            }
        }
        Self(sums)
    }

    /// Total power of the `size` square with its top-left corner at `(x, y)`.
    fn square(&self, x: usize, y: usize, size: usize) -> i32 {
        let s = &self.0;
        let (x1, y1) = (x + size - 1, y + size - 1);
        s[y1][x1] - s[y - 1][x1] - s[y1][x - 1] + s[y - 1][x - 1]
    }

    /// The most powerful `size` square as `(power, x, y)`.
    fn best_square(&self, size: usize) -> (i32, usize, usize) {
        let last = SIZE - size + 1;
        (1..=last)
            .flat_map(|y| (1..=last).map(move |x| (x, y)))
            .map(|(x, y)| (self.square(x, y, size), x, y))
            .max_by_key(|&(power, _, _)| power)
            .unwrap_or((i32::MIN, 0, 0))
    }
}

fn parse(input: &str) -> Option<i32> {
    input.trim().parse().ok()
}

pub fn part_one(input: &str) -> Option<String> {
    let sums = Sums::new(parse(input)?);
    let (_, x, y) = sums.best_square(3);
    Some(format!("{x},{y}"))
}

pub fn part_two(input: &str) -> Option<String> {
    let sums = Sums::new(parse(input)?);
    let (_, x, y, size) = (1..=SIZE)
        .into_par_iter()
        .map(|size| {
            let (power, x, y) = sums.best_square(size);
            (power, x, y, size)
        })
        .max_by_key(|&(power, ..)| power)?;
    Some(format!("{x},{y},{size}"))
}

fn main() {
    let input = &advent_archive::read_file("inputs", 2018, 11);
    advent_archive::solve!(1, part_one, input);
    advent_archive::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_levels() {
        assert_eq!(power_level(3, 5, 8), 4);
        assert_eq!(power_level(122, 79, 57), -5);
        assert_eq!(power_level(217, 196, 39), 0);
        assert_eq!(power_level(101, 153, 71), 4);
    }

    #[test]
    fn test_part_one() {
        assert_eq!(part_one("18"), Some("33,45".to_owned()));
        assert_eq!(part_one("42"), Some("21,61".to_owned()));
    }

    #[test]
    fn test_part_two() {
        assert_eq!(part_two("18"), Some("90,269,16".to_owned()));
        assert_eq!(part_two("42"), Some("232,251,12".to_owned()));
    }

    #[test]
    fn square_totals() {
        let sums = Sums::new(18);
        assert_eq!(sums.square(33, 45, 3), 29);
        assert_eq!(sums.square(90, 269, 16), 113);
    }
}
