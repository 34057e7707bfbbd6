//! 2019 Day 19: Tractor Beam

use rayon::prelude::*;

use advent_archive::{
    helpers::pos::Pos,
    intcode::{Event, Machine, Word},
};

const SCAN: i32 = 50;
const SHIP: i32 = 100;
/// Rows to search before giving up on fitting the ship.
const MAX_ROW: i32 = 10_000;

trait Beam: Sync {
    fn pulls(&self, pos: Pos) -> bool;
}

/// The drone program. Every query runs a fresh copy.
struct Drone(Machine);

impl Beam for Drone {
    fn pulls(&self, pos: Pos) -> bool {
        let mut machine = self.0.clone();
        machine.push_input(Word::from(pos.x));
        machine.push_input(Word::from(pos.y));
        matches!(machine.run(), Ok(Event::Output(1)))
    }
}

fn affected(beam: &impl Beam, size: i32) -> usize {
    (0..size * size)
        .into_par_iter()
        .filter(|&i| beam.pulls(Pos::new(i % size, i / size)))
        .count()
}

/// Top-left corner of the nearest `size` square that fits in the beam.
///
/// Follows the beam's left edge down, checking the square that has its
/// bottom-left corner there.
fn closest_square(beam: &impl Beam, size: i32) -> Option<Pos> {
    let mut left = 0;
    for y in 0..MAX_ROW {
        let Some(x) = (left..=left + y).find(|&x| beam.pulls(Pos::new(x, y))) else {
            continue;
        };
        left = x;
        if y >= size - 1 && beam.pulls(Pos::new(x + size - 1, y - size + 1)) {
            return Some(Pos::new(x, y - size + 1));
        }
    }
    None
}

pub fn part_one(input: &str) -> Option<usize> {
    let drone = Drone(input.parse().ok()?);
    Some(affected(&drone, SCAN))
}

pub fn part_two(input: &str) -> Option<i32> {
    let drone = Drone(input.parse().ok()?);
    let corner = closest_square(&drone, SHIP)?;
    Some(corner.x * 10_000 + corner.y)
}

fn main() {
    let input = &advent_archive::read_file("inputs", 2019, 19);
    advent_archive::solve!(1, part_one, input);
    advent_archive::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    use advent_archive::helpers::grid::parse_sparse_with;

    struct Picture(HashSet<Pos>);

    impl Beam for Picture {
        fn pulls(&self, pos: Pos) -> bool {
            self.0.contains(&pos)
        }
    }

    /// Pulls everything between two slopes out of the emitter.
    struct Wedge;

    impl Beam for Wedge {
        fn pulls(&self, pos: Pos) -> bool {
            pos.x >= 0 && 10 * pos.x >= 7 * pos.y && 10 * pos.x <= 9 * pos.y
        }
    }

    #[test]
    fn test_part_one() {
        let picture = "\
#.........
.#........
..##......
...###....
....###...
.....####.
......####
......####
.......###
........##";
        let tiles = parse_sparse_with(picture, |ch| (ch == '#').then_some(()));
        let beam = Picture(tiles.into_keys().collect());
        assert_eq!(affected(&beam, 10), 27);
        assert_eq!(affected(&Wedge, SCAN), 250);
    }

    #[test]
    fn test_part_two() {
        assert_eq!(closest_square(&Wedge, 3), Some(Pos::new(14, 18)));
        assert_eq!(closest_square(&Wedge, 10), Some(Pos::new(61, 78)));
    }

    #[test]
    fn drone_program() {
        // Reads x and y, then reports whether x equals y.
        let drone = Drone("3,11,3,12,8,11,12,13,4,13,99,0,0,0".parse().unwrap());
        assert!(drone.pulls(Pos::new(4, 4)));
        assert!(!drone.pulls(Pos::new(4, 5)));
    }
}
