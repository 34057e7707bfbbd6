//! 2019 Day 24: Planet of Discord

use std::collections::{HashMap, HashSet};

const SIZE: usize = 5;
const CELLS: usize = SIZE * SIZE;
const CENTRE: usize = CELLS / 2;
const MINUTES: usize = 200;

/// One bit per tile in reading order, which is also the biodiversity
/// rating.
type Bugs = u32;

fn parse(input: &str) -> Option<Bugs> {
    let tiles: Vec<char> = input.chars().filter(|ch| !ch.is_whitespace()).collect();
    if tiles.len() != CELLS {
        return None;
    }
    tiles.iter().enumerate().try_fold(0, |bugs, (i, &ch)| match ch {
        '#' => Some(bugs | 1 << i),
        '.' => Some(bugs),
        _ => None,
    })
}

fn has_bug(bugs: Bugs, cell: usize) -> bool {
    bugs & 1 << cell != 0
}

fn lives(bug: bool, adjacent: usize) -> bool {
    adjacent == 1 || (!bug && adjacent == 2)
}

fn flat_neighbours(cell: usize) -> impl Iterator<Item = usize> {
    let (row, col) = (cell / SIZE, cell % SIZE);
    [
        (row > 0).then(|| cell - SIZE),
        (row + 1 < SIZE).then(|| cell + SIZE),
        (col > 0).then(|| cell - 1),
        (col + 1 < SIZE).then(|| cell + 1),
    ]
    .into_iter()
    .flatten()
}

fn minute(bugs: Bugs) -> Bugs {
    (0..CELLS)
        .filter(|&cell| {
            let adjacent = flat_neighbours(cell).filter(|&n| has_bug(bugs, n)).count();
            lives(has_bug(bugs, cell), adjacent)
        })
        .fold(0, |next, cell| next | 1 << cell)
}

fn first_repeat(mut bugs: Bugs) -> Bugs {
    let mut seen = HashSet::new();
    while seen.insert(bugs) {
        bugs = minute(bugs);
    }
    bugs
}

/// Neighbours of `cell` on recursive grids, as `(level offset, cell)`.
/// Positive offsets lead into the grid inside the centre tile.
fn recursive_neighbours(cell: usize) -> Vec<(i32, usize)> {
    let (row, col) = (cell / SIZE, cell % SIZE);
    let edge = |pick: fn(usize) -> usize| (0..SIZE).map(move |i| (1, pick(i)));
    let mut out = Vec::new();

    // Up.
    if row == 0 {
        out.push((-1, CENTRE - SIZE));
    } else if cell - SIZE == CENTRE {
        out.extend(edge(|i| (SIZE - 1) * SIZE + i));
    } else {
        out.push((0, cell - SIZE));
    }
    // Down.
    if row == SIZE - 1 {
        out.push((-1, CENTRE + SIZE));
    } else if cell + SIZE == CENTRE {
        out.extend(edge(|i| i));
    } else {
        out.push((0, cell + SIZE));
    }
    // Left.
    if col == 0 {
        out.push((-1, CENTRE - 1));
    } else if cell - 1 == CENTRE {
        out.extend(edge(|i| i * SIZE + SIZE - 1));
    } else {
        out.push((0, cell - 1));
    }
    // Right.
    if col == SIZE - 1 {
        out.push((-1, CENTRE + 1));
    } else if cell + 1 == CENTRE {
        out.extend(edge(|i| i * SIZE));
    } else {
        out.push((0, cell + 1));
    }
    out
}

#[derive(Debug, Clone)]
struct Recursive {
    levels: HashMap<i32, Bugs>,
    links: Vec<Vec<(i32, usize)>>,
}

impl Recursive {
    fn new(bugs: Bugs) -> Self {
        Self {
            levels: HashMap::from([(0, bugs & !(1 << CENTRE))]),
            links: (0..CELLS).map(recursive_neighbours).collect(),
        }
    }

    fn minute(&mut self) {
        let min = self.levels.keys().min().copied().unwrap_or(0) - 1;
        let max = self.levels.keys().max().copied().unwrap_or(0) + 1;
        let level = |depth: i32| self.levels.get(&depth).copied().unwrap_or(0);

        let next: HashMap<i32, Bugs> = (min..=max)
            .map(|depth| {
                let bugs = level(depth);
                let next = (0..CELLS)
                    .filter(|&cell| cell != CENTRE)
                    .filter(|&cell| {
                        let adjacent = self.links[cell]
                            .iter()
                            .filter(|&&(offset, n)| has_bug(level(depth + offset), n))
                            .count();
                        lives(has_bug(bugs, cell), adjacent)
                    })
                    .fold(0, |next, cell| next | 1 << cell);
                (depth, next)
            })
            .filter(|&(_, bugs)| bugs != 0)
            .collect();
        self.levels = next;
    }

    fn count(&self) -> u32 {
        self.levels.values().map(|bugs| bugs.count_ones()).sum()
    }
}

fn bugs_after(bugs: Bugs, minutes: usize) -> u32 {
    let mut grids = Recursive::new(bugs);
    for _ in 0..minutes {
        grids.minute();
    }
    grids.count()
}

pub fn part_one(input: &str) -> Option<Bugs> {
    Some(first_repeat(parse(input)?))
}

pub fn part_two(input: &str) -> Option<u32> {
    Some(bugs_after(parse(input)?, MINUTES))
}

fn main() {
    let input = &advent_archive::read_file("inputs", 2019, 24);
    advent_archive::solve!(1, part_one, input);
    advent_archive::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
....#
#..#.
#..##
..#..
#....";

    #[test]
    fn one_minute() {
        let after = parse(
            "\
#..#.
####.
###.#
##.##
.##..",
        );
        assert_eq!(Some(minute(parse(EXAMPLE).unwrap())), after);
    }

    #[test]
    fn test_part_one() {
        assert_eq!(part_one(EXAMPLE), Some(2129920));
    }

    #[test]
    fn test_part_two() {
        assert_eq!(bugs_after(parse(EXAMPLE).unwrap(), 10), 99);
    }

    #[test]
    fn links_are_symmetric() {
        for cell in (0..CELLS).filter(|&c| c != CENTRE) {
            for &(offset, n) in &recursive_neighbours(cell) {
                assert!(recursive_neighbours(n).contains(&(-offset, cell)));
            }
        }
        assert_eq!(recursive_neighbours(0).len(), 4);
        assert_eq!(recursive_neighbours(7).len(), 8);
    }
}
