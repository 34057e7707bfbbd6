//! 2018 Day 20: A Regular Map

use std::collections::{HashMap, HashSet};

use pathfinding::prelude::dijkstra_all;

use advent_archive::helpers::pos::{Pos, DOWN, LEFT, RIGHT, UP};

const FAR_AWAY: u32 = 1000;

type Doors = HashMap<Pos, HashSet<Pos>>;

/// Walks every route the expression describes, recording each door passed.
fn map_doors(regex: &str) -> Option<Doors> {
    let mut doors = Doors::new();
    let mut branches: Vec<Pos> = Vec::new();
    let mut pos = Pos::ZERO;

    for ch in regex.trim().chars() {
        let dir = match ch {
            'N' => UP,
            'E' => RIGHT,
            'S' => DOWN,
            'W' => LEFT,
            '(' => {
                branches.push(pos);
                continue;
            }
            '|' => {
                pos = *branches.last()?;
                continue;
            }
            ')' => {
                pos = branches.pop()?;
                continue;
            }
            '^' | '$' => continue,
            _ => return None,
        };
        let next = pos + dir;
        doors.entry(pos).or_default().insert(next);
        doors.entry(next).or_default().insert(pos);
        pos = next;
    }

    branches.is_empty().then_some(doors)
}

/// Doors needed to reach each room other than the start.
fn distances(doors: &Doors) -> HashMap<Pos, u32> {
    let successors = |room: &Pos| {
        doors
            .get(room)
            .into_iter()
            .flatten()
            .map(|&next| (next, 1))
            .collect::<Vec<_>>()
    };
    dijkstra_all(&Pos::ZERO, successors)
        .into_iter()
        .map(|(room, (_, d))| (room, d))
        .collect()
}

fn rooms_at_least(input: &str, threshold: u32) -> Option<usize> {
    let doors = map_doors(input)?;
    Some(distances(&doors).values().filter(|&&d| d >= threshold).count())
}

pub fn part_one(input: &str) -> Option<u32> {
    let doors = map_doors(input)?;
    Some(distances(&doors).into_values().max().unwrap_or(0))
}

pub fn part_two(input: &str) -> Option<usize> {
    rooms_at_least(input, FAR_AWAY)
}

fn main() {
    let input = &advent_archive::read_file("inputs", 2018, 20);
    advent_archive::solve!(1, part_one, input);
    advent_archive::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_one() {
        assert_eq!(part_one("^WNE$"), Some(3));
        assert_eq!(part_one("^ENWWW(NEEE|SSE(EE|N))$"), Some(10));
        assert_eq!(
            part_one("^ENNWSWW(NEWS|)SSSEEN(WNSE|)EE(SWEN|)NNN$"),
            Some(18)
        );
        assert_eq!(
            part_one("^ESSWWN(E|NNENN(EESS(WNSE|)SSS|WWWSSSSE(SW|NNNE)))$"),
            Some(23)
        );
        assert_eq!(
            part_one("^WSSEESWWWNW(S|NENNEEEENN(ESSSSW(NWSW|SSEN)|WSWWN(E|WWS(E|SS))))$"),
            Some(31)
        );
    }

    #[test]
    fn test_part_two() {
        // Rooms 1 to 3 doors away along a single corridor.
        assert_eq!(rooms_at_least("^WNE$", 2), Some(2));
        assert_eq!(rooms_at_least("^ENWWW(NEEE|SSE(EE|N))$", 10), Some(1));
        assert_eq!(part_two("^WNE$"), Some(0));
    }

    #[test]
    fn unbalanced() {
        assert_eq!(part_one("^N(E|W$"), None);
        assert_eq!(part_one("^N)$"), None);
    }
}
