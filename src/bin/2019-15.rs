//! 2019 Day 15: Oxygen System

use std::collections::HashSet;

use pathfinding::prelude::{bfs, dijkstra_all};

use advent_archive::{
    debugln,
    helpers::{
        grid::{self, SparseGrid},
        pos::{neighbours, Pos, DOWN, LEFT, RIGHT, UP},
    },
    intcode::{Event, Machine, Word},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Wall,
    Moved,
    FoundOxygen,
}

/// The repair droid, as far as the search is concerned.
trait Droid {
    /// Tries to move one step in `dir`. Returns `None` if the droid stops
    /// responding.
    fn step(&mut self, dir: Pos) -> Option<Status>;
}

fn command(dir: Pos) -> Word {
    match (dir.x, dir.y) {
        (0, -1) => 1,
        (0, 1) => 2,
        (-1, 0) => 3,
        _ => 4,
    }
}

impl Droid for Machine {
    fn step(&mut self, dir: Pos) -> Option<Status> {
        self.push_input(command(dir));
        match self.run().ok()? {
            Event::Output(0) => Some(Status::Wall),
            Event::Output(1) => Some(Status::Moved),
            Event::Output(2) => Some(Status::FoundOxygen),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
struct Map {
    open: HashSet<Pos>,
    walls: HashSet<Pos>,
    oxygen: Option<Pos>,
}

impl Map {
    /// Walks the droid down every corridor and back, depth first.
    fn explore(droid: &mut impl Droid) -> Option<Self> {
        let mut map = Map::default();
        map.open.insert(Pos::ZERO);
        map.visit(droid, Pos::ZERO)?;
        Some(map)
    }

    fn visit(&mut self, droid: &mut impl Droid, pos: Pos) -> Option<()> {
        for dir in [UP, DOWN, LEFT, RIGHT] {
            let next = pos + dir;
            if self.open.contains(&next) || self.walls.contains(&next) {
                continue;
            }
            match droid.step(dir)? {
                Status::Wall => {
                    self.walls.insert(next);
                    continue;
                }
                Status::FoundOxygen => self.oxygen = Some(next),
                Status::Moved => {}
            }
            self.open.insert(next);
            self.visit(droid, next)?;
            // Step back to where we were.
            droid.step(-dir)?;
        }
        Some(())
    }

    fn successors(&self, pos: &Pos) -> Vec<(Pos, u32)> {
        neighbours(*pos)
            .filter(|n| self.open.contains(n))
            .map(|n| (n, 1))
            .collect()
    }

    fn render(&self) -> String {
        let tiles: SparseGrid<char> = self
            .walls
            .iter()
            .map(|&w| (w, '#'))
            .chain(self.open.iter().map(|&p| (p, '.')))
            .collect();
        grid::render(&tiles, |pos, tile| {
            if Some(pos) == self.oxygen {
                'O'
            } else if pos == Pos::ZERO {
                'D'
            } else {
                tile.copied().unwrap_or(' ')
            }
        })
    }
}

fn explore(input: &str) -> Option<Map> {
    let mut droid: Machine = input.parse().ok()?;
    let map = Map::explore(&mut droid)?;
    debugln!("{}", map.render());
    Some(map)
}

fn moves_to_oxygen(map: &Map) -> Option<usize> {
    let oxygen = map.oxygen?;
    let path = bfs(
        &Pos::ZERO,
        |p| map.successors(p).into_iter().map(|(n, _)| n),
        |&p| p == oxygen,
    )?;
    Some(path.len() - 1)
}

fn minutes_to_fill(map: &Map) -> Option<u32> {
    let oxygen = map.oxygen?;
    let reached = dijkstra_all(&oxygen, |p| map.successors(p));
    Some(reached.values().map(|&(_, d)| d).max().unwrap_or(0))
}

pub fn part_one(input: &str) -> Option<usize> {
    moves_to_oxygen(&explore(input)?)
}

pub fn part_two(input: &str) -> Option<u32> {
    minutes_to_fill(&explore(input)?)
}

fn main() {
    let input = &advent_archive::read_file("inputs", 2019, 15);
    advent_archive::solve!(1, part_one, input);
    advent_archive::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    use advent_archive::helpers::grid::parse_sparse;

    /// A droid in a known maze. `D` is where it starts and `O` is the
    /// oxygen system; anything other than `.` is a wall.
    struct MazeDroid {
        tiles: SparseGrid<char>,
        pos: Pos,
        moves: usize,
    }

    impl MazeDroid {
        fn new(maze: &str) -> Self {
            let tiles = parse_sparse(maze);
            let start = tiles.iter().find(|&(_, &t)| t == 'D').map(|(&p, _)| p).unwrap();
            Self {
                tiles,
                pos: start,
                moves: 0,
            }
        }
    }

    impl Droid for MazeDroid {
        fn step(&mut self, dir: Pos) -> Option<Status> {
            let next = self.pos + dir;
            let status = match self.tiles.get(&next) {
                Some('.' | 'D') => Status::Moved,
                Some('O') => Status::FoundOxygen,
                _ => return Some(Status::Wall),
            };
            self.pos = next;
            self.moves += 1;
            Some(status)
        }
    }

    const MAZE: &str = " ##
#D.##
#.#..#
#.O.#
 ###";

    #[test]
    fn test_part_one() {
        let mut droid = MazeDroid::new(MAZE);
        let map = Map::explore(&mut droid).unwrap();
        assert_eq!(map.open.len(), 8);
        assert_eq!(map.oxygen, Some(Pos::new(1, 2)));
        assert_eq!(moves_to_oxygen(&map), Some(3));
        // Back where it started.
        assert_eq!(droid.pos, Pos::new(1, 1));
    }

    #[test]
    fn test_part_two() {
        let map = Map::explore(&mut MazeDroid::new(MAZE)).unwrap();
        assert_eq!(minutes_to_fill(&map), Some(4));
    }

    #[test]
    fn commands() {
        assert_eq!([UP, DOWN, LEFT, RIGHT].map(command), [1, 2, 3, 4]);
    }
}
