//! 2019 Day 20: Donut Maze

use std::collections::{HashMap, HashSet};

use pathfinding::prelude::bfs;

use advent_archive::helpers::{
    grid,
    pos::{neighbours, Pos, DOWN, RIGHT},
};

#[derive(Debug, Clone, Copy)]
struct Warp {
    to: Pos,
    /// `1` going through an inner portal, `-1` through an outer one.
    depth: i32,
}

#[derive(Debug)]
struct Maze {
    open: HashSet<Pos>,
    warps: HashMap<Pos, Warp>,
    start: Pos,
    end: Pos,
}

impl Maze {
    fn parse(input: &str) -> Option<Self> {
        let tiles = grid::parse_sparse(input);
        let open: HashSet<Pos> = tiles
            .iter()
            .filter(|&(_, &ch)| ch == '.')
            .map(|(&pos, _)| pos)
            .collect();
        let (min, max) = grid::bounds(&open)?;

        // Labels read left to right or top to bottom, and sit next to the
        // open tile they lead from.
        let mut labels: HashMap<String, Vec<(Pos, bool)>> = HashMap::new();
        for (&pos, &first) in &tiles {
            if !first.is_ascii_uppercase() {
                continue;
            }
            for dir in [RIGHT, DOWN] {
                let Some(&second) = tiles.get(&(pos + dir)) else {
                    continue;
                };
                if !second.is_ascii_uppercase() {
                    continue;
                }
                let entry = [pos - dir, pos + dir * 2]
                    .into_iter()
                    .find(|p| open.contains(p))?;
                let outer =
                    entry.x == min.x || entry.x == max.x || entry.y == min.y || entry.y == max.y;
                labels
                    .entry(format!("{first}{second}"))
                    .or_default()
                    .push((entry, outer));
            }
        }

        let mut start = None;
        let mut end = None;
        let mut warps = HashMap::new();
        for (name, entries) in labels {
            match (name.as_str(), &entries[..]) {
                ("AA", &[(pos, _)]) => start = Some(pos),
                ("ZZ", &[(pos, _)]) => end = Some(pos),
                (_, &[(a, a_outer), (b, b_outer)]) => {
                    let depth = |outer: bool| if outer { -1 } else { 1 };
                    let to_b = Warp {
                        to: b,
                        depth: depth(a_outer),
                    };
                    let to_a = Warp {
                        to: a,
                        depth: depth(b_outer),
                    };
                    warps.insert(a, to_b);
                    warps.insert(b, to_a);
                }
                _ => return None,
            }
        }

        Some(Self {
            open,
            warps,
            start: start?,
            end: end?,
        })
    }

    /// Fewest steps from `AA` to `ZZ`. With `recursive`, portals change
    /// level and the outermost level's outer portals are walls.
    fn shortest_walk(&self, recursive: bool) -> Option<usize> {
        // Heuristic cap: one level per portal end (`warps` holds both ends of
        // every portal). It keeps mazes with no recursive exit finite.
        let max_level = if recursive { self.warps.len() as i32 } else { 0 };
        let successors = |&(pos, level): &(Pos, i32)| {
            let mut next: Vec<(Pos, i32)> = neighbours(pos)
                .filter(|n| self.open.contains(n))
                .map(|n| (n, level))
                .collect();
            if let Some(warp) = self.warps.get(&pos) {
                let level = if recursive { level + warp.depth } else { level };
                if (0..=max_level).contains(&level) {
                    next.push((warp.to, level));
                }
            }
            next
        };
        let path = bfs(&(self.start, 0), successors, |&(pos, level)| {
            pos == self.end && level == 0
        })?;
        Some(path.len() - 1)
    }
}

pub fn part_one(input: &str) -> Option<usize> {
    Maze::parse(input)?.shortest_walk(false)
}

pub fn part_two(input: &str) -> Option<usize> {
    Maze::parse(input)?.shortest_walk(true)
}

fn main() {
    let input = &advent_archive::read_file("inputs", 2019, 20);
    advent_archive::solve!(1, part_one, input);
    advent_archive::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = r"         A           
         A           
  #######.#########  
  #######.........#  
  #######.#######.#  
  #######.#######.#  
  #######.#######.#  
  #####  B    ###.#  
BC...##  C    ###.#  
  ##.##       ###.#  
  ##...DE  F  ###.#  
  #####    G  ###.#  
  #########.#####.#  
DE..#######...###.#  
  #.#########.###.#  
FG..#########.....#  
  ###########.#####  
             Z       
             Z       ";

    const NO_RECURSIVE_EXIT: &str = r"                   A               
                   A               
  #################.#############  
  #.#...#...................#.#.#  
  #.#.#.###.###.###.#########.#.#  
  #.#.#.......#...#.....#.#.#...#  
  #.#########.###.#####.#.#.###.#  
  #.............#.#.....#.......#  
  ###.###########.###.#####.#.#.#  
  #.....#        A   C    #.#.#.#  
  #######        S   P    #####.#  
  #.#...#                 #......VT
  #.#.#.#                 #.#####  
  #...#.#               YN....#.#  
  #.###.#                 #####.#  
DI....#.#                 #.....#  
  #####.#                 #.###.#  
ZZ......#               QG....#..AS
  ###.###                 #######  
JO..#.#.#                 #.....#  
  #.#.#.#                 ###.#.#  
  #...#..DI             BU....#..LF
  #####.#                 #.#####  
YN......#               VT..#....QG
  #.###.#                 #.###.#  
  #.#...#                 #.....#  
  ###.###    J L     J    #.#.###  
  #.....#    O F     P    #.#...#  
  #.###.#####.#.#####.#####.###.#  
  #...#.#.#...#.....#.....#.#...#  
  #.#####.###.###.#.#.#########.#  
  #...#.#.....#...#.#.#.#.....#.#  
  #.###.#####.###.###.#.#.#######  
  #.#.........#...#.............#  
  #########.###.###.#############  
           B   J   C               
           U   P   P               ";

    #[test]
    fn test_part_one() {
        assert_eq!(part_one(SMALL), Some(23));
        assert_eq!(part_one(NO_RECURSIVE_EXIT), Some(58));
        assert_eq!(part_one(&advent_archive::read_file("examples", 2019, 20)), Some(77));
    }

    #[test]
    fn test_part_two() {
        assert_eq!(part_two(SMALL), Some(26));
        assert_eq!(part_two(NO_RECURSIVE_EXIT), None);
        assert_eq!(part_two(&advent_archive::read_file("examples", 2019, 20)), Some(396));
    }

    #[test]
    fn outer_portals() {
        let maze = Maze::parse(SMALL).unwrap();
        assert_eq!(maze.warps.len(), 6);
        assert_eq!(maze.warps.values().filter(|w| w.depth == -1).count(), 3);
    }
}
