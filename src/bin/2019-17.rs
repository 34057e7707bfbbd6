//! 2019 Day 17: Set and Forget

use std::collections::HashSet;

use itertools::Itertools;

use advent_archive::{
    debugln,
    helpers::{
        grid,
        pos::{neighbours, turn_left, turn_right, Pos, DOWN, LEFT, RIGHT, UP},
    },
    intcode::{ascii_output, Machine},
};

/// Longest movement function or main routine the robot accepts, in
/// characters.
const MAX_LEN: usize = 20;
const FUNCTIONS: usize = 3;

#[derive(Debug)]
struct Scaffold {
    tiles: HashSet<Pos>,
    robot: Pos,
    facing: Pos,
}

impl Scaffold {
    fn parse(view: &str) -> Option<Self> {
        let mut robot = None;
        let tiles = grid::parse_sparse(view)
            .into_iter()
            .filter_map(|(pos, ch)| {
                let facing = match ch {
                    '#' => return Some(pos),
                    '^' => UP,
                    'v' => DOWN,
                    '<' => LEFT,
                    '>' => RIGHT,
                    _ => return None,
                };
                robot = Some((pos, facing));
                Some(pos)
            })
            .collect();
        let (robot, facing) = robot?;
        Some(Self {
            tiles,
            robot,
            facing,
        })
    }

    fn intersections(&self) -> impl Iterator<Item = Pos> + '_ {
        self.tiles
            .iter()
            .copied()
            .filter(|&pos| neighbours(pos).all(|n| self.tiles.contains(&n)))
    }

    fn alignment(&self) -> i32 {
        self.intersections().map(|pos| pos.x * pos.y).sum()
    }

    /// The robot's route to the end of the scaffold, going straight through
    /// every intersection.
    fn path(&self) -> Vec<Segment> {
        let mut pos = self.robot;
        let mut facing = self.facing;
        let mut path = Vec::new();
        loop {
            let turn = if self.tiles.contains(&(pos + turn_left(facing))) {
                facing = turn_left(facing);
                Turn::Left
            } else if self.tiles.contains(&(pos + turn_right(facing))) {
                facing = turn_right(facing);
                Turn::Right
            } else {
                return path;
            };

            let mut steps = 0;
            while self.tiles.contains(&(pos + facing)) {
                pos += facing;
                steps += 1;
            }
            path.push(Segment { turn, steps });
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Turn {
    Left,
    Right,
}

/// A turn followed by a run of forward steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Segment {
    turn: Turn,
    steps: u32,
}

fn encode(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|s| match s.turn {
            Turn::Left => format!("L,{}", s.steps),
            Turn::Right => format!("R,{}", s.steps),
        })
        .join(",")
}

/// A main routine calling up to three movement functions.
#[derive(Debug, Default)]
struct Routine {
    main: Vec<usize>,
    functions: Vec<Vec<Segment>>,
}

impl Routine {
    fn compress(path: &[Segment]) -> Option<Self> {
        let mut routine = Routine::default();
        routine.cover(path).then_some(routine)
    }

    /// Tries to cover `path` using the existing functions, defining new ones
    /// as needed. Backtracks on failure.
    fn cover(&mut self, path: &[Segment]) -> bool {
        if path.is_empty() {
            return true;
        }
        // Each call takes two characters, counting its comma.
        if self.main.len() * 2 + 1 > MAX_LEN {
            return false;
        }

        for f in 0..self.functions.len() {
            let len = self.functions[f].len();
            if path.starts_with(&self.functions[f]) {
                self.main.push(f);
                if self.cover(&path[len..]) {
                    return true;
                }
                self.main.pop();
            }
        }

        if self.functions.len() < FUNCTIONS {
            let mut len = 1;
            while len <= path.len() && encode(&path[..len]).len() <= MAX_LEN {
                self.functions.push(path[..len].to_vec());
                self.main.push(self.functions.len() - 1);
                if self.cover(&path[len..]) {
                    return true;
                }
                self.main.pop();
                self.functions.pop();
                len += 1;
            }
        }
        false
    }

    #[cfg(test)]
    fn expand(&self) -> Vec<Segment> {
        self.main
            .iter()
            .flat_map(|&f| self.functions[f].iter().copied())
            .collect()
    }

    /// The lines to feed the robot, ending with a refusal of the video feed.
    fn to_input(&self) -> String {
        let main = self
            .main
            .iter()
            .map(|&f| char::from(b'A' + f as u8))
            .join(",");
        let mut input = format!("{main}\n");
        for f in 0..FUNCTIONS {
            let body = self.functions.get(f).map(|s| encode(s)).unwrap_or_default();
            input.push_str(&body);
            input.push('\n');
        }
        input.push_str("n\n");
        input
    }
}

fn camera_view(input: &str) -> Option<String> {
    let mut machine: Machine = input.parse().ok()?;
    let view = ascii_output(&machine.run_to_halt().ok()?);
    debugln!("{view}");
    Some(view)
}

pub fn part_one(input: &str) -> Option<i32> {
    Some(Scaffold::parse(&camera_view(input)?)?.alignment())
}

pub fn part_two(input: &str) -> Option<i64> {
    let scaffold = Scaffold::parse(&camera_view(input)?)?;
    let routine = Routine::compress(&scaffold.path())?;

    let mut machine: Machine = input.parse().ok()?;
    machine.write(0, 2).ok()?;
    machine.push_ascii(&routine.to_input());
    // The dust count is the one output that is not a character.
    machine.run_to_halt().ok()?.last().copied()
}

fn main() {
    let input = &advent_archive::read_file("inputs", 2019, 17);
    advent_archive::solve!(1, part_one, input);
    advent_archive::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    const CROSSINGS: &str = "\
..#..........
..#..........
#######...###
#.#...#...#.#
#############
..#...#...#..
..#####...^..";

    const WINDING: &str = "\
#######...#####
#.....#...#...#
#.....#...#...#
......#...#...#
......#...###.#
......#.....#.#
^########...#.#
......#.#...#.#
......#########
........#...#..
....#########..
....#...#......
....#...#......
....#...#......
....#####......";

    #[test]
    fn test_part_one() {
        let scaffold = Scaffold::parse(CROSSINGS).unwrap();
        assert_eq!(scaffold.intersections().count(), 4);
        assert_eq!(scaffold.alignment(), 76);
    }

    #[test]
    fn follows_the_scaffold() {
        let scaffold = Scaffold::parse(WINDING).unwrap();
        assert_eq!(
            encode(&scaffold.path()),
            "R,8,R,8,R,4,R,4,R,8,L,6,L,2,R,4,R,4,R,8,R,8,R,8,L,6,L,2"
        );
    }

    #[test]
    fn test_part_two() {
        let path = Scaffold::parse(WINDING).unwrap().path();
        let routine = Routine::compress(&path).unwrap();
        assert_eq!(routine.expand(), path);
        assert!(routine.functions.len() <= FUNCTIONS);
        assert!(routine.functions.iter().all(|f| encode(f).len() <= MAX_LEN));

        let input = routine.to_input();
        let lines: Vec<&str> = input.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].len() <= MAX_LEN);
        assert_eq!(lines[4], "n");
    }

    #[test]
    fn incompressible_path() {
        // Four distinct long segments cannot fit in three functions.
        let path: Vec<Segment> = (0..40)
            .map(|i| Segment {
                turn: if i % 3 == 0 { Turn::Left } else { Turn::Right },
                steps: 100 + i,
            })
            .collect();
        assert!(Routine::compress(&path).is_none());
    }
}
