//! 2018 Day 22: Mode Maze

use std::cell::RefCell;

use pathfinding::prelude::dijkstra;

use advent_archive::helpers::{
    parse,
    pos::{neighbours, Pos},
};

const EROSION_MODULUS: u64 = 20183;
const SWITCH_MINUTES: u32 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Region {
    Rocky,
    Wet,
    Narrow,
}

impl Region {
    fn from_erosion(level: u64) -> Self {
        match level % 3 {
            0 => Region::Rocky,
            1 => Region::Wet,
            _ => Region::Narrow,
        }
    }

    fn risk(self) -> u32 {
        self as u32
    }

    fn allows(self, tool: Tool) -> bool {
        !matches!(
            (self, tool),
            (Region::Rocky, Tool::Neither)
                | (Region::Wet, Tool::Torch)
                | (Region::Narrow, Tool::Gear)
        )
    }

    #[cfg(test)]
    fn symbol(self) -> char {
        match self {
            Region::Rocky => '.',
            Region::Wet => '=',
            Region::Narrow => '|',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Tool {
    Torch,
    Gear,
    Neither,
}

impl Tool {
    const ALL: [Tool; 3] = [Tool::Torch, Tool::Gear, Tool::Neither];
}

#[derive(Debug)]
struct Cave {
    depth: u64,
    target: Pos,
    /// Erosion levels by row then column, grown on demand.
    erosion: RefCell<Vec<Vec<u64>>>,
}

impl Cave {
    fn new(depth: u64, target: Pos) -> Self {
        Self {
            depth,
            target,
            erosion: RefCell::new(Vec::new()),
        }
    }

    fn parse(input: &str) -> Option<Self> {
        let (depth, target) = parse::from_str(input.trim(), parsing::scan()).ok()?;
        Some(Self::new(depth, target))
    }

    fn geologic_index(&self, levels: &[Vec<u64>], x: usize, y: usize) -> u64 {
        let is_target = usize::try_from(self.target.x) == Ok(x)
            && usize::try_from(self.target.y) == Ok(y);
        match (x, y) {
            (0, 0) => 0,
            _ if is_target => 0,
            (x, 0) => x as u64 * 16807,
            (0, y) => y as u64 * 48271,
            (x, y) => levels[y][x - 1] * levels[y - 1][x],
        }
    }

    /// Fills in erosion levels until the table covers `width` by `height`.
    fn extend(&self, width: usize, height: usize) {
        let mut levels = self.erosion.borrow_mut();
        let width = width.max(levels.first().map_or(0, Vec::len));
        let height = height.max(levels.len());
        for y in 0..height {
            if y == levels.len() {
                levels.push(Vec::with_capacity(width));
            }
            for x in levels[y].len()..width {
                let level = (self.geologic_index(&levels, x, y) + self.depth) % EROSION_MODULUS;
                levels[y].push(level);
            }
        }
    }

    fn erosion(&self, pos: Pos) -> Option<u64> {
        let x = usize::try_from(pos.x).ok()?;
        let y = usize::try_from(pos.y).ok()?;
        if let Some(&level) = self.erosion.borrow().get(y).and_then(|row| row.get(x)) {
            return Some(level);
        }
        self.extend(x + 1, y + 1);
        let levels = self.erosion.borrow();
        Some(levels[y][x])
    }

    fn region(&self, pos: Pos) -> Option<Region> {
        self.erosion(pos).map(Region::from_erosion)
    }

    /// Total risk of the rectangle from the mouth to the target.
    fn risk(&self) -> Option<u32> {
        (0..=self.target.y)
            .flat_map(|y| (0..=self.target.x).map(move |x| Pos::new(x, y)))
            .map(|pos| self.region(pos).map(Region::risk))
            .sum()
    }

    /// Fewest minutes to reach the target holding the torch.
    fn rescue_time(&self) -> Option<u32> {
        let successors = |&(pos, tool): &(Pos, Tool)| {
            let mut next = Vec::new();
            if let Some(here) = self.region(pos) {
                next.extend(
                    Tool::ALL
                        .into_iter()
                        .filter(|&other| other != tool && here.allows(other))
                        .map(|other| ((pos, other), SWITCH_MINUTES)),
                );
            }
            for n in neighbours(pos) {
                if self.region(n).map_or(false, |there| there.allows(tool)) {
                    next.push(((n, tool), 1));
                }
            }
            next
        };
        let goal = (self.target, Tool::Torch);
        let start = (Pos::ZERO, Tool::Torch);
        let (_, minutes) = dijkstra(&start, successors, |&state| state == goal)?;
        Some(minutes)
    }

    #[cfg(test)]
    fn render(&self, width: i32, height: i32) -> String {
        let mut out = String::new();
        for y in 0..height {
            for x in 0..width {
                let pos = Pos::new(x, y);
                let symbol = match self.region(pos) {
                    _ if pos == Pos::ZERO => 'M',
                    _ if pos == self.target => 'T',
                    Some(region) => region.symbol(),
                    None => '?',
                };
                out.push(symbol);
            }
            out.push('\n');
        }
        out
    }
}

pub fn part_one(input: &str) -> Option<u32> {
    Cave::parse(input)?.risk()
}

pub fn part_two(input: &str) -> Option<u32> {
    Cave::parse(input)?.rescue_time()
}

fn main() {
    let input = &advent_archive::read_file("inputs", 2018, 22);
    advent_archive::solve!(1, part_one, input);
    advent_archive::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "depth: 510\ntarget: 10,10\n";

    #[test]
    fn erosion_levels() {
        let cave = Cave::parse(EXAMPLE).unwrap();
        assert_eq!(cave.erosion(Pos::new(0, 0)), Some(510));
        assert_eq!(cave.erosion(Pos::new(1, 0)), Some(17317));
        assert_eq!(cave.erosion(Pos::new(0, 1)), Some(8415));
        assert_eq!(cave.erosion(Pos::new(1, 1)), Some(1805));
        assert_eq!(cave.erosion(Pos::new(10, 10)), Some(510));
        assert_eq!(cave.erosion(Pos::new(-1, 0)), None);
    }

    #[test]
    fn map_rendering() {
        let cave = Cave::new(510, Pos::new(10, 10));
        assert_eq!(
            cave.render(16, 3),
            "M=.|=.|.|=.|=|=.\n.|=|=|||..|.=...\n.==|....||=..|==\n"
        );
    }

    #[test]
    fn test_part_one() {
        assert_eq!(part_one(EXAMPLE), Some(114));
    }

    #[test]
    fn test_part_two() {
        assert_eq!(part_two(EXAMPLE), Some(45));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(part_one("depth: deep"), None);
    }
}

mod parsing {
    use super::*;

    use advent_archive::helpers::parse;

    mod c {
        pub use combine::{
            parser::char::{spaces, string},
            *,
        };
    }

    use c::{ParseError, Parser, Stream};

    /// `depth: 510` then `target: 10,10` on the next line.
    pub(super) fn scan<Input>() -> impl Parser<Input, Output = (u64, Pos)>
    where
        Input: Stream<Token = char>,
        Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
    {
        (
            c::string("depth:").with(parse::padded_integer()),
            c::spaces().with(c::string("target:")),
            parse::padded_integer(),
            c::token(',').with(parse::decimal_integer()),
        )
            .map(|(depth, _, x, y)| (depth, Pos::new(x, y)))
    }
}
