//! 2018 Day 17: Reservoir Research

use advent_archive::helpers::{
    grid::{self, SparseGrid},
    parse,
    pos::{Pos, DOWN, LEFT, RIGHT},
};

const SPRING: Pos = Pos::new(500, 0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tile {
    Clay,
    /// Sand water has passed through.
    Flowing,
    /// Water at rest.
    Settled,
}

/// A vertical or horizontal line of clay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Vein {
    from: Pos,
    to: Pos,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
    Wall(i32),
    Open(i32),
}

impl Edge {
    fn x(self) -> i32 {
        match self {
            Edge::Wall(x) | Edge::Open(x) => x,
        }
    }
}

struct Ground {
    tiles: SparseGrid<Tile>,
    min_y: i32,
    max_y: i32,
}

impl Ground {
    fn new(veins: &[Vein]) -> Option<Self> {
        let mut tiles = SparseGrid::new();
        for vein in veins {
            for x in vein.from.x..=vein.to.x {
                for y in vein.from.y..=vein.to.y {
                    tiles.insert(Pos::new(x, y), Tile::Clay);
                }
            }
        }
        let (min, max) = grid::bounds(tiles.keys())?;
        Some(Self {
            tiles,
            min_y: min.y,
            max_y: max.y,
        })
    }

    fn tile(&self, pos: Pos) -> Option<Tile> {
        self.tiles.get(&pos).copied()
    }

    fn supports(&self, pos: Pos) -> bool {
        matches!(self.tile(pos), Some(Tile::Clay | Tile::Settled))
    }

    /// Lets water fall from `start`, pooling in any basin it lands in.
    ///
    /// Pools fill upward no further than the row below `start`; that row
    /// belongs to whoever poured the water.
    fn pour(&mut self, start: Pos) {
        let mut pos = start;
        loop {
            self.tiles.insert(pos, Tile::Flowing);
            let below = pos + DOWN;
            if below.y > self.max_y {
                return;
            }
            match self.tile(below) {
                None => pos = below,
                Some(Tile::Flowing) => return,
                Some(_) => break,
            }
        }

        loop {
            let left = self.spread(pos, LEFT);
            let right = self.spread(pos, RIGHT);
            let tile = match (left, right) {
                (Edge::Wall(_), Edge::Wall(_)) => Tile::Settled,
                _ => Tile::Flowing,
            };
            for x in left.x()..=right.x() {
                self.tiles.insert(Pos::new(x, pos.y), tile);
            }

            if tile == Tile::Flowing || pos == start {
                return;
            }
            pos -= DOWN;
            if pos == start {
                return;
            }
        }
    }

    /// Follows the water sideways from `pos` until it either meets clay or
    /// spills over an edge.
    fn spread(&mut self, pos: Pos, dir: Pos) -> Edge {
        let mut cur = pos;
        loop {
            let below = cur + DOWN;
            match self.tile(below) {
                None => {
                    self.pour(cur);
                    if !self.supports(below) {
                        return Edge::Open(cur.x);
                    }
                }
                Some(Tile::Flowing) => return Edge::Open(cur.x),
                Some(_) => {}
            }

            let next = cur + dir;
            if self.tile(next) == Some(Tile::Clay) {
                return Edge::Wall(cur.x);
            }
            cur = next;
        }
    }

    fn count(&self, mut wet: impl FnMut(Tile) -> bool) -> usize {
        self.tiles
            .iter()
            .filter(|&(pos, &tile)| (self.min_y..=self.max_y).contains(&pos.y) && wet(tile))
            .count()
    }
}

fn flood(input: &str) -> Option<Ground> {
    let veins = parse::lines(input, Vein::parser).ok()?;
    let mut ground = Ground::new(&veins)?;
    ground.pour(SPRING);
    Some(ground)
}

pub fn part_one(input: &str) -> Option<usize> {
    let ground = flood(input)?;
    Some(ground.count(|tile| tile != Tile::Clay))
}

pub fn part_two(input: &str) -> Option<usize> {
    let ground = flood(input)?;
    Some(ground.count(|tile| tile == Tile::Settled))
}

fn main() {
    let input = &advent_archive::read_file("inputs", 2018, 17);
    advent_archive::solve!(1, part_one, input);
    advent_archive::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_one() {
        let input = advent_archive::read_file("examples", 2018, 17);
        assert_eq!(part_one(&input), Some(57));
    }

    #[test]
    fn test_part_two() {
        let input = advent_archive::read_file("examples", 2018, 17);
        assert_eq!(part_two(&input), Some(29));
    }

    #[test]
    fn nested_basin() {
        // A small cup inside a larger one. Both fill, then the water spills
        // over both outer walls.
        let input = "\
x=496, y=2..8
x=504, y=2..8
y=8, x=496..504
x=499, y=5..6
x=501, y=5..6
y=6, x=499..501";
        let ground = flood(input).unwrap();
        assert_eq!(ground.count(|tile| tile == Tile::Settled), 37);
        assert_eq!(ground.count(|tile| tile == Tile::Flowing), 14);
    }
}

mod parsing {
    use super::*;

    mod c {
        pub use combine::{
            parser::char::{letter, string},
            *,
        };
    }

    use c::{ParseError, Parser, Stream};

    impl Vein {
        pub fn parser<Input>() -> impl Parser<Input, Output = Self>
        where
            Input: Stream<Token = char>,
            Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
        {
            (
                c::letter().skip(c::token('=')),
                parse::decimal_integer(),
                c::string(", ").with(c::letter()).skip(c::token('=')),
                parse::decimal_integer(),
                c::string("..").with(parse::decimal_integer()),
            )
                .map(|(axis, fixed, _, lo, hi)| {
                    if axis == 'x' {
                        Vein {
                            from: Pos::new(fixed, lo),
                            to: Pos::new(fixed, hi),
                        }
                    } else {
                        Vein {
                            from: Pos::new(lo, fixed),
                            to: Pos::new(hi, fixed),
                        }
                    }
                })
        }
    }
}
