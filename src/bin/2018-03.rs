//! 2018 Day 3: No Matter How You Slice It

use std::collections::HashMap;

use advent_archive::helpers::{parse, pos::Pos};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Claim {
    id: u32,
    corner: Pos,
    width: i32,
    height: i32,
}

impl Claim {
    fn squares(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.width).flat_map(move |dx| {
            (0..self.height).map(move |dy| self.corner + Pos::new(dx, dy))
        })
    }
}

/// How many claims cover each square.
fn coverage(claims: &[Claim]) -> HashMap<Pos, u32> {
    let mut covered = HashMap::new();
    for claim in claims {
        for square in claim.squares() {
            *covered.entry(square).or_default() += 1;
        }
    }
    covered
}

pub fn part_one(input: &str) -> Option<usize> {
    let claims = parse::lines(input, Claim::parser).ok()?;
    Some(coverage(&claims).values().filter(|&&n| n >= 2).count())
}

/// The id of the only claim that overlaps no other.
pub fn part_two(input: &str) -> Option<u32> {
    let claims = parse::lines(input, Claim::parser).ok()?;
    let covered = coverage(&claims);
    claims
        .iter()
        .find(|claim| claim.squares().all(|square| covered[&square] == 1))
        .map(|claim| claim.id)
}

fn main() {
    let input = &advent_archive::read_file("inputs", 2018, 3);
    advent_archive::solve!(1, part_one, input);
    advent_archive::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "#1 @ 1,3: 4x4\n#2 @ 3,1: 4x4\n#3 @ 5,5: 2x2\n";

    #[test]
    fn parse_claim() {
        let claim = parse::from_str("#123 @ 3,2: 5x4", Claim::parser()).unwrap();
        assert_eq!(
            claim,
            Claim {
                id: 123,
                corner: Pos::new(3, 2),
                width: 5,
                height: 4
            }
        );
    }

    #[test]
    fn test_part_one() {
        assert_eq!(part_one(EXAMPLE), Some(4));
    }

    #[test]
    fn test_part_two() {
        assert_eq!(part_two(EXAMPLE), Some(3));
    }
}

mod parsing {
    use super::*;

    use advent_archive::helpers::parse;

    mod c {
        pub use combine::{parser::char::string, *};
    }

    use c::{ParseError, Parser, Stream};

    impl Claim {
        pub fn parser<Input>() -> impl Parser<Input, Output = Self>
        where
            Input: Stream<Token = char>,
            Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
        {
            // "#1 @ 1,3: 4x4"
            (
                c::token('#').with(parse::decimal_integer()),
                c::string(" @ ").with(parse::decimal_integer()),
                c::token(',').with(parse::decimal_integer()),
                c::string(": ").with(parse::decimal_integer()),
                c::token('x').with(parse::decimal_integer()),
            )
                .map(|(id, x, y, width, height)| Claim {
                    id,
                    corner: Pos::new(x, y),
                    width,
                    height,
                })
        }
    }
}
