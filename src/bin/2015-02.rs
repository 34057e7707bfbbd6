//! 2015 Day 2: I Was Told There Would Be No Math

use advent_archive::{debugln, helpers::parse};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Present {
    l: u32,
    w: u32,
    h: u32,
}

impl Present {
    /// Surface area plus the area of the smallest side.
    fn paper(&self) -> u32 {
        let sides = [self.l * self.w, self.w * self.h, self.h * self.l];
        let slack = sides.iter().min().copied().unwrap_or(0);
        2 * sides.iter().sum::<u32>() + slack
    }

    /// Smallest perimeter plus the volume for the bow.
    fn ribbon(&self) -> u32 {
        let mut dims = [self.l, self.w, self.h];
        dims.sort_unstable();
        2 * (dims[0] + dims[1]) + self.l * self.w * self.h
    }
}

fn parse_presents(input: &str) -> Option<Vec<Present>> {
    let presents = parse::lines(input, Present::parser).ok()?;
    debugln!("{} presents", presents.len());
    Some(presents)
}

pub fn part_one(input: &str) -> Option<u32> {
    Some(parse_presents(input)?.iter().map(Present::paper).sum())
}

pub fn part_two(input: &str) -> Option<u32> {
    Some(parse_presents(input)?.iter().map(Present::ribbon).sum())
}

fn main() {
    let input = &advent_archive::read_file("inputs", 2015, 2);
    advent_archive::solve!(1, part_one, input);
    advent_archive::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn present(l: u32, w: u32, h: u32) -> Present {
        Present { l, w, h }
    }

    #[test]
    fn paper_examples() {
        assert_eq!(present(2, 3, 4).paper(), 58);
        assert_eq!(present(1, 1, 10).paper(), 43);
    }

    #[test]
    fn ribbon_examples() {
        assert_eq!(present(2, 3, 4).ribbon(), 34);
        assert_eq!(present(1, 1, 10).ribbon(), 14);
    }

    #[test]
    fn test_part_one() {
        assert_eq!(part_one("2x3x4\n1x1x10\n"), Some(58 + 43));
    }

    #[test]
    fn test_part_two() {
        assert_eq!(part_two("2x3x4\n1x1x10\n"), Some(34 + 14));
        assert_eq!(part_two("2x3\n"), None);
    }
}

mod parsing {
    use super::*;

    use advent_archive::helpers::parse;

    mod c {
        pub use combine::*;
    }

    use c::{ParseError, Parser, Stream};

    impl Present {
        pub fn parser<Input>() -> impl Parser<Input, Output = Self>
        where
            Input: Stream<Token = char>,
            Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
        {
            (
                parse::decimal_integer(),
                c::token('x'),
                parse::decimal_integer(),
                c::token('x'),
                parse::decimal_integer(),
            )
                .map(|(l, _, w, _, h)| Present { l, w, h })
        }
    }
}
