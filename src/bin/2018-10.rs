//! 2018 Day 10: The Stars Align

use advent_archive::helpers::{
    grid::{self, SparseGrid},
    parse,
    pos::Pos,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Star {
    position: Pos,
    velocity: Pos,
}

fn area(stars: &[Star], t: i32) -> Option<i64> {
    let (min, max) = grid::bounds(&positions_at(stars, t))?;
    let size = max - min;
    Some(i64::from(size.x) * i64::from(size.y))
}

fn positions_at(stars: &[Star], t: i32) -> Vec<Pos> {
    stars.iter().map(|s| s.position + s.velocity * t).collect()
}

/// The second at which the stars are packed tightest, found by walking
/// forward while the bounding box keeps shrinking.
fn message_time(stars: &[Star]) -> Option<i32> {
    let mut t = 0;
    let mut best = area(stars, 0)?;
    loop {
        let next = area(stars, t + 1)?;
        if next >= best {
            return Some(t);
        }
        best = next;
        t += 1;
    }
}

fn render(stars: &[Star], t: i32) -> String {
    let lit: SparseGrid<()> = positions_at(stars, t).into_iter().map(|p| (p, ())).collect();
    grid::render(&lit, |_, star| if star.is_some() { '#' } else { '.' })
}

pub fn part_one(input: &str) -> Option<String> {
    let stars = parse::lines(input, Star::parser).ok()?;
    let t = message_time(&stars)?;
    Some(render(&stars, t))
}

pub fn part_two(input: &str) -> Option<i32> {
    let stars = parse::lines(input, Star::parser).ok()?;
    message_time(&stars)
}

fn main() {
    let input = &advent_archive::read_file("inputs", 2018, 10);
    advent_archive::solve!(1, part_one, input);
    advent_archive::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    const HI: &str = "\
#...#..###
#...#...#.
#...#...#.
#####...#.
#...#...#.
#...#...#.
#...#...#.
#...#..###";

    #[test]
    fn test_part_one() {
        let input = advent_archive::read_file("examples", 2018, 10);
        assert_eq!(part_one(&input).as_deref(), Some(HI));
    }

    #[test]
    fn test_part_two() {
        let input = advent_archive::read_file("examples", 2018, 10);
        assert_eq!(part_two(&input), Some(3));
    }

    #[test]
    fn parse_star() {
        let star = parse::from_str("position=<-3, 11> velocity=< 1, -2>", Star::parser()).unwrap();
        assert_eq!(star.position, Pos::new(-3, 11));
        assert_eq!(star.velocity, Pos::new(1, -2));
    }
}

mod parsing {
    use super::*;

    mod c {
        pub use combine::{
            parser::char::{spaces, string},
            *,
        };
    }

    use c::{ParseError, Parser, Stream};

    fn vector<Input>() -> impl Parser<Input, Output = Pos>
    where
        Input: Stream<Token = char>,
        Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
    {
        (
            c::token('<').with(parse::padded_integer()),
            c::token(',').with(parse::padded_integer()),
            c::spaces().skip(c::token('>')),
        )
            .map(|(x, y, _)| Pos::new(x, y))
    }

    impl Star {
        pub fn parser<Input>() -> impl Parser<Input, Output = Self>
        where
            Input: Stream<Token = char>,
            Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
        {
            (
                c::string("position=").with(vector()),
                c::string(" velocity=").with(vector()),
            )
                .map(|(position, velocity)| Star { position, velocity })
        }
    }
}
