//! 2019 Day 22: Slam Shuffle

use num_modular::{ModularCoreOps, ModularUnaryOps};

use advent_archive::helpers::parse;

const SMALL_DECK: u64 = 10_007;
const CARD: u64 = 2019;

const HUGE_DECK: u64 = 119_315_717_514_047;
const SHUFFLES: u64 = 101_741_582_076_661;
const POSITION: u64 = 2020;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Technique {
    NewStack,
    Cut(i64),
    Increment(u64),
}

/// Where each card ends up, as `scale * position + offset` modulo the deck
/// size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Shuffle {
    scale: u64,
    offset: u64,
    deck: u64,
}

impl Shuffle {
    fn identity(deck: u64) -> Self {
        Self {
            scale: 1,
            offset: 0,
            deck,
        }
    }

    fn technique(technique: Technique, deck: u64) -> Self {
        let (scale, offset) = match technique {
            Technique::NewStack => (deck - 1, deck - 1),
            Technique::Cut(n) => (1, (-n).rem_euclid(deck as i64) as u64),
            Technique::Increment(n) => (n % deck, 0),
        };
        Self {
            scale,
            offset,
            deck,
        }
    }

    fn process(techniques: &[Technique], deck: u64) -> Self {
        techniques
            .iter()
            .fold(Self::identity(deck), |shuffle, &t| {
                shuffle.then(Self::technique(t, deck))
            })
    }

    /// This shuffle followed by `next`.
    fn then(self, next: Shuffle) -> Self {
        let m = &self.deck;
        Self {
            scale: next.scale.mulm(self.scale, m),
            offset: next.scale.mulm(self.offset, m).addm(next.offset, m),
            deck: self.deck,
        }
    }

    /// This shuffle applied `times` times over, by repeated squaring.
    fn repeat(self, mut times: u64) -> Self {
        let mut result = Self::identity(self.deck);
        let mut square = self;
        while times > 0 {
            if times & 1 == 1 {
                result = result.then(square);
            }
            square = square.then(square);
            times >>= 1;
        }
        result
    }

    fn position_of(&self, card: u64) -> u64 {
        let m = &self.deck;
        self.scale.mulm(card % self.deck, m).addm(self.offset, m)
    }

    /// The card that lands at `position`. Only defined when every shuffle
    /// step can be undone.
    fn card_at(&self, position: u64) -> Option<u64> {
        let m = &self.deck;
        let inverse = self.scale.invm(m)?;
        Some((position % self.deck).subm(self.offset, m).mulm(inverse, m))
    }
}

fn techniques(input: &str) -> Option<Vec<Technique>> {
    parse::lines(input, Technique::parser).ok()
}

pub fn part_one(input: &str) -> Option<u64> {
    Some(Shuffle::process(&techniques(input)?, SMALL_DECK).position_of(CARD))
}

pub fn part_two(input: &str) -> Option<u64> {
    Shuffle::process(&techniques(input)?, HUGE_DECK)
        .repeat(SHUFFLES)
        .card_at(POSITION)
}

fn main() {
    let input = &advent_archive::read_file("inputs", 2019, 22);
    advent_archive::solve!(1, part_one, input);
    advent_archive::solve!(2, part_two, input);
}

mod parsing {
    use super::*;

    mod c {
        pub use combine::{parser::char::string, *};
    }

    use c::{ParseError, Parser, Stream};

    impl Technique {
        pub fn parser<Input>() -> impl Parser<Input, Output = Self>
        where
            Input: Stream<Token = char>,
            Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
        {
            c::choice((
                c::attempt(c::string("deal into new stack")).map(|_| Technique::NewStack),
                c::string("deal with increment")
                    .with(parse::padded_integer())
                    .map(Technique::Increment),
                c::string("cut")
                    .with(parse::padded_integer())
                    .map(Technique::Cut),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deal_ten(input: &str) -> Vec<u64> {
        let shuffle = Shuffle::process(&techniques(input).unwrap(), 10);
        (0..10).map(|pos| shuffle.card_at(pos).unwrap()).collect()
    }

    #[test]
    fn single_techniques() {
        assert_eq!(deal_ten("deal into new stack"), [9, 8, 7, 6, 5, 4, 3, 2, 1, 0]);
        assert_eq!(deal_ten("cut 3"), [3, 4, 5, 6, 7, 8, 9, 0, 1, 2]);
        assert_eq!(deal_ten("cut -4"), [6, 7, 8, 9, 0, 1, 2, 3, 4, 5]);
        assert_eq!(deal_ten("deal with increment 3"), [0, 7, 4, 1, 8, 5, 2, 9, 6, 3]);
    }

    #[test]
    fn test_part_one() {
        assert_eq!(
            deal_ten("deal with increment 7\ndeal into new stack\ndeal into new stack"),
            [0, 3, 6, 9, 2, 5, 8, 1, 4, 7]
        );
        assert_eq!(
            deal_ten("cut 6\ndeal with increment 7\ndeal into new stack"),
            [3, 0, 7, 4, 1, 8, 5, 2, 9, 6]
        );
        assert_eq!(
            deal_ten("deal with increment 7\ndeal with increment 9\ncut -2"),
            [6, 3, 0, 7, 4, 1, 8, 5, 2, 9]
        );
        assert_eq!(
            deal_ten(
                "\
deal into new stack
cut -2
deal with increment 7
cut 8
cut -4
deal with increment 7
cut 3
deal with increment 9
deal with increment 3
cut -1"
            ),
            [9, 2, 5, 8, 1, 4, 7, 0, 3, 6]
        );
    }

    #[test]
    fn test_part_two() {
        let steps = techniques("cut 6\ndeal with increment 7\ndeal into new stack").unwrap();
        let shuffle = Shuffle::process(&steps, SMALL_DECK);

        let mut card = CARD;
        for _ in 0..25 {
            card = shuffle.position_of(card);
        }
        let repeated = shuffle.repeat(25);
        assert_eq!(repeated.position_of(CARD), card);
        assert_eq!(repeated.card_at(card), Some(CARD));
        assert_eq!(shuffle.repeat(0), Shuffle::identity(SMALL_DECK));
    }
}
