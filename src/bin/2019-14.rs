//! 2019 Day 14: Space Stoichiometry

use std::collections::HashMap;

use advent_archive::helpers::parse;

const ORE_BUDGET: u64 = 1_000_000_000_000;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Term {
    quantity: u64,
    chemical: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Reaction {
    inputs: Vec<Term>,
    output: Term,
}

struct Nanofactory {
    /// Reactions keyed by the chemical they produce.
    reactions: HashMap<String, Reaction>,
    /// Every chemical, ordered so each comes before anything it is made
    /// from.
    order: Vec<String>,
}

impl Nanofactory {
    fn parse(input: &str) -> Option<Self> {
        let reactions: HashMap<String, Reaction> = parse::lines(input, Reaction::parser)
            .ok()?
            .into_iter()
            .map(|r| (r.output.chemical.clone(), r))
            .collect();

        let mut order = Vec::new();
        let mut visited = HashMap::new();
        Self::visit("FUEL", &reactions, &mut visited, &mut order)?;
        order.reverse();
        Some(Self { reactions, order })
    }

    /// Depth-first post-order. Fails on a cycle or an unknown chemical.
    fn visit(
        chemical: &str,
        reactions: &HashMap<String, Reaction>,
        visited: &mut HashMap<String, bool>,
        order: &mut Vec<String>,
    ) -> Option<()> {
        match visited.get(chemical) {
            Some(true) => return Some(()),
            Some(false) => return None,
            None => {}
        }
        visited.insert(chemical.to_owned(), false);
        if chemical != "ORE" {
            for input in &reactions.get(chemical)?.inputs {
                Self::visit(&input.chemical, reactions, visited, order)?;
            }
        }
        visited.insert(chemical.to_owned(), true);
        order.push(chemical.to_owned());
        Some(())
    }

    fn ore_for(&self, fuel: u64) -> u64 {
        let mut needed: HashMap<&str, u64> = HashMap::new();
        needed.insert("FUEL", fuel);
        for chemical in &self.order {
            let Some(reaction) = self.reactions.get(chemical) else {
                continue;
            };
            let amount = needed.get(chemical.as_str()).copied().unwrap_or(0);
            let batch = reaction.output.quantity;
            let runs = (amount + batch - 1) / batch;
            for input in &reaction.inputs {
                *needed.entry(&input.chemical).or_default() += runs * input.quantity;
            }
        }
        needed.get("ORE").copied().unwrap_or(0)
    }

    /// The most fuel `ore` can make.
    fn max_fuel(&self, ore: u64) -> u64 {
        let (mut lo, mut hi) = (0, 1);
        while self.ore_for(hi) <= ore {
            lo = hi;
            hi *= 2;
        }
        // ore_for(lo) fits, ore_for(hi) doesn't.
        while hi - lo > 1 {
            let mid = lo + (hi - lo) / 2;
            if self.ore_for(mid) <= ore {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        lo
    }
}

pub fn part_one(input: &str) -> Option<u64> {
    Some(Nanofactory::parse(input)?.ore_for(1))
}

pub fn part_two(input: &str) -> Option<u64> {
    Some(Nanofactory::parse(input)?.max_fuel(ORE_BUDGET))
}

fn main() {
    let input = &advent_archive::read_file("inputs", 2019, 14);
    advent_archive::solve!(1, part_one, input);
    advent_archive::solve!(2, part_two, input);
}


mod parsing {
    use super::*;

    mod c {
        pub use combine::{
            parser::char::{string, upper},
            *,
        };
    }

    use c::{ParseError, Parser, Stream};

    impl Term {
        pub fn parser<Input>() -> impl Parser<Input, Output = Self>
        where
            Input: Stream<Token = char>,
            Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
        {
            (
                parse::padded_integer(),
                c::token(' ').with(c::many1(c::upper())),
            )
                .map(|(quantity, chemical)| Term { quantity, chemical })
        }
    }

    impl Reaction {
        pub fn parser<Input>() -> impl Parser<Input, Output = Self>
        where
            Input: Stream<Token = char>,
            Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
        {
            (
                c::sep_by1(Term::parser(), c::token(',')),
                c::string(" => ").with(Term::parser()),
            )
                .map(|(inputs, output)| Reaction { inputs, output })
        }
    }
}
