//! 2015 Day 7: Some Assembly Required

use std::collections::HashMap;

use advent_archive::{debugln, helpers::parse};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Signal {
    Value(u16),
    Wire(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BinOp {
    And,
    Or,
    LShift,
    RShift,
}

impl BinOp {
    fn apply(self, lhs: u16, rhs: u16) -> u16 {
        match self {
            BinOp::And => lhs & rhs,
            BinOp::Or => lhs | rhs,
            BinOp::LShift => lhs.checked_shl(u32::from(rhs)).unwrap_or(0),
            BinOp::RShift => lhs.checked_shr(u32::from(rhs)).unwrap_or(0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Gate {
    Direct(Signal),
    Not(Signal),
    Binary(BinOp, Signal, Signal),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Connection {
    gate: Gate,
    output: String,
}

/// Every wire and the gate driving it.
#[derive(Debug, Clone, Default)]
struct Circuit {
    wires: HashMap<String, Gate>,
}

impl Circuit {
    fn parse(input: &str) -> Option<Self> {
        let connections = parse::lines(input, Connection::parser).ok()?;
        Some(Self {
            wires: connections
                .into_iter()
                .map(|Connection { gate, output }| (output, gate))
                .collect(),
        })
    }

    /// Forces `wire` to carry a fixed value.
    fn override_wire(&mut self, wire: &str, value: u16) {
        self.wires
            .insert(wire.to_owned(), Gate::Direct(Signal::Value(value)));
    }

    /// The signal on `wire`, or `None` if it (or something it depends on) is
    /// not driven by anything.
    fn signal(&self, wire: &str, cache: &mut HashMap<String, u16>) -> Option<u16> {
        if let Some(&value) = cache.get(wire) {
            return Some(value);
        }

        let resolve = |signal: &Signal, cache: &mut HashMap<String, u16>| match signal {
            Signal::Value(value) => Some(*value),
            Signal::Wire(name) => self.signal(name, cache),
        };

        let value = match self.wires.get(wire)? {
            Gate::Direct(input) => resolve(input, cache)?,
            Gate::Not(input) => !resolve(input, cache)?,
            Gate::Binary(op, lhs, rhs) => {
                let lhs = resolve(lhs, cache)?;
                let rhs = resolve(rhs, cache)?;
                op.apply(lhs, rhs)
            }
        };

        cache.insert(wire.to_owned(), value);
        Some(value)
    }

    #[cfg(test)]
    fn simulate(&self) -> Option<HashMap<String, u16>> {
        let mut cache = HashMap::new();
        for wire in self.wires.keys() {
            self.signal(wire, &mut cache)?;
        }
        Some(cache)
    }
}

pub fn part_one(input: &str) -> Option<u16> {
    let circuit = Circuit::parse(input)?;
    circuit.signal("a", &mut HashMap::new())
}

/// Feeds part one's signal on `a` into `b` and measures `a` again.
pub fn part_two(input: &str) -> Option<u16> {
    let mut circuit = Circuit::parse(input)?;
    let a = circuit.signal("a", &mut HashMap::new())?;
    debugln!("overriding b with {a}");
    circuit.override_wire("b", a);
    circuit.signal("a", &mut HashMap::new())
}

fn main() {
    let input = &advent_archive::read_file("inputs", 2015, 7);
    advent_archive::solve!(1, part_one, input);
    advent_archive::solve!(2, part_two, input);
}


mod parsing {
    use super::*;

    use advent_archive::helpers::parse;

    mod c {
        pub use combine::{
            parser::char::{lower, string},
            *,
        };
    }

    use c::{ParseError, Parser, Stream};

    fn wire<Input>() -> impl Parser<Input, Output = String>
    where
        Input: Stream<Token = char>,
        Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
    {
        c::many1(c::lower())
    }

    fn signal<Input>() -> impl Parser<Input, Output = Signal>
    where
        Input: Stream<Token = char>,
        Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
    {
        c::choice((
            parse::decimal_integer().map(Signal::Value),
            wire().map(Signal::Wire),
        ))
    }

    impl Connection {
        pub fn parser<Input>() -> impl Parser<Input, Output = Self>
        where
            Input: Stream<Token = char>,
            Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
        {
            let op = c::choice((
                c::string("AND").map(|_| BinOp::And),
                c::string("OR").map(|_| BinOp::Or),
                c::string("LSHIFT").map(|_| BinOp::LShift),
                c::string("RSHIFT").map(|_| BinOp::RShift),
            ));

            let not = c::string("NOT ").with(signal()).map(Gate::Not);

            // "x", or "x AND y"; the trailing " -> " must not be mistaken for
            // the start of an operator.
            let unary_or_binary = (
                signal(),
                c::optional((c::attempt((c::token(' '), op)), c::token(' '), signal())),
            )
                .map(|(lhs, rest)| match rest {
                    Some(((_, op), _, rhs)) => Gate::Binary(op, lhs, rhs),
                    None => Gate::Direct(lhs),
                });

            (
                c::choice((not, unary_or_binary)),
                c::string(" -> "),
                wire(),
            )
                .map(|(gate, _, output)| Connection { gate, output })
        }
    }
}
