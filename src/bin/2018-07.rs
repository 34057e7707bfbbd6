//! 2018 Day 7: The Sum of Its Parts

use std::collections::{BTreeMap, BTreeSet};

use advent_archive::{debugln, helpers::parse};

const WORKERS: usize = 5;
const BASE_STEP_SECONDS: u32 = 60;

/// "Step `before` must be finished before step `after` can begin."
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Requirement {
    before: char,
    after: char,
}

/// Every step and the steps that must finish before it.
fn prerequisites(requirements: &[Requirement]) -> BTreeMap<char, BTreeSet<char>> {
    let mut prereqs: BTreeMap<char, BTreeSet<char>> = BTreeMap::new();
    for req in requirements {
        prereqs.entry(req.before).or_default();
        prereqs.entry(req.after).or_default().insert(req.before);
    }
    prereqs
}

fn step_duration(step: char, base: u32) -> u32 {
    base + (step as u32 - 'A' as u32) + 1
}

/// Simulates `workers` elves taking ready steps in alphabetical order.
///
/// Returns the order steps were started in and the total time taken.
fn assemble(requirements: &[Requirement], workers: usize, base: u32) -> (String, u32) {
    let mut waiting = prerequisites(requirements);
    let mut in_progress: Vec<(u32, char)> = Vec::new();
    let mut order = String::new();
    let mut now = 0;

    while !waiting.is_empty() || !in_progress.is_empty() {
        let ready: Vec<char> = waiting
            .iter()
            .filter(|(_, prereqs)| prereqs.is_empty())
            .map(|(&step, _)| step)
            .take(workers - in_progress.len())
            .collect();
        for step in ready {
            waiting.remove(&step);
            order.push(step);
            in_progress.push((now + step_duration(step, base), step));
        }

        // Jump to the next time a step finishes and release everything done
        // by then.
        let Some(&(finished_at, _)) = in_progress.iter().min() else {
            break;
        };
        now = finished_at;
        let (done, busy): (Vec<_>, Vec<_>) =
            in_progress.into_iter().partition(|&(t, _)| t == finished_at);
        in_progress = busy;
        for (_, step) in done {
            debugln!("{now}: finished {step}");
            for prereqs in waiting.values_mut() {
                prereqs.remove(&step);
            }
        }
    }

    (order, now)
}

pub fn part_one(input: &str) -> Option<String> {
    let requirements = parse::lines(input, Requirement::parser).ok()?;
    Some(assemble(&requirements, 1, 0).0)
}

pub fn part_two(input: &str) -> Option<u32> {
    let requirements = parse::lines(input, Requirement::parser).ok()?;
    Some(assemble(&requirements, WORKERS, BASE_STEP_SECONDS).1)
}

fn main() {
    let input = &advent_archive::read_file("inputs", 2018, 7);
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

    impl Requirement {
        pub fn parser<Input>() -> impl Parser<Input, Output = Self>
        where
            Input: Stream<Token = char>,
            Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
        {
            (
                c::string("Step ").with(c::upper()),
                c::string(" must be finished before step ").with(c::upper()),
                c::string(" can begin."),
            )
                .map(|(before, after, _)| Requirement { before, after })
        }
    }
}
