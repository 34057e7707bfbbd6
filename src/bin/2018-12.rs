//! 2018 Day 12: Subterranean Sustainability

use bitvec::prelude::*;

use advent_archive::debugln;

const FAR_FUTURE: u64 = 50_000_000_000;

/// Occupied pots, where bit `i` is pot number `offset + i`. Kept trimmed so
/// the first and last bits are always set.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Pots {
    plants: BitVec,
    offset: i64,
}

/// Whether a pot has a plant next generation, indexed by the five pots
/// around it read as a binary number (leftmost pot highest).
type Rules = [bool; 32];

impl Pots {
    fn new(plants: BitVec, offset: i64) -> Self {
        let mut pots = Self { plants, offset };
        pots.trim();
        pots
    }

    fn trim(&mut self) {
        match (self.plants.first_one(), self.plants.last_one()) {
            (Some(first), Some(last)) => {
                self.plants = self.plants[first..=last].to_bitvec();
                self.offset += first as i64;
            }
            _ => self.plants.clear(),
        }
    }

    fn next(&self, rules: &Rules) -> Self {
        // Every pot within two of a plant may change.
        let len = self.plants.len() + 4;
        let mut plants = BitVec::with_capacity(len);
        let mut window = 0_usize;
        for i in 0..len {
            let incoming = self.plants.get(i).map_or(false, |b| *b);
            window = ((window << 1) | usize::from(incoming)) & 0b11111;
            plants.push(rules[window]);
        }
        Self::new(plants, self.offset - 2)
    }

    fn sum(&self) -> i64 {
        self.plants.iter_ones().map(|i| self.offset + i as i64).sum()
    }
}

fn parse(input: &str) -> Option<(Pots, Rules)> {
    let mut lines = input.lines();
    let initial = lines.next()?.strip_prefix("initial state: ")?;
    let plants = initial.trim().chars().map(|ch| ch == '#').collect();

    let mut rules = [false; 32];
    for line in lines.filter(|l| !l.trim().is_empty()) {
        let (pattern, result) = line.trim().split_once(" => ")?;
        if pattern.len() != 5 {
            return None;
        }
        let index = pattern
            .chars()
            .fold(0, |acc, ch| (acc << 1) | usize::from(ch == '#'));
        rules[index] = result == "#";
    }

    Some((Pots::new(plants, 0), rules))
}

/// The pot-number sum after `generations`.
///
/// Once the pattern stops changing and only drifts along the row, the
/// remaining generations are skipped.
fn sum_after(mut pots: Pots, rules: &Rules, generations: u64) -> i64 {
    for generation in 0..generations {
        let next = pots.next(rules);
        if next.plants == pots.plants {
            let drift = next.offset - pots.offset;
            let remaining = (generations - generation) as i64;
            debugln!("stable after {generation} generations, drifting {drift}");
            return pots.sum() + drift * remaining * pots.plants.count_ones() as i64;
        }
        pots = next;
    }
    pots.sum()
}

pub fn part_one(input: &str) -> Option<i64> {
    let (pots, rules) = parse(input)?;
    Some(sum_after(pots, &rules, 20))
}

pub fn part_two(input: &str) -> Option<i64> {
    let (pots, rules) = parse(input)?;
    Some(sum_after(pots, &rules, FAR_FUTURE))
}

fn main() {
    let input = &advent_archive::read_file("inputs", 2018, 12);
    advent_archive::solve!(1, part_one, input);
    advent_archive::solve!(2, part_two, input);
}
