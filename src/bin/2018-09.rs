//! 2018 Day 9: Marble Mania

use index_vec::IndexVec;

index_vec::define_index_type! {
    /// A marble, numbered by the turn it is placed on.
    struct Marble = u32;
}

#[derive(Debug, Clone, Copy)]
struct Link {
    prev: Marble,
    next: Marble,
}

/// The circle as a doubly linked ring. Marbles are never reused, so each one
/// is stored at the index of its own value.
struct Circle {
    links: IndexVec<Marble, Link>,
    current: Marble,
}

impl Circle {
    fn with_capacity(marbles: usize) -> Self {
        let mut links = IndexVec::with_capacity(marbles + 1);
        let zero = Marble::new(0);
        links.push(Link {
            prev: zero,
            next: zero,
        });
        Self {
            links,
            current: zero,
        }
    }

    fn clockwise(&self, from: Marble, steps: usize) -> Marble {
        (0..steps).fold(from, |m, _| self.links[m].next)
    }

    fn counter_clockwise(&self, from: Marble, steps: usize) -> Marble {
        (0..steps).fold(from, |m, _| self.links[m].prev)
    }

    /// Places the next marble between the marbles one and two steps clockwise
    /// of the current one.
    fn place(&mut self) {
        let prev = self.clockwise(self.current, 1);
        let next = self.links[prev].next;
        let marble = self.links.push(Link { prev, next });
        self.links[prev].next = marble;
        self.links[next].prev = marble;
        self.current = marble;
    }

    /// Removes the marble seven counter-clockwise of the current one,
    /// returning its value. The marble clockwise of it becomes current.
    fn take(&mut self) -> usize {
        let removed = self.counter_clockwise(self.current, 7);
        let Link { prev, next } = self.links[removed];
        self.links[prev].next = next;
        self.links[next].prev = prev;
        self.current = next;
        removed.index()
    }

    /// Burns a slot in the arena for a marble that is scored instead of
    /// placed.
    fn skip(&mut self) -> usize {
        let marble = self.links.push(Link {
            prev: self.current,
            next: self.current,
        });
        marble.index()
    }
}

/// The winning score.
pub fn high_score(players: usize, last_marble: usize) -> u64 {
    let mut scores = vec![0_u64; players];
    let mut circle = Circle::with_capacity(last_marble);

    for turn in 1..=last_marble {
        if turn % 23 == 0 {
            let scored = circle.skip() + circle.take();
            scores[(turn - 1) % players] += scored as u64;
        } else {
            circle.place();
        }
    }

    scores.into_iter().max().unwrap_or(0)
}

fn parse(input: &str) -> Option<(usize, usize)> {
    let (players, rest) = input.trim().split_once(" players; last marble is worth ")?;
    let last = rest.strip_suffix(" points")?;
    Some((players.parse().ok()?, last.parse().ok()?))
}

pub fn part_one(input: &str) -> Option<u64> {
    let (players, last) = parse(input)?;
    (players > 0).then(|| high_score(players, last))
}

pub fn part_two(input: &str) -> Option<u64> {
    let (players, last) = parse(input)?;
    (players > 0).then(|| high_score(players, last * 100))
}

fn main() {
    let input = &advent_archive::read_file("inputs", 2018, 9);
    advent_archive::solve!(1, part_one, input);
    advent_archive::solve!(2, part_two, input);
}
