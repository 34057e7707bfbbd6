//! 2019 Day 18: Many-Worlds Interpretation

use std::collections::{HashMap, HashSet, VecDeque};

use pathfinding::prelude::dijkstra;
use smallvec::SmallVec;

use advent_archive::helpers::{
    grid,
    pos::{neighbours, Pos, SURROUNDING},
};

/// Keys are nodes `0..26`; entrances are numbered from here.
const FIRST_ENTRANCE: u8 = 26;

type KeySet = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Route {
    to: u8,
    steps: u32,
    /// Doors on the way, as the keys that open them.
    needs: KeySet,
}

#[derive(Debug, Clone)]
struct Vault {
    open: HashSet<Pos>,
    keys: HashMap<Pos, u8>,
    doors: HashMap<Pos, u8>,
    entrances: Vec<Pos>,
}

impl Vault {
    fn parse(input: &str) -> Option<Self> {
        let mut vault = Vault {
            open: HashSet::new(),
            keys: HashMap::new(),
            doors: HashMap::new(),
            entrances: Vec::new(),
        };
        for (pos, ch) in grid::parse_sparse(input) {
            match ch {
                '#' => continue,
                '.' => {}
                '@' => vault.entrances.push(pos),
                'a'..='z' => {
                    vault.keys.insert(pos, ch as u8 - b'a');
                }
                'A'..='Z' => {
                    vault.doors.insert(pos, ch as u8 - b'A');
                }
                _ => return None,
            }
            vault.open.insert(pos);
        }
        if vault.entrances.is_empty() {
            return None;
        }
        vault.entrances.sort_unstable_by_key(|p| (p.y, p.x));
        Some(vault)
    }

    /// Walls off a lone entrance and puts a robot in each diagonal corner
    /// around it.
    fn split_entrance(&mut self) {
        let &[centre] = self.entrances.as_slice() else {
            return;
        };
        self.open.remove(&centre);
        for n in neighbours(centre) {
            self.open.remove(&n);
        }
        self.entrances = SURROUNDING
            .into_iter()
            .filter(|d| d.x != 0 && d.y != 0)
            .map(|d| centre + d)
            .collect();
    }

    fn all_keys(&self) -> KeySet {
        self.keys.values().fold(0, |set, &k| set | 1 << k)
    }

    /// Every key reachable from `start`, walking through doors but noting
    /// which ones were passed.
    fn routes_from(&self, start: Pos) -> Vec<Route> {
        let mut seen = HashSet::from([start]);
        let mut queue = VecDeque::from([(start, 0, 0)]);
        let mut routes = Vec::new();
        while let Some((pos, steps, needs)) = queue.pop_front() {
            if let Some(&to) = self.keys.get(&pos) {
                if pos != start {
                    routes.push(Route { to, steps, needs });
                }
            }
            let needs = match self.doors.get(&pos) {
                Some(&door) => needs | 1 << door,
                None => needs,
            };
            for next in neighbours(pos) {
                if self.open.contains(&next) && seen.insert(next) {
                    queue.push_back((next, steps + 1, needs));
                }
            }
        }
        routes
    }

    fn routes(&self) -> HashMap<u8, Vec<Route>> {
        let entrances = self
            .entrances
            .iter()
            .enumerate()
            .map(|(i, &pos)| (FIRST_ENTRANCE + i as u8, pos));
        let keys = self.keys.iter().map(|(&pos, &k)| (k, pos));
        entrances
            .chain(keys)
            .map(|(node, pos)| (node, self.routes_from(pos)))
            .collect()
    }

    /// Fewest steps for the robots to pick up every key.
    fn collect_all(&self) -> Option<u32> {
        let routes = self.routes();
        let goal = self.all_keys();

        let start = State {
            robots: (0..self.entrances.len())
                .map(|i| FIRST_ENTRANCE + i as u8)
                .collect(),
            keys: 0,
        };
        let successors = |state: &State| {
            let mut next = Vec::new();
            for (i, node) in state.robots.iter().enumerate() {
                for route in routes.get(node).into_iter().flatten() {
                    let key = 1 << route.to;
                    if state.keys & key != 0 || route.needs & !state.keys != 0 {
                        continue;
                    }
                    let mut robots = state.robots.clone();
                    robots[i] = route.to;
                    next.push((
                        State {
                            robots,
                            keys: state.keys | key,
                        },
                        route.steps,
                    ));
                }
            }
            next
        };
        let (_, steps) = dijkstra(&start, successors, |state| state.keys == goal)?;
        Some(steps)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct State {
    robots: SmallVec<[u8; 4]>,
    keys: KeySet,
}

pub fn part_one(input: &str) -> Option<u32> {
    Vault::parse(input)?.collect_all()
}

pub fn part_two(input: &str) -> Option<u32> {
    let mut vault = Vault::parse(input)?;
    vault.split_entrance();
    vault.collect_all()
}

fn main() {
    let input = &advent_archive::read_file("inputs", 2019, 18);
    advent_archive::solve!(1, part_one, input);
    advent_archive::solve!(2, part_two, input);
}
