//! 2018 Day 15: Beverage Bandits

use std::collections::{HashMap, HashSet};

use grid::Grid;
use pathfinding::prelude::dijkstra_all;

use advent_archive::{
    debug, debugln,
    helpers::{
        grid::{parse_dense, parse_sparse_with},
        pos::{manhattan, neighbours, reading_order, Pos},
    },
};

const HIT_POINTS: i32 = 200;
const GOBLIN_POWER: i32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Race {
    Elf,
    Goblin,
}

#[derive(Debug, Clone, Copy)]
struct Unit {
    race: Race,
    pos: Pos,
    hp: i32,
}

impl Unit {
    fn alive(&self) -> bool {
        self.hp > 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Round {
    Complete,
    /// Some unit found no enemies left on its turn.
    NoTargets,
    ElfDied,
}

#[derive(Clone)]
struct Battle {
    open: Grid<bool>,
    units: Vec<Unit>,
    elf_power: i32,
}

impl Battle {
    fn parse(input: &str) -> Option<Self> {
        let open = parse_dense(input, |ch| ch != '#')?;
        let units = parse_sparse_with(input, |ch| match ch {
            'E' => Some(Race::Elf),
            'G' => Some(Race::Goblin),
            _ => None,
        })
        .into_iter()
        .map(|(pos, race)| Unit {
            race,
            pos,
            hp: HIT_POINTS,
        })
        .collect();

        Some(Self {
            open,
            units,
            elf_power: 3,
        })
    }

    fn is_open(&self, pos: Pos) -> bool {
        let (Ok(row), Ok(col)) = (usize::try_from(pos.y), usize::try_from(pos.x)) else {
            return false;
        };
        self.open.get(row, col).copied().unwrap_or(false)
    }

    fn power(&self, race: Race) -> i32 {
        match race {
            Race::Elf => self.elf_power,
            Race::Goblin => GOBLIN_POWER,
        }
    }

    fn elves(&self) -> usize {
        self.units
            .iter()
            .filter(|u| u.alive() && u.race == Race::Elf)
            .count()
    }

    /// The adjacent enemy with the fewest hit points, ties broken in reading
    /// order.
    fn adjacent_target(&self, i: usize) -> Option<usize> {
        let me = self.units[i];
        self.units
            .iter()
            .enumerate()
            .filter(|(_, u)| u.alive() && u.race != me.race && manhattan(u.pos, me.pos) == 1)
            .min_by_key(|(_, u)| (u.hp, reading_order(&u.pos)))
            .map(|(j, _)| j)
    }

    /// Where unit `i` steps to get closer to its nearest reachable enemy.
    fn next_step(&self, i: usize) -> Option<Pos> {
        let me = self.units[i];
        let occupied: HashSet<Pos> = self
            .units
            .iter()
            .filter(|u| u.alive())
            .map(|u| u.pos)
            .collect();
        let free = |p: &Pos| self.is_open(*p) && !occupied.contains(p);
        let successors = |p: &Pos| {
            neighbours(*p)
                .filter(free)
                .map(|n| (n, 1_u32))
                .collect::<Vec<_>>()
        };

        let in_range: HashSet<Pos> = self
            .units
            .iter()
            .filter(|u| u.alive() && u.race != me.race)
            .flat_map(|u| neighbours(u.pos))
            .filter(free)
            .collect();

        let from_me: HashMap<Pos, (Pos, u32)> = dijkstra_all(&me.pos, successors);
        let target = in_range
            .iter()
            .filter_map(|p| from_me.get(p).map(|&(_, d)| (d, *p)))
            .min_by_key(|&(d, p)| (d, reading_order(&p)))
            .map(|(_, p)| p)?;

        // Step onto whichever free neighbour is closest to the chosen square.
        let from_target = dijkstra_all(&target, successors);
        neighbours(me.pos)
            .filter(free)
            .filter_map(|n| {
                let d = if n == target { 0 } else { from_target.get(&n)?.1 };
                Some((d, n))
            })
            .min_by_key(|&(d, n)| (d, reading_order(&n)))
            .map(|(_, n)| n)
    }

    fn round(&mut self, stop_on_elf_death: bool) -> Round {
        let mut order: Vec<usize> = (0..self.units.len()).collect();
        order.sort_by_key(|&i| reading_order(&self.units[i].pos));

        for i in order {
            let me = self.units[i];
            if !me.alive() {
                continue;
            }
            if !self.units.iter().any(|u| u.alive() && u.race != me.race) {
                return Round::NoTargets;
            }

            if self.adjacent_target(i).is_none() {
                if let Some(step) = self.next_step(i) {
                    self.units[i].pos = step;
                }
            }

            if let Some(j) = self.adjacent_target(i) {
                let power = self.power(me.race);
                let target = &mut self.units[j];
                target.hp -= power;
                if !target.alive() && target.race == Race::Elf && stop_on_elf_death {
                    return Round::ElfDied;
                }
            }
        }

        self.units.retain(Unit::alive);
        Round::Complete
    }

    /// Fights to the end, returning the outcome. With `stop_on_elf_death`
    /// the fight is abandoned (returning `None`) as soon as any elf dies.
    fn fight(&mut self, stop_on_elf_death: bool) -> Option<u32> {
        let mut rounds = 0;
        loop {
            match self.round(stop_on_elf_death) {
                Round::Complete => rounds += 1,
                Round::NoTargets => break,
                Round::ElfDied => {
                    debugln!("an elf died in round {}", rounds + 1);
                    return None;
                }
            }
        }

        let hp: i32 = self.units.iter().filter(|u| u.alive()).map(|u| u.hp).sum();
        debugln!("combat ends after {rounds} full rounds with {hp} total hit points left");
        Some(rounds * hp as u32)
    }
}

pub fn part_one(input: &str) -> Option<u32> {
    Battle::parse(input)?.fight(false)
}

/// The outcome with the smallest elf attack power that keeps every elf
/// alive.
pub fn part_two(input: &str) -> Option<u32> {
    let battle = Battle::parse(input)?;
    let elves = battle.elves();
    (4..=HIT_POINTS).find_map(|elf_power| {
        let mut attempt = Battle {
            elf_power,
            ..battle.clone()
        };
        debug!("elf attack {elf_power}: ");
        let outcome = attempt.fight(true)?;
        (attempt.elves() == elves).then_some(outcome)
    })
}

fn main() {
    let input = &advent_archive::read_file("inputs", 2018, 15);
    advent_archive::solve!(1, part_one, input);
    advent_archive::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIRST: &str = "\
#######
#.G...#
#...EG#
#.#.#G#
#..G#E#
#.....#
#######";

    const SECOND: &str = "\
#######
#G..#E#
#E#E.E#
#G.##.#
#...#E#
#...E.#
#######";

    const THIRD: &str = "\
#######
#E..EG#
#.#G.E#
#E.##E#
#G..#.#
#..E#.#
#######";

    const FOURTH: &str = "\
#######
#E.G#.#
#.#G..#
#G.#.G#
#G..#.#
#...E.#
#######";

    const FIFTH: &str = "\
#######
#.E...#
#.#..G#
#.###.#
#E#G#G#
#...#G#
#######";

    const SIXTH: &str = "\
#########
#G......#
#.E.#...#
#..##..G#
#...##..#
#...#...#
#.G...G.#
#.....G.#
#########";

    #[test]
    fn test_part_one() {
        assert_eq!(part_one(FIRST), Some(27730));
        assert_eq!(part_one(SECOND), Some(36334));
        assert_eq!(part_one(THIRD), Some(39514));
        assert_eq!(part_one(FOURTH), Some(27755));
        assert_eq!(part_one(FIFTH), Some(28944));
        assert_eq!(part_one(SIXTH), Some(18740));
    }

    #[test]
    fn test_part_two() {
        assert_eq!(part_two(FIRST), Some(4988));
        assert_eq!(part_two(THIRD), Some(31284));
        assert_eq!(part_two(FOURTH), Some(3478));
        assert_eq!(part_two(FIFTH), Some(6474));
        assert_eq!(part_two(SIXTH), Some(1140));
    }

    #[test]
    fn movement_prefers_reading_order() {
        let mut battle = Battle::parse(
            "\
#######
#E..G.#
#...#.#
#.G.#G#
#######",
        )
        .unwrap();
        let elf = battle
            .units
            .iter()
            .position(|u| u.race == Race::Elf)
            .unwrap();
        assert_eq!(battle.next_step(elf), Some(Pos::new(2, 1)));
        battle.round(false);
        let elf = battle.units.iter().find(|u| u.race == Race::Elf).unwrap();
        assert_eq!(elf.pos, Pos::new(2, 1));
    }
}
