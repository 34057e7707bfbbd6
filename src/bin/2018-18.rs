//! 2018 Day 18: Settlers of The North Pole

use std::collections::HashMap;

use grid::Grid;

use advent_archive::{
    debugln,
    helpers::{grid::parse_dense, pos::SURROUNDING},
};

const LONG_WAIT: usize = 1_000_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Acre {
    Open,
    Trees,
    Lumberyard,
}

fn parse(input: &str) -> Option<Grid<Acre>> {
    let grid = parse_dense(input, |ch| match ch {
        '|' => Some(Acre::Trees),
        '#' => Some(Acre::Lumberyard),
        '.' => Some(Acre::Open),
        _ => None,
    })?;
    let acres = grid.iter().copied().collect::<Option<Vec<_>>>()?;
    Some(Grid::from_vec(acres, grid.cols()))
}

fn neighbour_counts(area: &Grid<Acre>, row: usize, col: usize) -> (usize, usize) {
    let mut trees = 0;
    let mut yards = 0;
    for d in SURROUNDING {
        let (Some(r), Some(c)) = (
            row.checked_add_signed(d.y as isize),
            col.checked_add_signed(d.x as isize),
        ) else {
            continue;
        };
        match area.get(r, c) {
            Some(Acre::Trees) => trees += 1,
            Some(Acre::Lumberyard) => yards += 1,
            _ => {}
        }
    }
    (trees, yards)
}

fn minute(area: &Grid<Acre>) -> Grid<Acre> {
    let mut next = area.clone();
    for row in 0..area.rows() {
        for col in 0..area.cols() {
            let (trees, yards) = neighbour_counts(area, row, col);
            let (Some(acre), Some(slot)) = (area.get(row, col), next.get_mut(row, col)) else {
                continue;
            };
            *slot = match *acre {
                Acre::Open if trees >= 3 => Acre::Trees,
                Acre::Trees if yards >= 3 => Acre::Lumberyard,
                Acre::Lumberyard if yards == 0 || trees == 0 => Acre::Open,
                acre => acre,
            };
        }
    }
    next
}

fn resource_value(area: &Grid<Acre>) -> usize {
    let count = |kind| area.iter().filter(|&&acre| acre == kind).count();
    count(Acre::Trees) * count(Acre::Lumberyard)
}

/// The area after `minutes`, skipping ahead once the landscape starts
/// repeating itself.
fn after(mut area: Grid<Acre>, minutes: usize) -> Grid<Acre> {
    let mut seen: HashMap<Vec<Acre>, usize> = HashMap::new();
    let mut t = 0;
    while t < minutes {
        let key: Vec<Acre> = area.iter().copied().collect();
        if let Some(&first) = seen.get(&key) {
            let period = t - first;
            debugln!("minute {t} repeats minute {first}");
            for _ in 0..(minutes - t) % period {
                area = minute(&area);
            }
            return area;
        }
        seen.insert(key, t);
        area = minute(&area);
        t += 1;
    }
    area
}

pub fn part_one(input: &str) -> Option<usize> {
    Some(resource_value(&after(parse(input)?, 10)))
}

pub fn part_two(input: &str) -> Option<usize> {
    Some(resource_value(&after(parse(input)?, LONG_WAIT)))
}

fn main() {
    let input = &advent_archive::read_file("inputs", 2018, 18);
    advent_archive::solve!(1, part_one, input);
    advent_archive::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_one() {
        let input = advent_archive::read_file("examples", 2018, 18);
        assert_eq!(part_one(&input), Some(1147));
    }

    #[test]
    fn cycle_skipping_matches_simulation() {
        let input = advent_archive::read_file("examples", 2018, 18);
        let area = parse(&input).unwrap();
        let mut simulated = area.clone();
        for _ in 0..200 {
            simulated = minute(&simulated);
        }
        assert_eq!(resource_value(&after(area, 200)), resource_value(&simulated));
    }

    #[test]
    fn unknown_acre() {
        assert_eq!(part_one(".#\n|x"), None);
    }
}
