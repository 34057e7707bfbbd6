//! 2018 Day 6: Chronal Coordinates

use std::collections::{HashMap, HashSet};

use advent_archive::helpers::{
    grid,
    pos::{manhattan, Pos},
};

/// Total-distance limit for the safe region.
const SAFE_DISTANCE: i32 = 10_000;

fn parse_points(input: &str) -> Option<Vec<Pos>> {
    input
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|line| {
            let (x, y) = line.split_once(',')?;
            Some(Pos::new(x.trim().parse().ok()?, y.trim().parse().ok()?))
        })
        .collect()
}

/// The index of the single closest point, or `None` on a tie.
fn closest(points: &[Pos], pos: Pos) -> Option<usize> {
    let mut best = None;
    let mut best_distance = i32::MAX;
    let mut tied = false;
    for (i, &point) in points.iter().enumerate() {
        let d = manhattan(point, pos);
        if d < best_distance {
            best = Some(i);
            best_distance = d;
            tied = false;
        } else if d == best_distance {
            tied = true;
        }
    }
    if tied {
        None
    } else {
        best
    }
}

/// The size of the largest area that isn't infinite.
///
/// Any area touching the bounding box of the points extends forever.
pub fn part_one(input: &str) -> Option<usize> {
    let points = parse_points(input)?;
    let (min, max) = grid::bounds(&points)?;

    let mut areas: HashMap<usize, usize> = HashMap::new();
    let mut infinite = HashSet::new();
    for x in min.x..=max.x {
        for y in min.y..=max.y {
            let Some(owner) = closest(&points, Pos::new(x, y)) else {
                continue;
            };
            *areas.entry(owner).or_default() += 1;
            if x == min.x || x == max.x || y == min.y || y == max.y {
                infinite.insert(owner);
            }
        }
    }

    areas
        .into_iter()
        .filter(|(owner, _)| !infinite.contains(owner))
        .map(|(_, area)| area)
        .max()
}

fn safe_region_size(points: &[Pos], limit: i32) -> Option<usize> {
    let (min, max) = grid::bounds(points)?;
    // A point further than `limit / n` outside the box can't be in the region.
    let margin = limit / points.len() as i32 + 1;
    let (min, max) = (min - Pos::splat(margin), max + Pos::splat(margin));

    let count = (min.x..=max.x)
        .flat_map(|x| (min.y..=max.y).map(move |y| Pos::new(x, y)))
        .filter(|&pos| points.iter().map(|&p| manhattan(p, pos)).sum::<i32>() < limit)
        .count();
    Some(count)
}

pub fn part_two(input: &str) -> Option<usize> {
    safe_region_size(&parse_points(input)?, SAFE_DISTANCE)
}

fn main() {
    let input = &advent_archive::read_file("inputs", 2018, 6);
    advent_archive::solve!(1, part_one, input);
    advent_archive::solve!(2, part_two, input);
}
