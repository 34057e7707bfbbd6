//! 2019 Day 10: Monitoring Station

use std::collections::{HashMap, HashSet};
use std::f64::consts::TAU;

use advent_archive::helpers::{grid::parse_sparse_with, math::gcd, pos::Pos};

const BET_ON: usize = 200;

fn asteroids(input: &str) -> Vec<Pos> {
    parse_sparse_with(input, |ch| (ch == '#').then_some(()))
        .into_keys()
        .collect()
}

/// The smallest whole step from `from` that lands on `to`.
fn direction(from: Pos, to: Pos) -> Pos {
    let d = to - from;
    let g = gcd(d.x.into(), d.y.into()) as i32;
    d / g
}

/// Clockwise angle from straight up, in `[0, TAU)`.
fn bearing(dir: Pos) -> f64 {
    let angle = f64::from(dir.x).atan2(-f64::from(dir.y));
    if angle < 0.0 {
        angle + TAU
    } else {
        angle
    }
}

fn visible_from(asteroids: &[Pos], station: Pos) -> usize {
    asteroids
        .iter()
        .filter(|&&a| a != station)
        .map(|&a| direction(station, a))
        .collect::<HashSet<_>>()
        .len()
}

fn best_station(asteroids: &[Pos]) -> Option<(Pos, usize)> {
    asteroids
        .iter()
        .map(|&a| (a, visible_from(asteroids, a)))
        .max_by_key(|&(_, seen)| seen)
}

/// The order the laser at `station` destroys every other asteroid in.
fn vaporise_order(asteroids: &[Pos], station: Pos) -> Vec<Pos> {
    let mut lines: HashMap<Pos, Vec<Pos>> = HashMap::new();
    for &a in asteroids.iter().filter(|&&a| a != station) {
        lines.entry(direction(station, a)).or_default().push(a);
    }

    let mut lines: Vec<(Pos, Vec<Pos>)> = lines.into_iter().collect();
    lines.sort_by(|(a, _), (b, _)| bearing(*a).total_cmp(&bearing(*b)));
    for (_, line) in &mut lines {
        // Farthest first, so the nearest is popped first.
        line.sort_by_key(|&a| std::cmp::Reverse((a - station).abs().max_element()));
    }

    let mut order = Vec::with_capacity(asteroids.len());
    while order.len() + 1 < asteroids.len() {
        for (_, line) in &mut lines {
            order.extend(line.pop());
        }
    }
    order
}

pub fn part_one(input: &str) -> Option<usize> {
    best_station(&asteroids(input)).map(|(_, seen)| seen)
}

pub fn part_two(input: &str) -> Option<i32> {
    let asteroids = asteroids(input);
    let (station, _) = best_station(&asteroids)?;
    let target = *vaporise_order(&asteroids, station).get(BET_ON - 1)?;
    Some(target.x * 100 + target.y)
}

fn main() {
    let input = &advent_archive::read_file("inputs", 2019, 10);
    advent_archive::solve!(1, part_one, input);
    advent_archive::solve!(2, part_two, input);
}
