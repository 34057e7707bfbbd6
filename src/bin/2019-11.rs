//! 2019 Day 11: Space Police

use advent_archive::{
    debugln,
    helpers::{
        grid::{self, SparseGrid},
        pos::{turn_left, turn_right, Pos, UP},
    },
    intcode::{Event, Machine},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    Black,
    White,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Turn {
    Left,
    Right,
}

/// Whatever drives the robot: shown the panel under it, decides what to
/// paint there and which way to turn. `None` means it has stopped.
trait Brain {
    fn think(&mut self, under: Color) -> Option<(Color, Turn)>;
}

impl Brain for Machine {
    fn think(&mut self, under: Color) -> Option<(Color, Turn)> {
        self.push_input(match under {
            Color::Black => 0,
            Color::White => 1,
        });
        let (Ok(Event::Output(paint)), Ok(Event::Output(turn))) = (self.run(), self.run()) else {
            return None;
        };
        let paint = if paint == 0 { Color::Black } else { Color::White };
        let turn = if turn == 0 { Turn::Left } else { Turn::Right };
        Some((paint, turn))
    }
}

/// Every panel the robot painted, starting on a panel of colour `start`.
fn paint(brain: &mut impl Brain, start: Color) -> SparseGrid<Color> {
    let mut hull = SparseGrid::new();
    hull.insert(Pos::ZERO, start);
    let mut pos = Pos::ZERO;
    let mut dir = UP;
    let mut painted = SparseGrid::new();

    loop {
        let under = hull.get(&pos).copied().unwrap_or(Color::Black);
        let Some((color, turn)) = brain.think(under) else {
            break;
        };
        hull.insert(pos, color);
        painted.insert(pos, color);
        dir = match turn {
            Turn::Left => turn_left(dir),
            Turn::Right => turn_right(dir),
        };
        pos += dir;
    }

    debugln!("painted {} panels", painted.len());
    painted
}

pub fn part_one(input: &str) -> Option<usize> {
    let mut robot: Machine = input.parse().ok()?;
    Some(paint(&mut robot, Color::Black).len())
}

pub fn part_two(input: &str) -> Option<String> {
    let mut robot: Machine = input.parse().ok()?;
    let white: SparseGrid<()> = paint(&mut robot, Color::White)
        .into_iter()
        .filter(|&(_, color)| color == Color::White)
        .map(|(pos, _)| (pos, ()))
        .collect();
    Some(grid::render(&white, |_, panel| {
        if panel.is_some() {
            '#'
        } else {
            '.'
        }
    }))
}

fn main() {
    let input = &advent_archive::read_file("inputs", 2019, 11);
    advent_archive::solve!(1, part_one, input);
    advent_archive::solve!(2, part_two, input);
}
