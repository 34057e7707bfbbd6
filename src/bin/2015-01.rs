//! 2015 Day 1: Not Quite Lisp

fn floor_change(ch: char) -> i32 {
    match ch {
        '(' => 1,
        ')' => -1,
        _ => 0,
    }
}

/// The floor Santa ends up on.
pub fn part_one(input: &str) -> Option<i32> {
    Some(input.chars().map(floor_change).sum())
}

/// The 1-based position of the first instruction that takes Santa into the
/// basement.
pub fn part_two(input: &str) -> Option<usize> {
    input
        .chars()
        .scan(0, |floor, ch| {
            *floor += floor_change(ch);
            Some(*floor)
        })
        .position(|floor| floor < 0)
        .map(|i| i + 1)
}

fn main() {
    let input = &advent_archive::read_file("inputs", 2015, 1);
    advent_archive::solve!(1, part_one, input);
    advent_archive::solve!(2, part_two, input);
}
