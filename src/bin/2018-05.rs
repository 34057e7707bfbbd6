//! 2018 Day 5: Alchemical Reduction

/// Two units react when they are the same type with opposite polarity.
fn reacts(a: u8, b: u8) -> bool {
    a != b && a.eq_ignore_ascii_case(&b)
}

/// Fully reacts the polymer, skipping units for which `skip` returns true.
fn reduced_len(polymer: &[u8], skip: impl Fn(u8) -> bool) -> usize {
    let mut stack: Vec<u8> = Vec::with_capacity(polymer.len());
    for &unit in polymer.iter().filter(|&&u| !skip(u)) {
        match stack.last() {
            Some(&top) if reacts(top, unit) => {
                stack.pop();
            }
            _ => stack.push(unit),
        }
    }
    stack.len()
}

pub fn part_one(input: &str) -> Option<usize> {
    Some(reduced_len(input.trim().as_bytes(), |_| false))
}

/// The shortest polymer achievable by removing every unit of one type first.
pub fn part_two(input: &str) -> Option<usize> {
    let polymer = input.trim().as_bytes();
    (b'a'..=b'z')
        .map(|removed| reduced_len(polymer, |u| u.to_ascii_lowercase() == removed))
        .min()
}

fn main() {
    let input = &advent_archive::read_file("inputs", 2018, 5);
    advent_archive::solve!(1, part_one, input);
    advent_archive::solve!(2, part_two, input);
}
