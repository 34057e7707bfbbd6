//! 2018 Day 14: Chocolate Charts

struct Scoreboard {
    scores: Vec<u8>,
    elves: [usize; 2],
}

impl Scoreboard {
    fn new() -> Self {
        Self {
            scores: vec![3, 7],
            elves: [0, 1],
        }
    }

    /// Combines the elves' current recipes into one or two new ones.
    fn step(&mut self) {
        let [a, b] = self.elves;
        let sum = self.scores[a] + self.scores[b];
        if sum >= 10 {
            self.scores.push(sum / 10);
        }
        self.scores.push(sum % 10);

        let len = self.scores.len();
        for elf in &mut self.elves {
            *elf = (*elf + 1 + usize::from(self.scores[*elf])) % len;
        }
    }
}

fn digits(s: &str) -> Option<Vec<u8>> {
    s.trim()
        .chars()
        .map(|ch| ch.to_digit(10).map(|d| d as u8))
        .collect()
}

/// The ten scores after the first `after` recipes.
pub fn part_one(input: &str) -> Option<String> {
    let after: usize = input.trim().parse().ok()?;
    let mut board = Scoreboard::new();
    while board.scores.len() < after + 10 {
        board.step();
    }
    Some(
        board.scores[after..after + 10]
            .iter()
            .map(|d| char::from(b'0' + d))
            .collect(),
    )
}

/// How many recipes appear before the input's digit sequence first does.
pub fn part_two(input: &str) -> Option<usize> {
    let target = digits(input)?;
    if target.is_empty() {
        return None;
    }

    let mut board = Scoreboard::new();
    let mut checked = 0;
    loop {
        while checked + target.len() <= board.scores.len() {
            if board.scores[checked..checked + target.len()] == target[..] {
                return Some(checked);
            }
            checked += 1;
        }
        board.step();
    }
}

fn main() {
    let input = &advent_archive::read_file("inputs", 2018, 14);
    advent_archive::solve!(1, part_one, input);
    advent_archive::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_one() {
        assert_eq!(part_one("9").as_deref(), Some("5158916779"));
        assert_eq!(part_one("5").as_deref(), Some("0124515891"));
        assert_eq!(part_one("18").as_deref(), Some("9251071085"));
        assert_eq!(part_one("2018").as_deref(), Some("5941429882"));
    }

    #[test]
    fn test_part_two() {
        assert_eq!(part_two("51589"), Some(9));
        assert_eq!(part_two("01245"), Some(5));
        assert_eq!(part_two("92510"), Some(18));
        assert_eq!(part_two("59414"), Some(2018));
    }
}
