//! 2019 Day 16: Flawed Frequency Transmission

const PHASES: usize = 100;
const REPEATS: usize = 10_000;

fn digits(input: &str) -> Option<Vec<i32>> {
    input
        .trim()
        .chars()
        .map(|ch| ch.to_digit(10).map(|d| d as i32))
        .collect()
}

fn to_string(digits: &[i32]) -> String {
    digits.iter().map(|d| d.to_string()).collect()
}

/// One phase. Output digit `i` repeats each pattern element `i + 1` times,
/// so it is a sum of alternating `+` and `-` blocks of that width, each
/// read off a running sum.
fn phase(signal: &[i32]) -> Vec<i32> {
    let n = signal.len();
    let mut prefix = vec![0; n + 1];
    for (i, &d) in signal.iter().enumerate() {
        prefix[i + 1] = prefix[i] + d;
    }
    let block = |from: usize, width: usize| prefix[(from + width).min(n)] - prefix[from.min(n)];

    (0..n)
        .map(|i| {
            let width = i + 1;
            let mut total = 0;
            let mut start = i;
            while start < n {
                total += block(start, width) - block(start + 2 * width, width);
                start += 4 * width;
            }
            (total % 10).abs()
        })
        .collect()
}

fn first_eight_after(signal: &[i32], phases: usize) -> String {
    let mut signal = signal.to_vec();
    for _ in 0..phases {
        signal = phase(&signal);
    }
    to_string(&signal[..8.min(signal.len())])
}

/// The message inside the full signal. It sits in the second half, where
/// every pattern is zeros followed by ones, so each digit is just the sum
/// of everything after it.
fn embedded_message(signal: &[i32]) -> Option<String> {
    let offset = signal
        .get(..7)?
        .iter()
        .fold(0, |acc, &d| acc * 10 + d as usize);
    let len = signal.len() * REPEATS;
    if offset < len / 2 || offset + 8 > len {
        return None;
    }

    let mut tail: Vec<i32> = (offset..len).map(|i| signal[i % signal.len()]).collect();
    for _ in 0..PHASES {
        let mut sum = 0;
        for d in tail.iter_mut().rev() {
            sum = (sum + *d) % 10;
            *d = sum;
        }
    }
    Some(to_string(&tail[..8]))
}

pub fn part_one(input: &str) -> Option<String> {
    Some(first_eight_after(&digits(input)?, PHASES))
}

pub fn part_two(input: &str) -> Option<String> {
    embedded_message(&digits(input)?)
}

fn main() {
    let input = &advent_archive::read_file("inputs", 2019, 16);
    advent_archive::solve!(1, part_one, input);
    advent_archive::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases() {
        let signal = digits("12345678").unwrap();
        assert_eq!(to_string(&phase(&signal)), "48226158");
        assert_eq!(first_eight_after(&signal, 4), "01029498");
    }

    #[test]
    fn test_part_one() {
        let check = |input, expected: &str| assert_eq!(part_one(input).as_deref(), Some(expected));
        check("80871224585914546619083218645595", "24176176");
        check("19617804207202209144916044189917", "73745418");
        check("69317163492948606335995924319873", "52432133");
    }

    #[test]
    fn test_part_two() {
        let check = |input, expected: &str| assert_eq!(part_two(input).as_deref(), Some(expected));
        check("03036732577212944063491565474664", "84462026");
        check("02935109699940807407585447034323", "78725270");
        check("03081770884921959731165446850517", "53553731");
    }
}
