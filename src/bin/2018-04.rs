//! 2018 Day 4: Repose Record

use std::collections::HashMap;

use advent_archive::helpers::parse;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Event {
    BeginsShift(u32),
    FallsAsleep,
    WakesUp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Record {
    minute: usize,
    event: Event,
}

/// For every guard, how many times they were asleep during each minute of
/// the midnight hour.
type SleepLog = HashMap<u32, [u32; 60]>;

fn sleep_log(input: &str) -> Option<SleepLog> {
    let mut lines: Vec<&str> = input.lines().filter(|l| !l.is_empty()).collect();
    // Timestamps are zero-padded, so text order is chronological.
    lines.sort_unstable();

    let mut log = SleepLog::new();
    let mut guard = None;
    let mut asleep_since = None;
    for line in lines {
        let record = parse::from_str(line, Record::parser()).ok()?;
        match record.event {
            Event::BeginsShift(id) => {
                guard = Some(id);
                asleep_since = None;
            }
            Event::FallsAsleep => asleep_since = Some(record.minute),
            Event::WakesUp => {
                let start = asleep_since.take()?;
                let minutes = log.entry(guard?).or_insert([0; 60]);
                for count in &mut minutes[start..record.minute] {
                    *count += 1;
                }
            }
        }
    }
    Some(log)
}

/// The minute a guard is most often asleep, and how often that is.
fn sleepiest_minute(minutes: &[u32; 60]) -> (usize, u32) {
    minutes
        .iter()
        .copied()
        .enumerate()
        .max_by_key(|&(minute, count)| (count, std::cmp::Reverse(minute)))
        .unwrap_or((0, 0))
}

/// Strategy 1: the guard asleep the most, times their sleepiest minute.
pub fn part_one(input: &str) -> Option<usize> {
    let log = sleep_log(input)?;
    let (&guard, minutes) = log
        .iter()
        .max_by_key(|(_, minutes)| minutes.iter().sum::<u32>())?;
    let (minute, _) = sleepiest_minute(minutes);
    Some(guard as usize * minute)
}

/// Strategy 2: the guard most frequently asleep on the same minute.
pub fn part_two(input: &str) -> Option<usize> {
    let log = sleep_log(input)?;
    let (guard, (minute, _)) = log
        .iter()
        .map(|(&guard, minutes)| (guard, sleepiest_minute(minutes)))
        .max_by_key(|&(_, (_, count))| count)?;
    Some(guard as usize * minute)
}

fn main() {
    let input = &advent_archive::read_file("inputs", 2018, 4);
    advent_archive::solve!(1, part_one, input);
    advent_archive::solve!(2, part_two, input);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_records() {
        let record = parse::from_str("[1518-11-01 23:58] Guard #99 begins shift", Record::parser());
        assert_eq!(
            record,
            Ok(Record {
                minute: 58,
                event: Event::BeginsShift(99)
            })
        );
    }

    #[test]
    fn test_part_one() {
        let input = advent_archive::read_file("examples", 2018, 4);
        assert_eq!(part_one(&input), Some(240));
    }

    #[test]
    fn test_part_two() {
        let input = advent_archive::read_file("examples", 2018, 4);
        assert_eq!(part_two(&input), Some(4455));
    }
}

mod parsing {
    use super::*;

    use advent_archive::helpers::parse;

    mod c {
        pub use combine::{parser::char::string, *};
    }

    use c::{ParseError, Parser, Stream};

    impl Event {
        pub fn parser<Input>() -> impl Parser<Input, Output = Self>
        where
            Input: Stream<Token = char>,
            Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
        {
            c::choice((
                c::string("Guard #")
                    .with(parse::decimal_integer())
                    .skip(c::string(" begins shift"))
                    .map(Event::BeginsShift),
                c::string("falls asleep").map(|_| Event::FallsAsleep),
                c::string("wakes up").map(|_| Event::WakesUp),
            ))
        }
    }

    impl Record {
        pub fn parser<Input>() -> impl Parser<Input, Output = Self>
        where
            Input: Stream<Token = char>,
            Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
        {
            // "[1518-11-01 00:05] falls asleep"
            let date = (
                parse::decimal_integer::<_, u32>(),
                c::token('-'),
                parse::decimal_integer::<_, u32>(),
                c::token('-'),
                parse::decimal_integer::<_, u32>(),
            );
            let time = (
                parse::decimal_integer::<_, u32>(),
                c::token(':'),
                parse::decimal_integer::<_, usize>(),
            )
                .map(|(_, _, minute)| minute);

            (
                c::token('['),
                date,
                c::token(' '),
                time,
                c::string("] "),
                Event::parser(),
            )
                .map(|(_, _, _, minute, _, event)| Record { minute, event })
        }
    }
}
