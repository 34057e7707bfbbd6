use std::env;
use std::fs;

pub mod elfcode;
pub mod helpers;
pub mod intcode;

pub const ANSI_ITALIC: &str = "\x1b[3m";
pub const ANSI_BOLD: &str = "\x1b[1m";
pub const ANSI_RESET: &str = "\x1b[0m";

/// Prints one part's answer along with how long the solver took.
///
/// `$solver` is called with `$input` directly, so the usual deref coercions
/// apply (e.g. `&String` to `&str`).
#[macro_export]
macro_rules! solve {
    ($part:expr, $solver:ident, $input:expr) => {{
        use std::fmt::Display;
        use std::time::{Duration, Instant};
        use $crate::{ANSI_BOLD, ANSI_ITALIC, ANSI_RESET};

        fn print_result<T: Display>(result: Option<T>, elapsed: Duration) {
            match result {
                Some(result) => {
                    let result = result.to_string();
                    if result.contains('\n') {
                        println!("\n{result}");
                        println!("{ANSI_ITALIC}(elapsed: {elapsed:.2?}){ANSI_RESET}");
                    } else {
                        println!("{result} {ANSI_ITALIC}(elapsed: {elapsed:.2?}){ANSI_RESET}");
                    }
                }
                None => {
                    println!("not solved.")
                }
            }
        }

        println!("🎄 {ANSI_BOLD}Part {}{ANSI_RESET} 🎄", $part);
        let timer = Instant::now();
        let result = $solver($input);
        print_result(result, timer.elapsed());
    }};
}

/// Like `print!`, but only in debug builds.
#[macro_export]
macro_rules! debug {
    ($($tt:tt)*) => {
        #[cfg(debug_assertions)]
        print!($($tt)*)
    };
}

/// Like `println!`, but only in debug builds.
#[macro_export]
macro_rules! debugln {
    ($($tt:tt)*) => {
        #[cfg(debug_assertions)]
        println!($($tt)*)
    };
}

/// Reads `src/{folder}/{year}-{day:02}.txt`.
pub fn read_file(folder: &str, year: u16, day: u8) -> String {
    let cwd = env::current_dir().unwrap();

    let filepath = cwd
        .join("src")
        .join(folder)
        .join(format!("{year}-{day:02}.txt"));

    match fs::read_to_string(&filepath) {
        Ok(contents) => contents,
        Err(err) => panic!("could not open input file {}: {err}", filepath.display()),
    }
}

fn parse_time(val: &str, postfix: &str) -> f64 {
    val.split(postfix).next().unwrap_or("0").parse().unwrap_or(0_f64)
}

/// Sums every `(elapsed: ...)` marker in a solver's output, in milliseconds.
pub fn parse_exec_time(output: &str) -> f64 {
    output.lines().fold(0_f64, |acc, l| {
        if !l.contains("elapsed:") {
            acc
        } else {
            let timing = l.split("(elapsed: ").last().unwrap_or("");
            // use `contains` instead of `ends_with`: string may contain ANSI escape sequences.
            // for possible time formats, see: https://github.com/rust-lang/rust/blob/1.64.0/library/core/src/time.rs#L1176-L1200
            if timing.contains("ns)") {
                acc // range below rounding precision.
            } else if timing.contains("µs)") {
                acc + parse_time(timing, "µs") / 1000_f64
            } else if timing.contains("ms)") {
                acc + parse_time(timing, "ms")
            } else if timing.contains("s)") {
                acc + parse_time(timing, "s") * 1000_f64
            } else {
                acc
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[track_caller]
    fn assert_ms(output: &str, expected: f64) {
        let actual = parse_exec_time(output);
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}ms, got {actual}ms"
        );
    }

    #[test]
    fn test_parse_exec_time() {
        assert_ms(
            &format!(
                "🎄 Part 1 🎄\n0 (elapsed: 74.13ns){ANSI_RESET}\n🎄 Part 2 🎄\n0 (elapsed: 50.00ns){ANSI_RESET}"
            ),
            0_f64,
        );
        assert_ms(
            "🎄 Part 1 🎄\n0 (elapsed: 755µs)\n🎄 Part 2 🎄\n0 (elapsed: 700µs)",
            1.455_f64,
        );
        assert_ms(
            "🎄 Part 1 🎄\n0 (elapsed: 70µs)\n🎄 Part 2 🎄\n0 (elapsed: 1.45ms)",
            1.52_f64,
        );
        assert_ms(
            "🎄 Part 1 🎄\n0 (elapsed: 10.3s)\n🎄 Part 2 🎄\n0 (elapsed: 100.50ms)",
            10400.50_f64,
        );
    }

    #[test]
    fn test_parse_exec_time_ignores_unmarked_lines() {
        assert_eq!(parse_exec_time("not solved.\nnot solved."), 0_f64);
    }
}
