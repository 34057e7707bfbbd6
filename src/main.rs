/*
 * This file contains template code.
 * Runs every solution in `src/bin` (optionally filtered) and prints a summary.
 */
use std::fs;
use std::process::{self, Command, Output};

use advent_archive::{ANSI_BOLD, ANSI_ITALIC, ANSI_RESET};
use prettytable::{row, Table};

const HELP: &str = "\
Runs every puzzle solution and prints a summary.

USAGE:
  cargo run [-- OPTIONS]

OPTIONS:
  --year YYYY   only run puzzles from this year
  --day D       only run puzzles from this day
  --debug       build without optimisations
  -h, --help    print this help
";

struct Args {
    year: Option<u16>,
    day: Option<u8>,
    release: bool,
}

fn parse_args() -> Result<Args, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        process::exit(0);
    }

    let parsed = Args {
        year: args.opt_value_from_str("--year")?,
        day: args.opt_value_from_str("--day")?,
        release: !args.contains("--debug"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("Warning: unused arguments left: {remaining:?}");
    }
    Ok(parsed)
}

/// Every `src/bin/YYYY-DD.rs` solution as `(year, day)`, in order.
fn discover_puzzles() -> Vec<(u16, u8)> {
    let Ok(entries) = fs::read_dir("src/bin") else {
        return Vec::new();
    };

    let mut puzzles: Vec<(u16, u8)> = entries
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| {
            let name = entry.file_name().into_string().ok()?;
            let (year, day) = name.strip_suffix(".rs")?.split_once('-')?;
            Some((year.parse().ok()?, day.parse().ok()?))
        })
        .collect();
    puzzles.sort_unstable();
    puzzles
}

/// The summary table's status for one finished solution.
fn status(output: &Output) -> &'static str {
    let stdout = String::from_utf8_lossy(&output.stdout);
    if !output.status.success() {
        "error"
    } else if stdout.trim().is_empty() || stdout.matches("not solved.").count() == 2 {
        "not solved"
    } else {
        "ok"
    }
}

/// What a failed solution wrote to stderr, such as a missing input file.
fn failure_report(bin: &str, output: &Output) -> Option<String> {
    if output.status.success() {
        return None;
    }
    let stderr = String::from_utf8_lossy(&output.stderr);
    Some(format!("{bin} failed ({}):\n{}", output.status, stderr.trim_end()))
}

fn main() {
    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Failed to process arguments: {e}");
            process::exit(1);
        }
    };

    let puzzles: Vec<(u16, u8)> = discover_puzzles()
        .into_iter()
        .filter(|&(year, _)| args.year.map_or(true, |y| y == year))
        .filter(|&(_, day)| args.day.map_or(true, |d| d == day))
        .collect();

    let mut summary = Table::new();
    summary.set_titles(row!["Puzzle", "Status", "Time (ms)"]);

    let mut total = 0_f64;
    for (year, day) in puzzles {
        let bin = format!("{year}-{day:02}");

        let mut cmd = Command::new("cargo");
        cmd.args(["run", "--quiet", "--bin", &bin]);
        if args.release {
            cmd.arg("--release");
        }

        println!("----------------");
        println!("{ANSI_BOLD}| {year} Day {day:02} |{ANSI_RESET}");
        println!("----------------");

        let output = match cmd.output() {
            Ok(output) => output,
            Err(e) => {
                eprintln!("Failed to run {bin}: {e}");
                summary.add_row(row![bin, "failed to start", ""]);
                continue;
            }
        };

        let stdout = String::from_utf8_lossy(&output.stdout);
        let status = status(&output);

        if stdout.trim().is_empty() {
            println!("Not solved.");
        } else {
            println!("{}", stdout.trim());
        }
        if let Some(report) = failure_report(&bin, &output) {
            eprintln!("{report}");
        }

        let elapsed = advent_archive::parse_exec_time(&stdout);
        total += elapsed;
        summary.add_row(row![bin, status, format!("{elapsed:.2}")]);
    }

    println!();
    summary.printstd();
    println!("{ANSI_BOLD}Total:{ANSI_RESET} {ANSI_ITALIC}{total:.2}ms{ANSI_RESET}");
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    use std::os::unix::process::ExitStatusExt;
    use std::process::ExitStatus;

    fn finished(code: i32, stdout: &str, stderr: &str) -> Output {
        Output {
            status: ExitStatus::from_raw(code << 8),
            stdout: stdout.as_bytes().to_vec(),
            stderr: stderr.as_bytes().to_vec(),
        }
    }

    #[test]
    fn failures_keep_stderr() {
        let output = finished(101, "", "could not open input file \"src/inputs/2018-22.txt\"\n");
        assert_eq!(status(&output), "error");
        let report = failure_report("2018-22", &output).unwrap();
        assert!(report.starts_with("2018-22 failed"));
        assert!(report.ends_with("could not open input file \"src/inputs/2018-22.txt\""));
    }

    #[test]
    fn successes_have_no_report() {
        let output = finished(0, "Part 1: 114\n", "");
        assert_eq!(status(&output), "ok");
        assert_eq!(failure_report("2018-22", &output), None);
    }
}
