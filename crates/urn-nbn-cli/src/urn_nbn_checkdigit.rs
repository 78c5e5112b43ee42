//! URN:NBN:DE check digit CLI
//!
//! Usage: urn_nbn_checkdigit <command> [URN ...] [options]
//!
//! Commands:
//!   append   Print each URN with its check digit appended
//!   calc     Print the check digit of each URN
//!   verify   Check the trailing check digit of each URN
//!
//! Options:
//!   --verbose, -v  Enable debug logging (RUST_LOG overrides)
//!   --help, -h     Show help
//!
//! Without URN arguments (or with `-`), URNs are read from stdin, one per line.
//! `-` cannot be combined with URN arguments.
//!
//! Example: urn_nbn_checkdigit append urn:nbn:de:bvb:12-bsb00103137-

use std::env;
use std::io::{self, BufRead};
use std::process::ExitCode;
use std::time::Instant;

use tracing_subscriber::EnvFilter;
use urn_nbn_checkdigit::app::batch::BatchSummary;
use urn_nbn_checkdigit::constants::NAMESPACE_PREFIX;
use urn_nbn_checkdigit::CheckDigitError;

#[cfg(feature = "parallel")]
use urn_nbn_checkdigit::app::batch::{
    append_check_digits_parallel, calc_all_parallel, verify_all_parallel,
};
#[cfg(not(feature = "parallel"))]
use urn_nbn_checkdigit::app::batch::{append_check_digits, calc_all, verify_all};

const EXIT_USAGE: u8 = 1;
const EXIT_FAILED: u8 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Command {
    Append,
    Calc,
    Verify,
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    command: Command,
    urns: Vec<String>,
    verbose: bool,
}

enum ParseOutcome {
    Run(Args),
    Help,
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} <command> [URN ...] [options]", program);
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  append         Print each URN with its check digit appended");
    eprintln!("  calc           Print the check digit of each URN");
    eprintln!("  verify         Check the trailing check digit of each URN");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --verbose, -v  Enable debug logging (RUST_LOG overrides)");
    eprintln!("  --help, -h     Show this help message");
    eprintln!();
    eprintln!("Without URN arguments (or with '-'), URNs are read from stdin.");
    eprintln!("'-' cannot be combined with URN arguments.");
    eprintln!("Note: include trailing separators, e.g. {}:bvb:12-bsb00103137-", NAMESPACE_PREFIX);
}

fn parse_args(args: &[String]) -> Result<ParseOutcome, String> {
    let mut command: Option<Command> = None;
    let mut urns = Vec::new();
    let mut verbose = false;
    let mut stdin_marker = false;

    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--help" | "-h" => return Ok(ParseOutcome::Help),
            "--verbose" | "-v" => verbose = true,
            "-" => stdin_marker = true,
            other if other.starts_with('-') => {
                return Err(format!("Unknown option: {}", other));
            }
            value if command.is_none() => {
                command = Some(match value {
                    "append" => Command::Append,
                    "calc" => Command::Calc,
                    "verify" => Command::Verify,
                    _ => return Err(format!("Unknown command: {}", value)),
                });
            }
            value => urns.push(value.to_string()),
        }
    }

    let command = command.ok_or_else(|| "Missing command".to_string())?;
    if stdin_marker && !urns.is_empty() {
        return Err("'-' (read stdin) cannot be combined with URN arguments".to_string());
    }
    Ok(ParseOutcome::Run(Args {
        command,
        urns,
        verbose,
    }))
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Read one URN per line, trimming whitespace and skipping blank lines
fn read_urns<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut urns = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            urns.push(trimmed.to_string());
        }
    }
    Ok(urns)
}

fn report_error(urn: &str, err: &CheckDigitError) {
    eprintln!("error: {}: {}", urn, err);
}

fn run_append(urns: &[String]) -> BatchSummary {
    #[cfg(feature = "parallel")]
    let results = append_check_digits_parallel(urns);
    #[cfg(not(feature = "parallel"))]
    let results = append_check_digits(urns);

    for (urn, result) in urns.iter().zip(&results) {
        match result {
            Ok(complete) => println!("{}", complete),
            Err(e) => report_error(urn, e),
        }
    }

    BatchSummary::from_results(&results)
}

fn run_calc(urns: &[String]) -> BatchSummary {
    #[cfg(feature = "parallel")]
    let results = calc_all_parallel(urns);
    #[cfg(not(feature = "parallel"))]
    let results = calc_all(urns);

    for (urn, result) in urns.iter().zip(&results) {
        match result {
            Ok(digit) => println!("{}", digit),
            Err(e) => report_error(urn, e),
        }
    }

    BatchSummary::from_results(&results)
}

/// Returns the summary and the number of mismatched check digits
fn run_verify(urns: &[String]) -> (BatchSummary, usize) {
    #[cfg(feature = "parallel")]
    let results = verify_all_parallel(urns);
    #[cfg(not(feature = "parallel"))]
    let results = verify_all(urns);

    let mut mismatches = 0;
    for (urn, result) in urns.iter().zip(&results) {
        match result {
            Ok(true) => println!("OK {}", urn),
            Ok(false) => {
                mismatches += 1;
                println!("MISMATCH {}", urn);
            }
            Err(e) => report_error(urn, e),
        }
    }

    (BatchSummary::from_results(&results), mismatches)
}

/// Map the outcome of a run to the process exit code
fn exit_status(summary: &BatchSummary, mismatches: usize) -> u8 {
    if summary.is_clean() && mismatches == 0 {
        0
    } else {
        EXIT_FAILED
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("urn_nbn_checkdigit");

    let args = match parse_args(&args) {
        Ok(ParseOutcome::Run(args)) => args,
        Ok(ParseOutcome::Help) => {
            print_usage(program);
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            print_usage(program);
            return ExitCode::from(EXIT_USAGE);
        }
    };

    init_logging(args.verbose);

    let urns = if args.urns.is_empty() {
        match read_urns(io::stdin().lock()) {
            Ok(urns) => urns,
            Err(e) => {
                eprintln!("Error reading stdin: {}", e);
                return ExitCode::from(EXIT_USAGE);
            }
        }
    } else {
        args.urns
    };

    tracing::debug!(command = ?args.command, count = urns.len(), "processing URNs");
    let start = Instant::now();

    let (summary, mismatches) = match args.command {
        Command::Append => (run_append(&urns), 0),
        Command::Calc => (run_calc(&urns), 0),
        Command::Verify => run_verify(&urns),
    };

    tracing::info!(
        total = summary.total,
        failed = summary.failed,
        mismatches,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "done"
    );

    ExitCode::from(exit_status(&summary, mismatches))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("urn_nbn_checkdigit")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    fn parse_run(list: &[&str]) -> Args {
        match parse_args(&args(list)) {
            Ok(ParseOutcome::Run(parsed)) => parsed,
            Ok(ParseOutcome::Help) => panic!("unexpected help"),
            Err(e) => panic!("unexpected error: {}", e),
        }
    }

    #[test]
    fn test_parse_append_with_urns() {
        let parsed = parse_run(&["append", "urn:nbn:de:a-", "urn:nbn:de:b-"]);
        assert_eq!(parsed.command, Command::Append);
        assert_eq!(parsed.urns, vec!["urn:nbn:de:a-", "urn:nbn:de:b-"]);
        assert!(!parsed.verbose);
    }

    #[test]
    fn test_parse_stdin_marker() {
        let parsed = parse_run(&["verify", "-", "-v"]);
        assert_eq!(parsed.command, Command::Verify);
        assert!(parsed.urns.is_empty());
        assert!(parsed.verbose);
    }

    #[test]
    fn test_parse_help() {
        assert!(matches!(
            parse_args(&args(&["calc", "--help"])),
            Ok(ParseOutcome::Help)
        ));
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_args(&args(&[])).is_err());
        assert!(parse_args(&args(&["frobnicate"])).is_err());
        assert!(parse_args(&args(&["calc", "--jobs"])).is_err());
        assert!(parse_args(&args(&["calc", "-x"])).is_err());
    }

    #[test]
    fn test_parse_rejects_stdin_marker_with_urns() {
        assert!(parse_args(&args(&["append", "-", "urn:nbn:de:x-"])).is_err());
        assert!(parse_args(&args(&["append", "urn:nbn:de:x-", "-"])).is_err());
    }

    #[test]
    fn test_read_urns_trims_and_skips_blank_lines() {
        let input = "urn:nbn:de:gbv:089-332175294\n\n   \n  urn:nbn:de:bvb:12-bsb00103137-  \r\n\turn:nbn:de:0001";
        let urns = read_urns(Cursor::new(input)).unwrap();
        assert_eq!(
            urns,
            vec![
                "urn:nbn:de:gbv:089-332175294",
                "urn:nbn:de:bvb:12-bsb00103137-",
                "urn:nbn:de:0001",
            ]
        );
    }

    #[test]
    fn test_read_urns_empty_input() {
        assert!(read_urns(Cursor::new("")).unwrap().is_empty());
        assert!(read_urns(Cursor::new("\n \n")).unwrap().is_empty());
    }

    #[test]
    fn test_exit_status() {
        let clean = BatchSummary {
            total: 2,
            succeeded: 2,
            failed: 0,
        };
        let failed = BatchSummary {
            total: 2,
            succeeded: 1,
            failed: 1,
        };
        assert_eq!(exit_status(&clean, 0), 0);
        assert_eq!(exit_status(&clean, 1), EXIT_FAILED);
        assert_eq!(exit_status(&failed, 0), EXIT_FAILED);
    }

    #[test]
    fn test_exit_status_from_runs() {
        let good = vec!["urn:nbn:de:gbv:089-3321752945".to_string()];
        let (summary, mismatches) = run_verify(&good);
        assert_eq!(exit_status(&summary, mismatches), 0);

        let calc_summary = run_calc(&["urn:nbn:de:©invalid".to_string()]);
        assert_eq!(exit_status(&calc_summary, 0), EXIT_FAILED);
    }

    #[test]
    fn test_run_verify_counts_mismatches() {
        let urns = vec![
            "urn:nbn:de:gbv:089-3321752945".to_string(),
            "urn:nbn:de:gbv:089-3321752944".to_string(),
            "urn:nbn:de:©invalid5".to_string(),
        ];
        let (summary, mismatches) = run_verify(&urns);
        assert_eq!(summary.failed, 1);
        assert_eq!(mismatches, 1);
    }
}
