//! CLI entry point for the puzzle toolkit.
//!
//! Usage:
//!   puzzle-toolkit solve <PUZZLE> <input.txt> [options]
//!   puzzle-toolkit solve <PUZZLE> --stdin [options]
//!   puzzle-toolkit list
//!
//! Options:
//!   --part <1|2>              Compute only one answer (default: both)
//!   --terminal-height <n>     Height that ends a trail (default: 9)
//!   --trail-start-height <n>  Height trails start from (default: 0)
//!   --blinks-part1 <n>        Blinks for the first stones answer (default: 25)
//!   --blinks-part2 <n>        Blinks for the second stones answer (default: 75)
//!   --max-patrol-steps <n>    Moves before a patrol is abandoned (default: 10000)
//!   --operators-part1 <ops>   Calibration operators, first answer (default: + *)
//!   --operators-part2 <ops>   Calibration operators, second answer (default: + * ||)
//!   -v, -vv                   Debug / trace logging on stderr

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, Subcommand};
use serde::{Deserialize, Serialize};

use puzzle_toolkit::{solve, Answers, Error, Operator, Parts, Puzzle, SolveConfig};

#[derive(Parser)]
#[command(name = "puzzle-toolkit")]
#[command(about = "Grid traversal, constraint ordering and exhaustive search for text puzzles")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a puzzle input and print the answers as JSON
    Solve {
        /// Puzzle to solve (see `list`)
        #[arg(value_name = "PUZZLE")]
        puzzle: Puzzle,

        /// Path to the puzzle input (use --stdin to read from stdin)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Read the input from stdin instead of a file
        #[arg(long)]
        stdin: bool,

        /// Compute only this part
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=2))]
        part: Option<u8>,

        /// Height that completes a trail
        #[arg(long, default_value = "9")]
        terminal_height: u8,

        /// Height trails start from
        #[arg(long, default_value = "0")]
        trail_start_height: u8,

        /// Blinks for the first stones answer
        #[arg(long, default_value = "25")]
        blinks_part1: usize,

        /// Blinks for the second stones answer
        #[arg(long, default_value = "75")]
        blinks_part2: usize,

        /// Forward moves before a patrol is abandoned
        #[arg(long, default_value = "10000")]
        max_patrol_steps: usize,

        /// Operators for the first calibration answer
        #[arg(long, num_args = 1.., default_values = ["+", "*"])]
        operators_part1: Vec<Operator>,

        /// Operators for the second calibration answer
        #[arg(long, num_args = 1.., default_values = ["+", "*", "||"])]
        operators_part2: Vec<Operator>,
    },

    /// List the supported puzzles
    List,
}

/// Output format for a solve
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SolveOutput {
    puzzle: Puzzle,
    #[serde(skip_serializing_if = "Option::is_none")]
    part1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    part2: Option<String>,
    time_elapsed_ms: u64,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

/// Read the puzzle input from stdin or from `file`
fn read_input(file: Option<&Path>, stdin: bool) -> puzzle_toolkit::Result<String> {
    if stdin {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        return Ok(buffer);
    }
    match file {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => Err(Error::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            "must provide either a file path or --stdin",
        ))),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::List => {
            for puzzle in Puzzle::ALL {
                println!("{:<12} {}", puzzle.name(), puzzle.description());
            }
        }
        Commands::Solve {
            puzzle,
            file,
            stdin,
            part,
            terminal_height,
            trail_start_height,
            blinks_part1,
            blinks_part2,
            max_patrol_steps,
            operators_part1,
            operators_part2,
        } => {
            let config = SolveConfig {
                trail_start_height,
                terminal_height,
                blinks_part1,
                blinks_part2,
                max_patrol_steps,
                operators_part1,
                operators_part2,
            };

            let parts = match part {
                Some(1) => Parts::First,
                Some(_) => Parts::Second,
                None => Parts::Both,
            };

            let answers = match read_input(file.as_deref(), stdin)
                .and_then(|input| solve(puzzle, &input, parts, &config))
            {
                Ok(answers) => answers,
                Err(e) => {
                    eprintln!("Error solving {}: {}", puzzle, e);
                    std::process::exit(1);
                }
            };

            match serde_json::to_string_pretty(&format_answers(puzzle, answers)) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("Error formatting output: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }
}

fn format_answers(puzzle: Puzzle, answers: Answers) -> SolveOutput {
    SolveOutput {
        puzzle,
        part1: answers.part1,
        part2: answers.part2,
        time_elapsed_ms: answers.time_elapsed_ms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_input_from_file() {
        let path = std::env::temp_dir().join(format!("puzzle-toolkit-{}.txt", std::process::id()));
        fs::write(&path, "125 17\n").unwrap();
        let input = read_input(Some(&path), false);
        fs::remove_file(&path).unwrap();
        assert_eq!(input.unwrap(), "125 17\n");
    }

    #[test]
    fn test_read_input_failures_are_io_errors() {
        let missing = Path::new("/nonexistent/puzzle-toolkit/input.txt");
        match read_input(Some(missing), false) {
            Err(Error::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::NotFound),
            other => panic!("expected an io error, got {:?}", other),
        }
        match read_input(None, false) {
            Err(Error::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::InvalidInput),
            other => panic!("expected an io error, got {:?}", other),
        }
    }
}
