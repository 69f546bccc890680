//! # sudoku-csp
//!
//! Command-line front end for the Sudoku constraint-satisfaction solver.
//!
//! Two subcommands:
//!
//! ```sh
//! # Solve a puzzle given inline (one character per cell, '.' for blanks;
//! # whitespace and / | + - are ignored):
//! sudoku-csp text "2 5 . . 3 . 9 . 1 / . 1 . . . 4 . . . / ..."
//!
//! # Solve a batch file, one puzzle per line ('#' lines are comments):
//! sudoku-csp file puzzles.txt --box-size 3 --stats
//! ```
//!
//! Common options: `--box-size <k>` (default 3), `--all <max>` to enumerate
//! up to `max` solutions instead of stopping at the first, `--stats` to
//! print search counters. An unsatisfiable puzzle is an ordinary outcome and
//! does not change the exit code; malformed input does.

use clap::{Args, Parser, Subcommand};
use log::{debug, info};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use sudoku_csp::sudoku::geometry::BoxSize;
use sudoku_csp::sudoku::puzzle::Puzzle;
use sudoku_csp::sudoku::solver::{solve_all, solve_with_stats};

#[derive(Debug, Parser)]
#[command(name = "sudoku-csp", version, about = "Sudoku solver for arbitrary box sizes")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Args)]
struct SolveOptions {
    /// Box size k; the grid is k² by k² (default: standard 9x9).
    #[arg(short = 'k', long, default_value_t = 3)]
    box_size: usize,

    /// Enumerate up to this many solutions instead of stopping at the first.
    #[arg(long, value_name = "MAX")]
    all: Option<usize>,

    /// Print search statistics after each puzzle.
    #[arg(long)]
    stats: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Solve a puzzle given as a text argument.
    Text {
        /// The puzzle string, row-major, '.' for blanks.
        input: String,

        #[command(flatten)]
        options: SolveOptions,
    },
    /// Solve every puzzle in a file, one per line.
    File {
        /// Path to the batch file.
        path: PathBuf,

        #[command(flatten)]
        options: SolveOptions,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Text { input, options } => run_text(&input, &options),
        Command::File { path, options } => run_file(&path, &options),
    }
}

fn run_text(input: &str, options: &SolveOptions) -> ExitCode {
    let Some(box_size) = parse_box_size(options.box_size) else {
        return ExitCode::FAILURE;
    };
    if solve_one(input, box_size, options) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn run_file(path: &PathBuf, options: &SolveOptions) -> ExitCode {
    let Some(box_size) = parse_box_size(options.box_size) else {
        return ExitCode::FAILURE;
    };
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            eprintln!("error: cannot read {}: {e}", path.display());
            return ExitCode::FAILURE;
        }
    };

    let mut ok = true;
    for (index, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        info!("solving line {} of {}", index + 1, path.display());
        ok &= solve_one(line, box_size, options);
    }

    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn parse_box_size(k: usize) -> Option<BoxSize> {
    match BoxSize::new(k) {
        Ok(box_size) => Some(box_size),
        Err(e) => {
            eprintln!("error: {e}");
            None
        }
    }
}

/// Parses and solves one puzzle, printing the outcome. Returns `false` only
/// on malformed input; an unsatisfiable puzzle is reported but still counts
/// as handled.
fn solve_one(text: &str, box_size: BoxSize, options: &SolveOptions) -> bool {
    let puzzle = match Puzzle::parse(text, box_size) {
        Ok(puzzle) => puzzle,
        Err(e) => {
            eprintln!("error: {e}");
            return false;
        }
    };
    debug!("{} clues on a {n}x{n} grid", puzzle.len(), n = box_size.rows());

    let started = Instant::now();
    match options.all {
        Some(limit) => {
            let solutions = solve_all(&puzzle, limit);
            if solutions.is_empty() {
                println!("unsatisfiable");
            } else {
                for (index, solution) in solutions.iter().enumerate() {
                    println!("solution {}:", index + 1);
                    print!("{solution}");
                }
                println!(
                    "{} solution(s) found (limit {limit})",
                    solutions.len()
                );
            }
        }
        None => match solve_with_stats(&puzzle) {
            Ok((solution, stats)) => {
                print!("{solution}");
                if options.stats {
                    print_stats(&stats);
                }
            }
            Err(_) => println!("unsatisfiable"),
        },
    }
    debug!("solved in {:?}", started.elapsed());

    true
}

fn print_stats(stats: &sudoku_csp::csp::solver::SearchStats) {
    println!(
        "c decisions:    {}\nc propagations: {}\nc conflicts:    {}",
        stats.decisions, stats.propagations, stats.conflicts
    );
}
