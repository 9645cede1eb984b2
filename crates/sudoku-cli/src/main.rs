use clap::{Parser, Subcommand};
use serde::Serialize;
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use sudoku_engine::{Grid, Solver, SolverConfig};

#[derive(Parser, Debug)]
#[command(name = "sudoku", version, about = "Backtracking Sudoku solver")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Solve a puzzle and print the solution.
    Solve {
        /// Puzzle as an 81-character string, '0' or '.' for empty cells.
        /// Read from --file or stdin when omitted.
        puzzle: Option<String>,

        /// Read the puzzle from a file instead.
        #[arg(short, long, conflicts_with = "puzzle")]
        file: Option<PathBuf>,

        /// Print the solution as a compact 81-character string.
        #[arg(short, long)]
        compact: bool,

        /// Print the result as JSON.
        #[arg(long, conflicts_with = "compact")]
        json: bool,

        /// Give up after this many search steps.
        #[arg(long, value_name = "N")]
        max_steps: Option<u64>,
    },

    /// Check the filled cells of a puzzle for conflicts.
    Check {
        /// Puzzle as an 81-character string, '0' or '.' for empty cells.
        /// Read from --file or stdin when omitted.
        puzzle: Option<String>,

        /// Read the puzzle from a file instead.
        #[arg(short, long, conflicts_with = "puzzle")]
        file: Option<PathBuf>,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Serialize)]
struct SolveReport {
    solvable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    solution: Option<Grid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match cli.command {
        Commands::Solve {
            puzzle,
            file,
            compact,
            json,
            max_steps,
        } => run_solve(puzzle, file, compact, json, max_steps),
        Commands::Check { puzzle, file, json } => run_check(puzzle, file, json),
    }
}

fn run_solve(
    puzzle: Option<String>,
    file: Option<PathBuf>,
    compact: bool,
    json: bool,
    max_steps: Option<u64>,
) -> ExitCode {
    let grid = match read_puzzle(puzzle, file) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    let solver = Solver::with_config(SolverConfig {
        max_steps,
        ..SolverConfig::default()
    });

    match solver.solve(&grid) {
        Ok(solution) => {
            if json {
                let report = SolveReport {
                    solvable: true,
                    solution: Some(solution),
                    error: None,
                };
                println!("{}", serde_json::to_string(&report).expect("report serializes"));
            } else if compact {
                println!("{}", solution.to_string_compact());
            } else {
                println!("Puzzle:");
                println!("{}", grid);
                println!("Solution:");
                println!("{}", solution);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            if json {
                let report = SolveReport {
                    solvable: false,
                    solution: None,
                    error: Some(e.to_string()),
                };
                println!("{}", serde_json::to_string(&report).expect("report serializes"));
            } else {
                eprintln!("Error: {}", e);
            }
            ExitCode::FAILURE
        }
    }
}

fn run_check(puzzle: Option<String>, file: Option<PathBuf>, json: bool) -> ExitCode {
    let grid = match read_puzzle(puzzle, file) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    let result = grid.validate();
    if json {
        println!("{}", serde_json::to_string(&result).expect("result serializes"));
    } else if result.is_valid {
        println!("OK: no conflicts among {} given(s)", grid.given_count());
    } else {
        println!("{} conflict(s):", result.conflicts.len());
        for c in &result.conflicts {
            println!("  {} at {} and {}", c.value, c.first, c.second);
        }
    }

    if result.is_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Load the puzzle from the positional argument, `--file`, or stdin, in
/// that order of preference.
fn read_puzzle(puzzle: Option<String>, file: Option<PathBuf>) -> Result<Grid, String> {
    let raw = match (puzzle, file) {
        (Some(text), _) => text,
        (None, Some(path)) => fs::read_to_string(&path)
            .map_err(|e| format!("cannot read {}: {}", path.display(), e))?,
        (None, None) => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| format!("cannot read stdin: {}", e))?;
            text
        }
    };
    parse_puzzle_text(&raw).ok_or_else(|| {
        "puzzle must be 81 characters of 1-9, with 0 or . for empty cells".to_string()
    })
}

/// Parse puzzle text, ignoring whitespace so multi-line boards work.
fn parse_puzzle_text(text: &str) -> Option<Grid> {
    let cleaned: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    Grid::from_string(&cleaned)
}
