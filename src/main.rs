//! Batch command-line driver for the Sudoku engine.
//!
//! Reads a file with one puzzle per line (optionally paired with a
//! known solution as `puzzle,solution`), solves every puzzle with the
//! selected strategy, and prints a statistics record for the run.
//!
//! The driver is deliberately thin glue: puzzle parsing, searching and
//! statistics all live in the library; this binary only walks the file,
//! counts outcomes and formats the report.
//!
//! ```sh
//! sudoku-solver --path puzzles.txt --strategy heuristic
//! sudoku-solver --path puzzles.csv --strategy naive --compare --limit 100
//! sudoku-solver --path puzzles.txt --json
//! ```
//!
//! Strategy ids: `naive`, `heuristic`, `random-walk`. The `exact-cover`
//! id exists in the library contract but needs an external backend,
//! which this binary does not ship.

use clap::Parser;
use std::time::{Instant, SystemTime};
use sudoku_solver::sudoku::engine::{Engine, StrategyKind};
use sudoku_solver::sudoku::grid::Grid;
use sudoku_solver::sudoku::stats::RunReport;

/// Command-line interface of the batch driver.
#[derive(Parser, Debug)]
#[command(name = "sudoku-solver", version, about = "A Sudoku solver with interchangeable search strategies")]
struct Cli {
    /// Path to a file with one 81-character puzzle per line, optionally
    /// followed by `,solution` for comparison runs.
    #[arg(short, long)]
    path: String,

    /// Strategy id: naive, heuristic or random-walk.
    #[arg(short, long, default_value_t = String::from("heuristic"))]
    strategy: String,

    /// Print every puzzle and its solution grid.
    #[arg(short = 'g', long, default_value_t = false)]
    print_grids: bool,

    /// Compare computed solutions against the solution column of the file.
    #[arg(short, long, default_value_t = false)]
    compare: bool,

    /// Emit the statistics record as JSON instead of a table.
    #[arg(short, long, default_value_t = false)]
    json: bool,

    /// Solve at most this many puzzles from the file.
    #[arg(short, long)]
    limit: Option<usize>,
}

/// One line of the input file.
#[derive(Debug, Clone, PartialEq, Eq)]
struct BatchEntry {
    puzzle: String,
    solution: Option<String>,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let kind: StrategyKind = cli.strategy.parse()?;
    if kind == StrategyKind::ExactCover {
        return Err(
            "the exact-cover strategy requires an external backend; none is built into this binary"
                .into(),
        );
    }

    let content = std::fs::read_to_string(&cli.path)?;
    let entries = parse_batch(&content);
    let engine = Engine::new();

    let started_at = SystemTime::now();
    let timer = Instant::now();

    let mut puzzles_read = 0usize;
    let mut solutions_found = 0usize;
    let mut compared = 0usize;
    let mut matched = 0usize;

    for entry in entries.iter().take(cli.limit.unwrap_or(usize::MAX)) {
        let outcome = match engine.solve_with(&entry.puzzle, kind) {
            Ok(outcome) => outcome,
            Err(e) => {
                // Skipped lines (headers, truncated rows) are not
                // counted as puzzles read.
                eprintln!("skipping line: {e}");
                continue;
            }
        };

        puzzles_read += 1;
        if outcome.solved {
            solutions_found += 1;
        }

        if cli.print_grids {
            if let Ok(puzzle) = Grid::from_line(&entry.puzzle) {
                println!("PUZZLE\n{puzzle}");
            }
            if outcome.solved {
                println!("SOLUTION\n{}", outcome.grid);
            } else {
                println!("NO SOLUTION FOUND");
            }
        }

        if cli.compare {
            if let Some(expected) = &entry.solution {
                compared += 1;
                if outcome.solved && outcome.result_line() == *expected {
                    matched += 1;
                }
            }
        }
    }

    let report = RunReport::new(
        "to screen",
        kind.describe(),
        started_at,
        timer.elapsed(),
        puzzles_read,
        solutions_found,
    );

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{report}");
    }

    if cli.compare {
        println!("Provided solutions matched: {matched}/{compared}");
    }

    Ok(())
}

/// Splits the input file into batch entries.
///
/// Each non-empty line becomes one entry; the first comma-separated
/// field is the puzzle, an optional second field the known solution.
/// No validation happens here — malformed puzzles are rejected by the
/// engine, one line at a time.
fn parse_batch(content: &str) -> Vec<BatchEntry> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            let mut fields = line.split(',').map(str::trim);
            let puzzle = fields.next().unwrap_or_default().to_string();
            let solution = fields
                .next()
                .map(ToString::to_string)
                .filter(|s| !s.is_empty());
            BatchEntry { puzzle, solution }
        })
        .collect()
}
