//! Command-line front end for the gridlace crates.
//!
//! Two subcommands: `solve` runs the backtracking solver on a puzzle (the
//! built-in sample or a grid text file), `traverse` walks a sample graph
//! depth-first from a chosen start vertex.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use gridlace_core::Board;
use gridlace_solver::BacktrackSolver;

mod samples;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Solve a sudoku puzzle by backtracking search.
    Solve {
        /// Path to a grid text file (digits 1-9; `.`, `_`, or `0` for empty
        /// cells). Uses the built-in sample puzzle when omitted.
        puzzle: Option<PathBuf>,
    },
    /// Walk the sample graph depth-first and print the visit order.
    Traverse {
        /// Start vertex key.
        #[arg(default_value = "2")]
        start: String,
    },
}

fn main() -> anyhow::Result<()> {
    better_panic::install();
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Solve { puzzle } => solve(puzzle.as_deref()),
        Command::Traverse { start } => {
            traverse(&start);
            Ok(())
        }
    }
}

fn solve(path: Option<&Path>) -> anyhow::Result<()> {
    let mut board = match path {
        Some(path) => load_board(path)?,
        None => samples::classic_puzzle(),
    };

    println!("{board}");
    let (solved, stats) = BacktrackSolver::new().solve(&mut board);
    log::info!(
        "search finished: {} placements, {} backtracks",
        stats.placements,
        stats.backtracks
    );

    if !solved {
        anyhow::bail!("the puzzle has no solution");
    }
    println!("{board}");
    Ok(())
}

fn load_board(path: &Path) -> anyhow::Result<Board> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read puzzle file {}", path.display()))?;
    let board = text
        .parse()
        .with_context(|| format!("failed to parse puzzle file {}", path.display()))?;
    Ok(board)
}

fn traverse(start: &str) {
    let graph = samples::graph();
    println!("{graph}");

    let order = graph.depth_first_order(start);
    log::info!("visited {} of {} vertices", order.len(), graph.vertices().count());
    println!("depth-first order: {}", order.join(" "));
    println!("spanning tree: {}", graph.spanning_tree(start).join(" "));
}
