//! Backtracking sudoku solver.
//!
//! Two pieces live here:
//!
//! - [`is_legal_move`]: the pure row/column/box uniqueness check for a
//!   candidate digit at a free cell
//! - [`BacktrackSolver`]: exhaustive depth-first search that fills a
//!   [`Board`](gridlace_core::Board) in place, trying the first free cell in
//!   row-major order with digits 1-9 ascending and undoing placements on
//!   failed branches
//!
//! # Examples
//!
//! ```
//! use gridlace_core::Board;
//! use gridlace_solver::BacktrackSolver;
//!
//! let mut board = Board::new();
//! let (solved, stats) = BacktrackSolver::new().solve(&mut board);
//!
//! assert!(solved);
//! assert!(board.is_complete());
//! assert!(stats.placements >= 81);
//! ```

pub use self::{
    backtrack::{BacktrackSolver, BacktrackStats},
    rules::is_legal_move,
};

mod backtrack;
mod rules;
