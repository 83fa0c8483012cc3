//! Core data structures for the gridlace puzzle crates.
//!
//! This crate holds the pure data types the solver operates on:
//!
//! - [`digit`]: type-safe digits 1-9
//! - [`position`]: (x, y) cell coordinates with 3x3 box arithmetic
//! - [`board`]: the 9x9 grid of optional digits, with completeness and
//!   free-cell queries
//!
//! The board is a plain container: it answers queries and accepts writes but
//! never enforces sudoku constraints itself. Constraint checking and search
//! live in `gridlace-solver`.
//!
//! # Examples
//!
//! ```
//! use gridlace_core::{Board, Digit, Position};
//!
//! let mut board = Board::new();
//! board.set(Position::new(0, 0), Some(Digit::D5));
//!
//! assert_eq!(board.get(Position::new(0, 0)), Some(Digit::D5));
//! assert_eq!(board.free_cells().count(), 80);
//! ```

pub mod board;
pub mod digit;
pub mod position;

pub use self::{
    board::{Board, FreeCells, ParseBoardError},
    digit::Digit,
    position::Position,
};
