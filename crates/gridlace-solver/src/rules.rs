//! The legality check for candidate placements.

use gridlace_core::{Board, Digit, Position};

/// Returns `true` if placing `digit` at `pos` is locally legal.
///
/// A placement is legal when the target cell is free and the digit appears
/// nowhere else in the cell's row, column, or 3x3 box. An occupied target
/// cell makes every digit illegal; that precondition violation is answered
/// with `false`, never an error. The digit range precondition needs no
/// runtime check because [`Digit`] cannot hold an out-of-range value.
///
/// Pure query: the board is never modified.
///
/// # Examples
///
/// ```
/// use gridlace_core::{Board, Digit, Position};
/// use gridlace_solver::is_legal_move;
///
/// let mut board = Board::new();
/// board.set(Position::new(0, 0), Some(Digit::D5));
///
/// // 5 is already in row 0 and box 0.
/// assert!(!is_legal_move(&board, Position::new(8, 0), Digit::D5));
/// assert!(!is_legal_move(&board, Position::new(1, 1), Digit::D5));
/// assert!(is_legal_move(&board, Position::new(8, 8), Digit::D5));
/// ```
#[must_use]
pub fn is_legal_move(board: &Board, pos: Position, digit: Digit) -> bool {
    if board.get(pos).is_some() {
        return false;
    }

    // Full 9-cell scans; comparing against the target cell itself is
    // harmless since it is known to be free.
    for i in 0..9 {
        if board.get(Position::new(i, pos.y())) == Some(digit) {
            return false;
        }
        if board.get(Position::new(pos.x(), i)) == Some(digit) {
            return false;
        }
        if board.get(Position::from_box(pos.box_index(), i)) == Some(digit) {
            return false;
        }
    }
    true
}
