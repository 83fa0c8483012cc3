//! Depth-first backtracking search.

use gridlace_core::{Board, Digit};

use crate::rules::is_legal_move;

/// Counters collected during a backtracking run.
///
/// Purely informational; recording them never changes which solution is
/// found or in what order the search proceeds.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BacktrackStats {
    /// Number of digits placed, including ones later undone.
    pub placements: u64,
    /// Number of placements undone after a failed branch.
    pub backtracks: u64,
}

impl BacktrackStats {
    /// Creates a new zeroed statistics object.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// A solver that completes a board by exhaustive trial and undo.
///
/// The search mutates the board in place: at each level it takes the first
/// free cell in row-major order, tries the digits 1-9 in ascending order,
/// and for each locally legal digit places it and recurses. A failed branch
/// erases its own placement before returning, so a failure reported to the
/// parent level always corresponds to the exact board state the parent
/// started from. In particular, a failed top-level solve leaves the board
/// bit-identical to its input.
///
/// Both orders are fixed, which makes the search fully deterministic: the
/// same input always produces the same output grid. When a puzzle admits
/// several completions, the one found is the first in row-major, ascending-
/// digit order, which is the lexicographically smallest completion.
///
/// Worst-case running time is exponential in the number of free cells; the
/// only pruning is the row/column/box legality check. Fine for 9x9 inputs,
/// not a general CSP engine.
///
/// A contradictory set of givens (say, two equal digits already in one row)
/// is not detected up front; the search simply exhausts or wanders into
/// dead ends, as the givens are never re-validated.
///
/// # Examples
///
/// ```
/// use gridlace_core::{Board, Digit, Position};
/// use gridlace_solver::BacktrackSolver;
///
/// let mut board: Board = "
///     123 456 789
///     456 789 123
///     789 123 456
///     214 365 897
///     365 897 214
///     897 214 365
///     531 642 978
///     642 978 531
///     978 531 64_
/// "
/// .parse()?;
///
/// let (solved, stats) = BacktrackSolver::new().solve(&mut board);
/// assert!(solved);
/// assert_eq!(board.get(Position::new(8, 8)), Some(Digit::D2));
/// assert_eq!(stats.placements, 1);
/// # Ok::<(), gridlace_core::ParseBoardError>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct BacktrackSolver {}

impl BacktrackSolver {
    /// Creates a new solver.
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }

    /// Searches for a completion of `board`, filling it in place.
    ///
    /// Returns `(true, stats)` once every cell holds a digit; the grid then
    /// satisfies all row/column/box constraints because every placement
    /// passed the legality check on the way in. Returns `(false, stats)`
    /// when the search space is exhausted, with `board` restored to the
    /// state it was passed in.
    pub fn solve(&self, board: &mut Board) -> (bool, BacktrackStats) {
        let mut stats = BacktrackStats::new();
        let solved = self.solve_from(board, &mut stats);
        (solved, stats)
    }

    /// One level of the search: the first free cell is the only choice point;
    /// deeper cells are handled by the recursive calls.
    fn solve_from(&self, board: &mut Board, stats: &mut BacktrackStats) -> bool {
        let Some(pos) = board.free_cells().next() else {
            // No free cell left means the board is complete.
            return true;
        };

        for digit in Digit::ALL {
            if !is_legal_move(board, pos, digit) {
                continue;
            }
            board.set(pos, Some(digit));
            stats.placements += 1;
            if self.solve_from(board, stats) {
                return true;
            }
            board.set(pos, None);
            stats.backtracks += 1;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use gridlace_core::Position;

    use super::*;

    /// The classic sample puzzle and its unique solution.
    const PUZZLE: &str = "
        53_ _7_ ___
        6__ 195 ___
        _98 ___ _6_
        8__ _6_ __3
        4__ 8_3 __1
        7__ _2_ __6
        _6_ ___ 28_
        ___ 419 __5
        ___ _8_ _79
    ";
    const SOLUTION: &str = "
        534 678 912
        672 195 348
        198 342 567
        859 761 423
        426 853 791
        713 924 856
        961 537 284
        287 419 635
        345 286 179
    ";

    /// A complete valid grid built from shifted bands.
    const CYCLIC: &str = "
        123 456 789
        456 789 123
        789 123 456
        231 564 897
        564 897 231
        897 231 564
        312 645 978
        645 978 312
        978 312 645
    ";

    fn assert_well_formed(board: &Board) {
        for digit in Digit::ALL {
            for i in 0..9 {
                let row = (0..9)
                    .filter(|&x| board.get(Position::new(x, i)) == Some(digit))
                    .count();
                let column = (0..9)
                    .filter(|&y| board.get(Position::new(i, y)) == Some(digit))
                    .count();
                let boxed = (0..9)
                    .filter(|&c| board.get(Position::from_box(i, c)) == Some(digit))
                    .count();
                assert_eq!(row, 1, "digit {digit} in row {i}");
                assert_eq!(column, 1, "digit {digit} in column {i}");
                assert_eq!(boxed, 1, "digit {digit} in box {i}");
            }
        }
    }

    #[test]
    fn test_solves_classic_puzzle() {
        let mut board: Board = PUZZLE.parse().unwrap();
        let expected: Board = SOLUTION.parse().unwrap();

        let (solved, stats) = BacktrackSolver::new().solve(&mut board);

        assert!(solved);
        assert!(board.is_complete());
        assert_well_formed(&board);
        assert_eq!(board, expected);
        assert!(stats.placements >= 51); // at least one placement per free cell
    }

    #[test]
    fn test_single_free_cell_forced_to_nine() {
        // Row 8, column 0, and box 6 of the cyclic grid hold 1-8 around the
        // erased cell, so only 9 completes it.
        let mut board: Board = CYCLIC.parse().unwrap();
        let pos = Position::new(0, 8);
        assert_eq!(board.get(pos), Some(Digit::D9));
        board.set(pos, None);

        let (solved, stats) = BacktrackSolver::new().solve(&mut board);

        assert!(solved);
        assert_eq!(board.get(pos), Some(Digit::D9));
        assert_eq!(stats, BacktrackStats { placements: 1, backtracks: 0 });
    }

    #[test]
    fn test_already_complete_board_succeeds_untouched() {
        let mut board: Board = CYCLIC.parse().unwrap();
        let before = board.clone();

        let (solved, stats) = BacktrackSolver::new().solve(&mut board);

        assert!(solved);
        assert_eq!(board, before);
        assert_eq!(stats, BacktrackStats::default());
    }

    #[test]
    fn test_deterministic() {
        let mut first: Board = PUZZLE.parse().unwrap();
        let mut second: Board = PUZZLE.parse().unwrap();

        let solver = BacktrackSolver::new();
        let (solved_first, stats_first) = solver.solve(&mut first);
        let (solved_second, stats_second) = solver.solve(&mut second);

        assert!(solved_first && solved_second);
        assert_eq!(first, second);
        assert_eq!(stats_first, stats_second);
    }

    #[test]
    fn test_no_solution_restores_board() {
        // (0, 0) can only take 1 (everything else is blocked by row 0 or by
        // the 2 in box 0), after which (1, 0) has no legal digit left. The
        // search must undo the 1 and report failure with the givens intact.
        let mut board = Board::new();
        for (x, value) in (2..9).zip([3, 4, 5, 6, 7, 8, 9]) {
            board.set(Position::new(x, 0), Some(Digit::from_value(value)));
        }
        board.set(Position::new(1, 1), Some(Digit::D2));
        board.set(Position::new(0, 4), Some(Digit::D2));
        let before = board.clone();

        let (solved, stats) = BacktrackSolver::new().solve(&mut board);

        assert!(!solved);
        assert_eq!(board, before);
        assert!(stats.placements > 0);
        assert_eq!(stats.placements, stats.backtracks);
    }

    #[test]
    fn test_unsatisfiable_first_cell_fails_fast() {
        // Row 0 holds 1-8 and the 9 sits below in the same column, leaving
        // no legal digit for (0, 0) at all.
        let mut board = Board::new();
        for (x, value) in (1..9).zip([1, 2, 3, 4, 5, 6, 7, 8]) {
            board.set(Position::new(x, 0), Some(Digit::from_value(value)));
        }
        board.set(Position::new(0, 1), Some(Digit::D9));
        let before = board.clone();

        let (solved, stats) = BacktrackSolver::new().solve(&mut board);

        assert!(!solved);
        assert_eq!(board, before);
        assert_eq!(stats, BacktrackStats::default());
    }

    #[test]
    fn test_ambiguous_puzzle_resolved_row_major_ascending() {
        // Erasing the top two rows of the cyclic grid leaves several valid
        // completions: each column must receive its two missing digits, but
        // whole column groups can be filled in either orientation. The
        // search settles every choice at the first free cell in row-major
        // order with the smallest legal digit, which reproduces the
        // original grid; in particular (0, 0) gets 1 even though a valid
        // completion with 4 there exists.
        let original: Board = CYCLIC.parse().unwrap();
        let mut board = original.clone();
        for y in 0..2 {
            for x in 0..9 {
                board.set(Position::new(x, y), None);
            }
        }

        let (solved, _) = BacktrackSolver::new().solve(&mut board);

        assert!(solved);
        assert_eq!(board.get(Position::new(0, 0)), Some(Digit::D1));
        assert_eq!(board, original);
    }

    #[test]
    fn test_empty_board_yields_valid_grid() {
        let mut board = Board::new();

        let (solved, _) = BacktrackSolver::new().solve(&mut board);

        assert!(solved);
        assert!(board.is_complete());
        assert_well_formed(&board);

        // Ascending digit order fills the first row 1-9 before anything
        // forces a backtrack into it.
        for x in 0..9 {
            assert_eq!(
                board.get(Position::new(x, 0)),
                Some(Digit::from_value(x + 1))
            );
        }
    }
}
