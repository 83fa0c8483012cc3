//! The 9x9 puzzle board.

use std::fmt::{self, Display};
use std::iter::FusedIterator;
use std::str::FromStr;

use crate::{digit::Digit, position::Position};

/// Error returned when parsing a board from text fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardError {
    /// The text contains a character that is neither a digit, an empty-cell
    /// marker, nor whitespace.
    #[display("unexpected character {character:?} in board text")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
    },
    /// The text does not describe exactly 81 cells.
    #[display("board text describes {count} cells, expected 81")]
    WrongCellCount {
        /// Number of cells found.
        count: usize,
    },
}

/// A 9x9 grid of optional digits.
///
/// Each cell holds either a [`Digit`] or nothing. The board itself performs
/// no sudoku validation: [`set`](Board::set) writes whatever it is given, and
/// keeping the grid free of row/column/box duplicates is the caller's
/// responsibility (the solver only ever places digits that pass its legality
/// check).
///
/// # Text format
///
/// [`FromStr`] and [`Display`] share one format: digits `1`-`9` fill cells,
/// `.`, `_`, or `0` leave them empty, and whitespace is ignored.
///
/// ```
/// use gridlace_core::{Board, Digit, Position};
///
/// let board: Board = "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
/// "
/// .parse()?;
///
/// assert_eq!(board.get(Position::new(0, 0)), Some(Digit::D5));
/// assert_eq!(board.get(Position::new(2, 0)), None);
/// assert!(!board.is_complete());
/// # Ok::<(), gridlace_core::board::ParseBoardError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Cells in row-major order: index `y * 9 + x`.
    cells: [Option<Digit>; 81],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Number of rows and columns.
    pub const SIZE: u8 = 9;

    /// Creates an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Creates a board from a 9x9 value grid, outer array per row.
    ///
    /// `0` leaves a cell empty; `1`-`9` fill it with the matching digit.
    ///
    /// # Panics
    ///
    /// Panics if any value is greater than 9.
    #[must_use]
    pub fn from_values(values: [[u8; 9]; 9]) -> Self {
        let mut board = Self::new();
        for (value, pos) in values.into_iter().flatten().zip(Position::all()) {
            if value != 0 {
                board.set(pos, Some(Digit::from_value(value)));
            }
        }
        board
    }

    /// Returns the digit at `pos`, or `None` for a free cell.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[Self::index(pos)]
    }

    /// Writes a digit to `pos`, or clears the cell when given `None`.
    ///
    /// No legality check is performed here.
    pub fn set(&mut self, pos: Position, cell: Option<Digit>) {
        self.cells[Self::index(pos)] = cell;
    }

    /// Returns `true` if no cell is free.
    ///
    /// This is the solver's sole terminal condition; it deliberately does not
    /// re-verify row/column/box uniqueness.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns an iterator over the free cells in row-major order (rows top
    /// to bottom, columns left to right).
    ///
    /// The order determines which solution a search finds first when a puzzle
    /// admits several, so it must stay row-major.
    #[must_use]
    pub fn free_cells(&self) -> FreeCells<'_> {
        FreeCells {
            board: self,
            positions: Position::all(),
        }
    }

    fn index(pos: Position) -> usize {
        usize::from(pos.y()) * 9 + usize::from(pos.x())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [None; 81];
        let mut count = 0;
        for character in s.chars() {
            if character.is_whitespace() {
                continue;
            }
            let cell = match character {
                '.' | '_' | '0' => None,
                #[expect(clippy::cast_possible_truncation)]
                '1'..='9' => Some(Digit::from_value(character as u8 - b'0')),
                character => return Err(ParseBoardError::UnexpectedCharacter { character }),
            };
            if count < 81 {
                cells[count] = cell;
            }
            count += 1;
        }
        if count != 81 {
            return Err(ParseBoardError::WrongCellCount { count });
        }
        Ok(Self { cells })
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..9 {
            for x in 0..9 {
                if x > 0 && x % 3 == 0 {
                    f.write_str(" ")?;
                }
                match self.get(Position::new(x, y)) {
                    Some(digit) => write!(f, "{digit}")?,
                    None => f.write_str("_")?,
                }
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

/// Iterator over a board's free cells in row-major order.
///
/// Returned by [`Board::free_cells`].
#[derive(Debug, Clone)]
pub struct FreeCells<'a> {
    board: &'a Board,
    positions: crate::position::AllPositions,
}

impl Iterator for FreeCells<'_> {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        self.positions
            .by_ref()
            .find(|&pos| self.board.get(pos).is_none())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.positions.size_hint().1)
    }
}

impl FusedIterator for FreeCells<'_> {}
