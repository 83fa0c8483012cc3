//! Typed sudoku digits.

use std::fmt::{self, Display};

/// Error returned when converting an out-of-range value into a [`Digit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("digit value must be 1-9, got {value}")]
pub struct TryFromDigitError {
    /// The rejected value.
    pub value: u8,
}

/// A cell digit in the range 1-9.
///
/// The enum makes out-of-range digits unrepresentable, so code consuming a
/// `Digit` never needs to re-check the 1-9 range.
///
/// # Examples
///
/// ```
/// use gridlace_core::Digit;
///
/// let digit = Digit::try_from(7)?;
/// assert_eq!(digit, Digit::D7);
/// assert_eq!(digit.value(), 7);
/// # Ok::<(), gridlace_core::digit::TryFromDigitError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Digit {
    /// The digit 1.
    D1 = 1,
    /// The digit 2.
    D2 = 2,
    /// The digit 3.
    D3 = 3,
    /// The digit 4.
    D4 = 4,
    /// The digit 5.
    D5 = 5,
    /// The digit 6.
    D6 = 6,
    /// The digit 7.
    D7 = 7,
    /// The digit 8.
    D8 = 8,
    /// The digit 9.
    D9 = 9,
}

impl Digit {
    /// All digits in ascending order.
    ///
    /// The order matters to callers that enumerate candidates: the
    /// backtracking solver tries digits in exactly this order.
    pub const ALL: [Self; 9] = [
        Self::D1,
        Self::D2,
        Self::D3,
        Self::D4,
        Self::D5,
        Self::D6,
        Self::D7,
        Self::D8,
        Self::D9,
    ];

    /// Creates a digit from a value in the range 1-9.
    ///
    /// Use the `TryFrom<u8>` impl when the value comes from untrusted input.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-9.
    #[must_use]
    pub fn from_value(value: u8) -> Self {
        Self::try_from(value).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Returns the numeric value of this digit (1-9).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Digit {
    type Error = TryFromDigitError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::D1),
            2 => Ok(Self::D2),
            3 => Ok(Self::D3),
            4 => Ok(Self::D4),
            5 => Ok(Self::D5),
            6 => Ok(Self::D6),
            7 => Ok(Self::D7),
            8 => Ok(Self::D8),
            9 => Ok(Self::D9),
            value => Err(TryFromDigitError { value }),
        }
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.value()
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value(), f)
    }
}
