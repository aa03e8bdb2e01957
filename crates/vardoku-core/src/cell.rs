//! Per-cell user and solution state.

use crate::{Color, Digit, DigitList};

/// The current state of one cell: typed digits, pencil marks, colors, and
/// the derived effective value.
///
/// `digits` holds the raw typed symbols (more than one for multi-digit and
/// S-cells); `value` is the effective numeric reading derived by
/// [`user_solution`](crate::solution::user_solution), which is what every
/// arithmetic rule compares. `None` fields are untouched by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellData {
    /// Typed digits, in input order.
    pub digits: Option<DigitList>,
    /// Center pencil marks (candidate notation).
    pub centermarks: Option<DigitList>,
    /// Corner pencil marks (positional notation).
    pub cornermarks: Option<DigitList>,
    /// Cell highlight colors.
    pub colors: Option<Vec<Color>>,
    /// Effective numeric value; see [`user_solution`](crate::solution::user_solution).
    pub value: Option<i32>,
    /// Whether this cell is a doubler (only meaningful with the `Doublers`
    /// logic flag).
    pub doubler: bool,
}

impl CellData {
    /// Creates a cell holding a single typed digit.
    #[must_use]
    pub fn from_digit(digit: Digit) -> Self {
        Self {
            digits: Some(DigitList::from(&[digit][..])),
            ..Self::default()
        }
    }

    /// Returns the first typed digit, if any.
    #[must_use]
    pub fn first_digit(&self) -> Option<Digit> {
        self.digits.as_ref().and_then(|d| d.first().copied())
    }

    /// Returns the last typed digit, if any.
    #[must_use]
    pub fn last_digit(&self) -> Option<Digit> {
        self.digits.as_ref().and_then(|d| d.last().copied())
    }

    /// Returns `true` if the cell has a typed digit.
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.digits.is_some()
    }

    /// Returns `true` if any typed digit equals `digit`.
    #[must_use]
    pub fn has_digit(&self, digit: Digit) -> bool {
        self.digits
            .as_ref()
            .is_some_and(|digits| digits.contains(&digit))
    }
}

/// Drops a digit list down to `None` when it is empty, preserving the
/// "untouched" reading of absent fields.
#[must_use]
pub fn none_if_empty(digits: DigitList) -> Option<DigitList> {
    if digits.is_empty() { None } else { Some(digits) }
}
