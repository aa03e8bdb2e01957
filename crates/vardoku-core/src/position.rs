//! Board position type.

use std::fmt::{self, Display};

/// A zero-based (row, column) coordinate on a puzzle board.
///
/// Positions are ordered row-major: all cells of row 0 sort before all cells
/// of row 1, and so on. Frame cells (inside the margins of a board with
/// margins) use the same coordinate space as playable cells.
///
/// # Examples
///
/// ```
/// use vardoku_core::Position;
///
/// let a = Position::new(0, 3);
/// let b = Position::new(1, 0);
/// assert!(a < b);
/// assert_eq!(a.to_string(), "R0C3");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: u8,
    column: u8,
}

impl Position {
    /// Creates a position from row and column coordinates.
    #[must_use]
    #[inline]
    pub const fn new(row: u8, column: u8) -> Self {
        Self { row, column }
    }

    /// Returns the row coordinate.
    #[must_use]
    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column coordinate.
    #[must_use]
    #[inline]
    pub const fn column(self) -> u8 {
        self.column
    }

    /// Returns the position shifted by a signed offset, or `None` if the
    /// result would leave the `u8` coordinate space.
    ///
    /// Callers are responsible for board-bounds checks; this only guards the
    /// arithmetic.
    #[must_use]
    pub fn offset(self, row_delta: i16, column_delta: i16) -> Option<Self> {
        let row = i16::from(self.row) + row_delta;
        let column = i16::from(self.column) + column_delta;
        let row = u8::try_from(row).ok()?;
        let column = u8::try_from(column).ok()?;
        Some(Self { row, column })
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}C{}", self.row, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_row_major() {
        let mut positions = vec![
            Position::new(1, 1),
            Position::new(0, 8),
            Position::new(1, 0),
            Position::new(0, 0),
        ];
        positions.sort();
        assert_eq!(
            positions,
            vec![
                Position::new(0, 0),
                Position::new(0, 8),
                Position::new(1, 0),
                Position::new(1, 1),
            ]
        );
    }

    #[test]
    fn offset_checks_bounds() {
        assert_eq!(Position::new(0, 0).offset(-1, 0), None);
        assert_eq!(
            Position::new(4, 4).offset(-1, 2),
            Some(Position::new(3, 6))
        );
    }
}
