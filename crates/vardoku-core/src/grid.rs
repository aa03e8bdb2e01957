//! Row-major board storage.

use std::ops::{Index, IndexMut};

use crate::{CellData, Digit, Dimensions, Position};

/// A row-major grid covering the whole board, frame cells included.
///
/// # Examples
///
/// ```
/// use vardoku_core::{CellValues, Dimensions, Position};
///
/// let dims = Dimensions::new(9, 9);
/// let mut cells = CellValues::new(&dims);
/// cells[Position::new(4, 4)].doubler = true;
/// assert!(cells[Position::new(4, 4)].doubler);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    rows: u8,
    columns: u8,
    cells: Vec<T>,
}

impl<T> Grid<T>
where
    T: Clone + Default,
{
    /// Creates a grid of default cells sized to `dimensions`.
    #[must_use]
    pub fn new(dimensions: &Dimensions) -> Self {
        let rows = dimensions.rows();
        let columns = dimensions.columns();
        Self {
            rows,
            columns,
            cells: vec![T::default(); usize::from(rows) * usize::from(columns)],
        }
    }
}

impl<T> Grid<T> {
    /// Returns the total row count.
    #[must_use]
    pub const fn rows(&self) -> u8 {
        self.rows
    }

    /// Returns the total column count.
    #[must_use]
    pub const fn columns(&self) -> u8 {
        self.columns
    }

    fn linear(&self, position: Position) -> Option<usize> {
        (position.row() < self.rows && position.column() < self.columns).then(|| {
            usize::from(position.row()) * usize::from(self.columns)
                + usize::from(position.column())
        })
    }

    /// Returns the cell at `position`, or `None` if it is off the board.
    #[must_use]
    pub fn get(&self, position: Position) -> Option<&T> {
        self.linear(position).map(|i| &self.cells[i])
    }

    /// Returns the cell at `position` mutably, or `None` if it is off the
    /// board.
    #[must_use]
    pub fn get_mut(&mut self, position: Position) -> Option<&mut T> {
        self.linear(position).map(|i| &mut self.cells[i])
    }

    /// Iterates over every position on the board in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<T> {
        let rows = self.rows;
        let columns = self.columns;
        (0..rows).flat_map(move |row| (0..columns).map(move |column| Position::new(row, column)))
    }
}

impl<T> Index<Position> for Grid<T> {
    type Output = T;

    fn index(&self, position: Position) -> &T {
        self.get(position)
            .unwrap_or_else(|| panic!("position {position} is off the board"))
    }
}

impl<T> IndexMut<Position> for Grid<T> {
    fn index_mut(&mut self, position: Position) -> &mut T {
        self.get_mut(position)
            .unwrap_or_else(|| panic!("position {position} is off the board"))
    }
}

/// The user/solution state of every cell on the board.
pub type CellValues = Grid<CellData>;

/// The fixed given digits of a puzzle; `None` means no given.
pub type Givens = Grid<Option<Digit>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexing_round_trips() {
        let dims = Dimensions::new(4, 6);
        let mut grid: Grid<u8> = Grid::new(&dims);
        grid[Position::new(3, 5)] = 7;
        assert_eq!(grid[Position::new(3, 5)], 7);
        assert_eq!(grid.get(Position::new(4, 0)), None);
        assert_eq!(grid.positions().count(), 24);
    }
}
