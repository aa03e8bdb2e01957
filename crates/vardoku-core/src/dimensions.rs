//! Board dimensions and margin arithmetic.

use crate::Position;

/// Inactive frame widths around the playable area.
///
/// Margins carve out rows/columns that hold frame clues (little killers,
/// sandwich sums, skyscrapers and the like) rather than digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Margins {
    /// Rows above the playable area.
    pub top: u8,
    /// Columns right of the playable area.
    pub right: u8,
    /// Rows below the playable area.
    pub bottom: u8,
    /// Columns left of the playable area.
    pub left: u8,
}

impl Margins {
    /// Creates a uniform margin of the given width on all four sides.
    #[must_use]
    pub const fn uniform(width: u8) -> Self {
        Self {
            top: width,
            right: width,
            bottom: width,
            left: width,
        }
    }
}

/// The default box size of the Normal region partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionSize {
    /// Box width in columns.
    pub width: u8,
    /// Box height in rows.
    pub height: u8,
}

/// Total board dimensions, including any margin frame.
///
/// `rows`/`columns` count every cell, frame included; interior iteration
/// subtracts the margins.
///
/// # Examples
///
/// ```
/// use vardoku_core::{Dimensions, Margins, Position};
///
/// let dims = Dimensions::new(9, 9).with_margins(Margins::uniform(1));
/// assert_eq!(dims.playable_rows(), 7);
/// assert!(!dims.in_playable(Position::new(0, 3)));
/// assert!(dims.in_playable(Position::new(1, 3)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    rows: u8,
    columns: u8,
    margins: Option<Margins>,
}

impl Dimensions {
    /// Creates margin-free dimensions.
    #[must_use]
    pub const fn new(rows: u8, columns: u8) -> Self {
        Self {
            rows,
            columns,
            margins: None,
        }
    }

    /// Adds a margin frame.
    #[must_use]
    pub const fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = Some(margins);
        self
    }

    /// Returns the total row count, frame included.
    #[must_use]
    pub const fn rows(&self) -> u8 {
        self.rows
    }

    /// Returns the total column count, frame included.
    #[must_use]
    pub const fn columns(&self) -> u8 {
        self.columns
    }

    /// Returns the margin frame, if any.
    #[must_use]
    pub const fn margins(&self) -> Option<Margins> {
        self.margins
    }

    /// Returns the row index of the first playable row.
    #[must_use]
    pub fn row_offset(&self) -> u8 {
        self.margins.map_or(0, |m| m.top)
    }

    /// Returns the column index of the first playable column.
    #[must_use]
    pub fn column_offset(&self) -> u8 {
        self.margins.map_or(0, |m| m.left)
    }

    /// Returns the number of playable rows.
    #[must_use]
    pub fn playable_rows(&self) -> u8 {
        let m = self.margins.unwrap_or_default();
        self.rows - m.top - m.bottom
    }

    /// Returns the number of playable columns.
    #[must_use]
    pub fn playable_columns(&self) -> u8 {
        let m = self.margins.unwrap_or_default();
        self.columns - m.left - m.right
    }

    /// Returns `true` if `position` lies inside the playable area.
    #[must_use]
    pub fn in_playable(&self, position: Position) -> bool {
        let m = self.margins.unwrap_or_default();
        position.row() >= m.top
            && position.row() < self.rows - m.bottom
            && position.column() >= m.left
            && position.column() < self.columns - m.right
    }

    /// Returns `true` if `position` lies on the board at all, frame included.
    #[must_use]
    pub fn on_board(&self, position: Position) -> bool {
        position.row() < self.rows && position.column() < self.columns
    }

    /// Iterates over every playable position in row-major order.
    pub fn playable_positions(&self) -> impl Iterator<Item = Position> + use<> {
        let row_offset = self.row_offset();
        let column_offset = self.column_offset();
        let rows = self.playable_rows();
        let columns = self.playable_columns();
        (0..rows).flat_map(move |i| {
            (0..columns).map(move |j| Position::new(row_offset + i, column_offset + j))
        })
    }

    /// Returns the orthogonal neighbors of `position` inside the playable
    /// area.
    #[must_use]
    pub fn orthogonal_neighbors(&self, position: Position) -> Vec<Position> {
        [(-1, 0), (0, -1), (1, 0), (0, 1)]
            .into_iter()
            .filter_map(|(dr, dc)| position.offset(dr, dc))
            .filter(|p| self.in_playable(*p))
            .collect()
    }

    /// Returns the default box size for the Normal region partition.
    ///
    /// Square playable areas of conventional sizes split into the usual
    /// boxes (3×3 for 9 rows, 3 wide by 2 tall for 6 rows, …); anything
    /// else degenerates to full-width rows.
    #[must_use]
    pub fn region_size(&self) -> RegionSize {
        let rows = self.playable_rows();
        let columns = self.playable_columns();
        if rows != columns {
            return RegionSize {
                width: columns,
                height: 0,
            };
        }
        let (width, height) = match rows {
            4 => (2, 2),
            6 => (3, 2),
            8 => (4, 2),
            9 => (3, 3),
            10 => (5, 2),
            12 => (4, 3),
            14 => (7, 2),
            15 => (5, 3),
            16 => (4, 4),
            18 => (6, 3),
            20 => (5, 4),
            21 => (7, 3),
            22 => (11, 2),
            24 => (6, 4),
            25 => (5, 5),
            26 => (13, 2),
            _ => (columns, 1),
        };
        RegionSize { width, height }
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::new(9, 9)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn margins_shrink_playable_area() {
        let dims = Dimensions::new(11, 11).with_margins(Margins::uniform(1));
        assert_eq!(dims.playable_rows(), 9);
        assert_eq!(dims.playable_columns(), 9);
        assert_eq!(dims.row_offset(), 1);
        assert!(dims.in_playable(Position::new(1, 1)));
        assert!(!dims.in_playable(Position::new(10, 5)));
        assert_eq!(dims.playable_positions().count(), 81);
    }

    #[test]
    fn region_size_table() {
        assert_eq!(
            Dimensions::new(6, 6).region_size(),
            RegionSize {
                width: 3,
                height: 2
            }
        );
        assert_eq!(
            Dimensions::new(9, 9).region_size(),
            RegionSize {
                width: 3,
                height: 3
            }
        );
        // No box partition for irregular sizes: one region per row.
        assert_eq!(
            Dimensions::new(7, 7).region_size(),
            RegionSize {
                width: 7,
                height: 1
            }
        );
    }

    #[test]
    fn neighbors_respect_margins() {
        let dims = Dimensions::new(11, 11).with_margins(Margins::uniform(1));
        let corner = Position::new(1, 1);
        let neighbors = dims.orthogonal_neighbors(corner);
        assert_eq!(
            neighbors,
            vec![Position::new(2, 1), Position::new(1, 2)]
        );
    }
}
