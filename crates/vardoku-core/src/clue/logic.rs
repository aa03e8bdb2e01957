//! Global logic flags and the puzzle alphabet.

use crate::{Digit, Dimensions, digit::parse_digit_range};

/// A global rule toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicFlag {
    /// Suspends the standard row/column/region uniqueness rules.
    NonStandard,
    /// Unique digits on the positive (bottom-left to top-right) diagonal.
    DiagonalPos,
    /// Unique digits on the negative (top-left to bottom-right) diagonal.
    DiagonalNeg,
    /// Cells a knight's move apart must differ.
    Antiknight,
    /// Cells a king's move apart must differ.
    Antiking,
    /// Cells in the same box position across boxes must differ.
    DisjointSets,
    /// Orthogonal neighbors are never consecutive.
    Nonconsecutive,
    /// Orthogonal neighbors in a 1:2 ratio carry a black kropki dot.
    NegativeBlack,
    /// Consecutive orthogonal neighbors carry a white kropki dot.
    NegativeWhite,
    /// Orthogonal neighbors summing to 10 carry an X.
    NegativeX,
    /// Orthogonal neighbors summing to 5 carry a V.
    NegativeV,
    /// Every 2×2 block spans all three entropy bands.
    Entropy,
    /// Columns 1/5/9 index where digits 1/5/9 sit in each row.
    Indexed159,
    /// Cells may hold two digits combined into one value.
    SCells,
    /// Doubler cells count twice.
    Doublers,
}

/// How an S-cell's two digits combine into its effective value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SCellMode {
    /// The value is the sum of the two digits.
    #[default]
    Sum,
    /// The value is the average of the two digits.
    Average,
}

/// Global puzzle rules: the digit alphabet and rule toggles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Logic {
    /// Alphabet range expression (e.g. `"1-9"`, `"0-9;A-F"`); `None` means
    /// the default for the board size.
    pub digits: Option<String>,
    /// Active rule toggles.
    pub flags: Vec<LogicFlag>,
    /// How S-cells combine their digits.
    pub s_cell_mode: SCellMode,
}

impl Logic {
    /// Creates a logic block with the given flags and a default alphabet.
    #[must_use]
    pub fn with_flags(flags: Vec<LogicFlag>) -> Self {
        Self {
            flags,
            ..Self::default()
        }
    }

    /// Returns `true` if `flag` is active.
    #[must_use]
    pub fn has_flag(&self, flag: LogicFlag) -> bool {
        self.flags.contains(&flag)
    }

    /// Returns the default alphabet range expression for a board size.
    ///
    /// Boards up to 9 rows use `1-<rows>` (S-cell puzzles start at 0);
    /// larger boards continue into letters.
    #[must_use]
    pub fn default_digits(&self, dimensions: &Dimensions) -> String {
        let rows = dimensions.playable_rows();
        let s_cells = self.has_flag(LogicFlag::SCells);
        if rows < 10 {
            format!("{}-{rows}", if s_cells { 0 } else { 1 })
        } else if rows == 10 && !s_cells {
            "0-9".to_owned()
        } else {
            let num_digits = rows + u8::from(s_cells);
            if num_digits <= 26 {
                format!("A-{}", (b'A' + num_digits - 1) as char)
            } else {
                format!("0-9;A-{}", (b'A' + num_digits - 11) as char)
            }
        }
    }

    /// Returns the digits a cell of this puzzle may hold.
    ///
    /// An unparsable configured range falls back to the board-size default
    /// rather than failing; a clue catalog is never an error source.
    #[must_use]
    pub fn valid_digits(&self, dimensions: &Dimensions) -> Vec<Digit> {
        self.digits
            .as_deref()
            .and_then(|range| parse_digit_range(range).ok())
            .unwrap_or_else(|| {
                parse_digit_range(&self.default_digits(dimensions)).unwrap_or_default()
            })
    }
}
