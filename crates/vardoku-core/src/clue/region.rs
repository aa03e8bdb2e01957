//! Region clues: the Normal box partition and its variants.

use crate::{Color, Position};

/// The kind of a region clue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionKind {
    /// A box of the base partition; digits are unique unless the puzzle is
    /// non-standard.
    Normal,
    /// An extra region with unique digits.
    Extra,
    /// A clone region; same-color clones must match cell for cell.
    Clone,
    /// A magic square; rows, columns and diagonals share one sum.
    MagicSquare,
    /// A free-form region with no built-in rule.
    Custom,
}

/// Default behavior and styling for a region kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionDefaults {
    /// Whether the region draws borders.
    pub borders: bool,
    /// Fill color, if any.
    pub color: Option<Color>,
    /// Whether digits inside the region must be unique.
    pub unique_digits: bool,
    /// Whether the region's rule is suspended.
    pub non_standard: bool,
}

/// Returns the defaults for a region kind.
///
/// `nonstandard` is the global `NonStandard` logic flag, which turns off
/// uniqueness for Normal regions.
#[must_use]
pub fn region_defaults(kind: RegionKind, nonstandard: bool) -> RegionDefaults {
    match kind {
        RegionKind::Normal => RegionDefaults {
            borders: true,
            color: None,
            unique_digits: !nonstandard,
            non_standard: nonstandard,
        },
        RegionKind::Clone => RegionDefaults {
            borders: false,
            color: Some(Color::LightGray),
            unique_digits: false,
            non_standard: false,
        },
        RegionKind::Extra | RegionKind::MagicSquare => RegionDefaults {
            borders: false,
            color: Some(Color::Gray),
            unique_digits: true,
            non_standard: false,
        },
        RegionKind::Custom => RegionDefaults {
            borders: false,
            color: Some(Color::Gray),
            unique_digits: false,
            non_standard: false,
        },
    }
}

/// A region clue: a set of cells with a kind-specific rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    /// The region kind.
    pub kind: RegionKind,
    /// The cells the region covers.
    pub positions: Vec<Position>,
    /// Border override.
    pub borders: Option<bool>,
    /// Color override; clone regions pair by color.
    pub color: Option<Color>,
    /// Uniqueness override.
    pub unique_digits: Option<bool>,
    /// Rule suspension override.
    pub non_standard: Option<bool>,
}

impl Region {
    /// Creates a region of `kind` over `positions` with no overrides.
    #[must_use]
    pub fn new(kind: RegionKind, positions: Vec<Position>) -> Self {
        Self {
            kind,
            positions,
            borders: None,
            color: None,
            unique_digits: None,
            non_standard: None,
        }
    }

    /// Returns `true` if the region covers `position`.
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        self.positions.contains(&position)
    }

    /// Resolves the uniqueness rule, falling back to the kind default.
    #[must_use]
    pub fn has_unique_digits(&self, nonstandard: bool) -> bool {
        self.unique_digits
            .unwrap_or_else(|| region_defaults(self.kind, nonstandard).unique_digits)
    }

    /// Resolves the rule-suspension flag, falling back to the kind default.
    #[must_use]
    pub fn is_non_standard(&self) -> bool {
        self.non_standard
            .unwrap_or_else(|| region_defaults(self.kind, false).non_standard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniqueness_defaults_follow_kind() {
        let normal = Region::new(RegionKind::Normal, vec![]);
        assert!(normal.has_unique_digits(false));
        assert!(!normal.has_unique_digits(true));

        let clone = Region::new(RegionKind::Clone, vec![]);
        assert!(!clone.has_unique_digits(false));

        let mut extra = Region::new(RegionKind::Extra, vec![]);
        assert!(extra.has_unique_digits(false));
        extra.unique_digits = Some(false);
        assert!(!extra.has_unique_digits(false));
    }
}
