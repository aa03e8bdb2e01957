//! Cage clues: outlined cell groups with a text target.

use crate::{Color, Position};

/// The kind of a cage clue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CageKind {
    /// Cells sum to the cage text; digits are unique by default.
    Killer,
    /// The cage text reads as count/digit pairs ("1923" = one 9, two 3s)
    /// describing the cage's contents.
    LookAndSay,
    /// A free-form cage with no built-in rule.
    Custom,
}

/// Default behavior and styling for a cage kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CageDefaults {
    /// Outline color.
    pub color: Color,
    /// Whether digits inside the cage must be unique.
    pub unique_digits: bool,
    /// Whether the cage's rule is suspended.
    pub non_standard: bool,
}

/// Returns the defaults for a cage kind.
#[must_use]
pub fn cage_defaults(kind: CageKind) -> CageDefaults {
    CageDefaults {
        color: Color::Black,
        unique_digits: kind == CageKind::Killer,
        non_standard: false,
    }
}

/// A cage clue: a dashed outline over a set of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cage {
    /// The cage kind.
    pub kind: CageKind,
    /// The cells the cage covers.
    pub positions: Vec<Position>,
    /// Cage text (the sum target for killers).
    pub text: Option<String>,
    /// Outline color override.
    pub color: Option<Color>,
    /// Uniqueness override.
    pub unique_digits: Option<bool>,
    /// Rule suspension override.
    pub non_standard: Option<bool>,
}

impl Cage {
    /// Creates a cage of `kind` over `positions` with no overrides.
    #[must_use]
    pub fn new(kind: CageKind, positions: Vec<Position>) -> Self {
        Self {
            kind,
            positions,
            text: None,
            color: None,
            unique_digits: None,
            non_standard: None,
        }
    }

    /// Creates a killer cage with a sum target.
    #[must_use]
    pub fn killer(positions: Vec<Position>, target: &str) -> Self {
        Self {
            text: Some(target.to_owned()),
            ..Self::new(CageKind::Killer, positions)
        }
    }

    /// Returns `true` if the cage covers `position`.
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        self.positions.contains(&position)
    }

    /// Resolves the uniqueness rule, falling back to the kind default.
    #[must_use]
    pub fn has_unique_digits(&self) -> bool {
        self.unique_digits
            .unwrap_or_else(|| cage_defaults(self.kind).unique_digits)
    }

    /// Resolves the rule-suspension flag, falling back to the kind default.
    #[must_use]
    pub fn is_non_standard(&self) -> bool {
        self.non_standard
            .unwrap_or_else(|| cage_defaults(self.kind).non_standard)
    }
}
