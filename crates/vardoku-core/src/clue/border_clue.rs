//! Border clues: markers between two (or four) cells.

use crate::{Color, Position};

/// The kind of a border clue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderClueKind {
    /// The two cells are consecutive.
    KropkiWhite,
    /// The two cells are in a 1:2 ratio.
    KropkiBlack,
    /// The two cells sum to 10.
    XvX,
    /// The two cells sum to 5.
    XvV,
    /// The first cell is strictly less than the second.
    Inequality,
    /// The listed digits all appear among the four surrounding cells.
    Quadruple,
    /// A plain drawn border with no rule.
    Border,
    /// A free-form marker with no built-in rule.
    Custom,
}

/// Drawn marker shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// A circle marker.
    Circle,
    /// A line segment.
    Line,
}

/// Default styling for a border clue kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorderClueDefaults {
    /// Marker shape.
    pub shape: Shape,
    /// Marker color, if any.
    pub color: Option<Color>,
    /// Marker radius in percent of a cell.
    pub radius: u8,
    /// Marker text.
    pub text: &'static str,
    /// Whether the clue's rule is suspended.
    pub non_standard: bool,
}

/// Returns the defaults for a border clue kind.
#[must_use]
pub fn border_clue_defaults(kind: BorderClueKind) -> BorderClueDefaults {
    match kind {
        BorderClueKind::KropkiWhite | BorderClueKind::KropkiBlack => BorderClueDefaults {
            shape: Shape::Circle,
            color: Some(if kind == BorderClueKind::KropkiWhite {
                Color::White
            } else {
                Color::Black
            }),
            radius: 10,
            text: "",
            non_standard: false,
        },
        BorderClueKind::XvX | BorderClueKind::XvV => BorderClueDefaults {
            shape: Shape::Circle,
            color: None,
            radius: 20,
            text: if kind == BorderClueKind::XvX { "X" } else { "V" },
            non_standard: false,
        },
        BorderClueKind::Inequality => BorderClueDefaults {
            shape: Shape::Circle,
            color: None,
            radius: 20,
            text: "<",
            non_standard: false,
        },
        BorderClueKind::Quadruple => BorderClueDefaults {
            shape: Shape::Circle,
            color: Some(Color::White),
            radius: 20,
            text: "",
            non_standard: false,
        },
        BorderClueKind::Border => BorderClueDefaults {
            shape: Shape::Line,
            color: Some(Color::Black),
            radius: 50,
            text: "",
            non_standard: false,
        },
        BorderClueKind::Custom => BorderClueDefaults {
            shape: Shape::Circle,
            color: None,
            radius: 10,
            text: "",
            non_standard: false,
        },
    }
}

/// A border clue between adjacent cells.
///
/// `positions` normally holds the two cells the marker sits between.
/// Quadruples anchor on two diagonally opposite cells (the other two
/// corners are derived) or list all four cells explicitly; any other count
/// leaves the clue unverifiable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorderClue {
    /// The clue kind.
    pub kind: BorderClueKind,
    /// The anchoring cells.
    pub positions: Vec<Position>,
    /// Shape override.
    pub shape: Option<Shape>,
    /// Color override.
    pub color: Option<Color>,
    /// Radius override.
    pub radius: Option<u8>,
    /// Clue text (quadruple digit list, custom labels).
    pub text: Option<String>,
    /// Rule suspension override.
    pub non_standard: Option<bool>,
}

impl BorderClue {
    /// Creates a border clue of `kind` between `positions` with no
    /// overrides.
    #[must_use]
    pub fn new(kind: BorderClueKind, positions: Vec<Position>) -> Self {
        Self {
            kind,
            positions,
            shape: None,
            color: None,
            radius: None,
            text: None,
            non_standard: None,
        }
    }

    /// Returns `true` if the clue sits exactly between cells `a` and `b`.
    #[must_use]
    pub fn sits_between(&self, a: Position, b: Position) -> bool {
        !self.positions.is_empty() && self.positions.iter().all(|&p| p == a || p == b)
    }

    /// Resolves the rule-suspension flag, falling back to the kind default.
    #[must_use]
    pub fn is_non_standard(&self) -> bool {
        self.non_standard
            .unwrap_or_else(|| border_clue_defaults(self.kind).non_standard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sits_between_requires_exact_pair() {
        let clue = BorderClue::new(
            BorderClueKind::KropkiWhite,
            vec![Position::new(0, 0), Position::new(0, 1)],
        );
        assert!(clue.sits_between(Position::new(0, 0), Position::new(0, 1)));
        assert!(clue.sits_between(Position::new(0, 1), Position::new(0, 0)));
        assert!(!clue.sits_between(Position::new(0, 0), Position::new(1, 0)));
    }
}
