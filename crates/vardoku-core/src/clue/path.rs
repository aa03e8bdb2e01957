//! Path clues: ordered lines of cells with direction-sensitive rules.

use crate::{Color, Position};

/// The kind of a path clue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    /// Cells after the bulb sum to the bulb's value.
    Arrow,
    /// Values strictly increase from the bulb.
    Thermo,
    /// Interior values lie strictly between the endpoints.
    Between,
    /// Interior values lie strictly outside the endpoints, which differ by
    /// at least 4.
    Lockout,
    /// The values form a consecutive run in any order.
    Renban,
    /// Adjacent values differ by at least 5.
    Whisper,
    /// Adjacent values differ by at least 4.
    DutchWhisper,
    /// Values read the same in both directions.
    Palindrome,
    /// No digit but 1 divides or is divided by the path length; the sum is
    /// a multiple of the length.
    AntiFactor,
    /// Each run within one Normal region sums to the same total.
    EqualSum,
    /// Interior values sum to the product of the endpoints.
    ProductSum,
    /// Every window of three spans all three entropy bands.
    Entropic,
    /// Every value is odd.
    Odd,
    /// Every value is even.
    Even,
    /// Adjacent values alternate parity.
    Parity,
    /// A multi-cell value read in position order (arrow bulbs).
    Pill,
    /// A free-form line with no built-in rule.
    Custom,
}

/// Line endcap/waypoint shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Form {
    /// Round form.
    Round,
    /// Square form.
    Square,
    /// Diamond form.
    Diamond,
}

/// Line fill style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    /// Solid fill.
    Solid,
    /// Hollow outline.
    Hollow,
}

/// Default behavior and styling for a path kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathDefaults {
    /// Line color.
    pub color: Color,
    /// Line width in percent of a cell.
    pub width: u8,
    /// Endcap form.
    pub form: Form,
    /// Fill style.
    pub fill: Fill,
    /// Whether the line ends in an arrowhead.
    pub arrow: bool,
    /// Whether digits along the path must be unique.
    pub unique_digits: bool,
    /// Whether the path's rule is suspended.
    pub non_standard: bool,
}

/// Returns the defaults for a path kind.
#[must_use]
pub fn path_defaults(kind: PathKind) -> PathDefaults {
    let base = PathDefaults {
        color: Color::Gray,
        width: 15,
        form: Form::Round,
        fill: Fill::Solid,
        arrow: false,
        unique_digits: false,
        non_standard: false,
    };
    match kind {
        PathKind::Arrow => PathDefaults {
            width: 5,
            arrow: true,
            ..base
        },
        PathKind::Thermo => PathDefaults {
            width: 20,
            unique_digits: true,
            ..base
        },
        PathKind::Between => PathDefaults { width: 5, ..base },
        PathKind::Lockout => PathDefaults {
            color: Color::Blue,
            width: 5,
            form: Form::Diamond,
            ..base
        },
        PathKind::Renban => PathDefaults {
            color: Color::Purple,
            unique_digits: true,
            ..base
        },
        PathKind::Whisper => PathDefaults {
            color: Color::Green,
            ..base
        },
        PathKind::DutchWhisper => PathDefaults {
            color: Color::Orange,
            ..base
        },
        PathKind::Palindrome | PathKind::Parity | PathKind::Entropic => base,
        PathKind::AntiFactor => PathDefaults {
            color: Color::Yellow,
            ..base
        },
        PathKind::EqualSum => PathDefaults {
            color: Color::Blue,
            ..base
        },
        PathKind::ProductSum => PathDefaults {
            color: Color::Red,
            width: 13,
            form: Form::Square,
            ..base
        },
        PathKind::Odd => PathDefaults { width: 70, ..base },
        PathKind::Even => PathDefaults {
            width: 70,
            form: Form::Square,
            ..base
        },
        PathKind::Pill => PathDefaults {
            width: 66,
            fill: Fill::Hollow,
            ..base
        },
        PathKind::Custom => PathDefaults {
            color: Color::Black,
            width: 10,
            ..base
        },
    }
}

/// A path clue: an ordered line of cells.
///
/// Order matters: thermos grow from their first position, arrows sum away
/// from their bulb, palindromes mirror around the middle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    /// The path kind.
    pub kind: PathKind,
    /// The cells along the path, in order.
    pub positions: Vec<Position>,
    /// Color override.
    pub color: Option<Color>,
    /// Width override.
    pub width: Option<u8>,
    /// Form override.
    pub form: Option<Form>,
    /// Fill override.
    pub fill: Option<Fill>,
    /// Arrowhead override.
    pub arrow: Option<bool>,
    /// Uniqueness override.
    pub unique_digits: Option<bool>,
    /// Rule suspension override.
    pub non_standard: Option<bool>,
}

impl Path {
    /// Creates a path of `kind` along `positions` with no overrides.
    #[must_use]
    pub fn new(kind: PathKind, positions: Vec<Position>) -> Self {
        Self {
            kind,
            positions,
            color: None,
            width: None,
            form: None,
            fill: None,
            arrow: None,
            unique_digits: None,
            non_standard: None,
        }
    }

    /// Returns `true` if the path passes through `position`.
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        self.positions.contains(&position)
    }

    /// Resolves the uniqueness rule, falling back to the kind default.
    #[must_use]
    pub fn has_unique_digits(&self) -> bool {
        self.unique_digits
            .unwrap_or_else(|| path_defaults(self.kind).unique_digits)
    }

    /// Resolves the rule-suspension flag, falling back to the kind default.
    #[must_use]
    pub fn is_non_standard(&self) -> bool {
        self.non_standard
            .unwrap_or_else(|| path_defaults(self.kind).non_standard)
    }
}
