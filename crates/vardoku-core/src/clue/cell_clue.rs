//! Cell clues: single-cell markers, including frame clues.

use crate::{Color, Position};

/// The kind of a cell clue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellClueKind {
    /// The cell is at least every orthogonal neighbor.
    Maximum,
    /// The cell is at most every orthogonal neighbor.
    Minimum,
    /// Diagonal sum heading north-west from the frame cell.
    LittleKillerNW,
    /// Diagonal sum heading north-east from the frame cell.
    LittleKillerNE,
    /// Diagonal sum heading south-east from the frame cell.
    LittleKillerSE,
    /// Diagonal sum heading south-west from the frame cell.
    LittleKillerSW,
    /// Sum of the values between the two alphabet extremes in the row or
    /// column.
    Sandwich,
    /// Count of new maxima seen along the row or column.
    Skyscraper,
    /// Sum of the first *n* cells, where *n* is the first cell's value.
    XSum,
    /// The *n*-th cell equals *n*, where *n* is the first cell's value.
    NumberedRoom,
    /// A free-form marker with no built-in rule.
    Custom,
}

/// Where clue text sits within its cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClueLocation {
    /// Top-left corner.
    TopLeft,
    /// Cell center.
    Center,
}

/// Clue text size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClueSize {
    /// Medium text.
    Medium,
    /// Small text.
    Small,
}

/// A drawn symbol attached to a cell clue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    /// An outward arrowhead (maximum).
    Arrowhead,
    /// An inward arrowhead (minimum).
    InvertedArrowhead,
    /// A small diagonal arrow (little killers).
    SmallArrow,
}

/// Compass rotation of a drawn symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    /// North.
    North,
    /// North-east.
    NorthEast,
    /// East.
    East,
    /// South-east.
    SouthEast,
    /// South.
    South,
    /// South-west.
    SouthWest,
    /// West.
    West,
    /// North-west.
    NorthWest,
}

/// Default styling for a cell clue kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellClueDefaults {
    /// Text location.
    pub location: ClueLocation,
    /// Text size.
    pub size: ClueSize,
    /// Attached symbol, if any.
    pub symbol: Option<SymbolKind>,
    /// Symbol rotation.
    pub rotation: Rotation,
    /// Text color.
    pub color: Color,
    /// Whether the clue's rule is suspended.
    pub non_standard: bool,
}

/// Returns the defaults for a cell clue kind.
#[must_use]
pub fn cell_clue_defaults(kind: CellClueKind) -> CellClueDefaults {
    match kind {
        CellClueKind::LittleKillerNW
        | CellClueKind::LittleKillerNE
        | CellClueKind::LittleKillerSE
        | CellClueKind::LittleKillerSW
        | CellClueKind::Sandwich
        | CellClueKind::Skyscraper
        | CellClueKind::XSum
        | CellClueKind::NumberedRoom => CellClueDefaults {
            location: ClueLocation::Center,
            size: ClueSize::Medium,
            symbol: None,
            rotation: Rotation::NorthWest,
            color: Color::Black,
            non_standard: false,
        },
        CellClueKind::Maximum | CellClueKind::Minimum => CellClueDefaults {
            location: ClueLocation::Center,
            size: ClueSize::Small,
            symbol: Some(if kind == CellClueKind::Maximum {
                SymbolKind::Arrowhead
            } else {
                SymbolKind::InvertedArrowhead
            }),
            rotation: Rotation::NorthWest,
            color: Color::Gray,
            non_standard: false,
        },
        CellClueKind::Custom => CellClueDefaults {
            location: ClueLocation::TopLeft,
            size: ClueSize::Small,
            symbol: None,
            rotation: Rotation::NorthWest,
            color: Color::Black,
            non_standard: false,
        },
    }
}

/// A cell clue: a marker on a single cell, often in the margin frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellClue {
    /// The clue kind.
    pub kind: CellClueKind,
    /// The cell the clue sits on.
    pub position: Position,
    /// Clue text (the numeric target for sum clues).
    pub text: Option<String>,
    /// Location override.
    pub location: Option<ClueLocation>,
    /// Size override.
    pub size: Option<ClueSize>,
    /// Symbol override.
    pub symbol: Option<SymbolKind>,
    /// Rotation override.
    pub rotation: Option<Rotation>,
    /// Color override.
    pub color: Option<Color>,
    /// Rule suspension override.
    pub non_standard: Option<bool>,
}

impl CellClue {
    /// Creates a cell clue of `kind` at `position` with no overrides.
    #[must_use]
    pub fn new(kind: CellClueKind, position: Position) -> Self {
        Self {
            kind,
            position,
            text: None,
            location: None,
            size: None,
            symbol: None,
            rotation: None,
            color: None,
            non_standard: None,
        }
    }

    /// Creates a cell clue with target text, the common case for frame
    /// clues.
    #[must_use]
    pub fn with_text(kind: CellClueKind, position: Position, text: &str) -> Self {
        Self {
            text: Some(text.to_owned()),
            ..Self::new(kind, position)
        }
    }

    /// Returns the (row, column) step of a little killer direction, or
    /// `None` for other kinds.
    #[must_use]
    pub fn little_killer_step(&self) -> Option<(i16, i16)> {
        match self.kind {
            CellClueKind::LittleKillerNW => Some((-1, -1)),
            CellClueKind::LittleKillerNE => Some((-1, 1)),
            CellClueKind::LittleKillerSE => Some((1, 1)),
            CellClueKind::LittleKillerSW => Some((1, -1)),
            _ => None,
        }
    }

    /// Resolves the rule-suspension flag, falling back to the kind default.
    #[must_use]
    pub fn is_non_standard(&self) -> bool {
        self.non_standard
            .unwrap_or_else(|| cell_clue_defaults(self.kind).non_standard)
    }
}
