//! The clue catalog: every declarative constraint of a puzzle.

pub use self::{border_clue::*, cage::*, cell_clue::*, logic::*, path::*, region::*};
use crate::{Digit, Dimensions, Givens, Position};

mod border_clue;
mod cage;
mod cell_clue;
mod logic;
mod path;
mod region;

/// A puzzle's full clue catalog.
///
/// This is the read-only input the verifiers and scanner reason over; it is
/// owned by the editor/game collaborator and borrowed by the engine for the
/// duration of each call.
///
/// # Examples
///
/// ```
/// use vardoku_core::{Cage, Clues, Dimensions, Position};
///
/// let mut clues = Clues::new(Dimensions::new(9, 9));
/// assert_eq!(clues.regions.len(), 9); // default 3×3 boxes
///
/// clues.cages.push(Cage::killer(
///     vec![Position::new(0, 0), Position::new(0, 1)],
///     "10",
/// ));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clues {
    /// Board dimensions.
    pub dimensions: Dimensions,
    /// Global rules and the alphabet.
    pub logic: Logic,
    /// Fixed given digits.
    pub givens: Givens,
    /// Region clues, including the Normal partition.
    pub regions: Vec<Region>,
    /// Path clues.
    pub paths: Vec<Path>,
    /// Border clues.
    pub borderclues: Vec<BorderClue>,
    /// Cell clues.
    pub cellclues: Vec<CellClue>,
    /// Cage clues.
    pub cages: Vec<Cage>,
}

impl Clues {
    /// Creates an empty catalog with the default Normal region partition.
    #[must_use]
    pub fn new(dimensions: Dimensions) -> Self {
        Self {
            regions: default_regions(&dimensions),
            ..Self::empty(dimensions)
        }
    }

    /// Creates an empty catalog with no regions at all.
    #[must_use]
    pub fn empty(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            logic: Logic::default(),
            givens: Givens::new(&dimensions),
            regions: Vec::new(),
            paths: Vec::new(),
            borderclues: Vec::new(),
            cellclues: Vec::new(),
            cages: Vec::new(),
        }
    }

    /// Returns the given digit at `position`, if any.
    #[must_use]
    pub fn given(&self, position: Position) -> Option<Digit> {
        self.givens.get(position).copied().flatten()
    }

    /// Returns the Normal region containing `position` whose uniqueness
    /// rule is active, if any.
    #[must_use]
    pub fn normal_region_at(&self, position: Position) -> Option<&Region> {
        let nonstandard = self.logic.has_flag(LogicFlag::NonStandard);
        self.regions.iter().find(|r| {
            r.kind == RegionKind::Normal && r.has_unique_digits(nonstandard) && r.contains(position)
        })
    }
}

/// Builds the default Normal region partition for a board.
///
/// Returns no regions when the board has no box partition
/// (see [`Dimensions::region_size`]).
#[must_use]
pub fn default_regions(dimensions: &Dimensions) -> Vec<Region> {
    let size = dimensions.region_size();
    if size.width == 0 || size.height == 0 {
        return Vec::new();
    }
    let row_offset = dimensions.row_offset();
    let column_offset = dimensions.column_offset();
    let rows = dimensions.playable_rows();
    let columns = dimensions.playable_columns();

    let mut regions = Vec::new();
    for band in 0..rows / size.height {
        for stack in 0..columns / size.width {
            let mut positions = Vec::new();
            for r in 0..size.height {
                for c in 0..size.width {
                    positions.push(Position::new(
                        row_offset + band * size.height + r,
                        column_offset + stack * size.width + c,
                    ));
                }
            }
            regions.push(Region::new(RegionKind::Normal, positions));
        }
    }
    regions
}
