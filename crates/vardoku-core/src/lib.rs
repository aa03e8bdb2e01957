//! Core data model for the vardoku constraint engine.
//!
//! This crate holds the value types everything else reasons over:
//!
//! 1. **Board geometry** — [`Position`], [`Dimensions`] and [`Margins`]
//!    (margins carve the inactive frame used by little killers, sandwich
//!    sums and other frame clues).
//! 2. **Digits** — [`Digit`] symbols over a fixed master table, plus the
//!    range-expression parser behind configurable alphabets like
//!    `"0-9;A-F"` ([`digit::parse_digit_range`]).
//! 3. **Cell state** — [`CellData`] with typed digits, pencil marks and
//!    the derived effective value, stored in row-major [`Grid`]s
//!    ([`CellValues`], [`Givens`]).
//! 4. **The clue catalog** — [`Clues`] bundling regions, paths, border
//!    clues, cell clues, cages and global [`Logic`] flags, with per-kind
//!    default behavior/styling tables.
//! 5. **The effective-value deriver** — [`user_solution`], which resolves
//!    givens, S-cells and doublers into the numeric grid verifiers
//!    compare.
//!
//! All of these are plain value data: the engine borrows them per call and
//! owns no long-lived references into them.

pub mod cell;
pub mod clue;
pub mod color;
pub mod digit;
pub mod dimensions;
pub mod grid;
pub mod position;
pub mod solution;

pub use self::{
    cell::{CellData, none_if_empty},
    clue::{
        BorderClue, BorderClueKind, Cage, CageKind, CellClue, CellClueKind, Clues, Logic,
        LogicFlag, Path, PathKind, Region, RegionKind, SCellMode, border_clue_defaults,
        cage_defaults, cell_clue_defaults, default_regions, path_defaults, region_defaults,
    },
    color::Color,
    digit::{Digit, DigitList},
    dimensions::{Dimensions, Margins, RegionSize},
    grid::{CellValues, Givens, Grid},
    position::Position,
    solution::user_solution,
};
