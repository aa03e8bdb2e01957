//! Constraint verification for vardoku puzzles.
//!
//! Each clue family gets a `verify_*` function that checks one clue
//! against a solved-so-far grid and returns the positions in violation.
//! An empty result means the clue is satisfied or still undetermined;
//! verifiers never flag a constraint that unfilled cells could yet
//! satisfy.
//!
//! [`seen_cells`] resolves which cells must hold different digits and
//! through which relation, and [`error_cells`] aggregates duplicates and
//! every verifier into one deduplicated list.

pub mod border_clue;
pub mod cage;
pub mod cell_clue;
pub mod check;
pub mod logic;
pub mod path;
pub mod region;
pub mod visibility;

pub use self::{
    border_clue::verify_border_clue,
    cage::verify_cage,
    cell_clue::verify_cell_clue,
    check::{error_cells, mismatched_cells},
    logic::verify_logic,
    path::verify_path,
    region::verify_region,
    visibility::{SeenCell, SeenContext, SeenRelations, seen_cells},
};
