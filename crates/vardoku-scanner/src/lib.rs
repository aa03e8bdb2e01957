//! Candidate scanning for vardoku puzzles.
//!
//! The scanner automates the bookkeeping half of solving: it keeps a
//! candidate list per open cell and narrows them one elimination at a
//! time, using the visibility rules from `vardoku-verify` plus whatever
//! pencil marks the solver has left on the grid.
//!
//! [`ScannerEngine`] drives the process. Each [`step`] yields at most one
//! [`CellUpdate`] so every change stays individually undoable; automatic
//! scans are a loop of [`tick`]s paced by [`ScannerSpeed::delay`].
//! [`ScannerSettings`] controls which relations are scanned and how
//! aggressively ([`ScannerMode`]), and [`find_tuples`] /
//! [`find_corner_sets`] expose the pencil-mark pattern detection on its
//! own.
//!
//! [`step`]: ScannerEngine::step
//! [`tick`]: ScannerEngine::tick

pub mod engine;
pub mod settings;
pub mod tuples;

pub use self::{
    engine::{CellUpdate, ScannerEngine},
    settings::{HighlightMode, ScannerMode, ScannerSettings, ScannerSpeed},
    tuples::{CornerSet, Tuple, find_corner_sets, find_tuples},
};
