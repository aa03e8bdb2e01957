//! Named colors used by clue styling and cell highlights.

/// A named display color.
///
/// Colors matter to the engine in one place: clone regions are paired by
/// color. Everything else is styling passed through to display
/// collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Black.
    Black,
    /// White.
    White,
    /// Light gray.
    LightGray,
    /// Gray.
    Gray,
    /// Orange.
    Orange,
    /// Purple.
    Purple,
    /// Red.
    Red,
    /// Yellow.
    Yellow,
    /// Green.
    Green,
    /// Blue.
    Blue,
}
