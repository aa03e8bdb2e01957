//! The seen-cells resolver: which cells must differ from a given cell, and
//! through which relation.

use std::fmt::{self, Display};

use vardoku_core::{CageKind, Clues, LogicFlag, PathKind, Position, RegionKind};

/// The relation through which one cell sees another.
///
/// Contexts matter beyond dedup: the tuple finder groups seen cells per
/// context, since a naked pair only eliminates within the house it lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeenContext {
    /// Same row.
    Row,
    /// Same column.
    Column,
    /// Same Normal region.
    Region,
    /// Both on the negative (top-left to bottom-right) diagonal.
    DiagonalNeg,
    /// Both on the positive (bottom-left to top-right) diagonal.
    DiagonalPos,
    /// A king's move apart.
    AntiKing,
    /// A knight's move apart.
    AntiKnight,
    /// Same in-box position in different boxes.
    DisjointSet,
    /// Same cage with unique digits.
    Cage {
        /// The cage kind.
        kind: CageKind,
        /// Index of the cage in the clue catalog.
        index: usize,
    },
    /// Same path with unique digits.
    Path {
        /// The path kind.
        kind: PathKind,
        /// Index of the path in the clue catalog.
        index: usize,
    },
    /// Same non-Normal region with unique digits.
    ExtraRegion {
        /// The region kind.
        kind: RegionKind,
        /// Index of the region in the clue catalog.
        index: usize,
    },
}

impl Display for SeenContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row => write!(f, "ROW"),
            Self::Column => write!(f, "COLUMN"),
            Self::Region => write!(f, "REGION"),
            Self::DiagonalNeg => write!(f, "DIAGONAL-"),
            Self::DiagonalPos => write!(f, "DIAGONAL+"),
            Self::AntiKing => write!(f, "ANTIKING"),
            Self::AntiKnight => write!(f, "ANTIKNIGHT"),
            Self::DisjointSet => write!(f, "DISJOINTSET"),
            Self::Cage { kind, index } => write!(f, "CAGE:{kind:?}[{index}]"),
            Self::Path { kind, index } => write!(f, "PATH:{kind:?}[{index}]"),
            Self::ExtraRegion { kind, index } => write!(f, "REGION:{kind:?}[{index}]"),
        }
    }
}

/// One cell seen from another, tagged with the relation that links them.
///
/// The same position may appear more than once under different contexts;
/// callers that only care about positions dedup themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeenCell {
    /// The seen cell.
    pub position: Position,
    /// The relation through which it is seen.
    pub context: SeenContext,
}

/// Which relation families the resolver includes beyond row, column and
/// Normal region.
///
/// Each family still requires its logic flag (or clue) to be present; these
/// toggles only let a caller narrow the scan, the way scanner settings do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeenRelations {
    /// Include the diagonals.
    pub diagonals: bool,
    /// Include anti-king moves.
    pub anti_king: bool,
    /// Include anti-knight moves.
    pub anti_knight: bool,
    /// Include disjoint sets.
    pub disjoint_sets: bool,
    /// Include cages with unique digits.
    pub cages: bool,
    /// Include paths with unique digits.
    pub paths: bool,
    /// Include non-Normal regions with unique digits.
    pub extra_regions: bool,
}

impl SeenRelations {
    /// Every relation family.
    pub const ALL: Self = Self {
        diagonals: true,
        anti_king: true,
        anti_knight: true,
        disjoint_sets: true,
        cages: true,
        paths: true,
        extra_regions: true,
    };

    /// Row, column and Normal region only.
    pub const STANDARD: Self = Self {
        diagonals: false,
        anti_king: false,
        anti_knight: false,
        disjoint_sets: false,
        cages: false,
        paths: false,
        extra_regions: false,
    };
}

impl Default for SeenRelations {
    fn default() -> Self {
        Self::ALL
    }
}

/// Resolves every cell that `cell` sees, in a stable order.
///
/// Row and column come first, then the Normal region, then the extended
/// relations enabled by `relations`. Returns nothing for frame cells.
#[must_use]
#[expect(clippy::too_many_lines)]
pub fn seen_cells(clues: &Clues, cell: Position, relations: &SeenRelations) -> Vec<SeenCell> {
    let dimensions = &clues.dimensions;
    if !dimensions.in_playable(cell) {
        return Vec::new();
    }

    let row_offset = dimensions.row_offset();
    let column_offset = dimensions.column_offset();
    let rows = dimensions.playable_rows();
    let columns = dimensions.playable_columns();
    let i = cell.row() - row_offset;
    let j = cell.column() - column_offset;

    let logic = &clues.logic;
    let nonstandard = logic.has_flag(LogicFlag::NonStandard);

    let mut seen = Vec::new();
    let mut push = |seen: &mut Vec<SeenCell>, row, column, context| {
        seen.push(SeenCell {
            position: Position::new(row, column),
            context,
        });
    };

    if !nonstandard {
        for x in 0..columns {
            if x != j {
                push(&mut seen, cell.row(), x + column_offset, SeenContext::Row);
            }
        }
        for y in 0..rows {
            if y != i {
                push(&mut seen, y + row_offset, cell.column(), SeenContext::Column);
            }
        }
    }

    for region in &clues.regions {
        if region.kind == RegionKind::Normal
            && region.has_unique_digits(nonstandard)
            && region.contains(cell)
        {
            for &p in &region.positions {
                if p != cell {
                    push(&mut seen, p.row(), p.column(), SeenContext::Region);
                }
            }
        }
    }

    if relations.diagonals && logic.has_flag(LogicFlag::DiagonalNeg) && i == j {
        for k in 0..rows {
            if k != i {
                push(
                    &mut seen,
                    k + row_offset,
                    k + column_offset,
                    SeenContext::DiagonalNeg,
                );
            }
        }
    }
    if relations.diagonals && logic.has_flag(LogicFlag::DiagonalPos) && i + j == rows - 1 {
        for k in 0..rows {
            if k != i {
                push(
                    &mut seen,
                    k + row_offset,
                    rows - 1 - k + column_offset,
                    SeenContext::DiagonalPos,
                );
            }
        }
    }
    if relations.anti_king && logic.has_flag(LogicFlag::Antiking) {
        // Orthogonal neighbors are already covered by row and column.
        for dy in [-1, 1] {
            for dx in [-1, 1] {
                if let Some(p) = cell.offset(dy, dx)
                    && dimensions.in_playable(p)
                {
                    push(&mut seen, p.row(), p.column(), SeenContext::AntiKing);
                }
            }
        }
    }
    if relations.anti_knight && logic.has_flag(LogicFlag::Antiknight) {
        for dy in [-2, -1, 1, 2] {
            for dx in [-2, -1, 1, 2] {
                if i16::abs(dy) == i16::abs(dx) {
                    continue;
                }
                if let Some(p) = cell.offset(dy, dx)
                    && dimensions.in_playable(p)
                {
                    push(&mut seen, p.row(), p.column(), SeenContext::AntiKnight);
                }
            }
        }
    }
    if relations.disjoint_sets && logic.has_flag(LogicFlag::DisjointSets) {
        let size = dimensions.region_size();
        if size.width > 0 && size.height > 0 {
            for m in 0..rows / size.height {
                for n in 0..columns / size.width {
                    if i / size.height != m || j / size.width != n {
                        push(
                            &mut seen,
                            i % size.height + m * size.height + row_offset,
                            j % size.width + n * size.width + column_offset,
                            SeenContext::DisjointSet,
                        );
                    }
                }
            }
        }
    }
    if relations.cages {
        for (index, cage) in clues.cages.iter().enumerate() {
            if cage.has_unique_digits() && cage.contains(cell) {
                for &p in &cage.positions {
                    if p != cell {
                        push(
                            &mut seen,
                            p.row(),
                            p.column(),
                            SeenContext::Cage {
                                kind: cage.kind,
                                index,
                            },
                        );
                    }
                }
            }
        }
    }
    if relations.paths {
        for (index, path) in clues.paths.iter().enumerate() {
            if path.has_unique_digits() && path.contains(cell) {
                for &p in &path.positions {
                    if p != cell {
                        push(
                            &mut seen,
                            p.row(),
                            p.column(),
                            SeenContext::Path {
                                kind: path.kind,
                                index,
                            },
                        );
                    }
                }
            }
        }
    }
    if relations.extra_regions {
        for (index, region) in clues.regions.iter().enumerate() {
            if region.kind != RegionKind::Normal
                && region.has_unique_digits(nonstandard)
                && region.contains(cell)
            {
                for &p in &region.positions {
                    if p != cell {
                        push(
                            &mut seen,
                            p.row(),
                            p.column(),
                            SeenContext::ExtraRegion {
                                kind: region.kind,
                                index,
                            },
                        );
                    }
                }
            }
        }
    }

    seen
}

#[cfg(test)]
mod tests {
    use vardoku_core::{Cage, Dimensions, Logic, Region};

    use super::*;

    #[test]
    fn standard_relations_cover_the_houses() {
        let clues = Clues::new(Dimensions::new(9, 9));
        let seen = seen_cells(&clues, Position::new(0, 0), &SeenRelations::STANDARD);

        let rows: Vec<_> = seen
            .iter()
            .filter(|s| s.context == SeenContext::Row)
            .collect();
        assert_eq!(rows.len(), 8);
        assert_eq!(rows[0].position, Position::new(0, 1));

        let columns = seen
            .iter()
            .filter(|s| s.context == SeenContext::Column)
            .count();
        assert_eq!(columns, 8);

        let region = seen
            .iter()
            .filter(|s| s.context == SeenContext::Region)
            .count();
        assert_eq!(region, 8);
    }

    #[test]
    fn nonstandard_drops_rows_and_columns() {
        let mut clues = Clues::new(Dimensions::new(9, 9));
        clues.logic.flags.push(LogicFlag::NonStandard);
        let seen = seen_cells(&clues, Position::new(0, 0), &SeenRelations::ALL);
        assert!(seen.is_empty());
    }

    #[test]
    fn diagonal_only_from_diagonal_cells() {
        let mut clues = Clues::new(Dimensions::new(9, 9));
        clues.logic = Logic::with_flags(vec![LogicFlag::DiagonalNeg, LogicFlag::DiagonalPos]);

        let on_neg = seen_cells(&clues, Position::new(4, 4), &SeenRelations::ALL);
        assert_eq!(
            on_neg
                .iter()
                .filter(|s| s.context == SeenContext::DiagonalNeg)
                .count(),
            8
        );
        // (4, 4) is also the center of the positive diagonal on a 9x9 board.
        assert_eq!(
            on_neg
                .iter()
                .filter(|s| s.context == SeenContext::DiagonalPos)
                .count(),
            8
        );

        let off_diag = seen_cells(&clues, Position::new(0, 1), &SeenRelations::ALL);
        assert!(
            off_diag
                .iter()
                .all(|s| s.context != SeenContext::DiagonalNeg
                    && s.context != SeenContext::DiagonalPos)
        );
    }

    #[test]
    fn anti_knight_respects_board_edges() {
        let mut clues = Clues::new(Dimensions::new(9, 9));
        clues.logic = Logic::with_flags(vec![LogicFlag::Antiknight]);
        let seen = seen_cells(&clues, Position::new(0, 0), &SeenRelations::ALL);
        let knight: Vec<_> = seen
            .iter()
            .filter(|s| s.context == SeenContext::AntiKnight)
            .map(|s| s.position)
            .collect();
        assert_eq!(knight, vec![Position::new(1, 2), Position::new(2, 1)]);
    }

    #[test]
    fn disjoint_sets_share_box_offsets() {
        let mut clues = Clues::new(Dimensions::new(9, 9));
        clues.logic = Logic::with_flags(vec![LogicFlag::DisjointSets]);
        let seen = seen_cells(&clues, Position::new(1, 1), &SeenRelations::ALL);
        let disjoint: Vec<_> = seen
            .iter()
            .filter(|s| s.context == SeenContext::DisjointSet)
            .map(|s| s.position)
            .collect();
        assert_eq!(disjoint.len(), 8);
        assert!(disjoint.contains(&Position::new(4, 4)));
        assert!(disjoint.contains(&Position::new(7, 7)));
        assert!(!disjoint.contains(&Position::new(1, 1)));
    }

    #[test]
    fn relation_toggles_narrow_the_scan() {
        let mut clues = Clues::new(Dimensions::new(9, 9));
        clues.logic = Logic::with_flags(vec![LogicFlag::Antiking]);
        clues.cages.push(Cage::killer(
            vec![Position::new(0, 0), Position::new(0, 1)],
            "10",
        ));

        let all = seen_cells(&clues, Position::new(0, 0), &SeenRelations::ALL);
        assert!(all.iter().any(|s| s.context == SeenContext::AntiKing));
        assert!(
            all.iter()
                .any(|s| matches!(s.context, SeenContext::Cage { .. }))
        );

        let standard = seen_cells(&clues, Position::new(0, 0), &SeenRelations::STANDARD);
        assert!(standard.iter().all(|s| matches!(
            s.context,
            SeenContext::Row | SeenContext::Column | SeenContext::Region
        )));
    }

    #[test]
    fn extra_regions_and_contexts_display() {
        let mut clues = Clues::new(Dimensions::new(9, 9));
        clues.regions.push(Region::new(
            RegionKind::Extra,
            vec![Position::new(0, 0), Position::new(1, 1)],
        ));
        let index = clues.regions.len() - 1;
        let seen = seen_cells(&clues, Position::new(0, 0), &SeenRelations::ALL);
        let extra = seen
            .iter()
            .find(|s| matches!(s.context, SeenContext::ExtraRegion { .. }))
            .unwrap();
        assert_eq!(extra.position, Position::new(1, 1));
        assert_eq!(extra.context.to_string(), format!("REGION:Extra[{index}]"));
        assert_eq!(SeenContext::DiagonalNeg.to_string(), "DIAGONAL-");
    }
}
