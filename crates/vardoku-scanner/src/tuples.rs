//! Pencil-mark pattern detection: naked tuples from center marks and
//! positional sets from corner marks.

use vardoku_core::{CellValues, Clues, Digit, DigitList, Position, RegionKind};
use vardoku_verify::{SeenContext, SeenRelations, seen_cells};

/// A naked tuple: `cells` jointly lock `digits` within `context`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tuple {
    /// The locked digits.
    pub digits: DigitList,
    /// The house the tuple lives in.
    pub context: SeenContext,
    /// The cells forming the tuple.
    pub cells: Vec<Position>,
}

/// A corner-mark set: `digit` is confined to `cells` within one region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CornerSet {
    /// The confined digit.
    pub digit: Digit,
    /// The cells that may hold it.
    pub cells: Vec<Position>,
}

fn centermark_count(cells: &CellValues, position: Position) -> usize {
    cells[position].centermarks.as_ref().map_or(0, DigitList::len)
}

/// Finds naked tuples around `cell`.
///
/// With `seen` set, tuples are searched among the cells `cell` sees, house
/// by house; candidates of `cell` covered by any returned tuple can be
/// eliminated. Without it, tuples are searched among `cell` and its house
/// mates and only tuples containing `cell` itself are returned, which is
/// what selection highlighting wants. Cells without center marks never take
/// part.
///
/// # Panics
///
/// Panics if a clue names a position off the board.
#[must_use]
pub fn find_tuples(
    clues: &Clues,
    cells: &CellValues,
    cell: Position,
    relations: &SeenRelations,
    seen: bool,
) -> Vec<Tuple> {
    if !seen && cells[cell].centermarks.is_none() {
        return Vec::new();
    }

    let seen_list = seen_cells(clues, cell, relations);
    let mut tuples: Vec<Tuple> = Vec::new();
    let mut previous: Option<SeenContext> = None;

    for entry in &seen_list {
        // Contexts arrive grouped, so each is handled once.
        if previous == Some(entry.context) {
            continue;
        }
        previous = Some(entry.context);
        let context = entry.context;

        let mut house: Vec<Position> = seen_list
            .iter()
            .filter(|s| s.context == context && cells[s.position].centermarks.is_some())
            .map(|s| s.position)
            .collect();
        if house.is_empty() {
            continue;
        }
        if !seen {
            house.insert(0, cell);
        }
        // Widest mark sets first when eliminating from outside; narrowest
        // first when looking for tuples through the cell itself.
        house.sort_by(|&a, &b| {
            let a = centermark_count(cells, a);
            let b = centermark_count(cells, b);
            if seen { b.cmp(&a) } else { a.cmp(&b) }
        });

        let mut skip = vec![false; house.len()];
        for i in 0..house.len() {
            let anchor = house[i];
            let Some(digits) = cells[anchor].centermarks.clone() else {
                continue;
            };
            let mut members = vec![anchor];
            let mut member_indexes = Vec::new();

            let start = if seen { i + 1 } else { 0 };
            for (j, &candidate) in house.iter().enumerate().skip(start) {
                if j == i || (seen && skip[j]) {
                    continue;
                }
                let subset = cells[candidate]
                    .centermarks
                    .as_ref()
                    .is_some_and(|marks| marks.iter().all(|d| digits.contains(d)));
                if subset {
                    members.push(candidate);
                    member_indexes.push(j);
                }
            }

            if members.len() >= digits.len() && (seen || members.contains(&cell)) {
                for j in member_indexes {
                    skip[j] = true;
                }
                tuples.push(Tuple {
                    digits,
                    context,
                    cells: members,
                });
                if !seen {
                    break;
                }
            }
        }
    }

    tuples
}

fn region_positions_with_cornermarks(
    clues: &Clues,
    cells: &CellValues,
    position: Position,
) -> Vec<Position> {
    clues
        .regions
        .iter()
        .find(|region| {
            region.kind == RegionKind::Normal
                && region.unique_digits.unwrap_or(true)
                && region.contains(position)
        })
        .map(|region| {
            region
                .positions
                .iter()
                .copied()
                .filter(|&p| cells[p].cornermarks.is_some())
                .collect()
        })
        .unwrap_or_default()
}

/// Finds corner-mark sets relevant to `cell`.
///
/// With `seen` set, returns the sets whose cells are all visible from
/// `cell`; any candidate of `cell` matching such a set's digit can be
/// eliminated. Without it, returns one set per corner mark of `cell`
/// itself, over its own region.
///
/// # Panics
///
/// Panics if a clue names a position off the board.
#[must_use]
pub fn find_corner_sets(
    clues: &Clues,
    cells: &CellValues,
    cell: Position,
    relations: &SeenRelations,
    seen: bool,
) -> Vec<CornerSet> {
    let mut sets = Vec::new();

    if seen {
        let seen_list = seen_cells(clues, cell, relations);
        for entry in &seen_list {
            let Some(marks) = &cells[entry.position].cornermarks else {
                continue;
            };
            let region_cells = region_positions_with_cornermarks(clues, cells, entry.position);
            for &digit in marks {
                let value_cells: Vec<Position> = region_cells
                    .iter()
                    .copied()
                    .filter(|&p| {
                        cells[p]
                            .cornermarks
                            .as_ref()
                            .is_some_and(|m| m.contains(&digit))
                    })
                    .collect();
                if value_cells
                    .iter()
                    .all(|p| seen_list.iter().any(|s| s.position == *p))
                {
                    sets.push(CornerSet {
                        digit,
                        cells: value_cells,
                    });
                }
            }
        }
    } else if let Some(marks) = &cells[cell].cornermarks {
        let region_cells = region_positions_with_cornermarks(clues, cells, cell);
        for &digit in marks {
            let value_cells: Vec<Position> = region_cells
                .iter()
                .copied()
                .filter(|&p| {
                    cells[p]
                        .cornermarks
                        .as_ref()
                        .is_some_and(|m| m.contains(&digit))
                })
                .collect();
            sets.push(CornerSet {
                digit,
                cells: value_cells,
            });
        }
    }

    sets
}
