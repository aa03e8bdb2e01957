//! Cell clue verification, including the frame clues that sit in the
//! margins (little killers, sandwiches, skyscrapers, X-sums, numbered
//! rooms).

use vardoku_core::{CellClue, CellClueKind, CellValues, Clues, Dimensions, Position};

/// Checks a cell clue against the solution grid.
///
/// Frame clues read their scan direction from where they sit in the margin
/// frame: a clue above the playable area scans down, one below scans up,
/// and likewise for the sides. A clue not adjacent to the playable area is
/// never flagged.
///
/// # Panics
///
/// Panics if the clue position lies off the board.
#[must_use]
pub fn verify_cell_clue(clue: &CellClue, solution: &CellValues, clues: &Clues) -> Vec<Position> {
    if clue.is_non_standard() {
        return Vec::new();
    }

    match clue.kind {
        CellClueKind::LittleKillerNW
        | CellClueKind::LittleKillerNE
        | CellClueKind::LittleKillerSE
        | CellClueKind::LittleKillerSW => verify_little_killer(clue, solution, clues),
        CellClueKind::Sandwich => verify_sandwich(clue, solution, clues),
        CellClueKind::Skyscraper => verify_skyscraper(clue, solution, clues),
        CellClueKind::XSum => verify_x_sum(clue, solution, clues),
        CellClueKind::NumberedRoom => verify_numbered_room(clue, solution, clues),
        CellClueKind::Maximum | CellClueKind::Minimum => verify_extremum(clue, solution, clues),
        CellClueKind::Custom => Vec::new(),
    }
}

fn parse_target(clue: &CellClue) -> Option<i32> {
    clue.text.as_deref().and_then(|t| t.trim().parse().ok())
}

/// Returns the scan step for a frame clue, derived from which margin edge
/// the clue sits on. `None` means the clue is not on a scannable edge.
fn frame_step(dimensions: &Dimensions, position: Position) -> Option<(i16, i16)> {
    let margins = dimensions.margins().unwrap_or_default();
    let mut row_step = 0i16;
    let mut column_step = 0i16;

    if margins.top > 0 && position.row() == margins.top - 1 {
        row_step = 1;
    } else if position.row() == dimensions.rows() - margins.bottom {
        row_step = -1;
    }
    if margins.left > 0 && position.column() == margins.left - 1 {
        column_step = 1;
    } else if position.column() == dimensions.columns() - margins.right {
        column_step = -1;
    }

    (row_step != 0 || column_step != 0).then_some((row_step, column_step))
}

/// Iterates the playable cells from `start` (exclusive) along `step`.
fn walk(
    dimensions: &Dimensions,
    start: Position,
    step: (i16, i16),
) -> impl Iterator<Item = Position> + use<> {
    let dimensions = *dimensions;
    let mut cursor = Some(start);
    std::iter::from_fn(move || {
        let next = cursor?.offset(step.0, step.1)?;
        if dimensions.in_playable(next) {
            cursor = Some(next);
            Some(next)
        } else {
            cursor = None;
            None
        }
    })
}

fn verify_little_killer(clue: &CellClue, solution: &CellValues, clues: &Clues) -> Vec<Position> {
    let Some(target) = parse_target(clue) else {
        return Vec::new();
    };
    let Some(step) = clue.little_killer_step() else {
        return Vec::new();
    };

    let mut total = 0;
    let mut cells = Vec::new();
    for position in walk(&clues.dimensions, clue.position, step) {
        let Some(value) = solution[position].value else {
            return Vec::new();
        };
        total += value;
        cells.push(position);
    }

    if total == target {
        Vec::new()
    } else {
        std::iter::once(clue.position).chain(cells).collect()
    }
}

fn verify_sandwich(clue: &CellClue, solution: &CellValues, clues: &Clues) -> Vec<Position> {
    let Some(target) = parse_target(clue) else {
        return Vec::new();
    };
    let Some(step) = frame_step(&clues.dimensions, clue.position) else {
        return Vec::new();
    };

    let digits = clues.logic.valid_digits(&clues.dimensions);
    let (Some(first), Some(last)) = (digits.first(), digits.last()) else {
        return Vec::new();
    };
    let lo = i32::from(first.value());
    let hi = i32::from(last.value());

    let mut crust: Option<i32> = None;
    let mut total = 0;
    let mut count = 0;
    let mut cells = Vec::new();
    for position in walk(&clues.dimensions, clue.position, step) {
        match solution[position].value {
            Some(v) if v == lo || v == hi => {
                if crust.is_none() {
                    crust = Some(v);
                } else {
                    count += 1;
                    cells.push(position);
                    break;
                }
                count += 1;
            }
            Some(v) => {
                if crust.is_some() {
                    total += v;
                    count += 1;
                } else {
                    // Resolved filler before the first crust tells us
                    // nothing about the sandwich.
                    continue;
                }
            }
            None => {}
        }
        if crust.is_some() {
            cells.push(position);
        }
    }

    if count > 0 && count == cells.len() && total != target {
        std::iter::once(clue.position).chain(cells).collect()
    } else {
        Vec::new()
    }
}

fn verify_skyscraper(clue: &CellClue, solution: &CellValues, clues: &Clues) -> Vec<Position> {
    let Some(target) = parse_target(clue) else {
        return Vec::new();
    };
    let Some(step) = frame_step(&clues.dimensions, clue.position) else {
        return Vec::new();
    };

    let mut tallest = 0;
    let mut visible = 0;
    let mut count = 0;
    let mut cells = Vec::new();
    for position in walk(&clues.dimensions, clue.position, step) {
        if let Some(value) = solution[position].value {
            if value > tallest {
                visible += 1;
                tallest = value;
            }
            count += 1;
        }
        cells.push(position);
    }

    if count > 0 && count == cells.len() && visible != target {
        std::iter::once(clue.position).chain(cells).collect()
    } else {
        Vec::new()
    }
}

fn verify_x_sum(clue: &CellClue, solution: &CellValues, clues: &Clues) -> Vec<Position> {
    let Some(target) = parse_target(clue) else {
        return Vec::new();
    };
    let Some(step) = frame_step(&clues.dimensions, clue.position) else {
        return Vec::new();
    };

    let mut cursor = walk(&clues.dimensions, clue.position, step);
    let Some(first) = cursor.next() else {
        return Vec::new();
    };
    let Some(length) = solution[first].value else {
        return Vec::new();
    };

    let mut total = 0;
    let mut count = 0;
    let mut cells = Vec::new();
    for position in std::iter::once(first).chain(cursor) {
        if let Some(value) = solution[position].value {
            total += value;
            count += 1;
        }
        cells.push(position);
        if i32::try_from(cells.len()) == Ok(length) {
            break;
        }
    }

    if count > 0 && count == cells.len() && total != target {
        std::iter::once(clue.position).chain(cells).collect()
    } else {
        Vec::new()
    }
}

fn verify_numbered_room(clue: &CellClue, solution: &CellValues, clues: &Clues) -> Vec<Position> {
    if clue.text.is_none() {
        return Vec::new();
    }
    let Some(step) = frame_step(&clues.dimensions, clue.position) else {
        return Vec::new();
    };

    let mut cursor = walk(&clues.dimensions, clue.position, step);
    let Some(first) = cursor.next() else {
        return Vec::new();
    };
    let Some(index) = solution[first].value else {
        return Vec::new();
    };

    let row = i32::from(first.row()) + i32::from(step.0) * (index - 1);
    let column = i32::from(first.column()) + i32::from(step.1) * (index - 1);
    let (Ok(row), Ok(column)) = (u8::try_from(row), u8::try_from(column)) else {
        return Vec::new();
    };
    let nth = Position::new(row, column);
    if !clues.dimensions.in_playable(nth) {
        return Vec::new();
    }

    match solution[nth].value {
        Some(value) if value != index => vec![clue.position],
        _ => Vec::new(),
    }
}

fn verify_extremum(clue: &CellClue, solution: &CellValues, clues: &Clues) -> Vec<Position> {
    let Some(digits) = &solution[clue.position].digits else {
        return Vec::new();
    };

    let maximum = clue.kind == CellClueKind::Maximum;
    let mut invalid = Vec::new();
    for neighbor in clues.dimensions.orthogonal_neighbors(clue.position) {
        let Some(neighbor_digits) = &solution[neighbor].digits else {
            continue;
        };
        let clash = digits.iter().any(|v| {
            neighbor_digits.iter().any(|u| {
                if maximum {
                    v.value() < u.value()
                } else {
                    u.value() < v.value()
                }
            })
        });
        if clash {
            invalid.push(neighbor);
        }
    }

    if invalid.is_empty() {
        Vec::new()
    } else {
        std::iter::once(clue.position).chain(invalid).collect()
    }
}
