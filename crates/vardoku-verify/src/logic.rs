//! Global rule verification: negative constraints, entropy blocks and
//! indexing columns.

use vardoku_core::{BorderClueKind, CellData, CellValues, Clues, Digit, LogicFlag, Position};

/// Checks the global logic flags against the solution grid.
///
/// Negative constraints compare each cell with its right and down neighbor
/// only, so every orthogonal pair is visited once. A pair that carries an
/// explicit border clue of the matching kind is exempt from its negative
/// constraint.
#[must_use]
pub fn verify_logic(clues: &Clues, solution: &CellValues) -> Vec<Position> {
    let mut invalid = Vec::new();
    verify_negative_constraints(clues, solution, &mut invalid);
    if clues.logic.has_flag(LogicFlag::Entropy) {
        verify_entropy(clues, solution, &mut invalid);
    }
    if clues.logic.has_flag(LogicFlag::Indexed159) {
        verify_indexed(clues, solution, &mut invalid);
    }
    invalid
}

fn push_unique(invalid: &mut Vec<Position>, cells: impl IntoIterator<Item = Position>) {
    for cell in cells {
        if !invalid.contains(&cell) {
            invalid.push(cell);
        }
    }
}

/// Returns `true` if a border clue of `kind` sits between `a` and `b`.
fn has_border_clue(clues: &Clues, kind: BorderClueKind, a: Position, b: Position) -> bool {
    clues
        .borderclues
        .iter()
        .any(|clue| clue.kind == kind && clue.sits_between(a, b))
}

fn digit_pair(cell: &CellData, neighbor: &CellData, relation: impl Fn(u8, u8) -> bool) -> bool {
    match (&cell.digits, &neighbor.digits) {
        (Some(a), Some(b)) => a
            .iter()
            .any(|d| b.iter().any(|e| relation(d.value(), e.value()))),
        _ => false,
    }
}

#[expect(clippy::too_many_lines)]
fn verify_negative_constraints(clues: &Clues, solution: &CellValues, invalid: &mut Vec<Position>) {
    let logic = &clues.logic;
    let nonconsecutive = logic.has_flag(LogicFlag::Nonconsecutive);
    let negative_black = logic.has_flag(LogicFlag::NegativeBlack);
    let negative_white = logic.has_flag(LogicFlag::NegativeWhite);
    let negative_x = logic.has_flag(LogicFlag::NegativeX);
    let negative_v = logic.has_flag(LogicFlag::NegativeV);
    if !(nonconsecutive || negative_black || negative_white || negative_x || negative_v) {
        return;
    }

    let dimensions = &clues.dimensions;
    for cell in dimensions.playable_positions() {
        if solution[cell].digits.is_none() {
            continue;
        }

        let neighbors: Vec<Position> = [(1, 0), (0, 1)]
            .into_iter()
            .filter_map(|(dr, dc)| cell.offset(dr, dc))
            .filter(|&p| dimensions.in_playable(p) && solution[p].digits.is_some())
            .collect();

        if nonconsecutive {
            let bad: Vec<Position> = neighbors
                .iter()
                .copied()
                .filter(|&n| digit_pair(&solution[cell], &solution[n], |x, y| x.abs_diff(y) == 1))
                .collect();
            if !bad.is_empty() {
                push_unique(invalid, std::iter::once(cell).chain(bad));
            }
        }
        if negative_black {
            let bad: Vec<Position> = neighbors
                .iter()
                .copied()
                .filter(|&n| {
                    digit_pair(&solution[cell], &solution[n], |x, y| {
                        x == 2 * y || y == 2 * x
                    }) && !has_border_clue(clues, BorderClueKind::KropkiBlack, cell, n)
                })
                .collect();
            if !bad.is_empty() {
                push_unique(invalid, std::iter::once(cell).chain(bad));
            }
        }
        if negative_white {
            let bad: Vec<Position> = neighbors
                .iter()
                .copied()
                .filter(|&n| {
                    digit_pair(&solution[cell], &solution[n], |x, y| x.abs_diff(y) == 1)
                        && !has_border_clue(clues, BorderClueKind::KropkiWhite, cell, n)
                })
                .collect();
            if !bad.is_empty() {
                push_unique(invalid, std::iter::once(cell).chain(bad));
            }
        }

        let Some(value) = solution[cell].value else {
            continue;
        };
        if negative_x {
            let bad: Vec<Position> = neighbors
                .iter()
                .copied()
                .filter(|&n| {
                    solution[n].value.is_some_and(|v| value + v == 10)
                        && !has_border_clue(clues, BorderClueKind::XvX, cell, n)
                })
                .collect();
            if !bad.is_empty() {
                push_unique(invalid, std::iter::once(cell).chain(bad));
            }
        }
        if negative_v {
            let bad: Vec<Position> = neighbors
                .iter()
                .copied()
                .filter(|&n| {
                    solution[n].value.is_some_and(|v| value + v == 5)
                        && !has_border_clue(clues, BorderClueKind::XvV, cell, n)
                })
                .collect();
            if !bad.is_empty() {
                push_unique(invalid, std::iter::once(cell).chain(bad));
            }
        }
    }
}

fn verify_entropy(clues: &Clues, solution: &CellValues, invalid: &mut Vec<Position>) {
    let dimensions = &clues.dimensions;
    for cell in dimensions.playable_positions() {
        let Some(digits) = &solution[cell].digits else {
            continue;
        };

        let mut bands: Vec<u8> = digits.iter().map(|d| d.value().div_ceil(3)).collect();
        let mut block = Vec::new();
        for (dr, dc) in [(1, 0), (0, 1), (1, 1)] {
            let Some(neighbor) = cell.offset(dr, dc).filter(|&p| dimensions.in_playable(p)) else {
                block.clear();
                break;
            };
            let Some(neighbor_digits) = &solution[neighbor].digits else {
                block.clear();
                break;
            };
            block.push(neighbor);
            bands.extend(neighbor_digits.iter().map(|d| d.value().div_ceil(3)));
        }

        if block.len() == 3 && !(bands.contains(&1) && bands.contains(&2) && bands.contains(&3)) {
            push_unique(invalid, std::iter::once(cell).chain(block));
        }
    }
}

fn verify_indexed(clues: &Clues, solution: &CellValues, invalid: &mut Vec<Position>) {
    let dimensions = &clues.dimensions;
    let row_offset = dimensions.row_offset();
    let column_offset = dimensions.column_offset();

    for i in 0..dimensions.playable_rows() {
        let row = row_offset + i;
        for d in [1u8, 5, 9] {
            let index_cell = Position::new(row, column_offset + d - 1);
            if !dimensions.in_playable(index_cell) {
                continue;
            }
            let Some(value) = solution[index_cell].value else {
                continue;
            };
            let Ok(offset) = u8::try_from(value - 1) else {
                continue;
            };
            let Some(column) = column_offset.checked_add(offset) else {
                continue;
            };
            let target = Position::new(row, column);
            if !dimensions.in_playable(target) {
                continue;
            }
            if let (Some(digits), Some(digit)) = (&solution[target].digits, Digit::from_value(d))
                && !digits.contains(&digit)
            {
                invalid.push(index_cell);
                invalid.push(target);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use vardoku_core::{BorderClue, Dimensions, Logic};

    use super::*;

    fn digit(symbol: char) -> Digit {
        Digit::from_symbol(symbol).unwrap()
    }

    fn fill(grid: &mut CellValues, position: Position, symbol: char) {
        grid[position] = CellData {
            value: Some(i32::from(digit(symbol).value())),
            ..CellData::from_digit(digit(symbol))
        };
    }

    #[test]
    fn nonconsecutive_flags_adjacent_pairs() {
        let mut clues = Clues::new(Dimensions::new(9, 9));
        clues.logic = Logic::with_flags(vec![LogicFlag::Nonconsecutive]);
        let mut grid = CellValues::new(&clues.dimensions);
        fill(&mut grid, Position::new(0, 0), '4');
        fill(&mut grid, Position::new(0, 1), '5');
        assert_eq!(
            verify_logic(&clues, &grid),
            vec![Position::new(0, 0), Position::new(0, 1)]
        );
    }

    #[test]
    fn negative_kropki_exempts_explicit_clues() {
        let mut clues = Clues::new(Dimensions::new(9, 9));
        clues.logic = Logic::with_flags(vec![LogicFlag::NegativeBlack]);
        let mut grid = CellValues::new(&clues.dimensions);
        fill(&mut grid, Position::new(0, 0), '4');
        fill(&mut grid, Position::new(0, 1), '8');
        assert_eq!(verify_logic(&clues, &grid).len(), 2);

        clues.borderclues.push(BorderClue::new(
            BorderClueKind::KropkiBlack,
            vec![Position::new(0, 0), Position::new(0, 1)],
        ));
        assert_eq!(verify_logic(&clues, &grid), vec![]);
    }

    #[test]
    fn negative_x_uses_effective_values() {
        let mut clues = Clues::new(Dimensions::new(9, 9));
        clues.logic = Logic::with_flags(vec![LogicFlag::NegativeX]);
        let mut grid = CellValues::new(&clues.dimensions);
        fill(&mut grid, Position::new(0, 0), '6');
        fill(&mut grid, Position::new(1, 0), '4');
        assert_eq!(verify_logic(&clues, &grid).len(), 2);

        grid[Position::new(1, 0)].value = Some(8);
        assert_eq!(verify_logic(&clues, &grid), vec![]);
    }

    #[test]
    fn entropy_blocks_need_all_three_bands() {
        let mut clues = Clues::new(Dimensions::new(9, 9));
        clues.logic = Logic::with_flags(vec![LogicFlag::Entropy]);
        let mut grid = CellValues::new(&clues.dimensions);
        fill(&mut grid, Position::new(0, 0), '1');
        fill(&mut grid, Position::new(0, 1), '2');
        fill(&mut grid, Position::new(1, 0), '5');
        fill(&mut grid, Position::new(1, 1), '6');
        // Bands 1 and 2 only.
        assert_eq!(verify_logic(&clues, &grid).len(), 4);

        fill(&mut grid, Position::new(1, 1), '9');
        assert_eq!(verify_logic(&clues, &grid), vec![]);
    }

    #[test]
    fn indexing_columns_point_at_their_digit() {
        let mut clues = Clues::new(Dimensions::new(9, 9));
        clues.logic = Logic::with_flags(vec![LogicFlag::Indexed159]);
        let mut grid = CellValues::new(&clues.dimensions);
        // Column 1 holds a 4, so column 4 must hold a 1.
        fill(&mut grid, Position::new(0, 0), '4');
        fill(&mut grid, Position::new(0, 3), '1');
        assert_eq!(verify_logic(&clues, &grid), vec![]);

        fill(&mut grid, Position::new(0, 3), '7');
        assert_eq!(
            verify_logic(&clues, &grid),
            vec![Position::new(0, 0), Position::new(0, 3)]
        );
    }

}
