//! The aggregate error check: every violated cell on the board.

use vardoku_core::{CellValues, Clues, Grid, Position, user_solution};

use crate::{
    verify_border_clue, verify_cage, verify_cell_clue, verify_logic, verify_path, verify_region,
    visibility::{SeenRelations, seen_cells},
};

/// Returns every cell currently violating a constraint, deduplicated in
/// first-flagged order.
///
/// Derives the effective-value grid first, then checks duplicate digits
/// through every seen-cells relation and runs every clue verifier. Cells
/// whose constraints are still undetermined are never flagged.
///
/// # Panics
///
/// Panics if a clue position lies off the board.
#[must_use]
pub fn error_cells(clues: &Clues, cells: &CellValues) -> Vec<Position> {
    let solution = user_solution(cells, &clues.givens, &clues.logic);
    let mut wrong: Vec<Position> = Vec::new();

    for position in solution.positions() {
        let Some(digits) = &solution[position].digits else {
            continue;
        };
        for seen in seen_cells(clues, position, &SeenRelations::ALL) {
            if digits.iter().any(|&d| solution[seen.position].has_digit(d)) {
                wrong.push(seen.position);
            }
        }
    }

    for region in &clues.regions {
        wrong.extend(verify_region(region, &solution, clues));
    }
    for path in &clues.paths {
        wrong.extend(verify_path(path, &solution, clues));
    }
    for clue in &clues.borderclues {
        wrong.extend(verify_border_clue(clue, &solution));
    }
    for clue in &clues.cellclues {
        wrong.extend(verify_cell_clue(clue, &solution, clues));
    }
    for cage in &clues.cages {
        wrong.extend(verify_cage(cage, &solution));
    }
    wrong.extend(verify_logic(clues, &solution));

    let mut unique = Vec::new();
    for position in wrong {
        if !unique.contains(&position) {
            unique.push(position);
        }
    }
    unique
}

/// Flags filled cells whose typed digits disagree with an expected
/// solution grid, given as the concatenated digit symbols per cell.
#[must_use]
pub fn mismatched_cells(clues: &Clues, cells: &CellValues, expected: &Grid<String>) -> Vec<Position> {
    let solution = user_solution(cells, &clues.givens, &clues.logic);
    let mut wrong = Vec::new();
    for position in solution.positions() {
        let Some(digits) = &solution[position].digits else {
            continue;
        };
        let typed: String = digits.iter().map(|d| d.symbol()).collect();
        if expected.get(position).is_none_or(|s| *s != typed) {
            wrong.push(position);
        }
    }
    wrong
}
