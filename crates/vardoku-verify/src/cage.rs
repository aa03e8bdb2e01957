//! Cage verification.

use std::collections::HashMap;

use vardoku_core::{Cage, CageKind, CellValues, Digit, Position};

/// Checks a cage against the solution grid.
///
/// Returns the cells in violation, or nothing while the cage is satisfied
/// or still undetermined. A killer cage is only summed once every cell has
/// a value; a look-and-say cage is only counted once every cell has digits.
///
/// # Panics
///
/// Panics if a cage position lies off the board.
#[must_use]
pub fn verify_cage(cage: &Cage, solution: &CellValues) -> Vec<Position> {
    if cage.is_non_standard() {
        return Vec::new();
    }

    match cage.kind {
        CageKind::Killer => verify_killer(cage, solution),
        CageKind::LookAndSay => verify_look_and_say(cage, solution),
        CageKind::Custom => Vec::new(),
    }
}

fn verify_killer(cage: &Cage, solution: &CellValues) -> Vec<Position> {
    let Some(target) = cage.text.as_deref().and_then(|t| t.trim().parse::<i32>().ok()) else {
        return Vec::new();
    };

    let mut total = 0;
    for &position in &cage.positions {
        let Some(value) = solution[position].value else {
            return Vec::new();
        };
        total += value;
    }

    if total == target {
        Vec::new()
    } else {
        cage.positions.clone()
    }
}

fn verify_look_and_say(cage: &Cage, solution: &CellValues) -> Vec<Position> {
    let Some(text) = cage.text.as_deref() else {
        return Vec::new();
    };

    let mut counts: HashMap<Digit, u32> = HashMap::new();
    for &position in &cage.positions {
        let Some(digits) = &solution[position].digits else {
            return Vec::new();
        };
        for &digit in digits {
            *counts.entry(digit).or_insert(0) += 1;
        }
    }

    let keys: Vec<char> = text.chars().collect();
    for pair in keys.chunks(2) {
        let [count, digit] = pair else {
            return Vec::new();
        };
        let Some(count) = count.to_digit(10) else {
            return Vec::new();
        };
        let Some(digit) = Digit::from_symbol(*digit) else {
            return Vec::new();
        };
        if counts.get(&digit).copied().unwrap_or(0) != count {
            return cage.positions.clone();
        }
    }

    Vec::new()
}
