//! Border clue verification.

use vardoku_core::{BorderClue, BorderClueKind, CellValues, Digit, DigitList, Position};

/// Checks a border clue against the solution grid.
///
/// Pair clues compare every combination of typed digits in their two cells;
/// XV clues compare effective values instead, so doublers and S-cells count.
/// Quadruples derive their four corners from the two anchor positions.
///
/// # Panics
///
/// Panics if a clue position lies off the board.
#[must_use]
pub fn verify_border_clue(clue: &BorderClue, solution: &CellValues) -> Vec<Position> {
    if clue.is_non_standard() {
        return Vec::new();
    }

    if clue.kind == BorderClueKind::Quadruple {
        return verify_quadruple(clue, solution);
    }

    let [a, b, ..] = clue.positions[..] else {
        return Vec::new();
    };
    let cell1 = &solution[a];
    let cell2 = &solution[b];
    let (Some(digits1), Some(digits2)) = (&cell1.digits, &cell2.digits) else {
        return Vec::new();
    };

    let valid = match clue.kind {
        BorderClueKind::XvX | BorderClueKind::XvV => {
            let target = if clue.kind == BorderClueKind::XvX { 10 } else { 5 };
            match (cell1.value, cell2.value) {
                (Some(x), Some(y)) => x + y == target,
                _ => true,
            }
        }
        BorderClueKind::Inequality => all_pairs(digits1, digits2, |x, y| x < y),
        BorderClueKind::KropkiBlack => all_pairs(digits1, digits2, |x, y| x == 2 * y || y == 2 * x),
        BorderClueKind::KropkiWhite => all_pairs(digits1, digits2, |x, y| x.abs_diff(y) == 1),
        BorderClueKind::Quadruple | BorderClueKind::Border | BorderClueKind::Custom => true,
    };

    if valid {
        Vec::new()
    } else {
        clue.positions.clone()
    }
}

fn all_pairs(digits1: &DigitList, digits2: &DigitList, relation: impl Fn(u8, u8) -> bool) -> bool {
    digits1
        .iter()
        .all(|v| digits2.iter().all(|u| relation(v.value(), u.value())))
}

fn verify_quadruple(clue: &BorderClue, solution: &CellValues) -> Vec<Position> {
    let Some(text) = clue.text.as_deref() else {
        return Vec::new();
    };
    let [a, b, ..] = clue.positions[..] else {
        return Vec::new();
    };
    let corners = [
        a,
        Position::new(a.row(), b.column()),
        b,
        Position::new(b.row(), a.column()),
    ];

    let mut present = Vec::new();
    for &corner in &corners {
        let Some(digits) = &solution[corner].digits else {
            return Vec::new();
        };
        present.extend(digits.iter().copied());
    }

    let mut required = Vec::new();
    for token in text.split(',') {
        let mut chars = token.trim().chars();
        let (Some(symbol), None) = (chars.next(), chars.next()) else {
            return Vec::new();
        };
        let Some(digit) = Digit::from_symbol(symbol) else {
            return Vec::new();
        };
        required.push(digit);
    }

    if required.iter().all(|digit| present.contains(digit)) {
        Vec::new()
    } else {
        corners.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use vardoku_core::{CellData, Dimensions};

    use super::*;

    fn digit(symbol: char) -> Digit {
        Digit::from_symbol(symbol).unwrap()
    }

    fn grid_with(cells: &[(Position, char)]) -> CellValues {
        let mut grid = CellValues::new(&Dimensions::new(9, 9));
        for &(position, symbol) in cells {
            grid[position] = CellData {
                value: Some(i32::from(digit(symbol).value())),
                ..CellData::from_digit(digit(symbol))
            };
        }
        grid
    }

    fn pair(kind: BorderClueKind) -> BorderClue {
        BorderClue::new(kind, vec![Position::new(0, 0), Position::new(0, 1)])
    }

    #[test]
    fn white_kropki_requires_consecutive() {
        let clue = pair(BorderClueKind::KropkiWhite);
        let good = grid_with(&[(Position::new(0, 0), '4'), (Position::new(0, 1), '5')]);
        assert_eq!(verify_border_clue(&clue, &good), vec![]);

        let bad = grid_with(&[(Position::new(0, 0), '4'), (Position::new(0, 1), '6')]);
        assert_eq!(
            verify_border_clue(&clue, &bad),
            vec![Position::new(0, 0), Position::new(0, 1)]
        );
    }

    #[test]
    fn black_kropki_requires_ratio() {
        let clue = pair(BorderClueKind::KropkiBlack);
        let good = grid_with(&[(Position::new(0, 0), '8'), (Position::new(0, 1), '4')]);
        assert_eq!(verify_border_clue(&clue, &good), vec![]);

        let bad = grid_with(&[(Position::new(0, 0), '8'), (Position::new(0, 1), '3')]);
        assert_eq!(verify_border_clue(&clue, &bad).len(), 2);
    }

    #[test]
    fn xv_compares_effective_values() {
        let clue = pair(BorderClueKind::XvX);
        let good = grid_with(&[(Position::new(0, 0), '6'), (Position::new(0, 1), '4')]);
        assert_eq!(verify_border_clue(&clue, &good), vec![]);

        // A doubled 3 counts as 6 next to a 4.
        let mut doubled = grid_with(&[(Position::new(0, 0), '3'), (Position::new(0, 1), '4')]);
        doubled[Position::new(0, 0)].value = Some(6);
        assert_eq!(verify_border_clue(&clue, &doubled), vec![]);

        let bad = grid_with(&[(Position::new(0, 0), '6'), (Position::new(0, 1), '5')]);
        assert_eq!(verify_border_clue(&clue, &bad).len(), 2);
    }

    #[test]
    fn inequality_orders_the_pair() {
        let clue = pair(BorderClueKind::Inequality);
        let good = grid_with(&[(Position::new(0, 0), '2'), (Position::new(0, 1), '7')]);
        assert_eq!(verify_border_clue(&clue, &good), vec![]);

        let bad = grid_with(&[(Position::new(0, 0), '7'), (Position::new(0, 1), '2')]);
        assert_eq!(verify_border_clue(&clue, &bad).len(), 2);
    }

    #[test]
    fn unfilled_pair_is_undetermined() {
        let clue = pair(BorderClueKind::KropkiWhite);
        let partial = grid_with(&[(Position::new(0, 0), '4')]);
        assert_eq!(verify_border_clue(&clue, &partial), vec![]);
    }

    #[test]
    fn quadruple_derives_its_corners() {
        let mut clue = BorderClue::new(
            BorderClueKind::Quadruple,
            vec![Position::new(0, 0), Position::new(1, 1)],
        );
        clue.text = Some("1,2".to_owned());

        let good = grid_with(&[
            (Position::new(0, 0), '1'),
            (Position::new(0, 1), '3'),
            (Position::new(1, 1), '2'),
            (Position::new(1, 0), '4'),
        ]);
        assert_eq!(verify_border_clue(&clue, &good), vec![]);

        let bad = grid_with(&[
            (Position::new(0, 0), '1'),
            (Position::new(0, 1), '3'),
            (Position::new(1, 1), '5'),
            (Position::new(1, 0), '4'),
        ]);
        assert_eq!(
            verify_border_clue(&clue, &bad),
            vec![
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(1, 1),
                Position::new(1, 0),
            ]
        );
    }
}
