//! The effective-value deriver.

use crate::{CellValues, DigitList, Givens, Logic, LogicFlag, SCellMode};

/// Derives the grid every verifier reasons about from raw user input.
///
/// Givens override typed digits as the sole digit of their cell. Each
/// filled cell then gets an effective `value`:
///
/// - ordinarily, the first digit's numeric value;
/// - with the `SCells` flag and two typed digits, the sum or average of the
///   two (per [`SCellMode`]);
/// - with the `Doublers` flag, doubler cells count twice.
///
/// # Examples
///
/// ```
/// use vardoku_core::{
///     CellData, CellValues, Digit, Dimensions, Givens, Logic, Position, user_solution,
/// };
///
/// let dims = Dimensions::new(9, 9);
/// let mut cells = CellValues::new(&dims);
/// cells[Position::new(0, 0)] = CellData::from_digit(Digit::from_symbol('4').unwrap());
///
/// let solution = user_solution(&cells, &Givens::new(&dims), &Logic::default());
/// assert_eq!(solution[Position::new(0, 0)].value, Some(4));
/// ```
#[must_use]
pub fn user_solution(cells: &CellValues, givens: &Givens, logic: &Logic) -> CellValues {
    let mut solution = cells.clone();
    let s_cells = logic.has_flag(LogicFlag::SCells);
    let doublers = logic.has_flag(LogicFlag::Doublers);

    for position in solution.positions() {
        if let Some(given) = givens.get(position).copied().flatten() {
            solution[position].digits = Some(DigitList::from(&[given][..]));
        }

        let cell = &mut solution[position];
        let Some(digits) = cell.digits.as_ref() else {
            continue;
        };

        let base = if s_cells && digits.len() == 2 {
            let sum = i32::from(digits[0].value()) + i32::from(digits[1].value());
            match logic.s_cell_mode {
                SCellMode::Sum => sum,
                SCellMode::Average => sum / 2,
            }
        } else {
            i32::from(digits[0].value())
        };

        cell.value = Some(if doublers && cell.doubler {
            base * 2
        } else {
            base
        });
    }

    solution
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CellData, Digit, Dimensions, Position};

    fn digit(symbol: char) -> Digit {
        Digit::from_symbol(symbol).unwrap()
    }

    fn filled(symbols: &str) -> CellData {
        CellData {
            digits: Some(symbols.chars().map(|c| digit(c)).collect()),
            ..CellData::default()
        }
    }

    #[test]
    fn givens_override_typed_digits() {
        let dims = Dimensions::new(9, 9);
        let mut cells = CellValues::new(&dims);
        cells[Position::new(0, 0)] = filled("7");
        let mut givens = Givens::new(&dims);
        givens[Position::new(0, 0)] = Some(digit('2'));

        let solution = user_solution(&cells, &givens, &Logic::default());
        let cell = &solution[Position::new(0, 0)];
        assert_eq!(cell.first_digit(), Some(digit('2')));
        assert_eq!(cell.value, Some(2));
    }

    #[test]
    fn plain_value_is_face_value() {
        let dims = Dimensions::new(9, 9);
        let mut cells = CellValues::new(&dims);
        cells[Position::new(0, 0)] = filled("4");
        let solution = user_solution(&cells, &Givens::new(&dims), &Logic::default());
        assert_eq!(solution[Position::new(0, 0)].value, Some(4));
        assert_eq!(solution[Position::new(0, 1)].value, None);
    }

    #[test]
    fn s_cells_combine_two_digits() {
        let dims = Dimensions::new(9, 9);
        let mut cells = CellValues::new(&dims);
        cells[Position::new(0, 0)] = filled("35");

        let sum_logic = Logic::with_flags(vec![LogicFlag::SCells]);
        let solution = user_solution(&cells, &Givens::new(&dims), &sum_logic);
        assert_eq!(solution[Position::new(0, 0)].value, Some(8));

        let avg_logic = Logic {
            s_cell_mode: SCellMode::Average,
            ..Logic::with_flags(vec![LogicFlag::SCells])
        };
        let solution = user_solution(&cells, &Givens::new(&dims), &avg_logic);
        assert_eq!(solution[Position::new(0, 0)].value, Some(4));
    }

    #[test]
    fn doublers_double_flagged_cells() {
        let dims = Dimensions::new(9, 9);
        let mut cells = CellValues::new(&dims);
        cells[Position::new(0, 0)] = filled("6");
        cells[Position::new(0, 0)].doubler = true;
        cells[Position::new(0, 1)] = filled("6");

        let logic = Logic::with_flags(vec![LogicFlag::Doublers]);
        let solution = user_solution(&cells, &Givens::new(&dims), &logic);
        assert_eq!(solution[Position::new(0, 0)].value, Some(12));
        assert_eq!(solution[Position::new(0, 1)].value, Some(6));
    }
}
