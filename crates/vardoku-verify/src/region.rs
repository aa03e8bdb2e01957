//! Region verification: magic squares and clones.
//!
//! Plain uniqueness inside regions is not checked here; the aggregate error
//! check covers duplicates through the seen-cells resolver.

use vardoku_core::{CellValues, Clues, Position, Region, RegionKind};

/// Checks a region clue against the solution grid.
///
/// Magic squares require every cell resolved before the sums are compared;
/// clone regions are compared pair-wise against every other clone region of
/// the same color, cell for cell in sorted position order.
///
/// # Panics
///
/// Panics if a region position lies off the board.
#[must_use]
pub fn verify_region(region: &Region, solution: &CellValues, clues: &Clues) -> Vec<Position> {
    if region.is_non_standard() {
        return Vec::new();
    }

    match region.kind {
        RegionKind::MagicSquare => verify_magic_square(region, solution),
        RegionKind::Clone => verify_clone(region, solution, clues),
        RegionKind::Normal | RegionKind::Extra | RegionKind::Custom => Vec::new(),
    }
}

fn verify_magic_square(region: &Region, solution: &CellValues) -> Vec<Position> {
    let n = integer_sqrt(region.positions.len());
    if n == 0 || n * n != region.positions.len() {
        return Vec::new();
    }

    let mut positions = region.positions.clone();
    positions.sort_unstable();

    let mut values = vec![vec![0i32; n]; n];
    for i in 0..n {
        for j in 0..n {
            let Some(value) = solution[positions[i * n + j]].value else {
                return Vec::new();
            };
            values[i][j] = value;
        }
    }

    let mut sums = Vec::with_capacity(2 * n + 2);
    for row in &values {
        sums.push(row.iter().sum::<i32>());
    }
    for j in 0..n {
        sums.push((0..n).map(|i| values[i][j]).sum());
    }
    sums.push((0..n).map(|i| values[i][i]).sum());
    sums.push((0..n).map(|i| values[i][n - i - 1]).sum());

    if sums.windows(2).any(|pair| pair[0] != pair[1]) {
        positions
    } else {
        Vec::new()
    }
}

fn verify_clone(region: &Region, solution: &CellValues, clues: &Clues) -> Vec<Position> {
    let mut positions = region.positions.clone();
    positions.sort_unstable();

    let mut uncloned = Vec::new();
    for other in &clues.regions {
        if std::ptr::eq(other, region)
            || other.kind != RegionKind::Clone
            || other.color != region.color
        {
            continue;
        }

        let mut clone_positions = other.positions.clone();
        clone_positions.sort_unstable();

        for (i, &position) in positions.iter().enumerate() {
            let Some(value) = solution[position].value else {
                continue;
            };
            let Some(&mirror) = clone_positions.get(i) else {
                break;
            };
            if let Some(mirror_value) = solution[mirror].value
                && mirror_value != value
            {
                if !uncloned.contains(&position) {
                    uncloned.push(position);
                }
                uncloned.push(mirror);
            }
        }
    }
    uncloned
}

fn integer_sqrt(n: usize) -> usize {
    let mut root = 0;
    while (root + 1) * (root + 1) <= n {
        root += 1;
    }
    root
}

#[cfg(test)]
mod tests {
    use vardoku_core::{CellData, Digit, Dimensions};

    use super::*;

    fn grid_with(cells: &[(Position, char)]) -> CellValues {
        let mut grid = CellValues::new(&Dimensions::new(9, 9));
        for &(position, symbol) in cells {
            let digit = Digit::from_symbol(symbol).unwrap();
            grid[position] = CellData {
                value: Some(i32::from(digit.value())),
                ..CellData::from_digit(digit)
            };
        }
        grid
    }

    fn square(row: u8, column: u8) -> Vec<Position> {
        let mut positions = Vec::new();
        for r in 0..3 {
            for c in 0..3 {
                positions.push(Position::new(row + r, column + c));
            }
        }
        positions
    }

    #[test]
    fn magic_square_accepts_the_lo_shu() {
        let region = Region::new(RegionKind::MagicSquare, square(0, 0));
        let solution = grid_with(&[
            (Position::new(0, 0), '2'),
            (Position::new(0, 1), '7'),
            (Position::new(0, 2), '6'),
            (Position::new(1, 0), '9'),
            (Position::new(1, 1), '5'),
            (Position::new(1, 2), '1'),
            (Position::new(2, 0), '4'),
            (Position::new(2, 1), '3'),
            (Position::new(2, 2), '8'),
        ]);
        let clues = Clues::new(Dimensions::new(9, 9));
        assert_eq!(verify_region(&region, &solution, &clues), vec![]);
    }

    #[test]
    fn magic_square_rejects_unequal_sums() {
        let region = Region::new(RegionKind::MagicSquare, square(0, 0));
        let mut cells = Vec::new();
        for (i, symbol) in "123456789".chars().enumerate() {
            let i = u8::try_from(i).unwrap();
            cells.push((Position::new(i / 3, i % 3), symbol));
        }
        let solution = grid_with(&cells);
        let clues = Clues::new(Dimensions::new(9, 9));
        assert_eq!(verify_region(&region, &solution, &clues).len(), 9);
    }

    #[test]
    fn clones_must_match_cell_for_cell() {
        let mut clues = Clues::new(Dimensions::new(9, 9));
        let a = Region::new(RegionKind::Clone, vec![Position::new(0, 0), Position::new(0, 1)]);
        let b = Region::new(RegionKind::Clone, vec![Position::new(5, 5), Position::new(5, 6)]);
        clues.regions.push(a);
        clues.regions.push(b);

        let solution = grid_with(&[
            (Position::new(0, 0), '4'),
            (Position::new(0, 1), '7'),
            (Position::new(5, 5), '4'),
            (Position::new(5, 6), '2'),
        ]);
        let region = clues
            .regions
            .iter()
            .find(|r| r.kind == RegionKind::Clone)
            .unwrap();
        assert_eq!(
            verify_region(region, &solution, &clues),
            vec![Position::new(0, 1), Position::new(5, 6)]
        );
    }

    #[test]
    fn partial_clones_are_undetermined() {
        let mut clues = Clues::new(Dimensions::new(9, 9));
        clues.regions.push(Region::new(
            RegionKind::Clone,
            vec![Position::new(0, 0), Position::new(0, 1)],
        ));
        clues.regions.push(Region::new(
            RegionKind::Clone,
            vec![Position::new(5, 5), Position::new(5, 6)],
        ));

        let solution = grid_with(&[(Position::new(0, 0), '4')]);
        let region = clues
            .regions
            .iter()
            .find(|r| r.kind == RegionKind::Clone)
            .unwrap();
        assert_eq!(verify_region(region, &solution, &clues), vec![]);
    }
}
