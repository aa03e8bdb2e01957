//! Path verification.

use vardoku_core::{CellValues, Clues, Digit, Path, PathKind, Position, RegionKind};

/// Checks a path clue against the solution grid.
///
/// Every rule treats unfilled cells as still undetermined: a thermo with a
/// gap is fine as long as the filled cells already increase, an arrow is
/// only summed once every shaft cell has a value, and so on. Pill paths
/// carry no rule of their own; they serve as multi-digit arrow bulbs.
///
/// # Panics
///
/// Panics if a path position lies off the board.
#[must_use]
pub fn verify_path(path: &Path, solution: &CellValues, clues: &Clues) -> Vec<Position> {
    if path.is_non_standard() {
        return Vec::new();
    }

    match path.kind {
        PathKind::Arrow => verify_arrow(path, solution, clues),
        PathKind::Thermo => verify_thermo(path, solution),
        PathKind::Between | PathKind::Lockout => verify_between(path, solution),
        PathKind::Renban => verify_renban(path, solution),
        PathKind::Whisper => verify_whisper(path, solution, 5),
        PathKind::DutchWhisper => verify_whisper(path, solution, 4),
        PathKind::Palindrome => verify_palindrome(path, solution),
        PathKind::AntiFactor => verify_anti_factor(path, solution),
        PathKind::EqualSum => verify_equal_sum(path, solution, clues),
        PathKind::ProductSum => verify_product_sum(path, solution),
        PathKind::Entropic => verify_entropic(path, solution),
        PathKind::Odd => verify_parity_cells(path, solution, 1),
        PathKind::Even => verify_parity_cells(path, solution, 0),
        PathKind::Parity => verify_alternating_parity(path, solution),
        PathKind::Pill | PathKind::Custom => Vec::new(),
    }
}

fn verify_arrow(path: &Path, solution: &CellValues, clues: &Clues) -> Vec<Position> {
    let Some(&bulb) = path.positions.first() else {
        return Vec::new();
    };

    let pill = clues
        .paths
        .iter()
        .find(|p| p.kind == PathKind::Pill && p.contains(bulb));

    let target = if let Some(pill) = pill {
        pill_value(pill, solution)
    } else {
        solution[bulb].value
    };
    let Some(target) = target else {
        return Vec::new();
    };

    let mut total = 0;
    for &position in &path.positions[1..] {
        let Some(value) = solution[position].value else {
            return Vec::new();
        };
        total += value;
    }

    if total == target {
        Vec::new()
    } else if let Some(pill) = pill {
        pill.positions
            .iter()
            .chain(&path.positions[1..])
            .copied()
            .collect()
    } else {
        path.positions.clone()
    }
}

/// Reads a pill as one number: the digits of its cells concatenated in
/// sorted position order.
fn pill_value(pill: &Path, solution: &CellValues) -> Option<i32> {
    let mut positions = pill.positions.clone();
    positions.sort_unstable();

    let mut text = String::new();
    for position in positions {
        let digits = solution[position].digits.as_ref()?;
        for digit in digits {
            text.push(digit.symbol());
        }
    }
    text.parse().ok()
}

fn verify_thermo(path: &Path, solution: &CellValues) -> Vec<Position> {
    let mut prev: Option<Digit> = None;
    for &position in &path.positions {
        if let Some(digits) = &solution[position].digits {
            if prev.is_some_and(|prev| digits.iter().any(|d| d.value() <= prev.value())) {
                return path.positions.clone();
            }
            prev = digits.last().copied();
        }
    }
    Vec::new()
}

fn verify_between(path: &Path, solution: &CellValues) -> Vec<Position> {
    if path.positions.len() < 2 {
        return Vec::new();
    }
    let (Some(&first), Some(&last)) = (path.positions.first(), path.positions.last()) else {
        return Vec::new();
    };
    let (Some(a), Some(b)) = (solution[first].value, solution[last].value) else {
        return Vec::new();
    };
    let (min, max) = if a < b { (a, b) } else { (b, a) };

    let lockout = path.kind == PathKind::Lockout;
    if lockout && max - min < 4 {
        return path.positions.clone();
    }

    let interior = &path.positions[1..path.positions.len() - 1];
    for &position in interior {
        let Some(digits) = &solution[position].digits else {
            continue;
        };
        let ok = digits.iter().all(|d| {
            let v = i32::from(d.value());
            if lockout {
                v < min || v > max
            } else {
                v > min && v < max
            }
        });
        if !ok {
            return path.positions.clone();
        }
    }
    Vec::new()
}

fn verify_renban(path: &Path, solution: &CellValues) -> Vec<Position> {
    if path.positions.is_empty() {
        return Vec::new();
    }

    let mut min = i32::MAX;
    let mut max = i32::MIN;
    let mut count = 0i32;
    for &position in &path.positions {
        let Some(digits) = &solution[position].digits else {
            return Vec::new();
        };
        min = min.min(digits.first().map_or(0, |d| i32::from(d.value())));
        max = max.max(digits.last().map_or(0, |d| i32::from(d.value())));
        count += i32::try_from(digits.len()).unwrap_or(i32::MAX);
    }

    if max - min < count {
        Vec::new()
    } else {
        path.positions.clone()
    }
}

fn verify_whisper(path: &Path, solution: &CellValues, diff: u8) -> Vec<Position> {
    let mut prev: Option<&vardoku_core::DigitList> = None;
    for &position in &path.positions {
        if let Some(digits) = solution[position].digits.as_ref() {
            if prev.is_some_and(|prev| {
                digits
                    .iter()
                    .any(|d| prev.iter().any(|e| d.is_within(*e, diff)))
            }) {
                return path.positions.clone();
            }
            prev = Some(digits);
        } else {
            prev = None;
        }
    }
    Vec::new()
}

fn verify_palindrome(path: &Path, solution: &CellValues) -> Vec<Position> {
    let mut unmirrored = Vec::new();
    let len = path.positions.len();
    for n in 0..len / 2 {
        let a = path.positions[n];
        let b = path.positions[len - n - 1];
        if let (Some(x), Some(y)) = (solution[a].value, solution[b].value)
            && x != y
        {
            unmirrored.push(a);
            unmirrored.push(b);
        }
    }
    unmirrored
}

fn verify_anti_factor(path: &Path, solution: &CellValues) -> Vec<Position> {
    let Ok(factor) = i32::try_from(path.positions.len()) else {
        return Vec::new();
    };
    if factor == 0 {
        return Vec::new();
    }

    let mut total = 0;
    let mut count = 0;
    let mut invalid = Vec::new();
    for &position in &path.positions {
        let cell = &solution[position];
        let Some(digits) = &cell.digits else {
            continue;
        };
        if let Some(value) = cell.value {
            total += value;
            count += 1;
        }
        let offending = digits.iter().any(|d| {
            let n = i32::from(d.value());
            n != 1 && (n % factor == 0 || (n != 0 && factor % n == 0))
        });
        if offending {
            invalid.push(position);
        }
    }

    if count == path.positions.len() && total % factor != 0 {
        return path.positions.clone();
    }
    invalid
}

fn verify_equal_sum(path: &Path, solution: &CellValues, clues: &Clues) -> Vec<Position> {
    let region_index = |position: Position| {
        clues
            .regions
            .iter()
            .position(|r| r.kind == RegionKind::Normal && r.contains(position))
    };

    let mut target: Option<i32> = None;
    let mut prev_region: Option<Option<usize>> = None;
    let mut total = 0;
    let mut skip = false;
    let mut mismatch = false;

    for &position in &path.positions {
        let region = region_index(position);
        if prev_region != Some(region) {
            if prev_region.is_some() {
                if !skip {
                    match target {
                        None => target = Some(total),
                        Some(t) => {
                            if total != t {
                                mismatch = true;
                                break;
                            }
                        }
                    }
                }
                total = 0;
                skip = false;
            }
            prev_region = Some(region);
        } else if skip {
            continue;
        }
        match solution[position].value {
            None => skip = true,
            Some(value) => total += value,
        }
    }

    let valid = !mismatch && target.is_none_or(|t| !skip && total == t);
    if valid {
        Vec::new()
    } else {
        path.positions.clone()
    }
}

fn verify_product_sum(path: &Path, solution: &CellValues) -> Vec<Position> {
    if path.positions.len() < 2 {
        return Vec::new();
    }
    let (Some(&first), Some(&last)) = (path.positions.first(), path.positions.last()) else {
        return Vec::new();
    };
    let (Some(a), Some(b)) = (solution[first].value, solution[last].value) else {
        return Vec::new();
    };

    let mut total = 0;
    for &position in &path.positions[1..path.positions.len() - 1] {
        let Some(value) = solution[position].value else {
            return Vec::new();
        };
        total += value;
    }

    if total == a * b {
        Vec::new()
    } else {
        path.positions.clone()
    }
}

/// Entropy band of a digit: 1-3 are low, 4-6 middle, 7-9 high.
fn entropy_band(digit: Digit) -> u8 {
    digit.value().div_ceil(3)
}

fn verify_entropic(path: &Path, solution: &CellValues) -> Vec<Position> {
    let mut invalid = Vec::new();
    let mut last_invalid: isize = -1;

    for i in 2..path.positions.len() {
        let window = [
            path.positions[i - 2],
            path.positions[i - 1],
            path.positions[i],
        ];
        let mut bands = Vec::new();
        let mut complete = true;
        for &position in &window {
            match &solution[position].digits {
                Some(digits) => bands.extend(digits.iter().map(|&d| entropy_band(d))),
                None => {
                    complete = false;
                    break;
                }
            }
        }
        if complete && !(bands.contains(&1) && bands.contains(&2) && bands.contains(&3)) {
            let i = isize::try_from(i).unwrap_or(isize::MAX);
            if i - 2 > last_invalid {
                invalid.push(window[0]);
            }
            if i - 1 > last_invalid {
                invalid.push(window[1]);
            }
            invalid.push(window[2]);
            last_invalid = i;
        }
    }
    invalid
}

fn verify_parity_cells(path: &Path, solution: &CellValues, parity: u8) -> Vec<Position> {
    let mut invalid = Vec::new();
    for &position in &path.positions {
        if let Some(digits) = &solution[position].digits
            && digits.iter().any(|d| d.value() % 2 != parity)
        {
            invalid.push(position);
        }
    }
    invalid
}

fn verify_alternating_parity(path: &Path, solution: &CellValues) -> Vec<Position> {
    let mut invalid = Vec::new();
    let mut last_invalid: isize = -1;

    for i in 1..path.positions.len() {
        let a = path.positions[i - 1];
        let b = path.positions[i];
        let (Some(digits1), Some(digits2)) = (&solution[a].digits, &solution[b].digits) else {
            continue;
        };
        let clash = digits1
            .iter()
            .any(|d| digits2.iter().any(|e| d.value() % 2 == e.value() % 2));
        if clash {
            let i = isize::try_from(i).unwrap_or(isize::MAX);
            if i - 1 > last_invalid {
                invalid.push(a);
            }
            invalid.push(b);
            last_invalid = i;
        }
    }
    invalid
}
