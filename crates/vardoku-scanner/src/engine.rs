//! The scanning engine: a queue of open cells narrowed step by step.

use std::cmp::Ordering;

use log::{debug, trace};
use vardoku_core::{
    BorderClueKind, CellValues, Clues, DigitList, Grid, LogicFlag, Position, none_if_empty,
};
use vardoku_verify::seen_cells;

use crate::{
    settings::{HighlightMode, ScannerMode, ScannerSettings},
    tuples::{find_corner_sets, find_tuples},
};

/// A single-cell change produced by one scan step.
///
/// The engine never writes the grid itself; the caller applies updates so
/// each step stays one undoable action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellUpdate {
    /// The cell to change.
    pub position: Position,
    /// New typed digits, or `None` to clear them.
    pub digits: Option<DigitList>,
    /// New center marks, or `None` to clear them.
    pub centermarks: Option<DigitList>,
    /// New corner marks, or `None` to clear them.
    pub cornermarks: Option<DigitList>,
}

impl CellUpdate {
    /// Writes the update into the grid.
    ///
    /// # Panics
    ///
    /// Panics if the position lies off the board.
    pub fn apply(&self, cells: &mut CellValues) {
        let cell = &mut cells[self.position];
        cell.digits = self.digits.clone();
        cell.centermarks = self.centermarks.clone();
        cell.cornermarks = self.cornermarks.clone();
    }
}

/// Step-by-step candidate scanner.
///
/// The engine keeps a queue of open cells and a candidate list per cell,
/// seeded from center marks or the full digit alphabet. Each [`step`]
/// walks the queue until one cell's candidates can be narrowed, and
/// returns the resulting [`CellUpdate`] without touching the grid. Cells
/// narrowed to a single candidate are committed as typed digits and leave
/// the queue.
///
/// The engine borrows [`Clues`] and [`CellValues`] per call and holds no
/// references between steps, so the caller stays free to mutate the grid
/// (by applying updates or otherwise) in between.
///
/// [`step`]: Self::step
#[derive(Debug, Clone)]
pub struct ScannerEngine {
    /// Behavior toggles; may be changed freely between steps.
    pub settings: ScannerSettings,
    candidates: Grid<Option<DigitList>>,
    queue: Vec<Position>,
    highlighted: Vec<Position>,
    scanning: bool,
}

impl ScannerEngine {
    /// Creates an engine for a board of the given clues' dimensions.
    #[must_use]
    pub fn new(clues: &Clues, settings: ScannerSettings) -> Self {
        Self {
            settings,
            candidates: Grid::new(&clues.dimensions),
            queue: Vec::new(),
            highlighted: Vec::new(),
            scanning: false,
        }
    }

    /// Returns `true` while an automatic scan is running.
    #[must_use]
    pub fn is_scanning(&self) -> bool {
        self.scanning
    }

    /// The cells that motivated the most recent elimination.
    #[must_use]
    pub fn highlighted(&self) -> &[Position] {
        &self.highlighted
    }

    /// The open cells still being scanned, in scan order.
    #[must_use]
    pub fn queue(&self) -> &[Position] {
        &self.queue
    }

    /// The current candidates for a cell, if it is being scanned.
    #[must_use]
    pub fn candidates(&self, position: Position) -> Option<&DigitList> {
        self.candidates.get(position).and_then(Option::as_ref)
    }

    /// Rebuilds the queue and candidate lists from the current grid.
    ///
    /// Every playable cell without a given or typed digit enters the queue;
    /// its candidates start from its center marks when present, otherwise
    /// from the full valid-digit alphabet. With a seed the queue is sorted
    /// so cells seen from the seed come first.
    ///
    /// # Panics
    ///
    /// Panics if the grid is smaller than the clues' dimensions.
    pub fn init_scan(&mut self, clues: &Clues, cells: &CellValues, seed: Option<Position>) {
        let all_digits: DigitList = clues
            .logic
            .valid_digits(&clues.dimensions)
            .into_iter()
            .collect();

        self.candidates = Grid::new(&clues.dimensions);
        self.queue.clear();
        self.highlighted.clear();

        for position in clues.dimensions.playable_positions() {
            let cell = &cells[position];
            if clues.given(position).is_none() && cell.digits.is_none() {
                self.queue.push(position);
                self.candidates[position] =
                    Some(cell.centermarks.clone().unwrap_or_else(|| all_digits.clone()));
            }
        }
        debug!("scan initialized with {n} open cells", n = self.queue.len());

        if let Some(seed) = seed {
            self.sort_queue(clues, seed);
        }
    }

    /// Reorders the queue so cells seen from `cell` are scanned first, in
    /// seen order. The sort is stable, so unaffected cells keep their
    /// relative order.
    pub fn sort_queue(&mut self, clues: &Clues, cell: Position) {
        let relations = self.settings.seen_relations();
        let seen = seen_cells(clues, cell, &relations);
        self.queue.sort_by(|&a, &b| {
            let a = seen.iter().position(|s| s.position == a);
            let b = seen.iter().position(|s| s.position == b);
            match (a, b) {
                (Some(a), Some(b)) => a.cmp(&b),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }
        });
    }

    /// Performs one scan step.
    ///
    /// Starts a fresh scan from the current grid unless one is already
    /// running, then walks the queue until a cell changes: either its
    /// candidates collapse to at most one digit (the cell is committed and
    /// dequeued) or its pencil marks can be pruned. Returns the change, or
    /// `None` once no cell in the queue can be narrowed.
    ///
    /// # Panics
    ///
    /// Panics if the grid is smaller than the clues' dimensions.
    pub fn step(
        &mut self,
        clues: &Clues,
        cells: &CellValues,
        seed: Option<Position>,
    ) -> Option<CellUpdate> {
        if !self.scanning {
            self.init_scan(clues, cells, seed);
        }
        self.run_queue(clues, cells)
    }

    /// Begins an automatic scan, returning its first update.
    ///
    /// Returns `None` and stays idle when no cell can be narrowed. After a
    /// successful start the caller applies the update and keeps the scan
    /// going with [`tick`](Self::tick), pausing
    /// [`ScannerSpeed::delay`](crate::ScannerSpeed::delay) between steps.
    pub fn start_scan(
        &mut self,
        clues: &Clues,
        cells: &CellValues,
        seed: Option<Position>,
    ) -> Option<CellUpdate> {
        if self.scanning {
            return None;
        }
        let update = self.step(clues, cells, seed);
        self.scanning = update.is_some();
        update
    }

    /// Advances a running scan by one step.
    ///
    /// Returns `None` and stops the scan once the queue is exhausted
    /// without progress, or if the scan was stopped.
    pub fn tick(&mut self, clues: &Clues, cells: &CellValues) -> Option<CellUpdate> {
        if !self.scanning {
            return None;
        }
        let update = self.run_queue(clues, cells);
        if update.is_none() {
            debug!("scan exhausted");
            self.scanning = false;
        }
        update
    }

    /// Stops a running scan before its next tick.
    pub fn stop_scan(&mut self) {
        self.scanning = false;
    }

    fn run_queue(&mut self, clues: &Clues, cells: &CellValues) -> Option<CellUpdate> {
        let mut n = 0;
        while n < self.queue.len() {
            let cell = self.queue[n];
            if !self.update_candidate_values(clues, cells, cell) {
                n += 1;
                continue;
            }

            let state = &cells[cell];
            let candidates = self.candidates[cell].clone().unwrap_or_default();
            let mut update = CellUpdate {
                position: cell,
                digits: None,
                centermarks: state.centermarks.clone(),
                cornermarks: state.cornermarks.clone(),
            };
            let mut changed = false;

            if candidates.len() <= 1 {
                if let Some(digit) = candidates.first() {
                    debug!("placing {digit} in {cell}");
                }
                update.digits = none_if_empty(candidates);
                update.centermarks = None;
                update.cornermarks = None;
                changed = true;

                self.queue.remove(n);
                self.sort_queue(clues, cell);
            } else {
                if state.centermarks.is_some() {
                    update.centermarks = Some(candidates.clone());
                    changed = true;
                }
                if let Some(marks) = &state.cornermarks {
                    let kept: DigitList = marks
                        .iter()
                        .copied()
                        .filter(|d| candidates.contains(d))
                        .collect();
                    if kept.len() != marks.len() {
                        changed = true;
                    }
                    update.cornermarks = none_if_empty(kept);
                }
            }

            if changed {
                return Some(update);
            }
            n += 1;
        }
        None
    }

    /// Tries to narrow the candidates of one queued cell.
    ///
    /// Eliminations come in priority order: digits visible as givens or
    /// typed digits, digits locked by naked tuples of center marks, digits
    /// confined by corner-mark sets, and (in
    /// [`Extreme`](ScannerMode::Extreme) mode) digits breaking a negative
    /// constraint against a neighbor. Returns `false` when nothing could be
    /// eliminated; on success the eliminated digits' witnesses are stored
    /// as [`highlighted`](Self::highlighted).
    ///
    /// # Panics
    ///
    /// Panics if the grid is smaller than the clues' dimensions.
    pub fn update_candidate_values(
        &mut self,
        clues: &Clues,
        cells: &CellValues,
        cell: Position,
    ) -> bool {
        let Some(candidates) = self.candidates[cell].clone() else {
            return false;
        };
        if candidates.len() <= 1 {
            return true;
        }

        let relations = self.settings.seen_relations();
        let seen = seen_cells(clues, cell, &relations);
        let mut highlighted: Vec<Position> = Vec::new();

        let mut remaining: DigitList = candidates
            .iter()
            .copied()
            .filter(|&v| {
                let found = seen
                    .iter()
                    .find(|s| clues.given(s.position) == Some(v) || cells[s.position].has_digit(v));
                if let Some(found) = found {
                    highlighted.push(found.position);
                    false
                } else {
                    true
                }
            })
            .collect();

        if remaining.len() > 1 && self.settings.use_centre_marks {
            let tuples = find_tuples(clues, cells, cell, &relations, true);
            remaining = remaining
                .iter()
                .copied()
                .filter(|v| {
                    if let Some(tuple) = tuples.iter().find(|t| t.digits.contains(v)) {
                        highlighted.extend(tuple.cells.iter().copied());
                        false
                    } else {
                        true
                    }
                })
                .collect();
        }

        if remaining.len() > 1
            && !clues.logic.has_flag(LogicFlag::NonStandard)
            && self.settings.use_corner_marks
        {
            // A digit whose only corner mark in its region sits in this
            // cell must go here.
            let unique = find_corner_sets(clues, cells, cell, &relations, false)
                .into_iter()
                .find(|set| set.cells.len() == 1 && remaining.contains(&set.digit));
            if let Some(set) = unique {
                remaining = DigitList::from(&[set.digit][..]);
            } else {
                let sets = find_corner_sets(clues, cells, cell, &relations, true);
                remaining = remaining
                    .iter()
                    .copied()
                    .filter(|&v| {
                        if let Some(set) = sets.iter().find(|s| s.digit == v) {
                            highlighted.extend(set.cells.iter().copied());
                            false
                        } else {
                            true
                        }
                    })
                    .collect();
            }
        }

        if remaining.len() > 1 && self.settings.mode == ScannerMode::Extreme {
            apply_negative_constraints(
                &self.settings,
                clues,
                cells,
                cell,
                &mut remaining,
                &mut highlighted,
            );
        }

        if remaining.len() == candidates.len() {
            return false;
        }
        trace!(
            "candidates for {cell} narrowed from {from} to {to}",
            from = candidates.len(),
            to = remaining.len()
        );
        self.candidates[cell] = Some(remaining);
        self.highlighted = highlighted;
        true
    }

    /// Returns the cells to highlight for a selection, per the configured
    /// [`HighlightMode`].
    ///
    /// `Seen` highlights the cells seen by every selected cell; `Tuples`
    /// highlights the other members of naked tuples the selection takes
    /// part in.
    #[must_use]
    pub fn highlighted_for_selection(
        &self,
        clues: &Clues,
        cells: &CellValues,
        selected: &[Position],
    ) -> Vec<Position> {
        if selected.is_empty() {
            return Vec::new();
        }
        match self.settings.highlight_mode {
            HighlightMode::None => Vec::new(),
            HighlightMode::Seen => {
                let relations = self.settings.seen_relations();
                let mut highlight: Vec<Position> = Vec::new();
                for (i, &cell) in selected.iter().enumerate() {
                    let seen = seen_cells(clues, cell, &relations);
                    if i == 0 {
                        for entry in &seen {
                            if !highlight.contains(&entry.position) {
                                highlight.push(entry.position);
                            }
                        }
                    } else {
                        highlight.retain(|p| seen.iter().any(|s| s.position == *p));
                    }
                }
                highlight
            }
            HighlightMode::Tuples => {
                let relations = self.settings.seen_relations();
                let mut tuples = find_tuples(clues, cells, selected[0], &relations, false);
                if selected.len() > 1 {
                    tuples.retain(|t| selected.iter().all(|c| t.cells.contains(c)));
                }
                let mut highlight: Vec<Position> = Vec::new();
                for tuple in tuples {
                    for position in tuple.cells {
                        if !selected.contains(&position) && !highlight.contains(&position) {
                            highlight.push(position);
                        }
                    }
                }
                highlight
            }
        }
    }
}

fn has_border_clue(clues: &Clues, kind: BorderClueKind, a: Position, b: Position) -> bool {
    clues
        .borderclues
        .iter()
        .any(|clue| clue.kind == kind && clue.sits_between(a, b))
}

fn eliminate_conflicts(
    remaining: &mut DigitList,
    neighbors: &[Position],
    highlighted: &mut Vec<Position>,
    mut exempt: impl FnMut(Position) -> bool,
    mut digits_at: impl FnMut(Position) -> Option<DigitList>,
    conflicts: impl Fn(u8, u8) -> bool,
) {
    remaining.retain(|&v| {
        !neighbors.iter().any(|&n| {
            if exempt(n) {
                return false;
            }
            let hit = digits_at(n).is_some_and(|digits| {
                digits.iter().any(|d| conflicts(d.value(), v.value()))
            });
            if hit {
                highlighted.push(n);
            }
            hit
        })
    });
}

/// Prunes candidates that would violate an enabled negative constraint
/// against an orthogonal neighbor's given or typed digits. Pairs carrying
/// the matching explicit border clue are exempt.
fn apply_negative_constraints(
    settings: &ScannerSettings,
    clues: &Clues,
    cells: &CellValues,
    cell: Position,
    remaining: &mut DigitList,
    highlighted: &mut Vec<Position>,
) {
    let logic = &clues.logic;
    let neighbors = clues.dimensions.orthogonal_neighbors(cell);
    let digits_at = |n: Position| -> Option<DigitList> {
        clues
            .given(n)
            .map(|d| DigitList::from(&[d][..]))
            .or_else(|| cells[n].digits.clone())
    };

    let negative_white = logic.has_flag(LogicFlag::NegativeWhite) && settings.scan_negative_kropki;
    if (logic.has_flag(LogicFlag::Nonconsecutive) && settings.scan_non_consecutive)
        || negative_white
    {
        eliminate_conflicts(
            remaining,
            &neighbors,
            highlighted,
            |n| negative_white && has_border_clue(clues, BorderClueKind::KropkiWhite, cell, n),
            digits_at,
            |d, v| d.abs_diff(v) == 1,
        );
    }
    if logic.has_flag(LogicFlag::NegativeBlack) && settings.scan_negative_kropki {
        eliminate_conflicts(
            remaining,
            &neighbors,
            highlighted,
            |n| has_border_clue(clues, BorderClueKind::KropkiBlack, cell, n),
            digits_at,
            |d, v| d == 2 * v || v == 2 * d,
        );
    }
    if logic.has_flag(LogicFlag::NegativeX) && settings.scan_negative_xv {
        eliminate_conflicts(
            remaining,
            &neighbors,
            highlighted,
            |n| has_border_clue(clues, BorderClueKind::XvX, cell, n),
            digits_at,
            |d, v| d + v == 10,
        );
    }
    if logic.has_flag(LogicFlag::NegativeV) && settings.scan_negative_xv {
        eliminate_conflicts(
            remaining,
            &neighbors,
            highlighted,
            |n| has_border_clue(clues, BorderClueKind::XvV, cell, n),
            digits_at,
            |d, v| d + v == 5,
        );
    }
}

#[cfg(test)]
mod tests {
    use vardoku_core::{BorderClue, Digit, Dimensions, Logic};

    use crate::settings::ScannerSpeed;

    use super::*;

    fn digit(symbol: char) -> Digit {
        Digit::from_symbol(symbol).unwrap()
    }

    fn marks(symbols: &str) -> Option<DigitList> {
        Some(symbols.chars().map(digit).collect())
    }

    const SOLVED_ROWS: [&str; 6] = ["123456", "456123", "231564", "564231", "312645", "645312"];

    /// A 6x6 puzzle with every cell given except the main diagonal; each
    /// open cell is a naked single.
    fn diagonal_fixture() -> (Clues, CellValues) {
        let mut clues = Clues::new(Dimensions::new(6, 6));
        for (i, row) in SOLVED_ROWS.iter().enumerate() {
            for (j, symbol) in row.chars().enumerate() {
                if i != j {
                    let position =
                        Position::new(u8::try_from(i).unwrap(), u8::try_from(j).unwrap());
                    clues.givens[position] = Some(digit(symbol));
                }
            }
        }
        let cells = CellValues::new(&clues.dimensions);
        (clues, cells)
    }

    #[test]
    fn scan_fills_naked_singles_until_exhaustion() {
        let (clues, mut cells) = diagonal_fixture();
        let settings = ScannerSettings {
            speed: ScannerSpeed::Instant,
            ..ScannerSettings::default()
        };
        let mut engine = ScannerEngine::new(&clues, settings);

        let mut steps = 0;
        let mut update = engine.start_scan(&clues, &cells, None);
        assert!(engine.is_scanning());
        while let Some(change) = update {
            change.apply(&mut cells);
            steps += 1;
            update = engine.tick(&clues, &cells);
        }

        assert_eq!(steps, 6);
        assert!(!engine.is_scanning());
        for (i, row) in SOLVED_ROWS.iter().enumerate() {
            let i = u8::try_from(i).unwrap();
            let expected = digit(row.chars().nth(usize::from(i)).unwrap());
            assert!(cells[Position::new(i, i)].has_digit(expected));
        }
    }

    #[test]
    fn each_step_changes_exactly_one_cell() {
        let (clues, mut cells) = diagonal_fixture();
        let mut engine = ScannerEngine::new(&clues, ScannerSettings::default());

        let update = engine.step(&clues, &cells, None).unwrap();
        let before = cells.clone();
        update.apply(&mut cells);
        let changed: Vec<Position> = cells
            .positions()
            .filter(|&p| cells[p] != before[p])
            .collect();
        assert_eq!(changed, vec![update.position]);
    }

    #[test]
    fn eliminations_prune_pencil_marks_without_committing() {
        let clues = {
            let mut clues = Clues::new(Dimensions::new(9, 9));
            clues.givens[Position::new(0, 5)] = Some(digit('1'));
            clues
        };
        let mut cells = CellValues::new(&clues.dimensions);
        cells[Position::new(0, 0)].centermarks = marks("123");
        cells[Position::new(0, 0)].cornermarks = marks("13");

        // Corner-mark reasoning would commit the lone 3 straight away;
        // disable it to watch the marks get pruned instead.
        let settings = ScannerSettings {
            use_corner_marks: false,
            ..ScannerSettings::default()
        };
        let mut engine = ScannerEngine::new(&clues, settings);
        let update = engine.step(&clues, &cells, None).unwrap();

        assert_eq!(update.position, Position::new(0, 0));
        assert_eq!(update.digits, None);
        assert_eq!(update.centermarks, marks("23"));
        assert_eq!(update.cornermarks, marks("3"));
        assert!(engine.highlighted().contains(&Position::new(0, 5)));
    }

    #[test]
    fn seeded_queue_scans_seen_cells_first() {
        let clues = Clues::new(Dimensions::new(9, 9));
        let cells = CellValues::new(&clues.dimensions);
        let mut engine = ScannerEngine::new(&clues, ScannerSettings::default());

        engine.init_scan(&clues, &cells, Some(Position::new(0, 0)));
        assert_eq!(engine.queue().len(), 81);
        // Row mates first, then the column, then the rest of the box; the
        // seed itself is not seen by itself and leads the remainder.
        assert_eq!(engine.queue()[0], Position::new(0, 1));
        assert_eq!(engine.queue()[8], Position::new(1, 0));
        assert_eq!(engine.queue()[20], Position::new(0, 0));
    }

    #[test]
    fn naked_pair_collapses_the_third_cell() {
        let clues = Clues::new(Dimensions::new(9, 9));
        let mut cells = CellValues::new(&clues.dimensions);
        cells[Position::new(0, 0)].centermarks = marks("123");
        cells[Position::new(0, 3)].centermarks = marks("12");
        cells[Position::new(0, 7)].centermarks = marks("12");

        let mut engine = ScannerEngine::new(&clues, ScannerSettings::default());
        let update = engine.step(&clues, &cells, None).unwrap();
        assert_eq!(update.position, Position::new(0, 0));
        assert_eq!(update.digits, marks("3"));
        assert_eq!(update.centermarks, None);
    }

    #[test]
    fn lone_cornermark_in_a_region_commits_the_digit() {
        let clues = Clues::new(Dimensions::new(9, 9));
        let mut cells = CellValues::new(&clues.dimensions);
        cells[Position::new(0, 0)].cornermarks = marks("5");

        let mut engine = ScannerEngine::new(&clues, ScannerSettings::default());
        let update = engine.step(&clues, &cells, None).unwrap();
        assert_eq!(update.position, Position::new(0, 0));
        assert_eq!(update.digits, marks("5"));
        assert_eq!(update.cornermarks, None);
    }

    #[test]
    fn fully_seen_corner_set_eliminates_its_digit() {
        let clues = Clues::new(Dimensions::new(9, 9));
        let mut cells = CellValues::new(&clues.dimensions);
        cells[Position::new(0, 0)].cornermarks = marks("5");
        cells[Position::new(0, 1)].cornermarks = marks("5");

        let mut engine = ScannerEngine::new(&clues, ScannerSettings::default());
        engine.init_scan(&clues, &cells, None);
        assert!(engine.update_candidate_values(&clues, &cells, Position::new(0, 8)));
        let candidates = engine.candidates(Position::new(0, 8)).unwrap();
        assert_eq!(candidates.len(), 8);
        assert!(!candidates.contains(&digit('5')));
    }

    #[test]
    fn extreme_mode_applies_negative_constraints() {
        let clues = {
            let mut clues = Clues::new(Dimensions::new(9, 9));
            clues.logic = Logic::with_flags(vec![LogicFlag::Nonconsecutive]);
            clues.givens[Position::new(0, 1)] = Some(digit('5'));
            clues
        };
        let mut cells = CellValues::new(&clues.dimensions);
        cells[Position::new(0, 0)].centermarks = marks("467");

        let settings = ScannerSettings {
            mode: ScannerMode::Extreme,
            ..ScannerSettings::default()
        };
        let mut engine = ScannerEngine::new(&clues, settings);
        engine.init_scan(&clues, &cells, None);
        assert!(engine.update_candidate_values(&clues, &cells, Position::new(0, 0)));
        assert_eq!(engine.candidates(Position::new(0, 0)), marks("7").as_ref());
        assert!(engine.highlighted().contains(&Position::new(0, 1)));
    }

    #[test]
    fn explicit_kropki_clues_exempt_negative_pairs() {
        let clues = {
            let mut clues = Clues::new(Dimensions::new(9, 9));
            clues.logic = Logic::with_flags(vec![LogicFlag::NegativeWhite]);
            clues.givens[Position::new(0, 1)] = Some(digit('5'));
            clues.borderclues.push(BorderClue::new(
                BorderClueKind::KropkiWhite,
                vec![Position::new(0, 0), Position::new(0, 1)],
            ));
            clues
        };
        let mut cells = CellValues::new(&clues.dimensions);
        cells[Position::new(0, 0)].centermarks = marks("46");

        let settings = ScannerSettings {
            mode: ScannerMode::Extreme,
            ..ScannerSettings::default()
        };
        let mut engine = ScannerEngine::new(&clues, settings);
        engine.init_scan(&clues, &cells, None);
        assert!(!engine.update_candidate_values(&clues, &cells, Position::new(0, 0)));
    }

    #[test]
    fn seen_highlight_intersects_selections() {
        let clues = Clues::new(Dimensions::new(9, 9));
        let cells = CellValues::new(&clues.dimensions);
        let settings = ScannerSettings {
            highlight_mode: HighlightMode::Seen,
            ..ScannerSettings::default()
        };
        let engine = ScannerEngine::new(&clues, settings);

        let highlight = engine.highlighted_for_selection(
            &clues,
            &cells,
            &[Position::new(0, 0), Position::new(8, 8)],
        );
        assert_eq!(highlight.len(), 2);
        assert!(highlight.contains(&Position::new(0, 8)));
        assert!(highlight.contains(&Position::new(8, 0)));
    }

    #[test]
    fn tuple_highlight_points_at_the_other_members() {
        let clues = Clues::new(Dimensions::new(9, 9));
        let mut cells = CellValues::new(&clues.dimensions);
        cells[Position::new(0, 0)].centermarks = marks("12");
        cells[Position::new(0, 3)].centermarks = marks("12");

        let settings = ScannerSettings {
            highlight_mode: HighlightMode::Tuples,
            ..ScannerSettings::default()
        };
        let engine = ScannerEngine::new(&clues, settings);

        let highlight =
            engine.highlighted_for_selection(&clues, &cells, &[Position::new(0, 0)]);
        assert_eq!(highlight, vec![Position::new(0, 3)]);
    }

    #[test]
    fn no_highlight_without_a_mode_or_selection() {
        let clues = Clues::new(Dimensions::new(9, 9));
        let cells = CellValues::new(&clues.dimensions);
        let engine = ScannerEngine::new(&clues, ScannerSettings::default());
        assert_eq!(
            engine.highlighted_for_selection(&clues, &cells, &[Position::new(0, 0)]),
            vec![]
        );
    }
}
