//! Scanner configuration.

use std::time::Duration;

use vardoku_verify::SeenRelations;

/// What the engine highlights for the current selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HighlightMode {
    /// No highlighting.
    #[default]
    None,
    /// Cells seen by every selected cell.
    Seen,
    /// Cells eliminated by tuples the selected cells take part in.
    Tuples,
}

/// How aggressively the scanner reasons.
///
/// `Basic` sticks to rows, columns and regions. `Advanced` adds every
/// enabled variant relation to the seen-cells resolution. `Extreme` also
/// applies negative constraints to candidate elimination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScannerMode {
    /// Rows, columns and regions only.
    #[default]
    Basic,
    /// Variant relations included.
    Advanced,
    /// Variant relations plus negative constraints.
    Extreme,
}

/// Pacing between automatic scan steps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScannerSpeed {
    /// No delay.
    Instant,
    /// Half a second per step.
    Fast,
    /// One second per step.
    #[default]
    Slow,
}

impl ScannerSpeed {
    /// The pause a driver should insert between scan steps.
    #[must_use]
    pub fn delay(self) -> Duration {
        match self {
            Self::Instant => Duration::ZERO,
            Self::Fast => Duration::from_millis(500),
            Self::Slow => Duration::from_millis(1000),
        }
    }
}

/// Scanner behavior toggles.
///
/// The `scan_*` relation toggles only matter outside [`ScannerMode::Basic`];
/// the negative-constraint toggles only matter in [`ScannerMode::Extreme`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannerSettings {
    /// Selection highlighting behavior.
    pub highlight_mode: HighlightMode,
    /// Reasoning depth.
    pub mode: ScannerMode,
    /// Whether a scan should start automatically after a digit is entered.
    pub auto_scan: bool,
    /// Pacing between automatic steps.
    pub speed: ScannerSpeed,
    /// Use center pencil marks for tuple elimination.
    pub use_centre_marks: bool,
    /// Use corner pencil marks for set elimination.
    pub use_corner_marks: bool,
    /// Scan along the diagonals.
    pub scan_diagonals: bool,
    /// Scan knight moves.
    pub scan_anti_knight: bool,
    /// Scan king moves.
    pub scan_anti_king: bool,
    /// Scan disjoint sets.
    pub scan_disjoint_sets: bool,
    /// Scan cages with unique digits.
    pub scan_cages: bool,
    /// Scan paths with unique digits.
    pub scan_paths: bool,
    /// Scan extra regions with unique digits.
    pub scan_extra_regions: bool,
    /// Apply negative X/V constraints.
    pub scan_negative_xv: bool,
    /// Apply negative kropki constraints.
    pub scan_negative_kropki: bool,
    /// Apply the nonconsecutive constraint.
    pub scan_non_consecutive: bool,
}

impl Default for ScannerSettings {
    fn default() -> Self {
        Self {
            highlight_mode: HighlightMode::None,
            mode: ScannerMode::Basic,
            auto_scan: false,
            speed: ScannerSpeed::Slow,
            use_centre_marks: true,
            use_corner_marks: true,
            scan_diagonals: true,
            scan_anti_knight: true,
            scan_anti_king: true,
            scan_disjoint_sets: true,
            scan_cages: true,
            scan_paths: true,
            scan_extra_regions: true,
            scan_negative_xv: true,
            scan_negative_kropki: true,
            scan_non_consecutive: true,
        }
    }
}

impl ScannerSettings {
    /// The seen-cells relations the scanner resolves under these settings.
    #[must_use]
    pub fn seen_relations(&self) -> SeenRelations {
        if self.mode == ScannerMode::Basic {
            SeenRelations::STANDARD
        } else {
            SeenRelations {
                diagonals: self.scan_diagonals,
                anti_king: self.scan_anti_king,
                anti_knight: self.scan_anti_knight,
                disjoint_sets: self.scan_disjoint_sets,
                cages: self.scan_cages,
                paths: self.scan_paths,
                extra_regions: self.scan_extra_regions,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_mode_sticks_to_standard_relations() {
        let settings = ScannerSettings::default();
        assert_eq!(settings.seen_relations(), SeenRelations::STANDARD);
    }

    #[test]
    fn advanced_mode_honors_the_toggles() {
        let settings = ScannerSettings {
            mode: ScannerMode::Advanced,
            scan_diagonals: false,
            ..ScannerSettings::default()
        };
        let relations = settings.seen_relations();
        assert!(!relations.diagonals);
        assert!(relations.anti_knight);
    }

    #[test]
    fn speeds_map_to_delays() {
        assert_eq!(ScannerSpeed::Instant.delay(), Duration::ZERO);
        assert_eq!(ScannerSpeed::Fast.delay(), Duration::from_millis(500));
        assert_eq!(ScannerSpeed::Slow.delay(), Duration::from_millis(1000));
    }
}
