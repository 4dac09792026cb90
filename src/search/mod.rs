//! Exhaustive exact-match template search.
//!
//! Every anchor where the full 32x32 window fits inside the grid is tested
//! against every template in the library. Results are ordered row-major over
//! anchors and by template index within an anchor. Overlapping detections are
//! all reported.

#[cfg(feature = "rayon")]
pub(crate) mod par;
pub(crate) mod scan;

use crate::grid::OccupancyGrid;
use crate::template::{TemplateLibrary, TEMPLATE_SIZE};
use crate::trace::{stage_event, stage_span};
use std::fmt;

/// A template index plus the anchor at which it matched exactly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Detection {
    /// Index of the matching template within its library.
    pub template_index: usize,
    /// Anchor row (top edge of the window).
    pub row: usize,
    /// Anchor column (left edge of the window).
    pub col: usize,
}

impl fmt::Display for Detection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "type: {}, row: {}, column: {}",
            self.template_index, self.row, self.col
        )
    }
}

/// Configuration for a matching run.
#[derive(Clone, Copy, Debug, Default)]
pub struct MatchConfig {
    /// Scan anchor rows on the rayon thread pool. Ignored without the
    /// `rayon` feature. Output order is unaffected.
    pub parallel: bool,
}

/// Matcher bound to one template library.
pub struct Matcher<'a> {
    library: &'a TemplateLibrary,
    cfg: MatchConfig,
}

impl<'a> Matcher<'a> {
    /// Creates a matcher with the default configuration.
    pub fn new(library: &'a TemplateLibrary) -> Self {
        Self {
            library,
            cfg: MatchConfig::default(),
        }
    }

    /// Replaces the matcher configuration.
    pub fn with_config(mut self, cfg: MatchConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &MatchConfig {
        &self.cfg
    }

    /// Returns the library this matcher searches with.
    pub fn library(&self) -> &'a TemplateLibrary {
        self.library
    }

    /// Finds every exact template match in `grid`.
    pub fn match_grid(&self, grid: &OccupancyGrid) -> Vec<Detection> {
        let (Some(max_row), Some(max_col)) = (
            grid.height().checked_sub(TEMPLATE_SIZE),
            grid.width().checked_sub(TEMPLATE_SIZE),
        ) else {
            return Vec::new();
        };

        let _span = stage_span!(
            "match_grid",
            anchors = (max_row + 1) * (max_col + 1),
            templates = self.library.len()
        )
        .entered();

        let detections = self.scan(grid, max_row, max_col);

        stage_event!("matches_found", detections = detections.len());
        detections
    }

    #[cfg(feature = "rayon")]
    fn scan(&self, grid: &OccupancyGrid, max_row: usize, max_col: usize) -> Vec<Detection> {
        if self.cfg.parallel {
            return par::scan_rows_par(grid, self.library, max_row, max_col);
        }
        scan::scan_rows(grid, self.library, 0..=max_row, max_col)
    }

    #[cfg(not(feature = "rayon"))]
    fn scan(&self, grid: &OccupancyGrid, max_row: usize, max_col: usize) -> Vec<Detection> {
        scan::scan_rows(grid, self.library, 0..=max_row, max_col)
    }
}

/// Finds every exact template match using the default configuration.
pub fn find_components(grid: &OccupancyGrid, library: &TemplateLibrary) -> Vec<Detection> {
    Matcher::new(library).match_grid(grid)
}
