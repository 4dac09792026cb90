//! Row-parallel anchor scanning (feature-gated).
//!
//! Each anchor row is scanned independently on the rayon pool. Per-row
//! results are collected in row order, so the output equals the sequential
//! scan exactly.

use crate::grid::OccupancyGrid;
use crate::search::scan::scan_anchor_row;
use crate::search::Detection;
use crate::template::TemplateLibrary;
use rayon::prelude::*;

pub(crate) fn scan_rows_par(
    grid: &OccupancyGrid,
    library: &TemplateLibrary,
    max_row: usize,
    max_col: usize,
) -> Vec<Detection> {
    let rows: Vec<Vec<Detection>> = (0..=max_row)
        .into_par_iter()
        .map(|row| {
            let mut row_hits = Vec::new();
            scan_anchor_row(grid, library, row, max_col, &mut row_hits);
            row_hits
        })
        .collect();
    rows.into_iter().flatten().collect()
}
