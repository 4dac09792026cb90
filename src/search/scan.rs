//! Scalar window comparison and anchor-row scanning.

use crate::grid::{Cell, OccupancyGrid};
use crate::search::Detection;
use crate::template::{Template, TemplateLibrary, TEMPLATE_SIZE};
use std::ops::RangeInclusive;

/// Tests whether `template` matches the window anchored at `(row, col)`
/// cell for cell.
///
/// Window cells outside the grid count as background, so they only match
/// background template cells. The test stops at the first mismatch. A
/// `Cell::Blocked` grid cell never matches.
pub fn matches_at(grid: &OccupancyGrid, template: &Template, row: usize, col: usize) -> bool {
    for ty in 0..TEMPLATE_SIZE {
        let grid_row = row.checked_add(ty).and_then(|r| grid.row(r));
        for (tx, &want) in template.row(ty).iter().enumerate() {
            let have = grid_row.and_then(|cells| col.checked_add(tx).and_then(|c| cells.get(c)));
            match have {
                Some(&cell) if cell == Cell::from(want) => {}
                Some(_) => return false,
                None if want => return false,
                None => {}
            }
        }
    }
    true
}

/// Scans all anchors in one row, appending matches in template order.
pub(crate) fn scan_anchor_row(
    grid: &OccupancyGrid,
    library: &TemplateLibrary,
    row: usize,
    max_col: usize,
    out: &mut Vec<Detection>,
) {
    for col in 0..=max_col {
        for (template_index, template) in library.iter().enumerate() {
            if matches_at(grid, template, row, col) {
                out.push(Detection {
                    template_index,
                    row,
                    col,
                });
            }
        }
    }
}

/// Scans a range of anchor rows sequentially.
pub(crate) fn scan_rows(
    grid: &OccupancyGrid,
    library: &TemplateLibrary,
    rows: RangeInclusive<usize>,
    max_col: usize,
) -> Vec<Detection> {
    let mut out = Vec::new();
    for row in rows {
        scan_anchor_row(grid, library, row, max_col, &mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::matches_at;
    use crate::grid::OccupancyGrid;
    use crate::template::{Template, TEMPLATE_SIZE};

    fn checker() -> Template {
        Template::from_fn(|row, col| (row + col) % 2 == 0)
    }

    #[test]
    fn exact_window_matches() {
        let tpl = checker();
        let mut grid = OccupancyGrid::new(40, 40).unwrap();
        grid.stamp(&tpl, 3, 5);
        assert!(matches_at(&grid, &tpl, 3, 5));
        assert!(!matches_at(&grid, &tpl, 3, 6));
    }

    #[test]
    fn out_of_bounds_cells_act_as_background() {
        let blank = Template::from_fn(|_, _| false);
        let grid = OccupancyGrid::new(TEMPLATE_SIZE, TEMPLATE_SIZE).unwrap();
        // Window hangs off the bottom-right corner; every cell is background.
        assert!(matches_at(&grid, &blank, 10, 10));

        let corner = Template::from_fn(|row, col| row == TEMPLATE_SIZE - 1 && col == 0);
        assert!(!matches_at(&grid, &corner, 1, 0));
    }

    #[test]
    fn single_flipped_cell_breaks_match() {
        let tpl = checker();
        let mut grid = OccupancyGrid::new(32, 32).unwrap();
        grid.stamp(&tpl, 0, 0);
        grid.set(31, 31, false).unwrap();
        assert!(!matches_at(&grid, &tpl, 0, 0));
    }
}
