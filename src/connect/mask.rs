//! Scoped obstacle marking.

use crate::grid::{Cell, OccupancyGrid};
use crate::template::TEMPLATE_SIZE;

/// Marks component footprints as `Cell::Blocked` for the lifetime of the
/// guard.
///
/// Every overwritten cell's prior value is recorded and written back when the
/// guard drops, so the grid is restored on every exit path.
pub struct ObstacleMask<'g> {
    grid: &'g mut OccupancyGrid,
    saved: Vec<(usize, Cell)>,
}

impl<'g> ObstacleMask<'g> {
    /// Starts a masking scope over `grid`.
    pub fn new(grid: &'g mut OccupancyGrid) -> Self {
        Self {
            grid,
            saved: Vec::new(),
        }
    }

    /// Blocks the 32x32 footprint anchored at `(row, col)`, clipped to the
    /// grid.
    pub fn block_footprint(&mut self, row: usize, col: usize) {
        let width = self.grid.width();
        let row_end = row.saturating_add(TEMPLATE_SIZE).min(self.grid.height());
        let col_end = col.saturating_add(TEMPLATE_SIZE).min(width);
        let cells = self.grid.cells_mut();
        for r in row..row_end {
            for c in col..col_end {
                let idx = r * width + c;
                // Already-blocked cells keep their first recorded value.
                if cells[idx] != Cell::Blocked {
                    self.saved.push((idx, cells[idx]));
                    cells[idx] = Cell::Blocked;
                }
            }
        }
    }

    /// Returns the number of cells currently blocked by this guard.
    pub fn blocked_cells(&self) -> usize {
        self.saved.len()
    }

    /// Returns the masked grid.
    pub fn grid(&self) -> &OccupancyGrid {
        &*self.grid
    }
}

impl Drop for ObstacleMask<'_> {
    fn drop(&mut self) {
        let cells = self.grid.cells_mut();
        for (idx, cell) in self.saved.drain(..) {
            cells[idx] = cell;
        }
    }
}
