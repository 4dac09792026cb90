//! Occupancy grid storage.
//!
//! The grid is a single row-major buffer of `Cell`s addressed as
//! `row * width + col`. Cells hold foreground or background after
//! binarization; `Cell::Blocked` only appears transiently while the
//! connectivity analyzer masks obstacle footprints.

mod binarize;

pub use binarize::{binarize, FOREGROUND_THRESHOLD};

use crate::template::{Template, TEMPLATE_SIZE};
use crate::util::{PcbError, PcbResult};

/// Value stored in one grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Cell {
    Background = 0,
    Foreground = 1,
    /// Impassable obstacle marker used during a single connectivity probe.
    Blocked = 2,
}

impl Cell {
    /// Returns true for `Cell::Foreground`.
    #[inline]
    pub fn is_foreground(self) -> bool {
        self == Cell::Foreground
    }
}

impl From<bool> for Cell {
    #[inline]
    fn from(value: bool) -> Self {
        if value {
            Cell::Foreground
        } else {
            Cell::Background
        }
    }
}

/// Two-valued raster derived from image intensity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OccupancyGrid {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

impl OccupancyGrid {
    /// Creates an all-background grid.
    pub fn new(width: usize, height: usize) -> PcbResult<Self> {
        let len = checked_area(width, height)?;
        Ok(Self {
            cells: vec![Cell::Background; len],
            width,
            height,
        })
    }

    /// Creates a grid by evaluating `f(row, col)` for every cell.
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> PcbResult<Self>
    where
        F: FnMut(usize, usize) -> bool,
    {
        let len = checked_area(width, height)?;
        let mut cells = Vec::with_capacity(len);
        for row in 0..height {
            for col in 0..width {
                cells.push(Cell::from(f(row, col)));
            }
        }
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Wraps a row-major boolean buffer of exactly `width * height` values.
    pub fn from_bools(values: &[bool], width: usize, height: usize) -> PcbResult<Self> {
        let len = checked_area(width, height)?;
        if values.len() != len {
            return Err(PcbError::BufferTooSmall {
                needed: len,
                got: values.len(),
            });
        }
        Ok(Self {
            cells: values.iter().copied().map(Cell::from).collect(),
            width,
            height,
        })
    }

    /// Returns the grid width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the grid height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the whole row-major buffer.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns the cell at `(row, col)` if it is within bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(self.cells[row * self.width + col])
    }

    /// Returns true if `(row, col)` is in bounds and foreground.
    #[inline]
    pub fn is_foreground(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(Cell::is_foreground)
    }

    /// Returns row `row` as a slice of length `width`.
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= self.height {
            return None;
        }
        let start = row * self.width;
        Some(&self.cells[start..start + self.width])
    }

    /// Sets a single cell to foreground or background.
    pub fn set(&mut self, row: usize, col: usize, value: bool) -> PcbResult<()> {
        let idx = self.index_of(row, col)?;
        self.cells[idx] = Cell::from(value);
        Ok(())
    }

    /// Fills a rectangle, clipped to the grid.
    pub fn fill_rect(&mut self, row: usize, col: usize, height: usize, width: usize, value: bool) {
        let row_end = row.saturating_add(height).min(self.height);
        let col_end = col.saturating_add(width).min(self.width);
        if col >= col_end {
            return;
        }
        for r in row..row_end {
            let base = r * self.width;
            for cell in &mut self.cells[base + col..base + col_end] {
                *cell = Cell::from(value);
            }
        }
    }

    /// Copies a template's cells onto the grid with its top-left at
    /// `(row, col)`, clipped to the grid.
    pub fn stamp(&mut self, template: &Template, row: usize, col: usize) {
        for ty in 0..TEMPLATE_SIZE {
            let r = row.saturating_add(ty);
            if r >= self.height {
                break;
            }
            for tx in 0..TEMPLATE_SIZE {
                let c = col.saturating_add(tx);
                if c >= self.width {
                    break;
                }
                self.cells[r * self.width + c] = Cell::from(template.get(ty, tx));
            }
        }
    }

    pub(crate) fn index_of(&self, row: usize, col: usize) -> PcbResult<usize> {
        if row >= self.height {
            return Err(PcbError::IndexOutOfRange {
                index: row,
                len: self.height,
                context: "row",
            });
        }
        if col >= self.width {
            return Err(PcbError::IndexOutOfRange {
                index: col,
                len: self.width,
                context: "column",
            });
        }
        Ok(row * self.width + col)
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }
}

fn checked_area(width: usize, height: usize) -> PcbResult<usize> {
    if width == 0 || height == 0 {
        return Err(PcbError::InvalidDimensions { width, height });
    }
    width
        .checked_mul(height)
        .ok_or(PcbError::InvalidDimensions { width, height })
}
