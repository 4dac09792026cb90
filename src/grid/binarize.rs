//! RGB to occupancy conversion.

use crate::grid::{Cell, OccupancyGrid};
use crate::image::ImageView;
use crate::trace::{stage_event, stage_span};
use crate::util::{PcbError, PcbResult};

/// Mean channel intensity at or above which a pixel is foreground.
pub const FOREGROUND_THRESHOLD: u16 = 128;

/// Converts an RGB view into an occupancy grid.
///
/// Each pixel's unweighted channel mean (integer division by 3) is compared
/// against [`FOREGROUND_THRESHOLD`]. The grid takes the view's dimensions.
pub fn binarize(image: ImageView<'_, [u8; 3]>) -> PcbResult<OccupancyGrid> {
    let width = image.width();
    let height = image.height();
    let _span = stage_span!("binarize", width = width, height = height).entered();

    let mut grid = OccupancyGrid::new(width, height)?;
    let cells = grid.cells_mut();
    let mut foreground = 0usize;
    for row in 0..height {
        let pixels = image.row(row).ok_or(PcbError::IndexOutOfRange {
            index: row,
            len: height,
            context: "row",
        })?;
        let base = row * width;
        for (col, &px) in pixels.iter().enumerate() {
            let cell = Cell::from(is_foreground_pixel(px));
            foreground += usize::from(cell.is_foreground());
            cells[base + col] = cell;
        }
    }

    stage_event!("binarize", foreground = foreground);
    Ok(grid)
}

#[inline]
fn is_foreground_pixel([r, g, b]: [u8; 3]) -> bool {
    let mean = (u16::from(r) + u16::from(g) + u16::from(b)) / 3;
    mean >= FOREGROUND_THRESHOLD
}
