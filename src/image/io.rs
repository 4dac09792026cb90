//! Convenience helpers for loading images via the `image` crate.
//!
//! Available when the `image-io` feature is enabled.

use crate::grid::{binarize, OccupancyGrid};
use crate::image::OwnedRgbImage;
use crate::util::{PcbError, PcbResult};
use std::path::Path;

/// Creates an owned RGB image from an `image` crate RGB buffer.
pub fn owned_from_rgb_image(img: &image::RgbImage) -> PcbResult<OwnedRgbImage> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    let pixels = img
        .as_raw()
        .chunks_exact(3)
        .map(|px| [px[0], px[1], px[2]])
        .collect();
    OwnedRgbImage::new(pixels, width, height)
}

/// Decodes an image file (BMP or PNG) to 8-bit RGB.
pub fn load_rgb_image<P: AsRef<Path>>(path: P) -> PcbResult<OwnedRgbImage> {
    let img = image::open(path).map_err(|err| PcbError::UnreadableImage {
        reason: err.to_string(),
    })?;
    owned_from_rgb_image(&img.to_rgb8())
}

/// Decodes an image file and binarizes it into an occupancy grid.
pub fn load_occupancy_grid<P: AsRef<Path>>(path: P) -> PcbResult<OccupancyGrid> {
    let img = load_rgb_image(path)?;
    binarize(img.view())
}
