//! Borrowed pixel views and owned RGB buffers.
//!
//! `ImageView` is a borrowed 2D view into a 1D buffer with an explicit stride.
//! The stride counts elements between the starts of consecutive rows, so a
//! stride larger than the width represents padded rows. Color images are
//! viewed as `ImageView<'_, [u8; 3]>` with one `[r, g, b]` element per pixel.

use crate::util::{PcbError, PcbResult};

#[cfg(feature = "image-io")]
pub mod io;

/// Borrowed 2D image view with an explicit stride.
#[derive(Copy, Clone)]
pub struct ImageView<'a, T> {
    data: &'a [T],
    width: usize,
    height: usize,
    stride: usize,
}

impl<'a, T> ImageView<'a, T> {
    /// Creates a contiguous view with `stride == width`.
    pub fn from_slice(data: &'a [T], width: usize, height: usize) -> PcbResult<Self> {
        Self::new(data, width, height, width)
    }

    /// Creates a view with an explicit stride.
    pub fn new(data: &'a [T], width: usize, height: usize, stride: usize) -> PcbResult<Self> {
        if width == 0 || height == 0 || stride < width {
            return Err(PcbError::InvalidDimensions { width, height });
        }
        let needed = (height - 1)
            .checked_mul(stride)
            .and_then(|v| v.checked_add(width))
            .ok_or(PcbError::InvalidDimensions { width, height })?;
        if data.len() < needed {
            return Err(PcbError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            stride,
        })
    }

    /// Returns the image width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the image height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the stride in elements between row starts.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Returns the element at `(row, col)` if it is within bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&'a T> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.data.get(row * self.stride + col)
    }

    /// Returns row `row` as a slice of length `width`.
    pub fn row(&self, row: usize) -> Option<&'a [T]> {
        if row >= self.height {
            return None;
        }
        let start = row * self.stride;
        self.data.get(start..start + self.width)
    }
}

/// Owned, tightly packed RGB image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OwnedRgbImage {
    pixels: Vec<[u8; 3]>,
    width: usize,
    height: usize,
}

impl OwnedRgbImage {
    /// Wraps a row-major pixel buffer of exactly `width * height` elements.
    pub fn new(pixels: Vec<[u8; 3]>, width: usize, height: usize) -> PcbResult<Self> {
        if width == 0 || height == 0 {
            return Err(PcbError::InvalidDimensions { width, height });
        }
        let needed = width
            .checked_mul(height)
            .ok_or(PcbError::InvalidDimensions { width, height })?;
        if pixels.len() < needed {
            return Err(PcbError::BufferTooSmall {
                needed,
                got: pixels.len(),
            });
        }
        if pixels.len() > needed {
            return Err(PcbError::InvalidDimensions { width, height });
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Returns the image width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the image height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the packed pixel buffer.
    pub fn pixels(&self) -> &[[u8; 3]] {
        &self.pixels
    }

    /// Returns a borrowed view of the image.
    pub fn view(&self) -> ImageView<'_, [u8; 3]> {
        ImageView {
            data: &self.pixels,
            width: self.width,
            height: self.height,
            stride: self.width,
        }
    }
}
