//! Fixed-size binary templates and the template library codec.
//!
//! A template is a 32x32 boolean grid. On disk each template is packed into
//! 128 bytes, one bit per cell, most significant bit first, row-major.

mod library;

pub use library::TemplateLibrary;

use crate::util::{PcbError, PcbResult};

/// Side length of every template, in cells.
pub const TEMPLATE_SIZE: usize = 32;
/// Number of cells in one template.
pub const TEMPLATE_CELLS: usize = TEMPLATE_SIZE * TEMPLATE_SIZE;
/// Packed size of one template record, in bytes.
pub const TEMPLATE_BYTES: usize = TEMPLATE_CELLS / 8;

/// Immutable 32x32 boolean pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Template {
    cells: Box<[bool; TEMPLATE_CELLS]>,
}

impl Template {
    /// Creates a template by evaluating `f(row, col)` for every cell.
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> bool,
    {
        let mut cells = Box::new([false; TEMPLATE_CELLS]);
        for (idx, cell) in cells.iter_mut().enumerate() {
            *cell = f(idx / TEMPLATE_SIZE, idx % TEMPLATE_SIZE);
        }
        Self { cells }
    }

    /// Decodes one packed record. Only the first `TEMPLATE_BYTES` are read.
    pub fn from_bytes(bytes: &[u8]) -> PcbResult<Self> {
        let record = bytes
            .get(..TEMPLATE_BYTES)
            .ok_or(PcbError::MalformedLibrary {
                needed: TEMPLATE_BYTES,
                got: bytes.len(),
            })?;
        let mut cells = Box::new([false; TEMPLATE_CELLS]);
        for (byte_idx, &byte) in record.iter().enumerate() {
            for bit in 0..8 {
                cells[byte_idx * 8 + bit] = (byte >> (7 - bit)) & 1 == 1;
            }
        }
        Ok(Self { cells })
    }

    /// Packs the template into its 128-byte record.
    pub fn to_bytes(&self) -> [u8; TEMPLATE_BYTES] {
        let mut out = [0u8; TEMPLATE_BYTES];
        for (idx, &cell) in self.cells.iter().enumerate() {
            if cell {
                out[idx / 8] |= 0x80 >> (idx % 8);
            }
        }
        out
    }

    /// Returns the cell at `(row, col)`.
    ///
    /// # Panics
    /// Panics if `row` or `col` is not below `TEMPLATE_SIZE`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> bool {
        assert!(row < TEMPLATE_SIZE && col < TEMPLATE_SIZE);
        self.cells[row * TEMPLATE_SIZE + col]
    }

    /// Returns one template row.
    #[inline]
    pub fn row(&self, row: usize) -> &[bool] {
        let start = row * TEMPLATE_SIZE;
        &self.cells[start..start + TEMPLATE_SIZE]
    }

    /// Returns the number of foreground cells.
    pub fn foreground_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Renders the template as text, `'1'` for foreground and `' '` for
    /// background, one line per row.
    ///
    /// Rows are printed bottom row first: the libraries are authored from
    /// bottom-up bitmaps, so this shows the part the way it was drawn.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(TEMPLATE_SIZE * (TEMPLATE_SIZE + 1));
        for row in (0..TEMPLATE_SIZE).rev() {
            out.extend(self.row(row).iter().map(|&c| if c { '1' } else { ' ' }));
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::{Template, TEMPLATE_BYTES, TEMPLATE_SIZE};
    use crate::util::PcbError;

    #[test]
    fn bits_are_msb_first_row_major() {
        let mut bytes = [0u8; TEMPLATE_BYTES];
        bytes[0] = 0b1000_0001;
        bytes[4] = 0b0100_0000;
        let tpl = Template::from_bytes(&bytes).unwrap();
        assert!(tpl.get(0, 0));
        assert!(tpl.get(0, 7));
        assert!(!tpl.get(0, 1));
        // byte 4 starts row 1
        assert!(tpl.get(1, 1));
        assert_eq!(tpl.foreground_count(), 3);
    }

    #[test]
    fn short_record_is_malformed() {
        let err = Template::from_bytes(&[0u8; 100]).unwrap_err();
        assert_eq!(
            err,
            PcbError::MalformedLibrary {
                needed: TEMPLATE_BYTES,
                got: 100
            }
        );
    }

    #[test]
    fn render_prints_bottom_row_first() {
        let tpl = Template::from_fn(|row, col| row == TEMPLATE_SIZE - 1 && col < 2);
        let text = tpl.render();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), TEMPLATE_SIZE);
        assert!(lines.iter().all(|l| l.len() == TEMPLATE_SIZE));
        assert!(lines[0].starts_with("11 "));
        assert_eq!(lines[1].trim(), "");
    }

    #[test]
    fn packing_preserves_cells() {
        let tpl = Template::from_fn(|row, col| (row * 7 + col * 3) % 5 == 0);
        let decoded = Template::from_bytes(&tpl.to_bytes()).unwrap();
        assert_eq!(decoded, tpl);
    }
}
