//! pcbtrace finds known 32x32 parts on a binarized board image and traces
//! which parts are joined by contiguous copper.
//!
//! The pipeline is: decode a [`TemplateLibrary`], [`binarize`] an RGB image
//! into an [`OccupancyGrid`], run the exact-match [`Matcher`], then
//! [`analyze`] pairwise reachability between the detections. Optional
//! features add rayon row-parallel matching (`rayon`), image decoding via the
//! `image` crate (`image-io`), and tracing spans (`tracing`).

pub mod connect;
pub mod grid;
pub mod image;
pub mod lowlevel;
pub mod report;
pub mod search;
pub mod template;
mod trace;
pub mod util;

#[cfg(feature = "image-io")]
pub use crate::image::io;

pub use connect::{analyze, Connectivity};
pub use grid::{binarize, Cell, OccupancyGrid, FOREGROUND_THRESHOLD};
pub use crate::image::{ImageView, OwnedRgbImage};
pub use report::{format_connectivity, format_detections};
pub use search::{find_components, Detection, MatchConfig, Matcher};
pub use template::{Template, TemplateLibrary, TEMPLATE_SIZE};
pub use util::{PcbError, PcbResult};
