//! Low-level building blocks for custom detection pipelines.
//!
//! These expose the single-window comparison, the flood fill, and the
//! obstacle mask guard used internally by `Matcher` and `analyze`.

pub use crate::connect::{reachable, ObstacleMask};
pub use crate::grid::Cell;
pub use crate::search::scan::matches_at;
pub use crate::template::{TEMPLATE_BYTES, TEMPLATE_CELLS, TEMPLATE_SIZE};
