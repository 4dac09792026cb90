//! Pairwise connectivity between detected components.
//!
//! For each ordered pair `(a, b)` of distinct detections, the footprints of
//! all other detections are masked as obstacles and a flood fill from `a`'s
//! anchor cell tests whether `b`'s anchor cell is reachable. The grid is
//! restored after every probe.
//!
//! Reachability is decided between anchor cells only, not between arbitrary
//! footprint cells. When an anchor cell's value differs from the rest of its
//! footprint the verdict can disagree with the footprint's real connectivity;
//! revisit once footprint-to-footprint semantics are settled.

mod flood;
mod mask;

pub use flood::reachable;
pub use mask::ObstacleMask;

use crate::grid::OccupancyGrid;
use crate::search::Detection;
use crate::trace::{stage_event, stage_span};
use crate::util::{PcbError, PcbResult};

/// Reachable peers for every detection, indexed like the detection list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Connectivity {
    links: Vec<Vec<usize>>,
}

impl Connectivity {
    /// Returns the number of components described.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Returns true if there are no components.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Returns the ascending peer indices reachable from `component`.
    pub fn connections(&self, component: usize) -> Option<&[usize]> {
        self.links.get(component).map(Vec::as_slice)
    }

    /// Returns true if `to` is reachable from `from`.
    pub fn is_connected(&self, from: usize, to: usize) -> bool {
        self.connections(from)
            .is_some_and(|peers| peers.binary_search(&to).is_ok())
    }

    /// Iterates `(component, peers)` in component order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[usize])> + '_ {
        self.links
            .iter()
            .enumerate()
            .map(|(idx, peers)| (idx, peers.as_slice()))
    }

    /// Returns the number of reachable ordered pairs.
    pub fn pair_count(&self) -> usize {
        self.links.iter().map(Vec::len).sum()
    }
}

/// Computes which detections reach which through contiguous same-valued
/// cells.
///
/// `grid` is borrowed mutably for obstacle masking and is returned to its
/// exact prior state. Fails with `IndexOutOfRange` if a detection's anchor
/// lies outside the grid.
pub fn analyze(grid: &mut OccupancyGrid, detections: &[Detection]) -> PcbResult<Connectivity> {
    for (idx, det) in detections.iter().enumerate() {
        if grid.get(det.row, det.col).is_none() {
            return Err(PcbError::IndexOutOfRange {
                index: idx,
                len: detections.len(),
                context: "detection anchor",
            });
        }
    }

    let _span = stage_span!("analyze", detections = detections.len()).entered();

    let mut links = Vec::with_capacity(detections.len());
    for (a, from) in detections.iter().enumerate() {
        let mut peers = Vec::new();
        for (b, to) in detections.iter().enumerate() {
            if a == b {
                continue;
            }
            let mut mask = ObstacleMask::new(grid);
            for (other, det) in detections.iter().enumerate() {
                if other != a && other != b {
                    mask.block_footprint(det.row, det.col);
                }
            }
            if reachable(mask.grid(), (from.row, from.col), (to.row, to.col)) {
                peers.push(b);
            }
        }
        links.push(peers);
    }

    let connectivity = Connectivity { links };
    stage_event!("connectivity_done", pairs = connectivity.pair_count());
    Ok(connectivity)
}
