//! Plain-text listings of detections and connectivity.

use crate::connect::Connectivity;
use crate::search::Detection;
use std::fmt::Write;

/// Formats the detection listing, one `type: T, row: R, column: C` line per
/// detection after a `Found N components:` header.
pub fn format_detections(detections: &[Detection]) -> String {
    let mut out = format!("Found {} components:\n", detections.len());
    for det in detections {
        let _ = writeln!(out, "{det}");
    }
    out
}

/// Formats one line per component listing the components it connects to,
/// or `connected to nothing`.
pub fn format_connectivity(connectivity: &Connectivity) -> String {
    let mut out = String::new();
    for (component, peers) in connectivity.iter() {
        if peers.is_empty() {
            let _ = writeln!(out, "Component {component} connected to nothing");
            continue;
        }
        let _ = write!(out, "Component {component} connected to");
        for peer in peers {
            let _ = write!(out, " {peer}");
        }
        out.push('\n');
    }
    out
}
