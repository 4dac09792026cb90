//! Iterative 4-connected flood fill.

use crate::grid::{Cell, OccupancyGrid};

/// Returns true if `target` is reachable from `start` through 4-connected
/// cells holding the same value as `start`.
///
/// The fill uses an explicit stack and a visited buffer private to this call.
/// `Cell::Blocked` cells are never entered. The start cell itself is always
/// visited, so `start == target` is reachable. Coordinates are `(row, col)`;
/// an out-of-bounds start or target is unreachable.
pub fn reachable(grid: &OccupancyGrid, start: (usize, usize), target: (usize, usize)) -> bool {
    let width = grid.width();
    let height = grid.height();
    let (Some(start_cell), Some(_)) = (grid.get(start.0, start.1), grid.get(target.0, target.1))
    else {
        return false;
    };
    if start == target {
        return true;
    }

    let cells = grid.cells();
    let target_idx = target.0 * width + target.1;
    let mut visited = vec![false; cells.len()];
    let mut stack = vec![start.0 * width + start.1];
    visited[stack[0]] = true;

    while let Some(idx) = stack.pop() {
        let row = idx / width;
        let col = idx % width;
        let neighbors = [
            (row + 1 < height).then(|| idx + width),
            (row > 0).then(|| idx - width),
            (col + 1 < width).then(|| idx + 1),
            (col > 0).then(|| idx - 1),
        ];
        for next in neighbors.into_iter().flatten() {
            if visited[next] || cells[next] == Cell::Blocked || cells[next] != start_cell {
                continue;
            }
            if next == target_idx {
                return true;
            }
            visited[next] = true;
            stack.push(next);
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::reachable;
    use crate::grid::OccupancyGrid;

    #[test]
    fn follows_winding_foreground_path() {
        // Serpentine: rows 0, 2, 4 are foreground, joined at alternating ends.
        let grid = OccupancyGrid::from_fn(10, 5, |row, col| {
            row % 2 == 0 || (row == 1 && col == 9) || (row == 3 && col == 0)
        })
        .unwrap();
        assert!(reachable(&grid, (0, 0), (4, 9)));
        assert!(!reachable(&grid, (0, 0), (1, 0)));
    }

    #[test]
    fn background_fill_stays_in_background() {
        let grid = OccupancyGrid::from_fn(6, 6, |_, col| col == 3).unwrap();
        assert!(reachable(&grid, (0, 0), (5, 2)));
        assert!(!reachable(&grid, (0, 0), (0, 5)));
        assert!(reachable(&grid, (0, 4), (5, 5)));
    }

    #[test]
    fn diagonal_contact_does_not_connect() {
        let grid = OccupancyGrid::from_fn(2, 2, |row, col| row == col).unwrap();
        assert!(!reachable(&grid, (0, 0), (1, 1)));
    }

    #[test]
    fn identical_endpoints_are_reachable() {
        let grid = OccupancyGrid::new(3, 3).unwrap();
        assert!(reachable(&grid, (1, 1), (1, 1)));
        assert!(!reachable(&grid, (1, 1), (3, 0)));
    }

    #[test]
    fn long_path_does_not_exhaust_the_stack() {
        let grid = OccupancyGrid::from_fn(4000, 1000, |_, _| true).unwrap();
        assert!(reachable(&grid, (0, 0), (999, 3999)));
    }
}
