//! Bleed module - bounded flood-fill propagation
//!
//! A tap bleeds the selected color from the tapped cell into a bounded
//! neighborhood: breadth-first over 4-directional neighbors, where a cell is
//! reachable only while it stays within `distance` of the origin on both the
//! row and column axis independently. The per-axis cap (not graph distance)
//! combined with 4-way connectivity keeps each tap's effect local, so players
//! must plan non-overlapping taps to cover the grid within budget.
//!
//! Every visited cell is painted, including cells that already carry another
//! color - the bleed overwrites whatever it reaches inside the window.

use arrayvec::ArrayVec;
use colorbleed_types::MAX_BLEED_DISTANCE;

use crate::grid::Grid;

const WINDOW: usize = 2 * MAX_BLEED_DISTANCE + 1;

/// Upper bound on the number of cells a single bleed can touch.
pub const BLEED_REGION_CAP: usize = WINDOW * WINDOW;

/// Cells reached by one bleed, in visit order (origin first).
pub type BleedRegion = ArrayVec<(usize, usize), BLEED_REGION_CAP>;

const DIRS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Collect the cells a bleed from `(origin_row, origin_col)` would reach.
///
/// Breadth-first from the origin; a neighbor is enqueued iff it is inside the
/// grid, unvisited, and within `distance` of the origin on each axis. The
/// queue is array-backed with a head cursor, so no heap allocation happens.
pub fn bleed_region(
    grid: &Grid,
    origin_row: usize,
    origin_col: usize,
    distance: usize,
) -> BleedRegion {
    assert!(
        distance <= MAX_BLEED_DISTANCE,
        "bleed distance {distance} exceeds maximum {MAX_BLEED_DISTANCE}"
    );
    let size = grid.size();
    assert!(
        origin_row < size && origin_col < size,
        "bleed origin ({origin_row}, {origin_col}) out of range for {size}x{size} grid"
    );

    // Visited bookkeeping lives in a fixed window indexed by offset from the
    // origin; every reachable cell is within it.
    let mut visited = [[false; WINDOW]; WINDOW];
    visited[MAX_BLEED_DISTANCE][MAX_BLEED_DISTANCE] = true;

    let mut region = BleedRegion::new();
    region.push((origin_row, origin_col));

    let mut head = 0;
    while head < region.len() {
        let (row, col) = region[head];
        head += 1;

        for (dr, dc) in DIRS {
            let nr = row as isize + dr;
            let nc = col as isize + dc;
            if nr < 0 || nc < 0 || nr >= size as isize || nc >= size as isize {
                continue;
            }
            let off_r = nr - origin_row as isize;
            let off_c = nc - origin_col as isize;
            if off_r.unsigned_abs() > distance || off_c.unsigned_abs() > distance {
                continue;
            }
            let wr = (off_r + MAX_BLEED_DISTANCE as isize) as usize;
            let wc = (off_c + MAX_BLEED_DISTANCE as isize) as usize;
            if visited[wr][wc] {
                continue;
            }
            visited[wr][wc] = true;
            region.push((nr as usize, nc as usize));
        }
    }

    region
}

/// Paint a bleed from the origin with `color_slot`, returning cells painted.
///
/// The caller enforces the uncolored-origin rule; this operation itself
/// paints every reached cell regardless of its prior color.
pub fn apply_bleed(
    grid: &mut Grid,
    origin_row: usize,
    origin_col: usize,
    color_slot: u8,
    distance: usize,
) -> usize {
    let region = bleed_region(grid, origin_row, origin_col, distance);
    for &(row, col) in &region {
        grid.set(row, col, Some(color_slot));
    }
    region.len()
}
