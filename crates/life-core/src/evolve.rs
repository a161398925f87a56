//! Evolution engine: neighbor counting and the generation transition.
//!
//! Neighbors are **edge-clamped**, not toroidal. Off-grid positions are
//! simply left out of the sum, so a corner cell has at most 3 neighbors and
//! an edge cell at most 5. Structures near the border behave differently
//! from the same structures in open space, and that is observable.
//!
//! A transition runs in two phases over the whole grid:
//!
//! 1. **Compute**: every cell's `next` is derived from the current `alive`
//!    values. Nothing reads `next` in this phase, so no cell sees a
//!    neighbor's already-decided future.
//! 2. **Commit**: `alive = next`, then `next = false`.

use crate::grid::Grid;

/// The Game of Life rule (B3/S23).
///
/// | alive | neighbors | next  |
/// |-------|-----------|-------|
/// | true  | 0–1       | false |
/// | true  | 2–3       | true  |
/// | true  | 4–8       | false |
/// | false | 3         | true  |
/// | false | other     | false |
#[inline]
#[must_use]
pub const fn next_state(alive: bool, neighbors: u8) -> bool {
    if alive {
        neighbors == 2 || neighbors == 3
    } else {
        neighbors == 3
    }
}

/// Count the live neighbors of `(row, col)`, clamped at the grid edges.
///
/// Returns a value in `0..=8`.
///
/// # Panics
///
/// Panics if `(row, col)` is outside the grid.
#[must_use]
pub fn neighbor_count(grid: &Grid, row: usize, col: usize) -> u8 {
    assert!(
        row < grid.rows() && col < grid.cols(),
        "({row}, {col}) outside {}x{} grid",
        grid.rows(),
        grid.cols()
    );

    let top = row.saturating_sub(1);
    let bottom = (row + 1).min(grid.rows() - 1);
    let left = col.saturating_sub(1);
    let right = (col + 1).min(grid.cols() - 1);

    let mut live = 0;
    for r in top..=bottom {
        for c in left..=right {
            if (r, c) != (row, col) && grid.cells[grid.index(r, c)].alive {
                live += 1;
            }
        }
    }
    live
}

/// Advance `grid` by one generation.
pub fn transition(grid: &mut Grid) {
    // Compute: reads only `alive`.
    for i in 0..grid.cells.len() {
        let cell = grid.cells[i];
        let n = neighbor_count(grid, cell.row(), cell.col());
        grid.cells[i].next = next_state(cell.alive, n);
    }

    // Commit.
    for cell in &mut grid.cells {
        cell.alive = cell.next;
        cell.next = false;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
