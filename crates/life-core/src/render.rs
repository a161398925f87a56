//! Drawing a grid as terminal output.
//!
//! Every cell is drawn every frame, each preceded by its own cursor
//! position, so a frame never depends on what the previous one left on
//! screen. The caller decides when the bytes reach the terminal.

use std::io::{self, Write};

use life_term::ansi;

use crate::grid::Grid;

/// Glyph for a live cell (U+2588 FULL BLOCK).
pub const ALIVE: &str = "█";

/// Glyph for a dead cell.
pub const DEAD: &str = " ";

/// Write every cell of `grid` to `out`: cursor position, then glyph.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn draw(grid: &Grid, out: &mut impl Write) -> io::Result<()> {
    for cell in grid.cells() {
        ansi::cursor_to(out, cell.row(), cell.col())?;
        let glyph = if cell.is_alive() { ALIVE } else { DEAD };
        out.write_all(glyph.as_bytes())?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(grid: &Grid) -> String {
        let mut buf = Vec::new();
        draw(grid, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn single_live_cell() {
        let grid = Grid::from_live_cells(1, 1, &[(0, 0)]);
        assert_eq!(render(&grid), "\x1b[1;1f█");
    }

    #[test]
    fn single_dead_cell() {
        let grid = Grid::dead(1, 1);
        assert_eq!(render(&grid), "\x1b[1;1f ");
    }

    #[test]
    fn row_major_order() {
        let grid = Grid::from_live_cells(2, 2, &[(0, 1), (1, 0)]);
        assert_eq!(
            render(&grid),
            "\x1b[1;1f \x1b[1;2f█\x1b[2;1f█\x1b[2;2f "
        );
    }

    #[test]
    fn every_cell_is_positioned() {
        let grid = Grid::dead(3, 7);
        assert_eq!(render(&grid).matches('\x1b').count(), 21);
    }

    #[test]
    fn empty_grid_draws_nothing() {
        assert_eq!(render(&Grid::dead(0, 0)), "");
    }

    #[test]
    fn alive_glyph_is_full_block() {
        assert_eq!(ALIVE, "\u{2588}");
    }
}
