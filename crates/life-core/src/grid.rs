//! Grid state: one rectangle of cells, sized to the terminal.
//!
//! Cells are stored row-major in a single `Vec`. Every cell carries its own
//! `(row, col)`, assigned once at allocation and never changed, so
//! `row == index / cols` and `col == index % cols` hold for the life of the
//! grid. A grid lives for exactly one epoch: when the terminal is resized the
//! old grid is dropped and a fresh one allocated.
//!
//! The only mutation after allocation is [`evolve::transition`], which owns
//! the `next` staging field.
//!
//! [`evolve::transition`]: crate::evolve::transition

use rand::Rng;

// ---------------------------------------------------------------------------
// Seed
// ---------------------------------------------------------------------------

/// Initial-liveness policy.
///
/// Each cell draws a uniform integer in `0..density` and starts alive when
/// the draw equals `residue`, so roughly one cell in `density` is alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seed {
    density: u32,
    residue: u32,
}

impl Seed {
    /// One live cell in seven.
    pub const DEFAULT: Self = Self {
        density: 7,
        residue: 1,
    };

    /// Build a seed policy. `None` if `density` is zero or `residue` can
    /// never be drawn.
    #[must_use]
    pub const fn new(density: u32, residue: u32) -> Option<Self> {
        if density == 0 || residue >= density {
            None
        } else {
            Some(Self { density, residue })
        }
    }

    #[inline]
    #[must_use]
    pub const fn density(self) -> u32 {
        self.density
    }

    #[inline]
    #[must_use]
    pub const fn residue(self) -> u32 {
        self.residue
    }

    /// One independent draw: is this cell born alive?
    #[inline]
    pub fn draw(self, rng: &mut impl Rng) -> bool {
        rng.gen_range(0..self.density) == self.residue
    }
}

impl Default for Seed {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// One grid position.
///
/// `next` is the staging slot for the coming generation. It is `false`
/// everywhere except between the two phases of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    row: usize,
    col: usize,
    pub(crate) alive: bool,
    pub(crate) next: bool,
}

impl Cell {
    #[inline]
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    #[inline]
    #[must_use]
    pub const fn col(&self) -> usize {
        self.col
    }

    #[inline]
    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.alive
    }

    /// The staged next-generation state. Always `false` outside a transition.
    #[inline]
    #[must_use]
    pub const fn next(&self) -> bool {
        self.next
    }
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// All cells of one epoch, row-major, `rows × cols` long.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    pub(crate) cells: Vec<Cell>,
}

impl Grid {
    /// Allocate a `rows × cols` grid and seed every cell independently.
    pub fn allocate(rows: usize, cols: usize, seed: Seed, rng: &mut impl Rng) -> Self {
        let grid = Self::build(rows, cols, |_, _| seed.draw(rng));
        log::debug!(
            "seeded {rows}x{cols} grid, {} of {} cells alive",
            grid.live_count(),
            grid.len()
        );
        grid
    }

    /// Allocate a `rows × cols` grid with every cell dead.
    #[must_use]
    pub fn dead(rows: usize, cols: usize) -> Self {
        Self::build(rows, cols, |_, _| false)
    }

    /// Allocate a grid where exactly the listed positions are alive.
    ///
    /// # Panics
    ///
    /// Panics if any position lies outside the grid.
    #[must_use]
    pub fn from_live_cells(rows: usize, cols: usize, live: &[(usize, usize)]) -> Self {
        let mut grid = Self::dead(rows, cols);
        for &(row, col) in live {
            assert!(
                row < rows && col < cols,
                "({row}, {col}) outside {rows}x{cols} grid"
            );
            let i = grid.index(row, col);
            grid.cells[i].alive = true;
        }
        grid
    }

    fn build(rows: usize, cols: usize, mut alive: impl FnMut(usize, usize) -> bool) -> Self {
        let cells = (0..rows * cols)
            .map(|i| {
                let (row, col) = (i / cols, i % cols);
                Cell {
                    row,
                    col,
                    alive: alive(row, col),
                    next: false,
                }
            })
            .collect();

        Self { rows, cols, cells }
    }

    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells (`rows × cols`).
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when either dimension is zero.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// All cells, row-major.
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    pub(crate) const fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// The cell at `(row, col)`, or `None` outside the grid.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        if row < self.rows && col < self.cols {
            self.cells.get(self.index(row, col))
        } else {
            None
        }
    }

    /// Whether `(row, col)` is alive. Positions outside the grid are dead.
    #[must_use]
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(Cell::is_alive)
    }

    /// Number of live cells.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|c| c.alive).count()
    }

    /// Positions of all live cells, row-major.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .filter(|c| c.alive)
            .map(|c| (c.row, c.col))
    }
}

/// The empty `0 × 0` grid. Holds no cell storage.
impl Default for Grid {
    fn default() -> Self {
        Self::dead(0, 0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
