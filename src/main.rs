// SPDX-License-Identifier: MIT
//
// termlife: Conway's Game of Life, full-screen in the terminal.
//
// This is the binary that wires the two crates together:
//
//   life-term → escape sequences, size query, signals, render loop
//   life-core → grid allocation and seeding, evolution, drawing
//
// The Life struct implements life-term's App trait. Each epoch flows:
//
//   SIGWINCH / start → query size → on_resize (fresh seeded grid)
//   paint (draw every cell) → sleep → on_tick (one generation) → ...
//
// Ctrl-C restores the cursor, resets the terminal and exits 0 from the
// signal handler. There are no flags, no config files, no environment.

use std::io;
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::SeedableRng;
use rand::rngs::StdRng;

use life_core::evolve;
use life_core::grid::{Grid, Seed};
use life_core::render;

use life_term::event_loop::{App, EventLoop};
use life_term::output::OutputBuffer;
use life_term::terminal::{self, Size};

// ─── Life ───────────────────────────────────────────────────────────────────

/// The simulation context: the current epoch's grid and the RNG that seeds
/// every epoch.
struct Life {
    grid: Grid,
    rng: StdRng,
    seed: Seed,
    /// Generations evolved since the grid was last seeded.
    generation: u64,
}

impl Life {
    /// An empty simulation. The first epoch allocates the real grid.
    fn new(rng: StdRng) -> Self {
        Self {
            grid: Grid::default(),
            rng,
            seed: Seed::DEFAULT,
            generation: 0,
        }
    }
}

impl App for Life {
    fn on_resize(&mut self, size: Size) {
        // Release the previous epoch's grid before allocating, so two grids
        // are never live at once.
        drop(std::mem::take(&mut self.grid));
        self.grid = Grid::allocate(
            usize::from(size.rows),
            usize::from(size.cols),
            self.seed,
            &mut self.rng,
        );
        self.generation = 0;
    }

    fn paint(&mut self, out: &mut OutputBuffer) -> io::Result<()> {
        render::draw(&self.grid, out)
    }

    fn on_tick(&mut self) {
        evolve::transition(&mut self.grid);
        self.generation += 1;
        log::trace!(
            "generation {}: {} live",
            self.generation,
            self.grid.live_count()
        );
    }
}

/// RNG seed from the wall clock. No reproducibility across runs.
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_secs() ^ u64::from(d.subsec_nanos()))
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn main() {
    let mut life = Life::new(StdRng::seed_from_u64(clock_seed()));
    let mut event_loop = EventLoop::new();

    if let Err(e) = event_loop.run(&mut life) {
        let _ = terminal::restore(&mut io::stdout());
        eprintln!("termlife: {e}");
        process::exit(1);
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use life_term::event_loop::{LoopConfig, Phase};
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::Duration;

    fn life() -> Life {
        Life::new(StdRng::seed_from_u64(7))
    }

    const FAST: LoopConfig = LoopConfig {
        tick: Duration::ZERO,
    };

    // ── App impl ──────────────────────────────────────────────────────────

    #[test]
    fn starts_empty() {
        let life = life();
        assert!(life.grid.is_empty());
        assert_eq!(life.generation, 0);
    }

    #[test]
    fn resize_allocates_rows_by_cols() {
        let mut life = life();
        life.on_resize(Size { cols: 80, rows: 24 });
        assert_eq!(life.grid.rows(), 24);
        assert_eq!(life.grid.cols(), 80);
    }

    #[test]
    fn resize_replaces_grid_and_resets_generation() {
        let mut life = life();
        life.on_resize(Size { cols: 10, rows: 10 });
        life.on_tick();
        life.on_tick();
        assert_eq!(life.generation, 2);

        life.on_resize(Size { cols: 4, rows: 3 });
        assert_eq!(life.grid.len(), 12);
        assert_eq!(life.generation, 0);
    }

    #[test]
    fn resize_from_large_grid_keeps_only_new_one() {
        let mut life = life();
        life.on_resize(Size { cols: 400, rows: 200 });
        assert_eq!(life.grid.len(), 80_000);

        life.on_resize(Size { cols: 2, rows: 1 });
        assert_eq!(life.grid.len(), 2);
        assert_eq!(life.grid.cells().len(), 2);
    }

    #[test]
    fn tick_evolves_one_generation() {
        let mut life = life();
        life.grid = Grid::from_live_cells(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        life.on_tick();
        assert_eq!(
            life.grid.live_cells().collect::<Vec<_>>(),
            vec![(1, 2), (2, 2), (3, 2)]
        );
        assert_eq!(life.generation, 1);
    }

    #[test]
    fn paint_draws_grid() {
        let mut life = life();
        life.grid = Grid::from_live_cells(1, 1, &[(0, 0)]);
        let mut out = OutputBuffer::new();
        life.paint(&mut out).unwrap();
        assert_eq!(out.as_bytes(), "\x1b[1;1f█".as_bytes());
    }

    #[test]
    fn clock_seed_reads_clock() {
        // Not a randomness test; just proves the clock is read.
        assert_ne!(clock_seed(), 0);
    }

    // ── Through the render loop ───────────────────────────────────────────

    #[test]
    fn epoch_renders_seeded_grid() {
        static FLAG: AtomicBool = AtomicBool::new(false);
        let mut el = EventLoop::with_writer(Vec::new(), FAST)
            .with_flag(&FLAG)
            .with_size_query(|| Size { cols: 1, rows: 1 });
        let mut life = life();
        life.seed = Seed::new(1, 0).unwrap();

        let mut phase = Phase::Sizing;
        for _ in 0..3 {
            phase = el.step(phase, &mut life).unwrap();
        }

        assert_eq!(phase, Phase::Running);
        // A lone cell dies after its first generation.
        assert_eq!(life.grid.live_count(), 0);
        assert_eq!(life.generation, 1);
    }

    #[test]
    fn resize_reseeds_at_new_size() {
        static FLAG: AtomicBool = AtomicBool::new(false);
        let mut el = EventLoop::with_writer(Vec::new(), FAST)
            .with_flag(&FLAG)
            .with_size_query(|| Size { cols: 6, rows: 2 });
        let mut life = life();
        life.on_resize(Size { cols: 30, rows: 30 });
        life.on_tick();

        FLAG.store(true, Ordering::Release);
        let mut phase = el.step(Phase::Running, &mut life).unwrap();
        assert_eq!(phase, Phase::Sizing);
        assert_eq!(life.grid.len(), 900, "resize waits for the generation to finish");

        phase = el.step(phase, &mut life).unwrap();
        phase = el.step(phase, &mut life).unwrap();
        assert_eq!(phase, Phase::Running);
        assert_eq!((life.grid.rows(), life.grid.cols()), (2, 6));
        assert_eq!(life.generation, 0);
    }
}
