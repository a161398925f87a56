// SPDX-License-Identifier: MIT
//
// Render loop: the heartbeat of the simulator.
//
// Three phases, one transition per `step` call:
//
//   Sizing          query the terminal size (fallback 80×24)
//     │
//   Seeding(size)   the app drops its old grid and seeds a fresh one,
//     │             then the screen is cleared and the cursor hidden
//     │
//   Running ◄─┐     paint one frame, flush it in a single write, sleep one
//     │       │     tick, evolve one generation, then consume the resize
//     └───────┘     flag: set → back to Sizing, clear → Running again
//
// The resize flag is consulted exactly once per generation and only after
// that generation's draw and evolve are done, so a resize mid-frame can
// never corrupt the frame. The loop never ends on its own; SIGINT ends the
// process from its handler.
//
// The flag, the size query and the writer are all injectable so the state
// machine can be driven step by step in tests without a real terminal.

use std::io::{self, Write};
use std::sync::atomic::AtomicBool;
use std::thread;
use std::time::Duration;

use crate::ansi;
use crate::output::OutputBuffer;
use crate::signal::{self, RESIZE_PENDING};
use crate::terminal::{self, Size};

// ─── App Trait ───────────────────────────────────────────────────────────────

/// Application interface for the render loop.
///
/// Each epoch the loop calls [`on_resize`](App::on_resize) once, then
/// alternates [`paint`](App::paint) and [`on_tick`](App::on_tick) until a
/// resize is observed.
pub trait App {
    /// Start a new epoch at `size`. Replace any previous state.
    fn on_resize(&mut self, size: Size);

    /// Paint the current state into the frame buffer.
    ///
    /// The buffer is empty on entry and is flushed to the terminal in one
    /// write afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    fn paint(&mut self, out: &mut OutputBuffer) -> io::Result<()>;

    /// Advance one generation.
    fn on_tick(&mut self);
}

// ─── Loop Config ─────────────────────────────────────────────────────────────

/// Timing configuration for the render loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopConfig {
    /// Pause between drawing a generation and computing the next one.
    pub tick: Duration,
}

/// Default generation pause: 300 ms.
pub const DEFAULT_TICK: Duration = Duration::from_millis(300);

impl Default for LoopConfig {
    fn default() -> Self {
        Self { tick: DEFAULT_TICK }
    }
}

// ─── Phase ───────────────────────────────────────────────────────────────────

/// Render loop state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Query the terminal size.
    Sizing,
    /// Allocate and seed a grid at this size.
    Seeding(Size),
    /// Draw, pause, evolve, check for resize.
    Running,
}

// ─── EventLoop ───────────────────────────────────────────────────────────────

/// The simulator's render loop.
///
/// Owns the output writer, the frame buffer and the timing config. Call
/// [`run`](Self::run) to loop forever, or [`step`](Self::step) to advance
/// the state machine one transition at a time.
///
/// # Example
///
/// ```no_run
/// use std::io;
/// use life_term::event_loop::{App, EventLoop};
/// use life_term::output::OutputBuffer;
/// use life_term::terminal::Size;
///
/// struct Blank;
///
/// impl App for Blank {
///     fn on_resize(&mut self, _size: Size) {}
///     fn paint(&mut self, _out: &mut OutputBuffer) -> io::Result<()> {
///         Ok(())
///     }
///     fn on_tick(&mut self) {}
/// }
///
/// EventLoop::new().run(&mut Blank)?;
/// # Ok::<(), io::Error>(())
/// ```
pub struct EventLoop<W: Write = io::Stdout> {
    writer: W,
    out: OutputBuffer,
    config: LoopConfig,
    resize: &'static AtomicBool,
    query: fn() -> Size,
}

impl EventLoop<io::Stdout> {
    /// Create a render loop on stdout with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(LoopConfig::default())
    }

    /// Create a render loop on stdout with custom timing.
    #[must_use]
    pub fn with_config(config: LoopConfig) -> Self {
        Self::with_writer(io::stdout(), config)
    }
}

impl Default for EventLoop<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> EventLoop<W> {
    /// Create a render loop writing frames to `writer`.
    ///
    /// Reads the process-wide resize flag and queries the real terminal
    /// size; override either with [`with_flag`](Self::with_flag) and
    /// [`with_size_query`](Self::with_size_query).
    pub fn with_writer(writer: W, config: LoopConfig) -> Self {
        Self {
            writer,
            out: OutputBuffer::new(),
            config,
            resize: &RESIZE_PENDING,
            query: terminal::query_size,
        }
    }

    /// Read resize notifications from `flag` instead of the global one.
    #[must_use]
    pub fn with_flag(mut self, flag: &'static AtomicBool) -> Self {
        self.resize = flag;
        self
    }

    /// Use `query` to size each epoch instead of asking the terminal.
    #[must_use]
    pub fn with_size_query(mut self, query: fn() -> Size) -> Self {
        self.query = query;
        self
    }

    /// The timing configuration.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> LoopConfig {
        self.config
    }

    /// Run the loop until the process is killed.
    ///
    /// Installs the panic hook and the signal handlers, then steps the state
    /// machine forever starting at [`Phase::Sizing`].
    ///
    /// # Errors
    ///
    /// Returns only if writing to the terminal fails.
    pub fn run(&mut self, app: &mut impl App) -> io::Result<()> {
        terminal::install_panic_hook();
        signal::install_handlers();

        let mut phase = Phase::Sizing;
        loop {
            phase = self.step(phase, app)?;
        }
    }

    /// Advance the state machine by one transition.
    ///
    /// # Errors
    ///
    /// Returns an error if painting or writing to the terminal fails.
    pub fn step(&mut self, phase: Phase, app: &mut impl App) -> io::Result<Phase> {
        match phase {
            Phase::Sizing => {
                let size = (self.query)();
                log::info!("new epoch at {}x{}", size.cols, size.rows);
                Ok(Phase::Seeding(size))
            }
            Phase::Seeding(size) => {
                app.on_resize(size);
                ansi::clear_screen(&mut self.out)?;
                ansi::cursor_hide(&mut self.out)?;
                self.out.flush_to(&mut self.writer)?;
                Ok(Phase::Running)
            }
            Phase::Running => {
                self.out.clear();
                app.paint(&mut self.out)?;
                self.out.flush_to(&mut self.writer)?;

                thread::sleep(self.config.tick);
                app.on_tick();

                if signal::take_resize(self.resize) {
                    log::debug!("resize observed, re-sizing");
                    Ok(Phase::Sizing)
                } else {
                    Ok(Phase::Running)
                }
            }
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
