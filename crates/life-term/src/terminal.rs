// SPDX-License-Identifier: MIT
//
// Terminal queries and panic-safe restore.
//
// Safety: This module necessarily uses `unsafe` for ioctl (TIOCGWINSZ)
// and raw fd writes. These are the standard POSIX interfaces for
// terminal control; there is no safe alternative. Each unsafe block is
// minimal.
#![allow(unsafe_code)]
//
// The simulator never enters raw mode: Ctrl-C must still arrive as SIGINT.
// What it does change is visual state (hidden cursor, a screen full of
// blocks), and that state has to be undone however the process ends. The
// interrupt handler does it on Ctrl-C; the panic hook here does it on a bug.
// Both write the same pre-built byte string straight to fd 1, bypassing
// Rust's stdout lock so a panic mid-frame can't deadlock the restore.

use std::io::{self, Write};
use std::sync::Once;

// ─── Size ───────────────────────────────────────────────────────────────────

/// Terminal dimensions in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    /// Number of columns (width in character cells).
    pub cols: u16,
    /// Number of rows (height in character cells).
    pub rows: u16,
}

/// Size used when the controlling terminal can't be queried.
pub const FALLBACK_SIZE: Size = Size { cols: 80, rows: 24 };

// ─── Terminal Queries ───────────────────────────────────────────────────────

/// Query the current terminal size via `ioctl(TIOCGWINSZ)` on stdout.
///
/// Returns `None` if stdout is not a terminal, the query fails, or either
/// dimension is zero.
#[cfg(unix)]
#[must_use]
pub fn get_size() -> Option<Size> {
    let mut ws: libc::winsize = unsafe { std::mem::zeroed() };
    let result = unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, &mut ws) };

    if result == 0 && ws.ws_col > 0 && ws.ws_row > 0 {
        Some(Size {
            cols: ws.ws_col,
            rows: ws.ws_row,
        })
    } else {
        None
    }
}

#[cfg(not(unix))]
#[must_use]
pub fn get_size() -> Option<Size> {
    None
}

/// Query the terminal size, falling back to [`FALLBACK_SIZE`] (80×24).
///
/// The fallback keeps the simulator usable when piped or run under a test
/// harness. It is logged at `warn` so a host with a logger can see it.
#[must_use]
pub fn query_size() -> Size {
    get_size().unwrap_or_else(|| {
        log::warn!(
            "terminal size unavailable, using {}x{}",
            FALLBACK_SIZE.cols,
            FALLBACK_SIZE.rows
        );
        FALLBACK_SIZE
    })
}

// ─── Panic-Safe Terminal Restore ────────────────────────────────────────────

/// Complete terminal restore sequence for emergency use.
///
/// Show cursor, then full reset (RIS). The reset comes last: it wipes the
/// grid off the screen and hands the user back a clean prompt.
pub const EMERGENCY_RESTORE: &[u8] = b"\x1b[?25h\x1bc";

/// Panic hook guard: ensures the hook is installed at most once per process.
static PANIC_HOOK_INSTALLED: Once = Once::new();

/// Install a panic hook that restores the terminal before printing the error.
///
/// Without this, a panic leaves the cursor hidden and the screen full of
/// cells. The hook writes [`EMERGENCY_RESTORE`] directly to fd 1, then
/// delegates to the original panic handler so the message prints on a clean
/// screen.
pub fn install_panic_hook() {
    PANIC_HOOK_INSTALLED.call_once(|| {
        let original = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            emergency_restore();
            original(info);
        }));
    });
}

/// Write the complete restore sequence directly to stdout's file descriptor.
///
/// A single `write(2)` of a static buffer: async-signal-safe, so the
/// interrupt handler calls this too.
pub(crate) fn emergency_restore() {
    #[cfg(unix)]
    unsafe {
        let _ = libc::write(
            libc::STDOUT_FILENO,
            EMERGENCY_RESTORE.as_ptr().cast::<libc::c_void>(),
            EMERGENCY_RESTORE.len(),
        );
    }

    #[cfg(not(unix))]
    {
        let _ = io::stdout().write_all(EMERGENCY_RESTORE);
        let _ = io::stdout().flush();
    }
}

/// Restore the terminal through the normal buffered path.
///
/// Used by `main` before printing a fatal error, where we are on the main
/// thread and not inside a handler.
///
/// # Errors
///
/// Returns an error if writing to `w` fails.
pub fn restore(w: &mut impl Write) -> io::Result<()> {
    crate::ansi::cursor_show(w)?;
    crate::ansi::full_reset(w)?;
    w.flush()
}

// ─── Tests ───────────────────────────────────────────────────────────────────
