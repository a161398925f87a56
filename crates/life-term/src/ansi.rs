// SPDX-License-Identifier: MIT
//
// ANSI escape sequence generation.
//
// Pure functions that write escape sequences to any `impl Write`. No state,
// no decisions about when to emit. The render loop decides; this module just
// knows the bytes.
//
// All cursor positions are 0-indexed in our API and converted to 1-indexed
// for the terminal (ANSI standard uses 1-based coordinates).
//
// All functions return `io::Result` propagated from the underlying writer.
// In practice they never fail when writing to `OutputBuffer` (backed by a Vec).

use std::io::{self, Write};

// ─── Cursor ──────────────────────────────────────────────────────────────────

/// Move the cursor to `(row, col)` using the HVP sequence (`ESC[r;cf`).
///
/// Our coordinates are 0-indexed; HVP is 1-indexed. Takes `usize` because
/// grid cells carry their position as `usize`.
#[inline]
pub fn cursor_to(w: &mut impl Write, row: usize, col: usize) -> io::Result<()> {
    write!(w, "\x1b[{};{}f", row + 1, col + 1)
}

/// Hide the cursor (DECTCEM reset).
#[inline]
pub fn cursor_hide(w: &mut impl Write) -> io::Result<()> {
    w.write_all(CURSOR_HIDE)
}

/// Show the cursor (DECTCEM set).
#[inline]
pub fn cursor_show(w: &mut impl Write) -> io::Result<()> {
    w.write_all(CURSOR_SHOW)
}

// ─── Screen ──────────────────────────────────────────────────────────────────

/// Clear the entire screen (ED 2).
#[inline]
pub fn clear_screen(w: &mut impl Write) -> io::Result<()> {
    w.write_all(CLEAR_SCREEN)
}

/// Full terminal reset (RIS).
///
/// Unlike SGR 0 this resets **everything**: modes, scroll region, tab stops,
/// and the visible screen. Used once on the way out.
#[inline]
pub fn full_reset(w: &mut impl Write) -> io::Result<()> {
    w.write_all(FULL_RESET)
}

// ─── Raw Sequences ───────────────────────────────────────────────────────────
//
// Exposed as byte constants so the signal handler and panic hook can build
// their restore strings at compile time.

pub const CURSOR_HIDE: &[u8] = b"\x1b[?25l";
pub const CURSOR_SHOW: &[u8] = b"\x1b[?25h";
pub const CLEAR_SCREEN: &[u8] = b"\x1b[2J";
pub const FULL_RESET: &[u8] = b"\x1bc";

// ─── Tests ───────────────────────────────────────────────────────────────────
