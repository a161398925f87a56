// SPDX-License-Identifier: MIT
//
// Output buffering.
//
// A frame is thousands of cursor moves and glyphs. Writing each one straight
// to stdout would cost a syscall apiece and let the terminal paint half a
// generation. OutputBuffer accumulates the whole frame in memory so it lands
// with a single write() and a single flush.

use std::io::{self, Write};

// ─── OutputBuffer ────────────────────────────────────────────────────────────

/// A byte buffer that accumulates ANSI output for a single `write()` syscall.
///
/// Default capacity: 16 KB. A 200×50 terminal frame is roughly 10,000 cells
/// at ~10 bytes each, so large terminals grow the buffer once and then keep
/// the capacity across frames via [`clear`](Self::clear).
pub struct OutputBuffer {
    buf: Vec<u8>,
}

const DEFAULT_CAPACITY: usize = 16_384;

impl OutputBuffer {
    /// Create an empty buffer with default capacity (16 KB).
    #[must_use]
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(DEFAULT_CAPACITY),
        }
    }

    /// Number of bytes accumulated.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether the buffer is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// The accumulated bytes (for testing and debugging).
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Clear the buffer for reuse (keeps allocated capacity).
    #[inline]
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Write accumulated output to `w`, flush it, and clear the buffer.
    ///
    /// Flushes even when empty so a frame boundary always reaches the
    /// terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to or flushing `w` fails.
    pub fn flush_to(&mut self, w: &mut impl Write) -> io::Result<()> {
        if !self.buf.is_empty() {
            w.write_all(&self.buf)?;
            self.buf.clear();
        }
        w.flush()
    }
}

impl Write for OutputBuffer {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        // No-op. Real flushing happens in flush_to().
        Ok(())
    }
}

impl Default for OutputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ansi;
    use pretty_assertions::assert_eq;

    /// Writer that records how many times it was flushed.
    #[derive(Default)]
    struct Recorder {
        bytes: Vec<u8>,
        writes: usize,
        flushes: usize,
    }

    impl Write for Recorder {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.bytes.extend_from_slice(buf);
            self.writes += 1;
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            self.flushes += 1;
            Ok(())
        }
    }

    #[test]
    fn new_is_empty() {
        let out = OutputBuffer::new();
        assert!(out.is_empty());
        assert_eq!(out.len(), 0);
    }

    #[test]
    fn default_matches_new() {
        assert!(OutputBuffer::default().is_empty());
    }

    #[test]
    fn write_accumulates() {
        let mut out = OutputBuffer::new();
        ansi::cursor_to(&mut out, 0, 0).unwrap();
        out.write_all("█".as_bytes()).unwrap();
        assert_eq!(out.as_bytes(), "\x1b[1;1f█".as_bytes());
    }

    #[test]
    fn clear_empties_buffer() {
        let mut out = OutputBuffer::new();
        out.write_all(b"abc").unwrap();
        out.clear();
        assert!(out.is_empty());
    }

    #[test]
    fn flush_to_writes_once_and_clears() {
        let mut out = OutputBuffer::new();
        ansi::cursor_to(&mut out, 1, 2).unwrap();
        out.write_all(b" ").unwrap();
        ansi::cursor_to(&mut out, 3, 4).unwrap();

        let mut rec = Recorder::default();
        out.flush_to(&mut rec).unwrap();

        assert_eq!(rec.bytes, b"\x1b[2;3f \x1b[4;5f");
        assert_eq!(rec.writes, 1);
        assert_eq!(rec.flushes, 1);
        assert!(out.is_empty());
    }

    #[test]
    fn flush_to_empty_still_flushes() {
        let mut out = OutputBuffer::new();
        let mut rec = Recorder::default();
        out.flush_to(&mut rec).unwrap();
        assert_eq!(rec.writes, 0);
        assert_eq!(rec.flushes, 1);
    }
}
