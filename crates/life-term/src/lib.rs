// SPDX-License-Identifier: MIT
//
// life-term: terminal surface for termlife.
//
// Everything that touches the terminal lives here: the handful of escape
// sequences the simulator emits, the frame buffer that lets a whole
// generation land in one write, the TIOCGWINSZ size query, the SIGWINCH and
// SIGINT handlers, and the render loop that ties them together. The grid
// itself lives in life-core and never sees a file descriptor.

pub mod ansi;
pub mod event_loop;
pub mod output;
pub mod signal;
pub mod terminal;
