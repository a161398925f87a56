//! # life-core: grid state and evolution for termlife
//!
//! - **[`grid`]**: `Grid` and `Cell`, allocation and random seeding
//! - **[`evolve`]**: edge-clamped neighbor counting and the two-phase
//!   B3/S23 transition
//! - **[`render`]**: turning a grid into positioned glyphs for the terminal

pub mod evolve;
pub mod grid;
pub mod render;
