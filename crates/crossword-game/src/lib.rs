//! Crossword interaction engine.
//!
//! This crate drives play on a [`Puzzle`](crossword_core::Puzzle): which cell is
//! active, which word and direction are highlighted, what happens when letters
//! are typed, and whether the answers are right.
//!
//! - [`navigation`]: the pure cursor/direction/word state machine
//! - [`entry`]: letter normalization and auto-advance
//! - [`check`]: answer checking
//! - [`Game`]: a puzzle together with its navigation state
//! - [`PuzzleSession`]: the load lifecycle, discarding superseded results
//!
//! None of these types know about rendering. Transitions return the position
//! that should receive input focus, and the host UI decides how to focus it.

pub use self::{check::*, entry::*, error::*, game::*, navigation::*, session::*};

pub mod check;
pub mod entry;
mod error;
mod game;
pub mod navigation;
mod session;
#[cfg(test)]
mod testing;
