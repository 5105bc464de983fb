//! Headless ARENA host.
//!
//! Runs the simulation on its own thread at a fixed rate, turns raw key
//! events into per-tick input, and keeps the latest snapshot available to
//! whatever presents it.

pub mod game_loop;
pub mod input;
pub mod state;

pub use arena_core as core;
