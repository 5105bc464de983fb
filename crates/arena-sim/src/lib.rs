//! Simulation engine for ARENA.
//!
//! Owns the entity store, runs systems in a fixed order once per frame,
//! and produces `GameStateSnapshot`s for the renderer.

pub mod clock;
pub mod engine;
pub mod random;
pub mod store;
pub mod systems;
pub mod world_setup;

pub use arena_core as core;
pub use engine::SimulationEngine;
