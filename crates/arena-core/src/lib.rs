//! Core types and definitions for the ARENA simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, configuration, commands, input mapping, state snapshots,
//! events, and constants. It has no dependency on any runtime or renderer.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod input;
pub mod state;
pub mod types;
