//! Command-line interface for the game-tree engine.
//! This module is not part of the public library API.

pub mod args;
pub mod commands;
pub mod renderer;

pub use args::GameTree;
