//! CLI command implementations.

pub trait Command {
    fn execute(self);
}

pub mod alpha_beta;
pub mod compare;
pub mod generate;
pub mod minimax;

// Shared utilities for commands
pub(crate) mod util;
