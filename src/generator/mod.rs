//! Random game-tree generation.

mod config;

#[cfg(test)]
mod tests;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::tree::{NodeId, Tree, ValueRange};

pub use config::{GenerateConfig, DEFAULT_NODE_CEILING};

#[derive(Error, Debug, PartialEq)]
pub enum GenerateError {
    #[error("invalid generation parameters: {msg}")]
    InvalidParameters { msg: String },
}

/// Builds a tree breadth-first: every node above `config.depth` gets a uniformly drawn
/// number of children, and every node on the last level becomes a leaf with a uniformly
/// drawn value. Internal nodes are left uninitialized.
///
/// The result depends only on `config` and the state of `rng`.
pub fn generate<R: Rng + ?Sized>(
    config: &GenerateConfig,
    rng: &mut R,
) -> Result<Tree, GenerateError> {
    config.validate()?;

    let value_range = ValueRange::new(config.min_val, config.max_val);
    let mut tree = Tree::with_value_range(config.root_type, value_range);
    let mut frontier: Vec<NodeId> = vec![tree.root()];

    for level in 1..=config.depth {
        let node_type = config.root_type.at_level(level);
        let mut next_level = Vec::new();
        for &parent in frontier.iter() {
            let child_count = rng.gen_range(config.min_children..=config.max_children);
            for _ in 0..child_count {
                next_level.push(tree.push_node(parent, node_type, None));
            }
        }
        debug!("Level {}: {} {} nodes", level, next_level.len(), node_type);
        frontier = next_level;
    }

    for &leaf in frontier.iter() {
        tree.node_mut(leaf).value = Some(rng.gen_range(config.min_val..=config.max_val));
    }

    info!(
        "Generated tree with {} nodes ({} leaves), depth {}, values in {}",
        tree.node_count(),
        frontier.len(),
        config.depth,
        value_range
    );
    Ok(tree)
}

/// Like `generate`, with a fresh `StdRng` seeded from `seed`.
pub fn generate_seeded(config: &GenerateConfig, seed: u64) -> Result<Tree, GenerateError> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate(config, &mut rng)
}
