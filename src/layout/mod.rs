//! Conflict-free planar layout of a tree.
//!
//! Two passes over the arena. The first runs post-order and records how much horizontal
//! space every subtree needs: a leaf takes one node width, an internal node the sum of its
//! children plus fixed spacing between neighbours. The second runs pre-order from the root
//! at `x = 0`, splitting each node's span among its children left to right and centering
//! every child in its share. A node therefore always sits at the midpoint of its own span,
//! and sibling spans never overlap.
//!
//! Layout depends only on the shape of the tree, never on search results.


use log::debug;

use crate::tree::{NodeId, Position, Tree};

const DEFAULT_NODE_WIDTH: f32 = 1.0;
const DEFAULT_SIBLING_SPACING: f32 = 0.25;
const DEFAULT_LEVEL_SPACING: f32 = 1.5;

/// Children per level before the vertical spacing grows another step.
const BRANCHING_PER_LEVEL_STEP: usize = 7;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutConfig {
    pub node_width: f32,
    pub sibling_spacing: f32,
    pub level_spacing: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_width: DEFAULT_NODE_WIDTH,
            sibling_spacing: DEFAULT_SIBLING_SPACING,
            level_spacing: DEFAULT_LEVEL_SPACING,
        }
    }
}

impl LayoutConfig {
    /// Default widths, with level spacing stretched for wide trees so crowded levels
    /// stay readable.
    pub fn for_tree(tree: &Tree) -> Self {
        let steps = (tree.max_branching() + BRANCHING_PER_LEVEL_STEP - 1) / BRANCHING_PER_LEVEL_STEP;
        Self {
            level_spacing: DEFAULT_LEVEL_SPACING * steps.max(1) as f32,
            ..Self::default()
        }
    }
}

/// Writes `subtree_width` and `position` into every node of the tree.
pub fn apply_layout(tree: &mut Tree, config: &LayoutConfig) {
    measure(tree, config);
    place(tree, config);
    debug!(
        "Laid out {} nodes, total width {}",
        tree.node_count(),
        tree[tree.root()].subtree_width().unwrap_or(0.0)
    );
}

/// Horizontal space the subtree under `id` needs, computed without touching the tree.
pub fn space_under(tree: &Tree, id: NodeId, config: &LayoutConfig) -> f32 {
    let node = &tree[id];
    if node.is_leaf() {
        return config.node_width;
    }
    let children = node.children();
    let widths: f32 = children
        .iter()
        .map(|&child| space_under(tree, child, config))
        .sum();
    widths + gaps(children.len(), config)
}

fn gaps(child_count: usize, config: &LayoutConfig) -> f32 {
    child_count.saturating_sub(1) as f32 * config.sibling_spacing
}

fn measure(tree: &mut Tree, config: &LayoutConfig) {
    // reverse pre-order visits every child before its parent
    let order = tree.subtree(tree.root());
    for &id in order.iter().rev() {
        let width = if tree[id].is_leaf() {
            config.node_width
        } else {
            let children = tree[id].children();
            let widths: f32 = children
                .iter()
                .map(|&child| tree[child].subtree_width().unwrap_or(config.node_width))
                .sum();
            widths + gaps(children.len(), config)
        };
        tree.node_mut(id).subtree_width = Some(width);
    }
}

fn place(tree: &mut Tree, config: &LayoutConfig) {
    let root = tree.root();
    tree.node_mut(root).position = Some(Position { x: 0.0, y: 0.0 });

    for id in tree.subtree(root) {
        let (x, width) = match (tree[id].position(), tree[id].subtree_width()) {
            (Some(position), Some(width)) => (position.x, width),
            _ => continue,
        };
        let children: Vec<NodeId> = tree[id].children().to_vec();
        let mut edge = x - width / 2.0;

        for child in children {
            let child_width = tree[child].subtree_width().unwrap_or(config.node_width);
            let y = tree[child].depth() as f32 * config.level_spacing;
            tree.node_mut(child).position = Some(Position {
                x: edge + child_width / 2.0,
                y,
            });
            edge += child_width + config.sibling_spacing;
        }
    }
}
