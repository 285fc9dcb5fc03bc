//! The search tree: an arena of nodes owned by a single `Tree`.
//!
//! Nodes are stored in a `Vec` and addressed by `NodeId`, which doubles as the order in
//! which nodes were created. Child lists keep left-to-right order, and every node keeps a
//! non-owning `parent` id for ascent. The tree carries no algorithm of its own; the layout
//! pass writes geometry into it and the search engines write values and marks.

mod display;
mod node;
mod node_type;
mod value_range;

#[cfg(test)]
mod tests;

use std::ops::Index;

pub use node::{Node, NodeId, NodeMark, Position};
pub use node_type::NodeType;
pub use value_range::ValueRange;

#[derive(Clone, Debug)]
pub struct Tree {
    nodes: Vec<Node>,
    depth: usize,
    value_range: Option<ValueRange>,
}

impl Tree {
    /// Creates a tree holding only a root of the given type.
    pub fn new(root_type: NodeType) -> Self {
        Self {
            nodes: vec![Node::new(NodeId(0), root_type, None, 0, None)],
            depth: 0,
            value_range: None,
        }
    }

    /// Creates a root-only tree whose legal values are fixed up front rather than
    /// derived from its leaves.
    pub fn with_value_range(root_type: NodeType, value_range: ValueRange) -> Self {
        let mut tree = Self::new(root_type);
        tree.value_range = Some(value_range);
        tree
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of levels below the root.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn root_value(&self) -> Option<i32> {
        self.node(self.root()).value
    }

    /// The configured value range, or the span of the leaf values for hand-built trees.
    pub fn value_range(&self) -> ValueRange {
        if let Some(range) = self.value_range {
            return range;
        }

        let mut values = self
            .nodes
            .iter()
            .filter(|node| node.is_leaf())
            .filter_map(|node| node.value);
        let first = match values.next() {
            Some(value) => value,
            None => return ValueRange::new(0, 0),
        };
        values.fold(ValueRange::new(first, first), |range, value| {
            ValueRange::new(range.min.min(value), range.max.max(value))
        })
    }

    /// Appends a child under `parent`. Callers are responsible for type alternation;
    /// see `add_child` and `add_leaf` for the alternating shorthands.
    pub fn push_node(
        &mut self,
        parent: NodeId,
        node_type: NodeType,
        value: Option<i32>,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        let depth = self.nodes[parent.0].depth + 1;
        self.nodes
            .push(Node::new(id, node_type, Some(parent), depth, value));
        self.nodes[parent.0].children.push(id);
        self.depth = self.depth.max(depth);
        id
    }

    /// Appends an uninitialized child whose type is the opposite of its parent's.
    pub fn add_child(&mut self, parent: NodeId) -> NodeId {
        let node_type = self.nodes[parent.0].node_type.opposite();
        self.push_node(parent, node_type, None)
    }

    /// Appends a leaf with a known value, typed opposite to its parent.
    pub fn add_leaf(&mut self, parent: NodeId, value: i32) -> NodeId {
        let node_type = self.nodes[parent.0].node_type.opposite();
        self.push_node(parent, node_type, Some(value))
    }

    /// All nodes at the given level, left to right.
    pub fn nodes_at_depth(&self, depth: usize) -> Vec<NodeId> {
        let mut found = Vec::new();
        self.collect_at_depth(self.root(), depth, &mut found);
        found
    }

    fn collect_at_depth(&self, current: NodeId, target: usize, found: &mut Vec<NodeId>) {
        let node = self.node(current);
        if node.depth == target {
            found.push(current);
            return;
        }
        for &child in node.children.iter() {
            self.collect_at_depth(child, target, found);
        }
    }

    /// Every childless node, left to right.
    pub fn leaves(&self) -> Vec<NodeId> {
        self.subtree(self.root())
            .into_iter()
            .filter(|&id| self.node(id).is_leaf())
            .collect()
    }

    /// Number of nodes strictly below `id`.
    pub fn descendant_count(&self, id: NodeId) -> usize {
        self.node(id)
            .children
            .iter()
            .map(|&child| 1 + self.descendant_count(child))
            .sum()
    }

    /// `id` followed by all of its descendants in pre-order.
    pub fn subtree(&self, id: NodeId) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            order.push(current);
            stack.extend(self.node(current).children.iter().rev().copied());
        }
        order
    }

    pub fn max_branching(&self) -> usize {
        self.nodes
            .iter()
            .map(|node| node.children.len())
            .max()
            .unwrap_or(0)
    }

    /// True once every leaf has a value.
    pub fn is_complete(&self) -> bool {
        self.nodes
            .iter()
            .all(|node| !node.is_leaf() || !node.is_uninitialized())
    }

    /// True if a search has written into this tree.
    pub fn has_search_state(&self) -> bool {
        self.nodes.iter().any(|node| {
            node.mark != NodeMark::Unvisited || (!node.is_leaf() && !node.is_uninitialized())
        })
    }

    /// Clears values on internal nodes and every mark, so the tree can be searched again.
    pub fn reset_search(&mut self) {
        for node in self.nodes.iter_mut() {
            node.mark = NodeMark::Unvisited;
            if !node.is_leaf() {
                node.value = None;
            }
        }
    }

    /// Marks `id` and everything below it, leaving pruned nodes as they are.
    pub(crate) fn mark_subtree(&mut self, id: NodeId, mark: NodeMark) {
        for current in self.subtree(id) {
            let node = self.node_mut(current);
            if node.mark != NodeMark::Pruned {
                node.mark = mark;
            }
        }
    }
}

impl Index<NodeId> for Tree {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        self.node(id)
    }
}
