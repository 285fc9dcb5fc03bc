use std::fmt;

use smallvec::SmallVec;

use super::NodeType;

/// Index of a node inside its tree. Ids are handed out in generation order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Verdict on the edge from a node's parent to the node, as decided by a search.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum NodeMark {
    #[default]
    Unvisited,
    Best,
    Dominated,
    Pruned,
}

impl fmt::Display for NodeMark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark_str = match self {
            NodeMark::Unvisited => "unvisited",
            NodeMark::Best => "best",
            NodeMark::Dominated => "dominated",
            NodeMark::Pruned => "pruned",
        };
        write!(f, "{}", mark_str)
    }
}

/// Planar coordinates assigned by the layout pass. `y` grows downward per level.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

pub(crate) type Children = SmallVec<[NodeId; 4]>;

#[derive(Clone, Debug)]
pub struct Node {
    pub(crate) id: NodeId,
    pub(crate) node_type: NodeType,
    pub(crate) value: Option<i32>,
    pub(crate) children: Children,
    pub(crate) parent: Option<NodeId>,
    pub(crate) depth: usize,
    pub(crate) mark: NodeMark,
    pub(crate) position: Option<Position>,
    pub(crate) subtree_width: Option<f32>,
}

impl Node {
    pub(crate) fn new(
        id: NodeId,
        node_type: NodeType,
        parent: Option<NodeId>,
        depth: usize,
        value: Option<i32>,
    ) -> Self {
        Self {
            id,
            node_type,
            value,
            children: Children::new(),
            parent,
            depth,
            mark: NodeMark::Unvisited,
            position: None,
            subtree_width: None,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn node_type(&self) -> NodeType {
        self.node_type
    }

    pub fn value(&self) -> Option<i32> {
        self.value
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Level below the root; the root sits at 0.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn mark(&self) -> NodeMark {
        self.mark
    }

    pub fn position(&self) -> Option<Position> {
        self.position
    }

    pub fn subtree_width(&self) -> Option<f32> {
        self.subtree_width
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn is_uninitialized(&self) -> bool {
        self.value.is_none()
    }
}
