use std::fmt;

use crate::tree::NodeId;

/// The `(alpha, beta)` bounds carried down an alpha-beta search.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Window {
    pub alpha: i32,
    pub beta: i32,
}

impl Window {
    pub fn new(alpha: i32, beta: i32) -> Self {
        Self { alpha, beta }
    }

    /// Once closed, no remaining sibling can change the parent's choice.
    pub fn is_closed(&self) -> bool {
        self.beta <= self.alpha
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "alpha = {}, beta = {}", self.alpha, self.beta)
    }
}

/// One externally observable step of a traversal.
///
/// A leaf's value is already known, so reaching a leaf produces no event of its own: the
/// parent's `ValueAssigned` carries the running value after folding the leaf in, and
/// `ChildClassified` names the leaf as `child`. Internal children are bracketed by
/// `Descend` and `Ascend` before the parent folds them in the same way.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SearchEvent {
    Descend {
        node: NodeId,
    },
    Ascend {
        node: NodeId,
    },
    ValueAssigned {
        node: NodeId,
        value: i32,
    },
    ChildClassified {
        node: NodeId,
        child: NodeId,
        best_so_far: bool,
    },
    WindowUpdated {
        alpha: i32,
        beta: i32,
    },
    Pruned {
        node: NodeId,
    },
    BestMove {
        root: NodeId,
        best_child: NodeId,
    },
}

impl SearchEvent {
    /// The node the step is about, if any.
    pub fn node(&self) -> Option<NodeId> {
        match *self {
            SearchEvent::Descend { node }
            | SearchEvent::Ascend { node }
            | SearchEvent::ValueAssigned { node, .. }
            | SearchEvent::ChildClassified { node, .. }
            | SearchEvent::Pruned { node } => Some(node),
            SearchEvent::BestMove { root, .. } => Some(root),
            SearchEvent::WindowUpdated { .. } => None,
        }
    }
}

impl fmt::Display for SearchEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchEvent::Descend { node } => write!(f, "Evaluating {}", node),
            SearchEvent::Ascend { node } => write!(f, "Returning to parent of {}", node),
            SearchEvent::ValueAssigned { node, value } => write!(f, "{} = {}", node, value),
            SearchEvent::ChildClassified {
                child,
                best_so_far: true,
                ..
            } => write!(f, "{} is currently the best option", child),
            SearchEvent::ChildClassified {
                child,
                best_so_far: false,
                ..
            } => write!(f, "Previous options are better, discarding {}", child),
            SearchEvent::WindowUpdated { alpha, beta } => {
                write!(f, "Window narrowed to {}", Window::new(*alpha, *beta))
            }
            SearchEvent::Pruned { node } => write!(f, "Beta <= alpha, pruning {}", node),
            SearchEvent::BestMove { best_child, .. } => {
                write!(f, "Tree parsed! The best move is {}", best_child)
            }
        }
    }
}
