//! Step-by-step minimax and alpha-beta traversal of a generated tree.
//!
//! # Stepping
//!
//! Both engines are iterators over `Result<SearchEvent, SearchError>`. Each call to `next`
//! yields exactly one observable step: entering or leaving a node, a running value, the
//! verdict on a child, a narrowed window, a pruned sibling, or the final best move. The
//! engines impose no timing; whoever drives the iterator decides how fast to pull. Dropping
//! an engine part-way is a clean cancellation: every write made so far is valid tree state.
//!
//! An engine holds the tree's only mutable borrow for as long as it lives, so two engines
//! can never walk the same tree at once. `tree()` gives read access between steps.
//!
//! # Values
//!
//! A running value starts one past the worst legal leaf value for the node's player and
//! improves only on a strictly better child, so the earliest of equal children wins. An
//! internal node's value is written once, when its scope closes.
//!
//! # Pruning
//!
//! Alpha-beta carries `(alpha, beta)` down by value. After each child the MAX player raises
//! alpha and the MIN player lowers beta; once `beta <= alpha` with siblings left, the rest
//! are marked pruned and never entered. Pruned nodes keep no value.

pub mod alpha_beta;
pub mod minimax;

mod event;
mod observer;
mod walk;


use thiserror::Error;

use crate::tree::{NodeId, Tree};

pub use alpha_beta::AlphaBetaSearch;
pub use event::{SearchEvent, Window};
pub use minimax::MinimaxSearch;
pub use observer::SearchObserver;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SearchError {
    #[error("{node} has the same node type as its parent")]
    InvalidNodeType { node: NodeId },
    #[error("cannot traverse tree: {msg}")]
    TraversalMisuse { msg: &'static str },
}

/// Counters collected while a search runs.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SearchStats {
    /// Nodes whose evaluation scope was opened, root included.
    pub nodes_entered: usize,
    /// Children whose value was folded into a parent.
    pub children_classified: usize,
    /// Nodes marked pruned, descendants included.
    pub nodes_pruned: usize,
    /// Events handed out so far.
    pub steps: usize,
}

impl SearchStats {
    /// Distinct nodes whose value took part in the search.
    pub fn nodes_visited(&self) -> usize {
        self.children_classified + 1
    }
}

/// A resumable traversal of a tree.
pub trait Search: Iterator<Item = Result<SearchEvent, SearchError>> {
    fn tree(&self) -> &Tree;

    fn stats(&self) -> SearchStats;
}

/// Result of running a search to completion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchOutcome {
    pub root_value: i32,
    pub best_child: NodeId,
    pub stats: SearchStats,
}

/// Runs `search` to the end, handing every step to `observer`.
pub fn drive<S, O>(mut search: S, observer: &mut O) -> Result<SearchOutcome, SearchError>
where
    S: Search,
    O: SearchObserver + ?Sized,
{
    let mut best_child = None;
    while let Some(step) = search.next() {
        let event = step?;
        if let SearchEvent::BestMove { best_child: child, .. } = event {
            best_child = Some(child);
        }
        observer.observe(search.tree(), &event);
    }

    match (search.tree().root_value(), best_child) {
        (Some(root_value), Some(best_child)) => Ok(SearchOutcome {
            root_value,
            best_child,
            stats: search.stats(),
        }),
        _ => Err(SearchError::TraversalMisuse {
            msg: "search ended without choosing a move",
        }),
    }
}
