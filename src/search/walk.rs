//! Frame stack shared by both traversal engines.
//!
//! A `Walk` owns the mutable borrow of the tree, the stack of nodes whose evaluation
//! scope is open, and the queue of events produced by the last action. Engines decide
//! what happens when a child's value is known; everything else (entering a child,
//! closing a node, choosing the best move) is the same for both.

use std::collections::VecDeque;

use log::debug;

use super::{SearchError, SearchEvent, SearchStats, Window};
use crate::tree::{NodeId, NodeMark, NodeType, Tree, ValueRange};

pub(crate) struct Frame {
    pub node: NodeId,
    pub node_type: NodeType,
    pub next_child: usize,
    /// Running best value among the children seen so far.
    pub value: i32,
    pub window: Window,
    /// Set when the window closed with siblings still unvisited.
    pub cutoff: bool,
}

/// What the walk should do next.
pub(crate) enum Action {
    Start,
    Enter(NodeId),
    Settle { child: NodeId, value: i32 },
    Cutoff,
    Close,
}

pub(crate) struct Walk<'t> {
    tree: &'t mut Tree,
    range: ValueRange,
    stack: Vec<Frame>,
    pending: VecDeque<SearchEvent>,
    started: bool,
    done: bool,
    stats: SearchStats,
}

impl<'t> Walk<'t> {
    /// Rejects trees that cannot be searched before anything is emitted.
    pub fn new(tree: &'t mut Tree) -> Result<Self, SearchError> {
        if !tree.is_complete() {
            return Err(SearchError::TraversalMisuse {
                msg: "tree is still being built: a leaf has no value",
            });
        }
        if tree[tree.root()].is_leaf() {
            return Err(SearchError::TraversalMisuse {
                msg: "root has no children to choose between",
            });
        }
        if tree.root_value().is_some() {
            return Err(SearchError::TraversalMisuse {
                msg: "tree has already been fully evaluated",
            });
        }
        if tree.has_search_state() {
            return Err(SearchError::TraversalMisuse {
                msg: "tree carries state from an earlier traversal",
            });
        }
        let range = tree.value_range();
        if !range.has_sentinels() {
            return Err(SearchError::TraversalMisuse {
                msg: "leaf values leave no room for search sentinels",
            });
        }
        let out_of_range = tree
            .leaves()
            .into_iter()
            .filter_map(|leaf| tree[leaf].value())
            .any(|value| !range.contains(value));
        if out_of_range {
            return Err(SearchError::TraversalMisuse {
                msg: "a leaf value lies outside the tree's value range",
            });
        }

        Ok(Self {
            tree,
            range,
            stack: Vec::new(),
            pending: VecDeque::new(),
            started: false,
            done: false,
            stats: SearchStats::default(),
        })
    }

    pub fn tree(&self) -> &Tree {
        &*self.tree
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn top(&self) -> Option<&Frame> {
        self.stack.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut Frame> {
        self.stack.last_mut()
    }

    /// The widest window the value range allows.
    pub fn full_window(&self) -> Window {
        // has_sentinels was checked in new
        Window::new(
            self.range.lower_sentinel().unwrap_or(i32::MIN),
            self.range.upper_sentinel().unwrap_or(i32::MAX),
        )
    }

    pub fn emit(&mut self, event: SearchEvent) {
        self.pending.push_back(event);
    }

    /// Pulls the next queued event, or runs `advance` until one is queued.
    /// A failed action ends the walk; nothing is emitted after the error.
    pub fn next_with<F>(&mut self, mut advance: F) -> Option<Result<SearchEvent, SearchError>>
    where
        F: FnMut(&mut Self) -> Result<(), SearchError>,
    {
        loop {
            if let Some(event) = self.pending.pop_front() {
                self.stats.steps += 1;
                return Some(Ok(event));
            }
            if self.done {
                return None;
            }
            if let Err(err) = advance(self) {
                self.done = true;
                self.pending.clear();
                return Some(Err(err));
            }
        }
    }

    pub fn next_action(&self) -> Result<Action, SearchError> {
        if !self.started {
            return Ok(Action::Start);
        }
        // closing the root ends the walk, so an empty stack is never asked for work
        let frame = match self.stack.last() {
            Some(frame) => frame,
            None => {
                return Err(SearchError::TraversalMisuse {
                    msg: "walk has already finished",
                })
            }
        };
        if frame.cutoff {
            return Ok(Action::Cutoff);
        }

        let children = self.tree[frame.node].children();
        let child = match children.get(frame.next_child) {
            Some(&child) => child,
            None => return Ok(Action::Close),
        };
        let child_node = &self.tree[child];
        match child_node.value() {
            Some(value) => Ok(Action::Settle { child, value }),
            None if !child_node.is_leaf() => Ok(Action::Enter(child)),
            None => Err(SearchError::TraversalMisuse {
                msg: "leaf lost its value during traversal",
            }),
        }
    }

    pub fn start(&mut self, window: Window) -> Result<(), SearchError> {
        self.started = true;
        let root = self.tree.root();
        self.open(root, window)
    }

    /// Opens the evaluation scope of an uninitialized child of the top frame.
    pub fn enter(&mut self, child: NodeId) -> Result<(), SearchError> {
        let (parent_type, window) = match self.stack.last() {
            Some(frame) => (frame.node_type, frame.window),
            None => return Ok(()),
        };
        if self.tree[child].node_type() == parent_type {
            return Err(SearchError::InvalidNodeType { node: child });
        }
        self.open(child, window)
    }

    fn open(&mut self, node: NodeId, window: Window) -> Result<(), SearchError> {
        let node_type = self.tree[node].node_type();
        let value = node_type
            .initial_value(self.range)
            .ok_or(SearchError::TraversalMisuse {
                msg: "leaf values leave no room for search sentinels",
            })?;
        debug!("Descending into {} ({}) with {}", node, node_type, window);

        self.stack.push(Frame {
            node,
            node_type,
            next_child: 0,
            value,
            window,
            cutoff: false,
        });
        self.stats.nodes_entered += 1;
        self.emit(SearchEvent::Descend { node });
        Ok(())
    }

    /// Folds a known child value into the top frame, updates marks, and emits the
    /// value and classification steps.
    pub fn settle(&mut self, child: NodeId, value: i32) {
        let (node, index, best_so_far, running) = match self.stack.last_mut() {
            Some(frame) => {
                let best_so_far = frame.node_type.improves(value, frame.value);
                frame.value = frame.node_type.pick(frame.value, value);
                let index = frame.next_child;
                frame.next_child += 1;
                (frame.node, index, best_so_far, frame.value)
            }
            None => return,
        };

        if best_so_far {
            let earlier: Vec<NodeId> = self.tree[node].children()[..index].to_vec();
            for sibling in earlier {
                self.tree.mark_subtree(sibling, NodeMark::Dominated);
            }
            self.tree.node_mut(child).mark = NodeMark::Best;
        } else {
            self.tree.mark_subtree(child, NodeMark::Dominated);
        }

        self.stats.children_classified += 1;
        self.emit(SearchEvent::ValueAssigned {
            node,
            value: running,
        });
        self.emit(SearchEvent::ChildClassified {
            node,
            child,
            best_so_far,
        });
    }

    /// Marks every unvisited child of the top frame, and their subtrees, as pruned.
    pub fn prune_remaining(&mut self) {
        let (node, from) = match self.stack.last_mut() {
            Some(frame) => {
                frame.cutoff = false;
                (frame.node, frame.next_child)
            }
            None => return,
        };

        let remaining: Vec<NodeId> = self.tree[node].children()[from..].to_vec();
        for &sibling in remaining.iter() {
            let subtree = self.tree.subtree(sibling);
            self.stats.nodes_pruned += subtree.len();
            for id in subtree {
                self.tree.node_mut(id).mark = NodeMark::Pruned;
            }
            debug!("Pruning {} under {}", sibling, node);
            self.emit(SearchEvent::Pruned { node: sibling });
        }

        if let Some(frame) = self.stack.last_mut() {
            frame.next_child = self.tree[node].children().len();
        }
    }

    /// Writes the final value of the top frame into the tree and leaves its scope.
    /// Closing the root also picks the best move and ends the walk.
    pub fn close(&mut self) {
        let frame = match self.stack.pop() {
            Some(frame) => frame,
            None => return,
        };
        self.tree.node_mut(frame.node).value = Some(frame.value);
        self.emit(SearchEvent::Ascend { node: frame.node });

        if self.stack.is_empty() {
            let root = frame.node;
            // first child holding the root value; ties favour the earliest
            let best_child = self.tree[root]
                .children()
                .iter()
                .copied()
                .find(|&child| self.tree[child].value() == Some(frame.value));
            if let Some(best_child) = best_child {
                debug!("Best move {} with value {}", best_child, frame.value);
                self.emit(SearchEvent::BestMove { root, best_child });
            }
            self.done = true;
        }
    }

}
