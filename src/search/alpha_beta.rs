//! Minimax with alpha-beta pruning.
//!
//! Same recurrence and step vocabulary as `MinimaxSearch`, plus a window per open node.
//! A child inherits its parent's window as it stood when the child was entered. After a
//! child settles, the window is tightened with the running value; if it has closed and
//! siblings remain, they are pruned as the next action. A closed window after the last
//! child prunes nothing.

use log::debug;

use super::walk::{Action, Walk};
use super::{Search, SearchError, SearchEvent, SearchStats, Window};
use crate::tree::{NodeType, Tree};

pub struct AlphaBetaSearch<'t> {
    walk: Walk<'t>,
}

impl<'t> AlphaBetaSearch<'t> {
    /// Fails with `TraversalMisuse` if the tree is unfinished or already searched.
    pub fn new(tree: &'t mut Tree) -> Result<Self, SearchError> {
        Ok(Self {
            walk: Walk::new(tree)?,
        })
    }

    pub fn tree(&self) -> &Tree {
        self.walk.tree()
    }

    pub fn stats(&self) -> SearchStats {
        self.walk.stats()
    }

    /// Window of the innermost open node, if the search is under way.
    pub fn window(&self) -> Option<Window> {
        self.walk.top().map(|frame| frame.window)
    }

    fn advance(walk: &mut Walk<'_>) -> Result<(), SearchError> {
        match walk.next_action()? {
            Action::Start => {
                let window = walk.full_window();
                walk.start(window)
            }
            Action::Enter(child) => walk.enter(child),
            Action::Settle { child, value } => {
                walk.settle(child, value);
                Self::tighten_window(walk);
                Ok(())
            }
            Action::Cutoff => {
                walk.prune_remaining();
                Ok(())
            }
            Action::Close => {
                walk.close();
                Ok(())
            }
        }
    }

    fn tighten_window(walk: &mut Walk<'_>) {
        let node = match walk.top() {
            Some(frame) => frame.node,
            None => return,
        };
        let child_count = walk.tree()[node].children().len();

        let (before, after, cutoff) = match walk.top_mut() {
            Some(frame) => {
                let before = frame.window;
                match frame.node_type {
                    NodeType::Max => frame.window.alpha = frame.window.alpha.max(frame.value),
                    NodeType::Min => frame.window.beta = frame.window.beta.min(frame.value),
                }
                frame.cutoff = frame.window.is_closed() && frame.next_child < child_count;
                (before, frame.window, frame.cutoff)
            }
            None => return,
        };

        if after != before {
            walk.emit(SearchEvent::WindowUpdated {
                alpha: after.alpha,
                beta: after.beta,
            });
        }
        if cutoff {
            debug!("Window closed at {} ({}), pruning remaining children", node, after);
        }
    }
}

impl<'t> Iterator for AlphaBetaSearch<'t> {
    type Item = Result<SearchEvent, SearchError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.walk.next_with(Self::advance)
    }
}

impl<'t> Search for AlphaBetaSearch<'t> {
    fn tree(&self) -> &Tree {
        self.walk.tree()
    }

    fn stats(&self) -> SearchStats {
        self.walk.stats()
    }
}
