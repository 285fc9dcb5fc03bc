//! Full-width minimax: every child of every node is evaluated.

use super::walk::{Action, Walk};
use super::{Search, SearchError, SearchEvent, SearchStats};
use crate::tree::Tree;

pub struct MinimaxSearch<'t> {
    walk: Walk<'t>,
}

impl<'t> MinimaxSearch<'t> {
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

    fn advance(walk: &mut Walk<'_>) -> Result<(), SearchError> {
        match walk.next_action()? {
            Action::Start => {
                let window = walk.full_window();
                walk.start(window)
            }
            Action::Enter(child) => walk.enter(child),
            Action::Settle { child, value } => {
                walk.settle(child, value);
                Ok(())
            }
            // frames opened here never set a cutoff
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
}

impl<'t> Iterator for MinimaxSearch<'t> {
    type Item = Result<SearchEvent, SearchError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.walk.next_with(Self::advance)
    }
}

impl<'t> Search for MinimaxSearch<'t> {
    fn tree(&self) -> &Tree {
        self.walk.tree()
    }

    fn stats(&self) -> SearchStats {
        self.walk.stats()
    }
}
