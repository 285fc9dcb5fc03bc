use super::SearchEvent;
use crate::tree::{NodeId, Tree};

/// Receives the steps of a search. Every callback defaults to doing nothing, so a
/// presentation layer only implements the ones it renders.
pub trait SearchObserver {
    fn on_descend(&mut self, _tree: &Tree, _node: NodeId) {}

    fn on_ascend(&mut self, _tree: &Tree, _node: NodeId) {}

    fn on_value_assigned(&mut self, _tree: &Tree, _node: NodeId, _value: i32) {}

    fn on_child_classified(
        &mut self,
        _tree: &Tree,
        _node: NodeId,
        _child: NodeId,
        _best_so_far: bool,
    ) {
    }

    fn on_window_updated(&mut self, _tree: &Tree, _alpha: i32, _beta: i32) {}

    fn on_pruned(&mut self, _tree: &Tree, _node: NodeId) {}

    fn on_best_move(&mut self, _tree: &Tree, _root: NodeId, _best_child: NodeId) {}

    /// Routes one event to its callback.
    fn observe(&mut self, tree: &Tree, event: &SearchEvent) {
        match *event {
            SearchEvent::Descend { node } => self.on_descend(tree, node),
            SearchEvent::Ascend { node } => self.on_ascend(tree, node),
            SearchEvent::ValueAssigned { node, value } => {
                self.on_value_assigned(tree, node, value)
            }
            SearchEvent::ChildClassified {
                node,
                child,
                best_so_far,
            } => self.on_child_classified(tree, node, child, best_so_far),
            SearchEvent::WindowUpdated { alpha, beta } => {
                self.on_window_updated(tree, alpha, beta)
            }
            SearchEvent::Pruned { node } => self.on_pruned(tree, node),
            SearchEvent::BestMove { root, best_child } => {
                self.on_best_move(tree, root, best_child)
            }
        }
    }
}

/// Records every event in order.
impl SearchObserver for Vec<SearchEvent> {
    fn observe(&mut self, _tree: &Tree, event: &SearchEvent) {
        self.push(*event);
    }
}
