use super::*;
use crate::game_tree;

fn sample_tree() -> Tree {
    // MAX root, three MIN children of uneven shape
    game_tree!(Max; [[3, 5], [2], [[1, 4], 8]])
}

#[test]
fn test_root_only_tree() {
    let tree = Tree::new(NodeType::Max);
    assert_eq!(tree.node_count(), 1);
    assert_eq!(tree.depth(), 0);
    assert!(tree[tree.root()].is_leaf());
    assert_eq!(tree[tree.root()].parent(), None);
}

#[test]
fn test_macro_builds_alternating_types() {
    let tree = sample_tree();
    let root = tree.root();
    assert_eq!(tree[root].node_type(), NodeType::Max);
    for &child in tree[root].children() {
        assert_eq!(tree[child].node_type(), NodeType::Min);
        assert_eq!(tree[child].parent(), Some(root));
        for &grandchild in tree[child].children() {
            assert_eq!(tree[grandchild].node_type(), NodeType::Max);
        }
    }
}

#[test]
fn test_ids_follow_creation_order() {
    let tree = sample_tree();
    for (index, node) in tree.nodes().enumerate() {
        assert_eq!(node.id().index(), index);
    }
}

#[test]
fn test_internal_nodes_start_uninitialized() {
    let tree = sample_tree();
    for node in tree.nodes() {
        assert_eq!(node.is_leaf(), node.value().is_some());
        assert_eq!(node.is_uninitialized(), !node.is_leaf());
    }
    assert!(tree.is_complete());
}

#[test]
fn test_depth_tracks_deepest_level() {
    assert_eq!(sample_tree().depth(), 3);
}

#[test]
fn test_nodes_at_depth() {
    let tree = sample_tree();
    assert_eq!(tree.nodes_at_depth(0), vec![tree.root()]);
    assert_eq!(tree.nodes_at_depth(1).len(), 3);

    let values: Vec<_> = tree
        .nodes_at_depth(2)
        .iter()
        .map(|&id| tree[id].value())
        .collect();
    assert_eq!(values, vec![Some(3), Some(5), Some(2), None, Some(8)]);
    assert!(tree.nodes_at_depth(7).is_empty());
}

#[test]
fn test_leaves_left_to_right() {
    let tree = sample_tree();
    let values: Vec<_> = tree
        .leaves()
        .iter()
        .filter_map(|&id| tree[id].value())
        .collect();
    assert_eq!(values, vec![3, 5, 2, 1, 4, 8]);
}

#[test]
fn test_descendant_count() {
    let tree = sample_tree();
    assert_eq!(tree.descendant_count(tree.root()), tree.node_count() - 1);
    let third = tree[tree.root()].children()[2];
    assert_eq!(tree.descendant_count(third), 4);
    let leaf = tree.leaves()[0];
    assert_eq!(tree.descendant_count(leaf), 0);
}

#[test]
fn test_subtree_is_preorder() {
    let tree = game_tree!(Max; [[1, 2], [3]]);
    let order: Vec<_> = tree.subtree(tree.root()).iter().map(|id| id.index()).collect();
    // ids: root 0, first MIN 1, leaves 2 and 3, second MIN 4, leaf 5
    assert_eq!(order, vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn test_max_branching() {
    assert_eq!(sample_tree().max_branching(), 3);
    assert_eq!(Tree::new(NodeType::Min).max_branching(), 0);
}

#[test]
fn test_incomplete_tree() {
    let mut tree = Tree::new(NodeType::Max);
    let root = tree.root();
    tree.add_child(root);
    assert!(!tree.is_complete());
}

#[test]
fn test_value_range_derived_from_leaves() {
    let tree = game_tree!(Min; [[4, (-2)], [7]]);
    assert_eq!(tree.value_range(), ValueRange::new(-2, 7));
}

#[test]
fn test_configured_value_range_wins() {
    let mut tree = Tree::with_value_range(NodeType::Max, ValueRange::new(0, 100));
    let root = tree.root();
    tree.add_leaf(root, 40);
    assert_eq!(tree.value_range(), ValueRange::new(0, 100));
}

#[test]
fn test_mark_subtree_keeps_pruned() {
    let mut tree = game_tree!(Max; [[1, 2]]);
    let min_node = tree[tree.root()].children()[0];
    let second_leaf = tree[min_node].children()[1];
    tree.node_mut(second_leaf).mark = NodeMark::Pruned;

    tree.mark_subtree(min_node, NodeMark::Dominated);

    assert_eq!(tree[min_node].mark(), NodeMark::Dominated);
    assert_eq!(tree[second_leaf].mark(), NodeMark::Pruned);
}

#[test]
fn test_reset_search() {
    let mut tree = game_tree!(Max; [[1, 2]]);
    assert!(!tree.has_search_state());

    let min_node = tree[tree.root()].children()[0];
    tree.node_mut(min_node).value = Some(1);
    tree.node_mut(min_node).mark = NodeMark::Best;
    assert!(tree.has_search_state());

    tree.reset_search();
    assert!(!tree.has_search_state());
    assert_eq!(tree[min_node].value(), None);
    assert_eq!(tree.leaves().len(), 2);
    assert!(tree.is_complete());
}

#[test]
fn test_display_outline() {
    let tree = game_tree!(Max; [[3, 5]]);
    let rendered = tree.to_string();
    let lines: Vec<_> = rendered.lines().collect();
    assert_eq!(lines[0], "#0 MAX = ?");
    assert_eq!(lines[1], "  #1 MIN = ?");
    assert_eq!(lines[2], "    #2 leaf = 3");
    assert_eq!(lines[3], "    #3 leaf = 5");
}
