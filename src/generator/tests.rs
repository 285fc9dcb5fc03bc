use super::*;
use crate::tree::NodeType;

fn assert_invalid(config: GenerateConfig) {
    match generate_seeded(&config, 7) {
        Err(GenerateError::InvalidParameters { .. }) => {}
        other => panic!("expected InvalidParameters, got {:?}", other.map(|t| t.node_count())),
    }
}

#[test]
fn test_default_config_is_valid() {
    assert!(GenerateConfig::default().validate().is_ok());
}

#[test]
fn test_rejects_zero_min_children() {
    assert_invalid(GenerateConfig::default().with_children(0, 3));
}

#[test]
fn test_rejects_max_below_min_children() {
    assert_invalid(GenerateConfig::default().with_children(4, 2));
}

#[test]
fn test_rejects_zero_depth() {
    assert_invalid(GenerateConfig::default().with_depth(0));
}

#[test]
fn test_rejects_empty_value_range() {
    assert_invalid(GenerateConfig::default().with_values(5, 5));
    assert_invalid(GenerateConfig::default().with_values(9, 1));
}

#[test]
fn test_rejects_values_without_sentinel_room() {
    assert_invalid(GenerateConfig::default().with_values(i32::MIN, 0));
    assert_invalid(GenerateConfig::default().with_values(0, i32::MAX));
}

#[test]
fn test_rejects_projection_over_ceiling() {
    // mean branching 5, depth 5: 3126 projected nodes
    assert_invalid(GenerateConfig::default().with_children(5, 5).with_depth(5));
}

#[test]
fn test_rejects_huge_child_counts() {
    let config = GenerateConfig::default().with_children(1, usize::MAX);
    assert!(config.projected_node_count() > DEFAULT_NODE_CEILING);
    assert!(config.validate().is_err());
    assert_invalid(GenerateConfig::default().with_children(usize::MAX, usize::MAX));
}

#[test]
fn test_projection_at_ceiling_is_accepted() {
    let config = GenerateConfig::default()
        .with_children(2, 2)
        .with_depth(3)
        .with_node_ceiling(9.0);
    assert_eq!(config.projected_node_count(), 9.0);
    assert!(config.validate().is_ok());
}

#[test]
fn test_error_message() {
    let err = GenerateConfig::default()
        .with_children(0, 2)
        .validate()
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid generation parameters: min children must be at least 1"
    );
}

#[test]
fn test_fixed_branching_shape() {
    let config = GenerateConfig::default().with_children(2, 2).with_depth(2);
    let tree = generate_seeded(&config, 1).unwrap();
    assert_eq!(tree.node_count(), 7);
    assert_eq!(tree.depth(), 2);
    assert_eq!(tree.leaves().len(), 4);
    assert_eq!(tree.nodes_at_depth(1).len(), 2);
}

#[test]
fn test_generated_tree_invariants() {
    let config = GenerateConfig::default()
        .with_children(1, 4)
        .with_depth(4)
        .with_values(-10, 10);

    for seed in 0..50 {
        let tree = generate_seeded(&config, seed).unwrap();
        assert_eq!(tree.value_range(), ValueRange::new(-10, 10));
        assert!(tree.is_complete());
        assert!(!tree.has_search_state());

        for node in tree.nodes() {
            assert_eq!(node.node_type(), NodeType::Max.at_level(node.depth()));
            if node.depth() == config.depth {
                assert!(node.is_leaf());
                assert!(tree.value_range().contains(node.value().unwrap()));
            } else {
                let count = node.children().len();
                assert!((1..=4).contains(&count));
                assert_eq!(node.value(), None);
            }
        }
    }
}

#[test]
fn test_ids_are_breadth_first() {
    let config = GenerateConfig::default().with_children(1, 3).with_depth(3);
    let tree = generate_seeded(&config, 3).unwrap();
    let depths: Vec<_> = tree.nodes().map(|node| node.depth()).collect();
    let mut sorted = depths.clone();
    sorted.sort();
    assert_eq!(depths, sorted);
}

#[test]
fn test_root_type_is_configurable() {
    let config = GenerateConfig::default().with_root_type(NodeType::Min);
    let tree = generate_seeded(&config, 11).unwrap();
    assert_eq!(tree[tree.root()].node_type(), NodeType::Min);
    for &child in tree[tree.root()].children() {
        assert_eq!(tree[child].node_type(), NodeType::Max);
    }
}

#[test]
fn test_same_seed_same_tree() {
    let config = GenerateConfig::default().with_children(1, 5).with_depth(4);
    let first = generate_seeded(&config, 42).unwrap();
    let second = generate_seeded(&config, 42).unwrap();

    assert_eq!(first.node_count(), second.node_count());
    for (a, b) in first.nodes().zip(second.nodes()) {
        assert_eq!(a.children(), b.children());
        assert_eq!(a.value(), b.value());
        assert_eq!(a.node_type(), b.node_type());
    }
}

#[test]
fn test_calls_share_no_state() {
    let config = GenerateConfig::default();
    let expected = generate_seeded(&config, 5).unwrap().to_string();
    // an unrelated generation in between must not disturb the next one
    generate_seeded(&config, 6).unwrap();
    assert_eq!(generate_seeded(&config, 5).unwrap().to_string(), expected);
}
