use std::fmt;

use super::{NodeId, NodeMark, Tree};

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.fmt_node(f, self.root())
    }
}

impl Tree {
    fn fmt_node(&self, f: &mut fmt::Formatter, id: NodeId) -> fmt::Result {
        let node = self.node(id);
        let value = node
            .value
            .map_or_else(|| "?".to_string(), |value| value.to_string());
        let kind = if node.is_leaf() {
            "leaf".to_string()
        } else {
            node.node_type.to_string()
        };

        write!(f, "{:indent$}{} {} = {}", "", id, kind, value, indent = node.depth * 2)?;
        if node.mark != NodeMark::Unvisited {
            write!(f, " ({})", node.mark)?;
        }
        writeln!(f)?;

        for &child in node.children.iter() {
            self.fmt_node(f, child)?;
        }
        Ok(())
    }
}

/// Builds a `Tree` from nested brackets. Each bracket group is an internal node, each
/// other token a leaf value; negative values go in parentheses. Types alternate from the
/// given root type.
///
/// ```
/// use gametree::game_tree;
///
/// let tree = game_tree!(Max; [[3, 5], [2, (-9)]]);
/// assert_eq!(tree.leaves().len(), 4);
/// ```
#[macro_export]
macro_rules! game_tree {
    ($root_type:ident; [$($child:tt),* $(,)?]) => {{
        let mut tree = $crate::tree::Tree::new($crate::tree::NodeType::$root_type);
        let root = tree.root();
        $( $crate::game_tree!(@node tree, root, $child); )*
        tree
    }};
    (@node $tree:ident, $parent:expr, [$($child:tt),* $(,)?]) => {{
        let node = $tree.add_child($parent);
        $( $crate::game_tree!(@node $tree, node, $child); )*
    }};
    (@node $tree:ident, $parent:expr, $value:tt) => {{
        $tree.add_leaf($parent, $value);
    }};
}
