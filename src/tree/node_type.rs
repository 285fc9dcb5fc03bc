use std::fmt;
use std::str::FromStr;

use super::ValueRange;

/// Which player chooses at a node. Types alternate strictly from one level to the next.
#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash)]
pub enum NodeType {
    Max,
    Min,
}

impl NodeType {
    pub fn opposite(&self) -> Self {
        match self {
            NodeType::Max => NodeType::Min,
            NodeType::Min => NodeType::Max,
        }
    }

    /// The type of a node `level` steps below a root of type `self`.
    pub fn at_level(&self, level: usize) -> Self {
        if level % 2 == 0 {
            *self
        } else {
            self.opposite()
        }
    }

    /// Starting accumulator for this node type: one past the worst legal value.
    /// `None` when the range touches the edge of `i32`.
    pub fn initial_value(&self, range: ValueRange) -> Option<i32> {
        match self {
            NodeType::Max => range.lower_sentinel(),
            NodeType::Min => range.upper_sentinel(),
        }
    }

    /// Strict comparison: a candidate equal to the current best never replaces it.
    pub fn improves(&self, candidate: i32, current: i32) -> bool {
        match self {
            NodeType::Max => candidate > current,
            NodeType::Min => candidate < current,
        }
    }

    /// The value this player prefers.
    pub fn pick(&self, a: i32, b: i32) -> i32 {
        match self {
            NodeType::Max => a.max(b),
            NodeType::Min => a.min(b),
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let type_str = match self {
            NodeType::Max => "MAX",
            NodeType::Min => "MIN",
        };
        write!(f, "{}", type_str)
    }
}

// used for parsing cli args
type ParseError = &'static str;
impl FromStr for NodeType {
    type Err = ParseError;
    fn from_str(node_type: &str) -> Result<Self, Self::Err> {
        match node_type {
            "max" | "MAX" => Ok(NodeType::Max),
            "min" | "MIN" => Ok(NodeType::Min),
            _ => Err("invalid node type; options are: max, min"),
        }
    }
}
