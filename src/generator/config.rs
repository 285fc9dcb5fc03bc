use std::convert::TryFrom;

use super::GenerateError;
use crate::tree::NodeType;

/// Projected node count above which generation is refused.
pub const DEFAULT_NODE_CEILING: f64 = 1050.0;

#[derive(Clone, Debug, PartialEq)]
pub struct GenerateConfig {
    pub min_children: usize,
    pub max_children: usize,
    /// Levels below the root; leaves live on this level.
    pub depth: usize,
    pub min_val: i32,
    pub max_val: i32,
    pub node_ceiling: f64,
    pub root_type: NodeType,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            min_children: 1,
            max_children: 3,
            depth: 3,
            min_val: 0,
            max_val: 20,
            node_ceiling: DEFAULT_NODE_CEILING,
            root_type: NodeType::Max,
        }
    }
}

impl GenerateConfig {
    pub fn with_children(mut self, min_children: usize, max_children: usize) -> Self {
        self.min_children = min_children;
        self.max_children = max_children;
        self
    }

    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_values(mut self, min_val: i32, max_val: i32) -> Self {
        self.min_val = min_val;
        self.max_val = max_val;
        self
    }

    pub fn with_node_ceiling(mut self, node_ceiling: f64) -> Self {
        self.node_ceiling = node_ceiling;
        self
    }

    pub fn with_root_type(mut self, root_type: NodeType) -> Self {
        self.root_type = root_type;
        self
    }

    /// Expected number of leaves plus the root, using the mean branching factor.
    pub fn projected_node_count(&self) -> f64 {
        let mean_branching = (self.min_children as f64 + self.max_children as f64) / 2.0;
        let exponent = i32::try_from(self.depth).unwrap_or(i32::MAX);
        mean_branching.powi(exponent) + 1.0
    }

    pub fn validate(&self) -> Result<(), GenerateError> {
        let fail = |msg: String| Err(GenerateError::InvalidParameters { msg });

        if self.min_children < 1 {
            return fail("min children must be at least 1".to_string());
        }
        if self.max_children < self.min_children {
            return fail(format!(
                "max children ({}) must be at least min children ({})",
                self.max_children, self.min_children
            ));
        }
        if self.depth < 1 {
            return fail("depth must be at least 1".to_string());
        }
        if self.min_val >= self.max_val {
            return fail(format!(
                "min value ({}) must be less than max value ({})",
                self.min_val, self.max_val
            ));
        }
        if self.min_val == i32::MIN || self.max_val == i32::MAX {
            return fail("values must stay strictly inside the i32 range".to_string());
        }
        let projected = self.projected_node_count();
        if projected > self.node_ceiling {
            return fail(format!(
                "projected node count {:.0} exceeds the ceiling of {:.0}",
                projected, self.node_ceiling
            ));
        }
        Ok(())
    }
}
