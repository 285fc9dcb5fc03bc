//! Common types re-exported for convenience.

pub use crate::generator::{generate, generate_seeded, GenerateConfig, GenerateError};
pub use crate::layout::{apply_layout, LayoutConfig};
pub use crate::search::{
    drive, AlphaBetaSearch, MinimaxSearch, Search, SearchError, SearchEvent, SearchObserver,
};
pub use crate::tree::{NodeId, NodeMark, NodeType, Tree};
