pub mod generator;
pub mod layout;
pub mod prelude;
pub mod search;
pub mod tree;
