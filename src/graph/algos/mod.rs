//! Graph algorithm implementations
//!
//! - `spanning`: Prim-style spanning tree and forest over unit-weight edges

pub mod spanning;

pub use spanning::{min_spanning_forest, min_spanning_tree, spanning_tree_from, UNIT_WEIGHT};
