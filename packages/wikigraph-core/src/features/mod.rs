//! Feature modules
//!
//! Leaves first: the alias index feeds link resolution and rewriting,
//! resolution feeds graph aggregation. Callouts run on rendered output only.

pub mod alias_index;
pub mod callouts;
pub mod graph;
pub mod link_resolution;
pub mod rewriting;
