//! Backlink / Graph Aggregation
//!
//! Forward links from every document are inverted into backlinks (over all
//! documents) and folded into one force-graph (over graph-included ones).

mod aggregator;

pub use aggregator::{GraphAggregator, LinkGraph};
