//! Shared models

pub mod corpus;
pub mod document;
pub mod graph;

pub use corpus::Corpus;
pub use document::{BacklinkEntry, Collection, DocId, DocumentRecord};
pub use graph::{GraphData, GraphEdge, GraphNode};
