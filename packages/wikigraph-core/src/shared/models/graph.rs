//! Link graph wire types
//!
//! Serialized in the force-graph layout: `{"nodes": [{id, name, url, val}],
//! "links": [{source, target}]}`.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::Result;

/// Graph node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Dense 0-based id over graph-included documents
    pub id: usize,
    pub name: String,
    pub url: String,

    /// Visual weight, never below 1
    #[serde(rename = "val")]
    pub weight: usize,
}

/// Directed edge between two node ids
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: usize,
    pub target: usize,
}

/// Whole-corpus graph, shared by every document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphData {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphEdge>,
}

impl GraphData {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.links.len()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Write the graph as JSON to `path`
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
