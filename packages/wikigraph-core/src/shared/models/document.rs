//! Document records
//!
//! The corpus loader creates these; the build adds backlinks and graph data;
//! the renderer fills `rendered_output`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use super::graph::GraphData;

/// Stable handle of a document inside a [`Corpus`](super::Corpus)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DocId(pub usize);

impl DocId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "doc#{}", self.0)
    }
}

/// Which collection a document was loaded from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    /// Primary chronological collection (dated posts)
    Posts,
    /// Everything else
    Pages,
}

impl Default for Collection {
    fn default() -> Self {
        Collection::Pages
    }
}

/// One entry of a document's backlink list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BacklinkEntry {
    pub title: String,
    pub url: String,
}

/// A single corpus document
#[derive(Debug, Clone, Default)]
pub struct DocumentRecord {
    /// Source path; the filename slug is its stem
    pub path: String,

    /// Raw text including any front matter. `None` when the loader could not read it.
    pub raw_source: Option<String>,

    pub rendered_output: Option<String>,
    pub title: Option<String>,
    pub url: String,
    pub permalink: Option<String>,

    /// Where the note was imported from, when it was
    pub source_origin_path: Option<String>,

    /// Explicit graph opt-in (`Some(true)`) or opt-out (`Some(false)`)
    pub graph: Option<bool>,

    pub collection: Collection,

    // Build outputs
    pub backlinks: Vec<BacklinkEntry>,
    pub graph_data: Option<Arc<GraphData>>,
}

impl DocumentRecord {
    pub fn new(path: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn with_source(mut self, raw_source: impl Into<String>) -> Self {
        self.raw_source = Some(raw_source.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_permalink(mut self, permalink: impl Into<String>) -> Self {
        self.permalink = Some(permalink.into());
        self
    }

    pub fn with_origin_path(mut self, origin: impl Into<String>) -> Self {
        self.source_origin_path = Some(origin.into());
        self
    }

    pub fn with_graph(mut self, include: bool) -> Self {
        self.graph = Some(include);
        self
    }

    pub fn in_collection(mut self, collection: Collection) -> Self {
        self.collection = collection;
        self
    }

    /// Filename without directory or extension
    pub fn slug(&self) -> &str {
        Path::new(&self.path)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(self.path.as_str())
    }

    /// Declared title, falling back to the slug
    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(t) if !t.trim().is_empty() => t,
            _ => self.slug(),
        }
    }

    pub fn is_chronological(&self) -> bool {
        self.collection == Collection::Posts
    }

    /// Graph inclusion: an explicit opt-out always wins, posts are in by
    /// default, anything else needs an explicit opt-in.
    pub fn includes_in_graph(&self) -> bool {
        match self.graph {
            Some(false) => false,
            _ if self.is_chronological() => true,
            Some(true) => true,
            None => false,
        }
    }

    pub fn backlink_entry(&self) -> BacklinkEntry {
        BacklinkEntry {
            title: self.display_title().to_string(),
            url: self.url.clone(),
        }
    }
}
