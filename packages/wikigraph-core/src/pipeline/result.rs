//! Build results
//!
//! ```text
//! BuildOutput
//! ├── index      : AliasIndex           (alias → {url, title})
//! ├── forward    : Vec<ForwardLinks>    (by DocId)
//! ├── backlinks  : Vec<Vec<DocId>>      (by DocId, all documents)
//! ├── node_ids   : Vec<Option<usize>>   (by DocId, graph members only)
//! ├── graph      : Arc<GraphData>       (shared with every record)
//! └── report     : BuildReport
//! ```

use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

use crate::config::WikigraphConfig;
use crate::features::alias_index::AliasIndex;
use crate::features::link_resolution::ForwardLinks;
use crate::shared::models::{DocId, GraphData};

/// Counters for one build
#[derive(Debug, Clone, Default, Serialize)]
pub struct BuildReport {
    pub documents: usize,

    /// Distinct forward links across the corpus
    pub links: usize,

    pub edges: usize,

    /// References that matched no document
    pub unresolved: usize,

    /// Documents whose source the loader could not supply
    pub missing_sources: usize,

    pub duration_ms: u64,

    /// Wall time per stage, in execution order
    pub stage_durations: Vec<(&'static str, Duration)>,
}

impl BuildReport {
    pub fn record_stage(&mut self, stage: &'static str, duration: Duration) {
        self.stage_durations.push((stage, duration));
    }

    pub fn stage_duration(&self, stage: &str) -> Option<Duration> {
        self.stage_durations
            .iter()
            .find(|(name, _)| *name == stage)
            .map(|(_, d)| *d)
    }
}

/// Everything a build derives from the corpus
#[derive(Debug, Clone)]
pub struct BuildOutput {
    pub index: AliasIndex,
    pub forward: Vec<ForwardLinks>,
    pub backlinks: Vec<Vec<DocId>>,
    pub node_ids: Vec<Option<usize>>,
    pub graph: Arc<GraphData>,
    pub report: BuildReport,
    pub config: WikigraphConfig,
}

impl BuildOutput {
    pub fn forward_links(&self, id: DocId) -> &[DocId] {
        self.forward
            .get(id.index())
            .map(|f| f.targets.as_slice())
            .unwrap_or(&[])
    }

    pub fn backlinks_of(&self, id: DocId) -> &[DocId] {
        self.backlinks
            .get(id.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn node_id(&self, id: DocId) -> Option<usize> {
        self.node_ids.get(id.index()).copied().flatten()
    }
}
