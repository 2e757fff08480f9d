//! Corpus build orchestration
//!
//! ```text
//! Corpus ──▶ AliasIndex ──▶ resolve (rayon, per doc) ──▶ aggregate (single thread)
//!                                                      └─▶ backlinks + Arc<GraphData> onto records
//! ```
//!
//! Rendering happens later, per document, through [`BuildOutput::pre_render`]
//! and [`BuildOutput::post_render`] around the caller's renderer.

use rayon::prelude::*;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use super::renderer::Renderer;
use super::result::{BuildOutput, BuildReport};
use crate::config::WikigraphConfig;
use crate::features::alias_index::AliasIndex;
use crate::features::callouts::render_callouts;
use crate::features::graph::GraphAggregator;
use crate::features::link_resolution::{ForwardLinks, LinkResolver};
use crate::features::rewriting::{ContentRewriter, MathTable, PreRewrite};
use crate::shared::models::{BacklinkEntry, Corpus, DocId, DocumentRecord};
use crate::shared::utils::strip_front_matter;

/// One build per corpus snapshot
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: WikigraphConfig,
}

impl Pipeline {
    pub fn new(config: WikigraphConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WikigraphConfig {
        &self.config
    }

    /// Index, resolve and aggregate `corpus`, then write backlinks and the
    /// shared graph onto every record.
    pub fn build(&self, corpus: &mut Corpus) -> BuildOutput {
        let total_start = Instant::now();
        let mut report = BuildReport {
            documents: corpus.len(),
            ..BuildReport::default()
        };

        info!(documents = corpus.len(), "building link graph");

        // Stage 1: alias index (must be complete before any resolution)
        let stage_start = Instant::now();
        let index = AliasIndex::from_corpus(corpus);
        report.record_stage("index", stage_start.elapsed());

        // Stage 2: per-document resolution
        let stage_start = Instant::now();
        let forward = self.resolve_all(&index, corpus);
        report.record_stage("resolve", stage_start.elapsed());

        // Stage 3: single-threaded reduction
        let stage_start = Instant::now();
        let link_graph = GraphAggregator::new(self.config.graph.weight_policy).aggregate(corpus, &forward);
        report.record_stage("aggregate", stage_start.elapsed());

        // Stage 4: merge outputs back onto records
        let stage_start = Instant::now();
        let graph = Arc::new(link_graph.graph);
        let entries: Vec<BacklinkEntry> = corpus.docs().iter().map(DocumentRecord::backlink_entry).collect();
        for (doc, referrers) in corpus.docs_mut().iter_mut().zip(&link_graph.backlinks) {
            doc.backlinks = referrers.iter().map(|src| entries[src.index()].clone()).collect();
            doc.graph_data = Some(Arc::clone(&graph));
        }
        report.record_stage("merge", stage_start.elapsed());

        report.links = forward.iter().map(|f| f.targets.len()).sum();
        report.edges = graph.edge_count();
        report.unresolved = forward.iter().map(|f| f.unresolved.len()).sum();
        report.missing_sources = forward.iter().filter(|f| f.source_missing).count();
        report.duration_ms = total_start.elapsed().as_millis() as u64;

        info!(
            documents = report.documents,
            links = report.links,
            nodes = graph.node_count(),
            edges = report.edges,
            unresolved = report.unresolved,
            missing_sources = report.missing_sources,
            duration_ms = report.duration_ms,
            "link graph built"
        );

        BuildOutput {
            index,
            forward,
            backlinks: link_graph.backlinks,
            node_ids: link_graph.node_ids,
            graph,
            report,
            config: self.config.clone(),
        }
    }

    fn resolve_all(&self, index: &AliasIndex, corpus: &Corpus) -> Vec<ForwardLinks> {
        let resolver = LinkResolver::new(index, &self.config.resolver);

        // Results come back in corpus order either way; the aggregator
        // does not rely on it.
        if self.config.parallel {
            corpus
                .docs()
                .par_iter()
                .enumerate()
                .map(|(i, doc)| resolver.resolve(DocId(i), doc))
                .collect()
        } else {
            corpus
                .iter()
                .map(|(id, doc)| resolver.resolve(id, doc))
                .collect()
        }
    }
}

impl BuildOutput {
    pub fn rewriter(&self) -> ContentRewriter<'_> {
        ContentRewriter::new(&self.index, &self.config.rewriter)
    }

    /// Render-ready text for one document: front matter removed, wikilinks
    /// converted, math masked. `None` when the document has no source.
    pub fn pre_render(&self, doc: &DocumentRecord) -> Option<PreRewrite> {
        let raw = doc.raw_source.as_deref()?;
        Some(self.rewriter().pre_rewrite(strip_front_matter(raw)))
    }

    /// Restore math in `rendered`, apply callouts, and store the result as
    /// the document's rendered output.
    pub fn post_render(&self, doc: &mut DocumentRecord, rendered: &str, math: &MathTable) {
        let restored = self.rewriter().post_restore(rendered, math);
        let output = if self.config.callouts {
            render_callouts(&restored).into_owned()
        } else {
            restored
        };
        doc.rendered_output = Some(output);
    }

    /// Run `pre_render → renderer → post_render` over the whole corpus.
    /// Documents without source are left unrendered.
    pub fn render_corpus<R>(&self, corpus: &mut Corpus, renderer: &R)
    where
        R: Renderer + Sync,
    {
        let render_one = |doc: &mut DocumentRecord| {
            let Some(pre) = self.pre_render(doc) else {
                return;
            };
            let rendered = renderer.render(&pre.text);
            self.post_render(doc, &rendered, &pre.math);
        };

        let start = Instant::now();
        if self.config.parallel {
            corpus.docs_mut().par_iter_mut().for_each(render_one);
        } else {
            corpus.docs_mut().iter_mut().for_each(render_one);
        }
        debug!(
            documents = corpus.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "corpus rendered"
        );
    }
}
