//! Backlink inversion and graph construction
//!
//! Single-threaded reduction over per-document forward links. Both passes
//! walk documents by ascending `DocId`, so output order never depends on the
//! order resolution work finished in.

use tracing::debug;

use crate::config::WeightPolicy;
use crate::features::link_resolution::ForwardLinks;
use crate::shared::models::{Corpus, DocId, GraphData, GraphEdge, GraphNode};

/// Backlinks for every document plus the shared graph
#[derive(Debug, Clone, Default)]
pub struct LinkGraph {
    /// Indexed by `DocId`; referring documents in first-seen order
    pub backlinks: Vec<Vec<DocId>>,

    pub graph: GraphData,

    /// Indexed by `DocId`; `None` for graph-excluded documents
    pub node_ids: Vec<Option<usize>>,
}

impl LinkGraph {
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

#[derive(Debug, Clone, Copy, Default)]
pub struct GraphAggregator {
    policy: WeightPolicy,
}

impl GraphAggregator {
    pub fn new(policy: WeightPolicy) -> Self {
        Self { policy }
    }

    /// Invert `forward` into backlinks and build the node/edge graph.
    ///
    /// `forward` may arrive in any order; entries whose source is outside
    /// the corpus are ignored.
    pub fn aggregate(&self, corpus: &Corpus, forward: &[ForwardLinks]) -> LinkGraph {
        let n = corpus.len();

        let mut outgoing: Vec<&[DocId]> = vec![&[] as &[DocId]; n];
        for links in forward {
            if let Some(slot) = outgoing.get_mut(links.source.index()) {
                *slot = links.targets.as_slice();
            }
        }

        let mut backlinks: Vec<Vec<DocId>> = vec![Vec::new(); n];
        for (src, targets) in outgoing.iter().enumerate() {
            for target in targets.iter() {
                let Some(list) = backlinks.get_mut(target.index()) else {
                    continue;
                };
                let src = DocId(src);
                if !list.contains(&src) {
                    list.push(src);
                }
            }
        }

        let mut node_ids = vec![None; n];
        let mut next = 0usize;
        for (id, doc) in corpus.iter() {
            if doc.includes_in_graph() {
                node_ids[id.index()] = Some(next);
                next += 1;
            }
        }

        let counts = |refs: &[DocId]| match self.policy {
            WeightPolicy::AllReferences => refs.len(),
            WeightPolicy::GraphOnly => refs
                .iter()
                .filter(|d| matches!(node_ids.get(d.index()), Some(Some(_))))
                .count(),
        };

        let mut nodes = Vec::with_capacity(next);
        for (id, doc) in corpus.iter() {
            let Some(node_id) = node_ids[id.index()] else {
                continue;
            };
            let degree = counts(outgoing[id.index()]) + counts(backlinks[id.index()].as_slice());
            nodes.push(GraphNode {
                id: node_id,
                name: doc.display_title().to_string(),
                url: doc.url.clone(),
                weight: degree.max(1),
            });
        }

        let mut links = Vec::new();
        for (src, targets) in outgoing.iter().enumerate() {
            let Some(source) = node_ids[src] else {
                continue;
            };
            for target in targets.iter() {
                if let Some(target) = node_ids.get(target.index()).copied().flatten() {
                    links.push(GraphEdge { source, target });
                }
            }
        }

        debug!(
            nodes = nodes.len(),
            edges = links.len(),
            policy = ?self.policy,
            "link graph aggregated"
        );

        LinkGraph {
            backlinks,
            graph: GraphData { nodes, links },
            node_ids,
        }
    }
}
