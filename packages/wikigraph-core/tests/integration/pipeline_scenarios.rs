//! End-to-end build scenarios
//!
//! Corpus → build → render with a renderer double → final output.

#[path = "../common/mod.rs"]
mod common;

use common::*;
use pretty_assertions::assert_eq;
use std::sync::Arc;
use wikigraph_core::{
    BacklinkEntry, DocId, DocumentRecord, GraphEdge, PassthroughRenderer, Pipeline, WeightPolicy,
    WikigraphConfig,
};

fn render_one(corpus_doc: &str, renderer: fn(&str) -> String) -> String {
    let mut corpus = CorpusBuilder::new().page("only", "Only", corpus_doc).build();
    let output = Pipeline::default().build(&mut corpus);
    output.render_corpus(&mut corpus, &renderer);
    corpus[DocId(0)].rendered_output.clone().unwrap_or_default()
}

// ═══════════════════════════════════════════════════════════════════════════
// Core scenarios
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_two_page_link_and_backlink() {
    let mut corpus = two_page_corpus();
    let output = Pipeline::default().build(&mut corpus);

    assert_eq!(output.forward_links(DocId(0)), &[DocId(1)]);
    assert!(output.forward_links(DocId(1)).is_empty());
    assert_eq!(
        corpus[DocId(1)].backlinks,
        vec![BacklinkEntry {
            title: "A".to_string(),
            url: "/a/".to_string(),
        }]
    );

    let pre = output.pre_render(&corpus[DocId(0)]).unwrap();
    assert_eq!(pre.text, "See [B](/b/)");
}

#[test]
fn test_missing_page_degrades_to_text() {
    assert_eq!(render_one("[[Missing Page]]", passthrough), "Missing Page");
}

#[test]
fn test_inline_code_kept_literal() {
    assert_eq!(
        render_one("`[[not a link]]`", passthrough),
        "`[[not a link]]`"
    );
}

#[test]
fn test_math_pipe_survives_table_renderer() {
    assert_eq!(render_one("$a|b$", table_renderer), "<p>$a|b$</p>");
    // unprotected pipes are still the renderer's business
    assert_eq!(render_one("a|b $c|d$", table_renderer), "<p>a</td><td>b $c|d$</p>");
}

#[test]
fn test_link_text_with_code_or_math() {
    let mut corpus = CorpusBuilder::new()
        .page("a", "A", "[`b` docs](/b/) and [[b|$x$ label]]")
        .page("b", "B", "")
        .build();
    let output = Pipeline::default().build(&mut corpus);

    assert_eq!(output.forward_links(DocId(0)), &[DocId(1)]);
    assert_eq!(output.report.unresolved, 0);
    assert_backlink_entries(&output, &corpus, DocId(1));

    output.render_corpus(&mut corpus, &PassthroughRenderer);
    assert_eq!(
        corpus[DocId(0)].rendered_output.as_deref(),
        Some("[`b` docs](/b/) and [$x$ label](/b/)")
    );
}

#[test]
fn test_slug_collision_last_write_wins() {
    let mut corpus = CorpusBuilder::new()
        .doc(DocumentRecord::new("notes/shared.md", "/notes/shared/").with_title("First"))
        .doc(DocumentRecord::new("drafts/shared.md", "/drafts/shared/").with_title("Second"))
        .page("index", "Index", "[[shared]] [[First]] [[Second]]")
        .build();
    let output = Pipeline::default().build(&mut corpus);

    assert_eq!(output.index.lookup("shared"), Some(DocId(1)));
    assert_eq!(output.index.lookup("First"), Some(DocId(0)));
    assert_eq!(output.index.lookup("Second"), Some(DocId(1)));
    assert_eq!(output.forward_links(DocId(2)), &[DocId(1), DocId(0)]);
}

// ═══════════════════════════════════════════════════════════════════════════
// Graph over a mixed corpus
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_garden_links_and_backlinks() {
    let mut corpus = garden_corpus();
    let output = Pipeline::default().build(&mut corpus);

    assert_eq!(output.forward_links(DocId(0)), &[DocId(1), DocId(2)]);
    assert_eq!(output.forward_links(DocId(1)), &[DocId(0), DocId(3)]);
    assert_eq!(output.forward_links(DocId(3)), &[DocId(1)]);
    assert_eq!(
        output.backlinks_of(DocId(0)),
        &[DocId(1), DocId(2), DocId(4), DocId(5)]
    );

    assert_no_self_links(&output);
    assert_backlink_symmetry(&output, &corpus);
    for id in corpus.ids() {
        assert_backlink_entries(&output, &corpus, id);
    }
}

#[test]
fn test_garden_graph_inclusion_and_edges() {
    let mut corpus = garden_corpus();
    let output = Pipeline::default().build(&mut corpus);

    let names: Vec<&str> = output.graph.nodes.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, vec!["Entropy", "Heat Death", "Arrow of Time", "Reading List"]);
    assert_eq!(output.node_id(DocId(3)), None);
    assert_eq!(output.node_id(DocId(4)), Some(3));
    assert_eq!(output.node_id(DocId(5)), None);

    let edge = |source, target| GraphEdge { source, target };
    assert_eq!(
        output.graph.links,
        vec![edge(0, 1), edge(0, 2), edge(1, 0), edge(2, 0), edge(3, 0)]
    );
    assert_weight_floor(&output);
}

#[test]
fn test_weight_policy_from_yaml() {
    let config = WikigraphConfig::from_yaml_str("version: 1\ngraph:\n  weight_policy: all_references\n").unwrap();
    assert_eq!(config.graph.weight_policy, WeightPolicy::AllReferences);

    let mut graph_only = garden_corpus();
    let mut all_refs = garden_corpus();
    let a = Pipeline::default().build(&mut graph_only);
    let b = Pipeline::new(config).build(&mut all_refs);

    let weights = |o: &wikigraph_core::BuildOutput| o.graph.nodes.iter().map(|n| n.weight).collect::<Vec<_>>();
    assert_eq!(weights(&a), vec![5, 2, 2, 1]);
    assert_eq!(weights(&b), vec![6, 4, 2, 2]);
    // backlinks do not depend on the policy
    assert_eq!(a.backlinks, b.backlinks);
}

#[test]
fn test_graph_shared_by_every_record() {
    let mut corpus = garden_corpus();
    let output = Pipeline::default().build(&mut corpus);

    for (_, doc) in corpus.iter() {
        let shared = doc.graph_data.as_ref().unwrap();
        assert!(Arc::ptr_eq(shared, &output.graph));
    }
}

#[test]
fn test_missing_source_does_not_stop_build() {
    let mut corpus = garden_corpus();
    let output = Pipeline::default().build(&mut corpus);

    assert!(output.forward[6].source_missing);
    assert!(output.forward_links(DocId(6)).is_empty());
    assert_eq!(output.report.missing_sources, 1);
    assert_eq!(output.report.documents, 7);
    assert_eq!(output.report.links, 9);
    assert_eq!(output.report.unresolved, 1);
    assert_eq!(output.report.edges, 5);

    output.render_corpus(&mut corpus, &PassthroughRenderer);
    assert!(corpus[DocId(6)].rendered_output.is_none());
    assert!(corpus[DocId(0)].rendered_output.is_some());
}

#[test]
fn test_empty_corpus() {
    let mut corpus = CorpusBuilder::new().build();
    let output = Pipeline::default().build(&mut corpus);
    assert_eq!(output.graph.node_count(), 0);
    assert_eq!(output.report.links, 0);
}

// ═══════════════════════════════════════════════════════════════════════════
// Rendering and side files
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_rendered_output_of_garden() {
    let mut corpus = garden_corpus();
    let output = Pipeline::default().build(&mut corpus);
    output.render_corpus(&mut corpus, &PassthroughRenderer);

    assert_eq!(
        corpus[DocId(0)].rendered_output.as_deref(),
        Some("Entropy drives [Heat Death](/heat-death/). See also [time's arrow](/arrow-of-time/).")
    );
    assert_eq!(
        corpus[DocId(2)].rendered_output.as_deref(),
        Some("Tied to [Entropy](/entropy/) and Nonexistent Note.")
    );
}

#[test]
fn test_callout_with_math_after_render() {
    let source = "<blockquote><p>[!tip] Identity</p><p>$x|y$</p></blockquote>";
    let html = render_one(source, table_renderer);
    assert_eq!(
        html,
        "<p><div class=\"callout callout-tip\">\n  \
         <div class=\"callout-title\"><span class=\"callout-icon\">💡</span> Identity</div>\n  \
         <div class=\"callout-content\"><p>$x|y$</p></div>\n\
         </div>\n</p>"
    );
}

#[test]
fn test_callouts_can_be_disabled() {
    let mut corpus = CorpusBuilder::new()
        .page("q", "Q", "<blockquote><p>[!note]</p><p>x</p></blockquote>")
        .build();
    let config = WikigraphConfig {
        callouts: false,
        ..WikigraphConfig::default()
    };
    let output = Pipeline::new(config).build(&mut corpus);
    output.render_corpus(&mut corpus, &PassthroughRenderer);
    assert_eq!(
        corpus[DocId(0)].rendered_output.as_deref(),
        Some("<blockquote><p>[!note]</p><p>x</p></blockquote>")
    );
}

#[test]
fn test_side_files() {
    let mut corpus = two_page_corpus();
    let output = Pipeline::default().build(&mut corpus);
    let dir = tempfile::tempdir().unwrap();

    let graph_path = dir.path().join("graph.json");
    output.graph.write_json(&graph_path).unwrap();
    let graph: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&graph_path).unwrap()).unwrap();
    assert_eq!(graph["nodes"].as_array().map(Vec::len), Some(0));

    let links_path = dir.path().join("links.json");
    output.index.write_link_table(&links_path).unwrap();
    let links: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&links_path).unwrap()).unwrap();
    assert_eq!(links["b"]["url"], "/b/");
    assert_eq!(links["B"]["title"], "B");
}
