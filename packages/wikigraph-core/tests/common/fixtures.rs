//! Test fixtures

use wikigraph_core::{Collection, Corpus, DocumentRecord};

use super::builders::CorpusBuilder;

/// A renderer double that changes nothing
pub fn passthrough(text: &str) -> String {
    text.to_string()
}

/// A renderer double that treats `|` as a table cell delimiter and wraps
/// the result in a paragraph
pub fn table_renderer(text: &str) -> String {
    format!("<p>{}</p>", text.replace('|', "</td><td>"))
}

/// A renderer double that rewrites emphasis punctuation
pub fn emphasis_renderer(text: &str) -> String {
    text.replace('_', "<em>").replace('*', "<strong>")
}

/// Two pages, `A` linking to `B`
pub fn two_page_corpus() -> Corpus {
    CorpusBuilder::new()
        .page("a", "A", "See [[B]]")
        .page("b", "B", "no links")
        .build()
}

/// Small interlinked corpus with posts, pages, an opt-in page, an opted-out
/// post and a document without source
pub fn garden_corpus() -> Corpus {
    CorpusBuilder::new()
        .post(
            "entropy",
            "Entropy",
            "---\ntags: [physics]\n---\nEntropy drives [[Heat Death]]. See also [[arrow-of-time|time's arrow]].",
        )
        .post(
            "heat-death",
            "Heat Death",
            "The end state of [[Entropy]]; compare [cosmology](/cosmology/).",
        )
        .post("arrow-of-time", "Arrow of Time", "Tied to [[entropy]] and [[Nonexistent Note]].")
        .page("cosmology", "Cosmology", "Overview linking [[Heat Death]] and [x](https://example.org).")
        .doc(
            DocumentRecord::new("reading.md", "/reading/")
                .with_title("Reading List")
                .with_source("[[Entropy]] [[Cosmology]]")
                .with_graph(true),
        )
        .doc(
            DocumentRecord::new("_posts/2024-02-02-drafts.md", "/drafts/")
                .with_title("Drafts")
                .with_source("[[Entropy]]")
                .in_collection(Collection::Posts)
                .with_graph(false),
        )
        .doc(DocumentRecord::new("lost.md", "/lost/").with_title("Lost"))
        .build()
}
