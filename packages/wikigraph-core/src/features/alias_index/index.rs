//! Multi-key alias table
//!
//! Maps every string form a document can be referenced by (URL, slug, title,
//! permalink, origin path, plus their trimmed / decoded / lowercased
//! variants) to the document's handle. Keys are stored exactly as generated;
//! lookups are exact, so callers try case and decoding variants themselves.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use tracing::debug;

use crate::errors::Result;
use crate::shared::models::{Corpus, DocId, DocumentRecord};
use crate::shared::utils::slug::{
    basename, strip_date_prefix, strip_extension, trim_leading_slash, trim_trailing_slash,
    url_decoded,
};

/// What a resolved reference renders to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkTarget {
    pub url: String,
    pub title: String,
}

/// Immutable alias → document index, built once per corpus build
#[derive(Debug, Clone, Default)]
pub struct AliasIndex {
    keys: HashMap<String, DocId>,

    /// Indexed by `DocId`
    targets: Vec<LinkTarget>,
}

impl AliasIndex {
    /// Build from documents in iteration order. A key generated by a later
    /// document replaces the same key of an earlier one.
    pub fn build(docs: &[DocumentRecord]) -> Self {
        let mut keys: HashMap<String, DocId> = HashMap::with_capacity(docs.len() * 12);
        let mut targets = Vec::with_capacity(docs.len());
        let mut overwritten = 0usize;

        for (i, doc) in docs.iter().enumerate() {
            let id = DocId(i);
            for key in alias_keys(doc) {
                if let Some(prev) = keys.insert(key, id) {
                    if prev != id {
                        overwritten += 1;
                    }
                }
            }
            targets.push(LinkTarget {
                url: doc.url.clone(),
                title: doc.display_title().to_string(),
            });
        }

        debug!(
            documents = docs.len(),
            keys = keys.len(),
            overwritten,
            "alias index built"
        );

        Self { keys, targets }
    }

    pub fn from_corpus(corpus: &Corpus) -> Self {
        Self::build(corpus.docs())
    }

    /// Exact-match lookup
    pub fn lookup(&self, key: &str) -> Option<DocId> {
        self.keys.get(key).copied()
    }

    /// Exact key, then its lowercase form
    pub fn resolve(&self, key: &str) -> Option<DocId> {
        self.lookup(key).or_else(|| {
            let lower = key.to_lowercase();
            if lower == key {
                None
            } else {
                self.lookup(&lower)
            }
        })
    }

    pub fn target(&self, id: DocId) -> Option<&LinkTarget> {
        self.targets.get(id.index())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains_key(key)
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Alias → `{url, title}` table, sorted by key
    pub fn link_table(&self) -> BTreeMap<&str, &LinkTarget> {
        self.keys
            .iter()
            .filter_map(|(key, id)| self.target(*id).map(|t| (key.as_str(), t)))
            .collect()
    }

    /// Write [`link_table`](Self::link_table) as JSON to `path`
    pub fn write_link_table(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.link_table())?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// Every alias key of one document, in insertion order. Empty keys are skipped.
pub fn alias_keys(doc: &DocumentRecord) -> Vec<String> {
    let mut keys = KeyList::default();

    let url = doc.url.as_str();
    keys.push(url);
    keys.push(trim_trailing_slash(url));
    if let Some(decoded) = url_decoded(url) {
        keys.push(trim_trailing_slash(&decoded));
        keys.push_owned(decoded);
    }

    let slug = doc.slug();
    keys.push_with_lowercase(slug);
    if doc.is_chronological() {
        if let Some(stripped) = strip_date_prefix(slug) {
            keys.push_with_lowercase(stripped);
        }
    }

    let title = doc.display_title();
    if !title.trim().is_empty() {
        keys.push_with_lowercase(title);
    }

    if let Some(perm) = doc.permalink.as_deref().filter(|p| !p.trim().is_empty()) {
        keys.push(perm);
        keys.push(trim_trailing_slash(perm));
        keys.push(trim_leading_slash(perm));
        keys.push(trim_trailing_slash(trim_leading_slash(perm)));
    }

    if let Some(origin) = doc
        .source_origin_path
        .as_deref()
        .filter(|p| !p.trim().is_empty())
    {
        let without_ext = strip_extension(origin);
        keys.push_with_lowercase(without_ext);
        keys.push_with_lowercase(basename(without_ext));
    }

    keys.0
}

#[derive(Default)]
struct KeyList(Vec<String>);

impl KeyList {
    fn push(&mut self, key: &str) {
        if !key.is_empty() {
            self.0.push(key.to_string());
        }
    }

    fn push_owned(&mut self, key: String) {
        if !key.is_empty() {
            self.0.push(key);
        }
    }

    fn push_with_lowercase(&mut self, key: &str) {
        self.push(key);
        self.push_owned(key.to_lowercase());
    }
}
