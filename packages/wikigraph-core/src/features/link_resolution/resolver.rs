//! Forward-link resolution
//!
//! Wikilink keys resolve exact → lowercase → lowercase basename; hrefs resolve
//! exact → single trailing slash removed → lowercase, and optionally the same
//! again with the `#fragment` dropped. Unresolved references are normal (notes
//! mention concepts that do not exist yet) and only reported back.

use tracing::{debug, warn};

use super::extractor::{extract_references, ReferenceKind};
use crate::config::ResolverConfig;
use crate::features::alias_index::AliasIndex;
use crate::shared::models::{DocId, DocumentRecord};
use crate::shared::utils::slug::{basename, trim_trailing_slash};
use crate::shared::utils::strip_front_matter;

/// Resolved references of one document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForwardLinks {
    pub source: DocId,

    /// Distinct targets in first-occurrence order, never `source` itself
    pub targets: Vec<DocId>,

    /// Keys and hrefs that matched no document
    pub unresolved: Vec<String>,

    /// The loader supplied no text for this document
    pub source_missing: bool,
}

impl ForwardLinks {
    pub fn empty(source: DocId) -> Self {
        Self {
            source,
            ..Self::default()
        }
    }
}

pub struct LinkResolver<'a> {
    index: &'a AliasIndex,
    config: &'a ResolverConfig,
}

impl<'a> LinkResolver<'a> {
    pub fn new(index: &'a AliasIndex, config: &'a ResolverConfig) -> Self {
        Self { index, config }
    }

    /// Resolve one document. A document without source yields no links.
    pub fn resolve(&self, id: DocId, doc: &DocumentRecord) -> ForwardLinks {
        match doc.raw_source.as_deref() {
            Some(raw) => self.resolve_text(id, strip_front_matter(raw)),
            None => {
                warn!(path = %doc.path, url = %doc.url, "no source available, document contributes no links");
                ForwardLinks {
                    source_missing: true,
                    ..ForwardLinks::empty(id)
                }
            }
        }
    }

    /// Resolve references in a body that has no front matter
    pub fn resolve_text(&self, id: DocId, body: &str) -> ForwardLinks {
        let mut links = ForwardLinks::empty(id);

        for reference in extract_references(body) {
            let (target, raw) = match &reference.kind {
                ReferenceKind::Wikilink { key } => (self.resolve_key(key), key),
                ReferenceKind::Href { href } => {
                    if self.config.is_skipped(href) {
                        continue;
                    }
                    (self.resolve_href(href), href)
                }
            };

            match target {
                Some(target) if target == id => {}
                Some(target) => {
                    if !links.targets.contains(&target) {
                        links.targets.push(target);
                    }
                }
                None => {
                    debug!(source = %id, reference = %raw, "unresolved reference");
                    links.unresolved.push(raw.clone());
                }
            }
        }

        links
    }

    /// Wikilink key: exact, lowercase, then lowercase basename
    pub fn resolve_key(&self, key: &str) -> Option<DocId> {
        self.index.resolve(key).or_else(|| {
            let base = basename(key);
            if base.is_empty() || base == key {
                return None;
            }
            self.index.lookup(&base.to_lowercase())
        })
    }

    /// Standard-link href
    pub fn resolve_href(&self, href: &str) -> Option<DocId> {
        self.resolve_href_variants(href).or_else(|| {
            if !self.config.strip_fragments {
                return None;
            }
            match href.split_once('#') {
                Some((path, _)) if !path.is_empty() => self.resolve_href_variants(path),
                _ => None,
            }
        })
    }

    fn resolve_href_variants(&self, href: &str) -> Option<DocId> {
        self.index
            .lookup(href)
            .or_else(|| self.index.lookup(trim_trailing_slash(href)))
            .or_else(|| self.index.lookup(&href.to_lowercase()))
    }
}
