//! Reference extraction
//!
//! Finds wikilinks and standard markdown links in a document body. Code and
//! math regions are masked with the same tokenizer the rewriter uses, each
//! becoming one opaque placeholder word, so a reference the rewriter would
//! leave alone is never reported here and one whose text merely contains
//! code or math is still found.

use crate::features::rewriting::{mask_regions, PlaceholderTable};
use crate::shared::utils::patterns::{wikilink_key, MARKDOWN_LINK_RE, WIKILINK_RE};

const REGION_PREFIX: &str = "WIKIGRAPHREGION";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceKind {
    /// `[[key]]` / `[[key|display]]`, key trimmed
    Wikilink { key: String },
    /// `[text](href)`, href without any title part
    Href { href: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    /// Byte offset in the masked body; orders references, nothing more
    pub offset: usize,
    pub kind: ReferenceKind,
}

/// All references in `body`, ordered by position
pub fn extract_references(body: &str) -> Vec<Reference> {
    let (mut regions, _) = PlaceholderTable::pair(REGION_PREFIX, &[body]);
    let masked = mask_regions(body, |region, _| regions.insert(region));
    let mut refs = Vec::new();

    for m in WIKILINK_RE.find_iter(&masked) {
        let key = wikilink_key(m.as_str());
        if key.is_empty() {
            continue;
        }
        refs.push(Reference {
            offset: m.start(),
            kind: ReferenceKind::Wikilink {
                key: regions.restore(key),
            },
        });
    }

    for caps in MARKDOWN_LINK_RE.captures_iter(&masked) {
        let whole = caps.get(0).map_or(0, |m| m.start());
        let Some(href) = caps[1].split_whitespace().next() else {
            continue;
        };
        let href = href.trim_start_matches('<').trim_end_matches('>');
        if href.is_empty() {
            continue;
        }
        refs.push(Reference {
            offset: whole,
            kind: ReferenceKind::Href {
                href: regions.restore(href),
            },
        });
    }

    refs.sort_by_key(|r| r.offset);
    refs
}
