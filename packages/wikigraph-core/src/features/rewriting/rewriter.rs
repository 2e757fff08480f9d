//! Protected-region content rewriter
//!
//! Runs twice per document around the structured-text renderer:
//!
//! ```text
//! raw ──pre_rewrite──▶ [[links]] converted, code restored, math masked
//!                     ──renderer──▶ html with math tokens
//!                     ──post_restore──▶ html with original math
//! ```

use std::borrow::Cow;
use tracing::debug;

use super::placeholders::{MathTable, PlaceholderTable};
use super::tokenizer::mask_regions;
use crate::config::RewriterConfig;
use crate::features::alias_index::AliasIndex;
use crate::shared::utils::patterns::WIKILINK_RE;

/// Upper bound on rewrite passes. Nested pairs such as `[[[[a]]]]` lose one
/// bracket level per pass.
const MAX_PASSES: usize = 32;

/// Output of [`ContentRewriter::pre_rewrite`]
#[derive(Debug, Clone, Default)]
pub struct PreRewrite {
    /// Render-ready text; math is still masked
    pub text: String,

    /// Masked math, needed by [`ContentRewriter::post_restore`]
    pub math: MathTable,

    /// Wikilink keys that resolved to no document
    pub unresolved: Vec<String>,
}

pub struct ContentRewriter<'a> {
    index: &'a AliasIndex,
    config: RewriterConfig,
}

impl<'a> ContentRewriter<'a> {
    pub fn new(index: &'a AliasIndex, config: &RewriterConfig) -> Self {
        Self {
            index,
            config: config.clone(),
        }
    }

    /// Convert wikilinks outside code and math, and mask math for rendering
    pub fn pre_rewrite(&self, text: &str) -> PreRewrite {
        let mut avoid = vec![text];
        loop {
            match self.try_pre_rewrite(text, &avoid) {
                Ok(pre) => return pre,
                Err(clash) => {
                    debug!(clash, "link target contains a placeholder marker, reselecting");
                    avoid.push(clash);
                }
            }
        }
    }

    /// One rewrite with markers absent from `avoid`. Fails with the inserted
    /// title or url that contains a marker.
    fn try_pre_rewrite(&self, text: &str, avoid: &[&str]) -> Result<PreRewrite, &'a str> {
        let index: &'a AliasIndex = self.index;
        let (mut math, mut code) = PlaceholderTable::pair(&self.config.placeholder_prefix, avoid);

        let shield_math = self.config.shield_math;
        let masked = mask_regions(text, |region, kind| {
            if kind.is_math() && shield_math {
                math.insert(region)
            } else {
                code.insert(region)
            }
        });

        let mut unresolved = Vec::new();
        let mut clash = None;
        let rewritten = collapse_wikilinks(&masked, |key, display| {
            if key.is_empty() {
                return display.unwrap_or_default().to_string();
            }
            let original = code.restore(&math.restore(key));

            match index.resolve(&original).and_then(|id| index.target(id)) {
                Some(target) => {
                    for inserted in [target.title.as_str(), target.url.as_str()] {
                        if math.clashes_with(inserted) || code.clashes_with(inserted) {
                            clash.get_or_insert(inserted);
                        }
                    }
                    let label = display.unwrap_or(if target.title.is_empty() {
                        key
                    } else {
                        target.title.as_str()
                    });
                    format!("[{}]({})", label, target.url)
                }
                None => {
                    debug!(key = %original, "unresolved wikilink rendered as plain text");
                    unresolved.push(original);
                    display.unwrap_or(key).to_string()
                }
            }
        });

        if let Some(clash) = clash {
            return Err(clash);
        }

        Ok(PreRewrite {
            text: code.restore(&rewritten),
            math,
            unresolved,
        })
    }

    /// Substitute masked math back into rendered output
    pub fn post_restore(&self, rendered: &str, math: &MathTable) -> String {
        math.restore(rendered)
    }
}

/// Rewrite `[[key|display]]` / `[[key]]` in `text` until none remain.
///
/// `link` receives the trimmed key and the display text (`None` when absent
/// or blank) and returns the replacement. A match whose body still opens a
/// pair is the outer layer of a nested construct; it only loses its own
/// brackets, and the next pass sees the inner pair.
fn collapse_wikilinks<'t>(
    text: &'t str,
    mut link: impl FnMut(&str, Option<&str>) -> String,
) -> Cow<'t, str> {
    let mut current = Cow::Borrowed(text);

    for _ in 0..MAX_PASSES {
        if !WIKILINK_RE.is_match(&current) {
            break;
        }
        let next = WIKILINK_RE
            .replace_all(&current, |caps: &regex::Captures| {
                let whole = &caps[0];
                let body = &whole[2..whole.len() - 2];
                if body.contains("[[") {
                    return body.to_string();
                }
                let display = caps
                    .get(2)
                    .map(|m| m.as_str().trim())
                    .filter(|d| !d.is_empty());
                link(caps[1].trim(), display)
            })
            .into_owned();
        current = Cow::Owned(next);
    }

    current
}
