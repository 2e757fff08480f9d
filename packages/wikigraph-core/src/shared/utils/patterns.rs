//! Reference syntax patterns, compiled once

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `[[key]]` or `[[key|display]]`. Either part may be empty; neither may
    /// hold `]`. Opening brackets are allowed, so on nested pairs the match
    /// starts at the outermost `[[`.
    pub static ref WIKILINK_RE: Regex =
        Regex::new(r"\[\[([^\]|]*)(?:\|([^\]]*))?\]\]").expect("valid wikilink pattern");

    /// `[text](href)`
    pub static ref MARKDOWN_LINK_RE: Regex =
        Regex::new(r"\[[^\]]*\]\(([^)]+)\)").expect("valid markdown link pattern");
}

/// Trimmed key of the innermost pair inside a `WIKILINK_RE` match
pub fn wikilink_key(matched: &str) -> &str {
    let body = matched
        .strip_prefix("[[")
        .and_then(|b| b.strip_suffix("]]"))
        .unwrap_or(matched);
    let inner = body.rsplit("[[").next().unwrap_or(body);
    inner.split('|').next().unwrap_or(inner).trim()
}
