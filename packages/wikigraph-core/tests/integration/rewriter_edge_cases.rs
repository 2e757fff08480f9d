//! Edge cases for the protected-region rewriter
//!
//! Malformed delimiters, escapes, nested constructs and hostile renderers.

#[path = "../common/mod.rs"]
mod common;

use common::*;
use pretty_assertions::assert_eq;
use wikigraph_core::config::RewriterConfig;
use wikigraph_core::{AliasIndex, ContentRewriter, DocumentRecord};

fn index() -> AliasIndex {
    AliasIndex::build(&[DocumentRecord::new("a.md", "/a/").with_title("Alpha")])
}

/// pre_rewrite → renderer → post_restore
fn full_with(text: &str, renderer: fn(&str) -> String) -> String {
    let index = index();
    let rewriter = ContentRewriter::new(&index, &RewriterConfig::default());
    let pre = rewriter.pre_rewrite(text);
    rewriter.post_restore(&renderer(&pre.text), &pre.math)
}

fn full(text: &str) -> String {
    full_with(text, passthrough)
}

// ═══════════════════════════════════════════════════════════════════════════
// Unterminated delimiters
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_unterminated_fence_protects_to_end() {
    assert_eq!(full("[[a]]\n```\n[[a]]\n"), "[Alpha](/a/)\n```\n[[a]]\n");
}

#[test]
fn test_unterminated_display_math_protects_to_end() {
    assert_eq!(full("[[a]] $$ x [[a]]"), "[Alpha](/a/) $$ x [[a]]");
}

#[test]
fn test_unterminated_inline_constructs_stay_literal() {
    assert_eq!(full("`[[a]]"), "`[Alpha](/a/)");
    assert_eq!(full("$[[a]]"), "$[Alpha](/a/)");
    assert_eq!(full(r"\[ [[a]]"), r"\[ [Alpha](/a/)");
}

#[test]
fn test_inline_math_does_not_cross_lines() {
    assert_eq!(full("$a\nb$ [[a]]"), "$a\nb$ [Alpha](/a/)");
}

// ═══════════════════════════════════════════════════════════════════════════
// Delimiter classes
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_escaped_dollar_is_not_math() {
    let text = r"costs \$5 and [[a]] \$6";
    assert_eq!(full(text), r"costs \$5 and [Alpha](/a/) \$6");
}

#[test]
fn test_double_backtick_span() {
    assert_eq!(full("``[[a]] ` x`` [[a]]"), "``[[a]] ` x`` [Alpha](/a/)");
}

#[test]
fn test_fence_indentation_limit() {
    assert_eq!(
        full("   ~~~\n[[a]]\n   ~~~\n[[a]]"),
        "   ~~~\n[[a]]\n   ~~~\n[Alpha](/a/)"
    );
    // four spaces is not a fence
    assert_eq!(full("    ```\n[[a]]\n    ```"), "    ```\n[Alpha](/a/)\n    ```");
}

#[test]
fn test_bracket_and_paren_math() {
    let text = r"\(x_[[a]]\) and \[ [[a]] \]";
    assert_eq!(full_with(text, emphasis_renderer), text);
}

#[test]
fn test_code_wins_over_math() {
    assert_eq!(full("`$$`[[a]]"), "`$$`[Alpha](/a/)");

    let index = index();
    let pre = ContentRewriter::new(&index, &RewriterConfig::default()).pre_rewrite("`$a|b$`");
    assert_eq!(pre.text, "`$a|b$`");
    assert!(pre.math.is_empty());
}

// ═══════════════════════════════════════════════════════════════════════════
// Placeholders
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_placeholder_lookalike_in_source() {
    assert_eq!(full("WIKIGRAPHMATH0N0X $m$"), "WIKIGRAPHMATH0N0X $m$");
}

#[test]
fn test_placeholders_are_distinct() {
    let index = index();
    let pre = ContentRewriter::new(&index, &RewriterConfig::default()).pre_rewrite("$a$ $b$ $$c$$");
    assert_eq!(pre.math.len(), 3);
    assert_eq!(pre.math.entries(), &["$a$", "$b$", "$$c$$"]);
    let tokens: Vec<String> = (0..3).map(|i| pre.math.token(i)).collect();
    assert_eq!(pre.text, tokens.join(" "));
}

#[test]
fn test_markup_around_placeholders() {
    assert_eq!(full_with("*$a$*", emphasis_renderer), "<strong>$a$<strong>");
    assert_eq!(full_with("$x_1$ | $y$", table_renderer), "<p>$x_1$ </td><td> $y$</p>");
}

#[test]
fn test_custom_placeholder_prefix() {
    let index = index();
    let config = RewriterConfig {
        placeholder_prefix: "ZZMATH".to_string(),
        ..RewriterConfig::default()
    };
    let rewriter = ContentRewriter::new(&index, &config);
    let pre = rewriter.pre_rewrite("$a$");
    assert!(pre.text.starts_with("ZZMATH"));
    assert_eq!(rewriter.post_restore(&pre.text, &pre.math), "$a$");
}

// ═══════════════════════════════════════════════════════════════════════════
// Reference syntax
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_blank_display_text_is_ignored() {
    assert_eq!(full("[[a| ]]"), "[Alpha](/a/)");
    assert_eq!(full("[[zzz|  ]]"), "zzz");
}

#[test]
fn test_reference_text_holding_code_or_math() {
    assert_eq!(full("[[a|$x$ label]]"), "[$x$ label](/a/)");
    assert_eq!(full("[[a|`x`]]"), "[`x`](/a/)");
    assert_eq!(full_with("[[a|$x|y$]]", table_renderer), "<p>[$x|y$](/a/)</p>");
}

#[test]
fn test_nested_pairs_leave_no_brackets() {
    assert_eq!(full("[[[[a]]]]"), "[Alpha](/a/)");
    assert_eq!(full("[[[[a|shown]]]]"), "[shown](/a/)");
    assert_eq!(full("x [[]] y"), "x  y");
}

#[test]
fn test_full_rewrite_is_stable() {
    let text = "x [[a]] [[gone|shown]] `[[a]]` $[[a]]|$ [[[[a]]]]\n```\n[[a]]\n```";
    let once = full(text);
    let twice = full(&once);
    assert_eq!(once, twice);
    assert!(!once.contains("[[gone"));
}
