//! Protected-region tokenizer
//!
//! Splits text into literal and protected segments. Four passes run in fixed
//! precedence; each pass only looks inside the literal segments left by the
//! previous ones, so a region claimed earlier is never re-entered:
//!
//! 1. fenced code blocks (```` ``` ```` or `~~~`, three or more)
//! 2. inline code spans (backtick runs, single line)
//! 3. display math (`$$...$$`, `\[...\]`)
//! 4. inline math (`$...$` on one line, `\(...\)`)
//!
//! An unterminated fence or `$$` runs to the end of the text. Unterminated
//! inline constructs and `\[` are left literal, since a stray `$` or `\[` is
//! ordinary prose.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionKind {
    FencedCode,
    InlineCode,
    DisplayMath,
    InlineMath,
}

impl RegionKind {
    pub fn is_math(self) -> bool {
        matches!(self, RegionKind::DisplayMath | RegionKind::InlineMath)
    }
}

/// A contiguous piece of the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Literal(&'a str),
    Protected { text: &'a str, kind: RegionKind },
}

impl<'a> Segment<'a> {
    pub fn text(&self) -> &'a str {
        match self {
            Segment::Literal(text) => text,
            Segment::Protected { text, .. } => text,
        }
    }
}

/// Finds the first region in a literal: `(start, end)` byte offsets
type Finder = fn(&str) -> Option<(usize, usize)>;

const PASSES: [(RegionKind, Finder); 4] = [
    (RegionKind::FencedCode, find_fenced_code),
    (RegionKind::InlineCode, find_inline_code),
    (RegionKind::DisplayMath, find_display_math),
    (RegionKind::InlineMath, find_inline_math),
];

/// Tokenize `text`. Concatenating the segment texts yields `text` again.
pub fn tokenize(text: &str) -> Vec<Segment<'_>> {
    let mut segments = if text.is_empty() {
        Vec::new()
    } else {
        vec![Segment::Literal(text)]
    };

    for (kind, finder) in PASSES {
        let mut next = Vec::with_capacity(segments.len());
        for segment in segments {
            match segment {
                Segment::Literal(literal) => split_literal(literal, kind, finder, &mut next),
                protected => next.push(protected),
            }
        }
        segments = next;
    }

    segments
}

/// Copy `text`, replacing every protected region with whatever `placeholder`
/// returns for it. Scanning the result sees exactly the literal text, with
/// each protected region reduced to one opaque word.
pub fn mask_regions<'t>(text: &'t str, mut placeholder: impl FnMut(&'t str, RegionKind) -> String) -> String {
    let mut out = String::with_capacity(text.len());
    for segment in tokenize(text) {
        match segment {
            Segment::Protected { text, kind } => out.push_str(&placeholder(text, kind)),
            literal => out.push_str(literal.text()),
        }
    }
    out
}

fn split_literal<'a>(literal: &'a str, kind: RegionKind, finder: Finder, out: &mut Vec<Segment<'a>>) {
    let mut rest = literal;
    while !rest.is_empty() {
        match finder(rest) {
            Some((start, end)) if end > start => {
                if start > 0 {
                    out.push(Segment::Literal(&rest[..start]));
                }
                out.push(Segment::Protected {
                    text: &rest[start..end],
                    kind,
                });
                rest = &rest[end..];
            }
            _ => {
                out.push(Segment::Literal(rest));
                break;
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Fenced code
// ═══════════════════════════════════════════════════════════════════════════

/// `(fence char, run length)` when `line` opens or closes a fence
fn fence_marker(line: &str) -> Option<(u8, usize, &str)> {
    let trimmed = line.trim_end_matches(['\n', '\r']);
    let indent = trimmed.len() - trimmed.trim_start_matches(' ').len();
    if indent > 3 {
        return None;
    }
    let body = &trimmed[indent..];
    let fence = *body.as_bytes().first()?;
    if fence != b'`' && fence != b'~' {
        return None;
    }
    let run = body.bytes().take_while(|b| *b == fence).count();
    if run < 3 {
        return None;
    }
    Some((fence, run, &body[run..]))
}

fn find_fenced_code(text: &str) -> Option<(usize, usize)> {
    let mut offset = 0;
    let mut open: Option<(usize, u8, usize)> = None;

    for line in text.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();

        match open {
            None => {
                if let Some((fence, run, info)) = fence_marker(line) {
                    // a backtick fence's info string cannot hold backticks
                    if fence == b'`' && info.contains('`') {
                        continue;
                    }
                    open = Some((line_start, fence, run));
                }
            }
            Some((start, fence, run)) => {
                if let Some((close, close_run, rest)) = fence_marker(line) {
                    if close == fence && close_run >= run && rest.trim().is_empty() {
                        let end = line_start + line.trim_end_matches(['\n', '\r']).len();
                        return Some((start, end));
                    }
                }
            }
        }
    }

    open.map(|(start, _, _)| (start, text.len()))
}

// ═══════════════════════════════════════════════════════════════════════════
// Inline code
// ═══════════════════════════════════════════════════════════════════════════

fn find_inline_code(text: &str) -> Option<(usize, usize)> {
    let bytes = text.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'`' {
            i += 1;
            continue;
        }
        let run = run_length(bytes, i, b'`');
        let mut j = i + run;
        while j < bytes.len() && bytes[j] != b'\n' {
            if bytes[j] == b'`' {
                let close = run_length(bytes, j, b'`');
                if close == run {
                    return Some((i, j + close));
                }
                j += close;
            } else {
                j += 1;
            }
        }
        i += run;
    }

    None
}

fn run_length(bytes: &[u8], start: usize, byte: u8) -> usize {
    bytes[start..].iter().take_while(|b| **b == byte).count()
}

// ═══════════════════════════════════════════════════════════════════════════
// Math
// ═══════════════════════════════════════════════════════════════════════════

fn find_display_math(text: &str) -> Option<(usize, usize)> {
    let dollars = text.find("$$").map(|start| match text[start + 2..].find("$$") {
        Some(close) => (start, start + 2 + close + 2),
        None => (start, text.len()),
    });
    let brackets = find_delimited(text, r"\[", r"\]");
    earliest(dollars, brackets)
}

fn find_inline_math(text: &str) -> Option<(usize, usize)> {
    earliest(find_inline_dollar(text), find_delimited(text, r"\(", r"\)"))
}

/// `$...$`: no newline inside, not empty, and neither delimiter touching a
/// second `$`. An escaped `\$` never opens.
fn find_inline_dollar(text: &str) -> Option<(usize, usize)> {
    let bytes = text.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'$' {
            i += 1;
            continue;
        }
        let preceded = i > 0 && (bytes[i - 1] == b'$' || bytes[i - 1] == b'\\');
        if !preceded {
            if let Some(close) = bytes[i + 1..].iter().position(|b| *b == b'$' || *b == b'\n') {
                let j = i + 1 + close;
                let valid = bytes[j] == b'$' && j > i + 1 && bytes.get(j + 1) != Some(&b'$');
                if valid {
                    return Some((i, j + 1));
                }
            }
        }
        i += 1;
    }

    None
}

fn find_delimited(text: &str, open: &str, close: &str) -> Option<(usize, usize)> {
    let mut from = 0;
    while let Some(pos) = text[from..].find(open) {
        let start = from + pos;
        if let Some(len) = text[start + open.len()..].find(close) {
            return Some((start, start + open.len() + len + close.len()));
        }
        from = start + open.len();
    }
    None
}

fn earliest(a: Option<(usize, usize)>, b: Option<(usize, usize)>) -> Option<(usize, usize)> {
    match (a, b) {
        (Some(x), Some(y)) => Some(if y.0 < x.0 { y } else { x }),
        (x, None) => x,
        (None, y) => y,
    }
}
