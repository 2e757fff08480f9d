//! Placeholder tokens that survive rendering
//!
//! Protected regions are replaced by alphanumeric tokens while references are
//! rewritten. Code tokens are swapped back before the structured-text renderer
//! runs; math tokens stay in through rendering and are substituted back into
//! its output afterwards.
//!
//! Tokens look like `{prefix}{salt}{tag}{index}X`, with tag `N` for math and
//! `C` for code. The salt is chosen so that `{prefix}{salt}` occurs in none of
//! the texts the tokens will be mixed with, which keeps every token unique and
//! unambiguous even after arbitrary markup is wrapped around it.

use serde::{Deserialize, Serialize};

const MATH_TAG: char = 'N';
const CODE_TAG: char = 'C';

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceholderTable {
    /// `{prefix}{salt}{tag}`
    marker: String,
    entries: Vec<String>,
}

/// Math regions masked through rendering
pub type MathTable = PlaceholderTable;

impl PlaceholderTable {
    /// Empty math table whose marker does not occur in `source`
    pub fn for_source(prefix: &str, source: &str) -> Self {
        Self::pair(prefix, &[source]).0
    }

    /// `(math, code)` tables sharing one salt absent from every text in `avoid`
    pub fn pair(prefix: &str, avoid: &[&str]) -> (Self, Self) {
        let mut salt: u64 = 0;
        let stem = loop {
            let candidate = format!("{}{}", prefix, salt);
            if !avoid.iter().any(|text| text.contains(&candidate)) {
                break candidate;
            }
            salt += 1;
        };
        (
            Self::with_marker(format!("{stem}{MATH_TAG}")),
            Self::with_marker(format!("{stem}{CODE_TAG}")),
        )
    }

    fn with_marker(marker: String) -> Self {
        Self {
            marker,
            entries: Vec::new(),
        }
    }

    /// Store `text` and return the token standing in for it
    pub fn insert(&mut self, text: &str) -> String {
        let token = self.token(self.entries.len());
        self.entries.push(text.to_string());
        token
    }

    pub fn token(&self, index: usize) -> String {
        format!("{}{}X", self.marker, index)
    }

    /// True when `text` contains this table's marker
    pub fn clashes_with(&self, text: &str) -> bool {
        !self.marker.is_empty() && text.contains(&self.marker)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Replace every token in `rendered` with its original text.
    /// Text that merely resembles a token is left alone.
    pub fn restore(&self, rendered: &str) -> String {
        if self.entries.is_empty() || self.marker.is_empty() {
            return rendered.to_string();
        }

        let mut out = String::with_capacity(rendered.len());
        let mut rest = rendered;
        while let Some(pos) = rest.find(&self.marker) {
            out.push_str(&rest[..pos]);
            let after = &rest[pos + self.marker.len()..];
            let digits = after.bytes().take_while(|b| b.is_ascii_digit()).count();

            let entry = if digits > 0 && after.as_bytes().get(digits) == Some(&b'X') {
                after[..digits]
                    .parse::<usize>()
                    .ok()
                    .and_then(|i| self.entries.get(i))
            } else {
                None
            };

            match entry {
                Some(original) => {
                    out.push_str(original);
                    rest = &after[digits + 1..];
                }
                None => {
                    out.push_str(&self.marker);
                    rest = after;
                }
            }
        }
        out.push_str(rest);
        out
    }
}
