//! `> [!type] Title` blockquotes → callout markup
//!
//! Operates on rendered HTML, after math has been restored.

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::borrow::Cow;

lazy_static! {
    static ref CALLOUT_RE: Regex = Regex::new(
        r"(?s)<blockquote>\s*<p>\[!([\w-]+)\]([+-])?\s*(.*?)</p>\s*(.*?)</blockquote>"
    )
    .expect("callout pattern");
}

const DEFAULT_ICON: &str = "📝";

const ICONS: &[(&str, &str)] = &[
    ("note", "📝"),
    ("info", "ℹ️"),
    ("tip", "💡"),
    ("hint", "💡"),
    ("important", "🔥"),
    ("warning", "⚠️"),
    ("caution", "⚠️"),
    ("danger", "🔴"),
    ("error", "🔴"),
    ("bug", "🐛"),
    ("example", "📋"),
    ("quote", "💬"),
    ("cite", "💬"),
    ("abstract", "📄"),
    ("summary", "📄"),
    ("tldr", "📄"),
    ("todo", "☑️"),
    ("success", "✅"),
    ("check", "✅"),
    ("done", "✅"),
    ("question", "❓"),
    ("help", "❓"),
    ("faq", "❓"),
    ("failure", "❌"),
    ("fail", "❌"),
    ("missing", "❌"),
];

/// Icon for a lowercase callout type; unknown types get the note icon
pub fn callout_icon(kind: &str) -> &'static str {
    ICONS
        .iter()
        .find(|(k, _)| *k == kind)
        .map_or(DEFAULT_ICON, |(_, icon)| icon)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fold {
    /// `+`: rendered expanded
    Open,
    /// `-`: rendered collapsed
    Closed,
}

/// One parsed callout block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Callout<'a> {
    /// Lowercased type
    pub kind: String,
    pub fold: Option<Fold>,
    pub title: &'a str,
    pub body: &'a str,
}

impl<'a> Callout<'a> {
    fn from_captures(caps: &Captures<'a>) -> Self {
        let fold = caps.get(2).map(|m| match m.as_str() {
            "+" => Fold::Open,
            _ => Fold::Closed,
        });
        Self {
            kind: caps[1].to_lowercase(),
            fold,
            title: caps.get(3).map_or("", |m| m.as_str().trim()),
            body: caps.get(4).map_or("", |m| m.as_str().trim()),
        }
    }

    /// Type restricted to `[a-z0-9-]` for use in a class name
    pub fn css_type(&self) -> String {
        self.kind
            .chars()
            .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
            .collect()
    }

    /// Declared title, or the capitalized type
    pub fn display_title(&self) -> Cow<'a, str> {
        if !self.title.is_empty() {
            return Cow::Borrowed(self.title);
        }
        let mut chars = self.kind.chars();
        match chars.next() {
            Some(first) => Cow::Owned(first.to_uppercase().chain(chars).collect()),
            None => Cow::Borrowed(""),
        }
    }

    pub fn to_html(&self) -> String {
        let css = self.css_type();
        let icon = callout_icon(&self.kind);
        let title = self.display_title();

        match self.fold {
            Some(fold) => {
                let open = if fold == Fold::Open { " open" } else { "" };
                format!(
                    "<details class=\"callout callout-{css}\"{open}>\n  \
                     <summary class=\"callout-title\"><span class=\"callout-icon\">{icon}</span> {title}</summary>\n  \
                     <div class=\"callout-content\">{body}</div>\n\
                     </details>\n",
                    body = self.body
                )
            }
            None => format!(
                "<div class=\"callout callout-{css}\">\n  \
                 <div class=\"callout-title\"><span class=\"callout-icon\">{icon}</span> {title}</div>\n  \
                 <div class=\"callout-content\">{body}</div>\n\
                 </div>\n",
                body = self.body
            ),
        }
    }
}

/// Replace every callout blockquote in `html`
pub fn render_callouts(html: &str) -> Cow<'_, str> {
    CALLOUT_RE.replace_all(html, |caps: &Captures| Callout::from_captures(caps).to_html())
}
