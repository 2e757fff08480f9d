//! Structured-text renderer seam
//!
//! The renderer itself lives outside this crate. Any `Fn(&str) -> String`
//! is a renderer, which keeps test doubles to a closure.

/// Turns rewritten markup into final output
pub trait Renderer {
    fn render(&self, text: &str) -> String;
}

impl<F> Renderer for F
where
    F: Fn(&str) -> String,
{
    fn render(&self, text: &str) -> String {
        self(text)
    }
}

/// Returns its input unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughRenderer;

impl Renderer for PassthroughRenderer {
    fn render(&self, text: &str) -> String {
        text.to_string()
    }
}
