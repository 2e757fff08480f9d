//! Callout blocks in rendered output

mod transform;

pub use transform::{callout_icon, render_callouts, Callout, Fold};
