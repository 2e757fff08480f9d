//! Link Resolution
//!
//! - `extractor` : wikilink / markdown link discovery outside code and math
//! - `resolver`  : references → document handles via the alias index

pub mod extractor;
pub mod resolver;

pub use extractor::{extract_references, Reference, ReferenceKind};
pub use resolver::{ForwardLinks, LinkResolver};
