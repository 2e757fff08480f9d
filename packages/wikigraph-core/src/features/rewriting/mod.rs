//! Protected-Region Content Rewriter
//!
//! - `tokenizer`    : literal / protected segmentation (code and math)
//! - `rewriter`     : wikilink → standard link conversion around rendering
//! - `placeholders` : tokens standing in for protected regions

pub mod placeholders;
pub mod rewriter;
pub mod tokenizer;

pub use placeholders::{MathTable, PlaceholderTable};
pub use rewriter::{ContentRewriter, PreRewrite};
pub use tokenizer::{mask_regions, tokenize, RegionKind, Segment};
