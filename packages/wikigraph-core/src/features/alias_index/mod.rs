//! Document Alias Index
//!
//! Built once per corpus build from all document records, then shared
//! read-only by link resolution and content rewriting.

mod index;

pub use index::{alias_keys, AliasIndex, LinkTarget};
