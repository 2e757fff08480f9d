//! Shared utilities

pub mod front_matter;
pub mod patterns;
pub mod slug;

pub use front_matter::{split_front_matter, strip_front_matter};
