/*
 * Wikigraph Core - wikilink resolution, backlinks and link graph
 *
 * Feature-First Architecture:
 * - shared/      : Document records, corpus arena, graph wire types
 * - features/    : alias index → link resolution → graph aggregation,
 *                  protected-region rewriting, callouts
 * - pipeline/    : Build orchestration and render hooks
 * - config/      : Versioned YAML configuration
 *
 * Runs once per corpus build, before and after an external renderer.
 */

#![allow(clippy::new_without_default)] // Constructors take explicit config
#![allow(clippy::module_inception)] // Module naming intentional

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Configuration (YAML, versioned)
pub mod config;

/// Error types
pub mod errors;

/// Feature modules
pub mod features;

/// Build orchestration
pub mod pipeline;

/// Shared models and utilities
pub mod shared;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports
// ═══════════════════════════════════════════════════════════════════════════

pub use config::{WeightPolicy, WikigraphConfig};
pub use errors::{Result, WikigraphError};
pub use features::alias_index::{AliasIndex, LinkTarget};
pub use features::graph::{GraphAggregator, LinkGraph};
pub use features::link_resolution::{ForwardLinks, LinkResolver};
pub use features::rewriting::{ContentRewriter, MathTable, PreRewrite};
pub use pipeline::{BuildOutput, BuildReport, PassthroughRenderer, Pipeline, Renderer};
pub use shared::models::{
    BacklinkEntry, Collection, Corpus, DocId, DocumentRecord, GraphData, GraphEdge, GraphNode,
};
