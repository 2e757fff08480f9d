//! Configuration System
//!
//! Every setting has a default, so `WikigraphConfig::default()` is a complete
//! build configuration. A YAML file overrides individual sections:
//!
//! ```rust,ignore
//! use wikigraph_core::config::WikigraphConfig;
//!
//! let config = WikigraphConfig::from_yaml("wikigraph.yaml")?;
//! ```

pub mod error;
pub mod settings;

pub use error::{ConfigError, ConfigResult};
pub use settings::{
    GraphConfig, ResolverConfig, RewriterConfig, WeightPolicy, WikigraphConfig,
    SUPPORTED_VERSIONS,
};
