//! Build configuration
//!
//! One struct per pipeline stage, all defaulted, loaded from a versioned
//! YAML document.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::error::{ConfigError, ConfigResult};

/// Schema versions this crate can read
pub const SUPPORTED_VERSIONS: &[u32] = &[1];

/// How a graph node's weight counts references
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightPolicy {
    /// Only references whose both endpoints are graph nodes
    GraphOnly,

    /// Every forward link and backlink, graph-excluded ends included
    AllReferences,
}

impl Default for WeightPolicy {
    fn default() -> Self {
        WeightPolicy::GraphOnly
    }
}

/// Link extraction settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolverConfig {
    /// Standard-link hrefs starting with any of these are never resolved
    pub skip_prefixes: Vec<String>,

    /// Retry an unresolved href with its `#fragment` removed
    pub strip_fragments: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            skip_prefixes: vec!["http".to_string(), "#".to_string(), "mailto:".to_string()],
            strip_fragments: true,
        }
    }
}

impl ResolverConfig {
    pub fn is_skipped(&self, href: &str) -> bool {
        self.skip_prefixes.iter().any(|p| href.starts_with(p.as_str()))
    }
}

/// Link graph settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GraphConfig {
    pub weight_policy: WeightPolicy,
}

/// Content rewriting settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RewriterConfig {
    /// Leading text of math placeholder tokens (ASCII alphanumeric)
    pub placeholder_prefix: String,

    /// Keep math masked through rendering
    pub shield_math: bool,
}

impl Default for RewriterConfig {
    fn default() -> Self {
        Self {
            placeholder_prefix: "WIKIGRAPHMATH".to_string(),
            shield_math: true,
        }
    }
}

/// Top-level configuration
///
/// ```yaml
/// version: 1
/// graph:
///   weight_policy: all_references
/// rewriter:
///   shield_math: true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WikigraphConfig {
    pub version: u32,
    pub resolver: ResolverConfig,
    pub graph: GraphConfig,
    pub rewriter: RewriterConfig,

    /// Turn `> [!type]` blockquotes into callout markup after rendering
    pub callouts: bool,

    /// Resolve documents on the rayon pool
    pub parallel: bool,
}

impl Default for WikigraphConfig {
    fn default() -> Self {
        Self {
            version: 1,
            resolver: ResolverConfig::default(),
            graph: GraphConfig::default(),
            rewriter: RewriterConfig::default(),
            callouts: true,
            parallel: true,
        }
    }
}

impl WikigraphConfig {
    /// Load and validate a YAML configuration file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parse and validate a YAML configuration document
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let value: serde_yaml::Value = serde_yaml::from_str(content)?;

        let version = value
            .get("version")
            .ok_or(ConfigError::MissingVersion)?
            .as_u64()
            .ok_or_else(|| ConfigError::InvalidField {
                field: "version".to_string(),
                value: format!("{:?}", value.get("version")),
                hint: "The version must be a positive integer.".to_string(),
            })?;
        let version = u32::try_from(version).unwrap_or(u32::MAX);
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let config: Self = serde_yaml::from_value(value)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> ConfigResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Range and format checks
    pub fn validate(&self) -> ConfigResult<()> {
        let prefix = &self.rewriter.placeholder_prefix;
        if prefix.is_empty() || !prefix.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ConfigError::InvalidField {
                field: "rewriter.placeholder_prefix".to_string(),
                value: format!("{:?}", prefix),
                hint: "Use a non-empty run of ASCII letters and digits so renderers leave it intact."
                    .to_string(),
            });
        }

        if let Some(empty) = self.resolver.skip_prefixes.iter().position(|p| p.is_empty()) {
            return Err(ConfigError::InvalidField {
                field: format!("resolver.skip_prefixes[{}]", empty),
                value: "\"\"".to_string(),
                hint: "An empty prefix would skip every link.".to_string(),
            });
        }

        Ok(())
    }
}
