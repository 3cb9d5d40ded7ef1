//! Introspection Configuration
//!
//! Knobs shared by the metadata store and the property index builders.

use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Capacity used for lazily created maps and index lists.
pub const DEFAULT_INITIAL_CAPACITY: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IntrospectionConfig {
    /// Fail `build()` when a property slot was never populated.
    /// When disabled, unset slots are skipped by readers.
    pub require_complete_properties: bool,
    /// Capacity hint for maps and lists allocated on first write.
    pub initial_capacity: usize,
}

impl Default for IntrospectionConfig {
    fn default() -> Self {
        Self {
            require_complete_properties: true,
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
        }
    }
}

impl IntrospectionConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_json_str(&content)?;
        debug!("loaded introspection config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    pub fn from_json_str(content: &str) -> anyhow::Result<Self> {
        let config: IntrospectionConfig = serde_json::from_str(content)?;
        Ok(config)
    }

    /// Relaxed configuration: unset property slots are tolerated.
    pub fn lenient() -> Self {
        Self {
            require_complete_properties: false,
            ..Default::default()
        }
    }
}
