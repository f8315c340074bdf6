//! Effective configuration with provenance
//!
//! Captures the active tree together with the revision it was read at and
//! every source that contributed to it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use mamba_tree::lookup;

use super::error::ConfigError;
use super::store::ActiveConfig;

/// Schema version for effective_config
pub const SCHEMA_VERSION: u32 = 1;

/// Schema identifier
pub const SCHEMA_ID: &str = "mamba-config/effective_config@1";

/// Origin of a configuration source
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ConfigOrigin {
    Builtin,
    Overlay,
}

/// A contributing config source with provenance
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConfigSource {
    /// Origin of this source
    pub origin: ConfigOrigin,

    /// Revision this source produced (0 for the defaults)
    pub revision: u64,

    /// Top-level keys the source touched (empty for the defaults)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keys: Vec<String>,

    /// When the source was applied
    pub applied_at: DateTime<Utc>,
}

impl ConfigSource {
    pub fn builtin() -> Self {
        Self {
            origin: ConfigOrigin::Builtin,
            revision: 0,
            keys: Vec::new(),
            applied_at: Utc::now(),
        }
    }

    pub fn overlay(revision: u64, keys: Vec<String>, applied_at: DateTime<Utc>) -> Self {
        Self {
            origin: ConfigOrigin::Overlay,
            revision,
            keys,
            applied_at,
        }
    }
}

/// Effective configuration with full provenance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectiveConfig {
    /// Schema version
    pub schema_version: u32,

    /// Schema identifier
    pub schema_id: String,

    /// When this view was taken
    pub created_at: DateTime<Utc>,

    /// Number of overlays applied
    pub revision: u64,

    /// SHA-256 of the canonical JSON of `config`
    pub fingerprint: String,

    /// The merged configuration object
    pub config: Value,

    /// Contributing sources in precedence order
    pub sources: Vec<ConfigSource>,
}

impl EffectiveConfig {
    pub fn from_active(active: &ActiveConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            schema_version: SCHEMA_VERSION,
            schema_id: SCHEMA_ID.to_string(),
            created_at: Utc::now(),
            revision: active.revision(),
            fingerprint: active.fingerprint()?,
            config: Value::Object(active.tree().clone()),
            sources: active.sources().to_vec(),
        })
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Get a config value by path (dot-separated)
    pub fn get(&self, path: &str) -> Option<&Value> {
        lookup(&self.config, path)
    }
}
