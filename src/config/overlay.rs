//! Overlays: partial trees merged over the active configuration.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use mamba_tree::{merge_maps, nest, parse_json_tree, parse_toml_tree, value_kind};

use super::error::ConfigError;
use crate::ConfigTree;

/// A partial configuration tree.
///
/// Always a mapping at the top level; anything below is accepted as is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Overlay(ConfigTree);

impl Overlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON object.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(Self(parse_json_tree(text)?))
    }

    /// Parse a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(Self(parse_toml_tree(text)?))
    }

    /// Parse `PATH=VALUE`, e.g. `general.page_line_count=60`.
    ///
    /// VALUE is read as JSON when it parses, otherwise taken as a string, so
    /// `analyzer.flake8=[["--select=E999"]]` and `general.theme=dark` both work.
    pub fn from_assignment(assignment: &str) -> Result<Self, ConfigError> {
        let Some((path, raw)) = assignment.split_once('=') else {
            return Err(ConfigError::InvalidAssignment(assignment.to_string()));
        };
        if path.is_empty() {
            return Err(ConfigError::InvalidAssignment(assignment.to_string()));
        }
        Ok(Self::new().set(path, parse_value(raw)))
    }

    /// Set `value` at a dotted path, merging with what is already here.
    pub fn set(self, path: &str, value: impl Into<Value>) -> Self {
        self.then(Self(nest(path, value.into())))
    }

    /// Compose with `later`, whose values win.
    pub fn then(self, later: Overlay) -> Self {
        Self(merge_maps(self.0, later.0))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Top-level keys this overlay touches, sorted.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.0.keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn as_tree(&self) -> &ConfigTree {
        &self.0
    }

    pub fn into_tree(self) -> ConfigTree {
        self.0
    }
}

impl From<ConfigTree> for Overlay {
    fn from(tree: ConfigTree) -> Self {
        Self(tree)
    }
}

impl TryFrom<Value> for Overlay {
    type Error = ConfigError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(tree) => Ok(Self(tree)),
            other => Err(ConfigError::NotAMapping {
                found: value_kind(&other),
            }),
        }
    }
}

/// Read a command-line value as JSON, falling back to a plain string.
pub fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}
