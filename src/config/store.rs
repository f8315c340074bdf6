//! The configuration store
//!
//! One owner builds a [`ConfigStore`], applies overlays, and shares it with
//! readers. Each merge builds a fresh tree from a deep copy of the current
//! one and publishes it with a single pointer swap, so a reader sees either
//! the old tree or the new one and never anything in between.

use std::sync::Arc;

use arc_swap::ArcSwap;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, trace, warn};

use mamba_tree::{fingerprint, lookup_in, merge_maps, value_kind};

use super::defaults::BuiltinDefaults;
use super::effective::{ConfigSource, EffectiveConfig};
use super::error::ConfigError;
use super::overlay::Overlay;
use super::sections::Section;
use crate::ConfigTree;

/// One published version of the configuration.
#[derive(Debug, Clone)]
pub struct ActiveConfig {
    tree: ConfigTree,
    revision: u64,
    sources: Vec<ConfigSource>,
}

impl ActiveConfig {
    fn initial(defaults: ConfigTree) -> Self {
        Self {
            tree: defaults,
            revision: 0,
            sources: vec![ConfigSource::builtin()],
        }
    }

    /// The next version, with `overlay` merged over a copy of this one.
    fn merged(&self, overlay: &Overlay, applied_at: DateTime<Utc>) -> Self {
        let revision = self.revision + 1;
        let mut sources = self.sources.clone();
        sources.push(ConfigSource::overlay(revision, overlay.keys(), applied_at));

        Self {
            tree: merge_maps(self.tree.clone(), overlay.as_tree().clone()),
            revision,
            sources,
        }
    }

    pub fn tree(&self) -> &ConfigTree {
        &self.tree
    }

    /// Overlays applied so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn sources(&self) -> &[ConfigSource] {
        &self.sources
    }

    /// Value at a dotted path, or `None` if any segment is missing or not
    /// indexable.
    pub fn get(&self, path: &str) -> Option<&Value> {
        lookup_in(&self.tree, path)
    }

    pub fn fingerprint(&self) -> Result<String, ConfigError> {
        Ok(fingerprint(&self.tree)?)
    }
}

/// Holds the defaults and the active configuration.
#[derive(Debug)]
pub struct ConfigStore {
    defaults: Arc<ConfigTree>,
    active: ArcSwap<ActiveConfig>,
}

impl ConfigStore {
    /// A store seeded with [`BuiltinDefaults`].
    pub fn new() -> Self {
        Self::with_defaults(BuiltinDefaults::default().to_tree())
    }

    /// A store seeded with a caller-provided baseline.
    pub fn with_defaults(defaults: ConfigTree) -> Self {
        let active = ActiveConfig::initial(defaults.clone());
        Self {
            defaults: Arc::new(defaults),
            active: ArcSwap::from_pointee(active),
        }
    }

    /// The baseline this store was created with. Never changes.
    pub fn defaults(&self) -> &ConfigTree {
        &self.defaults
    }

    /// The current version, for several reads against one tree.
    pub fn snapshot(&self) -> Arc<ActiveConfig> {
        self.active.load_full()
    }

    pub fn revision(&self) -> u64 {
        self.active.load().revision
    }

    /// Value at a dotted path.
    ///
    /// A missing key and a non-mapping intermediate both yield `None`.
    pub fn get(&self, path: &str) -> Option<Value> {
        let found = self.active.load().get(path).cloned();
        if found.is_none() {
            trace!(path, "config path not found");
        }
        found
    }

    /// Value at a dotted path, or `default` when the path does not resolve.
    pub fn get_or(&self, path: &str, default: impl Into<Value>) -> Value {
        self.get(path).unwrap_or_else(|| default.into())
    }

    pub fn contains(&self, path: &str) -> bool {
        self.active.load().get(path).is_some()
    }

    pub fn get_bool(&self, path: &str) -> Option<bool> {
        self.active.load().get(path).and_then(Value::as_bool)
    }

    pub fn get_u64(&self, path: &str) -> Option<u64> {
        self.active.load().get(path).and_then(Value::as_u64)
    }

    pub fn get_f64(&self, path: &str) -> Option<f64> {
        self.active.load().get(path).and_then(Value::as_f64)
    }

    pub fn get_string(&self, path: &str) -> Option<String> {
        self.active
            .load()
            .get(path)
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    /// Deep-merge `overlay` over the active configuration.
    ///
    /// Mappings merge key by key; any other overlay value replaces what was
    /// there, collapsing a whole subtree if needed. Never fails. Concurrent
    /// merges are retried against the newest tree so none is lost.
    pub fn merge(&self, overlay: impl Into<Overlay>) {
        let overlay = overlay.into();
        let applied_at = Utc::now();
        let previous = self
            .active
            .rcu(|current| current.merged(&overlay, applied_at));

        debug!(
            revision = previous.revision + 1,
            keys = ?overlay.keys(),
            "applied config overlay"
        );
    }

    /// [`merge`](Self::merge) for an untyped value, which must be a mapping.
    pub fn merge_value(&self, value: Value) -> Result<(), ConfigError> {
        let overlay = Overlay::try_from(value)?;
        self.merge(overlay);
        Ok(())
    }

    /// Typed view of a section.
    ///
    /// Missing fields take their built-in defaults. A missing section or one
    /// collapsed to a non-mapping value yields the built-in section.
    pub fn section<S: Section>(&self) -> S {
        let active = self.active.load();
        let Some(value) = active.tree.get(S::KEY) else {
            warn!(section = S::KEY, "config section missing, using built-in defaults");
            return S::default();
        };

        match S::deserialize(value) {
            Ok(section) => section,
            Err(e) => {
                warn!(
                    section = S::KEY,
                    found = value_kind(value),
                    error = %e,
                    "config section has unexpected shape, using built-in defaults"
                );
                S::default()
            }
        }
    }

    /// SHA-256 of the canonical JSON of the active tree.
    pub fn fingerprint(&self) -> Result<String, ConfigError> {
        self.active.load().fingerprint()
    }

    pub fn effective(&self) -> Result<EffectiveConfig, ConfigError> {
        EffectiveConfig::from_active(&self.active.load())
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}
