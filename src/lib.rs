//! Mamba Config - layered configuration for the Black Mamba editor plugin
//!
//! A [`ConfigStore`] starts from the built-in defaults and deep-merges
//! overlays supplied by the host. Scripts read values back by dotted path
//! or through typed section views.

pub mod config;
pub mod logging;

pub use config::{
    BuiltinDefaults, ConfigError, ConfigStore, EffectiveConfig, Overlay, Section,
};
pub use mamba_tree::ConfigTree;
