//! Configuration store
//!
//! Two layers:
//! 1. Built-in defaults for every section
//! 2. Overlays supplied by the host at startup, merged in order
//!
//! Reads go through dotted paths (`analyzer.hud_alert_delay`) or typed
//! section views.

mod defaults;
mod effective;
mod error;
mod overlay;
mod sections;
mod store;

pub use defaults::BuiltinDefaults;
pub use effective::{ConfigOrigin, ConfigSource, EffectiveConfig, SCHEMA_ID, SCHEMA_VERSION};
pub use error::ConfigError;
pub use overlay::{parse_value, Overlay};
pub use sections::{
    Analyzer, Documentation, DragAndDrop, FilePicker, Frame, General, IgnoreFolders, Section,
    Tester, Update,
};
pub use store::{ActiveConfig, ConfigStore};
