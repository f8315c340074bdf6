//! Typed views over the configuration sections.
//!
//! The store itself is schema-less. These structs give the plugin scripts
//! typed access to the sections they consume; missing fields fall back to
//! the built-in defaults and unknown keys are ignored.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A top-level configuration section with a typed view.
pub trait Section: Serialize + DeserializeOwned + Default {
    /// Top-level key of the section in the tree.
    const KEY: &'static str;
}

/// `general` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct General {
    /// Use JEDI for find usages, jump to definition and show documentation.
    pub jedi: bool,

    /// Register the default keyboard shortcuts.
    pub register_key_commands: bool,

    /// Lines to scroll for page up / page down.
    pub page_line_count: u32,
}

impl Section for General {
    const KEY: &'static str = "general";
}

/// `update` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Update {
    /// Check for updates.
    pub enabled: bool,

    /// Seconds between update checks.
    pub interval: u64,
}

impl Update {
    pub fn interval_duration(&self) -> Duration {
        Duration::from_secs(self.interval)
    }
}

impl Section for Update {
    const KEY: &'static str = "update";
}

/// Folders hidden from pickers, keyed by parent directory name.
///
/// Two keys are special: `""` matches any parent and `"."` matches the
/// Documents root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IgnoreFolders(pub BTreeMap<String, Vec<String>>);

impl IgnoreFolders {
    /// Key whose folders are ignored under every parent.
    pub const ANY_PARENT: &'static str = "";

    /// Key whose folders are ignored under the Documents root.
    pub const DOCUMENTS_ROOT: &'static str = ".";

    /// Whether `folder`, found inside a directory named `parent`, is ignored.
    pub fn is_ignored(&self, parent: &str, folder: &str, parent_is_documents: bool) -> bool {
        if self.lists(Self::ANY_PARENT, folder) {
            return true;
        }
        if parent_is_documents && self.lists(Self::DOCUMENTS_ROOT, folder) {
            return true;
        }
        parent != Self::ANY_PARENT && parent != Self::DOCUMENTS_ROOT && self.lists(parent, folder)
    }

    fn lists(&self, key: &str, folder: &str) -> bool {
        self.0
            .get(key)
            .is_some_and(|names| names.iter().any(|name| name == folder))
    }
}

impl<const N: usize> From<[(&str, &[&str]); N]> for IgnoreFolders {
    fn from(entries: [(&str, &[&str]); N]) -> Self {
        Self(
            entries
                .into_iter()
                .map(|(parent, names)| {
                    (parent.to_string(), names.iter().map(|n| n.to_string()).collect())
                })
                .collect(),
        )
    }
}

/// `file_picker` section (Open quickly / Run quickly).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePicker {
    pub ignore_folders: IgnoreFolders,
}

impl Section for FilePicker {
    const KEY: &'static str = "file_picker";
}

/// `analyzer` section.
///
/// The pre-1.1 options `ignore_codes` and `max_line_length` are ignored if
/// still present; `flake8` passes replace them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Analyzer {
    /// Seconds the result HUD stays visible.
    pub hud_alert_delay: f64,

    /// Strip trailing whitespace before analysis.
    pub remove_whitespaces: bool,

    /// flake8 passes; each pass is its own argument list.
    pub flake8: Vec<Vec<String>>,
}

impl Analyzer {
    pub fn hud_alert_duration(&self) -> Duration {
        hud_duration(self.hud_alert_delay)
    }

    /// Argument lists, one per flake8 run, in order.
    pub fn passes(&self) -> impl Iterator<Item = &[String]> {
        self.flake8.iter().map(Vec::as_slice)
    }
}

impl Section for Analyzer {
    const KEY: &'static str = "analyzer";
}

/// `tester` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tester {
    pub hud_alert_delay: f64,
    pub hide_console: bool,
}

impl Tester {
    pub fn hud_alert_duration(&self) -> Duration {
        hud_duration(self.hud_alert_delay)
    }
}

impl Section for Tester {
    const KEY: &'static str = "tester";
}

/// `drag_and_drop` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragAndDrop {
    pub ignore_folders: IgnoreFolders,
}

impl Section for DragAndDrop {
    const KEY: &'static str = "drag_and_drop";
}

/// Overlay frame in key window coordinates, stored as `[x, y, width, height]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl From<[f64; 4]> for Frame {
    fn from([x, y, width, height]: [f64; 4]) -> Self {
        Self { x, y, width, height }
    }
}

impl From<Frame> for [f64; 4] {
    fn from(frame: Frame) -> Self {
        [frame.x, frame.y, frame.width, frame.height]
    }
}

/// `documentation` section (Show documentation overlay).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Documentation {
    /// Reuse one overlay for consecutive lookups.
    pub reuse: bool,

    /// Initial overlay frame.
    pub frame: Frame,
}

impl Section for Documentation {
    const KEY: &'static str = "documentation";
}

// Negative or non-finite delays mean "no delay".
fn hud_duration(seconds: f64) -> Duration {
    Duration::try_from_secs_f64(seconds).unwrap_or(Duration::ZERO)
}
