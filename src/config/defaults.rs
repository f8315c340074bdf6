//! Built-in defaults
//!
//! Hardcoded baseline for every section. Scripts read these values through
//! the store; nothing here is interpreted by the store itself.

use serde::Serialize;
use serde_json::{Map, Value};

use super::sections::{
    Analyzer, Documentation, DragAndDrop, FilePicker, Frame, General, IgnoreFolders, Section,
    Tester, Update,
};
use crate::ConfigTree;

/// Folders ignored everywhere and under the Documents root.
const IGNORED_IN_DOCUMENTS: &[&str] = &[
    ".Trash",
    "Examples",
    "site-packages",
    "site-packages-2",
    "site-packages-3",
];

impl Default for General {
    fn default() -> Self {
        Self {
            jedi: false,
            register_key_commands: true,
            page_line_count: 40,
        }
    }
}

impl Default for Update {
    fn default() -> Self {
        Self {
            enabled: true,
            interval: 3600,
        }
    }
}

impl Default for FilePicker {
    fn default() -> Self {
        Self {
            ignore_folders: IgnoreFolders::from([
                (IgnoreFolders::ANY_PARENT, &[".git"][..]),
                (IgnoreFolders::DOCUMENTS_ROOT, IGNORED_IN_DOCUMENTS),
            ]),
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self {
            hud_alert_delay: 1.0,
            remove_whitespaces: true,
            flake8: vec![
                vec!["--select=E901,E999,F821,F822,F823".to_string()],
                vec![
                    "--max-complexity=10".to_string(),
                    "--max-line-length=127".to_string(),
                ],
            ],
        }
    }
}

impl Default for Tester {
    fn default() -> Self {
        Self {
            hud_alert_delay: 1.0,
            hide_console: true,
        }
    }
}

impl Default for DragAndDrop {
    fn default() -> Self {
        let mut documents: Vec<&str> = IGNORED_IN_DOCUMENTS.to_vec();
        documents.push("stash_extensions");
        Self {
            ignore_folders: IgnoreFolders::from([
                (IgnoreFolders::ANY_PARENT, &[".git"][..]),
                (IgnoreFolders::DOCUMENTS_ROOT, documents.as_slice()),
            ]),
        }
    }
}

impl Default for Documentation {
    fn default() -> Self {
        Self {
            reuse: true,
            frame: Frame {
                x: 630.0,
                y: 110.0,
                width: 730.0,
                height: 350.0,
            },
        }
    }
}

/// Built-in default configuration, one field per section.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BuiltinDefaults {
    pub general: General,
    pub update: Update,
    pub file_picker: FilePicker,
    pub analyzer: Analyzer,
    pub tester: Tester,
    pub drag_and_drop: DragAndDrop,
    pub documentation: Documentation,
}

impl BuiltinDefaults {
    /// Convert to a tree for merging
    pub fn to_tree(&self) -> ConfigTree {
        let general = &self.general;
        let update = &self.update;
        let analyzer = &self.analyzer;
        let tester = &self.tester;
        let documentation = &self.documentation;
        let frame = documentation.frame;

        [
            (
                General::KEY,
                object([
                    ("jedi", Value::from(general.jedi)),
                    ("register_key_commands", Value::from(general.register_key_commands)),
                    ("page_line_count", Value::from(general.page_line_count)),
                ]),
            ),
            (
                Update::KEY,
                object([
                    ("enabled", Value::from(update.enabled)),
                    ("interval", Value::from(update.interval)),
                ]),
            ),
            (
                FilePicker::KEY,
                object([(
                    "ignore_folders",
                    ignore_folders_value(&self.file_picker.ignore_folders),
                )]),
            ),
            (
                Analyzer::KEY,
                object([
                    ("hud_alert_delay", Value::from(analyzer.hud_alert_delay)),
                    ("remove_whitespaces", Value::from(analyzer.remove_whitespaces)),
                    ("flake8", Value::from(analyzer.flake8.clone())),
                ]),
            ),
            (
                Tester::KEY,
                object([
                    ("hud_alert_delay", Value::from(tester.hud_alert_delay)),
                    ("hide_console", Value::from(tester.hide_console)),
                ]),
            ),
            (
                DragAndDrop::KEY,
                object([(
                    "ignore_folders",
                    ignore_folders_value(&self.drag_and_drop.ignore_folders),
                )]),
            ),
            (
                Documentation::KEY,
                object([
                    ("reuse", Value::from(documentation.reuse)),
                    (
                        "frame",
                        Value::from(vec![frame.x, frame.y, frame.width, frame.height]),
                    ),
                ]),
            ),
        ]
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
    }

    /// Top-level section keys, in declaration order.
    pub fn section_keys() -> [&'static str; 7] {
        [
            General::KEY,
            Update::KEY,
            FilePicker::KEY,
            Analyzer::KEY,
            Tester::KEY,
            DragAndDrop::KEY,
            Documentation::KEY,
        ]
    }
}

fn object<const N: usize>(entries: [(&str, Value); N]) -> Value {
    Value::Object(
        entries
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect::<Map<String, Value>>(),
    )
}

fn ignore_folders_value(folders: &IgnoreFolders) -> Value {
    Value::Object(
        folders
            .0
            .iter()
            .map(|(parent, names)| (parent.clone(), Value::from(names.clone())))
            .collect(),
    )
}
