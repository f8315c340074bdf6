//! Store behaviour against the built-in defaults
//!
//! Lookups, overlay merges and their composition, end to end through the
//! public API.

use mamba_config::config::{Analyzer, FilePicker, General};
use mamba_config::{BuiltinDefaults, ConfigStore, ConfigTree, Overlay};
use serde_json::{json, Value};

/// Helper to build an overlay from a JSON literal
fn overlay(value: Value) -> Overlay {
    Overlay::try_from(value).expect("overlay must be a mapping")
}

/// Every leaf path in a tree, dot-joined
fn leaf_paths(tree: &ConfigTree) -> Vec<(String, Value)> {
    fn walk(prefix: &str, value: &Value, out: &mut Vec<(String, Value)>) {
        match value {
            Value::Object(map) if !map.is_empty() => {
                for (key, child) in map {
                    walk(&format!("{}.{}", prefix, key), child, out);
                }
            }
            leaf => out.push((prefix.to_string(), leaf.clone())),
        }
    }

    let mut out = Vec::new();
    for (key, value) in tree {
        walk(key, value, &mut out);
    }
    out
}

// =============================================================================
// Lookups
// =============================================================================

#[test]
fn test_page_line_count_default() {
    let store = ConfigStore::new();
    assert_eq!(store.get("general.page_line_count"), Some(json!(40)));
}

#[test]
fn test_every_default_leaf_is_readable() {
    let store = ConfigStore::new();
    let defaults = BuiltinDefaults::default().to_tree();

    let leaves = leaf_paths(&defaults);
    assert!(leaves.len() > 10);
    for (path, expected) in leaves {
        // "." keys cannot be addressed by a dotted path
        if path.contains("..") {
            continue;
        }
        assert_eq!(store.get(&path), Some(expected), "path {path}");
    }
}

#[test]
fn test_missing_path_returns_default() {
    let store = ConfigStore::new();
    assert_eq!(store.get_or("nonexistent.path", "X"), json!("X"));
    assert_eq!(store.get_or("nonexistent.path", Value::Null), Value::Null);
    assert_eq!(store.get_or("general.jedi.too.deep", 0), json!(0));
}

#[test]
fn test_reads_are_non_destructive() {
    let store = ConfigStore::new();
    let before = store.fingerprint().unwrap();
    for _ in 0..5 {
        let _ = store.get("general.page_line_count");
        let _ = store.get("nonexistent.path");
        let _ = store.section::<Analyzer>();
    }
    assert_eq!(store.fingerprint().unwrap(), before);
    assert_eq!(store.get("general.page_line_count"), Some(json!(40)));
}

#[test]
fn test_empty_key_in_ignore_folders() {
    let store = ConfigStore::new();
    assert_eq!(store.get("file_picker.ignore_folders."), Some(json!([".git"])));
}

// =============================================================================
// Merges
// =============================================================================

#[test]
fn test_merge_preserves_untouched_sibling() {
    let store = ConfigStore::new();
    store.merge(overlay(json!({"general": {"jedi": true}})));

    assert_eq!(store.get("general.jedi"), Some(json!(true)));
    assert_eq!(store.get("general.page_line_count"), Some(json!(40)));
}

#[test]
fn test_merge_replaces_leaf_list() {
    let store = ConfigStore::new();
    store.merge(overlay(json!({
        "file_picker": {"ignore_folders": {"": [".git", ".svn"]}}
    })));

    let folders = store.get("file_picker.ignore_folders").unwrap();
    assert_eq!(folders[""], json!([".git", ".svn"]));
    // The "." entry is a sibling key inside a merged mapping, so it survives
    assert_eq!(
        folders["."],
        json!([".Trash", "Examples", "site-packages", "site-packages-2", "site-packages-3"])
    );

    let picker: FilePicker = store.section();
    assert!(picker.ignore_folders.is_ignored("project", ".svn", false));
}

#[test]
fn test_merge_collapses_section_to_list() {
    let store = ConfigStore::new();
    store.merge(overlay(json!({"analyzer": ["not", "a", "mapping"]})));

    assert_eq!(store.get("analyzer"), Some(json!(["not", "a", "mapping"])));
    assert_eq!(store.get_or("analyzer.hud_alert_delay", "gone"), json!("gone"));
}

#[test]
fn test_type_collapse_to_scalar() {
    let store = ConfigStore::new();
    store.merge(overlay(json!({"documentation": 5})));
    assert_eq!(store.get("documentation"), Some(json!(5)));
    assert_eq!(store.get("documentation.reuse"), None);
}

#[test]
fn test_merge_accepts_unknown_keys() {
    let store = ConfigStore::new();
    store.merge(overlay(json!({"theme": {"name": "dark"}, "general": {"font_size": 14}})));

    assert_eq!(store.get("theme.name"), Some(json!("dark")));
    assert_eq!(store.get("general.font_size"), Some(json!(14)));
    let general: General = store.section();
    assert_eq!(general.page_line_count, 40);
}

#[test]
fn test_top_level_sections_survive_merges() {
    let store = ConfigStore::new();
    store.merge(overlay(json!({"analyzer": false, "new_section": {}})));
    store.merge(overlay(json!({"tester": {"hide_console": false}})));

    let snapshot = store.snapshot();
    for key in BuiltinDefaults::section_keys() {
        assert!(snapshot.tree().contains_key(key), "lost section {key}");
    }
}

#[test]
fn test_same_overlay_twice_is_idempotent() {
    let update = overlay(json!({
        "general": {"jedi": true},
        "analyzer": {"flake8": [["--select=E999"]]},
        "documentation": {"frame": [0, 0, 100, 100]}
    }));

    let once = ConfigStore::new();
    once.merge(update.clone());

    let twice = ConfigStore::new();
    twice.merge(update.clone());
    twice.merge(update);

    assert_eq!(once.snapshot().tree(), twice.snapshot().tree());
    assert_eq!(once.fingerprint().unwrap(), twice.fingerprint().unwrap());
}

#[test]
fn test_sequential_overlays_compose() {
    let store = ConfigStore::new();
    store.merge(overlay(json!({
        "update": {"interval": 600, "enabled": false},
        "tester": {"hide_console": false}
    })));
    store.merge(overlay(json!({
        "update": {"interval": 60}
    })));

    // Present in B
    assert_eq!(store.get("update.interval"), Some(json!(60)));
    // Only in A
    assert_eq!(store.get("update.enabled"), Some(json!(false)));
    assert_eq!(store.get("tester.hide_console"), Some(json!(false)));
    // In neither
    assert_eq!(store.get("tester.hud_alert_delay"), Some(json!(1.0)));
    assert_eq!(store.get("general.page_line_count"), Some(json!(40)));
    assert_eq!(store.revision(), 2);
}

#[test]
fn test_store_matches_overlay_composition() {
    let a = overlay(json!({"general": {"jedi": true}, "update": {"interval": 5}}));
    let b = overlay(json!({"update": {"enabled": false}, "general": 1}));

    let sequential = ConfigStore::new();
    sequential.merge(a.clone());
    sequential.merge(b.clone());

    let combined = ConfigStore::new();
    combined.merge(a.then(b));

    assert_eq!(sequential.snapshot().tree(), combined.snapshot().tree());
}

#[test]
fn test_toml_and_assignment_overlays() {
    let store = ConfigStore::new();
    store.merge(
        Overlay::from_toml_str(
            r#"
[analyzer]
remove_whitespaces = false
flake8 = [["--select=E999"], ["--max-line-length=100"]]
"#,
        )
        .unwrap(),
    );
    store.merge(Overlay::from_assignment("analyzer.hud_alert_delay=2.5").unwrap());

    let analyzer: Analyzer = store.section();
    assert!(!analyzer.remove_whitespaces);
    assert_eq!(analyzer.hud_alert_delay, 2.5);
    assert_eq!(
        analyzer.passes().map(|pass| pass.join(" ")).collect::<Vec<_>>(),
        vec!["--select=E999", "--max-line-length=100"]
    );
}
