//! Dotted-path addressing.
//!
//! A path like `analyzer.hud_alert_delay` names one key per nesting level.
//! Segments are never trimmed and empty segments are ordinary keys, so
//! `file_picker.ignore_folders.` addresses the `""` entry.

use std::str::Split;

use serde_json::{Map, Value};

/// Separator between path segments.
pub const PATH_SEPARATOR: char = '.';

/// Split a dotted path into its key segments. Always yields at least one.
pub fn segments(path: &str) -> Split<'_, char> {
    path.split(PATH_SEPARATOR)
}

/// Resolve `path` starting at `root`.
///
/// Returns `None` if a segment is missing or if an intermediate value is
/// not an object. Arrays are not indexable by path.
pub fn lookup<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = root;
    for key in segments(path) {
        current = current.as_object()?.get(key)?;
    }
    Some(current)
}

/// [`lookup`] starting from a bare map.
pub fn lookup_in<'a>(root: &'a Map<String, Value>, path: &str) -> Option<&'a Value> {
    let mut keys = segments(path);
    let mut current = root.get(keys.next()?)?;
    for key in keys {
        current = current.as_object()?.get(key)?;
    }
    Some(current)
}

/// Build the smallest tree holding `value` at `path`.
///
/// `nest("general.jedi", true)` gives `{"general": {"jedi": true}}`.
pub fn nest(path: &str, value: Value) -> Map<String, Value> {
    let mut keys = segments(path).rev();
    let mut map = Map::new();
    map.insert(keys.next().unwrap_or_default().to_string(), value);
    for key in keys {
        let mut outer = Map::new();
        outer.insert(key.to_string(), Value::Object(map));
        map = outer;
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "general": {"page_line_count": 40},
            "analyzer": {"flake8": [["--select=E901"], ["--max-complexity=10"]]},
            "file_picker": {"ignore_folders": {"": [".git"], ".": [".Trash"]}}
        })
    }

    #[test]
    fn test_lookup_leaf() {
        let root = sample();
        assert_eq!(lookup(&root, "general.page_line_count"), Some(&json!(40)));
    }

    #[test]
    fn test_lookup_subtree() {
        let root = sample();
        assert_eq!(lookup(&root, "general"), Some(&json!({"page_line_count": 40})));
    }

    #[test]
    fn test_lookup_missing_key() {
        let root = sample();
        assert_eq!(lookup(&root, "general.jedi"), None);
        assert_eq!(lookup(&root, "nonexistent.path"), None);
    }

    #[test]
    fn test_lookup_through_scalar_is_none() {
        let root = sample();
        assert_eq!(lookup(&root, "general.page_line_count.deeper"), None);
    }

    #[test]
    fn test_lookup_does_not_index_arrays() {
        let root = sample();
        assert_eq!(lookup(&root, "analyzer.flake8.0"), None);
    }

    #[test]
    fn test_trailing_separator_addresses_empty_key() {
        let root = sample();
        assert_eq!(lookup(&root, "file_picker.ignore_folders."), Some(&json!([".git"])));
        assert_eq!(lookup(&root, "file_picker.ignore_folders.."), None);
    }

    #[test]
    fn test_lookup_in_matches_lookup() {
        let root = sample();
        let map = root.as_object().unwrap();
        for path in ["general", "general.page_line_count", "nope", "analyzer.flake8", ""] {
            assert_eq!(lookup_in(map, path), lookup(&root, path), "path {path:?}");
        }
    }

    #[test]
    fn test_nest() {
        assert_eq!(
            Value::Object(nest("general.jedi", json!(true))),
            json!({"general": {"jedi": true}})
        );
        assert_eq!(Value::Object(nest("solo", json!(1))), json!({"solo": 1}));
    }

    #[test]
    fn test_nest_then_lookup() {
        let nested = Value::Object(nest("a.b.c", json!("leaf")));
        assert_eq!(lookup(&nested, "a.b.c"), Some(&json!("leaf")));
    }
}
