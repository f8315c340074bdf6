//! Overlay merge
//!
//! Merge rules, applied key by key:
//! - Object over object: merge recursively, untouched base keys survive
//! - Empty object over a non-object: nothing to install, base kept
//! - Anything else: the overlay value replaces the base value outright
//!
//! Arrays are never concatenated, and an object in the base collapses to
//! whatever non-object value the overlay puts at the same key.

use serde_json::{Map, Value};

/// Merge `overlay` on top of `base`, consuming both.
///
/// Recurses only when both sides are objects. A scalar, array or null
/// overlay wins over any base value, and a non-empty object overlay wins
/// over a non-object base. An empty object carries no pairs to install, so
/// it leaves a non-object base untouched.
pub fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            Value::Object(merge_maps(base_map, overlay_map))
        }
        (base, Value::Object(overlay_map)) if overlay_map.is_empty() => base,
        (_, overlay) => overlay,
    }
}

/// Merge two object maps key by key. See [`deep_merge`].
pub fn merge_maps(mut base: Map<String, Value>, overlay: Map<String, Value>) -> Map<String, Value> {
    for (key, overlay_value) in overlay {
        let merged = match base.remove(&key) {
            Some(base_value) => deep_merge(base_value, overlay_value),
            None => overlay_value,
        };
        base.insert(key, merged);
    }
    base
}
