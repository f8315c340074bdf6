//! Mamba Tree
//!
//! Schema-less configuration trees built on `serde_json::Value`: the
//! recursive overlay merge, dotted-path addressing, TOML conversion and
//! canonical fingerprints. Nothing here holds state.

pub mod convert;
pub mod error;
pub mod fingerprint;
pub mod merge;
pub mod path;

pub use convert::{parse_json_tree, parse_toml_tree, toml_to_json};
pub use error::TreeError;
pub use fingerprint::fingerprint;
pub use merge::{deep_merge, merge_maps};
pub use path::{lookup, lookup_in, nest, segments, PATH_SEPARATOR};

use serde_json::{Map, Value};

/// A configuration tree: string keys at the root, arbitrary values below.
pub type ConfigTree = Map<String, Value>;

/// Short name of a value's variant, for messages.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
