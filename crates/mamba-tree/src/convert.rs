//! Text to tree conversion.

use serde_json::{Map, Value};

use crate::error::TreeError;
use crate::value_kind;

/// Parse JSON text whose top level must be an object.
pub fn parse_json_tree(text: &str) -> Result<Map<String, Value>, TreeError> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| TreeError::JsonParse(e.to_string()))?;
    into_object(value)
}

/// Parse a TOML document into a JSON object tree.
pub fn parse_toml_tree(text: &str) -> Result<Map<String, Value>, TreeError> {
    let table: toml::Table =
        toml::from_str(text).map_err(|e| TreeError::TomlParse(e.to_string()))?;
    into_object(toml_to_json(toml::Value::Table(table)))
}

/// Convert a TOML value to a JSON value.
///
/// Datetimes become their RFC 3339 strings; non-finite floats become null.
pub fn toml_to_json(toml: toml::Value) -> Value {
    match toml {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::Number(i.into()),
        toml::Value::Float(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(arr) => Value::Array(arr.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(k, v)| (k, toml_to_json(v)))
                .collect(),
        ),
    }
}

fn into_object(value: Value) -> Result<Map<String, Value>, TreeError> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(TreeError::NotAnObject(value_kind(&other))),
    }
}
