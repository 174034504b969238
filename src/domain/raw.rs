//! Accessors over raw (untyped) YAML mappings.
//!
//! Loaders and the validator both read the same untyped representation, so
//! every lookup here is total: a wrong type is reported as `None`, never a
//! panic.

use serde_yaml_ng::{Mapping, Value};

/// Look up `key`, treating an explicit `null` as absent.
pub fn present<'a>(map: &'a Mapping, key: &str) -> Option<&'a Value> {
    map.get(key).filter(|v| !v.is_null())
}

pub fn str_at<'a>(map: &'a Mapping, key: &str) -> Option<&'a str> {
    present(map, key).and_then(Value::as_str)
}

pub fn mapping_at<'a>(map: &'a Mapping, key: &str) -> Option<&'a Mapping> {
    present(map, key).and_then(Value::as_mapping)
}

pub fn sequence_at<'a>(map: &'a Mapping, key: &str) -> Option<&'a [Value]> {
    present(map, key)
        .and_then(Value::as_sequence)
        .map(Vec::as_slice)
}

/// Python-style truthiness: empty strings, empty collections, `0`, `false`
/// and `null` are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Sequence(seq) => !seq.is_empty(),
        Value::Mapping(map) => !map.is_empty(),
        Value::Tagged(tagged) => is_truthy(&tagged.value),
    }
}

/// Render a raw value for use inside a finding message.
pub fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Sequence(_) => "<list>".to_string(),
        Value::Mapping(_) => "<mapping>".to_string(),
        Value::Tagged(tagged) => format!("{} {}", tagged.tag, describe(&tagged.value)),
    }
}

pub(crate) fn string_value(s: impl Into<String>) -> Value {
    Value::String(s.into())
}
