//! Lenient field extraction from decoded JSON objects
//!
//! Every helper treats a missing key and an explicit `null` the same way.
//! Values of an unexpected JSON type are kept in their textual form rather
//! than rejected.

use serde_json::{Map, Value};

pub type Object = Map<String, Value>;

/// View `data` as an object; anything else behaves like an empty object
pub fn as_object(data: Option<&Value>) -> Option<&Object> {
    data.and_then(Value::as_object)
}

/// Look up a non-null field
pub fn field<'a>(obj: Option<&'a Object>, key: &str) -> Option<&'a Value> {
    obj.and_then(|o| o.get(key)).filter(|v| !v.is_null())
}

/// Look up a string field
pub fn string(obj: Option<&Object>, key: &str) -> Option<String> {
    field(obj, key).map(text)
}

/// Look up a list of strings; absent means empty
pub fn string_list(obj: Option<&Object>, key: &str) -> Vec<String> {
    match field(obj, key) {
        None => Vec::new(),
        Some(Value::Array(items)) => items.iter().map(text).collect(),
        Some(other) => vec![text(other)],
    }
}

/// Look up a list of raw elements; absent or non-array means empty
pub fn list<'a>(obj: Option<&'a Object>, key: &str) -> &'a [Value] {
    match field(obj, key) {
        Some(Value::Array(items)) => items,
        _ => &[],
    }
}

fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
