//! Lossy projection of native values into `serde_json::Value`, for
//! logging and diagnostics.
//!
//! The mapping is deliberately one-way: byte payloads become base64 data
//! URIs, sets and lists both become arrays, and map keys that are not
//! strings are rendered through their own JSON form. Object key order is
//! preserved.

use base64::Engine;
use serde_json::json;

use crate::value::Value;

pub fn to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::I8(n) => json!(n),
        Value::I16(n) => json!(n),
        Value::I32(n) => json!(n),
        Value::I64(n) => json!(n),
        Value::Double(d) => json!(d),
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Bytes(b) => {
            let b64 = base64::engine::general_purpose::STANDARD.encode(b);
            serde_json::Value::String(format!("data:application/octet-stream;base64,{b64}"))
        }
        Value::List(items) | Value::Set(items) => {
            serde_json::Value::Array(items.iter().map(to_json).collect())
        }
        Value::Map(pairs) => serde_json::Value::Object(
            pairs
                .iter()
                .map(|(k, v)| (json_key(k), to_json(v)))
                .collect(),
        ),
        Value::Struct(fields) => serde_json::Value::Object(
            fields
                .iter()
                .map(|(name, v)| (name.clone(), to_json(v)))
                .collect(),
        ),
    }
}

fn json_key(key: &Value) -> String {
    match to_json(key) {
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    }
}
