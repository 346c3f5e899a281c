//! The decode rules: one function per logical kind, all calling back into
//! the shared [`from_wire`] dispatcher.

use indexmap::IndexMap;
use thriftwire_compile::{ListSpec, MapSpec, SetSpec, StructSpec, TypeSpec};
use thriftwire_wire as wire;

use crate::default::eval_const;
use crate::error::{DecodeError, MapRole};
use crate::value::Value;

/// Decodes a wire value against a compiled type spec.
///
/// Fails fast: the first structural disagreement aborts the whole decode
/// and is returned as a [`DecodeError`] chain from the decode root down to
/// the exact position of the mismatch. No partial results are produced.
pub fn from_wire(spec: &TypeSpec, value: &wire::Value) -> Result<Value, DecodeError> {
    match spec {
        TypeSpec::Bool => match value {
            wire::Value::Bool(b) => Ok(Value::Bool(*b)),
            other => Err(type_mismatch(spec, other)),
        },
        TypeSpec::I8 => match value {
            wire::Value::I8(n) => Ok(Value::I8(*n)),
            other => Err(type_mismatch(spec, other)),
        },
        TypeSpec::I16 => match value {
            wire::Value::I16(n) => Ok(Value::I16(*n)),
            other => Err(type_mismatch(spec, other)),
        },
        TypeSpec::I32 => match value {
            wire::Value::I32(n) => Ok(Value::I32(*n)),
            other => Err(type_mismatch(spec, other)),
        },
        TypeSpec::I64 => match value {
            wire::Value::I64(n) => Ok(Value::I64(*n)),
            other => Err(type_mismatch(spec, other)),
        },
        TypeSpec::Double => match value {
            wire::Value::Double(d) => Ok(Value::Double(*d)),
            other => Err(type_mismatch(spec, other)),
        },
        // A string spec and a binary spec accept the same wire tag; only
        // the native representation differs. Payloads that are not valid
        // UTF-8 are decoded lossily (the wire model cannot distinguish a
        // string from arbitrary bytes, so this cannot be an error here).
        TypeSpec::String => match value {
            wire::Value::Binary(b) => Ok(Value::String(String::from_utf8_lossy(b).into_owned())),
            other => Err(type_mismatch(spec, other)),
        },
        TypeSpec::Binary => match value {
            wire::Value::Binary(b) => Ok(Value::Bytes(b.clone())),
            other => Err(type_mismatch(spec, other)),
        },
        TypeSpec::List(l) => decode_list(spec, l, value),
        TypeSpec::Set(s) => decode_set(spec, s, value),
        TypeSpec::Map(m) => decode_map(spec, m, value),
        TypeSpec::Struct(s) => decode_struct(spec, s, value),
    }
}

/// Bare leaf error: the outermost shapes disagree, so no wrapping context
/// is added at this position.
fn type_mismatch(spec: &TypeSpec, got: &wire::Value) -> DecodeError {
    DecodeError::TypeMismatch {
        expected: spec.wire_type(),
        got: got.wire_type(),
    }
}

/// Wraps an inner failure with the rendered name of the spec being
/// validated at this nesting level.
fn value_mismatch(spec: &TypeSpec, inner: DecodeError) -> DecodeError {
    DecodeError::ValueMismatch {
        type_name: spec.type_name(),
        inner: inner.boxed(),
    }
}

fn decode_list(
    spec: &TypeSpec,
    list: &ListSpec,
    value: &wire::Value,
) -> Result<Value, DecodeError> {
    match value {
        wire::Value::List { items, .. } => {
            let items = decode_items(&list.elem, items).map_err(|e| value_mismatch(spec, e))?;
            Ok(Value::List(items))
        }
        other => Err(type_mismatch(spec, other)),
    }
}

fn decode_set(spec: &TypeSpec, set: &SetSpec, value: &wire::Value) -> Result<Value, DecodeError> {
    match value {
        // Sets share the list wire tag; only the native kind differs.
        wire::Value::List { items, .. } => {
            let items = decode_items(&set.elem, items).map_err(|e| value_mismatch(spec, e))?;
            Ok(Value::Set(items))
        }
        other => Err(type_mismatch(spec, other)),
    }
}

/// Decodes collection items in order, failing fast on the first bad index.
fn decode_items(elem: &TypeSpec, items: &[wire::Value]) -> Result<Vec<Value>, DecodeError> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            from_wire(elem, item).map_err(|e| DecodeError::ListItemMismatch {
                index,
                inner: e.boxed(),
            })
        })
        .collect()
}

fn decode_map(spec: &TypeSpec, map: &MapSpec, value: &wire::Value) -> Result<Value, DecodeError> {
    match value {
        wire::Value::Map { items, .. } => {
            let mut pairs: Vec<(Value, Value)> = Vec::with_capacity(items.len());
            for item in items {
                // The key is always checked first, so within one pair a key
                // failure outranks a value failure.
                let key = from_wire(&map.key, &item.key).map_err(|e| {
                    value_mismatch(
                        spec,
                        DecodeError::MapItemMismatch {
                            role: MapRole::Key,
                            inner: e.boxed(),
                        },
                    )
                })?;
                let val = from_wire(&map.value, &item.value).map_err(|e| {
                    value_mismatch(
                        spec,
                        DecodeError::MapItemMismatch {
                            role: MapRole::Value,
                            inner: e.boxed(),
                        },
                    )
                })?;
                Value::map_insert(&mut pairs, key, val);
            }
            Ok(Value::Map(pairs))
        }
        other => Err(type_mismatch(spec, other)),
    }
}

/// Decodes a wire struct against a record spec.
///
/// Wire fields with an id unknown to this schema version are dropped
/// silently (forward compatibility). After the wire fields are exhausted,
/// every spec field still unset that carries a default is populated with
/// the evaluated default, regardless of required/optional status. A field
/// with neither a wire value nor a default is simply absent from the
/// result; presence enforcement belongs to typed bindings above this layer.
fn decode_struct(
    spec: &TypeSpec,
    record: &StructSpec,
    value: &wire::Value,
) -> Result<Value, DecodeError> {
    match value {
        wire::Value::Struct { fields } => {
            let mut out: IndexMap<String, Value> = IndexMap::with_capacity(record.fields.len());
            for field in fields {
                let Some(field_spec) = record.fields.get_by_id(field.id) else {
                    continue;
                };
                let decoded = from_wire(&field_spec.spec, &field.value).map_err(|e| {
                    value_mismatch(
                        spec,
                        DecodeError::StructFieldMismatch {
                            field: field_spec.name.clone(),
                            inner: e.boxed(),
                        },
                    )
                })?;
                out.insert(field_spec.name.clone(), decoded);
            }
            for field_spec in record.fields.iter() {
                if out.contains_key(&field_spec.name) {
                    continue;
                }
                if let Some(default) = &field_spec.default {
                    out.insert(field_spec.name.clone(), eval_const(&field_spec.spec, default));
                }
            }
            Ok(Value::Struct(out))
        }
        other => Err(type_mismatch(spec, other)),
    }
}
