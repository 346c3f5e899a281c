//! Default-constant evaluation.
//!
//! Turns a compiled [`ConstValue`] into the native value that decoding an
//! equivalent wire value against the same spec would have produced. The
//! compiler has already validated every constant against its declared
//! type, so evaluation is total: a shape the spec cannot direct falls back
//! to the constant's natural native form.

use indexmap::IndexMap;
use thriftwire_compile::{ConstValue, TypeSpec};

use crate::value::Value;

pub(crate) fn eval_const(spec: &TypeSpec, constant: &ConstValue) -> Value {
    match (spec, constant) {
        (TypeSpec::Bool, ConstValue::Bool(b)) => Value::Bool(*b),
        // IDL integer literals are untyped; narrow to the declared width.
        (TypeSpec::I8, ConstValue::Int(n)) => Value::I8(*n as i8),
        (TypeSpec::I16, ConstValue::Int(n)) => Value::I16(*n as i16),
        (TypeSpec::I32, ConstValue::Int(n)) => Value::I32(*n as i32),
        (TypeSpec::I64, ConstValue::Int(n)) => Value::I64(*n),
        (TypeSpec::Double, ConstValue::Double(d)) => Value::Double(*d),
        (TypeSpec::Double, ConstValue::Int(n)) => Value::Double(*n as f64),
        (TypeSpec::String, ConstValue::String(s)) => Value::String(s.clone()),
        (TypeSpec::Binary, ConstValue::String(s)) => Value::Bytes(s.clone().into_bytes()),
        (TypeSpec::Binary, ConstValue::Binary(b)) => Value::Bytes(b.clone()),
        (TypeSpec::List(l), ConstValue::List(items)) => {
            Value::List(items.iter().map(|c| eval_const(&l.elem, c)).collect())
        }
        (TypeSpec::Set(s), ConstValue::List(items)) => {
            Value::Set(items.iter().map(|c| eval_const(&s.elem, c)).collect())
        }
        (TypeSpec::Map(m), ConstValue::Map(items)) => {
            let mut pairs = Vec::with_capacity(items.len());
            for (k, v) in items {
                Value::map_insert(&mut pairs, eval_const(&m.key, k), eval_const(&m.value, v));
            }
            Value::Map(pairs)
        }
        (TypeSpec::Struct(record), ConstValue::Struct(entries)) => {
            let mut out: IndexMap<String, Value> = IndexMap::with_capacity(entries.len());
            for (name, c) in entries {
                let Some(field_spec) = record.fields.get(name) else {
                    continue;
                };
                out.insert(name.clone(), eval_const(&field_spec.spec, c));
            }
            // Nested defaults apply the same way the struct decode rule
            // applies them to fields absent from the wire.
            for field_spec in record.fields.iter() {
                if out.contains_key(&field_spec.name) {
                    continue;
                }
                if let Some(default) = &field_spec.default {
                    out.insert(field_spec.name.clone(), eval_const(&field_spec.spec, default));
                }
            }
            Value::Struct(out)
        }
        (_, constant) => natural(constant),
    }
}

/// Spec-independent rendering, used only when a constant's shape does not
/// line up with its spec (a compiler bug upstream, not reachable through a
/// well-formed spec tree).
fn natural(constant: &ConstValue) -> Value {
    match constant {
        ConstValue::Bool(b) => Value::Bool(*b),
        ConstValue::Int(n) => Value::I64(*n),
        ConstValue::Double(d) => Value::Double(*d),
        ConstValue::String(s) => Value::String(s.clone()),
        ConstValue::Binary(b) => Value::Bytes(b.clone()),
        ConstValue::List(items) => Value::List(items.iter().map(natural).collect()),
        ConstValue::Map(items) => {
            let mut pairs = Vec::with_capacity(items.len());
            for (k, v) in items {
                Value::map_insert(&mut pairs, natural(k), natural(v));
            }
            Value::Map(pairs)
        }
        ConstValue::Struct(entries) => Value::Struct(
            entries
                .iter()
                .map(|(name, c)| (name.clone(), natural(c)))
                .collect(),
        ),
    }
}
