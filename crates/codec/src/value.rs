use indexmap::IndexMap;

/// Schema-validated, natively-typed value.
///
/// Unlike the wire tree, logical types are distinct here: strings are text,
/// sets are separate from lists, and struct fields are keyed by name. Every
/// node is owned by its parent; nothing aliases back into the wire tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Double(f64),
    String(String),
    Bytes(Vec<u8>),
    List(Vec<Value>),
    /// Ordered set. Duplicates are preserved at this layer; dedup semantics
    /// belong to typed bindings above the decoder.
    Set(Vec<Value>),
    /// Key/value pairs in first-insertion order. Keys may be any value
    /// (doubles rule out a hashed representation), so pairs are stored as a
    /// sequence with unique keys.
    Map(Vec<(Value, Value)>),
    /// Record fields by schema name, in wire-then-default order.
    Struct(IndexMap<String, Value>),
}

impl Value {
    /// Sets `key` in a map pair list, replacing the value of an equal
    /// existing key (last write wins) or appending a new pair.
    pub(crate) fn map_insert(pairs: &mut Vec<(Value, Value)>, key: Value, value: Value) {
        match pairs.iter_mut().find(|(k, _)| *k == key) {
            Some(pair) => pair.1 = value,
            None => pairs.push((key, value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_insert_last_write_wins() {
        let mut pairs = Vec::new();
        Value::map_insert(&mut pairs, Value::I32(1), Value::String("a".into()));
        Value::map_insert(&mut pairs, Value::I32(2), Value::String("b".into()));
        Value::map_insert(&mut pairs, Value::I32(1), Value::String("c".into()));
        assert_eq!(
            pairs,
            vec![
                (Value::I32(1), Value::String("c".into())),
                (Value::I32(2), Value::String("b".into())),
            ]
        );
    }
}
