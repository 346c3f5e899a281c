use crate::Type;

/// A single field of a wire struct: numeric field id plus payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub id: i16,
    pub value: Value,
}

/// One key/value pair of a wire map, in the order read off the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct MapItem {
    pub key: Value,
    pub value: Value,
}

/// Self-describing wire value tree.
///
/// Produced once by the protocol framer and treated as immutable from then
/// on; the codec only reads it. Collection nodes carry the element tags the
/// framer observed in the collection headers, which lets an encoder write
/// the value back without consulting a schema.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Double(f64),
    /// Raw byte payload; carries both logical `string` and `binary` data.
    Binary(Vec<u8>),
    /// Ordered items; carries both logical `list` and `set` data.
    List { elem: Type, items: Vec<Value> },
    Map {
        key: Type,
        value: Type,
        items: Vec<MapItem>,
    },
    Struct { fields: Vec<Field> },
}

impl Value {
    /// Builds a `Binary` value from text, the way a framer stores a logical
    /// string.
    pub fn string(s: impl Into<String>) -> Value {
        Value::Binary(s.into().into_bytes())
    }

    /// The physical tag of this node.
    pub fn wire_type(&self) -> Type {
        match self {
            Value::Bool(_) => Type::Bool,
            Value::I8(_) => Type::I8,
            Value::I16(_) => Type::I16,
            Value::I32(_) => Type::I32,
            Value::I64(_) => Type::I64,
            Value::Double(_) => Type::Double,
            Value::Binary(_) => Type::Binary,
            Value::List { .. } => Type::List,
            Value::Map { .. } => Type::Map,
            Value::Struct { .. } => Type::Struct,
        }
    }
}
