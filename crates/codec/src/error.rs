//! Decode error chain.
//!
//! Errors compose by nesting: the innermost node is always the actual tag
//! disagreement, and each enclosing wrapper adds one unit of structural
//! context (collection type, item index, map role, field name). Two errors
//! are considered equivalent when their rendered messages are identical.

use std::fmt;

use thriftwire_wire as wire;

/// Which half of a map pair failed to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapRole {
    Key,
    Value,
}

impl fmt::Display for MapRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapRole::Key => f.write_str("key"),
            MapRole::Value => f.write_str("value"),
        }
    }
}

/// A mismatch between a wire value and the spec it was decoded against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Leaf: the tags compared at some position disagree outright.
    TypeMismatch { expected: wire::Type, got: wire::Type },
    /// The value being validated against the named spec failed inside.
    ValueMismatch {
        type_name: String,
        inner: Box<DecodeError>,
    },
    /// A collection element failed at the given index.
    ListItemMismatch {
        index: usize,
        inner: Box<DecodeError>,
    },
    /// One half of a map pair failed.
    MapItemMismatch {
        role: MapRole,
        inner: Box<DecodeError>,
    },
    /// A record field failed.
    StructFieldMismatch {
        field: String,
        inner: Box<DecodeError>,
    },
}

impl DecodeError {
    pub(crate) fn boxed(self) -> Box<DecodeError> {
        Box::new(self)
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::TypeMismatch { expected, got } => {
                write!(f, "type mismatch: expected {expected}, got {got}")
            }
            DecodeError::ValueMismatch { type_name, inner } => {
                write!(f, "cannot decode value as \"{type_name}\": {inner}")
            }
            DecodeError::ListItemMismatch { index, inner } => {
                write!(f, "item {index}: {inner}")
            }
            DecodeError::MapItemMismatch { role, inner } => {
                write!(f, "{role}: {inner}")
            }
            DecodeError::StructFieldMismatch { field, inner } => {
                write!(f, "field \"{field}\": {inner}")
            }
        }
    }
}

// The rendered message already includes the full chain, so `source` is not
// exposed; reporters that walk sources would print every level twice.
impl std::error::Error for DecodeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_rendering() {
        let err = DecodeError::TypeMismatch {
            expected: wire::Type::I8,
            got: wire::Type::I16,
        };
        assert_eq!(err.to_string(), "type mismatch: expected i8, got i16");
    }

    #[test]
    fn chain_renders_root_to_leaf() {
        let err = DecodeError::ValueMismatch {
            type_name: "map<i16, i32>".to_string(),
            inner: DecodeError::MapItemMismatch {
                role: MapRole::Value,
                inner: DecodeError::TypeMismatch {
                    expected: wire::Type::I32,
                    got: wire::Type::I16,
                }
                .boxed(),
            }
            .boxed(),
        };
        assert_eq!(
            err.to_string(),
            "cannot decode value as \"map<i16, i32>\": value: \
             type mismatch: expected i32, got i16"
        );
    }

    #[test]
    fn struct_chain_names_the_field() {
        let err = DecodeError::ValueMismatch {
            type_name: "S".to_string(),
            inner: DecodeError::StructFieldMismatch {
                field: "s".to_string(),
                inner: DecodeError::TypeMismatch {
                    expected: wire::Type::Binary,
                    got: wire::Type::I32,
                }
                .boxed(),
            }
            .boxed(),
        };
        assert_eq!(
            err.to_string(),
            "cannot decode value as \"S\": field \"s\": \
             type mismatch: expected binary, got i32"
        );
    }
}
