use thriftwire_wire as wire;

use crate::fields::FieldGroup;

/// Compiled schema node describing the shape a wire value must have.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeSpec {
    Bool,
    I8,
    I16,
    I32,
    I64,
    Double,
    /// Text payload; travels as the `binary` wire tag.
    String,
    /// Raw byte payload; travels as the `binary` wire tag.
    Binary,
    List(ListSpec),
    Set(SetSpec),
    Map(MapSpec),
    Struct(StructSpec),
}

/// `list<elem>`.
#[derive(Debug, Clone, PartialEq)]
pub struct ListSpec {
    pub elem: Box<TypeSpec>,
}

/// `set<elem>`. Identical wire shape to [`ListSpec`]; differs only in the
/// native value the codec produces.
#[derive(Debug, Clone, PartialEq)]
pub struct SetSpec {
    pub elem: Box<TypeSpec>,
}

/// `map<key, value>`.
#[derive(Debug, Clone, PartialEq)]
pub struct MapSpec {
    pub key: Box<TypeSpec>,
    pub value: Box<TypeSpec>,
}

/// Which IDL construct a record spec was compiled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructKind {
    Struct,
    Union,
    Exception,
}

/// Compiled record spec: a named group of numbered fields.
#[derive(Debug, Clone, PartialEq)]
pub struct StructSpec {
    pub name: String,
    pub kind: StructKind,
    pub fields: FieldGroup,
}

impl TypeSpec {
    /// The wire tag a value must carry to satisfy this spec.
    pub fn wire_type(&self) -> wire::Type {
        match self {
            TypeSpec::Bool => wire::Type::Bool,
            TypeSpec::I8 => wire::Type::I8,
            TypeSpec::I16 => wire::Type::I16,
            TypeSpec::I32 => wire::Type::I32,
            TypeSpec::I64 => wire::Type::I64,
            TypeSpec::Double => wire::Type::Double,
            // String and binary share one physical representation.
            TypeSpec::String | TypeSpec::Binary => wire::Type::Binary,
            // Sets have no wire tag of their own.
            TypeSpec::List(_) | TypeSpec::Set(_) => wire::Type::List,
            TypeSpec::Map(_) => wire::Type::Map,
            TypeSpec::Struct(_) => wire::Type::Struct,
        }
    }

    /// Rendered IDL name of this spec, as used in mismatch errors:
    /// `i32`, `list<i32>`, `map<i16, i32>`, or the record's declared name.
    pub fn type_name(&self) -> String {
        match self {
            TypeSpec::Bool => "bool".to_string(),
            TypeSpec::I8 => "i8".to_string(),
            TypeSpec::I16 => "i16".to_string(),
            TypeSpec::I32 => "i32".to_string(),
            TypeSpec::I64 => "i64".to_string(),
            TypeSpec::Double => "double".to_string(),
            TypeSpec::String => "string".to_string(),
            TypeSpec::Binary => "binary".to_string(),
            TypeSpec::List(l) => format!("list<{}>", l.elem.type_name()),
            TypeSpec::Set(s) => format!("set<{}>", s.elem.type_name()),
            TypeSpec::Map(m) => {
                format!("map<{}, {}>", m.key.type_name(), m.value.type_name())
            }
            TypeSpec::Struct(s) => s.name.clone(),
        }
    }

    pub fn list(elem: TypeSpec) -> TypeSpec {
        TypeSpec::List(ListSpec {
            elem: Box::new(elem),
        })
    }

    pub fn set(elem: TypeSpec) -> TypeSpec {
        TypeSpec::Set(SetSpec {
            elem: Box::new(elem),
        })
    }

    pub fn map(key: TypeSpec, value: TypeSpec) -> TypeSpec {
        TypeSpec::Map(MapSpec {
            key: Box::new(key),
            value: Box::new(value),
        })
    }
}
