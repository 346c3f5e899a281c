use std::fmt;

/// Physical kind of a wire value.
///
/// The tag space is deliberately coarser than the IDL type space: logical
/// `string` and `binary` both travel as [`Type::Binary`], and logical `set`
/// travels as [`Type::List`]. The framer records these tags as read off the
/// wire; the codec compares them against the tag a type spec requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Bool,
    I8,
    I16,
    I32,
    I64,
    Double,
    Binary,
    List,
    Map,
    Struct,
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Type::Bool => "bool",
            Type::I8 => "i8",
            Type::I16 => "i16",
            Type::I32 => "i32",
            Type::I64 => "i64",
            Type::Double => "double",
            Type::Binary => "binary",
            Type::List => "list",
            Type::Map => "map",
            Type::Struct => "struct",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::Type;

    #[test]
    fn type_rendering() {
        let cases = [
            (Type::Bool, "bool"),
            (Type::I8, "i8"),
            (Type::I16, "i16"),
            (Type::I32, "i32"),
            (Type::I64, "i64"),
            (Type::Double, "double"),
            (Type::Binary, "binary"),
            (Type::List, "list"),
            (Type::Map, "map"),
            (Type::Struct, "struct"),
        ];
        for (t, expected) in cases {
            assert_eq!(t.to_string(), expected);
        }
    }
}
