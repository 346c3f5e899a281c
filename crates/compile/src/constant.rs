/// Compiled default constant.
///
/// A small literal tree parallel in shape to a native value. Integer
/// literals are untyped in the IDL; the codec narrows them to the declared
/// field width when it evaluates the default. The compiler validates
/// constants against their declared types, so evaluation never fails.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstValue {
    Bool(bool),
    Int(i64),
    Double(f64),
    String(String),
    Binary(Vec<u8>),
    List(Vec<ConstValue>),
    Map(Vec<(ConstValue, ConstValue)>),
    Struct(Vec<(String, ConstValue)>),
}

impl From<&str> for ConstValue {
    fn from(s: &str) -> ConstValue {
        ConstValue::String(s.to_string())
    }
}

impl From<i64> for ConstValue {
    fn from(n: i64) -> ConstValue {
        ConstValue::Int(n)
    }
}

impl From<bool> for ConstValue {
    fn from(b: bool) -> ConstValue {
        ConstValue::Bool(b)
    }
}
