//! Compiled IDL type specs.
//!
//! The IDL compiler turns textual schema definitions into a [`TypeSpec`]
//! tree. The tree is immutable once built and safe to share read-only
//! across any number of concurrent decode calls (wrap it in an `Arc` to
//! share between threads).

mod constant;
mod fields;
mod spec;

pub use constant::ConstValue;
pub use fields::{FieldGroup, FieldSpec};
pub use spec::{ListSpec, MapSpec, SetSpec, StructKind, StructSpec, TypeSpec};
