//! Wire-level value model for the compact Thrift serialization.
//!
//! A [`Value`] is the generic, schema-less tree a protocol framer produces
//! from a byte payload. It knows its own physical [`Type`] at every node but
//! nothing about the IDL schema it is supposed to satisfy; reconciling the
//! two is the job of the `thriftwire-codec` crate.

mod types;
mod value;

pub use types::Type;
pub use value::{Field, MapItem, Value};
