//! Typed wire-value decoder.
//!
//! [`from_wire`] walks a schema-less wire value and a compiled type spec in
//! lock-step, producing either a natively-typed [`Value`] tree or a
//! [`DecodeError`] chain pinpointing the first structural disagreement.
//!
//! The decoder is a pure, synchronous computation: no I/O, no locks, no
//! internal state. Spec trees may be shared read-only across any number of
//! concurrent calls.
//!
//! Recursion depth equals the nesting depth of the spec/value pair. The
//! decoder does not bound it; servers feeding it untrusted payloads must
//! limit structural nesting upstream in the framer.

mod default;
mod error;
mod from_wire;
mod json;
mod value;

pub use error::{DecodeError, MapRole};
pub use from_wire::from_wire;
pub use json::to_json;
pub use value::Value;
