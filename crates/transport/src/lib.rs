//! RPC transport boundary.
//!
//! The codec produces typed values from a request or response body; this
//! crate defines the call-shaped contract those bodies travel through.
//! Connection management, framing, and header encoding live in transport
//! implementations, not here.

use std::collections::HashMap;

/// The fields used to make an RPC.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    pub method: String,
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

/// The result of an RPC.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

/// Transport failure surfaced to the caller of [`Transport::call`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("unknown method: {0}")]
    UnknownMethod(String),
    #[error("malformed request body: {0}")]
    MalformedBody(String),
    #[error("remote error: {0}")]
    Remote(String),
}

impl TransportError {
    /// Rejects a request whose body failed schema validation, preserving
    /// the full mismatch chain in the message.
    pub fn malformed(err: impl std::fmt::Display) -> TransportError {
        TransportError::MalformedBody(err.to_string())
    }
}

/// The underlying transport over which calls are made.
pub trait Transport {
    fn call(&self, request: &Request) -> Result<Response, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test double that echoes the request body back.
    struct EchoTransport;

    impl Transport for EchoTransport {
        fn call(&self, request: &Request) -> Result<Response, TransportError> {
            if request.method.is_empty() {
                return Err(TransportError::UnknownMethod(request.method.clone()));
            }
            Ok(Response {
                headers: request.headers.clone(),
                body: request.body.clone(),
            })
        }
    }

    #[test]
    fn call_through_a_test_double() {
        let transport = EchoTransport;
        let request = Request {
            method: "getProfile".to_string(),
            headers: HashMap::from([("rk".to_string(), "users".to_string())]),
            body: b"\x0c\x00\x01".to_vec(),
        };
        let response = transport.call(&request).unwrap();
        assert_eq!(response.body, request.body);
        assert_eq!(response.headers.get("rk").map(String::as_str), Some("users"));
    }

    #[test]
    fn empty_method_is_rejected() {
        let err = EchoTransport.call(&Request::default()).unwrap_err();
        assert_eq!(err.to_string(), "unknown method: ");
    }

    #[test]
    fn malformed_keeps_the_rendered_chain() {
        let err = TransportError::malformed("cannot decode value as \"S\": field \"s\": type mismatch: expected binary, got i32");
        assert_eq!(
            err.to_string(),
            "malformed request body: cannot decode value as \"S\": \
             field \"s\": type mismatch: expected binary, got i32"
        );
    }
}
