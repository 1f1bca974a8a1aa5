//! Transport types for the injected call channel.
//!
//! # Design
//! `ApiRequest` and `ApiResponse` describe one remote call as plain data.
//! The adapter builds requests and interprets responses; the actual delivery
//! is behind `RemoteService`, which the host environment (or a test stub)
//! implements. A transport never fails out-of-band: timeouts, cancellation,
//! and framework faults all come back in-band as status codes, so `perform`
//! returns a plain `ApiResponse`.
//!
//! All fields are owned types; a request or response is locally scoped to
//! its call and never shared across calls.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::status::Status;

/// One remote call described as plain data.
///
/// Absent parameters and body stay `None` — they are omitted from the wire,
/// not sent as empty values.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub endpoint: String,
    pub parameters: Option<HashMap<String, String>>,
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            parameters: None,
            body: None,
        }
    }
}

/// Opaque media handle derived from a response body.
///
/// Stands in for the host runtime's dynamic-resource object: downstream
/// media loaders consume the bytes, nothing in this crate interprets them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaResource {
    bytes: Vec<u8>,
}

impl MediaResource {
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self { bytes: bytes.into() }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// The transport's answer to one `ApiRequest`. Produced exactly once per
/// call and read-only afterwards.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: Status,
    pub metadata: HashMap<String, String>,
    pub body: String,
    /// Pre-attached media resource, when the transport supplies one.
    pub resource: Option<MediaResource>,
}

impl ApiResponse {
    /// A success response with the given body and no metadata.
    pub fn success(body: impl Into<String>) -> Self {
        Self::with_status(Status::Success, body)
    }

    /// A response with an explicit status, for failure paths and stubs.
    pub fn with_status(status: Status, body: impl Into<String>) -> Self {
        Self {
            status,
            metadata: HashMap::new(),
            body: body.into(),
            resource: None,
        }
    }
}

/// Single-shot asynchronous call channel.
///
/// One request in, one response out; the caller suspends until the response
/// arrives. Implemented by the host environment in production and by stubs
/// in tests.
#[async_trait]
pub trait RemoteService: Send + Sync {
    async fn perform(&self, request: ApiRequest) -> ApiResponse;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_request_omits_parameters_and_body() {
        let req = ApiRequest::new("current_condition");
        assert_eq!(req.endpoint, "current_condition");
        assert!(req.parameters.is_none());
        assert!(req.body.is_none());
    }

    #[test]
    fn success_response_has_success_status() {
        let resp = ApiResponse::success("{}");
        assert_eq!(resp.status, Status::Success);
        assert!(resp.metadata.is_empty());
        assert!(resp.resource.is_none());
    }

    #[test]
    fn media_resource_exposes_bytes() {
        let resource = MediaResource::from_bytes(b"tile".to_vec());
        assert_eq!(resource.as_bytes(), b"tile");
    }
}
