//! The call adapter: validate, submit, await once, normalize.
//!
//! # Design
//! `ApiService` owns a shared handle to the injected `RemoteService` and is
//! otherwise stateless. `perform_api_request` is the single entry point:
//! schema validation happens before the transport is touched, the transport
//! is awaited exactly once, and any non-success status is terminal for the
//! call — no retry, no redirect-following, no partial result. Successful
//! calls yield an `ApiResult` whose body views decode lazily.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::ApiError;
use crate::schema::ParameterSchema;
use crate::status::Status;
use crate::transport::{ApiRequest, ApiResponse, MediaResource, RemoteService};

/// Caller-supplied options for one call: the `{parameters?, body?}` pair.
///
/// `Default` is the empty request.
#[derive(Debug, Clone, Default)]
pub struct CallOptions {
    pub parameters: Option<HashMap<String, String>>,
    pub body: Option<String>,
}

impl CallOptions {
    /// Add one parameter, pre-formatted as a string by the caller.
    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), value.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

/// Successful outcome of one call: status, metadata, and three lazy body
/// views. The views are idempotent — repeated access yields equivalent
/// values.
#[derive(Debug, Clone)]
pub struct ApiResult {
    status: Status,
    metadata: HashMap<String, String>,
    body: String,
    resource: Option<MediaResource>,
}

impl ApiResult {
    fn from_response(response: ApiResponse) -> Self {
        Self {
            status: response.status,
            metadata: response.metadata,
            body: response.body,
            resource: response.resource,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn metadata(&self) -> &HashMap<String, String> {
        &self.metadata
    }

    /// Parse the body as JSON. Evaluated on demand; a malformed body
    /// surfaces here, not at call time.
    pub fn body_as_json(&self) -> Result<serde_json::Value, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::Json(e.to_string()))
    }

    /// Decode the body into a typed view, going through the same lazy JSON
    /// parse as `body_as_json`.
    pub fn body_as<T: serde::de::DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_value(self.body_as_json()?).map_err(|e| ApiError::Json(e.to_string()))
    }

    /// The raw body text.
    pub fn body_as_string(&self) -> &str {
        &self.body
    }

    /// The body as an opaque media handle: the transport-attached resource
    /// when present, otherwise the body bytes themselves.
    pub fn body_as_resource(&self) -> MediaResource {
        match &self.resource {
            Some(resource) => resource.clone(),
            None => MediaResource::from_bytes(self.body.as_bytes().to_vec()),
        }
    }
}

/// Uniform adapter over the injected call channel.
#[derive(Clone)]
pub struct ApiService {
    transport: Arc<dyn RemoteService>,
}

impl ApiService {
    pub fn new(transport: Arc<dyn RemoteService>) -> Self {
        Self { transport }
    }

    /// Perform one remote call.
    ///
    /// Validates `call.parameters` against `schema` when one is given (a
    /// validation failure never reaches the transport), builds the request
    /// copying parameters and body only when present, awaits the transport
    /// once, and maps any non-success status to `ApiError::Status`.
    pub async fn perform_api_request(
        &self,
        endpoint: &str,
        call: CallOptions,
        schema: Option<&ParameterSchema>,
    ) -> Result<ApiResult, ApiError> {
        if let Some(schema) = schema {
            schema.validate(call.parameters.as_ref())?;
        }

        let mut request = ApiRequest::new(endpoint);
        if let Some(parameters) = call.parameters {
            request.parameters = Some(parameters);
        }
        if let Some(body) = call.body {
            request.body = Some(body);
        }

        let response = self.transport.perform(request).await;
        if response.status != Status::Success {
            return Err(ApiError::Status {
                status: response.status,
                body: response.body,
            });
        }

        Ok(ApiResult::from_response(response))
    }
}
