//! Error types for the remote API adapter.
//!
//! # Design
//! `MissingParameter` is raised before any transport activity, `Status` only
//! after a round-trip completed with a non-success code. Lazy body decoding
//! surfaces `Json` at the point of access, not at call time. The `Status`
//! message text comes straight from the fixed status table so callers and
//! logs always see the same wording.

use std::fmt;

use crate::status::Status;

/// Errors returned by the call adapter and the lazy body views.
#[derive(Debug)]
pub enum ApiError {
    /// A parameter marked required by the endpoint's schema was absent.
    MissingParameter(String),

    /// The transport completed with a non-success status. Terminal for the
    /// call; the raw body is carried for diagnostics.
    Status { status: Status, body: String },

    /// The response body could not be parsed as JSON.
    Json(String),

    /// The request body could not be serialized to JSON.
    Serialization(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::MissingParameter(name) => {
                write!(f, "required parameter {name} is missing from request")
            }
            ApiError::Status { status, body } => {
                write!(f, "API call error - {}: {body}", status.message())
            }
            ApiError::Json(msg) => write!(f, "body is not valid JSON: {msg}"),
            ApiError::Serialization(msg) => write!(f, "serialization failed: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}
