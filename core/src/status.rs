//! Normalized outcome taxonomy for remote API calls.
//!
//! # Design
//! The call channel reports outcomes as small integers rather than raw HTTP
//! statuses. The table is fixed: 1 is the only success code, 2–10 are
//! documented failure categories, and 0 or anything unrecognized collapses to
//! `Unknown`. `from_http` implements the documented HTTP-to-code mapping for
//! transports that sit on plain HTTP.

use std::fmt;

/// Outcome classification for a single remote API call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Code 0 or any undocumented value.
    Unknown,
    /// Code 1 — the 2xx range.
    Success,
    /// Code 2 — the 3xx range.
    Redirected,
    /// Code 3 — 4xx other than 401, 403, 404, 408, 413, 414, 431.
    BadRequest,
    /// Code 4 — 401 and 403.
    AccessDenied,
    /// Code 5 — 404, or the remote endpoint is not declared.
    NotFound,
    /// Code 6 — 408 and 504.
    Timeout,
    /// Code 7 — 413, 414, 431.
    RequestTooLarge,
    /// Code 8 — 5xx other than 504.
    ServerError,
    /// Code 9 — cancelled by the caller.
    Cancelled,
    /// Code 10 — failure inside the call framework itself.
    InternalError,
}

impl Status {
    /// Normalize a raw integer code. Values outside the documented table
    /// (including 0) map to `Unknown`.
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => Status::Success,
            2 => Status::Redirected,
            3 => Status::BadRequest,
            4 => Status::AccessDenied,
            5 => Status::NotFound,
            6 => Status::Timeout,
            7 => Status::RequestTooLarge,
            8 => Status::ServerError,
            9 => Status::Cancelled,
            10 => Status::InternalError,
            _ => Status::Unknown,
        }
    }

    /// The integer code for this status.
    pub fn code(self) -> i64 {
        match self {
            Status::Unknown => 0,
            Status::Success => 1,
            Status::Redirected => 2,
            Status::BadRequest => 3,
            Status::AccessDenied => 4,
            Status::NotFound => 5,
            Status::Timeout => 6,
            Status::RequestTooLarge => 7,
            Status::ServerError => 8,
            Status::Cancelled => 9,
            Status::InternalError => 10,
        }
    }

    /// Classify an HTTP response status per the documented mapping.
    pub fn from_http(status: u16) -> Self {
        match status {
            200..=299 => Status::Success,
            300..=399 => Status::Redirected,
            401 | 403 => Status::AccessDenied,
            404 => Status::NotFound,
            408 | 504 => Status::Timeout,
            413 | 414 | 431 => Status::RequestTooLarge,
            400..=499 => Status::BadRequest,
            500..=599 => Status::ServerError,
            _ => Status::InternalError,
        }
    }

    /// Fixed human-readable message for this status.
    pub fn message(self) -> &'static str {
        match self {
            Status::Unknown => "Unknown Status Code - Please report this as a bug.",
            Status::Success => "Success",
            Status::Redirected => "Redirected",
            Status::BadRequest => "Bad Request",
            Status::AccessDenied => "Access Denied",
            Status::NotFound => "API Call Not Found",
            Status::Timeout => "Timeout",
            Status::RequestTooLarge => "Request Too Large",
            Status::ServerError => "Server Processing Error",
            Status::Cancelled => "Request Cancelled by Caller",
            Status::InternalError => "Internal Framework Error",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
