//! Remote-API adapter core for the lens weather/places companion.
//!
//! # Overview
//! Wraps an injected single-shot call channel (`RemoteService`) behind a
//! uniform adapter: build an `ApiRequest`, validate its parameters against a
//! declared schema, await exactly one `ApiResponse`, and normalize it into an
//! `ApiResult` with lazy body views. The transport itself is an external
//! collaborator — this crate performs no I/O of its own, making every layer
//! deterministic and testable with a stub channel.
//!
//! # Design
//! - `Status` is the normalized outcome taxonomy (0–10); success means
//!   `Status::Success` and nothing else. There is no retry or redirect
//!   handling in this layer.
//! - `ApiService` is stateless apart from the shared transport handle; each
//!   call's request and response are locally scoped.
//! - `WeatherApi` / `PlacesApi` / `CompletionsApi` are thin facades that fix
//!   an endpoint name and parameter schema per method.
//! - DTOs in `types` mirror the remote service's JSON shapes but are defined
//!   independently; integration tests catch schema drift.

pub mod endpoints;
pub mod error;
pub mod schema;
pub mod service;
pub mod status;
pub mod transport;
pub mod types;

pub use endpoints::{CompletionsApi, PlacesApi, WeatherApi};
pub use error::ApiError;
pub use schema::{Parameter, ParameterSchema};
pub use service::{ApiResult, ApiService, CallOptions};
pub use status::Status;
pub use transport::{ApiRequest, ApiResponse, MediaResource, RemoteService};
