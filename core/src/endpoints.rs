//! Named-method-per-endpoint facades.
//!
//! # Design
//! Each method is a fixed partial application of the call adapter: a
//! hard-coded endpoint name plus that endpoint's declared parameter schema.
//! The weather endpoints declare every parameter optional, so validation is
//! advisory there; the places endpoints are invoked ad hoc with a JSON body
//! and no schema, matching how the remote service expects them. No facade
//! coerces parameter types — callers pre-format values as strings.

use crate::error::ApiError;
use crate::schema::{Parameter, ParameterSchema};
use crate::service::{ApiResult, ApiService, CallOptions};
use crate::types::CompletionRequest;

/// Weather service endpoints.
#[derive(Clone)]
pub struct WeatherApi {
    service: ApiService,
}

impl WeatherApi {
    pub fn new(service: ApiService) -> Self {
        Self { service }
    }

    /// `daily_forecast(lat, lng, days)`.
    pub async fn daily_forecast(&self, call: CallOptions) -> Result<ApiResult, ApiError> {
        let schema = ParameterSchema::new(vec![
            Parameter::optional("lat"),
            Parameter::optional("lng"),
            Parameter::optional("days"),
        ]);
        self.service
            .perform_api_request("daily_forecast", call, Some(&schema))
            .await
    }

    /// `hourly_forecast(lat, lng, hours)`.
    pub async fn hourly_forecast(&self, call: CallOptions) -> Result<ApiResult, ApiError> {
        let schema = ParameterSchema::new(vec![
            Parameter::optional("lat"),
            Parameter::optional("lng"),
            Parameter::optional("hours"),
        ]);
        self.service
            .perform_api_request("hourly_forecast", call, Some(&schema))
            .await
    }

    /// `current_condition_and_forecast(lat, lng, hourly_forecast_hours,
    /// daily_forecast_days)`.
    pub async fn current_condition_and_forecast(
        &self,
        call: CallOptions,
    ) -> Result<ApiResult, ApiError> {
        let schema = ParameterSchema::new(vec![
            Parameter::optional("lat"),
            Parameter::optional("lng"),
            Parameter::optional("hourly_forecast_hours"),
            Parameter::optional("daily_forecast_days"),
        ]);
        self.service
            .perform_api_request("current_condition_and_forecast", call, Some(&schema))
            .await
    }

    /// `current_condition(lat, lng)`.
    pub async fn current_condition(&self, call: CallOptions) -> Result<ApiResult, ApiError> {
        let schema = ParameterSchema::new(vec![
            Parameter::optional("lat"),
            Parameter::optional("lng"),
        ]);
        self.service
            .perform_api_request("current_condition", call, Some(&schema))
            .await
    }
}

/// Places service endpoints. These ride their arguments in a JSON body and
/// declare no schema.
#[derive(Clone)]
pub struct PlacesApi {
    service: ApiService,
}

impl PlacesApi {
    pub fn new(service: ApiService) -> Self {
        Self { service }
    }

    /// `get_nearby_places` — latitude/longitude are filled in by the host,
    /// only accuracy and the result limit are client-supplied.
    pub async fn get_nearby_places(
        &self,
        gps_accuracy_m: f64,
        places_limit: u32,
    ) -> Result<ApiResult, ApiError> {
        let body = serde_json::json!({
            "gps_accuracy_m": gps_accuracy_m,
            "places_limit": places_limit,
        });
        self.service
            .perform_api_request(
                "get_nearby_places",
                CallOptions::default().with_body(body.to_string()),
                None,
            )
            .await
    }

    /// `get_place` — details for one place id returned by
    /// `get_nearby_places`.
    pub async fn get_place(&self, place_id: &str) -> Result<ApiResult, ApiError> {
        let body = serde_json::json!({ "place_id": place_id });
        self.service
            .perform_api_request(
                "get_place",
                CallOptions::default().with_body(body.to_string()),
                None,
            )
            .await
    }
}

/// Conversational-completion endpoint.
#[derive(Clone)]
pub struct CompletionsApi {
    service: ApiService,
}

impl CompletionsApi {
    pub fn new(service: ApiService) -> Self {
        Self { service }
    }

    /// `completions` — posts the serialized request; callers decode the
    /// choices from the result body.
    pub async fn completions(&self, request: &CompletionRequest) -> Result<ApiResult, ApiError> {
        let body =
            serde_json::to_string(request).map_err(|e| ApiError::Serialization(e.to_string()))?;
        self.service
            .perform_api_request(
                "completions",
                CallOptions::default().with_body(body),
                None,
            )
            .await
    }
}
