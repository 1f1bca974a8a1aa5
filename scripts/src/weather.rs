//! Start-of-session binder: current condition to temperature and
//! neighborhood text.

use lens_core::types::ConditionReport;
use lens_core::{ApiError, CallOptions, WeatherApi};
use tracing::{info, warn};

use crate::display::TextField;

/// Fetches the current condition once at session start and publishes the
/// rounded Fahrenheit temperature and neighborhood name. The raw response
/// body is kept for downstream consumers (the AI assistant).
#[derive(Debug, Default)]
pub struct WeatherDisplay {
    pub temperature: TextField,
    pub neighborhood: TextField,
    last_report: Option<String>,
}

impl WeatherDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw weather JSON from the most recent successful call.
    pub fn last_report(&self) -> Option<&str> {
        self.last_report.as_deref()
    }

    pub async fn on_start(&mut self, api: &WeatherApi, latitude: f64, longitude: f64) {
        match fetch(api, latitude, longitude).await {
            Ok((raw, report)) => {
                info!(body = %raw, "weather response");
                self.last_report = Some(raw);

                let temperature = report
                    .current_condition
                    .as_ref()
                    .and_then(|c| c.temperature_f);
                match temperature {
                    Some(t) => self.temperature.set(format!("{}°F", t.round() as i64)),
                    None => self.temperature.set("N/A"),
                }

                let neighborhood = report
                    .address
                    .and_then(|a| a.neighborhood)
                    .unwrap_or_default();
                self.neighborhood.set(neighborhood);
            }
            Err(err) => {
                warn!(error = %err, "current_condition failed");
                self.temperature.set("Unavailable");
                self.neighborhood.set("");
            }
        }
    }
}

async fn fetch(
    api: &WeatherApi,
    latitude: f64,
    longitude: f64,
) -> Result<(String, ConditionReport), ApiError> {
    let call = CallOptions::default()
        .with_parameter("lat", latitude.to_string())
        .with_parameter("lng", longitude.to_string());
    let result = api.current_condition(call).await?;
    let report = result.body_as()?;
    Ok((result.body_as_string().to_string(), report))
}
