//! Session orchestration: lifecycle signals wired to binders, with typed
//! hand-off between them.
//!
//! # Design
//! The session owns the endpoint facades and every binder. `on_start` runs
//! the weather and places binders sequentially; `on_tap` hands the weather
//! binder's last report to the assistant as an explicit argument. This
//! context object replaces the original scripts' ambient globals.

use lens_core::{ApiService, CompletionsApi, PlacesApi, WeatherApi};

use crate::assistant::AiAssistant;
use crate::places::PlacesLocation;
use crate::weather::WeatherDisplay;

/// Per-session inputs, mirroring the script-level knobs of the scene.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub latitude: f64,
    pub longitude: f64,
    pub gps_accuracy_m: f64,
    pub places_limit: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            latitude: 40.7233,
            longitude: -74.0030,
            gps_accuracy_m: 65.0,
            places_limit: 1,
        }
    }
}

pub struct Session {
    weather_api: WeatherApi,
    places_api: PlacesApi,
    completions_api: CompletionsApi,
    config: SessionConfig,
    pub weather: WeatherDisplay,
    pub places: PlacesLocation,
    pub assistant: AiAssistant,
}

impl Session {
    pub fn new(service: ApiService, config: SessionConfig) -> Self {
        Self {
            weather_api: WeatherApi::new(service.clone()),
            places_api: PlacesApi::new(service.clone()),
            completions_api: CompletionsApi::new(service),
            places: PlacesLocation::new(config.gps_accuracy_m, config.places_limit),
            weather: WeatherDisplay::new(),
            assistant: AiAssistant::new(),
            config,
        }
    }

    /// Start-of-session signal.
    pub async fn on_start(&mut self) {
        self.weather
            .on_start(&self.weather_api, self.config.latitude, self.config.longitude)
            .await;
        self.places.on_start(&self.places_api).await;
    }

    /// User-tap signal.
    pub async fn on_tap(&mut self) {
        let report = self.weather.last_report().map(str::to_string);
        self.assistant
            .on_tap(&self.completions_api, report.as_deref())
            .await;
    }
}
