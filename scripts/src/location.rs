//! Timer-driven location poller.
//!
//! # Design
//! `LocationService` abstracts the host's geolocation hardware: one async
//! call, one position sample or error. The poller re-arms itself on a fixed
//! delay after every poll and republishes its fields only when a sample's
//! timestamp differs from the last one seen — two polls observing the same
//! fix must not produce duplicate writes or logs.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{info, warn};

/// One geolocation sample.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoPosition {
    pub latitude: f64,
    pub longitude: f64,
    pub horizontal_accuracy: f64,
    pub vertical_accuracy: f64,
    /// Meters above sea level; 0 means the device reported no altitude.
    pub altitude: f64,
    /// North-aligned heading in degrees, when the device provides one.
    pub heading_deg: Option<f64>,
    pub timestamp_ms: u64,
    pub source: String,
}

/// Failure to obtain a position sample.
#[derive(Debug)]
pub struct LocationError(pub String);

impl fmt::Display for LocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "location unavailable: {}", self.0)
    }
}

impl std::error::Error for LocationError {}

/// The injected geolocation channel: one call, one sample.
#[async_trait]
pub trait LocationService: Send + Sync {
    async fn current_position(&self) -> Result<GeoPosition, LocationError>;
}

/// Fields the poller publishes for downstream consumers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationFields {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub horizontal_accuracy: Option<f64>,
    pub vertical_accuracy: Option<f64>,
    pub altitude: Option<f64>,
    /// Heading converted to a radians rotation for plane rendering.
    pub rotation_rad: Option<f64>,
}

pub struct LocationPoller {
    interval: Duration,
    last_timestamp_ms: Option<u64>,
    pub fields: LocationFields,
}

impl LocationPoller {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_timestamp_ms: None,
            fields: LocationFields::default(),
        }
    }

    /// Take one sample. Returns true when fresh fields were published;
    /// an unchanged timestamp or a sampling error publishes nothing.
    pub async fn poll(&mut self, service: &dyn LocationService) -> bool {
        let position = match service.current_position().await {
            Ok(position) => position,
            Err(err) => {
                warn!(error = %err, "location poll failed");
                return false;
            }
        };

        if self.last_timestamp_ms == Some(position.timestamp_ms) {
            return false;
        }

        self.fields.latitude = Some(position.latitude);
        self.fields.longitude = Some(position.longitude);
        self.fields.horizontal_accuracy = Some(position.horizontal_accuracy);
        self.fields.vertical_accuracy = Some(position.vertical_accuracy);
        if position.altitude != 0.0 {
            self.fields.altitude = Some(position.altitude);
        }
        if let Some(heading) = position.heading_deg {
            self.fields.rotation_rad = Some(heading.to_radians());
        }
        info!(
            latitude = position.latitude,
            longitude = position.longitude,
            source = %position.source,
            "location update"
        );
        self.last_timestamp_ms = Some(position.timestamp_ms);
        true
    }

    /// Poll immediately, then re-arm on the fixed delay after every poll.
    /// Runs until the owning task is dropped.
    pub async fn run(mut self, service: Arc<dyn LocationService>) {
        loop {
            self.poll(service.as_ref()).await;
            tokio::time::sleep(self.interval).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Mutex;

    struct ScriptedService {
        samples: Mutex<Vec<Result<GeoPosition, LocationError>>>,
    }

    impl ScriptedService {
        fn new(mut samples: Vec<Result<GeoPosition, LocationError>>) -> Self {
            samples.reverse();
            Self {
                samples: Mutex::new(samples),
            }
        }
    }

    #[async_trait]
    impl LocationService for ScriptedService {
        async fn current_position(&self) -> Result<GeoPosition, LocationError> {
            self.samples
                .lock()
                .unwrap()
                .pop()
                .unwrap_or_else(|| Err(LocationError("script exhausted".to_string())))
        }
    }

    fn sample(timestamp_ms: u64) -> GeoPosition {
        GeoPosition {
            latitude: 40.7233,
            longitude: -74.0030,
            horizontal_accuracy: 5.0,
            vertical_accuracy: 8.0,
            altitude: 12.5,
            heading_deg: Some(90.0),
            timestamp_ms,
            source: "gps".to_string(),
        }
    }

    #[tokio::test]
    async fn fresh_timestamp_publishes_fields() {
        let service = ScriptedService::new(vec![Ok(sample(1_000))]);
        let mut poller = LocationPoller::new(Duration::from_secs(1));

        assert!(poller.poll(&service).await);
        assert_eq!(poller.fields.latitude, Some(40.7233));
        assert_eq!(poller.fields.longitude, Some(-74.0030));
        assert_eq!(poller.fields.altitude, Some(12.5));
        let rotation = poller.fields.rotation_rad.unwrap();
        assert!((rotation - 90.0_f64.to_radians()).abs() < 1e-12);
    }

    #[tokio::test]
    async fn unchanged_timestamp_republishes_nothing() {
        let mut second = sample(1_000);
        second.latitude = 41.0;
        let service = ScriptedService::new(vec![Ok(sample(1_000)), Ok(second)]);
        let mut poller = LocationPoller::new(Duration::from_secs(1));

        assert!(poller.poll(&service).await);
        let published = poller.fields.clone();
        assert!(!poller.poll(&service).await);
        assert_eq!(poller.fields, published);
    }

    #[tokio::test]
    async fn new_timestamp_publishes_again() {
        let mut second = sample(2_000);
        second.latitude = 41.0;
        let service = ScriptedService::new(vec![Ok(sample(1_000)), Ok(second)]);
        let mut poller = LocationPoller::new(Duration::from_secs(1));

        assert!(poller.poll(&service).await);
        assert!(poller.poll(&service).await);
        assert_eq!(poller.fields.latitude, Some(41.0));
    }

    #[tokio::test]
    async fn zero_altitude_is_not_published() {
        let mut flat = sample(1_000);
        flat.altitude = 0.0;
        let service = ScriptedService::new(vec![Ok(flat)]);
        let mut poller = LocationPoller::new(Duration::from_secs(1));

        assert!(poller.poll(&service).await);
        assert_eq!(poller.fields.altitude, None);
    }

    #[tokio::test]
    async fn sampling_error_publishes_nothing() {
        let service =
            ScriptedService::new(vec![Err(LocationError("no fix".to_string()))]);
        let mut poller = LocationPoller::new(Duration::from_secs(1));

        assert!(!poller.poll(&service).await);
        assert_eq!(poller.fields, LocationFields::default());
    }
}
