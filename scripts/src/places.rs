//! Start-of-session binder: nearby-place lookup to latitude/longitude text.
//!
//! The two calls are strictly sequential: `get_place` is only issued after
//! `get_nearby_places` resolves with at least one entry. A non-success
//! status or a missing centroid is a soft failure — the fields are cleared,
//! a diagnostic is logged, and the session carries on.

use lens_core::types::{NearbyPlacesResponse, PlaceResponse};
use lens_core::{ApiError, PlacesApi};
use tracing::{info, warn};

use crate::display::TextField;

#[derive(Debug)]
pub struct PlacesLocation {
    gps_accuracy_m: f64,
    places_limit: u32,
    pub latitude: TextField,
    pub longitude: TextField,
}

impl PlacesLocation {
    pub fn new(gps_accuracy_m: f64, places_limit: u32) -> Self {
        Self {
            gps_accuracy_m,
            places_limit,
            latitude: TextField::default(),
            longitude: TextField::default(),
        }
    }

    pub async fn on_start(&mut self, api: &PlacesApi) {
        match self.locate(api).await {
            Ok(Some((lat, lng))) => {
                self.latitude.set(format!("{lat:.6}"));
                self.longitude.set(format!("{lng:.6}"));
            }
            Ok(None) => {
                self.latitude.set("");
                self.longitude.set("");
            }
            Err(err) => {
                warn!(error = %err, "places lookup failed");
                self.latitude.set("");
                self.longitude.set("");
            }
        }
    }

    /// `Ok(None)` means the lookup resolved but produced no usable location
    /// (empty place list or missing centroid).
    async fn locate(&self, api: &PlacesApi) -> Result<Option<(f64, f64)>, ApiError> {
        let result = api
            .get_nearby_places(self.gps_accuracy_m, self.places_limit)
            .await?;
        let nearby: NearbyPlacesResponse = result.body_as()?;
        info!(count = nearby.nearby_places.len(), "get_nearby_places response");

        let Some(first) = nearby.nearby_places.first() else {
            warn!("no nearby places found");
            return Ok(None);
        };

        let result = api.get_place(&first.place_id).await?;
        let place: PlaceResponse = result.body_as()?;
        match place
            .place
            .and_then(|p| p.geometry)
            .and_then(|g| g.centroid)
        {
            Some(centroid) => Ok(Some((centroid.lat, centroid.lng))),
            None => {
                warn!("place geometry centroid missing");
                Ok(None)
            }
        }
    }
}
