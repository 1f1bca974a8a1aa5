//! Typed views of the remote service's JSON shapes.
//!
//! # Design
//! These DTOs mirror the response bodies the binders extract from, but are
//! defined independently of the mock service; integration tests catch schema
//! drift. The remote service has historically emitted both snake_case and
//! camelCase keys for the places payloads, so those fields carry serde
//! aliases, and every nested level is optional — a missing branch reads as
//! `None` instead of a decode failure.

use serde::{Deserialize, Serialize};

/// `current_condition` response body.
#[derive(Debug, Clone, Deserialize)]
pub struct ConditionReport {
    #[serde(rename = "currentCondition", default)]
    pub current_condition: Option<CurrentCondition>,
    #[serde(default)]
    pub address: Option<Address>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentCondition {
    #[serde(rename = "temperatureF", default)]
    pub temperature_f: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub neighborhood: Option<String>,
}

/// `get_nearby_places` response body.
#[derive(Debug, Clone, Deserialize)]
pub struct NearbyPlacesResponse {
    #[serde(alias = "nearbyPlaces", default)]
    pub nearby_places: Vec<NearbyPlace>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NearbyPlace {
    #[serde(alias = "placeId")]
    pub place_id: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// `get_place` response body.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceResponse {
    #[serde(default)]
    pub place: Option<Place>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Place {
    #[serde(default)]
    pub geometry: Option<Geometry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    #[serde(default)]
    pub centroid: Option<Centroid>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Centroid {
    pub lat: f64,
    pub lng: f64,
}

/// Request payload for the `completions` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub temperature: f64,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// `completions` response body.
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: ChatMessage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn condition_report_decodes_the_documented_shape() {
        let body = r#"{"currentCondition":{"temperatureF":72.4},"address":{"neighborhood":"SoHo"}}"#;
        let report: ConditionReport = serde_json::from_str(body).unwrap();
        let temp = report.current_condition.unwrap().temperature_f.unwrap();
        assert!((temp - 72.4).abs() < f64::EPSILON);
        assert_eq!(report.address.unwrap().neighborhood.as_deref(), Some("SoHo"));
    }

    #[test]
    fn condition_report_tolerates_missing_branches() {
        let report: ConditionReport = serde_json::from_str("{}").unwrap();
        assert!(report.current_condition.is_none());
        assert!(report.address.is_none());
    }

    #[test]
    fn nearby_places_accepts_both_key_spellings() {
        let snake: NearbyPlacesResponse =
            serde_json::from_str(r#"{"nearby_places":[{"place_id":"a"}]}"#).unwrap();
        let camel: NearbyPlacesResponse =
            serde_json::from_str(r#"{"nearbyPlaces":[{"placeId":"a"}]}"#).unwrap();
        assert_eq!(snake.nearby_places[0].place_id, "a");
        assert_eq!(camel.nearby_places[0].place_id, "a");
    }

    #[test]
    fn empty_places_payload_reads_as_empty_list() {
        let resp: NearbyPlacesResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.nearby_places.is_empty());
    }

    #[test]
    fn place_centroid_path_decodes() {
        let body = r#"{"place":{"geometry":{"centroid":{"lat":40.7233,"lng":-74.003}}}}"#;
        let resp: PlaceResponse = serde_json::from_str(body).unwrap();
        let centroid = resp.place.unwrap().geometry.unwrap().centroid.unwrap();
        assert!((centroid.lat - 40.7233).abs() < f64::EPSILON);
        assert!((centroid.lng + 74.003).abs() < f64::EPSILON);
    }

    #[test]
    fn completion_request_serializes_role_and_content() {
        let request = CompletionRequest {
            temperature: 1.0,
            messages: vec![ChatMessage::user("hi")],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "hi");
    }

    #[test]
    fn completion_response_with_no_choices_is_empty() {
        let resp: CompletionResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.choices.is_empty());
    }
}
