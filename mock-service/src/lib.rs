//! In-process HTTP rendition of the remote weather/places/completions
//! service, used by integration tests and local runs.
//!
//! Weather endpoints take query-string parameters and return canned payloads
//! in the documented shapes. `get_nearby_places` registers generated places
//! in shared state so a follow-up `get_place` can resolve them; an unknown
//! place id is a plain 404.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize)]
pub struct StoredPlace {
    pub place_id: Uuid,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

#[derive(Deserialize)]
pub struct NearbyPlacesParams {
    pub gps_accuracy_m: f64,
    pub places_limit: u32,
}

#[derive(Deserialize)]
pub struct GetPlaceParams {
    pub place_id: String,
}

#[derive(Deserialize)]
pub struct CompletionRequest {
    pub temperature: f64,
    pub messages: Vec<ChatMessage>,
}

#[derive(Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

pub type Db = Arc<RwLock<HashMap<Uuid, StoredPlace>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/current_condition", post(current_condition))
        .route("/daily_forecast", post(daily_forecast))
        .route("/hourly_forecast", post(hourly_forecast))
        .route(
            "/current_condition_and_forecast",
            post(current_condition_and_forecast),
        )
        .route("/get_nearby_places", post(get_nearby_places))
        .route("/get_place", post(get_place))
        .route("/completions", post(completions))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn current_condition_payload() -> Value {
    json!({
        "currentCondition": { "temperatureF": 72.4 },
        "address": { "neighborhood": "SoHo" }
    })
}

fn daily_forecast_payload(days: u32) -> Value {
    let entries: Vec<Value> = (1..=days)
        .map(|day| json!({ "day": day, "highF": 75.0, "lowF": 61.0 }))
        .collect();
    json!({ "dailyForecast": entries })
}

fn hourly_forecast_payload(hours: u32) -> Value {
    let entries: Vec<Value> = (1..=hours)
        .map(|hour| json!({ "hour": hour, "temperatureF": 70.0 }))
        .collect();
    json!({ "hourlyForecast": entries })
}

fn count_param(params: &HashMap<String, String>, name: &str, default: u32) -> u32 {
    params
        .get(name)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

async fn current_condition(Query(_params): Query<HashMap<String, String>>) -> Json<Value> {
    Json(current_condition_payload())
}

async fn daily_forecast(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    Json(daily_forecast_payload(count_param(&params, "days", 1)))
}

async fn hourly_forecast(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    Json(hourly_forecast_payload(count_param(&params, "hours", 1)))
}

async fn current_condition_and_forecast(
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    let mut payload = current_condition_payload();
    let mut hourly = hourly_forecast_payload(count_param(&params, "hourly_forecast_hours", 1));
    let mut daily = daily_forecast_payload(count_param(&params, "daily_forecast_days", 1));
    payload["hourlyForecast"] = hourly["hourlyForecast"].take();
    payload["dailyForecast"] = daily["dailyForecast"].take();
    Json(payload)
}

async fn get_nearby_places(
    State(db): State<Db>,
    Json(input): Json<NearbyPlacesParams>,
) -> Json<Value> {
    let mut places = db.write().await;
    let mut listed = Vec::new();
    for n in 0..input.places_limit {
        let place = StoredPlace {
            place_id: Uuid::new_v4(),
            name: format!("Place {}", n + 1),
            // Spread samples within the requested accuracy radius.
            lat: 40.7233 + f64::from(n) * input.gps_accuracy_m * 1e-7,
            lng: -74.0030,
        };
        listed.push(json!({ "place_id": place.place_id, "name": place.name }));
        places.insert(place.place_id, place);
    }
    Json(json!({ "nearby_places": listed }))
}

async fn get_place(
    State(db): State<Db>,
    Json(input): Json<GetPlaceParams>,
) -> Result<Json<Value>, StatusCode> {
    let id: Uuid = input.place_id.parse().map_err(|_| StatusCode::NOT_FOUND)?;
    let places = db.read().await;
    let place = places.get(&id).ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(json!({
        "place": {
            "name": place.name,
            "geometry": { "centroid": { "lat": place.lat, "lng": place.lng } }
        }
    })))
}

async fn completions(Json(input): Json<CompletionRequest>) -> Json<Value> {
    let prompt = input
        .messages
        .iter()
        .rev()
        .find(|m| m.role == "user")
        .map(|m| m.content.as_str())
        .unwrap_or("");
    Json(json!({
        "choices": [{
            "message": {
                "role": "assistant",
                "content": format!("Mock completion for: {prompt}")
            }
        }]
    }))
}
