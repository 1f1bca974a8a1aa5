use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_service::app;
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn post(uri: &str) -> Request<String> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .body(String::new())
        .unwrap()
}

// --- weather ---

#[tokio::test]
async fn current_condition_returns_documented_shape() {
    let app = app();
    let resp = app
        .oneshot(post("/current_condition?lat=40.0&lng=-74.0"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["currentCondition"]["temperatureF"], 72.4);
    assert_eq!(body["address"]["neighborhood"], "SoHo");
}

#[tokio::test]
async fn daily_forecast_honors_days_parameter() {
    let app = app();
    let resp = app
        .oneshot(post("/daily_forecast?lat=40.0&lng=-74.0&days=4"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["dailyForecast"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn combined_forecast_includes_all_sections() {
    let app = app();
    let resp = app
        .oneshot(post(
            "/current_condition_and_forecast?hourly_forecast_hours=6&daily_forecast_days=2",
        ))
        .await
        .unwrap();

    let body = body_json(resp).await;
    assert!(body["currentCondition"]["temperatureF"].is_number());
    assert_eq!(body["hourlyForecast"].as_array().unwrap().len(), 6);
    assert_eq!(body["dailyForecast"].as_array().unwrap().len(), 2);
}

// --- places ---

#[tokio::test]
async fn nearby_places_limit_zero_returns_empty_list() {
    let app = app();
    let resp = app
        .oneshot(json_request(
            "/get_nearby_places",
            r#"{"gps_accuracy_m":65.0,"places_limit":0}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert!(body["nearby_places"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn nearby_place_can_be_fetched_by_id() {
    let app = app();
    let resp = app
        .clone()
        .oneshot(json_request(
            "/get_nearby_places",
            r#"{"gps_accuracy_m":65.0,"places_limit":1}"#,
        ))
        .await
        .unwrap();
    let body = body_json(resp).await;
    let place_id = body["nearby_places"][0]["place_id"].as_str().unwrap();

    let resp = app
        .oneshot(json_request(
            "/get_place",
            &format!(r#"{{"place_id":"{place_id}"}}"#),
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let centroid = &body["place"]["geometry"]["centroid"];
    assert!(centroid["lat"].is_number());
    assert!(centroid["lng"].is_number());
}

#[tokio::test]
async fn unknown_place_returns_404() {
    let app = app();
    let resp = app
        .oneshot(json_request(
            "/get_place",
            r#"{"place_id":"00000000-0000-0000-0000-000000000000"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_place_request_is_rejected() {
    let app = app();
    let resp = app
        .oneshot(json_request("/get_place", r#"{"not_place_id":1}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- completions ---

#[tokio::test]
async fn completions_echo_the_last_user_message() {
    let app = app();
    let resp = app
        .oneshot(json_request(
            "/completions",
            r#"{"temperature":1.0,"messages":[{"role":"user","content":"72F in SoHo"}]}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let content = body["choices"][0]["message"]["content"].as_str().unwrap();
    assert!(content.contains("72F in SoHo"));
    assert_eq!(body["choices"][0]["message"]["role"], "assistant");
}
