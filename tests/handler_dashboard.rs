mod common;

use axum::http::StatusCode;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mock_city(server: &MockServer, city: &str, payload: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/v1/current.json"))
        .and(query_param("q", city))
        .respond_with(ResponseTemplate::new(200).set_body_json(payload))
        .mount(server)
        .await;
}

fn manchester_payload() -> serde_json::Value {
    json!({
        "current": {
            "condition": {
                "text": "Cloudy",
                "icon": "//cdn.weatherapi.com/64x64/cloudy.png"
            },
            "temp_c": 14.0,
            "humidity": 80,
            "precip_mm": 0.2
        }
    })
}

#[tokio::test]
async fn test_dashboard_requires_login() {
    let upstream = MockServer::start().await;
    let server = common::test_server(common::create_test_state(&upstream.uri()));

    let response = server.get("/dashboard").await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/login");
}

#[tokio::test]
async fn test_dashboard_greets_user_and_lists_catalog() {
    let upstream = MockServer::start().await;
    let server = common::test_server(common::create_test_state(&upstream.uri()));
    common::login(&server).await;

    let response = server.get("/dashboard").await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("Welcome to the weather app admin"));
    assert!(body.contains("<option value=\"Manchester\">"));
}

#[tokio::test]
async fn test_dashboard_renders_weather_card() {
    let upstream = MockServer::start().await;
    mock_city(&upstream, "Manchester", manchester_payload()).await;

    let server = common::test_server(common::create_test_state(&upstream.uri()));
    common::login(&server).await;

    let add = server
        .post("/dashboard/cities")
        .form(&[("city", "Manchester")])
        .await;
    add.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(add.header("location"), "/dashboard");

    let response = server.get("/dashboard").await;
    response.assert_status_ok();
    let body = response.text();

    assert!(body.contains("<h2>Manchester</h2>"));
    assert!(body.contains("14°C"));
    assert!(body.contains("Condition: Cloudy"));
    assert!(body.contains("Humidity: 80%"));
    assert!(body.contains("Precipitation: 0.2 mm"));
    assert!(body.contains("https://cdn.weatherapi.com/64x64/cloudy.png"));
    // Added city disappears from the dropdown.
    assert!(!body.contains("<option value=\"Manchester\">"));
}

#[tokio::test]
async fn test_failed_fetch_renders_placeholder_card() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/current.json"))
        .and(query_param("q", "Glasgow"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&upstream)
        .await;

    let server = common::test_server(common::create_test_state(&upstream.uri()));
    common::login(&server).await;

    server
        .post("/dashboard/cities")
        .form(&[("city", "Glasgow")])
        .await;

    let response = server.get("/dashboard").await;
    response.assert_status_ok();
    let body = response.text();

    assert!(body.contains("<h2>Glasgow</h2>"));
    assert!(body.contains("Loading weather data..."));
    assert!(body.contains("upstream returned HTTP 500"));
}

#[tokio::test]
async fn test_add_duplicate_city_is_noop() {
    let upstream = MockServer::start().await;
    mock_city(&upstream, "London", manchester_payload()).await;

    let server = common::test_server(common::create_test_state(&upstream.uri()));
    common::login(&server).await;

    for _ in 0..2 {
        let response = server
            .post("/dashboard/cities")
            .form(&[("city", "London")])
            .await;
        response.assert_status(StatusCode::SEE_OTHER);
    }

    let cities = server.get("/api/cities").await;
    cities.assert_status_ok();
    let json = cities.json::<serde_json::Value>();
    assert_eq!(json["cities"], json!(["London"]));
}

#[tokio::test]
async fn test_add_unknown_city_is_noop() {
    let upstream = MockServer::start().await;
    let server = common::test_server(common::create_test_state(&upstream.uri()));
    common::login(&server).await;

    let response = server
        .post("/dashboard/cities")
        .form(&[("city", "Atlantis")])
        .await;
    response.assert_status(StatusCode::SEE_OTHER);

    let cities = server.get("/api/cities").await;
    let json = cities.json::<serde_json::Value>();
    assert_eq!(json["cities"], json!([]));
}

#[tokio::test]
async fn test_remove_city_round_trip() {
    let upstream = MockServer::start().await;
    mock_city(&upstream, "Leeds", manchester_payload()).await;

    let server = common::test_server(common::create_test_state(&upstream.uri()));
    common::login(&server).await;

    server
        .post("/dashboard/cities")
        .form(&[("city", "Leeds")])
        .await;

    let response = server
        .post("/dashboard/cities/delete")
        .form(&[("city", "Leeds")])
        .await;
    response.assert_status(StatusCode::SEE_OTHER);

    let cities = server.get("/api/cities").await;
    let json = cities.json::<serde_json::Value>();
    assert_eq!(json["cities"], json!([]));

    // Removing again is a no-op, not an error.
    let again = server
        .post("/dashboard/cities/delete")
        .form(&[("city", "Leeds")])
        .await;
    again.assert_status(StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_logout_destroys_session() {
    let upstream = MockServer::start().await;
    let server = common::test_server(common::create_test_state(&upstream.uri()));
    common::login(&server).await;

    let response = server.post("/dashboard/logout").await;
    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(response.header("location"), "/login");

    // The old cookie no longer grants access.
    let after = server.get("/dashboard").await;
    after.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(after.header("location"), "/login");
}
