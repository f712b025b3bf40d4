//! End-to-end tests for the car family: plain CRUD, scoped routes, and
//! the application shell behavior around them.

mod common;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use common::{app, send};

fn car_body() -> serde_json::Value {
    json!({
        "dealerId": "D1",
        "carMakeId": "M1",
        "name": "X",
        "price": 1,
        "year": 2020,
        "color": "red",
        "wheelsCount": 4
    })
}

#[tokio::test]
async fn test_root_reports_api_running() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "API is running!");
}

#[tokio::test]
async fn test_unknown_route_gets_failure_envelope() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/api/nothing-here", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Route not found");
}

#[tokio::test]
async fn test_car_crud_roundtrip() {
    let app = app();

    let (status, created) = send(&app, Method::POST, "/api/cars", Some(car_body())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["success"], true);
    let id = created["data"]["id"].as_str().unwrap().to_string();

    // read-back equals the created record
    let (status, fetched) = send(&app, Method::GET, &format!("/api/cars/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["data"], created["data"]);

    // partial update: patched field changes, the rest is retained, id is stable
    let (status, updated) = send(
        &app,
        Method::PUT,
        &format!("/api/cars/{id}"),
        Some(json!({"color": "blue", "id": "forged"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["data"]["id"], id.as_str());
    assert_eq!(updated["data"]["color"], "blue");
    assert_eq!(updated["data"]["name"], "X");
    assert_eq!(updated["data"]["wheelsCount"], 4);

    // delete yields an empty data object; the record is gone afterwards
    let (status, deleted) = send(&app, Method::DELETE, &format!("/api/cars/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted, json!({"success": true, "data": {}}));

    let (status, _) = send(&app, Method::GET, &format!("/api/cars/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // deleting again is a controller-level 404, not a crash
    let (status, body) = send(&app, Method::DELETE, &format!("/api/cars/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Car not found");
}

#[tokio::test]
async fn test_get_missing_car_returns_not_found_envelope() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/api/cars/does-not-exist", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"success": false, "error": "Car not found"}));
}

#[tokio::test]
async fn test_create_with_missing_field_leaves_store_unchanged() {
    let app = app();

    let mut body = car_body();
    body.as_object_mut().unwrap().remove("color");
    let (status, response) = send(&app, Method::POST, "/api/cars", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response,
        json!({"success": false, "error": "All car fields are required"})
    );

    let (_, all) = send(&app, Method::GET, "/api/cars", None).await;
    assert_eq!(all["data"], json!([]));
}

#[tokio::test]
async fn test_create_with_null_field_is_rejected() {
    let app = app();
    let mut body = car_body();
    body["price"] = serde_json::Value::Null;
    let (status, response) = send(&app, Method::POST, "/api/cars", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"], "All car fields are required");
}

#[tokio::test]
async fn test_dealer_scoped_create_and_filtering() {
    let app = app();

    // body carries no dealerId; the path injects it
    let mut body = car_body();
    body.as_object_mut().unwrap().remove("dealerId");
    let (status, created) = send(&app, Method::POST, "/api/dealers/D1/cars", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["data"]["dealerId"], "D1");
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let (_, by_dealer) = send(&app, Method::GET, "/api/dealers/D1/cars", None).await;
    assert!(by_dealer["data"]
        .as_array()
        .unwrap()
        .iter()
        .any(|c| c["id"] == id.as_str()));

    let (_, by_make) = send(&app, Method::GET, "/api/carmakes/M1/cars", None).await;
    assert!(by_make["data"]
        .as_array()
        .unwrap()
        .iter()
        .any(|c| c["id"] == id.as_str()));

    let (_, other_dealer) = send(&app, Method::GET, "/api/dealers/D2/cars", None).await;
    assert_eq!(other_dealer["data"], json!([]));
}

#[tokio::test]
async fn test_scoped_create_overrides_conflicting_body_id() {
    let app = app();

    let mut body = car_body();
    body["dealerId"] = json!("D9");
    let (_, created) = send(&app, Method::POST, "/api/dealers/D1/cars", Some(body)).await;
    assert_eq!(created["data"]["dealerId"], "D1");

    let mut body = car_body();
    body["carMakeId"] = json!("M9");
    let (_, created) = send(&app, Method::POST, "/api/carmakes/M1/cars", Some(body)).await;
    assert_eq!(created["data"]["carMakeId"], "M1");
}

#[tokio::test]
async fn test_doubly_scoped_route_filters_on_both_parents() {
    let app = app();

    for (dealer, make, name) in [("D1", "M1", "a"), ("D1", "M2", "b"), ("D2", "M1", "c")] {
        let mut body = car_body();
        body["dealerId"] = json!(dealer);
        body["carMakeId"] = json!(make);
        body["name"] = json!(name);
        let (status, _) = send(&app, Method::POST, "/api/cars", Some(body)).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, both) = send(&app, Method::GET, "/api/dealers/D1/carmakes/M1/cars", None).await;
    assert_eq!(status, StatusCode::OK);
    let cars = both["data"].as_array().unwrap();
    assert_eq!(cars.len(), 1);
    assert_eq!(cars[0]["name"], "a");

    // creation injects both parents, overriding the body
    let mut body = car_body();
    body["dealerId"] = json!("D9");
    body["carMakeId"] = json!("M9");
    let (status, created) = send(
        &app,
        Method::POST,
        "/api/dealers/D3/carmakes/M3/cars",
        Some(body),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["data"]["dealerId"], "D3");
    assert_eq!(created["data"]["carMakeId"], "M3");
}

#[tokio::test]
async fn test_malformed_json_body_gets_failure_envelope() {
    let app = app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/cars")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_security_headers_are_set() {
    let app = app();
    let request = Request::builder()
        .method(Method::GET)
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(
        response.headers().get("x-content-type-options").unwrap(),
        "nosniff"
    );
    assert_eq!(
        response.headers().get("x-frame-options").unwrap(),
        "SAMEORIGIN"
    );
}

#[tokio::test]
async fn test_dealer_and_make_crud() {
    let app = app();

    let (status, dealer) = send(
        &app,
        Method::POST,
        "/api/dealers",
        Some(json!({"name": "Downtown Motors", "city": "Austin", "country": "US"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let dealer_id = dealer["data"]["id"].as_str().unwrap().to_string();

    let (status, updated) = send(
        &app,
        Method::PUT,
        &format!("/api/dealers/{dealer_id}"),
        Some(json!({"city": "Dallas"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["data"]["city"], "Dallas");
    assert_eq!(updated["data"]["name"], "Downtown Motors");

    let (status, body) = send(&app, Method::POST, "/api/dealers", Some(json!({"name": "x"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "All dealer fields are required");

    let (status, make) = send(
        &app,
        Method::POST,
        "/api/carmakes",
        Some(json!({"name": "Aurora"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let make_id = make["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = send(&app, Method::GET, &format!("/api/carmakes/{make_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Aurora");

    let (status, body) = send(&app, Method::GET, "/api/carmakes/absent", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Car make not found");
}
