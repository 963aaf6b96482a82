use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use super::common::*;
use crate::workflows::ride_along::router::start_handler;
use crate::workflows::ride_along::service::StartSession;
use crate::workflows::ride_along::{ride_along_router, CatalogVariant, MemoryStore};

fn app() -> Router {
    ride_along_router(Arc::new(build_service()))
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

async fn start(app: &Router) -> String {
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/ride-along/sessions",
            json!({ "subjects": [{ "role": "trainee", "name": "Alex" }] }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = read_json_body(response).await;
    body["session_id"]
        .as_str()
        .expect("session id")
        .to_string()
}

#[tokio::test]
async fn start_handler_rejects_missing_trainee() {
    let service = Arc::new(build_service());
    let response = start_handler::<MemoryStore>(
        State(service),
        axum::Json(StartSession {
            catalog: Some(CatalogVariant::Standard),
            subjects: Vec::new(),
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json_body(response).await;
    assert_eq!(body["error"], "Trainee name is required");
}

#[tokio::test]
async fn session_flow_produces_report_and_score() {
    let app = app();
    let id = start(&app).await;
    let base = format!("/api/v1/ride-along/sessions/{id}");

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("{base}/selections"),
            json!({ "question_id": "driving", "value": "good" }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["change"], "selected");

    let response = app
        .clone()
        .oneshot(empty_request("POST", &format!("{base}/advance")))
        .await
        .expect("response");
    let body = read_json_body(response).await;
    assert_eq!(body["index"], 1);
    assert_eq!(body["done"], false);

    let response = app
        .clone()
        .oneshot(empty_request("POST", &format!("{base}/retreat")))
        .await
        .expect("response");
    let body = read_json_body(response).await;
    assert_eq!(body["current_index"], 0);
    assert_eq!(body["current_question"]["id"], "coached");

    let response = app
        .clone()
        .oneshot(empty_request("GET", &format!("{base}/report")))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    let text = body["text"].as_str().expect("report text");
    assert!(text.starts_with("RIDE-ALONG FEEDBACK\nTRAINEE: Alex"));
    assert!(text.contains("✅ Good driver: full stops, speed limits, follows traffic rules."));
    assert_eq!(body["report"]["sections"][0]["kind"], "strengths");

    let response = app
        .clone()
        .oneshot(empty_request("GET", &format!("{base}/score")))
        .await
        .expect("response");
    let body = read_json_body(response).await;
    assert_eq!(body["total"], 5);
    assert_eq!(body["max"], 110);
    assert_eq!(body["level"], "unsatisfactory");
}

#[tokio::test]
async fn free_text_route_reports_dropped_edits() {
    let app = app();
    let id = start(&app).await;

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/v1/ride-along/sessions/{id}/free-text"),
            json!({ "question_id": "coached", "text": "8" }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json_body(response).await["applied"], false);

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/v1/ride-along/sessions/{id}/free-text"),
            json!({ "question_id": "driving", "text": "8" }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_option_is_a_bad_request() {
    let app = app();
    let id = start(&app).await;
    let response = app
        .oneshot(json_request(
            "POST",
            &format!("/api/v1/ride-along/sessions/{id}/selections"),
            json!({ "question_id": "driving", "value": "great" }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn missing_session_and_report_are_not_found() {
    let app = app();
    let response = app
        .clone()
        .oneshot(empty_request(
            "GET",
            "/api/v1/ride-along/sessions/ride-424242/report",
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .oneshot(empty_request("DELETE", "/api/v1/ride-along/reports/1"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn saved_reports_can_be_listed_and_deleted() {
    let app = app();
    let id = start(&app).await;

    let response = app
        .clone()
        .oneshot(empty_request(
            "POST",
            &format!("/api/v1/ride-along/sessions/{id}/save"),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::CREATED);
    let saved = read_json_body(response).await;
    let report_id = saved["id"].as_str().expect("report id").to_string();

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/api/v1/ride-along/reports"))
        .await
        .expect("response");
    let listed = read_json_body(response).await;
    assert_eq!(listed.as_array().map(Vec::len), Some(1));

    let response = app
        .clone()
        .oneshot(empty_request(
            "DELETE",
            &format!("/api/v1/ride-along/reports/{report_id}"),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .oneshot(empty_request(
            "GET",
            &format!("/api/v1/ride-along/reports/{report_id}"),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn catalog_lookup_serves_definitions() {
    let app = app();
    let response = app
        .clone()
        .oneshot(empty_request("GET", "/api/v1/ride-along/catalogs/driver-trainer"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["name"], "driver-trainer");
    assert_eq!(body["keeps_history"], true);
    assert_eq!(body["questions"].as_array().map(Vec::len), Some(24));

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/api/v1/ride-along/catalogs"))
        .await
        .expect("response");
    let body = read_json_body(response).await;
    assert_eq!(
        body["catalogs"],
        json!(["standard", "driver-trainer", "trainee-basic"])
    );

    let response = app
        .oneshot(empty_request("GET", "/api/v1/ride-along/catalogs/handover"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
