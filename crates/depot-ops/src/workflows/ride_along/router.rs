use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::archive::KeyValueStore;
use super::catalog::CatalogVariant;
use super::domain::SessionError;
use super::service::{RideAlongService, ServiceError, SessionId, StartSession};

#[derive(Debug, Deserialize)]
pub(crate) struct SelectionRequest {
    pub question_id: String,
    pub value: String,
    #[serde(default)]
    pub free_text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FreeTextRequest {
    pub question_id: String,
    pub text: String,
}

/// HTTP surface for live sessions, saved reports, and catalog lookup.
pub fn ride_along_router<S>(service: Arc<RideAlongService<S>>) -> Router
where
    S: KeyValueStore + 'static,
{
    Router::new()
        .route("/api/v1/ride-along/sessions", post(start_handler::<S>))
        .route(
            "/api/v1/ride-along/sessions/:session_id",
            get(snapshot_handler::<S>).delete(close_handler::<S>),
        )
        .route(
            "/api/v1/ride-along/sessions/:session_id/selections",
            post(selection_handler::<S>),
        )
        .route(
            "/api/v1/ride-along/sessions/:session_id/free-text",
            put(free_text_handler::<S>),
        )
        .route(
            "/api/v1/ride-along/sessions/:session_id/advance",
            post(advance_handler::<S>),
        )
        .route(
            "/api/v1/ride-along/sessions/:session_id/retreat",
            post(retreat_handler::<S>),
        )
        .route(
            "/api/v1/ride-along/sessions/:session_id/reset",
            post(reset_handler::<S>),
        )
        .route(
            "/api/v1/ride-along/sessions/:session_id/report",
            get(report_handler::<S>),
        )
        .route(
            "/api/v1/ride-along/sessions/:session_id/score",
            get(score_handler::<S>),
        )
        .route(
            "/api/v1/ride-along/sessions/:session_id/save",
            post(save_handler::<S>),
        )
        .route("/api/v1/ride-along/reports", get(reports_handler::<S>))
        .route(
            "/api/v1/ride-along/reports/:report_id",
            get(saved_report_handler::<S>).delete(delete_report_handler::<S>),
        )
        .route("/api/v1/ride-along/catalogs", get(catalogs_handler))
        .route(
            "/api/v1/ride-along/catalogs/:variant",
            get(catalog_handler::<S>),
        )
        .with_state(service)
}

pub(crate) async fn start_handler<S>(
    State(service): State<Arc<RideAlongService<S>>>,
    Json(request): Json<StartSession>,
) -> Response
where
    S: KeyValueStore + 'static,
{
    match service.start(request) {
        Ok(started) => (StatusCode::CREATED, Json(started)).into_response(),
        Err(err) => error_response(err),
    }
}

async fn snapshot_handler<S>(
    State(service): State<Arc<RideAlongService<S>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: KeyValueStore + 'static,
{
    respond(service.snapshot(&SessionId(session_id)))
}

async fn close_handler<S>(
    State(service): State<Arc<RideAlongService<S>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: KeyValueStore + 'static,
{
    match service.close(&SessionId(session_id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn selection_handler<S>(
    State(service): State<Arc<RideAlongService<S>>>,
    Path(session_id): Path<String>,
    Json(request): Json<SelectionRequest>,
) -> Response
where
    S: KeyValueStore + 'static,
{
    respond(service.select(
        &SessionId(session_id),
        &request.question_id,
        &request.value,
        request.free_text.as_deref(),
    ))
}

async fn free_text_handler<S>(
    State(service): State<Arc<RideAlongService<S>>>,
    Path(session_id): Path<String>,
    Json(request): Json<FreeTextRequest>,
) -> Response
where
    S: KeyValueStore + 'static,
{
    match service.set_free_text(&SessionId(session_id), &request.question_id, &request.text) {
        Ok(applied) => (StatusCode::OK, Json(json!({ "applied": applied }))).into_response(),
        Err(err) => error_response(err),
    }
}

async fn advance_handler<S>(
    State(service): State<Arc<RideAlongService<S>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: KeyValueStore + 'static,
{
    respond(service.advance(&SessionId(session_id)))
}

async fn retreat_handler<S>(
    State(service): State<Arc<RideAlongService<S>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: KeyValueStore + 'static,
{
    respond(service.retreat(&SessionId(session_id)))
}

async fn reset_handler<S>(
    State(service): State<Arc<RideAlongService<S>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: KeyValueStore + 'static,
{
    respond(service.reset(&SessionId(session_id)))
}

async fn report_handler<S>(
    State(service): State<Arc<RideAlongService<S>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: KeyValueStore + 'static,
{
    respond(service.report(&SessionId(session_id)))
}

async fn score_handler<S>(
    State(service): State<Arc<RideAlongService<S>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: KeyValueStore + 'static,
{
    respond(service.score(&SessionId(session_id)))
}

async fn save_handler<S>(
    State(service): State<Arc<RideAlongService<S>>>,
    Path(session_id): Path<String>,
) -> Response
where
    S: KeyValueStore + 'static,
{
    match service.save_report(&SessionId(session_id)) {
        Ok(saved) => (StatusCode::CREATED, Json(saved)).into_response(),
        Err(err) => error_response(err),
    }
}

async fn reports_handler<S>(State(service): State<Arc<RideAlongService<S>>>) -> Response
where
    S: KeyValueStore + 'static,
{
    respond(service.saved_reports())
}

async fn saved_report_handler<S>(
    State(service): State<Arc<RideAlongService<S>>>,
    Path(report_id): Path<String>,
) -> Response
where
    S: KeyValueStore + 'static,
{
    respond(service.saved_report(&report_id))
}

async fn delete_report_handler<S>(
    State(service): State<Arc<RideAlongService<S>>>,
    Path(report_id): Path<String>,
) -> Response
where
    S: KeyValueStore + 'static,
{
    match service.delete_report(&report_id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_response(err),
    }
}

async fn catalogs_handler() -> Response {
    let variants: Vec<&str> = CatalogVariant::ALL.iter().map(|v| v.as_str()).collect();
    (StatusCode::OK, Json(json!({ "catalogs": variants }))).into_response()
}

async fn catalog_handler<S>(
    State(service): State<Arc<RideAlongService<S>>>,
    Path(variant): Path<String>,
) -> Response
where
    S: KeyValueStore + 'static,
{
    match CatalogVariant::parse(&variant) {
        Some(variant) => (StatusCode::OK, Json(service.catalog(variant).as_ref())).into_response(),
        None => {
            let payload = json!({
                "error": format!("unknown catalog '{variant}'"),
            });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}

fn respond<T: serde::Serialize>(result: Result<T, ServiceError>) -> Response {
    match result {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) fn error_status(err: &ServiceError) -> StatusCode {
    match err {
        ServiceError::SessionNotFound(_) | ServiceError::ReportNotFound(_) => {
            StatusCode::NOT_FOUND
        }
        ServiceError::Session(SessionError::MissingIdentity(_)) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        ServiceError::Session(_) => StatusCode::BAD_REQUEST,
        ServiceError::ScoringDisabled(_) => StatusCode::CONFLICT,
        ServiceError::Archive(_) | ServiceError::Unavailable => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_response(err: ServiceError) -> Response {
    let status = error_status(&err);
    if status.is_server_error() {
        tracing::error!(error = %err, "ride-along request failed");
    }
    let payload = json!({
        "error": err.to_string(),
    });
    (status, Json(payload)).into_response()
}
