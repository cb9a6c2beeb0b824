use crate::infra::{AppState, MAX_NARRATIVE_CHARS};
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::{DateTime, Utc};
use sara::error::AppError;
use sara::workflows::batch::{BatchSummary, BatchTriage};
use sara::workflows::onboarding::{EvaluationResult, RiskEngine};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug, Deserialize)]
pub(crate) struct EvaluationRequest {
    #[serde(default)]
    pub(crate) narrative: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct EvaluationResponse {
    pub(crate) evaluated_at: DateTime<Utc>,
    pub(crate) result: EvaluationResult,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BatchRequest {
    pub(crate) csv: String,
}

/// Rejections raised before a narrative reaches the engine.
#[derive(Debug, thiserror::Error)]
pub(crate) enum RequestError {
    #[error("narrative exceeds {max} characters (found {found})")]
    NarrativeTooLong { max: usize, found: usize },
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        let payload = json!({ "error": self.to_string() });
        (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
    }
}

pub(crate) fn onboarding_router(engine: Arc<RiskEngine>) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/onboarding/evaluate", post(evaluate_endpoint))
        .route("/api/v1/onboarding/batch", post(batch_endpoint))
        .with_state(engine)
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn evaluate_endpoint(
    State(engine): State<Arc<RiskEngine>>,
    Json(payload): Json<EvaluationRequest>,
) -> Result<Json<EvaluationResponse>, RequestError> {
    let found = payload.narrative.chars().count();
    if found > MAX_NARRATIVE_CHARS {
        warn!(found, "narrative rejected for length");
        return Err(RequestError::NarrativeTooLong {
            max: MAX_NARRATIVE_CHARS,
            found,
        });
    }

    let result = engine.evaluate(&payload.narrative);
    info!(
        verdict = ?result.verdict,
        reasons = result.reasons.len(),
        "narrative evaluated"
    );

    Ok(Json(EvaluationResponse {
        evaluated_at: Utc::now(),
        result,
    }))
}

pub(crate) async fn batch_endpoint(
    State(engine): State<Arc<RiskEngine>>,
    Json(payload): Json<BatchRequest>,
) -> Result<Json<BatchSummary>, AppError> {
    let reader = Cursor::new(payload.csv.into_bytes());
    let summary = BatchTriage::from_reader_with_limit(reader, &engine, MAX_NARRATIVE_CHARS)?;
    Ok(Json(summary))
}
