//! HTTP request handlers

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::engine::Executor;
use crate::error::{InferenceError, PredictError};
use crate::features::FEATURE_SCHEMA;
use crate::model::Prediction;

/// Shared application state
pub struct AppState {
    pub executor: Executor,
}

impl AppState {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// List the feature schema
pub async fn features() -> impl IntoResponse {
    Json(FeaturesResponse {
        features: FEATURE_SCHEMA.to_vec(),
    })
}

/// Prediction endpoint
///
/// The body is parsed as JSON whatever its content type.
#[tracing::instrument(skip_all, fields(request_id = %uuid::Uuid::new_v4()))]
pub async fn predict(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    // Inference is CPU-bound; keep it off the async workers.
    let span = tracing::Span::current();
    let result =
        tokio::task::spawn_blocking(move || span.in_scope(|| state.executor.predict_bytes(&body)))
            .await;

    match result {
        Ok(Ok(prediction)) => {
            (StatusCode::OK, Json(PredictResponse { prediction })).into_response()
        }
        Ok(Err(e)) => e.into_response(),
        Err(e) => PredictError::from(InferenceError::Aborted(e.to_string())).into_response(),
    }
}

impl IntoResponse for PredictError {
    fn into_response(self) -> Response {
        let (status, kind) = if self.is_client_error() {
            (StatusCode::BAD_REQUEST, "invalid_request_error")
        } else {
            (StatusCode::INTERNAL_SERVER_ERROR, "server_error")
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "Prediction failed");
        } else {
            tracing::debug!(error = %self, "Rejected request");
        }

        (
            status,
            Json(ErrorResponse {
                error: ErrorDetail {
                    message: self.to_string(),
                    r#type: kind.to_string(),
                },
            }),
        )
            .into_response()
    }
}

// Request/Response types

#[derive(Serialize)]
pub struct PredictResponse {
    pub prediction: Prediction,
}

#[derive(Serialize)]
pub struct FeaturesResponse {
    pub features: Vec<&'static str>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub message: String,
    pub r#type: String,
}
