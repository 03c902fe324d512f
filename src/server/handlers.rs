//! Request handlers and error responses

use crate::analyzer::AnalysisResult;
use crate::server::AppState;
use crate::store::{StoreError, StoredRecord};
use crate::AnalyzeError;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

/// Body of `POST /api/response`
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    pub url: String,
}

/// Failures surfaced to API clients
#[derive(Debug)]
pub enum ApiError {
    Analyze(AnalyzeError),
    Store(StoreError),
}

impl From<AnalyzeError> for ApiError {
    fn from(e: AnalyzeError) -> Self {
        Self::Analyze(e)
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Analyze(AnalyzeError::InvalidUrl { .. }) | Self::Store(StoreError::Invalid(_)) => {
                StatusCode::BAD_REQUEST
            }
            Self::Analyze(AnalyzeError::FetchFailed { .. })
            | Self::Analyze(AnalyzeError::ProbeFailed { .. }) => StatusCode::BAD_GATEWAY,
            Self::Analyze(AnalyzeError::ClientBuild(_)) | Self::Store(StoreError::Poisoned) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
        }
    }

    fn message(&self) -> String {
        match self {
            Self::Analyze(e) => e.to_string(),
            Self::Store(e) => e.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", message);
        } else {
            tracing::debug!("Request rejected: {}", message);
        }
        (status, Json(json!({ "error": message }))).into_response()
    }
}

pub(crate) async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn list_records(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<StoredRecord>>, ApiError> {
    Ok(Json(state.store.list()?))
}

pub(crate) async fn get_record(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<StoredRecord>, ApiError> {
    Ok(Json(state.store.get(&id)?))
}

/// Analyzes the requested URL and stores the result
///
/// Nothing is stored when the analysis fails.
pub(crate) async fn create_record(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<(StatusCode, Json<StoredRecord>), ApiError> {
    let result = state.analyzer.analyze(&request.url).await?;
    let record = state.store.insert(result)?;
    tracing::info!("Created record {} for {}", record.id, record.result.url);
    Ok((StatusCode::CREATED, Json(record)))
}

pub(crate) async fn update_record(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(result): Json<AnalysisResult>,
) -> Result<Json<StoredRecord>, ApiError> {
    let record = state.store.update(&id, result)?;
    tracing::info!("Updated record {}", record.id);
    Ok(Json(record))
}

pub(crate) async fn delete_record(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let record = state.store.delete(&id)?;
    tracing::info!("Deleted record {}", record.id);
    Ok(StatusCode::NO_CONTENT)
}
