//! Resource lookup passthrough handler.

use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use serde::Deserialize;
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct FetchResourcesRequest {
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub topic: String,
}

/// POST /fetch-resources
///
/// Validates the request before any outbound call; upstream failures surface
/// as a JSON error with a server-error status.
pub async fn fetch_resources(
    State(state): State<AppState>,
    Json(req): Json<FetchResourcesRequest>,
) -> Result<impl IntoResponse, AppError> {
    if req.subject.trim().is_empty() || req.topic.trim().is_empty() {
        return Err(AppError::Validation("Subject and topic are required".into()));
    }

    studytrack_metrics::record_resource_lookup();
    match state.resources.fetch(&req.subject, &req.topic).await {
        Ok(resources) => Ok(Json(json!({ "resources": resources }))),
        Err(err) => {
            studytrack_metrics::record_resource_lookup_error();
            Err(err.into())
        }
    }
}
