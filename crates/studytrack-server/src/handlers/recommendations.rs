//! Aggregated recommendation handler.

use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use serde_json::json;

use studytrack_recommend::{for_averages, subject_averages};

use crate::error::AppError;
use crate::session::CurrentUser;
use crate::state::AppState;

/// GET /recommendations
///
/// Tiered advice computed from per-subject averages across the user's whole
/// history. Unlike the submit-marks response, these entries carry no
/// free-text topic flag.
pub async fn recommendations(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<impl IntoResponse, AppError> {
    let entries = state.marks.list(&user.username).await?;
    if entries.is_empty() {
        return Err(AppError::Validation(
            "No marks data available. Please enter marks first.".into(),
        ));
    }

    let averages = subject_averages(entries.iter().map(|entry| &entry.marks));
    let recommendations = for_averages(&averages);
    Ok(Json(json!({ "recommendations": recommendations })))
}
