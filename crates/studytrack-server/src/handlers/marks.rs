//! Mark submission, update, delete and read handlers.

use axum::Json;
use axum::extract::{Form, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use studytrack_core::{Marks, coerce_score};

use crate::error::AppError;
use crate::session::CurrentUser;
use crate::state::AppState;

/// Raw form scores. Every field is optional; absent or unparsable values
/// coerce to 0 rather than failing the request.
#[derive(Debug, Default, Deserialize)]
pub struct MarksForm {
    #[serde(default)]
    math: String,
    #[serde(default)]
    science: String,
    #[serde(default)]
    social: String,
    #[serde(default)]
    computer: String,
    #[serde(default)]
    gk: String,
}

impl MarksForm {
    fn into_marks(self) -> Marks {
        Marks {
            math: coerce_score(&self.math),
            science: coerce_score(&self.science),
            social: coerce_score(&self.social),
            computer: coerce_score(&self.computer),
            gk: coerce_score(&self.gk),
        }
    }
}

/// POST /submit-marks
///
/// Always inserts a new record, then answers with recommendations computed
/// from the just-submitted scores (not from history).
pub async fn submit_marks(
    State(state): State<AppState>,
    user: CurrentUser,
    Form(form): Form<MarksForm>,
) -> Result<impl IntoResponse, AppError> {
    let marks = form.into_marks();
    let entry = state.marks.insert(&user.username, &marks).await?;
    studytrack_metrics::record_marks_submitted();
    info!(username = %user.username, id = %entry.id, "marks submitted");

    let recommendations = studytrack_recommend::for_submission(&marks);
    Ok((
        StatusCode::CREATED,
        Json(json!({ "id": entry.id, "recommendations": recommendations })),
    ))
}

/// POST /update-marks/{id}
///
/// Replaces the marks mapping of an owned record. A non-owned or unknown id
/// is a silent no-op.
pub async fn update_marks(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
    Form(form): Form<MarksForm>,
) -> Result<impl IntoResponse, AppError> {
    state
        .marks
        .update(&id, &user.username, &form.into_marks())
        .await?;
    Ok(Json(json!({ "message": "Marks updated." })))
}

/// POST /delete-marks/{id}
///
/// Owner-filtered delete that does not report whether anything was removed.
pub async fn delete_marks(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if state.marks.delete(&id, &user.username).await? {
        studytrack_metrics::record_marks_deleted();
    }
    Ok(Json(json!({ "message": "Marks deleted." })))
}

/// POST /delete-mark/{id}
///
/// Owner-filtered delete that reports whether a record was removed.
pub async fn delete_mark(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = state.marks.delete(&id, &user.username).await?;
    if deleted {
        studytrack_metrics::record_marks_deleted();
        info!(username = %user.username, %id, "mark entry deleted");
    }

    let message = if deleted {
        "Mark entry deleted successfully."
    } else {
        "Failed to delete the mark entry."
    };
    Ok(Json(json!({ "deleted": deleted, "message": message })))
}

/// GET /api/get-user-marks
///
/// The most recent submission's five scores, zeros when nothing is stored.
pub async fn get_user_marks(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<impl IntoResponse, AppError> {
    let latest = state.marks.latest(&user.username).await?;
    let values = latest.map(|entry| entry.marks.values()).unwrap_or([0; 5]);
    Ok(Json(json!({ "marks": values })))
}

/// GET /api/get-all-marks
pub async fn get_all_marks(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<impl IntoResponse, AppError> {
    let entries = state.marks.list(&user.username).await?;
    Ok(Json(json!({ "marks": entries })))
}
