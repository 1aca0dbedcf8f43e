//! Page-data handlers.
//!
//! Rendering lives in an external presentation layer; these endpoints return
//! the data each page consumes. The gated ones require a session like the
//! pages they back.

use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use serde_json::json;

use studytrack_core::Subject;

use crate::error::AppError;
use crate::session::CurrentUser;
use crate::state::AppState;

/// GET /
pub async fn index() -> impl IntoResponse {
    Json(json!({
        "app": studytrack_core::PROJECT_NAME,
        "version": studytrack_core::VERSION,
    }))
}

/// GET /health
pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// GET /signup-page
pub async fn signup_page() -> impl IntoResponse {
    Json(json!({ "page": "signup" }))
}

/// GET /login (page data; POST on the same path performs the login)
pub async fn login_page() -> impl IntoResponse {
    Json(json!({ "page": "login" }))
}

/// GET /main-page
pub async fn main_page(user: CurrentUser) -> impl IntoResponse {
    Json(json!({ "username": user.username }))
}

/// GET /performance-entry-page
pub async fn performance_entry_page(user: CurrentUser) -> impl IntoResponse {
    let subjects: Vec<&str> = Subject::ALL.iter().map(|s| s.key()).collect();
    Json(json!({ "username": user.username, "subjects": subjects }))
}

/// GET /visual-representation-page
pub async fn visual_representation_page(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<impl IntoResponse, AppError> {
    let entries = state.marks.list(&user.username).await?;
    Ok(Json(json!({ "marks": entries })))
}

/// GET /all-marks
pub async fn all_marks(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<impl IntoResponse, AppError> {
    let entries = state.marks.list(&user.username).await?;
    Ok(Json(json!({ "marks": entries })))
}
