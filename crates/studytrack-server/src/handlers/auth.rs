//! Signup, login and logout handlers.

use axum::Json;
use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;
use serde_json::json;
use tower_sessions::Session;
use tracing::info;

use crate::error::AppError;
use crate::session::SESSION_USERNAME_KEY;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SignupForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// POST /signup
pub async fn signup(
    State(state): State<AppState>,
    Form(form): Form<SignupForm>,
) -> Result<impl IntoResponse, AppError> {
    let user = state
        .auth
        .signup(&form.username, &form.email, &form.password)
        .await?;
    studytrack_metrics::record_signup();
    info!(username = %user.username, "account created");

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Account created successfully. Please log in." })),
    ))
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default, rename = "nameOrEmail")]
    pub name_or_email: String,
    #[serde(default)]
    pub password: String,
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<impl IntoResponse, AppError> {
    let identifier = form.name_or_email.trim();
    let password = form.password.trim();

    if identifier.is_empty() || password.is_empty() {
        return Err(AppError::Validation(
            "Both Name/Email and Password are required.".into(),
        ));
    }

    match state.auth.login(identifier, password).await {
        Ok(user) => {
            session.insert(SESSION_USERNAME_KEY, &user.username).await?;
            studytrack_metrics::record_login_success();
            info!(username = %user.username, "session established");

            Ok(Json(json!({
                "message": "Login successful.",
                "username": user.username,
            })))
        }
        Err(err) => {
            studytrack_metrics::record_login_failure();
            Err(err.into())
        }
    }
}

/// GET /logout
///
/// Clears the session unconditionally; safe to call while logged out.
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    session.flush().await?;
    Ok(Json(json!({
        "message": "You have been logged out successfully."
    })))
}
