//! Session-backed request identity.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use tower_sessions::Session;

use crate::error::AppError;

/// Session key under which the authenticated username is stored.
pub const SESSION_USERNAME_KEY: &str = "username";

/// Authenticated identity for the current request.
///
/// Extracting this value is the login guard: requests without a bound
/// username are rejected before the handler body runs, and the session is
/// left untouched. Handlers that take a `CurrentUser` parameter are the
/// session-gated surface.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub username: String,
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(_, msg)| AppError::Session(msg.to_owned()))?;

        let username: Option<String> = session.get(SESSION_USERNAME_KEY).await?;
        username
            .map(|username| CurrentUser { username })
            .ok_or(AppError::Unauthorized)
    }
}
