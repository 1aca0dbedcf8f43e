//! Router construction and middleware layers.

use axum::Router;
use axum::http::{Method, header::CONTENT_TYPE};
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::handlers::{auth, marks, pages, recommendations, resources};
use crate::state::AppState;

/// Build the application router with CORS and session layers.
pub fn router(state: AppState) -> Router {
    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_name(state.config.session.cookie_name.clone())
        .with_secure(state.config.session.secure);

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
        .allow_origin(Any);

    Router::new()
        .route("/", get(pages::index))
        .route("/signup-page", get(pages::signup_page))
        .route("/signup", post(auth::signup))
        .route("/login", get(pages::login_page).post(auth::login))
        .route("/logout", get(auth::logout))
        .route("/main-page", get(pages::main_page))
        .route("/performance-entry-page", get(pages::performance_entry_page))
        .route("/visual-representation-page", get(pages::visual_representation_page))
        .route("/all-marks", get(pages::all_marks))
        .route("/submit-marks", post(marks::submit_marks))
        .route("/update-marks/{id}", post(marks::update_marks))
        .route("/delete-marks/{id}", post(marks::delete_marks))
        .route("/delete-mark/{id}", post(marks::delete_mark))
        .route("/api/get-user-marks", get(marks::get_user_marks))
        .route("/api/get-all-marks", get(marks::get_all_marks))
        .route("/recommendations", get(recommendations::recommendations))
        .route("/fetch-resources", post(resources::fetch_resources))
        .route("/health", get(pages::health))
        .layer(cors)
        .layer(session_layer)
        .with_state(state)
}
