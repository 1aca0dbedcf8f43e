//! End-to-end tests for the HTTP surface, running the router in-process
//! against the in-memory backends.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use studytrack_auth::{CredentialAuth, MemoryUsers, UserStore};
use studytrack_config::Config;
use studytrack_resources::ResourceClient;
use studytrack_server::{AppState, router};
use studytrack_store::{MarkStore, MemoryMarks};

fn test_app() -> Router {
    let users: Arc<dyn UserStore> = Arc::new(MemoryUsers::new());
    let marks: Arc<dyn MarkStore> = Arc::new(MemoryMarks::new());

    // Unroutable endpoint: any test that actually reached the network would
    // fail with a transport error, not a validation error.
    let resources = ResourceClient::new("http://invalid.invalid", "test-key", 5);

    let state = AppState {
        auth: Arc::new(CredentialAuth::new(users)),
        marks,
        resources: Arc::new(resources),
        config: Arc::new(Config::default()),
    };
    router(state)
}

/// Send a request; return status, the session cookie (if set), and the JSON body.
async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Option<String>, Value) {
    let resp = app.clone().oneshot(req).await.expect("request failed");
    let status = resp.status();
    let cookie = resp
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(str::to_owned);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("body read failed");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, cookie, json)
}

fn form_post(uri: &str, body: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body.to_owned())).unwrap()
}

fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

fn json_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

/// Sign up and log in a user, returning the session cookie.
async fn login_user(app: &Router, username: &str, email: &str, password: &str) -> String {
    let body = format!("username={username}&email={email}&password={password}");
    let (status, _, _) = send(app, form_post("/signup", &body, None)).await;
    assert_eq!(status, StatusCode::CREATED);

    let body = format!("nameOrEmail={username}&password={password}");
    let (status, cookie, _) = send(app, form_post("/login", &body, None)).await;
    assert_eq!(status, StatusCode::OK);
    cookie.expect("login did not establish a session")
}

#[tokio::test]
async fn health_and_landing_are_open() {
    let app = test_app();

    let (status, _, body) = send(&app, get("/health", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, _, body) = send(&app, get("/", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["app"], "studytrack");
}

#[tokio::test]
async fn signup_rejects_missing_fields_and_duplicates() {
    let app = test_app();

    let (status, _, body) =
        send(&app, form_post("/signup", "username=alice&password=pw", None)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("email"));

    let (status, _, _) = send(
        &app,
        form_post("/signup", "username=alice&email=a%40b.c&password=pw", None),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    // Same username, different email: no second record.
    let (status, _, body) = send(
        &app,
        form_post("/signup", "username=alice&email=other%40b.c&password=pw", None),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "user already exists");
}

#[tokio::test]
async fn failed_login_binds_no_session() {
    let app = test_app();
    send(
        &app,
        form_post("/signup", "username=alice&email=a%40b.c&password=right", None),
    )
    .await;

    let (status, cookie, body) = send(
        &app,
        form_post("/login", "nameOrEmail=alice&password=wrong", None),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(cookie.is_none());
    // Unknown user reads identically.
    let (status2, _, body2) = send(
        &app,
        form_post("/login", "nameOrEmail=mallory&password=wrong", None),
    )
    .await;
    assert_eq!(status2, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], body2["error"]);
}

#[tokio::test]
async fn protected_routes_require_a_session() {
    let app = test_app();

    for uri in [
        "/main-page",
        "/performance-entry-page",
        "/visual-representation-page",
        "/all-marks",
        "/api/get-user-marks",
        "/api/get-all-marks",
        "/recommendations",
    ] {
        let (status, _, _) = send(&app, get(uri, None)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{uri} was not gated");
    }

    let (status, _, _) = send(&app, form_post("/submit-marks", "math=50", None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn login_session_grants_access_and_logout_revokes_it() {
    let app = test_app();
    let cookie = login_user(&app, "alice", "alice%40example.com", "pw").await;

    let (status, _, body) = send(&app, get("/main-page", Some(&cookie))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "alice");

    let (status, _, _) = send(&app, get("/logout", Some(&cookie))).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _, _) = send(&app, get("/main-page", Some(&cookie))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn submit_marks_returns_single_submission_recommendations() {
    let app = test_app();
    let cookie = login_user(&app, "alice", "alice%40example.com", "pw").await;

    let (status, _, body) = send(
        &app,
        form_post(
            "/submit-marks",
            "math=30&science=80&social=50&computer=70&gk=abc",
            Some(&cookie),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let recs = body["recommendations"].as_array().unwrap();
    assert_eq!(recs.len(), 5);

    let math = &recs[0];
    assert_eq!(math["subject"], "Math");
    assert_eq!(math["tier"], "critical");
    assert_eq!(math["resources"].as_array().unwrap().len(), 3);
    assert_eq!(math["allow_topic_input"], true);

    let science = &recs[1];
    assert_eq!(science["tier"], "excellent");
    assert_eq!(science["resources"].as_array().unwrap().len(), 2);
    assert_eq!(science["allow_topic_input"], false);

    // The flag threshold is 70, not a tier boundary: computer=70 is denied.
    assert_eq!(recs[3]["allow_topic_input"], false);

    // "gk=abc" coerced to 0.
    assert_eq!(recs[4]["tier"], "critical");
}

#[tokio::test]
async fn submitted_marks_are_readable_and_updatable() {
    let app = test_app();
    let cookie = login_user(&app, "alice", "alice%40example.com", "pw").await;

    let (_, _, body) = send(
        &app,
        form_post(
            "/submit-marks",
            "math=90&science=85&social=70&computer=95&gk=60",
            Some(&cookie),
        ),
    )
    .await;
    let id = body["id"].as_str().unwrap().to_owned();

    let (status, _, body) = send(&app, get("/api/get-user-marks", Some(&cookie))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["marks"], serde_json::json!([90, 85, 70, 95, 60]));

    let (status, _, body) = send(&app, get("/api/get-all-marks", Some(&cookie))).await;
    assert_eq!(status, StatusCode::OK);
    let all = body["marks"].as_array().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0]["id"], id.as_str());
    assert_eq!(all[0]["marks"]["math"], 90);

    let (status, _, _) = send(
        &app,
        form_post(
            &format!("/update-marks/{id}"),
            "math=10&science=20&social=30&computer=40&gk=50",
            Some(&cookie),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, _, body) = send(&app, get("/api/get-all-marks", Some(&cookie))).await;
    assert_eq!(body["marks"][0]["marks"]["math"], 10);
}

#[tokio::test]
async fn delete_is_owner_filtered_and_reports() {
    let app = test_app();
    let alice = login_user(&app, "alice", "alice%40example.com", "pw").await;
    let bob = login_user(&app, "bob", "bob%40example.com", "pw").await;

    let (_, _, body) = send(
        &app,
        form_post("/submit-marks", "math=50", Some(&alice)),
    )
    .await;
    let id = body["id"].as_str().unwrap().to_owned();

    // Bob cannot delete Alice's record, and the miss is reported.
    let (status, _, body) = send(
        &app,
        form_post(&format!("/delete-mark/{id}"), "", Some(&bob)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deleted"], false);

    let (_, _, body) = send(&app, get("/api/get-all-marks", Some(&alice))).await;
    assert_eq!(body["marks"].as_array().unwrap().len(), 1);

    let (_, _, body) = send(
        &app,
        form_post(&format!("/delete-mark/{id}"), "", Some(&alice)),
    )
    .await;
    assert_eq!(body["deleted"], true);

    let (_, _, body) = send(&app, get("/api/get-all-marks", Some(&alice))).await;
    assert!(body["marks"].as_array().unwrap().is_empty());

    // The silent variant answers the same way whether or not it removed
    // anything.
    let (_, _, body) = send(
        &app,
        form_post("/submit-marks", "math=10", Some(&alice)),
    )
    .await;
    let id = body["id"].as_str().unwrap().to_owned();

    let (status, _, body) = send(
        &app,
        form_post(&format!("/delete-marks/{id}"), "", Some(&alice)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Marks deleted.");

    let (_, _, body) = send(&app, get("/api/get-all-marks", Some(&alice))).await;
    assert!(body["marks"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn recommendations_use_averages_and_omit_topic_flag() {
    let app = test_app();
    let cookie = login_user(&app, "alice", "alice%40example.com", "pw").await;

    // Empty history is a user-facing error, not an empty list.
    let (status, _, body) = send(&app, get("/recommendations", Some(&cookie))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("No marks data"));

    // Two submissions: math averages (40+60)/2 = 50 -> moderate.
    send(&app, form_post("/submit-marks", "math=40&science=90", Some(&cookie))).await;
    send(&app, form_post("/submit-marks", "math=60&science=70", Some(&cookie))).await;

    let (status, _, body) = send(&app, get("/recommendations", Some(&cookie))).await;
    assert_eq!(status, StatusCode::OK);
    let recs = body["recommendations"].as_array().unwrap();
    assert_eq!(recs.len(), 5);

    let math = &recs[0];
    assert_eq!(math["subject"], "Math");
    assert_eq!(math["tier"], "moderate");
    assert!(math["message"].as_str().unwrap().contains("average marks"));
    assert!(math.get("allow_topic_input").is_none());

    // science averages 80 -> excellent.
    assert_eq!(recs[1]["tier"], "excellent");
}

#[tokio::test]
async fn fetch_resources_validates_before_any_outbound_call() {
    let app = test_app();

    let (status, _, body) = send(
        &app,
        json_post("/fetch-resources", r#"{"subject": "math"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Subject and topic are required");

    let (status, _, _) = send(
        &app,
        json_post("/fetch-resources", r#"{"subject": "", "topic": "algebra"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
