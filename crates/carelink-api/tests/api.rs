//! HTTP surface tests, run in-process against the router.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use chrono::{Duration, Utc};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use carelink_api::{create_router, ApiConfig, AppState};

async fn test_app() -> (TempDir, AppState, Router) {
    let dir = TempDir::new().expect("failed to create temp dir");
    let config = ApiConfig {
        data_dir: dir.path().to_path_buf(),
        ..ApiConfig::default()
    };
    let state = AppState::new(config).await.expect("failed to build state");
    let router = create_router(state.clone());
    (dir, state, router)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_is_open() {
    let (_dir, _state, app) = test_app().await;
    let response = app.oneshot(get_request("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn registration_issues_a_valid_credential() {
    let (_dir, state, app) = test_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/clients/registro",
            json!({"name": "Ana", "email": "a@x.com"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    let id = body["client"]["id"].as_str().unwrap().to_string();
    assert!(!id.is_empty());
    assert_eq!(body["client"]["name"], "Ana");

    let claims = state.tokens.verify(body["token"].as_str().unwrap()).unwrap();
    assert_eq!(claims.sub, id);
    assert_eq!(claims.name, "Ana");

    // The stored record round-trips through the unauthenticated GET.
    let response = app.oneshot(get_request(&format!("/clients/{id}"))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = body_json(response).await;
    assert_eq!(fetched["id"], id.as_str());
    assert_eq!(fetched["email"], "a@x.com");
}

#[tokio::test]
async fn login_checks_email_only() {
    let (_dir, state, app) = test_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/clients/registro",
            json!({"name": "Ana", "email": "a@x.com", "password": "hunter2"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    // Login supplies only the email. The stored password is never consulted;
    // a fresh credential is issued on the email match alone.
    let response = app
        .clone()
        .oneshot(json_request("POST", "/clients/login", json!({"email": "a@x.com"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let claims = state.tokens.verify(body["token"].as_str().unwrap()).unwrap();
    assert_eq!(claims.name, "Ana");

    let response = app
        .oneshot(json_request("POST", "/clients/login", json!({"email": "nobody@x.com"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn crear_creates_without_issuing_a_credential() {
    let (_dir, _state, app) = test_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/clients/crear",
            json!({"name": "Bea", "email": "b@x.com"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    // The body is the bare record: no token alongside it, unlike /registro.
    let body = body_json(response).await;
    let id = body["id"].as_str().unwrap().to_string();
    assert!(!id.is_empty());
    assert_eq!(body["name"], "Bea");
    assert_eq!(body["email"], "b@x.com");
    assert!(body["token"].is_null());

    let response = app.oneshot(get_request(&format!("/clients/{id}"))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["name"], "Bea");
}

#[tokio::test]
async fn client_crud_lifecycle() {
    let (_dir, _state, app) = test_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/clients",
            json!({"name": "Ana", "email": "a@x.com"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let id = created["id"].as_str().unwrap().to_string();

    // Partial update keeps the untouched email field.
    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/clients/{id}"),
            json!({"name": "Ana Maria"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["name"], "Ana Maria");
    assert_eq!(updated["email"], "a@x.com");

    let response = app.clone().oneshot(get_request("/clients")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let listed = body_json(response).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);

    // Delete twice: both succeed.
    for _ in 0..2 {
        let request = Request::builder()
            .method("DELETE")
            .uri(format!("/clients/{id}"))
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app.oneshot(get_request(&format!("/clients/{id}"))).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn protected_collections_reject_bad_credentials() {
    let (_dir, state, app) = test_app().await;

    // No header at all.
    let response = app.clone().oneshot(get_request("/providers")).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Wrong scheme.
    let request = Request::builder()
        .method("GET")
        .uri("/offers")
        .header(header::AUTHORIZATION, "Token abc")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Well-formed header, garbage token.
    let request = Request::builder()
        .method("GET")
        .uri("/providers")
        .header(header::AUTHORIZATION, "Bearer not.a.token")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Correctly signed but already expired.
    let expired = state
        .tokens
        .issue_expiring_at("subject-1", "Ana", Utc::now() - Duration::seconds(120))
        .unwrap();
    let request = Request::builder()
        .method("GET")
        .uri("/providers")
        .header(header::AUTHORIZATION, format!("Bearer {expired}"))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn protected_collections_accept_a_valid_credential() {
    let (_dir, state, app) = test_app().await;
    let token = state.tokens.issue("subject-1", "Ana").unwrap();
    let bearer = format!("Bearer {token}");

    let request = Request::builder()
        .method("GET")
        .uri("/providers")
        .header(header::AUTHORIZATION, &bearer)
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));

    let mut request = json_request("POST", "/offers", json!({"title": "Night shift"}));
    request
        .headers_mut()
        .insert(header::AUTHORIZATION, bearer.parse().unwrap());
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let offer = body_json(response).await;
    assert_eq!(offer["title"], "Night shift");

    // Updating an absent offer is still a 404, not an auth failure.
    let mut request = json_request("PUT", "/offers/no-such-id", json!({"title": "x"}));
    request
        .headers_mut()
        .insert(header::AUTHORIZATION, bearer.parse().unwrap());
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
