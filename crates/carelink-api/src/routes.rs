//! API routes.

use axum::middleware;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use carelink_models::Collection;

use crate::auth::require_auth;
use crate::clients;
use crate::middleware::cors_layer;
use crate::resource;
use crate::state::AppState;

/// Create the API router.
///
/// The providers and offers collections sit behind the auth gate; the client
/// collection, including its credential-issuing flows, does not.
pub fn create_router(state: AppState) -> Router {
    let clients = clients::router(&state);

    let providers = resource::router(state.store(Collection::Providers).clone())
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    let offers = resource::router(state.store(Collection::Offers).clone())
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .nest("/clients", clients)
        .nest("/providers", providers)
        .nest("/offers", offers)
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&state.config.cors_origins))
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
