//! Client collection router: CRUD plus registration and login.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use carelink_auth::TokenService;
use carelink_models::{Collection, Record};
use carelink_store::JsonStore;

use crate::error::{ApiError, ApiResult};
use crate::resource;
use crate::state::AppState;

/// State for the credential-issuing flows.
#[derive(Clone)]
struct ClientsState {
    store: Arc<JsonStore>,
    tokens: Arc<TokenService>,
}

/// Build the clients router: the shared CRUD surface plus the registration,
/// login and plain-create flows. None of it sits behind the auth gate.
pub fn router(state: &AppState) -> Router<AppState> {
    let store = state.store(Collection::Clients);
    let flows = Router::new()
        .route("/registro", post(register))
        .route("/login", post(login))
        .route("/crear", post(create_plain))
        .with_state(ClientsState {
            store: store.clone(),
            tokens: state.tokens.clone(),
        });

    resource::router(store.clone()).merge(flows)
}

#[derive(Serialize)]
struct RegisterResponse {
    client: Record,
    token: String,
}

/// Create a client record and issue a credential for it.
async fn register(
    State(state): State<ClientsState>,
    Json(fields): Json<Map<String, Value>>,
) -> ApiResult<(StatusCode, Json<RegisterResponse>)> {
    let client = state.store.create(fields).await?;
    let name = client.field_str("name").unwrap_or_default().to_string();
    let token = state.tokens.issue(&client.id, &name)?;
    Ok((StatusCode::CREATED, Json(RegisterResponse { client, token })))
}

#[derive(Deserialize)]
struct LoginRequest {
    email: String,
}

#[derive(Serialize)]
struct LoginResponse {
    message: String,
    token: String,
}

/// Look a client up by email and issue a fresh credential.
///
/// Lookup is by the identifying field alone; no stored secret is checked
/// (see DESIGN.md).
async fn login(
    State(state): State<ClientsState>,
    Json(body): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let clients = state.store.list().await?;
    let client = clients
        .into_iter()
        .find(|c| c.field_str("email") == Some(body.email.as_str()))
        .ok_or_else(|| ApiError::not_found("client not found"))?;

    let name = client.field_str("name").unwrap_or_default().to_string();
    let token = state.tokens.issue(&client.id, &name)?;
    Ok(Json(LoginResponse {
        message: "login successful".to_string(),
        token,
    }))
}

/// Create a client record without issuing a credential.
async fn create_plain(
    State(state): State<ClientsState>,
    Json(fields): Json<Map<String, Value>>,
) -> ApiResult<(StatusCode, Json<Record>)> {
    let client = state.store.create(fields).await?;
    Ok((StatusCode::CREATED, Json(client)))
}
