//! Bearer credential gate for protected routes.

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;

use carelink_auth::Claims;

use crate::error::ApiError;
use crate::state::AppState;

/// Middleware enforcing a valid bearer credential.
///
/// A missing or malformed header short-circuits with 401 before anything
/// downstream runs. On success the verified claims are attached to the
/// request extensions and the request proceeds unchanged.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| ApiError::unauthorized("missing Authorization header"))?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or_else(|| ApiError::unauthorized("invalid Authorization header format"))?;

    let claims: Claims = state.tokens.verify(token)?;
    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}
