//! Bearer-token authorization middleware

use axum::Json;
use axum::extract::{Request, State};
use axum::http::{StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::warn;

use crate::api::error::ErrorResponse;
use crate::api::server::AppState;

/// Rejects any request whose `Authorization` header is not exactly
/// `Bearer <token>` with the configured token. Runs before body handling,
/// so an unauthenticated caller learns nothing about the endpoint.
pub async fn require_bearer(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let authorized = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .is_some_and(|candidate| candidate == state.config.auth_token);

    if !authorized {
        warn!("rejecting request with missing or invalid bearer token");
        return (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse::new("Unauthorized")),
        )
            .into_response();
    }

    next.run(request).await
}
