use axum::{
    extract::{Request, State},
    http::{HeaderMap, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::database::DbPool;

pub mod squads;

pub struct AppState {
    pub pool: DbPool,
    /// Bearer token every request must carry
    pub token: String,
}

impl AppState {
    pub fn new(pool: DbPool, token: impl Into<String>) -> Self {
        Self {
            pool,
            token: token.into(),
        }
    }

    pub fn is_authorized(&self, headers: &HeaderMap) -> bool {
        let auth_header = headers
            .get(header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok());
        match auth_header.and_then(|h| h.strip_prefix("Bearer ")) {
            Some(token) => !self.token.is_empty() && token.trim() == self.token,
            None => false,
        }
    }
}

/// Rejects requests without the service token before any handler runs.
pub async fn require_token(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    if !state.is_authorized(request.headers()) {
        log::warn!("Rejected {} {} without a valid token", request.method(), request.uri());
        return (StatusCode::UNAUTHORIZED, "Missing or invalid bearer token").into_response();
    }
    next.run(request).await
}
