//! Auth routes: report the session user to the hydrated client.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use client::net::types::User;

use crate::state::AppState;

/// `GET /api/auth/me` — current user, or 401 when no session user is
/// configured.
pub async fn me(State(state): State<AppState>) -> Result<Json<User>, StatusCode> {
    let user = state.config.session_user.clone().ok_or_else(|| {
        tracing::debug!("auth/me requested with auth disabled");
        StatusCode::UNAUTHORIZED
    })?;
    tracing::debug!(user_id = %user.id, role = user.role.as_str(), "auth/me");
    Ok(Json(user))
}
