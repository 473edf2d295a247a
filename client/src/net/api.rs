//! REST helpers for talking to the hosting server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`, since the session user is only
//! fetched once the app is running in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport and decode failures collapse to `None`; the UI treats that the
//! same as "no user" and renders the signed-out state.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::User;

#[cfg(any(test, feature = "hydrate"))]
const CURRENT_USER_ENDPOINT: &str = "/api/auth/me";

#[cfg(any(test, feature = "hydrate"))]
fn current_user_failed_message(status: u16) -> String {
    format!("current user request failed: {status}")
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = match gloo_net::http::Request::get(CURRENT_USER_ENDPOINT).send().await {
            Ok(resp) => resp,
            Err(e) => {
                log::warn!("current user request error: {e}");
                return None;
            }
        };
        if !resp.ok() {
            log::debug!("{}", current_user_failed_message(resp.status()));
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
