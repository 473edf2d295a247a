//! Shared auth bootstrap helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session user is owned by the hosting server; the app only reads it
//! once at startup and publishes it through the `AuthState` context.

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Load the session user into `auth`.
///
/// In the browser this fetches `/api/auth/me` once; during SSR nothing is
/// fetched and the state simply stops loading with no user.
pub fn install_session_loader(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let user = crate::net::api::fetch_current_user().await;
            match &user {
                Some(u) => log::info!("session user loaded: id={} role={}", u.id, u.role.as_str()),
                None => log::info!("no session user"),
            }
            auth.set(AuthState { user, loading: false });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        auth.update_untracked(|a| a.loading = false);
    }
}
