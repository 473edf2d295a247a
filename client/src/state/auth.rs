//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the sidebar (which renders nothing without a user) and by the
//! calendar page, which stamps the user's id on seeded meetings.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Organizer id used for seeded meetings when nobody is signed in.
pub const ANONYMOUS_ORGANIZER: &str = "current-user";

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// State before the session fetch has completed.
    pub fn pending() -> Self {
        Self { user: None, loading: true }
    }

    /// The current user's id, or [`ANONYMOUS_ORGANIZER`].
    pub fn organizer_id(&self) -> String {
        self.user
            .as_ref()
            .map_or_else(|| ANONYMOUS_ORGANIZER.to_owned(), |u| u.id.clone())
    }
}
