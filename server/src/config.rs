//! Server configuration read from the process environment.
//!
//! DESIGN
//! ======
//! Parsing goes through [`ServerConfig::from_lookup`], which takes any
//! key-to-value function. `main` passes `std::env::var`; tests pass a map,
//! so they never touch process-global state.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use client::net::types::{Role, User};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_USER_ID: &str = "demo-user";
const DEFAULT_USER_NAME: &str = "Demo User";
const DEFAULT_USER_EMAIL: &str = "demo@businessnexus.com";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT value {0:?}")]
    InvalidPort(String),
    #[error("invalid NEXUS_USER_ROLE value {0:?} (expected entrepreneur or investor)")]
    InvalidRole(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// User reported by `/api/auth/me`; `None` when auth is switched off.
    pub session_user: Option<User>,
}

impl ServerConfig {
    /// # Errors
    ///
    /// Returns an error if `PORT` or `NEXUS_USER_ROLE` is set to a value that
    /// cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// # Errors
    ///
    /// Same as [`ServerConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let auth_enabled = parse_bool(lookup("NEXUS_AUTH_ENABLED").as_deref()).unwrap_or(true);
        let session_user = if auth_enabled { Some(session_user(&lookup)?) } else { None };

        Ok(Self { port, session_user })
    }
}

fn session_user<F>(lookup: &F) -> Result<User, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let role = match lookup("NEXUS_USER_ROLE") {
        Some(raw) => Role::parse(&raw).ok_or(ConfigError::InvalidRole(raw))?,
        None => Role::default(),
    };
    let text = |key: &str, default: &str| {
        lookup(key)
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| default.to_owned())
    };

    Ok(User {
        id: text("NEXUS_USER_ID", DEFAULT_USER_ID),
        name: text("NEXUS_USER_NAME", DEFAULT_USER_NAME),
        email: text("NEXUS_USER_EMAIL", DEFAULT_USER_EMAIL),
        role,
        avatar_url: lookup("NEXUS_USER_AVATAR_URL").filter(|v| !v.trim().is_empty()),
    })
}

/// Lenient boolean: `1/true/yes/on` and `0/false/no/off`, any case.
/// Anything else counts as unset.
pub(crate) fn parse_bool(raw: Option<&str>) -> Option<bool> {
    raw.and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    })
}
