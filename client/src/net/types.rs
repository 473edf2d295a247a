//! Shared wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! The server embeds this crate with the `ssr` feature and serializes these
//! same types, so the `/api/auth/me` payload cannot drift between the two.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Two-valued account classification that selects the navigation set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Entrepreneur,
    Investor,
}

impl Role {
    /// Parse the lowercase wire form, ignoring surrounding whitespace and case.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "entrepreneur" => Some(Self::Entrepreneur),
            "investor" => Some(Self::Investor),
            _ => None,
        }
    }

    /// Lowercase wire form, also used in profile routes.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Entrepreneur => "entrepreneur",
            Self::Investor => "investor",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Entrepreneur => "Entrepreneur",
            Self::Investor => "Investor",
        }
    }
}

/// Authenticated user as returned by `/api/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Stable user identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact email address.
    pub email: String,
    /// Account role.
    pub role: Role,
    /// Avatar image URL, if available.
    #[serde(default)]
    pub avatar_url: Option<String>,
}
