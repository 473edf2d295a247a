//! Networking modules for the HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the browser-side REST calls and `types` defines the shared
//! wire schema also serialized by the server.

pub mod api;
pub mod types;
