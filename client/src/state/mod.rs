//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `calendar`, `sidebar`) so individual
//! components can depend on small focused models. `seed` holds the demo
//! records the calendar and sidebar start from.

pub mod auth;
pub mod calendar;
pub mod seed;
pub mod sidebar;
