//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the sidebar and calendar surfaces while reading/writing
//! shared state from Leptos context providers.

pub mod availability_modal;
pub mod calendar_grid;
pub mod day_details;
pub mod icon;
pub mod new_meeting_modal;
pub mod quick_actions;
pub mod requests_panel;
pub mod sidebar;
pub mod upcoming_meetings;
