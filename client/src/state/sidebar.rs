//! Sidebar navigation model and call-launcher state.
//!
//! DESIGN
//! ======
//! Navigation entries are plain data computed from the user's role so the
//! component only maps them to links. The video-call launcher keeps its own
//! open/selected state; no call transport is attached to it yet.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use crate::net::types::Role;
use crate::util::icon::IconName;

/// Support address shown in the sidebar footer.
pub const SUPPORT_EMAIL: &str = "support@businessnexus.com";

/// Maximum number of recent contacts listed.
pub const RECENT_CONTACT_LIMIT: usize = 4;

/// One navigation link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub to: String,
    pub icon: IconName,
    pub label: &'static str,
}

impl NavItem {
    fn new(to: impl Into<String>, icon: IconName, label: &'static str) -> Self {
        Self { to: to.into(), icon, label }
    }
}

/// Role-specific primary navigation, in display order.
pub fn primary_nav(role: Role, user_id: &str) -> Vec<NavItem> {
    match role {
        Role::Entrepreneur => vec![
            NavItem::new("/dashboard/entrepreneur", IconName::Home, "Dashboard"),
            NavItem::new(format!("/profile/entrepreneur/{user_id}"), IconName::Building, "My Startup"),
            NavItem::new("/calendar", IconName::Calendar, "Calendar"),
            NavItem::new("/investors", IconName::Dollar, "Find Investors"),
            NavItem::new("/messages", IconName::Message, "Messages"),
            NavItem::new("/notifications", IconName::Bell, "Notifications"),
            NavItem::new("/documents", IconName::File, "Documents"),
        ],
        Role::Investor => vec![
            NavItem::new("/dashboard/investor", IconName::Home, "Dashboard"),
            NavItem::new(format!("/profile/investor/{user_id}"), IconName::Dollar, "My Portfolio"),
            NavItem::new("/calendar", IconName::Calendar, "Calendar"),
            NavItem::new("/entrepreneurs", IconName::Users, "Find Startups"),
            NavItem::new("/messages", IconName::Message, "Messages"),
            NavItem::new("/notifications", IconName::Bell, "Notifications"),
            NavItem::new("/deals", IconName::File, "Deals"),
        ],
    }
}

/// Entries of the shared "Settings" section.
pub fn settings_nav() -> Vec<NavItem> {
    vec![
        NavItem::new("/settings", IconName::Settings, "Settings"),
        NavItem::new("/help", IconName::Help, "Help & Support"),
    ]
}

/// Presence status of a contact.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Presence {
    Online,
    Away,
    Offline,
}

impl Presence {
    /// Modifier for the presence dot class.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Away => "away",
            Self::Offline => "offline",
        }
    }
}

/// A recently called contact.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub role: Role,
    pub presence: Presence,
    pub last_call: Option<String>,
}

impl Contact {
    /// First character of every whitespace-separated name part.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }
}

/// Video-call launcher state local to the sidebar.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SidebarState {
    pub video_call_open: bool,
    pub selected_contact: Option<Contact>,
}

impl SidebarState {
    /// Open the launcher, optionally targeting a contact.
    pub fn open_call(&mut self, contact: Option<Contact>) {
        self.video_call_open = true;
        if contact.is_some() {
            self.selected_contact = contact;
        }
    }

    pub fn close_call(&mut self) {
        self.video_call_open = false;
        self.selected_contact = None;
    }

    /// Name shown as the call recipient.
    pub fn recipient_name(&self) -> &str {
        self.selected_contact
            .as_ref()
            .map_or("Select Contact", |c| c.name.as_str())
    }
}
