//! Application sidebar: role navigation, recent contacts, and support footer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads `AuthState` from context and renders nothing until a user is
//! present. The call buttons only drive the local `SidebarState`; no call
//! transport is wired behind them.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::icon::Icon;
use crate::state::auth::AuthState;
use crate::state::seed;
use crate::state::sidebar::{
    Contact, NavItem, RECENT_CONTACT_LIMIT, SUPPORT_EMAIL, SidebarState, primary_nav, settings_nav,
};
use crate::util::icon::IconName;

/// Link lists and contacts drawn for a signed-in user.
#[derive(Clone, Debug, PartialEq, Eq)]
struct SidebarModel {
    primary: Vec<NavItem>,
    settings: Vec<NavItem>,
    contacts: Vec<Contact>,
}

/// `None` while nobody is signed in, including while the session loads.
fn sidebar_model(auth: &AuthState) -> Option<SidebarModel> {
    let user = auth.user.as_ref()?;
    Some(SidebarModel {
        primary: primary_nav(user.role, &user.id),
        settings: settings_nav(),
        contacts: seed::recent_contacts().into_iter().take(RECENT_CONTACT_LIMIT).collect(),
    })
}

/// Left navigation column. Renders nothing without a signed-in user.
#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let calls = RwSignal::new(SidebarState::default());

    let open_call = Callback::new(move |contact: Option<Contact>| {
        calls.update(|s| s.open_call(contact));
        #[cfg(feature = "hydrate")]
        log::debug!("video call launcher opened for {}", calls.with_untracked(|s| s.recipient_name().to_owned()));
    });

    move || {
        auth.with(sidebar_model).map(|SidebarModel { primary, settings, contacts }| {
            view! {
                <aside class="sidebar" data-call-open=move || calls.with(|s| s.video_call_open.to_string())>
                    <div class="sidebar__scroll">
                        <nav class="sidebar__nav">
                            {primary.into_iter().map(|item| view! { <SidebarLink item=item/> }).collect_view()}
                        </nav>

                        <section class="sidebar__section">
                            <div class="sidebar__section-header">
                                <h3 class="sidebar__heading">"Video Calls"</h3>
                                <button
                                    class="icon-btn"
                                    title="Start New Call"
                                    on:click=move |_| open_call.run(None)
                                >
                                    <Icon name=IconName::Video/>
                                </button>
                            </div>
                            <button class="sidebar__call-btn" on:click=move |_| open_call.run(None)>
                                <Icon name=IconName::Video/>
                                "Start Video Call"
                            </button>

                            <p class="sidebar__subheading">"Recent Contacts"</p>
                            <ul class="sidebar__contacts">
                                {contacts
                                    .into_iter()
                                    .map(|contact| view! { <ContactRow contact=contact on_call=open_call/> })
                                    .collect_view()}
                            </ul>
                        </section>

                        <section class="sidebar__section">
                            <h3 class="sidebar__heading">"Settings"</h3>
                            <nav class="sidebar__nav">
                                {settings.into_iter().map(|item| view! { <SidebarLink item=item/> }).collect_view()}
                            </nav>
                        </section>
                    </div>

                    <footer class="sidebar__support">
                        <p class="sidebar__support-note">"Need assistance?"</p>
                        <h4 class="sidebar__support-title">"Contact Support"</h4>
                        <a class="sidebar__support-link" href=format!("mailto:{SUPPORT_EMAIL}")>
                            {SUPPORT_EMAIL}
                        </a>
                    </footer>
                </aside>
            }
        })
    }
}

/// Navigation link; the router marks the active one with `aria-current`.
#[component]
fn SidebarLink(item: NavItem) -> impl IntoView {
    view! {
        <A href=item.to attr:class="sidebar__link">
            <Icon name=item.icon/>
            <span class="sidebar__link-text">{item.label}</span>
        </A>
    }
}

#[component]
fn ContactRow(contact: Contact, on_call: Callback<Option<Contact>>) -> impl IntoView {
    let presence_class = format!("sidebar__presence sidebar__presence--{}", contact.presence.slug());
    let call_title = format!("Call {}", contact.name);
    let initials = contact.initials();
    let name = contact.name.clone();
    let role = contact.role.label();
    let last_call = contact.last_call.clone().unwrap_or_default();

    view! {
        <li class="sidebar__contact" title=last_call>
            <div class="sidebar__avatar">
                <span class="sidebar__initials">{initials}</span>
                <span class=presence_class></span>
            </div>
            <div class="sidebar__contact-text">
                <p class="sidebar__contact-name">{name}</p>
                <p class="sidebar__contact-role">{role}</p>
            </div>
            <button
                class="sidebar__contact-call"
                title=call_title
                on:click=move |_| on_call.run(Some(contact.clone()))
            >
                <Icon name=IconName::Phone/>
            </button>
        </li>
    }
}
