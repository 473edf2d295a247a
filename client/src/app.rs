//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::sidebar::Sidebar;
use crate::pages::calendar::CalendarPage;
use crate::state::auth::AuthState;
use crate::util::auth::install_session_loader;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth context, lays the sidebar beside the routed main
/// area, and routes `/` and `/calendar` to the calendar page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::pending());
    provide_context(auth);
    install_session_loader(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/nexus.css"/>
        <Title text="Business Nexus"/>

        <Router>
            <div class="app-shell" aria-busy=move || auth.with(|a| a.loading).to_string()>
                <Sidebar/>
                <main class="app-shell__main">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=CalendarPage/>
                        <Route path=StaticSegment("calendar") view=CalendarPage/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
