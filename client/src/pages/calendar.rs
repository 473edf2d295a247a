//! Calendar page: month grid, side column, and the three overlays.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the route-scoped `RwSignal<CalendarState>` and provides it to its
//! components. Demo data is re-seeded whenever the session user changes so
//! seeded meetings carry the current organizer id.
//!
//! The state is built without reading a clock, so the server render and the
//! hydrating browser produce the same markup. The grid and the upcoming list
//! mount only after a browser-side effect has synced the viewer's date.

use leptos::prelude::*;

use crate::components::availability_modal::AvailabilityModal;
use crate::components::calendar_grid::CalendarGrid;
use crate::components::day_details::DayDetails;
use crate::components::icon::Icon;
use crate::components::new_meeting_modal::NewMeetingModal;
use crate::components::quick_actions::{MeetingTypeLegend, QuickActions};
use crate::components::requests_panel::RequestsPanel;
use crate::components::upcoming_meetings::UpcomingMeetings;
use crate::state::auth::AuthState;
use crate::state::calendar::{CalendarState, Overlay};
use crate::util::icon::IconName;
use crate::util::month;

#[component]
pub fn CalendarPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let organizer = auth.with_untracked(AuthState::organizer_id);
    let calendar = RwSignal::new(CalendarState::awaiting_clock(&organizer));
    provide_context(calendar);

    // Effects never run during SSR.
    Effect::new(move || calendar.update(|c| c.sync_clock(month::today())));

    Effect::new(move |previous: Option<String>| {
        let organizer = auth.with(AuthState::organizer_id);
        calendar.maybe_update(|c| c.reseed_if_user_changed(previous.as_deref(), &organizer));
        organizer
    });

    let open = move |overlay: Overlay| calendar.update(|c| c.open(overlay));
    let close = move |overlay: Overlay| Callback::new(move |()| calendar.update(|c| c.close(overlay)));
    let is_open = move |overlay: Overlay| calendar.with(|c| c.is_open(overlay));
    let pending_count = move || calendar.with(CalendarState::pending_count);
    let clock_synced = move || calendar.with(|c| c.clock_synced);

    view! {
        <div class="calendar-page">
            <header class="calendar-page__header">
                <div>
                    <h1 class="calendar-page__title">
                        <Icon name=IconName::Calendar/>
                        "Calendar"
                    </h1>
                    <p class="calendar-page__subtitle">"Manage your meetings and availability"</p>
                </div>

                <div class="calendar-page__actions">
                    <button class="btn btn--primary btn--badged" on:click=move |_| open(Overlay::Requests)>
                        <Icon name=IconName::Users/>
                        "Requests"
                        <Show when=move || { pending_count() > 0 }>
                            <span class="btn__badge">{pending_count}</span>
                        </Show>
                    </button>
                    <button class="btn" on:click=move |_| open(Overlay::Availability)>
                        <Icon name=IconName::Clock/>
                        "Set Availability"
                    </button>
                    <button class="btn btn--success" on:click=move |_| open(Overlay::NewMeeting)>
                        <Icon name=IconName::Plus/>
                        "New Meeting"
                    </button>
                </div>
            </header>

            <div class="calendar-page__layout">
                <section class="calendar-page__main">
                    <Show
                        when=clock_synced
                        fallback=|| view! { <div class="card calendar-card calendar-card--loading">"Loading calendar..."</div> }
                    >
                        <CalendarGrid/>
                    </Show>
                </section>
                <aside class="calendar-page__side">
                    <DayDetails/>
                    <Show when=clock_synced>
                        <UpcomingMeetings/>
                    </Show>
                    <QuickActions/>
                    <MeetingTypeLegend/>
                </aside>
            </div>

            <Show when=move || is_open(Overlay::NewMeeting)>
                <NewMeetingModal on_close=close(Overlay::NewMeeting)/>
            </Show>
            <Show when=move || is_open(Overlay::Availability)>
                <AvailabilityModal on_close=close(Overlay::Availability)/>
            </Show>
            <Show when=move || is_open(Overlay::Requests)>
                <RequestsPanel on_close=close(Overlay::Requests)/>
            </Show>
        </div>
    }
}
