//! Quick-action shortcuts and the meeting type legend.

use leptos::prelude::*;

use crate::components::icon::Icon;
use crate::state::calendar::{CalendarState, MeetingType, Overlay};
use crate::util::icon::IconName;

/// Shortcuts that open the page overlays.
#[component]
pub fn QuickActions() -> impl IntoView {
    let calendar = expect_context::<RwSignal<CalendarState>>();
    let open = move |overlay: Overlay| calendar.update(|c| c.open(overlay));
    let requests_label = move || format!("View Requests ({})", calendar.with(CalendarState::pending_count));

    view! {
        <div class="card">
            <h3 class="card__title">"Quick Actions"</h3>
            <div class="quick-actions">
                <button class="quick-actions__btn" on:click=move |_| open(Overlay::NewMeeting)>
                    <Icon name=IconName::Plus/>
                    "Schedule Meeting"
                </button>
                <button class="quick-actions__btn" on:click=move |_| open(Overlay::Availability)>
                    <Icon name=IconName::Clock/>
                    "Update Availability"
                </button>
                <button class="quick-actions__btn" on:click=move |_| open(Overlay::Requests)>
                    <Icon name=IconName::Bell/>
                    {requests_label}
                </button>
            </div>
        </div>
    }
}

#[component]
pub fn MeetingTypeLegend() -> impl IntoView {
    view! {
        <div class="card">
            <h3 class="card__title">"Meeting Types"</h3>
            <ul class="legend">
                {MeetingType::ALL
                    .into_iter()
                    .map(|kind| {
                        let class = format!("legend__item legend__item--{}", kind.as_str());
                        view! {
                            <li class=class>
                                <Icon name=kind.icon()/>
                                <span>{kind.label()}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
