//! "Upcoming Meetings" card for the calendar side column.

use leptos::prelude::*;

use crate::components::icon::Icon;
use crate::state::calendar::CalendarState;
use crate::util::month::{short_date_label, time_label};

#[component]
pub fn UpcomingMeetings() -> impl IntoView {
    let calendar = expect_context::<RwSignal<CalendarState>>();
    let upcoming = move || calendar.with(CalendarState::upcoming_meetings);

    view! {
        <div class="card">
            <h3 class="card__title">"Upcoming Meetings"</h3>
            <Show
                when=move || !upcoming().is_empty()
                fallback=|| view! { <p class="card__empty">"No upcoming meetings"</p> }
            >
                <ul class="upcoming">
                    {move || {
                        upcoming()
                            .into_iter()
                            .map(|m| {
                                let when = format!("{} at {}", short_date_label(m.date), time_label(m.start_time));
                                view! {
                                    <li class="upcoming__item">
                                        <h4 class="upcoming__title">{m.title}</h4>
                                        <p class="upcoming__when">{when}</p>
                                        <div class="upcoming__type">
                                            <Icon name=m.kind.icon()/>
                                            <span class="upcoming__type-name">{m.kind.as_str()}</span>
                                        </div>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </Show>
        </div>
    }
}
