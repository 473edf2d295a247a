//! Detail card for the selected date.

use leptos::prelude::*;

use crate::components::icon::Icon;
use crate::state::calendar::{CalendarState, Meeting, TimeSlot};
use crate::util::icon::IconName;
use crate::util::month::{long_date_label, time_range_label};

/// Meetings and open slots of the selected date; hidden until a date is picked.
#[component]
pub fn DayDetails() -> impl IntoView {
    let calendar = expect_context::<RwSignal<CalendarState>>();

    move || {
        let (date, meetings, slots) = calendar.with(|c| {
            let date = c.selected?;
            Some((date, c.meetings_on(date), c.available_slots_on(date)))
        })?;

        let meetings_view = if meetings.is_empty() {
            view! { <p class="card__empty">"No meetings scheduled"</p> }.into_any()
        } else {
            meetings
                .into_iter()
                .map(|meeting| view! { <MeetingEntry meeting=meeting/> })
                .collect_view()
                .into_any()
        };

        let slots_view = if slots.is_empty() {
            view! { <p class="card__empty">"No available slots"</p> }.into_any()
        } else {
            slots
                .into_iter()
                .map(|slot| view! { <OpenSlot entry=slot/> })
                .collect_view()
                .into_any()
        };

        Some(view! {
            <div class="card day-details">
                <h3 class="card__title">{long_date_label(date)}</h3>
                <div class="day-details__section">
                    <h4 class="day-details__heading">"Meetings"</h4>
                    {meetings_view}
                </div>
                <div class="day-details__section">
                    <h4 class="day-details__heading">"Available Slots"</h4>
                    {slots_view}
                </div>
            </div>
        })
    }
}

#[component]
fn MeetingEntry(meeting: Meeting) -> impl IntoView {
    let kind_class = format!("meeting-entry__type meeting-entry__type--{}", meeting.kind.as_str());
    view! {
        <div class="meeting-entry">
            <div class="meeting-entry__header">
                <h5 class="meeting-entry__title">{meeting.title}</h5>
                <span class=kind_class title=meeting.kind.label()>
                    <Icon name=meeting.kind.icon()/>
                </span>
            </div>
            <p class="meeting-entry__time">{time_range_label(meeting.start_time, meeting.end_time)}</p>
            {meeting.description.map(|d| view! { <p class="meeting-entry__description">{d}</p> })}
            <div class="meeting-entry__actions">
                <button class="chip-btn chip-btn--blue" type="button">
                    <Icon name=IconName::Edit/>
                    "Edit"
                </button>
                <button class="chip-btn chip-btn--red" type="button">
                    <Icon name=IconName::Trash/>
                    "Cancel"
                </button>
            </div>
        </div>
    }
}

#[component]
fn OpenSlot(entry: TimeSlot) -> impl IntoView {
    view! {
        <div class="open-slot">
            <span class="open-slot__time">{time_range_label(entry.start_time, entry.end_time)}</span>
            <button class="chip-btn chip-btn--green" type="button">"Book"</button>
        </div>
    }
}
