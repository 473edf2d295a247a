//! Month grid with prev/next navigation and per-day summaries.
//!
//! ARCHITECTURE
//! ============
//! The grid is recomputed from `CalendarState` on every change; each day
//! cell receives a precomputed `DaySummary` and only writes back the
//! selected date.

use chrono::Datelike;
use leptos::prelude::*;

use crate::components::icon::Icon;
use crate::state::calendar::{CalendarState, CellHighlight, DaySummary};
use crate::util::icon::IconName;
use crate::util::month::DAY_NAMES;

/// Calendar card: month header, weekday row, and day cells.
#[component]
pub fn CalendarGrid() -> impl IntoView {
    let calendar = expect_context::<RwSignal<CalendarState>>();

    let title = move || calendar.with(|c| c.month.title());
    let cells = move || {
        calendar.with(|c| {
            c.month
                .grid()
                .into_iter()
                .map(|cell| cell.map(|date| c.day_summary(date)))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="card calendar-card">
            <div class="calendar-card__header">
                <button
                    class="icon-btn"
                    title="Previous month"
                    on:click=move |_| calendar.update(CalendarState::prev_month)
                >
                    <Icon name=IconName::ChevronLeft/>
                </button>
                <h2 class="calendar-card__title">{title}</h2>
                <button
                    class="icon-btn"
                    title="Next month"
                    on:click=move |_| calendar.update(CalendarState::next_month)
                >
                    <Icon name=IconName::ChevronRight/>
                </button>
            </div>

            <div class="calendar-grid">
                <div class="calendar-grid__row">
                    {DAY_NAMES
                        .iter()
                        .map(|day| view! { <div class="calendar-grid__weekday">{*day}</div> })
                        .collect_view()}
                </div>
                <div class="calendar-grid__row">
                    {move || {
                        cells()
                            .into_iter()
                            .map(|cell| match cell {
                                Some(summary) => view! { <DayCell summary=summary/> }.into_any(),
                                None => view! { <div class="calendar-day calendar-day--blank"></div> }.into_any(),
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </div>
    }
}

#[component]
fn DayCell(summary: DaySummary) -> impl IntoView {
    let calendar = expect_context::<RwSignal<CalendarState>>();
    let highlight = summary.highlight();
    let DaySummary { date, meetings, overflow, available_slots, .. } = summary;

    view! {
        <div
            class="calendar-day"
            class:calendar-day--today=highlight == CellHighlight::Today
            class:calendar-day--selected=highlight == CellHighlight::Selected
            on:click=move |_| calendar.update(|c| c.select(date))
        >
            <div class="calendar-day__number">{date.day()}</div>
            <div class="calendar-day__meetings">
                {meetings
                    .into_iter()
                    .map(|m| {
                        let chip = format!("calendar-day__chip calendar-day__chip--{}", m.kind.as_str());
                        view! { <div class=chip>{m.title}</div> }
                    })
                    .collect_view()}
                {(overflow > 0).then(|| view! { <div class="calendar-day__more">{format!("+{overflow} more")}</div> })}
            </div>
            {(available_slots > 0)
                .then(|| {
                    view! {
                        <span class="calendar-day__dot" title=format!("{available_slots} available slots")></span>
                    }
                })}
        </div>
    }
}
