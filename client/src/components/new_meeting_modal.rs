//! "Schedule New Meeting" dialog.
//!
//! The form is uncontrolled: inputs keep their own values and submitting
//! only closes the dialog. Nothing is validated or stored.

use leptos::prelude::*;

use crate::components::icon::Icon;
use crate::state::calendar::{CalendarState, MeetingType};
use crate::util::icon::IconName;
use crate::util::month::date_key;

#[component]
pub fn NewMeetingModal(on_close: Callback<()>) -> impl IntoView {
    let calendar = expect_context::<RwSignal<CalendarState>>();
    let default_date = calendar.with_untracked(|c| c.selected.map(date_key).unwrap_or_default());

    let on_backdrop = move |_| on_close.run(());
    let panel_ref = NodeRef::<leptos::html::Div>::new();
    // Focus the panel so Escape reaches its keydown handler.
    Effect::new(move || {
        if let Some(el) = panel_ref.get() {
            let _ = el.focus();
        }
    });
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    });
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_close.run(());
    };

    view! {
        <div class="dialog-backdrop" on:click=on_backdrop>
            <div
                node_ref=panel_ref
                class="dialog"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev| on_keydown.run(ev)
                tabindex="0"
            >
                <div class="dialog__header">
                    <h2>"Schedule New Meeting"</h2>
                    <button class="icon-btn" title="Close" on:click=move |_| on_close.run(())>
                        <Icon name=IconName::Close/>
                    </button>
                </div>

                <form class="dialog__form" on:submit=on_submit>
                    <label class="dialog__label">
                        "Title"
                        <input class="dialog__input" type="text" placeholder="Meeting title"/>
                    </label>

                    <div class="dialog__row">
                        <label class="dialog__label">
                            "Date"
                            <input class="dialog__input" type="date" value=default_date/>
                        </label>
                        <label class="dialog__label">
                            "Time"
                            <input class="dialog__input" type="time"/>
                        </label>
                    </div>

                    <label class="dialog__label">
                        "Meeting Type"
                        <select class="dialog__input">
                            {MeetingType::ALL
                                .into_iter()
                                .map(|kind| view! { <option value=kind.as_str()>{kind.label()}</option> })
                                .collect_view()}
                        </select>
                    </label>

                    <label class="dialog__label">
                        "Attendees"
                        <input class="dialog__input" type="text" placeholder="Enter email addresses"/>
                    </label>

                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="submit">
                            "Schedule"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
