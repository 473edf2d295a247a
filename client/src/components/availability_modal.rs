//! "Set Availability" dialog.
//!
//! Only the slot toggles are wired: each flips one slot of the selected
//! date in place. The date and time inputs are uncontrolled and Save just
//! closes the dialog.

use leptos::prelude::*;

use crate::components::icon::Icon;
use crate::state::calendar::{CalendarState, TimeSlot};
use crate::util::icon::IconName;
use crate::util::month::{date_key, time_range_label};

const DEFAULT_START: &str = "09:00";
const DEFAULT_END: &str = "17:00";

#[component]
pub fn AvailabilityModal(on_close: Callback<()>) -> impl IntoView {
    let calendar = expect_context::<RwSignal<CalendarState>>();
    let default_date = calendar.with_untracked(|c| c.selected.map(date_key).unwrap_or_default());
    let slots = move || calendar.with(|c| c.selected.map(|d| c.slots_on(d).to_vec()).unwrap_or_default());

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
                    <h2>"Set Availability"</h2>
                    <button class="icon-btn" title="Close" on:click=move |_| on_close.run(())>
                        <Icon name=IconName::Close/>
                    </button>
                </div>

                <div class="dialog__form">
                    <label class="dialog__label">
                        "Date"
                        <input class="dialog__input" type="date" value=default_date/>
                    </label>

                    <div class="dialog__row">
                        <label class="dialog__label">
                            "Start Time"
                            <input class="dialog__input" type="time" value=DEFAULT_START/>
                        </label>
                        <label class="dialog__label">
                            "End Time"
                            <input class="dialog__input" type="time" value=DEFAULT_END/>
                        </label>
                    </div>

                    <div class="dialog__label">"Available Time Slots"</div>
                    <div class="slot-list">
                        {move || {
                            slots()
                                .into_iter()
                                .map(|slot| view! { <SlotToggle entry=slot/> })
                                .collect_view()
                        }}
                    </div>

                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="button" on:click=move |_| on_close.run(())>
                            "Save Availability"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn SlotToggle(entry: TimeSlot) -> impl IntoView {
    let calendar = expect_context::<RwSignal<CalendarState>>();
    let TimeSlot { id, start_time, end_time, is_available, .. } = entry;

    let on_toggle = move |_| {
        let flipped = calendar.try_update(|c| c.toggle_selected_slot(&id)).flatten();
        #[cfg(feature = "hydrate")]
        log::debug!("slot {id} availability -> {flipped:?}");
        #[cfg(not(feature = "hydrate"))]
        let _ = flipped;
    };

    view! {
        <div class="slot-list__item">
            <span class="slot-list__time">{time_range_label(start_time, end_time)}</span>
            <button
                class="slot-list__toggle"
                class:slot-list__toggle--available=is_available
                on:click=on_toggle
            >
                {if is_available { "Available" } else { "Unavailable" }}
            </button>
        </div>
    }
}
