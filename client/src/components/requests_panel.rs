//! Slide-over panel listing pending meeting requests.
//!
//! SYSTEM CONTEXT
//! ==============
//! Accept/Decline call `CalendarState::respond_to_request`; resolved
//! requests drop out of the list because only pending ones are shown.

use leptos::prelude::*;

use crate::components::icon::Icon;
use crate::state::calendar::{CalendarState, MeetingRequest, RequestAction};
use crate::util::icon::IconName;
use crate::util::month::{date_key, time_label};

#[component]
pub fn RequestsPanel(on_close: Callback<()>) -> impl IntoView {
    let calendar = expect_context::<RwSignal<CalendarState>>();
    let pending = move || calendar.with(CalendarState::pending_requests);

    let panel_ref = NodeRef::<leptos::html::Aside>::new();
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
        <div class="requests-panel__backdrop" on:click=move |_| on_close.run(())>
            <aside
                node_ref=panel_ref
                class="requests-panel"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev| on_keydown.run(ev)
                tabindex="0"
            >
                <div class="requests-panel__header">
                    <h3>"Meeting Requests"</h3>
                    <button class="icon-btn" title="Close" on:click=move |_| on_close.run(())>
                        <Icon name=IconName::Close/>
                    </button>
                </div>

                <div class="requests-panel__body">
                    <Show
                        when=move || !pending().is_empty()
                        fallback=|| {
                            view! {
                                <div class="requests-panel__empty">
                                    <Icon name=IconName::Users/>
                                    <p>"No pending requests"</p>
                                </div>
                            }
                        }
                    >
                        {move || {
                            pending()
                                .into_iter()
                                .map(|request| view! { <RequestCard request=request/> })
                                .collect_view()
                        }}
                    </Show>
                </div>
            </aside>
        </div>
    }
}

#[component]
fn RequestCard(request: MeetingRequest) -> impl IntoView {
    let calendar = expect_context::<RwSignal<CalendarState>>();
    let id = request.id.clone();
    let respond = move |action: RequestAction| {
        let outcome = calendar.try_update(|c| c.respond_to_request(&id, action)).flatten();
        #[cfg(feature = "hydrate")]
        log::info!("meeting request {id} {action:?} -> {outcome:?}");
        #[cfg(not(feature = "hydrate"))]
        let _ = outcome;
    };
    let respond_decline = respond.clone();

    let when = format!(
        "{} at {} - {}",
        date_key(request.date),
        time_label(request.start_time),
        time_label(request.end_time)
    );
    let kind_class = format!("request-card__type request-card__type--{}", request.kind.as_str());

    view! {
        <div class="request-card">
            <div class="request-card__header">
                <div>
                    <h4 class="request-card__title">{request.title}</h4>
                    <p class="request-card__from">{format!("From: {}", request.from_name)}</p>
                </div>
                <span class=kind_class title=request.kind.label()>
                    <Icon name=request.kind.icon()/>
                </span>
            </div>

            <div class="request-card__details">
                <p>{when}</p>
                {request.message.map(|m| view! { <p class="request-card__message">{format!("\"{m}\"")}</p> })}
            </div>

            <div class="request-card__actions">
                <button class="btn btn--success" on:click=move |_| respond(RequestAction::Accept)>
                    <Icon name=IconName::Check/>
                    "Accept"
                </button>
                <button class="btn" on:click=move |_| respond_decline(RequestAction::Decline)>
                    <Icon name=IconName::Close/>
                    "Decline"
                </button>
            </div>
        </div>
    }
}
