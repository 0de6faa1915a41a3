//! Render target for the activity collection.
//!
//! DESIGN
//! ======
//! The container owns one click listener for every unregister button it
//! renders (see `util::delegate`). Cards are rebuilt wholesale whenever the
//! list state changes.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::activity_card::ActivityCard;
use crate::state::activities::{ActivitiesState, LOAD_FAILED_TEXT, LOADING_TEXT, ListDisplay};
use crate::util::board_view::build_cards;
use crate::util::delegate::{UnregisterTarget, target_from_event};

#[component]
pub fn ActivityList(on_unregister: Callback<UnregisterTarget>) -> impl IntoView {
    let activities = expect_context::<RwSignal<ActivitiesState>>();

    let on_click = move |ev: leptos::ev::MouseEvent| {
        if let Some(target) = target_from_event(&ev) {
            ev.stop_propagation();
            on_unregister.run(target);
        }
    };

    let content = move || {
        activities.with(|state| match state.display() {
            ListDisplay::Loading => view! { <p class="activities-list__status">{LOADING_TEXT}</p> }.into_any(),
            ListDisplay::Failed => view! { <p class="activities-list__status">{LOAD_FAILED_TEXT}</p> }.into_any(),
            ListDisplay::Activities(collection) => build_cards(collection)
                .into_iter()
                .map(|card| view! { <ActivityCard card=card /> })
                .collect::<Vec<_>>()
                .into_any(),
        })
    };

    view! {
        <div id="activities-list" on:click=on_click>
            {content}
        </div>
    }
}
