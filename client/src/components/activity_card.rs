//! Card for one activity with its participant roster.

#[cfg(test)]
#[path = "activity_card_test.rs"]
mod activity_card_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::util::board_view::{
    ActivityCard as CardModel, NO_PARTICIPANTS_TEXT, ParticipantRow, availability_text, unregister_label,
};
use crate::util::delegate::UNREGISTER_BUTTON_CLASS;

/// Static render of a card. Unregister clicks are handled by the list container.
#[component]
pub fn ActivityCard(card: CardModel) -> impl IntoView {
    let CardModel { name, description, schedule, spots_left, rows } = card;

    let rows = rows
        .into_iter()
        .map(|row| match row {
            ParticipantRow::Participant { email, activity } => {
                let label = unregister_label(&email, &activity);
                view! {
                    <li class="participant-item">
                        <span class="participant-email">{email.clone()}</span>
                        <button
                            type="button"
                            class=UNREGISTER_BUTTON_CLASS
                            title="Unregister"
                            aria-label=label
                            data-email=email
                            data-activity=activity
                        >
                            "✖"
                        </button>
                    </li>
                }
                .into_any()
            }
            ParticipantRow::Empty => view! { <li class="no-participants">{NO_PARTICIPANTS_TEXT}</li> }.into_any(),
        })
        .collect::<Vec<_>>();

    view! {
        <div class="activity-card">
            <h4>{name}</h4>
            <p>{description}</p>
            <p>
                <strong>"Schedule:"</strong>
                " "
                {schedule}
            </p>
            <p>
                <strong>"Availability:"</strong>
                " "
                {availability_text(spots_left)}
            </p>
            <div class="participants">
                <p>
                    <strong>"Participants:"</strong>
                </p>
                <ul class="participants-list">{rows}</ul>
            </div>
        </div>
    }
}
