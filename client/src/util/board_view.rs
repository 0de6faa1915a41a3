//! Card view models derived from an activity collection.
//!
//! Rendering goes through these plain structs so the row/capacity rules can
//! be checked without a DOM. The list is rebuilt from scratch on every
//! refresh; nothing here is diffed or cached.

#[cfg(test)]
#[path = "board_view_test.rs"]
mod board_view_test;

use roster::ActivityCollection;

pub const NO_PARTICIPANTS_TEXT: &str = "No participants yet";
pub const SELECT_PLACEHOLDER_TEXT: &str = "-- Select an activity --";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub rows: Vec<ParticipantRow>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParticipantRow {
    Participant { email: String, activity: String },
    /// Single row shown when the roster is empty.
    Empty,
}

impl ParticipantRow {
    pub fn participant(email: &str, activity: &str) -> Self {
        Self::Participant { email: email.to_owned(), activity: activity.to_owned() }
    }
}

/// One card per activity, in collection order.
pub fn build_cards(collection: &ActivityCollection) -> Vec<ActivityCard> {
    collection
        .iter()
        .map(|(name, activity)| {
            let rows = if activity.participants.is_empty() {
                vec![ParticipantRow::Empty]
            } else {
                activity
                    .participants
                    .iter()
                    .map(|email| ParticipantRow::participant(email, name))
                    .collect()
            };
            ActivityCard {
                name: name.to_owned(),
                description: activity.description.clone(),
                schedule: activity.schedule.clone(),
                spots_left: activity.remaining_capacity(),
                rows,
            }
        })
        .collect()
}

pub fn availability_text(spots_left: i64) -> String {
    format!("{spots_left} spots left")
}

/// Accessible name of a participant's unregister button.
pub fn unregister_label(email: &str, activity: &str) -> String {
    format!("Unregister {email} from {activity}")
}

/// Confirmation prompt shown before unregistering.
pub fn unregister_prompt(email: &str, activity: &str) -> String {
    format!("Unregister {email} from {activity}?")
}
