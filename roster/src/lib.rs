//! Wire schema for the activity sign-up endpoints.
//!
//! This crate owns the JSON shapes exchanged with the sign-up server and the
//! request targets the client calls. It has no browser dependencies so the
//! codec can be exercised by plain native tests.
//!
//! ORDERING
//! ========
//! The server returns activities as a JSON object. Display order is the key
//! order of that document, so [`ActivityCollection`] decodes into an ordered
//! list instead of a hash map.


use std::fmt;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Path of the list endpoint.
pub const ACTIVITIES_PATH: &str = "/activities";

/// Characters left unescaped by `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Error returned by the decode helpers.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    /// The body was not valid JSON for the expected shape.
    #[error("failed to decode {what}: {source}")]
    Decode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// One extracurricular offering as reported by the server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Free-form description shown on the card.
    pub description: String,
    /// Human-readable schedule text.
    pub schedule: String,
    /// Capacity as configured on the server.
    pub max_participants: i64,
    /// Registered emails in registration order.
    pub participants: Vec<String>,
}

impl Activity {
    /// Seats left: `max_participants - participants.len()`.
    ///
    /// Not clamped. A roster the server let overflow shows a negative count.
    #[must_use]
    pub fn remaining_capacity(&self) -> i64 {
        let taken = i64::try_from(self.participants.len()).unwrap_or(i64::MAX);
        self.max_participants.saturating_sub(taken)
    }
}

/// Activities keyed by name, in server document order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActivityCollection {
    entries: Vec<(String, Activity)>,
}

impl ActivityCollection {
    /// Insert an activity, replacing an existing entry with the same name in place.
    pub fn insert(&mut self, name: String, activity: Activity) {
        if let Some(slot) = self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            slot.1 = activity;
        } else {
            self.entries.push((name, activity));
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, activity)| activity)
    }

    #[must_use = "iterators are lazy"]
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.entries.iter().map(|(name, activity)| (name.as_str(), activity))
    }

    /// Activity names in display order.
    #[must_use = "iterators are lazy"]
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, Activity)> for ActivityCollection {
    fn from_iter<I: IntoIterator<Item = (String, Activity)>>(iter: I) -> Self {
        let mut collection = Self::default();
        for (name, activity) in iter {
            collection.insert(name, activity);
        }
        collection
    }
}

impl Serialize for ActivityCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, activity) in &self.entries {
            map.serialize_entry(name, activity)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ActivityCollection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CollectionVisitor;

        impl<'de> Visitor<'de> for CollectionVisitor {
            type Value = ActivityCollection;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of activity name to activity")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut collection = ActivityCollection::default();
                while let Some((name, activity)) = map.next_entry::<String, Activity>()? {
                    collection.insert(name, activity);
                }
                Ok(collection)
            }
        }

        deserializer.deserialize_map(CollectionVisitor)
    }
}

/// Body of a signup/unregister response.
///
/// Success responses carry `message`, failures carry `detail`. `detail` is
/// kept as raw JSON because validation errors can report a list instead of
/// a string.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MutationReply {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub detail: Option<Value>,
}

impl MutationReply {
    /// Non-empty `message`, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.is_empty())
    }

    /// Non-empty string `detail`, if any.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        self.detail
            .as_ref()
            .and_then(Value::as_str)
            .filter(|d| !d.is_empty())
    }
}

/// Percent-encode one path segment or query value the way `encodeURIComponent` does.
#[must_use]
pub fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, URI_COMPONENT).to_string()
}

/// Request target for `POST /activities/{name}/signup?email=...`.
#[must_use]
pub fn signup_target(activity: &str, email: &str) -> String {
    format!(
        "{ACTIVITIES_PATH}/{}/signup?email={}",
        encode_component(activity),
        encode_component(email)
    )
}

/// Request target for `DELETE /activities/{name}/unregister?email=...`.
#[must_use]
pub fn unregister_target(activity: &str, email: &str) -> String {
    format!(
        "{ACTIVITIES_PATH}/{}/unregister?email={}",
        encode_component(activity),
        encode_component(email)
    )
}

/// Decode the list endpoint body.
///
/// # Errors
///
/// Returns [`RosterError::Decode`] if the body is not a map of activities.
pub fn decode_collection(body: &str) -> Result<ActivityCollection, RosterError> {
    serde_json::from_str(body).map_err(|source| RosterError::Decode { what: "activity collection", source })
}

/// Decode a signup/unregister response body.
///
/// # Errors
///
/// Returns [`RosterError::Decode`] if the body is not a JSON object.
pub fn decode_reply(body: &str) -> Result<MutationReply, RosterError> {
    serde_json::from_str(body).map_err(|source| RosterError::Decode { what: "mutation reply", source })
}
