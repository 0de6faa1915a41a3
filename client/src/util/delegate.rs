//! Delegated click handling for unregister buttons.
//!
//! The list container owns the only click listener. Each unregister button
//! carries its target in `data-email` / `data-activity`, and the handler
//! walks up from the clicked node to the nearest button to read them. Rows
//! hold no closures, so a full re-render leaves nothing to tear down.

#[cfg(test)]
#[path = "delegate_test.rs"]
mod delegate_test;

use crate::util::board_view::unregister_prompt;

pub const UNREGISTER_BUTTON_CLASS: &str = "delete-btn";
pub const DATA_EMAIL: &str = "data-email";
pub const DATA_ACTIVITY: &str = "data-activity";

/// Participant to remove, as read from a row's data attributes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnregisterTarget {
    pub email: String,
    pub activity: String,
}

impl UnregisterTarget {
    /// Build a target from raw attribute values. Both must be present.
    pub fn from_attributes(email: Option<String>, activity: Option<String>) -> Option<Self> {
        Some(Self { email: email?, activity: activity? })
    }

    pub fn prompt(&self) -> String {
        unregister_prompt(&self.email, &self.activity)
    }
}

/// Resolve the unregister target of a click anywhere inside the list.
pub fn target_from_event(ev: &leptos::ev::MouseEvent) -> Option<UnregisterTarget> {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast as _;

        let origin = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
        let selector = format!("button.{UNREGISTER_BUTTON_CLASS}");
        let button = origin.closest(&selector).ok().flatten()?;
        UnregisterTarget::from_attributes(button.get_attribute(DATA_EMAIL), button.get_attribute(DATA_ACTIVITY))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = ev;
        None
    }
}
