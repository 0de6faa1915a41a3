//! Blocking confirmation prompt for destructive actions.
//!
//! Browser-only: the native build always declines so nothing destructive
//! can run without a user.

#[cfg(test)]
#[path = "confirm_test.rs"]
mod confirm_test;

/// Ask the user to confirm `prompt`. Returns `false` when declined or unavailable.
pub fn confirm(prompt: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(prompt).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = prompt;
        false
    }
}
