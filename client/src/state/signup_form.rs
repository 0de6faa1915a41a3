//! Signup form field values.

#[cfg(test)]
#[path = "signup_form_test.rs"]
mod signup_form_test;

/// Email input and selected activity. An empty `activity` is the placeholder option.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupFormState {
    pub email: String,
    pub activity: String,
}

impl SignupFormState {
    /// Clear both fields, returning the select to its placeholder.
    pub fn reset(&mut self) {
        self.email.clear();
        self.activity.clear();
    }

    /// Return the select to its placeholder when the chosen activity is no
    /// longer offered. Returns `true` if the selection was cleared.
    pub fn drop_unoffered(&mut self, options: &[String]) -> bool {
        if self.activity.is_empty() || options.iter().any(|name| *name == self.activity) {
            return false;
        }
        self.activity.clear();
        true
    }
}
