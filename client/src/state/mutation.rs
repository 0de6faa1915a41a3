//! Outcome handling shared by signup and unregister.
//!
//! Both actions follow the same rule: the HTTP status picks the branch, the
//! server's `message`/`detail` is shown verbatim when present, and transport
//! or decode failures fall back to a generic retry hint.

#[cfg(test)]
#[path = "mutation_test.rs"]
mod mutation_test;

use crate::net::api::{ApiError, Reply};
use crate::state::banner::BannerKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MutationKind {
    Signup,
    Unregister,
}

impl MutationKind {
    /// Shown on 2xx when the server sent no message.
    fn success_fallback(self) -> &'static str {
        match self {
            Self::Signup => "Signed up",
            Self::Unregister => "Unregistered",
        }
    }

    /// Shown on non-2xx when the server sent no detail.
    fn rejection_fallback(self) -> &'static str {
        match self {
            Self::Signup => "An error occurred",
            Self::Unregister => "Failed to unregister",
        }
    }

    /// Shown when no usable response arrived.
    pub fn failure_text(self) -> &'static str {
        match self {
            Self::Signup => "Failed to sign up. Please try again.",
            Self::Unregister => "Failed to unregister. Please try again.",
        }
    }

    /// Turn a request result into banner content and follow-up actions.
    pub fn resolve(self, result: Result<Reply, ApiError>) -> Resolution {
        match result {
            Ok(reply) if reply.ok => Resolution {
                text: reply.body.message().unwrap_or(self.success_fallback()).to_owned(),
                kind: BannerKind::Success,
                refresh: true,
                reset_form: self == Self::Signup,
            },
            Ok(reply) => Resolution {
                text: reply.body.detail().unwrap_or(self.rejection_fallback()).to_owned(),
                kind: BannerKind::Error,
                refresh: false,
                reset_form: false,
            },
            Err(_) => Resolution {
                text: self.failure_text().to_owned(),
                kind: BannerKind::Error,
                refresh: false,
                reset_form: false,
            },
        }
    }
}

/// What the controller does after a signup/unregister request settles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub text: String,
    pub kind: BannerKind,
    pub refresh: bool,
    pub reset_form: bool,
}
