//! Board controller: the only writer of list, banner and form state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the three state signals through context and call back
//! into the controller for every action. The controller runs network calls
//! on the browser task queue and feeds their results through
//! [`BoardController::render`] and [`BoardController::show_message`].
//!
//! CONCURRENCY
//! ===========
//! Actions are not mutually excluded. Overlapping refreshes are ordered by
//! sequence number inside `ActivitiesState`; overlapping banner writes are
//! last-writer-wins with a sequence-guarded hide timer.

#![cfg_attr(not(feature = "csr"), allow(unused_variables, unused_assignments))]

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::time::Duration;

use leptos::prelude::*;
use roster::ActivityCollection;

use crate::config::BoardConfig;
use crate::net::api::ApiError;
use crate::state::activities::ActivitiesState;
use crate::state::banner::{BannerKind, BannerState};
use crate::state::mutation::{MutationKind, Resolution};
use crate::state::signup_form::SignupFormState;
use crate::util::confirm::confirm;
use crate::util::delegate::UnregisterTarget;

#[derive(Clone, Copy)]
pub struct BoardController {
    activities: RwSignal<ActivitiesState>,
    banner: RwSignal<BannerState>,
    form: RwSignal<SignupFormState>,
    config: StoredValue<BoardConfig>,
}

impl BoardController {
    pub fn new(config: BoardConfig) -> Self {
        Self {
            activities: RwSignal::new(ActivitiesState::default()),
            banner: RwSignal::new(BannerState::default()),
            form: RwSignal::new(SignupFormState::default()),
            config: StoredValue::new(config),
        }
    }

    /// Expose the controller and its state signals to child components.
    pub fn provide(self) {
        provide_context(self);
        provide_context(self.activities);
        provide_context(self.banner);
        provide_context(self.form);
    }

    pub fn activities(self) -> RwSignal<ActivitiesState> {
        self.activities
    }

    pub fn banner(self) -> RwSignal<BannerState> {
        self.banner
    }

    pub fn form(self) -> RwSignal<SignupFormState> {
        self.form
    }

    /// Re-fetch the collection and rebuild the list and selection control.
    pub fn refresh(self) {
        let mut seq = 0;
        self.activities.update(|s| seq = s.begin_refresh());

        #[cfg(feature = "csr")]
        {
            let config = self.config.get_value();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_activities(&config).await;
                self.render(seq, result);
            });
        }
    }

    /// Apply the outcome of refresh `seq` to the render target.
    pub fn render(self, seq: u64, result: Result<ActivityCollection, ApiError>) {
        if let Err(err) = &result {
            log::error!("Error fetching activities: {err}");
        }
        let mut applied = false;
        self.activities.update(|s| applied = s.apply_refresh(seq, result));
        if !applied {
            log::debug!("dropped stale activities response seq={seq}");
            return;
        }
        self.activities.with_untracked(|s| {
            self.form.maybe_update(|f| f.drop_unoffered(s.options()));
        });
    }

    /// Show a banner message and hide it after `duration` unless replaced.
    pub fn show_message(self, text: String, kind: BannerKind, duration: Duration) {
        let mut seq = 0;
        self.banner.update(|b| seq = b.show(text, kind));

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(duration).await;
            self.banner.update(|b| {
                b.hide(seq);
            });
        });
    }

    /// Submit the current form values to the signup endpoint.
    pub fn signup(self) {
        let SignupFormState { email, activity } = self.form.get_untracked();
        log::debug!("signup requested activity={activity:?}");

        #[cfg(feature = "csr")]
        {
            let config = self.config.get_value();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::signup(&config, &activity, &email).await;
                if let Err(err) = &result {
                    log::error!("Error signing up: {err}");
                }
                self.settle(MutationKind::Signup, MutationKind::Signup.resolve(result));
            });
        }
    }

    /// Confirm with the user, then remove `target` from its activity.
    ///
    /// Declining the prompt ends the operation with no request and no banner.
    pub fn unregister(self, target: UnregisterTarget) {
        if !confirm(&target.prompt()) {
            log::debug!("unregister cancelled activity={:?}", target.activity);
            return;
        }

        #[cfg(feature = "csr")]
        {
            let config = self.config.get_value();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::unregister(&config, &target.activity, &target.email).await;
                if let Err(err) = &result {
                    log::error!("Error unregistering: {err}");
                }
                self.settle(MutationKind::Unregister, MutationKind::Unregister.resolve(result));
            });
        }
    }

    /// Carry out the follow-ups of a settled signup/unregister request.
    pub fn settle(self, kind: MutationKind, resolution: Resolution) {
        let Resolution { text, kind: banner_kind, refresh, reset_form } = resolution;
        if reset_form {
            self.form.update(SignupFormState::reset);
        }
        let duration = self.config.with_value(|c| c.banner_duration(kind));
        self.show_message(text, banner_kind, duration);
        if refresh {
            self.refresh();
        }
    }
}
