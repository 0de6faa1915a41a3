//! Activity list state: the render target and the selection options.
//!
//! DESIGN
//! ======
//! Every refresh takes a sequence number. A response is applied only when it
//! is newer than the last one applied, so a slow stale fetch can never
//! overwrite a faster fresh one. The list display and the selection options
//! are rebuilt together on success; on failure only the list is replaced.

#[cfg(test)]
#[path = "activities_test.rs"]
mod activities_test;

use roster::ActivityCollection;

use crate::net::api::ApiError;

pub const LOADING_TEXT: &str = "Loading activities...";
pub const LOAD_FAILED_TEXT: &str = "Failed to load activities. Please try again later.";

/// List lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// What the list area shows right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListDisplay<'a> {
    Loading,
    Failed,
    Activities(&'a ActivityCollection),
}

#[derive(Clone, Debug, Default)]
pub struct ActivitiesState {
    phase: LoadPhase,
    /// Last successfully rendered collection. Cleared on fetch failure.
    rendered: Option<ActivityCollection>,
    /// Names offered by the selection control, in display order.
    options: Vec<String>,
    issued_seq: u64,
    applied_seq: u64,
}

impl ActivitiesState {
    /// Mark a refresh as in flight and return its sequence number.
    pub fn begin_refresh(&mut self) -> u64 {
        self.issued_seq += 1;
        self.phase = LoadPhase::Loading;
        self.issued_seq
    }

    /// Apply the outcome of refresh `seq`.
    ///
    /// Returns `false` and leaves state untouched when a newer response was
    /// already applied.
    pub fn apply_refresh(&mut self, seq: u64, result: Result<ActivityCollection, ApiError>) -> bool {
        if seq <= self.applied_seq {
            return false;
        }
        self.applied_seq = seq;
        match result {
            Ok(collection) => {
                self.options = collection.names().map(str::to_owned).collect();
                self.rendered = Some(collection);
                self.phase = LoadPhase::Loaded;
            }
            Err(_) => {
                // Selection options keep their previous values.
                self.rendered = None;
                self.phase = LoadPhase::Failed;
            }
        }
        if seq < self.issued_seq {
            self.phase = LoadPhase::Loading;
        }
        true
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    /// Failure text wins; the previous render stays up while a refresh is in flight.
    pub fn display(&self) -> ListDisplay<'_> {
        if self.phase == LoadPhase::Failed {
            return ListDisplay::Failed;
        }
        match &self.rendered {
            Some(collection) => ListDisplay::Activities(collection),
            None if self.applied_seq > 0 => ListDisplay::Failed,
            None => ListDisplay::Loading,
        }
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn issued_seq(&self) -> u64 {
        self.issued_seq
    }

    pub fn applied_seq(&self) -> u64 {
        self.applied_seq
    }
}
