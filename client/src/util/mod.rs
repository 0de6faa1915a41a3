//! Utility helpers shared across board modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `board_view` derives card view models from the wire collection; `confirm`
//! and `delegate` isolate the browser glue for the unregister flow.

pub mod board_view;
pub mod confirm;
pub mod delegate;
