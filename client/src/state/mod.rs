//! Reactive state models for the sign-up board.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each model is a plain struct held in an `RwSignal` by the board
//! controller. The transitions live here as ordinary methods so they can be
//! tested without a browser or a reactive runtime.

pub mod activities;
pub mod banner;
pub mod mutation;
pub mod signup_form;
