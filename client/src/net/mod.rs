//! Networking for the sign-up board.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the three HTTP calls the board needs and classifies every
//! response into a typed outcome. Wire shapes live in the `roster` crate.

pub mod api;
