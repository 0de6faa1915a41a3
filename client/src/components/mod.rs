//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the board from state signals provided by the
//! `BoardController` and report user actions back through callbacks.

pub mod activity_card;
pub mod activity_list;
pub mod message_banner;
pub mod signup_form;
