//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (navigation, cards, dialogs) and receive
//! everything they act on through props and callbacks.

pub mod confirm_dialog;
pub mod navbar;
pub mod post_card;
pub mod post_meta;
