//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the signed-in chrome and shared widgets while reading
//! shared state from Leptos context providers.

pub mod layout;
pub mod loading_screen;
pub mod stat_card;
