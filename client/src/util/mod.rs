//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, timers,
//! theme) and routing decisions from page and component logic to improve
//! reuse and testability.

pub mod bootstrap;
pub mod dark_mode;
pub mod route_guard;
pub mod storage;
