//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `analyzer`, `catches`, etc.) so
//! individual pages can depend on small focused models. Only `session` and
//! `auth` carry authentication state; the rest is page-local.

pub mod analyzer;
pub mod auth;
pub mod catches;
pub mod forecast;
pub mod profile;
pub mod session;
pub mod ui;
