//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates shared widgets to
//! `components`. Pages never check authentication; `app::Guarded` decides
//! whether they render at all.

pub mod catch_log;
pub mod dashboard;
pub mod forecast;
pub mod login;
pub mod profile;
pub mod signup;
pub mod spot_analyzer;
