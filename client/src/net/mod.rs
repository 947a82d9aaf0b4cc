//! Networking and external-collaborator modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` uploads photos to the analysis service, `identity` is the
//! identity-provider seam, and `types` defines the shared data shapes.

pub mod api;
pub mod identity;
pub mod types;
