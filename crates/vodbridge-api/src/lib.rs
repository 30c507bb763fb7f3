//! # vodbridge-api
//!
//! HTTP API layer for VodBridge built on Axum.
//!
//! Provides the browse/search/session endpoints the LMS widget calls, the
//! SSO callback the video platform redirects to, extractors, DTOs, and
//! error mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
