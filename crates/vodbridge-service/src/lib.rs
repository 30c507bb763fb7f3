//! # vodbridge-service
//!
//! The application core: building a navigable tree out of the platform's
//! flat folder/session listings, caching the root view, searching,
//! resolving a picked session for embedding, and completing the SSO
//! handshake.

pub mod context;
pub mod listing;
pub mod session;
pub mod sso;

pub use context::RequestContext;
