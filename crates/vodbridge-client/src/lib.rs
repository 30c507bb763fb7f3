//! # vodbridge-client
//!
//! Typed client for the video platform's SOAP web service. The
//! [`VideoPlatform`] trait exposes the handful of operations the rest of
//! the application needs as plain data records; the SOAP envelope types
//! and transport never leak past this crate.

pub mod auth;
pub mod envelope;
pub mod parse;
pub mod platform;
pub mod soap;

pub use auth::PlatformAuth;
pub use platform::{ListFoldersRequest, ListSessionsRequest, SessionLookup, VideoPlatform};
pub use soap::SoapPlatformClient;
