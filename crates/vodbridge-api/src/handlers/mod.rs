//! HTTP request handlers.

pub mod browse;
pub mod health;
pub mod search;
pub mod session;
pub mod sso;
