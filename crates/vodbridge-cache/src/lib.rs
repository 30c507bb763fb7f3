//! # vodbridge-cache
//!
//! Cache provider implementations for VodBridge. The only backend is an
//! in-memory store; the host process is the cache scope, matching the
//! single-instance deployment model.

pub mod keys;
pub mod memory;
pub mod provider;

pub use provider::CacheManager;
