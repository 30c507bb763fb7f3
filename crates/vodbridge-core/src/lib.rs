//! # vodbridge-core
//!
//! Core crate for VodBridge. Contains configuration schemas, shared traits,
//! pagination/sorting/warning types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other VodBridge crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
