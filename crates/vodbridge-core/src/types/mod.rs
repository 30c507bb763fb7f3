//! Shared value types used across crates.

pub mod pagination;
pub mod sorting;
pub mod warning;

pub use pagination::PageRequest;
pub use sorting::{SortDirection, SortField};
pub use warning::Warning;
