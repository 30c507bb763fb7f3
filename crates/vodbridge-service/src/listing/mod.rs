//! Folder/session listing: tree building, navigation, and search.

pub mod service;
pub mod tree;

pub use service::{Listing, ListingService};
pub use tree::build_tree;
