//! # vodbridge-entity
//!
//! Domain entities for VodBridge: folders and sessions as fetched from the
//! remote video platform, the materialized tree built from them, and the
//! navigation path / session view types served to the LMS.

pub mod folder;
pub mod path;
pub mod session;
pub mod tree;

pub use folder::Folder;
pub use path::{Crumb, FolderPath};
pub use session::{Session, SessionState, SessionView};
pub use tree::{CachedTree, TreeNode};
