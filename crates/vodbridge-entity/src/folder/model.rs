//! Folder entity model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A folder in the remote content hierarchy.
///
/// Folders arrive as a flat result set; the hierarchy is materialized
/// locally by the tree builder. A parent id that is absent, nil, or points
/// at a folder outside the current snapshot means "effectively root".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    /// Unique folder identifier on the remote platform.
    pub id: Uuid,
    /// Folder name.
    pub name: String,
    /// Declared parent folder id (None for root-level folders).
    pub parent_id: Option<Uuid>,
}
