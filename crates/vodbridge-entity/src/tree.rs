//! The materialized folder/session tree.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::folder::Folder;
use crate::session::Session;

/// A node in the materialized hierarchy: a folder owning its children, or
/// a session leaf. Every node has exactly one parent in the tree; orphans
/// are reparented by the builder before a node is attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TreeNode {
    /// A folder and the subtree it owns.
    Folder {
        /// The folder itself.
        folder: Folder,
        /// Child nodes, subfolders first, each group name-ordered.
        children: Vec<TreeNode>,
    },
    /// A session leaf.
    Session {
        /// The session itself.
        session: Session,
    },
}

impl TreeNode {
    /// The node's remote id.
    pub fn id(&self) -> Uuid {
        match self {
            Self::Folder { folder, .. } => folder.id,
            Self::Session { session } => session.id,
        }
    }

    /// The node's display name.
    pub fn name(&self) -> &str {
        match self {
            Self::Folder { folder, .. } => &folder.name,
            Self::Session { session } => &session.name,
        }
    }

    /// Whether this node is a folder.
    pub fn is_folder(&self) -> bool {
        matches!(self, Self::Folder { .. })
    }
}

/// The cached root-level tree plus its build timestamp.
///
/// A cached value is either fresh (`now - built_at <= ttl`) or treated as
/// absent; it is never served stale beyond the TTL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedTree {
    /// When the tree was built.
    pub built_at: DateTime<Utc>,
    /// Root-level nodes.
    pub nodes: Vec<TreeNode>,
}

impl CachedTree {
    /// Wrap freshly built nodes with the current timestamp.
    pub fn new(nodes: Vec<TreeNode>) -> Self {
        Self {
            built_at: Utc::now(),
            nodes,
        }
    }

    /// Whether the entry is still within its TTL at `now`.
    pub fn is_fresh(&self, now: DateTime<Utc>, ttl_seconds: u64) -> bool {
        now.signed_duration_since(self.built_at)
            .num_seconds()
            .max(0) as u64
            <= ttl_seconds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_freshness_boundary() {
        let tree = CachedTree::new(Vec::new());
        let built = tree.built_at;
        assert!(tree.is_fresh(built + Duration::seconds(299), 300));
        assert!(tree.is_fresh(built + Duration::seconds(300), 300));
        assert!(!tree.is_fresh(built + Duration::seconds(301), 300));
    }
}
