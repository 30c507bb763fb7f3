//! Listing, navigation, and search over the remote hierarchy.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use vodbridge_cache::CacheManager;
use vodbridge_cache::keys;
use vodbridge_client::{
    ListFoldersRequest, ListSessionsRequest, PlatformAuth, VideoPlatform,
};
use vodbridge_core::AppResult;
use vodbridge_core::config::platform::PlatformConfig;
use vodbridge_core::traits::cache::CacheProvider;
use vodbridge_entity::{CachedTree, Crumb, Folder, FolderPath, Session, TreeNode};

use crate::context::RequestContext;
use crate::listing::tree::build_tree;

/// One level of the hierarchy plus the breadcrumb trail leading to it.
#[derive(Debug, Clone)]
pub struct Listing {
    /// Breadcrumbs from the root to the requested path, one per segment.
    pub breadcrumbs: Vec<Crumb>,
    /// The children to display at this level.
    pub children: Vec<TreeNode>,
}

/// Resolves navigation paths into listings and runs free-text search.
///
/// The root-level tree is cached for `tree_cache_ttl_seconds`; every other
/// level is fetched live, scoped to its folder. Search is never cached.
#[derive(Debug, Clone)]
pub struct ListingService {
    platform: Arc<dyn VideoPlatform>,
    cache: Arc<CacheManager>,
    config: PlatformConfig,
}

impl ListingService {
    /// Creates a new listing service.
    pub fn new(
        platform: Arc<dyn VideoPlatform>,
        cache: Arc<CacheManager>,
        config: PlatformConfig,
    ) -> Self {
        Self {
            platform,
            cache,
            config,
        }
    }

    /// Resolve a `/`-joined id path into breadcrumbs plus the children at
    /// that level. An empty path means the root.
    pub async fn list(&self, ctx: &RequestContext, raw_path: &str) -> AppResult<Listing> {
        let path = FolderPath::parse(raw_path)?;
        let auth = PlatformAuth::for_user(&self.config, &ctx.username);

        let children = if path.is_root() {
            self.root_nodes(&auth).await?
        } else {
            self.folder_nodes(&auth, path.leaf()).await?
        };
        let breadcrumbs = self.breadcrumbs(&auth, &path).await?;

        Ok(Listing {
            breadcrumbs,
            children,
        })
    }

    /// Free-text name search across folders and sessions, folders first.
    /// Only playable (fully processed) sessions are returned.
    pub async fn search(&self, ctx: &RequestContext, query: &str) -> AppResult<Vec<TreeNode>> {
        let auth = PlatformAuth::for_user(&self.config, &ctx.username);

        let mut folders = self
            .platform
            .list_folders(&auth, &ListFoldersRequest::search(query))
            .await?;
        folders.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));

        let mut sessions = self
            .platform
            .list_sessions(&auth, &ListSessionsRequest::search(query))
            .await?;
        // The state filter travels with the remote call, but is enforced
        // here as well so a lax remote cannot leak unprocessed sessions.
        sessions.retain(|s| s.state.is_complete());
        sessions.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));

        let mut nodes: Vec<TreeNode> = folders
            .into_iter()
            .map(|folder| TreeNode::Folder {
                folder,
                children: Vec::new(),
            })
            .collect();
        nodes.extend(
            sessions
                .into_iter()
                .map(|session| TreeNode::Session { session }),
        );
        Ok(nodes)
    }

    /// Drop the cached root tree; the next root listing rebuilds it.
    pub async fn purge_tree(&self) -> AppResult<()> {
        self.cache.delete(&keys::root_tree()).await
    }

    /// Root-level nodes, from cache when fresh.
    async fn root_nodes(&self, auth: &PlatformAuth) -> AppResult<Vec<TreeNode>> {
        let key = keys::root_tree();
        let ttl = self.config.tree_cache_ttl_seconds;

        if let Some(cached) = self.cache.get_json::<CachedTree>(&key).await? {
            if cached.is_fresh(Utc::now(), ttl) {
                debug!("Root tree cache hit");
                return Ok(cached.nodes);
            }
            // Expired: purge the whole entry before rebuilding.
            self.cache.delete(&key).await?;
        }

        let folders = self
            .platform
            .list_folders(auth, &ListFoldersRequest::snapshot())
            .await?;
        let sessions = self
            .platform
            .list_sessions(auth, &ListSessionsRequest::snapshot())
            .await?;
        debug!(
            folders = folders.len(),
            sessions = sessions.len(),
            "Rebuilding root tree"
        );

        let folder_map: HashMap<Uuid, Folder> =
            folders.into_iter().map(|f| (f.id, f)).collect();
        let mut groups: HashMap<Uuid, Vec<Session>> = HashMap::new();
        for session in sessions {
            groups
                .entry(session.folder_id.unwrap_or(Uuid::nil()))
                .or_default()
                .push(session);
        }
        if !self.config.orphans_at_root {
            groups.retain(|folder_id, _| folder_map.contains_key(folder_id));
        }

        let nodes = build_tree(folder_map, groups, Uuid::nil());
        let entry = CachedTree::new(nodes.clone());
        self.cache
            .set_json(&key, &entry, Duration::from_secs(ttl))
            .await?;
        Ok(nodes)
    }

    /// One level of a non-root folder, always fetched live.
    async fn folder_nodes(
        &self,
        auth: &PlatformAuth,
        folder_id: Uuid,
    ) -> AppResult<Vec<TreeNode>> {
        let folders = self
            .platform
            .list_folders(auth, &ListFoldersRequest::scoped(folder_id))
            .await?;
        let sessions = self
            .platform
            .list_sessions(auth, &ListSessionsRequest::scoped(folder_id))
            .await?;

        let folder_map: HashMap<Uuid, Folder> =
            folders.into_iter().map(|f| (f.id, f)).collect();
        let mut groups: HashMap<Uuid, Vec<Session>> = HashMap::new();
        for session in sessions {
            groups
                .entry(session.folder_id.unwrap_or(folder_id))
                .or_default()
                .push(session);
        }

        Ok(build_tree(folder_map, groups, folder_id))
    }

    /// Breadcrumbs for every segment of the path. The root crumb carries
    /// the configured display name; folder names come from one batch id
    /// lookup, falling back to the id string for segments the remote no
    /// longer knows.
    async fn breadcrumbs(&self, auth: &PlatformAuth, path: &FolderPath) -> AppResult<Vec<Crumb>> {
        let folder_ids: Vec<Uuid> = path
            .segments()
            .iter()
            .copied()
            .filter(|id| !id.is_nil())
            .collect();

        let names: HashMap<Uuid, String> = if folder_ids.is_empty() {
            HashMap::new()
        } else {
            self.platform
                .get_folders_by_id(auth, &folder_ids)
                .await?
                .into_iter()
                .map(|f| (f.id, f.name))
                .collect()
        };

        let prefixes = path.prefixes();
        let crumbs = path
            .segments()
            .iter()
            .zip(prefixes)
            .map(|(id, prefix)| {
                let name = if id.is_nil() {
                    self.config.display_name.clone()
                } else {
                    names.get(id).cloned().unwrap_or_else(|| id.to_string())
                };
                Crumb { name, path: prefix }
            })
            .collect();
        Ok(crumbs)
    }
}
