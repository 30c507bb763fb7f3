//! Remote video platform connection configuration.

use serde::{Deserialize, Serialize};

/// Settings for one video platform instance.
///
/// The admin credential is used for elevated session lookups and remote
/// user provisioning; regular browsing authenticates as the acting user
/// via the identity-provider application key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformConfig {
    /// Video platform server hostname (no scheme), e.g. `"demo.hosted.example.com"`.
    #[serde(default)]
    pub server_hostname: String,
    /// Admin user key for elevated API calls.
    #[serde(default)]
    pub admin_userkey: String,
    /// Admin password for elevated API calls.
    #[serde(default)]
    pub admin_password: String,
    /// Identity-provider instance name; acting users authenticate as
    /// `"{instance_name}\\{username}"`.
    #[serde(default)]
    pub instance_name: String,
    /// Application key from the identity-provider settings.
    #[serde(default)]
    pub application_key: String,
    /// Display name shown as the root breadcrumb.
    #[serde(default = "default_display_name")]
    pub display_name: String,
    /// Time-to-live for the cached root folder tree, in seconds.
    #[serde(default = "default_tree_cache_ttl")]
    pub tree_cache_ttl_seconds: u64,
    /// Whether sessions whose folder is missing or inaccessible are
    /// surfaced at the root of the tree.
    #[serde(default = "default_orphans_at_root")]
    pub orphans_at_root: bool,
}

impl PlatformConfig {
    /// Whether enough settings are present to reach the remote API.
    ///
    /// An unconfigured platform must degrade to empty listings with a
    /// warning instead of failing construction.
    pub fn is_configured(&self) -> bool {
        !self.server_hostname.is_empty()
            && !self.instance_name.is_empty()
            && !self.application_key.is_empty()
    }

    /// Base URL of the platform, derived from the hostname.
    pub fn base_url(&self) -> String {
        format!("https://{}", self.server_hostname)
    }
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            server_hostname: String::new(),
            admin_userkey: String::new(),
            admin_password: String::new(),
            instance_name: String::new(),
            application_key: String::new(),
            display_name: default_display_name(),
            tree_cache_ttl_seconds: default_tree_cache_ttl(),
            orphans_at_root: default_orphans_at_root(),
        }
    }
}

fn default_display_name() -> String {
    "Video library".to_string()
}

fn default_tree_cache_ttl() -> u64 {
    300
}

fn default_orphans_at_root() -> bool {
    true
}
