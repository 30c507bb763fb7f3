//! Application state shared across all handlers.

use std::sync::Arc;

use vodbridge_cache::CacheManager;
use vodbridge_client::VideoPlatform;
use vodbridge_core::config::AppConfig;
use vodbridge_service::listing::ListingService;
use vodbridge_service::session::SessionDirectory;
use vodbridge_service::sso::SsoService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Cache manager backing the root-tree cache
    pub cache: Arc<CacheManager>,
    /// Remote video platform client
    pub platform: Arc<dyn VideoPlatform>,
    /// Listing and search service
    pub listing_service: Arc<ListingService>,
    /// Session lookup service
    pub session_directory: Arc<SessionDirectory>,
    /// SSO handshake service
    pub sso_service: Arc<SsoService>,
}

impl AppState {
    /// Wire the full service stack over a platform client and cache.
    pub fn new(
        config: Arc<AppConfig>,
        cache: Arc<CacheManager>,
        platform: Arc<dyn VideoPlatform>,
    ) -> Self {
        let listing_service = Arc::new(ListingService::new(
            platform.clone(),
            cache.clone(),
            config.platform.clone(),
        ));
        let session_directory = Arc::new(SessionDirectory::new(
            platform.clone(),
            config.platform.clone(),
        ));
        let sso_service = Arc::new(SsoService::new(platform.clone(), config.platform.clone()));

        Self {
            config,
            cache,
            platform,
            listing_service,
            session_directory,
            sso_service,
        }
    }
}
