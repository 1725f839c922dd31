//! Application state shared across handlers.

use std::sync::Arc;

use crate::{config::AdminConfig, services::SessionCache, upstream::BackendClient};

/// Application state shared across all handlers.
///
/// Cheap to clone; holds no per-request data. There is no database pool and
/// no session store: all state of interest lives in the platform backend.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    backend: BackendClient,
    session_cache: Option<SessionCache>,
}

impl AppState {
    /// Build application state from configuration.
    #[must_use]
    pub fn new(config: AdminConfig) -> Self {
        let backend = BackendClient::new(&config.backend);
        let session_cache = config.session_cache_ttl.map(SessionCache::new);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                backend,
                session_cache,
            }),
        }
    }

    /// Application configuration.
    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    /// Platform backend client.
    #[must_use]
    pub fn backend(&self) -> &BackendClient {
        &self.inner.backend
    }

    /// The opt-in session cache, when enabled by configuration.
    #[must_use]
    pub fn session_cache(&self) -> Option<&SessionCache> {
        self.inner.session_cache.as_ref()
    }
}
