//! Application state management

use std::sync::Arc;

use tokio::time::Duration;

use crate::config::Config;
use crate::render::Renderer;
use crate::share::{ShareStore, TtlShareStore};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,
    share_store: Arc<dyn ShareStore>,
    renderer: Renderer,
}

impl AppState {
    /// Create application state, starting the share store's sweep task.
    pub fn new(config: Config) -> Self {
        let share_store = Arc::new(TtlShareStore::new(
            config.share.capacity,
            Duration::from_secs(config.share.ttl_secs),
            Duration::from_secs(config.share.sweep_interval_secs.max(1)),
        ));

        Self {
            inner: Arc::new(AppStateInner {
                config,
                share_store,
                renderer: Renderer::new(),
            }),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Get the share store
    pub fn share_store(&self) -> &dyn ShareStore {
        self.inner.share_store.as_ref()
    }

    /// Get the page renderer
    pub fn renderer(&self) -> &Renderer {
        &self.inner.renderer
    }

    /// Shutdown background resources.
    ///
    /// Called after the HTTP server drains so the share store's sweep task
    /// is stopped exactly once.
    pub async fn shutdown(&self) {
        tracing::info!("Shutting down application state...");
        self.inner.share_store.close().await;
    }
}
