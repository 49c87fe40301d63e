//! Application state shared across handlers.

use std::sync::Arc;

use crate::catalog::CatalogClient;
use crate::config::StorefrontConfig;
use crate::services::store_api::StoreApiClient;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; holds the configuration and the two outbound
/// API clients.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: CatalogClient,
    store_api: StoreApiClient,
}

impl AppState {
    /// Create a new application state from configuration.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let catalog = CatalogClient::new(&config.agent_api_url);
        let store_api = StoreApiClient::new(&config.store_api_url);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                store_api,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the character catalog client.
    #[must_use]
    pub fn catalog(&self) -> &CatalogClient {
        &self.inner.catalog
    }

    /// Get a reference to the store backend client.
    #[must_use]
    pub fn store_api(&self) -> &StoreApiClient {
        &self.inner.store_api
    }
}
