//! Character catalog client.
//!
//! Fetches the playable character list from the public agent API with
//! `reqwest` and caches the result in-process using `moka` (5-minute TTL).
//! The catalog is read-only and externally owned; nothing here mutates it.

pub mod types;

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use thiserror::Error;
use tracing::debug;

pub use types::{Agent, AgentsEnvelope, ROLE_FILTERS};

/// Cache key for the full agent list (the only cached value).
const AGENTS_CACHE_KEY: &str = "agents";

/// Errors that can occur when talking to the catalog API.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status.
    #[error("catalog API returned status {0}")]
    Api(u16),

    /// Agent not found in the catalog.
    #[error("agent not found: {0}")]
    NotFound(String),
}

/// Client for the public character catalog API.
///
/// Cheaply cloneable; the HTTP client and cache are shared behind an `Arc`.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    base_url: String,
    cache: Cache<&'static str, Arc<Vec<Agent>>>,
}

impl CatalogClient {
    /// Create a new catalog client.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        let cache = Cache::builder()
            .max_capacity(4)
            .time_to_live(Duration::from_secs(300)) // 5 minutes
            .build();

        Self {
            inner: Arc::new(CatalogClientInner {
                client: reqwest::Client::new(),
                base_url: base_url.trim_end_matches('/').to_string(),
                cache,
            }),
        }
    }

    /// Fetch all playable agents, in Spanish, keeping only those with a full
    /// portrait (figures without artwork cannot be sold).
    ///
    /// Results are cached for 5 minutes.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the request fails or the API responds with
    /// a non-success status.
    pub async fn get_agents(&self) -> Result<Arc<Vec<Agent>>, CatalogError> {
        if let Some(agents) = self.inner.cache.get(AGENTS_CACHE_KEY).await {
            debug!("catalog cache hit");
            return Ok(agents);
        }

        let url = format!(
            "{}/agents?language=es-ES&isPlayableCharacter=true",
            self.inner.base_url
        );
        let response = self.inner.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Api(status.as_u16()));
        }

        let envelope: AgentsEnvelope = response.json().await?;
        let agents: Vec<Agent> = envelope
            .data
            .into_iter()
            .filter(|agent| agent.full_portrait.is_some())
            .collect();
        debug!(count = agents.len(), "catalog fetched");

        let agents = Arc::new(agents);
        self.inner
            .cache
            .insert(AGENTS_CACHE_KEY, Arc::clone(&agents))
            .await;
        Ok(agents)
    }

    /// Fetch a single agent by uuid.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if no agent has that uuid, or any
    /// error from the underlying list fetch.
    pub async fn get_agent(&self, uuid: &str) -> Result<Agent, CatalogError> {
        let agents = self.get_agents().await?;
        agents
            .iter()
            .find(|agent| agent.uuid == uuid)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(uuid.to_string()))
    }
}
