//! Endpoint pool file (`endpoints.json`)
//!
//! ```json
//! {
//!   "chain_id": 42161,
//!   "endpoints": [
//!     {"url": "https://arb1.private.example/rpc", "tag": "priv1"},
//!     {"url": "https://arb1.publicnode.com", "tag": "pub-a"}
//!   ]
//! }
//! ```

use super::EndpointConfig;
use crate::error::{ConfigError, Result};
use crate::persist::write_json_atomic;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default pool file name, relative to the working directory
pub const DEFAULT_POOL_FILE: &str = "endpoints.json";

/// An ordered pool of endpoints for one chain
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointPool {
    /// Chain identifier, informational
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<u64>,

    /// Endpoints in user order
    #[serde(default)]
    pub endpoints: Vec<EndpointConfig>,
}

impl EndpointPool {
    /// Default pool path
    pub fn default_path() -> PathBuf {
        PathBuf::from(DEFAULT_POOL_FILE)
    }

    /// Load a pool; a missing file is an empty pool
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("Pool file {} not found, starting empty", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::InvalidFile(format!("{}: {}", path.display(), e)))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let pool: Self = serde_json::from_str(&content)
            .map_err(|e| ConfigError::InvalidFile(format!("{}: {}", path.display(), e)))?;
        Ok(pool)
    }

    /// Atomically write the pool
    pub fn save(&self, path: &Path) -> Result<()> {
        write_json_atomic(path, self).map_err(|e| {
            ConfigError::InvalidFile(format!("Failed to write {}: {}", path.display(), e))
        })?;
        Ok(())
    }

    /// Append an endpoint. Returns false if the URL is already present.
    pub fn add(&mut self, endpoint: EndpointConfig) -> bool {
        if self.contains(&endpoint.url) {
            return false;
        }
        self.endpoints.push(endpoint);
        true
    }

    /// Remove an endpoint by URL. Returns false if nothing matched.
    pub fn remove(&mut self, url: &str) -> bool {
        let before = self.endpoints.len();
        self.endpoints.retain(|e| e.url != url);
        self.endpoints.len() < before
    }

    /// Whether a URL is in the pool
    pub fn contains(&self, url: &str) -> bool {
        self.endpoints.iter().any(|e| e.url == url)
    }

    /// URLs in pool order
    pub fn urls(&self) -> Vec<String> {
        self.endpoints.iter().map(|e| e.url.clone()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }
}
