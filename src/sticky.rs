//! Sticky selection store (`current.json`)
//!
//! Holds the last picked endpoint so repeated invocations can reuse it
//! without probing. A missing or unreadable file simply means there is no
//! selection yet.

use crate::error::{Result, StickyError};
use crate::persist::write_json_atomic;
use crate::rpc::ScoredEndpoint;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Default sticky file name, relative to the working directory
pub const DEFAULT_STICKY_FILE: &str = "current.json";

/// A persisted endpoint pick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StickySelection {
    /// Unix seconds
    pub picked_at: u64,
    pub url: String,
    pub score: f64,
    #[serde(alias = "lat_ms")]
    pub latency_ms: f64,
    pub head: i64,
}

impl StickySelection {
    /// Snapshot a scored endpoint
    pub fn from_scored(scored: &ScoredEndpoint, picked_at: u64) -> Self {
        Self {
            picked_at,
            url: scored.url.clone(),
            score: scored.score,
            latency_ms: scored.latency_ms,
            head: scored.head,
        }
    }
}

/// File-backed sticky selection
#[derive(Debug, Clone)]
pub struct StickyStore {
    path: PathBuf,
}

impl StickyStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current selection, if a usable one is on disk
    pub fn load(&self) -> Option<StickySelection> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                tracing::debug!("No sticky selection at {}: {}", self.path.display(), e);
                return None;
            }
        };

        match serde_json::from_str::<StickySelection>(&content) {
            Ok(selection) if !selection.url.is_empty() => Some(selection),
            Ok(_) => {
                tracing::debug!("Sticky selection at {} has no url", self.path.display());
                None
            }
            Err(e) => {
                tracing::warn!(
                    "Ignoring malformed sticky selection {}: {}",
                    self.path.display(),
                    e
                );
                None
            }
        }
    }

    /// Atomically replace the stored selection
    pub fn save(&self, selection: &StickySelection) -> Result<()> {
        write_json_atomic(&self.path, selection).map_err(|e| {
            StickyError::Write(format!("{}: {}", self.path.display(), e))
        })?;
        Ok(())
    }
}

impl Default for StickyStore {
    fn default() -> Self {
        Self::new(DEFAULT_STICKY_FILE)
    }
}

/// Seconds since the Unix epoch
pub fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
