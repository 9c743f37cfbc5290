//! RPC endpoint configuration

use serde::{Deserialize, Serialize};

/// Configuration for a single RPC endpoint in a pool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// RPC URL, unique within a pool
    pub url: String,
    /// Free-form label (e.g. "priv1", "pub-a")
    #[serde(default)]
    pub tag: String,
}

impl EndpointConfig {
    /// Create a new endpoint config without a tag
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            tag: String::new(),
        }
    }

    /// Builder-style setter for tag
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Tag for display, `-` when unset
    pub fn display_tag(&self) -> &str {
        if self.tag.is_empty() {
            "-"
        } else {
            &self.tag
        }
    }
}
