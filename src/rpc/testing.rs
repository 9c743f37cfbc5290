//! In-memory prober for tests

use super::{ProbeError, ProbeOutcome, Prober};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Canned outcomes per URL; unknown URLs refuse the connection
#[derive(Default)]
pub(crate) struct FakeProber {
    outcomes: HashMap<String, ProbeOutcome>,
    calls: AtomicUsize,
    probed: Mutex<Vec<String>>,
}

impl FakeProber {
    pub(crate) fn with(mut self, url: &str, outcome: ProbeOutcome) -> Self {
        self.outcomes.insert(url.to_string(), outcome);
        self
    }

    /// Endpoint reporting `head` after `latency_ms`
    pub(crate) fn head(self, url: &str, head: u64, latency_ms: f64) -> Self {
        self.with(
            url,
            ProbeOutcome::success(json!(format!("0x{:x}", head)), latency_ms),
        )
    }

    /// Endpoint refusing connections
    pub(crate) fn down(self, url: &str) -> Self {
        self.with(
            url,
            ProbeOutcome::failure(
                ProbeError::Transport {
                    message: "connection refused".to_string(),
                },
                1.0,
            ),
        )
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn probed_urls(&self) -> Vec<String> {
        self.probed.lock().unwrap().clone()
    }

    /// Same outcomes, zeroed counters
    pub(crate) fn fresh_copy(&self) -> Self {
        Self {
            outcomes: self.outcomes.clone(),
            ..Default::default()
        }
    }
}

impl Prober for FakeProber {
    async fn probe(&self, url: &str, _method: &str, _params: Value) -> ProbeOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.probed.lock().unwrap().push(url.to_string());
        self.outcomes.get(url).cloned().unwrap_or_else(|| {
            ProbeOutcome::failure(
                ProbeError::Transport {
                    message: format!("no route to {}", url),
                },
                0.5,
            )
        })
    }
}
