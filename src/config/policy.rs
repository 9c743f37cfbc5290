//! Scoring and selection tunables
//!
//! The defaults are the long-standing policy values. Changing them changes
//! observable ranking, so they are only ever overridden explicitly.

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};

/// Weights and thresholds used to turn a probe into a score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringPolicy {
    /// Latency at which the latency penalty saturates (ms)
    #[serde(default = "default_latency_budget_ms")]
    pub latency_budget_ms: f64,

    /// Blocks behind the reference that cost nothing
    #[serde(default = "default_head_skew_ok")]
    pub head_skew_ok: u64,

    /// Blocks past the tolerance at which the drift penalty saturates
    #[serde(default = "default_drift_window")]
    pub drift_window: u64,

    /// Weight of the latency penalty
    #[serde(default = "default_latency_weight")]
    pub latency_weight: f64,

    /// Weight of the drift penalty
    #[serde(default = "default_drift_weight")]
    pub drift_weight: f64,
}

fn default_latency_budget_ms() -> f64 {
    1200.0
}

fn default_head_skew_ok() -> u64 {
    3
}

fn default_drift_window() -> u64 {
    10
}

fn default_latency_weight() -> f64 {
    0.6
}

fn default_drift_weight() -> f64 {
    0.4
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            latency_budget_ms: default_latency_budget_ms(),
            head_skew_ok: default_head_skew_ok(),
            drift_window: default_drift_window(),
            latency_weight: default_latency_weight(),
            drift_weight: default_drift_weight(),
        }
    }
}

impl ScoringPolicy {
    /// Reject values that would break the [0, 1] score range or divide by zero
    pub fn validate(&self) -> Result<()> {
        if !(self.latency_budget_ms.is_finite() && self.latency_budget_ms > 0.0) {
            return Err(ConfigError::InvalidPolicy(format!(
                "latency_budget_ms must be positive, got {}",
                self.latency_budget_ms
            ))
            .into());
        }
        if self.drift_window == 0 {
            return Err(ConfigError::InvalidPolicy("drift_window must be at least 1".into()).into());
        }
        for (name, weight) in [
            ("latency_weight", self.latency_weight),
            ("drift_weight", self.drift_weight),
        ] {
            if !(weight.is_finite() && weight >= 0.0) {
                return Err(ConfigError::InvalidPolicy(format!(
                    "{} must be non-negative, got {}",
                    name, weight
                ))
                .into());
            }
        }
        Ok(())
    }

    /// Latency penalty in [0, 1], linear up to the budget
    pub fn latency_penalty(&self, latency_ms: f64) -> f64 {
        (latency_ms.max(0.0) / self.latency_budget_ms).min(1.0)
    }

    /// Drift penalty in [0, 1], zero inside the tolerance band
    pub fn drift_penalty(&self, drift: u64) -> f64 {
        if drift <= self.head_skew_ok {
            return 0.0;
        }
        ((drift - self.head_skew_ok) as f64 / self.drift_window as f64).min(1.0)
    }
}

/// How the selector samples and fans out probes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorConfig {
    /// Endpoints sampled to estimate the reference head
    pub head_sample_size: usize,
    /// Probes in flight at once (1 = strictly sequential)
    pub concurrency: usize,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            head_sample_size: 3,
            concurrency: 1,
        }
    }
}
