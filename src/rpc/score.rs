//! Endpoint scoring
//!
//! A successful probe is scored as
//!
//! ```text
//! score = max(0, 1 - w_lat * latency_penalty - w_drift * drift_penalty)
//! ```
//!
//! where both penalties saturate at 1.0 (see [`ScoringPolicy`]). A failed
//! probe is pinned to 0.0 so an unreachable endpoint never outranks a
//! reachable one.

use super::head::{drift, parse_block_number, UNKNOWN_HEAD};
use super::prober::{ProbeError, ProbeOutcome};
use crate::config::ScoringPolicy;
use serde::{Deserialize, Serialize};

/// An endpoint with its health score against a reference head
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredEndpoint {
    pub url: String,
    pub ok: bool,
    /// Probe latency, one decimal
    pub latency_ms: f64,
    /// Reported head, -1 if unknown
    pub head: i64,
    /// Blocks behind the reference; `None` iff the probe failed
    pub drift: Option<u64>,
    /// Health in [0, 1], three decimals
    pub score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ProbeError>,
}

/// Score one probe outcome against a reference head
pub fn score_outcome(
    url: &str,
    outcome: ProbeOutcome,
    reference_head: i64,
    policy: &ScoringPolicy,
) -> ScoredEndpoint {
    let latency_ms = round_to(outcome.latency_ms, 1);

    match outcome.result {
        Ok(result) => {
            let head = parse_block_number(&result);
            let drift = drift(reference_head, head);

            let score = 1.0
                - policy.latency_weight * policy.latency_penalty(outcome.latency_ms)
                - policy.drift_weight * policy.drift_penalty(drift);

            ScoredEndpoint {
                url: url.to_string(),
                ok: true,
                latency_ms,
                head,
                drift: Some(drift),
                score: round_to(score.clamp(0.0, 1.0), 3),
                error: None,
            }
        }
        Err(error) => ScoredEndpoint {
            url: url.to_string(),
            ok: false,
            latency_ms,
            head: UNKNOWN_HEAD,
            drift: None,
            score: 0.0,
            error: Some(error),
        },
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
