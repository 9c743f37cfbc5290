//! Pool evaluation: reference head estimation, ranking and best pick

use super::head::{parse_block_number, sample_urls, BLOCK_NUMBER_METHOD, UNKNOWN_HEAD};
use super::prober::{ProbeOutcome, Prober};
use super::score::{score_outcome, ScoredEndpoint};
use crate::config::{ScoringPolicy, SelectorConfig};
use crate::error::{Result, RpcError};
use futures::stream::{self, StreamExt};
use rand::{thread_rng, Rng};
use serde_json::json;

/// Evaluates a pool of endpoints with a [`Prober`]
///
/// Every scoring pass compares all endpoints against one reference head that
/// is computed before any endpoint is scored. Probes may run concurrently up
/// to `concurrency`, but results are always collected in pool order.
#[derive(Debug, Clone)]
pub struct Selector<P> {
    prober: P,
    config: SelectorConfig,
    policy: ScoringPolicy,
}

impl<P: Prober> Selector<P> {
    pub fn new(prober: P, config: SelectorConfig, policy: ScoringPolicy) -> Self {
        Self {
            prober,
            config,
            policy,
        }
    }

    /// Selector with default sampling and scoring policy
    pub fn with_defaults(prober: P) -> Self {
        Self::new(prober, SelectorConfig::default(), ScoringPolicy::default())
    }

    pub fn prober(&self) -> &P {
        &self.prober
    }

    pub fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }

    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// Estimate the network head from a random sample of the pool
    ///
    /// Returns the highest height seen, or -1 if no sampled endpoint answered.
    pub async fn estimate_head(&self, urls: &[String]) -> i64 {
        let sample = {
            let mut rng = thread_rng();
            sample_urls(urls, self.config.head_sample_size, &mut rng)
        };
        self.max_head(&sample).await
    }

    /// [`estimate_head`](Self::estimate_head) with a caller-supplied RNG
    pub async fn estimate_head_with_rng<R: Rng + ?Sized>(
        &self,
        urls: &[String],
        rng: &mut R,
    ) -> i64 {
        let sample = sample_urls(urls, self.config.head_sample_size, rng);
        self.max_head(&sample).await
    }

    async fn max_head(&self, sample: &[&str]) -> i64 {
        let outcomes = self.probe_heads(sample).await;

        let reference = outcomes
            .iter()
            .filter_map(|outcome| outcome.result.as_ref().ok())
            .map(parse_block_number)
            .fold(UNKNOWN_HEAD, i64::max);

        tracing::debug!(
            "Reference head {} from {} sampled endpoints",
            reference,
            sample.len()
        );
        reference
    }

    async fn probe_heads(&self, urls: &[&str]) -> Vec<ProbeOutcome> {
        stream::iter(
            urls.iter()
                .map(move |url| self.prober.probe(url, BLOCK_NUMBER_METHOD, json!([]))),
        )
        .buffered(self.config.concurrency.max(1))
        .collect()
        .await
    }

    /// Probe and score a single endpoint against a reference head
    pub async fn score(&self, url: &str, reference_head: i64) -> ScoredEndpoint {
        let outcome = self.prober.probe(url, BLOCK_NUMBER_METHOD, json!([])).await;
        score_outcome(url, outcome, reference_head, &self.policy)
    }

    /// Score every endpoint against one reference head, best first
    ///
    /// Ties keep pool order. An empty pool yields an empty list.
    pub async fn score_all(&self, urls: &[String], reference_head: i64) -> Vec<ScoredEndpoint> {
        let mut scored: Vec<ScoredEndpoint> = stream::iter(
            urls.iter().map(move |url| self.score(url, reference_head)),
        )
        .buffered(self.config.concurrency.max(1))
        .collect()
        .await;

        // Stable sort: equal scores stay in pool order
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored
    }

    /// Estimate the reference head, then rank the whole pool
    pub async fn rank_all(&self, urls: &[String]) -> Vec<ScoredEndpoint> {
        let reference_head = self.estimate_head(urls).await;
        self.score_all(urls, reference_head).await
    }

    /// Best endpoint of the pool
    ///
    /// Fails only when the pool is empty. If every probe fails the first
    /// endpoint in pool order is returned with a score of 0.
    pub async fn pick_best(&self, urls: &[String]) -> Result<ScoredEndpoint> {
        if urls.is_empty() {
            return Err(RpcError::EmptyPool.into());
        }

        let best = self
            .rank_all(urls)
            .await
            .into_iter()
            .next()
            .ok_or(RpcError::EmptyPool)?;

        tracing::info!("Best endpoint {} (score {})", best.url, best.score);
        Ok(best)
    }
}
