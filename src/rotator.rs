//! Sticky pick-and-reuse on top of the [`Selector`]

use crate::error::Result;
use crate::rpc::{Prober, Selector};
use crate::sticky::{unix_now, StickySelection, StickyStore};

/// Picks the best endpoint of a pool and remembers it
pub struct Rotator<P> {
    selector: Selector<P>,
    store: StickyStore,
}

impl<P: Prober> Rotator<P> {
    pub fn new(selector: Selector<P>, store: StickyStore) -> Self {
        Self { selector, store }
    }

    pub fn selector(&self) -> &Selector<P> {
        &self.selector
    }

    pub fn store(&self) -> &StickyStore {
        &self.store
    }

    /// Re-evaluate the pool and persist the winner
    pub async fn pick(&self, urls: &[String]) -> Result<StickySelection> {
        let best = self.selector.pick_best(urls).await?;
        let selection = StickySelection::from_scored(&best, unix_now());
        self.store.save(&selection)?;

        tracing::info!(
            "Picked {} (score {}) -> {}",
            selection.url,
            selection.score,
            self.store.path().display()
        );
        Ok(selection)
    }

    /// URL to use right now
    ///
    /// Returns the sticky selection without touching the network when one
    /// exists, otherwise picks (and persists) a fresh one.
    pub async fn use_endpoint(&self, urls: &[String]) -> Result<String> {
        if let Some(selection) = self.store.load() {
            tracing::debug!("Reusing sticky selection {}", selection.url);
            return Ok(selection.url);
        }

        Ok(self.pick(urls).await?.url)
    }
}
