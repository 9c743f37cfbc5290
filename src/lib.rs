//! rollup-rotator - resilient JSON-RPC endpoint selection
//!
//! Probes a pool of RPC endpoints for latency and chain-head freshness,
//! scores each one against a reference head estimated from a random sample
//! of the pool, and keeps a sticky pick on disk so scripts can reuse it
//! without probing again.
//!
//! # Example
//!
//! ```rust,no_run
//! use rollup_rotator::{HttpProber, Rotator, Selector, StickyStore, DEFAULT_TIMEOUT};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let urls = vec![
//!         "https://arb1.arbitrum.io/rpc".to_string(),
//!         "https://arb1.publicnode.com".to_string(),
//!     ];
//!
//!     let selector = Selector::with_defaults(HttpProber::new(DEFAULT_TIMEOUT)?);
//!     for row in selector.rank_all(&urls).await {
//!         println!("{:.3} {}", row.score, row.url);
//!     }
//!
//!     let rotator = Rotator::new(selector, StickyStore::new("current.json"));
//!     println!("using {}", rotator.use_endpoint(&urls).await?);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod persist;
pub mod rotator;
pub mod rpc;
pub mod sticky;

// Re-exports for convenience
pub use config::{
    ConfigFile, EndpointConfig, EndpointPool, ScoringPolicy, SelectorConfig, Settings,
    DEFAULT_POOL_FILE,
};
pub use error::{ConfigError, Error, Result, RpcError, StickyError};
pub use rotator::Rotator;
pub use rpc::{
    HttpProber, ProbeError, ProbeOutcome, Prober, ScoredEndpoint, Selector, DEFAULT_TIMEOUT,
    UNKNOWN_HEAD,
};
pub use sticky::{StickySelection, StickyStore, DEFAULT_STICKY_FILE};
