//! Configuration: endpoint pool, settings file and scoring policy

mod endpoint;
mod file;
mod policy;
mod pool;

pub use endpoint::EndpointConfig;
pub use file::{ConfigFile, Settings};
pub use policy::{ScoringPolicy, SelectorConfig};
pub use pool::{EndpointPool, DEFAULT_POOL_FILE};
