//! CLI command modules
//!
//! Each group of subcommands has its own module with argument definitions
//! and handlers.

pub mod config;
pub mod endpoints;
pub mod select;

use clap::{Parser, Subcommand};
use rollup_rotator::{
    ConfigFile, EndpointPool, HttpProber, Rotator, Selector, Settings, StickyStore,
    DEFAULT_POOL_FILE, DEFAULT_STICKY_FILE,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rollup-rotator")]
#[command(
    version,
    about = "Rollup RPC rotator with health checks, scoring and sticky failover"
)]
#[command(after_help = r#"EXAMPLES:
    # Add endpoints to the pool
    rollup-rotator add --url https://arb1.publicnode.com --tag pub-a
    rollup-rotator add --url https://arb1.private.example/rpc --tag priv1

    # Score every endpoint
    rollup-rotator test

    # Pick the best endpoint and remember it
    rollup-rotator pick

    # Print the remembered endpoint (picks one if needed)
    cast block-number --rpc-url "$(rollup-rotator use)"

FILES:
    endpoints.json    Endpoint pool (--file)
    current.json      Sticky selection (--current)
    Settings:         ~/.config/rollup-rotator/config.toml (--config)
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Endpoint pool file
    #[arg(long, default_value = DEFAULT_POOL_FILE, global = true)]
    pub file: PathBuf,

    /// Sticky selection file
    #[arg(long, default_value = DEFAULT_STICKY_FILE, global = true)]
    pub current: PathBuf,

    /// Settings file (TOML)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Per-probe timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Endpoints probed at once
    #[arg(long, global = true)]
    pub concurrency: Option<usize>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print command results and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List endpoints
    List,

    /// Add an endpoint
    Add {
        /// RPC URL
        #[arg(long)]
        url: String,

        /// Free-form label
        #[arg(long)]
        tag: Option<String>,
    },

    /// Remove an endpoint
    Remove {
        /// RPC URL
        #[arg(long)]
        url: String,
    },

    /// Test and score all endpoints
    Test {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the best endpoint as JSON
    Best,

    /// Pick the best endpoint and save it as the sticky selection
    Pick,

    /// Print the sticky endpoint URL, picking one if none is saved
    Use,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: config::ConfigCommands,
    },
}

impl Cli {
    /// Log filter for the `-v`/`-q` flags; quiet wins
    pub fn log_filter(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Settings file path in effect
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(ConfigFile::default_path)
    }

    /// Settings file merged with command-line overrides
    pub fn load_config(&self) -> anyhow::Result<ConfigFile> {
        let mut config = ConfigFile::load_optional(&self.config_path())?.unwrap_or_default();
        apply_overrides(&mut config.settings, self.timeout, self.concurrency);
        Ok(config)
    }

    pub fn load_pool(&self) -> anyhow::Result<EndpointPool> {
        Ok(EndpointPool::load(&self.file)?)
    }

    /// Network-backed rotator for the configured pool
    pub fn rotator(&self) -> anyhow::Result<Rotator<HttpProber>> {
        let config = self.load_config()?;
        let prober = HttpProber::new(config.settings.timeout())?;
        let selector = Selector::new(prober, config.settings.selector_config(), config.scoring);
        Ok(Rotator::new(selector, self.sticky_store()))
    }

    pub fn sticky_store(&self) -> StickyStore {
        StickyStore::new(&self.current)
    }
}

fn apply_overrides(settings: &mut Settings, timeout: Option<u64>, concurrency: Option<usize>) {
    if let Some(timeout) = timeout {
        settings.timeout_seconds = timeout;
    }
    if let Some(concurrency) = concurrency {
        settings.concurrency = concurrency;
    }
}

/// Hint shown when an operation needs endpoints and the pool has none
pub fn empty_pool_hint(cli: &Cli) -> anyhow::Error {
    anyhow::anyhow!(
        "No endpoints in {}. Use: add --url <rpc> [--tag <tag>]",
        cli.file.display()
    )
}
