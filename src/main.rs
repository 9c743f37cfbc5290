//! rollup-rotator CLI - pick and stick to the healthiest RPC endpoint

mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(EnvFilter::new(cli.log_filter()))
        .init();

    match &cli.command {
        Commands::List => cli::endpoints::list(&cli),
        Commands::Add { url, tag } => cli::endpoints::add(&cli, url, tag.as_deref()),
        Commands::Remove { url } => cli::endpoints::remove(&cli, url),
        Commands::Test { json } => cli::select::test(&cli, *json).await,
        Commands::Best => cli::select::best(&cli).await,
        Commands::Pick => cli::select::pick(&cli).await,
        Commands::Use => cli::select::use_endpoint(&cli).await,
        Commands::Config { action } => cli::config::handle(action, &cli),
    }
}
