//! Endpoint pool commands: list, add, remove

use super::Cli;
use rollup_rotator::EndpointConfig;

pub fn list(cli: &Cli) -> anyhow::Result<()> {
    let pool = cli.load_pool()?;
    if pool.is_empty() {
        if !cli.quiet {
            println!("No endpoints. Use: add --url <rpc> [--tag <tag>]");
        }
        return Ok(());
    }

    if let Some(chain_id) = pool.chain_id {
        println!("chain_id={}", chain_id);
    }
    for (i, endpoint) in pool.endpoints.iter().enumerate() {
        println!("{:02}. {}  tag={}", i, endpoint.url, endpoint.display_tag());
    }
    Ok(())
}

pub fn add(cli: &Cli, url: &str, tag: Option<&str>) -> anyhow::Result<()> {
    let url = url.trim();
    if url.is_empty() {
        anyhow::bail!("URL must not be empty");
    }

    let mut pool = cli.load_pool()?;
    let endpoint = EndpointConfig::new(url).with_tag(tag.unwrap_or_default());
    let tag = endpoint.display_tag().to_string();

    if pool.add(endpoint) {
        pool.save(&cli.file)?;
        println!("Added: {} tag={}", url, tag);
    } else {
        println!("Already present: {}", url);
    }
    Ok(())
}

pub fn remove(cli: &Cli, url: &str) -> anyhow::Result<()> {
    let mut pool = cli.load_pool()?;

    if pool.remove(url) {
        pool.save(&cli.file)?;
        println!("Removed: {}", url);
    } else {
        println!("Nothing to remove: {}", url);
    }
    Ok(())
}
