//! Configuration management commands

use super::Cli;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show config file path
    Path,

    /// Show effective settings (file merged with command-line flags)
    Show,
}

pub fn handle(action: &ConfigCommands, cli: &Cli) -> anyhow::Result<()> {
    match action {
        ConfigCommands::Path => {
            println!("{}", cli.config_path().display());
        }

        ConfigCommands::Show => {
            let path = cli.config_path();
            if !cli.quiet {
                if path.exists() {
                    println!("# {}\n", path.display());
                } else {
                    println!("# {} (not found, using defaults)\n", path.display());
                }
            }

            let config = cli.load_config()?;
            println!("{}", toml::to_string_pretty(&config)?);
        }
    }

    Ok(())
}
