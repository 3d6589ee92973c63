//! Vellum - content pipeline for a markdown blog.
//!
//! Takes the document manifest discovered by the external build engine,
//! derives the named collections (nav, posts, featured, notes), and
//! post-processes emitted HTML for production builds.

mod build;
mod cli;
mod collections;
mod config;
mod document;
mod logger;
mod utils;

use anyhow::Result;
use build::build_site;
use clap::Parser;
use cli::{Cli, Commands};
use config::SiteConfig;
use utils::slug::anchor_slug;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match &cli.command {
        Commands::Build { build_args } => build_site(&config, build_args),
        Commands::Slug { text } => {
            println!("{}", anchor_slug(text));
            Ok(())
        }
    }
}

/// Load and validate configuration, then apply CLI overrides.
///
/// A missing config file is fine; the defaults match what the external
/// engine expects.
fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let mut config = if cli.config.exists() {
        SiteConfig::from_path(&cli.config)?
    } else {
        SiteConfig::default()
    };
    config.update_with_cli(cli);
    config.validate()?;
    Ok(config)
}
