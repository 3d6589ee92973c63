//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Vellum content pipeline CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Config file name (default: vellum.toml)
    #[arg(short = 'C', long, default_value = "vellum.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Shared build arguments
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Document manifest produced by the build engine
    #[arg(short, long)]
    pub manifest: PathBuf,

    /// Output directory for derived collections
    #[arg(short, long, default_value = "dist")]
    pub out: PathBuf,

    /// Emitted HTML tree to post-process (production builds minify it in place)
    #[arg(long = "html-dir")]
    pub html_dir: Option<PathBuf>,

    /// Build for production (drafts hidden, HTML minified)
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub production: Option<bool>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Derive collections from a document manifest and post-process emitted HTML
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Print the heading-anchor id for a piece of heading text
    Slug {
        /// heading text
        text: String,
    },
}

impl Cli {
    /// Environment override from the command line, if any.
    pub fn production_override(&self) -> Option<bool> {
        match &self.command {
            Commands::Build { build_args } => build_args.production,
            Commands::Slug { .. } => None,
        }
    }
}
