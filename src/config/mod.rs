//! Site configuration loading and validation.
//!
//! Configuration comes from `vellum.toml`, with CLI flags applied on top
//! after loading. The environment is resolved here, once, at build start;
//! core logic only ever sees it as an explicit parameter.

mod error;
mod markdown;

pub use error::ConfigError;
pub use markdown::{AnchorConfig, MarkdownConfig};

use crate::cli::Cli;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Environment
// ============================================================================

/// Build environment, fixed at build start.
///
/// Controls draft visibility and output minification. Threaded as a value
/// through every derivation and transform call; nothing in the core reads
/// process state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local builds: drafts visible, output left readable
    #[default]
    Development,
    /// Deployed builds: drafts hidden, HTML minified
    Production,
}

impl Environment {
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    /// Get the short name for this environment (used in logs)
    pub const fn name(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

// ============================================================================
// Site Config
// ============================================================================

/// Top-level configuration for one build.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Build environment
    pub environment: Environment,

    /// Markdown renderer options handed to the external engine
    pub markdown: MarkdownConfig,

    /// Path the config was loaded from (not part of the file itself)
    #[serde(skip)]
    pub config_path: PathBuf,
}

impl SiteConfig {
    /// Load configuration from a TOML file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        let mut config: Self = toml::from_str(&raw)?;
        config.config_path = path.to_path_buf();
        Ok(config)
    }

    /// Apply CLI overrides on top of the loaded file.
    pub fn update_with_cli(&mut self, cli: &Cli) {
        if let Some(production) = cli.production_override() {
            self.environment = if production {
                Environment::Production
            } else {
                Environment::Development
            };
        }
    }

    /// Validate configuration consistency.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let level = self.markdown.anchor.level;
        if !(1..=6).contains(&level) {
            return Err(ConfigError::Validation(format!(
                "markdown.anchor.level must be between 1 and 6, got {level}"
            )));
        }
        if self.markdown.anchor.class.is_empty() {
            return Err(ConfigError::Validation(
                "markdown.anchor.class must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
