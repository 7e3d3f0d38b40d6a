//! Global CLI options shared across all commands

use std::path::{Path, PathBuf};

use crate::cli::{Cli, OutputFormat};

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// For most options, the precedence is: CLI flag > environment variable > config file > default.
/// This struct captures the CLI/env layer; config file defaults are resolved later in
/// `CommandContext`.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format override
    pub format: Option<OutputFormat>,

    /// Custom config file path (defaults to ~/.eventbooker/config.yaml)
    pub config: Option<String>,

    /// API base URL override
    pub api_url: Option<String>,

    /// Local storage directory override
    pub storage_dir: Option<PathBuf>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            api_url: cli.api_url.clone(),
            storage_dir: cli.storage_dir.clone(),
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Get API URL override as `Option<&str>`.
    pub fn api_url_ref(&self) -> Option<&str> {
        self.api_url.as_deref()
    }

    /// Get storage directory override as `Option<&Path>`.
    pub fn storage_dir_ref(&self) -> Option<&Path> {
        self.storage_dir.as_deref()
    }
}
