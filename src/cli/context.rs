//! Command execution context
//!
//! Loads the config once, restores the session from local storage and builds
//! an API client that carries the session's token.

use log::debug;

use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::EventBookerClient;
use crate::config::Config;
use crate::error::Result;
use crate::session::SessionManager;
use crate::storage::SqliteStore;

/// Shared state handed to every command handler.
pub struct CommandContext {
    /// Session restored from local storage
    pub session: SessionManager<SqliteStore>,
    /// API client, authenticated when the session holds a token
    pub client: EventBookerClient,
    /// Resolved output format
    pub format: OutputFormat,
    /// Resolved API base URL
    pub api_url: String,
}

impl CommandContext {
    /// Build the context.
    ///
    /// Storage directory resolves as flag/env, then config file, then the
    /// platform data directory.
    ///
    /// # Errors
    /// Returns error if the config file is invalid, the API URL does not
    /// parse, or local storage cannot be opened.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_at(opts.config_ref())?;
        let format = config.format(opts.format);
        let api_url = config.api_url(opts.api_url_ref())?;

        let dir_override = opts.storage_dir_ref().or(config.storage_dir.as_deref());
        let storage_dir = SqliteStore::resolve_dir(dir_override)?;
        debug!("Using storage at {}", storage_dir.display());

        let session = SessionManager::open(SqliteStore::open_at(&storage_dir)?)?;
        let client = EventBookerClient::new(&api_url, session.token().map(str::to_string))?;
        debug!("Talking to {}", client.base_url());

        Ok(Self {
            session,
            client,
            format,
            api_url,
        })
    }
}
