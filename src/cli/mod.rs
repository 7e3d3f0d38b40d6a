//! CLI command definitions and handlers

use std::path::PathBuf;

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod args;
pub mod auth;
pub mod context;
pub mod events;
pub mod whoami;

pub use args::{GlobalOptions, OutputFormat};
pub use context::CommandContext;

use crate::session::Route;

/// EventBooker CLI - browse events and manage your session
#[derive(Parser, Debug)]
#[command(name = "eventbooker")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "EVENTBOOKER_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "EVENTBOOKER_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// EventBooker API base URL
    #[arg(long, global = true, env = "EVENTBOOKER_API_URL", hide_env = true)]
    pub api_url: Option<String>,

    /// Directory for local session storage
    #[arg(long, global = true, env = "EVENTBOOKER_STORAGE_DIR", hide_env = true)]
    pub storage_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true, env = "EVENTBOOKER_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in with email and password
    Login {
        /// Account email (prompted if omitted)
        #[arg(long, short = 'e')]
        email: Option<String>,

        /// Account password (prompted if omitted)
        #[arg(long, env = "EVENTBOOKER_PASSWORD", hide_env = true)]
        password: Option<String>,
    },

    /// Create a new account
    Register {
        /// Display name (prompted if omitted)
        #[arg(long, short = 'n')]
        name: Option<String>,

        /// Account email (prompted if omitted)
        #[arg(long, short = 'e')]
        email: Option<String>,

        /// Account password, at least 6 characters (prompted if omitted)
        #[arg(long, env = "EVENTBOOKER_PASSWORD", hide_env = true)]
        password: Option<String>,
    },

    /// Log out and forget the stored session
    Logout,

    /// Show who is logged in
    Whoami,

    /// Browse events
    #[command(subcommand)]
    Events(EventCommands),

    /// Display version information
    Version,

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  bash:   eventbooker completion bash > /etc/bash_completion.d/eventbooker
  zsh:    eventbooker completion zsh > \"${fpath[1]}/_eventbooker\"
  fish:   eventbooker completion fish > ~/.config/fish/completions/eventbooker.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Event subcommands
#[derive(Subcommand, Debug)]
pub enum EventCommands {
    /// List upcoming events
    #[command(visible_alias = "ls")]
    List,

    /// Show event details and seat availability
    Show {
        /// Event ID
        id: String,
    },
}

/// Suggested next command after a session change
pub fn next_step(route: Route) -> &'static str {
    match route {
        Route::Home => "eventbooker events list",
        Route::Login => "eventbooker login",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_login_flags() {
        let cli = Cli::try_parse_from([
            "eventbooker",
            "login",
            "--email",
            "ada@example.com",
            "--password",
            "secret1",
        ])
        .unwrap();

        match cli.command {
            Commands::Login { email, password } => {
                assert_eq!(email.as_deref(), Some("ada@example.com"));
                assert_eq!(password.as_deref(), Some("secret1"));
            }
            other => panic!("Expected login, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "eventbooker",
            "events",
            "show",
            "evt-1",
            "--format",
            "json",
            "--api-url",
            "http://localhost:4000",
        ])
        .unwrap();

        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert_eq!(cli.api_url.as_deref(), Some("http://localhost:4000"));
        assert!(matches!(
            cli.command,
            Commands::Events(EventCommands::Show { ref id }) if id == "evt-1"
        ));
    }

    #[test]
    fn test_next_step() {
        assert_eq!(next_step(Route::Home), "eventbooker events list");
        assert_eq!(next_step(Route::Login), "eventbooker login");
    }
}
