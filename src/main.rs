//! EventBooker CLI - browse events and manage your session from the terminal

use clap::{CommandFactory, Parser};

mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;
mod session;
mod storage;

use cli::{Cli, CommandContext, Commands, EventCommands, GlobalOptions};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Version => {
            println!("eventbooker version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Completion { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "eventbooker",
                &mut std::io::stdout(),
            );
            Ok(())
        }
        Commands::Login { email, password } => {
            let mut ctx = CommandContext::new(&opts)?;
            cli::auth::run_login(&mut ctx, email, password).await
        }
        Commands::Register {
            name,
            email,
            password,
        } => {
            let ctx = CommandContext::new(&opts)?;
            cli::auth::run_register(&ctx, name, email, password).await
        }
        Commands::Logout => {
            let mut ctx = CommandContext::new(&opts)?;
            cli::auth::run_logout(&mut ctx)
        }
        Commands::Whoami => cli::whoami::run(&CommandContext::new(&opts)?),
        Commands::Events(event_cmd) => {
            let ctx = CommandContext::new(&opts)?;
            match event_cmd {
                EventCommands::List => cli::events::list(&ctx).await,
                EventCommands::Show { id } => cli::events::show(&ctx, &id).await,
            }
        }
    }
}

/// Logs go to stderr. `RUST_LOG` wins over the `--debug` default.
fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}
