//! Whoami command implementation

use crate::cli::CommandContext;
use crate::error::Result;
use crate::models::SessionDisplay;
use crate::output::Formattable;

/// Run the whoami command
pub fn run(ctx: &CommandContext) -> Result<()> {
    display(ctx).print(ctx.format)
}

fn display(ctx: &CommandContext) -> SessionDisplay {
    SessionDisplay {
        session: ctx.session.snapshot(),
        storage: ctx.session.store().path().display().to_string(),
        api_url: ctx.api_url.clone(),
    }
}
