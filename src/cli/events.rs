//! Event command implementations

use log::debug;

use crate::cli::CommandContext;
use crate::client::{Event, EventBookerApi};
use crate::error::{Error, Result};
use crate::output::Formattable;

const LIST_FAILED: &str = "Failed to load events. Please try again later.";
const DETAIL_FAILED: &str = "Failed to load event details.";

/// Run the events list command
pub async fn list(ctx: &CommandContext) -> Result<()> {
    let events = fetch_events(&ctx.client).await?;
    events.as_slice().print(ctx.format)
}

/// Run the events show command
pub async fn show(ctx: &CommandContext, id: &str) -> Result<()> {
    let event = fetch_event(&ctx.client, id).await?;
    event.print(ctx.format)
}

/// Fetch all events. The underlying failure is only logged.
pub async fn fetch_events<A>(api: &A) -> Result<Vec<Event>>
where
    A: EventBookerApi + ?Sized,
{
    api.list_events().await.map_err(|e| {
        debug!("GET /events failed: {}", e);
        Error::Other(LIST_FAILED.to_string())
    })
}

/// Fetch one event. The underlying failure is only logged.
pub async fn fetch_event<A>(api: &A, id: &str) -> Result<Event>
where
    A: EventBookerApi + ?Sized,
{
    api.get_event(id).await.map_err(|e| {
        debug!("GET /events/{} failed: {}", id, e);
        Error::Other(DETAIL_FAILED.to_string())
    })
}
