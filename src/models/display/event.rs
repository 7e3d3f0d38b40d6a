//! Event display models

use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::client::Event;
use crate::error::Result;
use crate::output::formatters::{
    format_long_date, format_short_date, format_time, to_local, truncate,
};
use crate::output::{Formattable, json, table};

/// Message shown when a listing is empty
pub const NO_EVENTS: &str = "No events found.";

/// Description length in listing cards
const CARD_DESCRIPTION_CHARS: usize = 80;

/// Event row for table output
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct EventRow {
    #[tabled(rename = "EVENT ID")]
    pub id: String,

    #[tabled(rename = "TITLE")]
    pub title: String,

    #[tabled(rename = "DATE")]
    pub date: String,

    #[tabled(rename = "SEATS")]
    pub seats: String,
}

impl From<&Event> for EventRow {
    fn from(event: &Event) -> Self {
        let start = to_local(&event.start_at);
        Self {
            id: event.id.clone(),
            title: event.title.clone(),
            date: format!("{} {}", format_short_date(&start), format_time(&start)),
            seats: format!("{} / {}", event.seats_left(), event.capacity),
        }
    }
}

/// Listing card, one per event in pretty output
fn event_card(event: &Event) -> String {
    let start = to_local(&event.start_at);
    let mut card = String::new();

    card.push_str(&format!("{}\n", event.title.bold()));
    if !event.description.is_empty() {
        card.push_str(&format!(
            "  {}\n",
            truncate(&event.description, CARD_DESCRIPTION_CHARS)
        ));
    }
    card.push_str(&format!(
        "  {} • {}\n",
        format_short_date(&start),
        format_time(&start)
    ));
    card.push_str(&format!(
        "  {} seats left / {} total\n",
        event.seats_left(),
        event.capacity
    ));
    card.push_str(&format!(
        "  {}",
        format!("eventbooker events show {}", event.id).dimmed()
    ));

    card
}

/// Availability call to action
fn availability(event: &Event) -> String {
    if event.is_sold_out() {
        "Sold Out".red().bold().to_string()
    } else {
        "Book Now".green().bold().to_string()
    }
}

/// Full event detail for pretty output
fn event_detail(event: &Event) -> String {
    let start = to_local(&event.start_at);
    let end = to_local(&event.end_at);
    let seats_left = event.seats_left();

    let mut out = String::new();
    out.push_str(&format!("{}\n\n", event.title.bold()));
    out.push_str(&format!("  Date:   {}\n", format_long_date(&start)));
    out.push_str(&format!(
        "  Time:   {} - {}\n",
        format_time(&start),
        format_time(&end)
    ));
    out.push_str(&format!(
        "  Seats:  {} seats available ({} total)\n\n",
        seats_left, event.capacity
    ));

    out.push_str(&format!("{}\n", "Booking Information".bold()));
    out.push_str(&format!(
        "  Reserve your spot now! Only {} seats left.\n",
        seats_left
    ));
    out.push_str(&format!("  {}\n", availability(event)));

    if !event.description.is_empty() {
        out.push_str(&format!("\n{}\n", "About this Event".bold()));
        for line in event.description.lines() {
            out.push_str(&format!("  {}\n", line));
        }
    }

    out.trim_end().to_string()
}

impl Formattable for [Event] {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => json::format_json(self),
            OutputFormat::Table => {
                let rows: Vec<EventRow> = self.iter().map(EventRow::from).collect();
                Ok(table::format_table(&rows, NO_EVENTS))
            }
            OutputFormat::Pretty => {
                if self.is_empty() {
                    return Ok(NO_EVENTS.to_string());
                }
                let cards: Vec<String> = self.iter().map(event_card).collect();
                Ok(format!(
                    "{}\n\n{}",
                    "Upcoming Events".bold(),
                    cards.join("\n\n")
                ))
            }
        }
    }
}

impl Formattable for Event {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => json::format_json(self),
            OutputFormat::Table => Ok(table::format_table(&[EventRow::from(self)], NO_EVENTS)),
            OutputFormat::Pretty => Ok(event_detail(self)),
        }
    }
}
