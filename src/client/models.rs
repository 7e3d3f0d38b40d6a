//! EventBooker API data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Credentials exchanged for an access token
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response from `POST /auth/login`
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    /// Bearer token issued by the server
    pub access_token: String,
}

/// Payload for `POST /auth/register`
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Event resource
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Event ID
    pub id: String,

    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Start time
    pub start_at: DateTime<Utc>,

    /// End time
    pub end_at: DateTime<Utc>,

    /// Total number of seats
    pub capacity: u32,

    /// Seats already booked
    #[serde(default)]
    pub seats_booked: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Event {
    /// Seats still available. Overbooked events report zero.
    pub fn seats_left(&self) -> u32 {
        self.capacity.saturating_sub(self.seats_booked)
    }

    pub fn is_sold_out(&self) -> bool {
        self.seats_left() == 0
    }
}

/// Error body returned by the API on failure.
///
/// `message` is a string for most errors, and a list of strings for
/// validation failures.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<ErrorMessage>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ErrorMessage {
    Single(String),
    Many(Vec<String>),
}

impl ErrorMessage {
    pub fn into_text(self) -> String {
        match self {
            ErrorMessage::Single(msg) => msg,
            ErrorMessage::Many(msgs) => msgs.join("; "),
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use chrono::TimeZone;

    /// Event with the given seat numbers, starting 2025-01-15 18:00 UTC
    pub fn event(id: &str, title: &str, capacity: u32, seats_booked: u32) -> Event {
        Event {
            id: id.to_string(),
            title: title.to_string(),
            description: format!("All about {}", title),
            start_at: Utc.with_ymd_and_hms(2025, 1, 15, 18, 0, 0).unwrap(),
            end_at: Utc.with_ymd_and_hms(2025, 1, 15, 20, 30, 0).unwrap(),
            capacity,
            seats_booked,
            created_at: None,
        }
    }
}
