//! Reusable formatting utilities for CLI output
//!
//! Event times arrive in UTC and are shown in the user's local timezone.

use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone, Utc};

/// Convert a UTC timestamp to local time
pub fn to_local(dt: &DateTime<Utc>) -> DateTime<Local> {
    dt.with_timezone(&Local)
}

/// Short date for listings.
///
/// # Example output
/// `Wed, Jan 15, 2025`
pub fn format_short_date<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    dt.format("%a, %b %-d, %Y").to_string()
}

/// Long date for detail views.
///
/// # Example output
/// `Wednesday, January 15, 2025`
pub fn format_long_date<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    dt.format("%A, %B %-d, %Y").to_string()
}

/// Hour and minute, 24-hour clock
pub fn format_time<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    dt.format("%H:%M").to_string()
}

/// Shorten `s` to at most `max_chars` characters, ending in `...` when cut
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", kept.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 15, 18, 5, 0).unwrap()
    }

    #[test]
    fn test_short_date() {
        assert_eq!(format_short_date(&sample()), "Wed, Jan 15, 2025");
    }

    #[test]
    fn test_long_date() {
        assert_eq!(format_long_date(&sample()), "Wednesday, January 15, 2025");
    }

    #[test]
    fn test_time() {
        assert_eq!(format_time(&sample()), "18:05");
    }

    #[test]
    fn test_to_local_preserves_instant() {
        let utc = sample();
        assert_eq!(to_local(&utc).timestamp(), utc.timestamp());
    }

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate("Talks", 10), "Talks");
    }

    #[test]
    fn test_truncate_long_string() {
        assert_eq!(truncate("A very long description", 10), "A very...");
    }

    #[test]
    fn test_truncate_is_char_aware() {
        assert_eq!(truncate("Zoë Ångström ist hier", 8), "Zoë Å...");
    }
}
