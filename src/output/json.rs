//! JSON output formatting

use chrono::Utc;
use serde::Serialize;

use crate::error::Result;

/// Envelope for JSON output: the payload plus when and by which version it
/// was produced
#[derive(Debug, Serialize)]
pub struct JsonOutput<'a, T: ?Sized> {
    pub data: &'a T,
    pub meta: Metadata,
}

#[derive(Debug, Serialize)]
pub struct Metadata {
    /// RFC 3339 timestamp of the response
    pub timestamp: String,

    /// CLI version
    pub version: &'static str,
}

impl<'a, T: ?Sized> JsonOutput<'a, T> {
    pub fn new(data: &'a T) -> Self {
        Self {
            data,
            meta: Metadata {
                timestamp: Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION"),
            },
        }
    }
}

/// Format data as pretty-printed JSON inside the output envelope
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(&JsonOutput::new(data))?)
}
