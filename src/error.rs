//! Error types for the EventBooker CLI

use thiserror::Error;

/// Result type alias for EventBooker operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("{0}")]
    Other(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

/// Errors returned by the remote EventBooker API.
///
/// Each variant carries the message the server sent back, so views can show
/// it to the user unchanged.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Access denied: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// The message reported by the server, if the error came from an HTTP response.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Unauthorized(msg)
            | ApiError::Forbidden(msg)
            | ApiError::NotFound(msg)
            | ApiError::Conflict(msg)
            | ApiError::BadRequest(msg)
            | ApiError::ServerError(msg)
            | ApiError::UnexpectedStatus { message: msg, .. } => {
                if msg.is_empty() {
                    None
                } else {
                    Some(msg)
                }
            }
            ApiError::Network(_) | ApiError::InvalidResponse(_) => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Session state errors
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Malformed access token: {0}")]
    MalformedToken(#[from] TokenError),
}

/// Reasons a bearer token could not be decoded into an identity
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("expected 3 dot-separated segments, found {0}")]
    SegmentCount(usize),

    #[error("payload is not valid base64url: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("payload is not an object with a string or numeric `sub` claim")]
    MissingSubject,
}

/// Local storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Could not determine a data directory for local storage")]
    NoDataDir,

    #[error("Storage I/O error: {0}")]
    Io(String),

    #[error("Storage database error: {0}")]
    Database(#[from] rusqlite::Error),
}
