//! EventBooker API client implementation

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as HttpClient, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;

use super::models::{ErrorBody, Event, LoginRequest, LoginResponse, RegisterRequest};
use super::EventBookerApi;
use crate::error::{ApiError, ConfigError, Result};

/// Request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the EventBooker API
pub struct EventBookerClient {
    http: HttpClient,
    base_url: String,
    token: Option<String>,
}

impl EventBookerClient {
    /// Create a client for `base_url`, optionally carrying a bearer token
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `/events/{id}` with `id` escaped as a single path segment
    fn event_url(&self, id: &str) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ConfigError::Invalid(format!("API URL '{}': {}", self.base_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| {
                ConfigError::Invalid(format!("API URL '{}' cannot take a path", self.base_url))
            })?
            .pop_if_empty()
            .push("events")
            .push(id);
        Ok(url)
    }

    /// Attach credentials, send, and map the status
    async fn send(&self, request: RequestBuilder) -> Result<reqwest::Response> {
        let request = match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await.map_err(ApiError::from)?;
        let status = response.status();
        debug!("{} {}", status.as_u16(), response.url());

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(error_for_status(status, &body).into())
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = self.send(request).await?;
        let data = response.json::<T>().await.map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse response: {}", e))
        })?;
        Ok(data)
    }
}

/// Map a failed response to an [`ApiError`], keeping the server's message.
///
/// Bodies without a JSON `message` (proxy error pages and the like) are only
/// logged; the error then carries an empty message.
fn error_for_status(status: StatusCode, body: &str) -> ApiError {
    let message = server_message(body).unwrap_or_else(|| {
        debug!("Error response without message, body: {}", body.trim());
        String::new()
    });

    match status {
        StatusCode::UNAUTHORIZED => {
            // No refresh flow: the token is trusted until the user logs in again
            debug!("Request unauthorized: {}", message);
            ApiError::Unauthorized(message)
        }
        StatusCode::FORBIDDEN => ApiError::Forbidden(message),
        StatusCode::NOT_FOUND => ApiError::NotFound(message),
        StatusCode::CONFLICT => ApiError::Conflict(message),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => ApiError::BadRequest(message),
        status if status.is_server_error() => ApiError::ServerError(message),
        status => ApiError::UnexpectedStatus {
            status: status.as_u16(),
            message,
        },
    }
}

/// Extract `message` from a JSON error body
fn server_message(body: &str) -> Option<String> {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            message: Some(message),
        }) => Some(message.into_text()),
        _ => None,
    }
}

#[async_trait]
impl EventBookerApi for EventBookerClient {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse> {
        let builder = self.http.post(self.url("/auth/login")).json(request);
        self.send_json(builder).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<()> {
        let builder = self.http.post(self.url("/auth/register")).json(request);
        self.send(builder).await?;
        Ok(())
    }

    async fn list_events(&self) -> Result<Vec<Event>> {
        let builder = self.http.get(self.url("/events"));
        self.send_json(builder).await
    }

    async fn get_event(&self, id: &str) -> Result<Event> {
        let builder = self.http.get(self.event_url(id)?);
        self.send_json(builder).await
    }
}
