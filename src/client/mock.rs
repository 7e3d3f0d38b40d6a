//! Mock EventBooker API client for testing
//!
//! Provides a mock implementation of [`EventBookerApi`] for unit testing the
//! command handlers without making real API calls.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::EventBookerApi;
use super::models::{Event, LoginRequest, LoginResponse, RegisterRequest};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Configure expected responses via builder methods, then use in tests.
///
/// # Example
/// ```ignore
/// let mock = MockEventBookerClient::new()
///     .with_token("h.p.s")
///     .await;
///
/// let response = mock.login(&request).await?;
/// assert_eq!(response.access_token, "h.p.s");
/// ```
#[derive(Default)]
pub struct MockEventBookerClient {
    /// Token returned from login
    token: Arc<Mutex<Option<String>>>,
    /// Events returned from list_events/get_event
    events: Arc<Mutex<Vec<Event>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Registration payloads received
    registrations: Arc<Mutex<Vec<RegisterRequest>>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub login: usize,
    pub register: usize,
    pub list_events: usize,
    pub get_event: usize,
}

impl CallCounts {
    /// Get total number of API calls made.
    pub fn total(&self) -> usize {
        self.login + self.register + self.list_events + self.get_event
    }
}

impl MockEventBookerClient {
    /// Create a new mock client with default (empty) responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the access token returned from login.
    pub async fn with_token(self, token: impl Into<String>) -> Self {
        *self.token.lock().await = Some(token.into());
        self
    }

    /// Configure events returned from list_events and get_event.
    pub async fn with_events(self, events: Vec<Event>) -> Self {
        *self.events.lock().await = events;
        self
    }

    /// Configure an error to return on the next API call.
    /// The error is consumed after one use.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Registration requests received so far.
    pub async fn registrations(&self) -> Vec<RegisterRequest> {
        self.registrations.lock().await.clone()
    }

    async fn check_error(&self) -> Result<()> {
        let mut error = self.error.lock().await;
        if let Some(e) = error.take() {
            return Err(e.into());
        }
        Ok(())
    }
}

#[async_trait]
impl EventBookerApi for MockEventBookerClient {
    async fn login(&self, _request: &LoginRequest) -> Result<LoginResponse> {
        self.call_count.lock().await.login += 1;
        self.check_error().await?;

        let token = self.token.lock().await.clone();
        Ok(LoginResponse {
            access_token: token.unwrap_or_else(|| "mock.token.value".to_string()),
        })
    }

    async fn register(&self, request: &RegisterRequest) -> Result<()> {
        self.call_count.lock().await.register += 1;
        self.check_error().await?;

        self.registrations.lock().await.push(request.clone());
        Ok(())
    }

    async fn list_events(&self) -> Result<Vec<Event>> {
        self.call_count.lock().await.list_events += 1;
        self.check_error().await?;

        Ok(self.events.lock().await.clone())
    }

    async fn get_event(&self, id: &str) -> Result<Event> {
        self.call_count.lock().await.get_event += 1;
        self.check_error().await?;

        self.events
            .lock()
            .await
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound("Event not found".to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::models::fixtures::event;

    #[tokio::test]
    async fn test_error_is_consumed_once() {
        let mock = MockEventBookerClient::new()
            .with_error(ApiError::ServerError("boom".to_string()))
            .await;

        assert!(mock.list_events().await.is_err());
        assert!(mock.list_events().await.is_ok());
        assert_eq!(mock.call_counts().await.list_events, 2);
    }

    #[tokio::test]
    async fn test_get_event_by_id() {
        let mock = MockEventBookerClient::new()
            .with_events(vec![event("a", "Alpha", 10, 0), event("b", "Beta", 5, 5)])
            .await;

        assert_eq!(mock.get_event("b").await.unwrap().title, "Beta");
        assert!(mock.get_event("zzz").await.is_err());
        assert_eq!(mock.call_counts().await.total(), 2);
    }
}
