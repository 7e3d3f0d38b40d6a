//! EventBooker API client
//!
//! A thin wrapper over the REST API: it attaches the bearer token when one is
//! held and forwards error responses to the caller as [`ApiError`]s carrying
//! the server's message.
//!
//! [`ApiError`]: crate::error::ApiError

use async_trait::async_trait;

use crate::error::Result;

pub mod eventbooker;
#[cfg(test)]
pub mod mock;
pub mod models;

pub use eventbooker::EventBookerClient;
#[cfg(test)]
pub use mock::MockEventBookerClient;
pub use models::{Event, LoginRequest, LoginResponse, RegisterRequest};

/// Operations offered by the EventBooker API
#[async_trait]
pub trait EventBookerApi: Send + Sync {
    /// Exchange credentials for an access token (`POST /auth/login`)
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse>;

    /// Create an account (`POST /auth/register`)
    async fn register(&self, request: &RegisterRequest) -> Result<()>;

    /// List all events (`GET /events`)
    async fn list_events(&self) -> Result<Vec<Event>>;

    /// Fetch a single event (`GET /events/{id}`)
    async fn get_event(&self, id: &str) -> Result<Event>;
}
