//! Client-side session state
//!
//! The [`SessionManager`] is the single source of truth for whether the user
//! is logged in. It derives an [`Identity`] from the bearer token kept in
//! local storage and exposes exactly two mutations: [`SessionManager::login`]
//! and [`SessionManager::logout`].
//!
//! Logout is client-only. The remote API is not told, so an evicted token
//! stays valid server-side until it expires on its own.

mod token;

#[cfg(test)]
pub(crate) use token::test_tokens;
use token::decode_identity;

use log::{debug, error, info};
use serde::Serialize;

use crate::error::{Result, SessionError};
use crate::storage::KeyValueStore;

/// Storage key holding the raw bearer token
pub const TOKEN_KEY: &str = "accessToken";

/// Identity decoded from a token payload. Display only; authorization
/// decisions happen server-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    /// Subject (`sub`) claim
    pub id: String,

    /// Email claim, if present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Display name, `"User"` when the token has none
    pub name: String,
}

/// Where a view should go after a session mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    /// Application home (event listing)
    Home,
    /// Login form
    Login,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Login => "/login",
        }
    }
}

/// Read-only copy of the session handed to views
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub identity: Option<Identity>,
    pub is_authenticated: bool,
    pub is_loading: bool,
}

/// Owns the persisted token and the identity derived from it.
///
/// Invariant: `identity` is `Some` exactly when `token` is `Some` and decodes.
/// A token that fails to decode never stays in storage.
pub struct SessionManager<S: KeyValueStore> {
    store: S,
    token: Option<String>,
    identity: Option<Identity>,
    loading: bool,
}

impl<S: KeyValueStore> SessionManager<S> {
    /// Create an uninitialized manager. `is_loading()` is true until
    /// [`initialize`](Self::initialize) runs.
    pub fn new(store: S) -> Self {
        Self {
            store,
            token: None,
            identity: None,
            loading: true,
        }
    }

    /// Create a manager and restore any persisted session.
    pub fn open(store: S) -> Result<Self> {
        let mut session = Self::new(store);
        session.initialize()?;
        Ok(session)
    }

    /// Restore the session from storage. Runs once; later calls do nothing.
    ///
    /// A stored token that fails to decode is evicted and the session starts
    /// anonymous. Only storage failures are reported as errors.
    pub fn initialize(&mut self) -> Result<()> {
        if !self.loading {
            debug!("Session already initialized");
            return Ok(());
        }

        if let Some(stored) = self.store.get_item(TOKEN_KEY)? {
            match decode_identity(&stored) {
                Ok(identity) => {
                    debug!("Restored session for {}", identity.id);
                    self.token = Some(stored);
                    self.identity = Some(identity);
                }
                Err(e) => {
                    info!("Failed to decode stored token, discarding it: {}", e);
                    self.store.remove_item(TOKEN_KEY)?;
                    self.clear();
                }
            }
        } else {
            debug!("No stored session");
        }

        self.loading = false;
        Ok(())
    }

    /// Adopt a freshly issued token.
    ///
    /// The token is decoded first and persisted only if it decodes. On
    /// success the caller should navigate to the returned route. A token that
    /// does not decode ends the current session, evicts any stored token and
    /// is reported as [`SessionError::MalformedToken`].
    pub fn login(&mut self, token: &str) -> Result<Route> {
        let identity = match decode_identity(token) {
            Ok(identity) => identity,
            Err(e) => {
                error!("Failed to decode token: {}", e);
                self.clear();
                self.store.remove_item(TOKEN_KEY)?;
                return Err(SessionError::MalformedToken(e).into());
            }
        };

        self.store.set_item(TOKEN_KEY, token)?;
        debug!("Logged in as {}", identity.id);
        self.token = Some(token.to_string());
        self.identity = Some(identity);
        Ok(Route::Home)
    }

    /// Forget the session. Safe to call when already logged out.
    pub fn logout(&mut self) -> Result<Route> {
        self.clear();
        self.store.remove_item(TOKEN_KEY)?;
        debug!("Logged out");
        Ok(Route::Login)
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    /// Raw bearer token, for attaching to API requests
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            identity: self.identity.clone(),
            is_authenticated: self.is_authenticated(),
            is_loading: self.is_loading(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give back the underlying store, ending this session's ownership of it
    #[allow(dead_code)]
    pub fn into_store(self) -> S {
        self.store
    }

    fn clear(&mut self) {
        self.token = None;
        self.identity = None;
    }
}
