//! Login, logout and authentication-state queries

use crate::api::models::LoginResponse;
use crate::auth::store::{SessionStore, StoredUser};
use crate::auth::token::check_expiry;
use crate::error::{Error, Result};
use crate::http::{ApiRequest, Pipeline};
use serde_json::json;
use std::sync::Arc;

/// Orchestrates the admin session: one login call persists it, logout
/// clears it unconditionally, and the state queries stay pure — eviction
/// of an expired session is its own explicit operation.
pub struct AuthManager {
    store: Arc<dyn SessionStore>,
    pipeline: Arc<Pipeline>,
    base_url: String,
}

impl AuthManager {
    pub fn new(base_url: impl Into<String>, store: Arc<dyn SessionStore>, pipeline: Arc<Pipeline>) -> Self {
        Self {
            store,
            pipeline,
            base_url: base_url.into(),
        }
    }

    /// Authenticate against the API and persist the returned session.
    ///
    /// A 2xx response without a token writes nothing and surfaces as
    /// [`Error::MissingToken`]; any failure leaves the store untouched.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let request = ApiRequest::post(
            format!("{}/auth/login", self.base_url),
            json!({ "email": email, "password": password }),
        );
        let response = self.pipeline.execute(request).await?.into_result()?;
        let login: LoginResponse = response.json()?;

        match login.token.as_deref() {
            Some(token) if !token.is_empty() => {
                self.store.save(
                    token,
                    login.refresh_token.as_deref(),
                    &StoredUser {
                        name: login.name.clone(),
                        email: login.email.clone(),
                    },
                );
                tracing::info!("Logged in as {}", login.email);
                Ok(login)
            }
            _ => {
                tracing::warn!("Login response carried no access token, session not persisted");
                Err(Error::MissingToken)
            }
        }
    }

    /// Best-effort server notification, then an unconditional local clear.
    ///
    /// Never fails: a rejected or unreachable logout endpoint only gets a
    /// debug log. Without a stored token no network call is made.
    pub async fn logout(&self) {
        if self.store.token().is_some() {
            let request = ApiRequest::post(format!("{}/auth/logout", self.base_url), json!({}));
            if let Err(e) = self.pipeline.execute(request).await {
                tracing::debug!("Logout notification failed: {}", e);
            }
        }
        self.store.clear();
        tracing::info!("Session cleared");
    }

    /// Pure query: a token is stored and its expiry is in the future.
    pub fn is_authenticated(&self) -> bool {
        match self.store.token() {
            Some(token) => check_expiry(&token),
            None => false,
        }
    }

    /// Clears the stored session when its token is no longer valid.
    /// Callers wanting eager eviction run this before [`Self::is_authenticated`].
    pub fn evict_if_expired(&self) {
        if let Some(token) = self.store.token() {
            if !check_expiry(&token) {
                tracing::debug!("Stored token expired, clearing session");
                self.store.clear();
            }
        }
    }

    pub fn token(&self) -> Option<String> {
        self.store.token()
    }

    pub fn user(&self) -> Option<StoredUser> {
        self.store.user()
    }
}
