//! Bearer token attachment

use crate::auth::SessionStore;
use crate::error::Result;
use crate::http::pipeline::{Interceptor, Next};
use crate::http::request::{ApiRequest, ApiResponse};
use async_trait::async_trait;
use reqwest::header::{HeaderValue, AUTHORIZATION};
use std::sync::Arc;

/// Attaches `Authorization: Bearer <token>` to API calls.
///
/// Login and refresh stay credential-free, and a header the caller set
/// explicitly is never overwritten.
pub struct BearerAuth {
    store: Arc<dyn SessionStore>,
}

impl BearerAuth {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    fn wants_token(url: &str) -> bool {
        url.contains("/api/") && !url.contains("/auth/login") && !url.contains("/auth/refresh")
    }
}

#[async_trait]
impl Interceptor for BearerAuth {
    async fn intercept(&self, mut request: ApiRequest, next: Next<'_>) -> Result<ApiResponse> {
        if let Some(token) = self.store.token() {
            if Self::wants_token(&request.url) {
                match HeaderValue::from_str(&format!("Bearer {}", token)) {
                    Ok(value) => request.set_header_if_absent(AUTHORIZATION, value),
                    Err(_) => tracing::warn!("Stored token is not a valid header value"),
                }
            }
        }
        next.run(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wants_token_for_api_calls() {
        assert!(BearerAuth::wants_token("http://localhost:8080/api/admin/products"));
        assert!(BearerAuth::wants_token("http://localhost:8080/api/products"));
    }

    #[test]
    fn test_login_and_refresh_are_excluded() {
        assert!(!BearerAuth::wants_token("http://localhost:8080/api/auth/login"));
        assert!(!BearerAuth::wants_token("http://localhost:8080/api/auth/refresh"));
    }

    #[test]
    fn test_non_api_urls_are_excluded() {
        assert!(!BearerAuth::wants_token("http://example.com/health"));
    }
}
