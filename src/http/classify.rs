//! Response status classification

use crate::auth::SessionStore;
use crate::error::{Error, Result};
use crate::guard::{Navigator, Route};
use crate::http::pipeline::{Interceptor, Next};
use crate::http::request::{ApiRequest, ApiResponse};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::sync::Arc;

/// Surface shown the rate-limit notice when the API answers 429
pub trait ThrottleNotifier: Send + Sync {
    fn notify_rate_limited(&self, message: &str);
}

/// Reacts to 401 and 429 after the inner stages return.
///
/// A 401 terminates the local session and redirects to the admin login
/// route; a 429 only surfaces a throttle notice. The two branches are
/// mutually exclusive by status code and both re-raise the failure to
/// the caller. Every other status passes through unchanged.
pub struct StatusClassifier {
    store: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn ThrottleNotifier>,
}

impl StatusClassifier {
    pub fn new(
        store: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn ThrottleNotifier>,
    ) -> Self {
        Self {
            store,
            navigator,
            notifier,
        }
    }
}

#[async_trait]
impl Interceptor for StatusClassifier {
    async fn intercept(&self, request: ApiRequest, next: Next<'_>) -> Result<ApiResponse> {
        let response = next.run(request).await?;

        match response.status {
            StatusCode::UNAUTHORIZED => {
                tracing::warn!("Received 401, terminating local session");
                self.store.clear();
                self.navigator.redirect(Route::AdminLogin);
                Err(Error::Unauthorized {
                    message: response
                        .error_message()
                        .unwrap_or_else(|| "Sessão expirada ou inválida".to_string()),
                })
            }
            StatusCode::TOO_MANY_REQUESTS => {
                let message = response.error_message().unwrap_or_else(|| {
                    "Você fez muitas requisições recentemente. Aguarde alguns instantes e tente novamente."
                        .to_string()
                });
                self.notifier.notify_rate_limited(&message);
                Err(Error::RateLimited { message })
            }
            _ => Ok(response),
        }
    }
}
