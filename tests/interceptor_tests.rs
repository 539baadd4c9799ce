//! Interceptor pipeline tests: bearer attachment rules and response
//! status classification, with a capturing terminal stage instead of a
//! real transport.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::StatusCode;
use serde_json::{json, Value};

use trincashop::auth::{MemorySessionStore, SessionStore, StoredUser};
use trincashop::error::{Error, Result};
use trincashop::guard::{Navigator, Route};
use trincashop::http::{
    ApiRequest, ApiResponse, BearerAuth, Interceptor, Next, Pipeline, StatusClassifier,
    ThrottleNotifier,
};

/// Terminal stage that records every request it sees and answers with a
/// configurable response
struct Capture {
    status: StatusCode,
    body: Value,
    seen: Mutex<Vec<ApiRequest>>,
}

impl Capture {
    fn ok() -> Self {
        Self::with(StatusCode::OK, Value::Null)
    }

    fn with(status: StatusCode, body: Value) -> Self {
        Self {
            status,
            body,
            seen: Mutex::new(Vec::new()),
        }
    }

    fn requests(&self) -> Vec<ApiRequest> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl Interceptor for Capture {
    async fn intercept(&self, request: ApiRequest, _next: Next<'_>) -> Result<ApiResponse> {
        self.seen.lock().unwrap().push(request);
        Ok(ApiResponse::new(self.status, self.body.clone()))
    }
}

#[derive(Default)]
struct RecordingNavigator {
    redirects: AtomicUsize,
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, route: Route) {
        assert_eq!(route, Route::AdminLogin);
        self.redirects.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Default)]
struct RecordingNotifier {
    notices: Mutex<Vec<String>>,
}

impl ThrottleNotifier for RecordingNotifier {
    fn notify_rate_limited(&self, message: &str) {
        self.notices.lock().unwrap().push(message.to_string());
    }
}

fn store_with_token(token: &str) -> Arc<MemorySessionStore> {
    let store = Arc::new(MemorySessionStore::new());
    store.save(
        token,
        None,
        &StoredUser {
            name: "Administrador Trinca".to_string(),
            email: "admin@trincashop.com".to_string(),
        },
    );
    store
}

fn bearer_pipeline(store: Arc<MemorySessionStore>, capture: Arc<Capture>) -> Pipeline {
    Pipeline::builder()
        .with(Arc::new(BearerAuth::new(store)))
        .with(capture)
        .build()
}

#[tokio::test]
async fn test_bearer_attached_to_api_calls() {
    let capture = Arc::new(Capture::ok());
    let pipeline = bearer_pipeline(store_with_token("tok123"), capture.clone());

    pipeline
        .execute(ApiRequest::get("http://localhost:8080/api/admin/products"))
        .await
        .unwrap();

    let seen = capture.requests();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].headers[AUTHORIZATION], "Bearer tok123");
}

#[tokio::test]
async fn test_bearer_skips_login_and_refresh() {
    let capture = Arc::new(Capture::ok());
    let pipeline = bearer_pipeline(store_with_token("tok123"), capture.clone());

    pipeline
        .execute(ApiRequest::post(
            "http://localhost:8080/api/auth/login",
            json!({}),
        ))
        .await
        .unwrap();
    pipeline
        .execute(ApiRequest::post(
            "http://localhost:8080/api/auth/refresh",
            json!({}),
        ))
        .await
        .unwrap();

    for request in capture.requests() {
        assert!(!request.headers.contains_key(AUTHORIZATION));
    }
}

#[tokio::test]
async fn test_bearer_without_stored_token_adds_nothing() {
    let capture = Arc::new(Capture::ok());
    let pipeline = bearer_pipeline(Arc::new(MemorySessionStore::new()), capture.clone());

    pipeline
        .execute(ApiRequest::get("http://localhost:8080/api/products"))
        .await
        .unwrap();

    assert!(!capture.requests()[0].headers.contains_key(AUTHORIZATION));
}

#[tokio::test]
async fn test_bearer_never_overwrites_caller_header() {
    let capture = Arc::new(Capture::ok());
    let pipeline = bearer_pipeline(store_with_token("tok123"), capture.clone());

    let mut request = ApiRequest::get("http://localhost:8080/api/admin/products");
    request
        .headers
        .insert(AUTHORIZATION, HeaderValue::from_static("Bearer custom"));
    pipeline.execute(request).await.unwrap();

    assert_eq!(capture.requests()[0].headers[AUTHORIZATION], "Bearer custom");
}

fn classifier_pipeline(
    store: Arc<MemorySessionStore>,
    navigator: Arc<RecordingNavigator>,
    notifier: Arc<RecordingNotifier>,
    terminal: Arc<Capture>,
) -> Pipeline {
    Pipeline::builder()
        .with(Arc::new(StatusClassifier::new(store, navigator, notifier)))
        .with(terminal)
        .build()
}

#[tokio::test]
async fn test_classifier_401_clears_session_and_redirects_once() {
    let store = store_with_token("tok123");
    let navigator = Arc::new(RecordingNavigator::default());
    let notifier = Arc::new(RecordingNotifier::default());
    let pipeline = classifier_pipeline(
        store.clone(),
        navigator.clone(),
        notifier.clone(),
        Arc::new(Capture::with(
            StatusCode::UNAUTHORIZED,
            json!({ "erro": "Token inválido" }),
        )),
    );

    let result = pipeline
        .execute(ApiRequest::get("http://localhost:8080/api/admin/orders"))
        .await;

    match result {
        Err(Error::Unauthorized { message }) => assert_eq!(message, "Token inválido"),
        other => panic!("Unexpected result: {:?}", other.map(|r| r.status)),
    }
    assert_eq!(store.token(), None);
    assert_eq!(navigator.redirects.load(Ordering::SeqCst), 1);
    assert!(notifier.notices.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_classifier_401_default_message() {
    let store = store_with_token("tok123");
    let navigator = Arc::new(RecordingNavigator::default());
    let notifier = Arc::new(RecordingNotifier::default());
    let pipeline = classifier_pipeline(
        store,
        navigator,
        notifier,
        Arc::new(Capture::with(StatusCode::UNAUTHORIZED, Value::Null)),
    );

    let result = pipeline
        .execute(ApiRequest::get("http://localhost:8080/api/admin/orders"))
        .await;

    match result {
        Err(Error::Unauthorized { message }) => {
            assert_eq!(message, "Sessão expirada ou inválida")
        }
        other => panic!("Unexpected result: {:?}", other.map(|r| r.status)),
    }
}

#[tokio::test]
async fn test_classifier_429_notifies_without_touching_session() {
    let store = store_with_token("tok123");
    let navigator = Arc::new(RecordingNavigator::default());
    let notifier = Arc::new(RecordingNotifier::default());
    let pipeline = classifier_pipeline(
        store.clone(),
        navigator.clone(),
        notifier.clone(),
        Arc::new(Capture::with(StatusCode::TOO_MANY_REQUESTS, Value::Null)),
    );

    let result = pipeline
        .execute(ApiRequest::get("http://localhost:8080/api/products"))
        .await;

    assert!(matches!(result, Err(Error::RateLimited { .. })));
    // Session and navigation untouched, exactly one notice
    assert_eq!(store.token().as_deref(), Some("tok123"));
    assert_eq!(navigator.redirects.load(Ordering::SeqCst), 0);
    let notices = notifier.notices.lock().unwrap();
    assert_eq!(notices.len(), 1);
    assert!(notices[0].contains("muitas requisições"));
}

#[tokio::test]
async fn test_classifier_passes_other_statuses_through() {
    let store = store_with_token("tok123");
    let navigator = Arc::new(RecordingNavigator::default());
    let notifier = Arc::new(RecordingNotifier::default());
    let pipeline = classifier_pipeline(
        store.clone(),
        navigator.clone(),
        notifier.clone(),
        Arc::new(Capture::with(
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({ "erro": "Falha interna" }),
        )),
    );

    let response = pipeline
        .execute(ApiRequest::get("http://localhost:8080/api/products"))
        .await
        .unwrap();

    // The classifier is not a general error handler: a 500 reaches the
    // caller as a response, ready for into_result
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(store.token().as_deref(), Some("tok123"));
    assert_eq!(navigator.redirects.load(Ordering::SeqCst), 0);
    assert!(notifier.notices.lock().unwrap().is_empty());
}
