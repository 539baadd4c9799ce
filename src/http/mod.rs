//! HTTP interceptor pipeline

pub mod auth;
pub mod classify;
pub mod pipeline;
pub mod request;

pub use auth::BearerAuth;
pub use classify::{StatusClassifier, ThrottleNotifier};
pub use pipeline::{HttpTransport, Interceptor, Next, Pipeline, PipelineBuilder};
pub use request::{ApiRequest, ApiResponse};

use crate::auth::SessionStore;
use crate::config::Config;
use crate::guard::Navigator;
use crate::mock::MockResponder;
use std::sync::Arc;

/// Assemble the fixed request pipeline: status classification outermost,
/// then the mock responder when enabled, then bearer attachment, then
/// the wire.
pub fn build_pipeline(
    config: &Config,
    store: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn ThrottleNotifier>,
) -> Pipeline {
    let mut builder = Pipeline::builder().with(Arc::new(StatusClassifier::new(
        store.clone(),
        navigator,
        notifier,
    )));

    if config.api.use_mock {
        tracing::info!("Mock API enabled, serving canned responses");
        builder = builder.with(Arc::new(MockResponder::new()));
    }

    builder.with(Arc::new(BearerAuth::new(store))).build()
}
