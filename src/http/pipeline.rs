//! The ordered interceptor pipeline and its terminal transport
//!
//! Every outgoing call passes through a fixed list of stages assembled
//! by [`PipelineBuilder`]; stage order is always explicit, never a
//! side effect of registration.

use crate::error::Result;
use crate::http::request::{ApiRequest, ApiResponse};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// A pipeline stage that observes and may modify a request or its response
#[async_trait]
pub trait Interceptor: Send + Sync {
    /// Handle the request, either short-circuiting with a response or
    /// delegating to the remaining stages via `next`
    async fn intercept(&self, request: ApiRequest, next: Next<'_>) -> Result<ApiResponse>;
}

/// The remaining stages of the pipeline, ending at the transport
pub struct Next<'a> {
    chain: &'a [Arc<dyn Interceptor>],
    transport: &'a HttpTransport,
}

impl Next<'_> {
    pub async fn run(self, request: ApiRequest) -> Result<ApiResponse> {
        match self.chain.split_first() {
            Some((head, rest)) => {
                head.intercept(
                    request,
                    Next {
                        chain: rest,
                        transport: self.transport,
                    },
                )
                .await
            }
            None => self.transport.send(request).await,
        }
    }
}

/// Terminal stage: performs the real network round-trip
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        tracing::debug!("{} {}", request.method, request.url);

        let mut builder = self
            .client
            .request(request.method, &request.url)
            .headers(request.headers);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;
        let body = if text.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).unwrap_or(Value::String(text))
        };

        Ok(ApiResponse::new(status, body))
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

/// A fixed, explicitly ordered interceptor pipeline
pub struct Pipeline {
    interceptors: Vec<Arc<dyn Interceptor>>,
    transport: HttpTransport,
}

impl Pipeline {
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder {
            interceptors: Vec::new(),
        }
    }

    /// Run a request through every stage in order, then the transport
    pub async fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
        Next {
            chain: &self.interceptors,
            transport: &self.transport,
        }
        .run(request)
        .await
    }
}

/// Builds a pipeline from an explicit stage list; stages run in push order
pub struct PipelineBuilder {
    interceptors: Vec<Arc<dyn Interceptor>>,
}

impl PipelineBuilder {
    pub fn with(mut self, interceptor: Arc<dyn Interceptor>) -> Self {
        self.interceptors.push(interceptor);
        self
    }

    pub fn build(self) -> Pipeline {
        Pipeline {
            interceptors: self.interceptors,
            transport: HttpTransport::new(),
        }
    }
}
