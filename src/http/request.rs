//! Request and response descriptors passed through the interceptor pipeline

use crate::error::{Error, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// An outgoing API call before it reaches the network (or the mock).
///
/// Interceptors only ever add headers; existing entries are never
/// removed or overwritten.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::GET, url)
    }

    pub fn post(url: impl Into<String>, body: Value) -> Self {
        let mut request = Self::new(Method::POST, url);
        request.body = Some(body);
        request
    }

    pub fn put(url: impl Into<String>, body: Value) -> Self {
        let mut request = Self::new(Method::PUT, url);
        request.body = Some(body);
        request
    }

    /// Path portion of the URL, without scheme, host or query string
    pub fn path(&self) -> &str {
        let rest = match self.url.find("://") {
            Some(i) => &self.url[i + 3..],
            None => self.url.as_str(),
        };
        let path = match rest.find('/') {
            Some(i) => &rest[i..],
            None => "/",
        };
        match path.find('?') {
            Some(i) => &path[..i],
            None => path,
        }
    }

    /// Adds a header only when the caller has not already set it
    pub fn set_header_if_absent(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers.entry(name).or_insert(value);
    }
}

/// A response observed by the pipeline, whatever its status
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl ApiResponse {
    pub fn new(status: StatusCode, body: Value) -> Self {
        Self { status, body }
    }

    pub fn ok(body: Value) -> Self {
        Self::new(StatusCode::OK, body)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_value(self.body.clone()).map_err(Error::from)
    }

    /// Server-provided error message, when the body carries one
    pub fn error_message(&self) -> Option<String> {
        self.body
            .get("erro")
            .or_else(|| self.body.get("message"))
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    /// Converts a non-2xx response into the API error it represents
    pub fn into_result(self) -> Result<ApiResponse> {
        if self.status.is_success() {
            Ok(self)
        } else {
            Err(Error::Api {
                status: self.status.as_u16(),
                message: self
                    .error_message()
                    .unwrap_or_else(|| self.status.to_string()),
            })
        }
    }
}
