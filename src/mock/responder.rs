//! Canned API responses with simulated latency
//!
//! Stands in for an absent backend: matched requests get a fabricated
//! response after a delay, everything else passes through untouched.

use crate::api::models::{Order, OrderStatus};
use crate::error::Result;
use crate::http::pipeline::{Interceptor, Next};
use crate::http::request::{ApiRequest, ApiResponse};
use crate::mock::data;
use async_trait::async_trait;
use chrono::Utc;
use rand::RngExt;
use reqwest::{Method, StatusCode};
use serde_json::{json, Value};
use std::time::Duration;
use tokio::time::sleep;

pub struct MockResponder;

impl MockResponder {
    pub fn new() -> Self {
        Self
    }

    async fn reply(status: StatusCode, body: Value, delay: Duration) -> Result<ApiResponse> {
        sleep(delay).await;
        Ok(ApiResponse::new(status, body))
    }

    async fn login(body: Option<&Value>) -> Result<ApiResponse> {
        let email = body
            .and_then(|b| b.get("email"))
            .and_then(Value::as_str)
            .unwrap_or_default();
        let password = body
            .and_then(|b| b.get("password"))
            .and_then(Value::as_str)
            .unwrap_or_default();

        if email == data::MOCK_ADMIN_EMAIL && password == data::MOCK_ADMIN_PASSWORD {
            Self::reply(
                StatusCode::OK,
                json!({
                    "token": data::MOCK_TOKEN,
                    "email": email,
                    "nome": data::MOCK_ADMIN_NAME,
                }),
                Duration::from_millis(800),
            )
            .await
        } else {
            // Rejections come back immediately, matching the live API's
            // fast-fail on bad credentials
            Ok(ApiResponse::new(
                StatusCode::UNAUTHORIZED,
                json!({ "erro": "Credenciais inválidas" }),
            ))
        }
    }

    async fn create_order(body: Option<&Value>) -> Result<ApiResponse> {
        let product_id = body
            .and_then(|b| b.get("productId"))
            .and_then(Value::as_i64)
            .unwrap_or_default();
        let product = data::catalog().into_iter().find(|p| p.id == product_id);
        let (name, price) = product
            .map(|p| (p.name, p.price))
            .unwrap_or_default();

        let order = Order {
            id: rand::rng().random_range(1000..=9999),
            product_id,
            product_name: name,
            product_price: price,
            status: OrderStatus::Pending,
            created_at: Some(Utc::now().to_rfc3339()),
            updated_at: None,
        };
        Self::reply(
            StatusCode::OK,
            serde_json::to_value(order)?,
            Duration::from_millis(1000),
        )
        .await
    }

    async fn order_by_id(id: i64) -> Result<ApiResponse> {
        let order = Order {
            id,
            product_id: 1,
            product_name: "Coca-Cola 350ml".to_string(),
            product_price: 5.00,
            status: OrderStatus::Pending,
            created_at: Some(Utc::now().to_rfc3339()),
            updated_at: None,
        };
        Self::reply(
            StatusCode::OK,
            serde_json::to_value(order)?,
            Duration::from_millis(500),
        )
        .await
    }
}

impl Default for MockResponder {
    fn default() -> Self {
        Self::new()
    }
}

/// Id of a public order-by-id path like `/api/orders/123`
fn public_order_id(path: &str) -> Option<i64> {
    if path.contains("/admin/") {
        return None;
    }
    let mut segments = path.rsplit('/');
    let id = segments.next()?.parse().ok()?;
    (segments.next()? == "orders").then_some(id)
}

#[async_trait]
impl Interceptor for MockResponder {
    async fn intercept(&self, request: ApiRequest, next: Next<'_>) -> Result<ApiResponse> {
        // Only calls aimed at our API are simulated
        if !request.url.contains("/api") {
            return next.run(request).await;
        }

        let path = request.path().to_string();
        let method = request.method.clone();
        tracing::debug!("Mock API intercepting {} {}", method, path);

        if method == Method::POST && path.ends_with("/auth/login") {
            return Self::login(request.body.as_ref()).await;
        }

        if method == Method::GET && path.ends_with("/products") && !path.contains("/admin/") {
            return Self::reply(
                StatusCode::OK,
                serde_json::to_value(data::page_of(data::catalog()))?,
                Duration::from_millis(500),
            )
            .await;
        }

        if method == Method::POST && path.ends_with("/orders") && !path.contains("/admin/") {
            return Self::create_order(request.body.as_ref()).await;
        }

        if method == Method::GET {
            if let Some(id) = public_order_id(&path) {
                return Self::order_by_id(id).await;
            }
        }

        if method == Method::GET && path.ends_with("/admin/orders/stats") {
            return Self::reply(
                StatusCode::OK,
                serde_json::to_value(data::stats())?,
                Duration::from_millis(400),
            )
            .await;
        }

        if method == Method::GET && path.ends_with("/admin/products") {
            return Self::reply(
                StatusCode::OK,
                serde_json::to_value(data::page_of(data::catalog()))?,
                Duration::from_millis(500),
            )
            .await;
        }

        if method == Method::GET && path.ends_with("/admin/orders") {
            return Self::reply(
                StatusCode::OK,
                serde_json::to_value(data::page_of(data::orders()))?,
                Duration::from_millis(500),
            )
            .await;
        }

        // No match: hand over to the real backend
        next.run(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_order_id_parsing() {
        assert_eq!(public_order_id("/api/orders/123"), Some(123));
        assert_eq!(public_order_id("/api/orders"), None);
        assert_eq!(public_order_id("/api/admin/orders/123"), None);
        assert_eq!(public_order_id("/api/orders/abc"), None);
    }
}
