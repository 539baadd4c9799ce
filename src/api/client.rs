//! Typed access to the storefront endpoints

use crate::api::models::{NewProduct, Order, OrderStats, OrderStatus, Page, PageQuery, Product};
use crate::error::Result;
use crate::http::{ApiRequest, Pipeline};
use serde::de::DeserializeOwned;
use serde_json::json;
use std::sync::Arc;

/// One method per API endpoint, all routed through the interceptor
/// pipeline. Domain records are forwarded as-is; the only processing is
/// deserialization at the boundary.
pub struct ApiClient {
    pipeline: Arc<Pipeline>,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, pipeline: Arc<Pipeline>) -> Self {
        Self {
            pipeline,
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn with_query(path: &str, params: Vec<String>) -> String {
        if params.is_empty() {
            path.to_string()
        } else {
            format!("{}?{}", path, params.join("&"))
        }
    }

    async fn execute<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let response = self.pipeline.execute(request).await?.into_result()?;
        response.json()
    }

    // Public storefront

    pub async fn products(&self, page: PageQuery) -> Result<Page<Product>> {
        let path = Self::with_query("/products", page.params());
        self.execute(ApiRequest::get(self.url(&path))).await
    }

    pub async fn create_order(&self, product_id: i64) -> Result<Order> {
        self.execute(ApiRequest::post(
            self.url("/orders"),
            json!({ "productId": product_id }),
        ))
        .await
    }

    pub async fn order(&self, id: i64) -> Result<Order> {
        self.execute(ApiRequest::get(self.url(&format!("/orders/{}", id))))
            .await
    }

    // Admin area (bearer attached by the pipeline)

    pub async fn admin_products(&self, page: PageQuery) -> Result<Page<Product>> {
        let path = Self::with_query("/admin/products", page.params());
        self.execute(ApiRequest::get(self.url(&path))).await
    }

    pub async fn create_product(&self, product: &NewProduct) -> Result<Product> {
        self.execute(ApiRequest::post(
            self.url("/admin/products"),
            serde_json::to_value(product)?,
        ))
        .await
    }

    pub async fn update_product(&self, id: i64, product: &NewProduct) -> Result<Product> {
        self.execute(ApiRequest::put(
            self.url(&format!("/admin/products/{}", id)),
            serde_json::to_value(product)?,
        ))
        .await
    }

    pub async fn admin_orders(
        &self,
        status: Option<OrderStatus>,
        page: PageQuery,
    ) -> Result<Page<Order>> {
        let mut params = Vec::new();
        if let Some(status) = status {
            params.push(format!("status={}", status));
        }
        params.extend(page.params());
        let path = Self::with_query("/admin/orders", params);
        self.execute(ApiRequest::get(self.url(&path))).await
    }

    pub async fn update_order_status(&self, id: i64, status: OrderStatus) -> Result<Order> {
        self.execute(ApiRequest::put(
            self.url(&format!("/admin/orders/{}", id)),
            json!({ "status": status }),
        ))
        .await
    }

    pub async fn order_stats(&self) -> Result<OrderStats> {
        self.execute(ApiRequest::get(self.url("/admin/orders/stats")))
            .await
    }
}
