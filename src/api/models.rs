//! Wire DTOs mirrored from the storefront API
//!
//! Field names follow the live backend's JSON (camelCase, Portuguese
//! stats keys). The client performs no validation beyond deserialization.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A vending machine product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub stock: i32,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

fn default_active() -> bool {
    true
}

/// Payload for creating or updating a product
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub stock: i32,
    pub active: bool,
}

/// Lifecycle of an order as the API reports it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Paid,
    Released,
    Cancelled,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "PENDING"),
            OrderStatus::Paid => write!(f, "PAID"),
            OrderStatus::Released => write!(f, "RELEASED"),
            OrderStatus::Cancelled => write!(f, "CANCELLED"),
        }
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "PENDING" => Ok(OrderStatus::Pending),
            "PAID" => Ok(OrderStatus::Paid),
            "RELEASED" => Ok(OrderStatus::Released),
            "CANCELLED" => Ok(OrderStatus::Cancelled),
            other => Err(format!("Unknown order status: {}", other)),
        }
    }
}

/// An order as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    #[serde(default)]
    pub product_id: i64,
    pub product_name: String,
    pub product_price: f64,
    pub status: OrderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Dashboard statistics (wire names from the backend stats endpoint)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderStats {
    #[serde(rename = "totalPedidos")]
    pub total_orders: i64,
    #[serde(rename = "pedidosPendentes")]
    pub pending_orders: i64,
    #[serde(rename = "pedidosPagos")]
    pub paid_orders: i64,
    #[serde(rename = "totalArrecadado")]
    pub total_revenue: f64,
}

/// Spring-style page wrapper used by the paginated endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: i64,
    #[serde(default)]
    pub total_pages: i64,
    #[serde(default)]
    pub number: i64,
    #[serde(default)]
    pub size: i64,
}

/// Pagination parameters accepted by the list endpoints
#[derive(Debug, Clone, Copy, Default)]
pub struct PageQuery {
    pub page: Option<u32>,
    pub size: Option<u32>,
}

impl PageQuery {
    pub fn params(&self) -> Vec<String> {
        let mut params = Vec::new();
        if let Some(page) = self.page {
            params.push(format!("page={}", page));
        }
        if let Some(size) = self.size {
            params.push(format!("size={}", size));
        }
        params
    }
}

/// Body of a successful login call.
///
/// `token` stays optional at the wire level so a tokenless 2xx can be
/// rejected explicitly instead of failing deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(rename = "refreshToken", default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    pub email: String,
    #[serde(rename = "nome")]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_wire_names() {
        assert_eq!(serde_json::to_string(&OrderStatus::Pending).unwrap(), "\"PENDING\"");
        let parsed: OrderStatus = serde_json::from_str("\"RELEASED\"").unwrap();
        assert_eq!(parsed, OrderStatus::Released);
    }

    #[test]
    fn test_order_status_from_str_is_case_insensitive() {
        assert_eq!("paid".parse::<OrderStatus>().unwrap(), OrderStatus::Paid);
        assert!("SHIPPED".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_product_camel_case_round_trip() {
        let json = r#"{
            "id": 1,
            "name": "Coca-Cola 350ml",
            "price": 5.0,
            "stock": 10,
            "active": true,
            "createdAt": "2024-01-01T10:00:00"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.created_at.as_deref(), Some("2024-01-01T10:00:00"));
        assert_eq!(product.emoji, None);
    }

    #[test]
    fn test_stats_portuguese_wire_names() {
        let json = r#"{
            "totalPedidos": 42,
            "pedidosPendentes": 5,
            "pedidosPagos": 37,
            "totalArrecadado": 245.5
        }"#;
        let stats: OrderStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total_orders, 42);
        assert_eq!(stats.total_revenue, 245.5);
    }

    #[test]
    fn test_login_response_tolerates_missing_tokens() {
        let json = r#"{ "email": "admin@trincashop.com", "nome": "Administrador Trinca" }"#;
        let login: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(login.token, None);
        assert_eq!(login.refresh_token, None);
    }

    #[test]
    fn test_page_query_params() {
        let query = PageQuery { page: Some(2), size: Some(20) };
        assert_eq!(query.params(), vec!["page=2", "size=20"]);
        assert!(PageQuery::default().params().is_empty());
    }
}
