//! Typed API surface

pub mod client;
pub mod models;

pub use client::ApiClient;
pub use models::*;
