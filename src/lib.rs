//! TrincaShop terminal client
//!
//! Library interface for the TrincaShop storefront client: session and
//! token handling, the request interceptor pipeline, the mock API layer
//! and typed access to the storefront endpoints.

pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod guard;
pub mod http;
pub mod mock;

pub use config::Config;
pub use error::Error;
