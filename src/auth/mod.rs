//! Authentication and session management

pub mod manager;
pub mod store;
pub mod token;

pub use manager::AuthManager;
pub use store::{FileSessionStore, MemorySessionStore, SessionStore, StoredUser};
pub use token::{check_expiry, decode_claims, Claims};
