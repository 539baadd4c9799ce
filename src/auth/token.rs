//! Token payload decoding and expiry checks
//!
//! The client never holds the signing key, so tokens are decoded with
//! signature validation disabled and only the payload is inspected.

use crate::error::{Error, Result};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

/// Claims carried in the access token payload
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (admin email)
    #[serde(default)]
    pub sub: Option<String>,
    /// Issued at
    #[serde(default)]
    pub iat: Option<i64>,
    /// Expiration time, epoch seconds
    #[serde(default)]
    pub exp: Option<i64>,
}

/// Decode the payload segment of a token without verifying the signature
pub fn decode_claims(token: &str) -> Result<Claims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.required_spec_claims.clear();

    decode::<Claims>(token, &DecodingKey::from_secret(&[]), &validation)
        .map(|data| data.claims)
        .map_err(|e| Error::Config(format!("Invalid token: {}", e)))
}

/// Pure expiry check: `true` iff the token decodes structurally and its
/// `exp` claim is strictly in the future. A missing claim, wrong segment
/// count, bad encoding or non-numeric expiry all read as not valid,
/// never as an error.
pub fn check_expiry(token: &str) -> bool {
    match decode_claims(token) {
        Ok(claims) => match claims.exp {
            Some(exp) => exp > chrono::Utc::now().timestamp(),
            None => false,
        },
        Err(_) => false,
    }
}
