//! Shared-secret bearer authorization.
//!
//! Every mutating endpoint is gated by a single process-wide secret. Holders
//! of the secret have full write access; there is no per-user identity.

use std::fmt;

use subtle::ConstantTimeEq;

use crate::error::CoreError;

/// Message for a missing header or a non-`Bearer` scheme.
pub const NO_TOKEN: &str = "No token provided";

/// Message for a bearer token that does not match the secret.
pub const INVALID_TOKEN: &str = "Invalid token";

const BEARER_PREFIX: &str = "Bearer ";

/// The write secret, loaded once at startup.
///
/// `Debug` never prints the value.
#[derive(Clone)]
pub struct SharedSecret(String);

impl SharedSecret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Byte-for-byte comparison in constant time.
    pub fn matches(&self, token: &str) -> bool {
        self.0.as_bytes().ct_eq(token.as_bytes()).into()
    }
}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedSecret(<redacted>)")
    }
}

/// Extract the token from an `Authorization` header value.
///
/// The token is the first space-separated segment after `Bearer `.
pub fn bearer_token(header: &str) -> Option<&str> {
    let rest = header.strip_prefix(BEARER_PREFIX)?;
    rest.split(' ').next()
}

/// Authorize a request given its raw `Authorization` header, if any.
pub fn authorize(header: Option<&str>, secret: &SharedSecret) -> Result<(), CoreError> {
    let token = header
        .and_then(bearer_token)
        .ok_or_else(|| CoreError::Unauthorized(NO_TOKEN.into()))?;

    if !secret.matches(token) {
        return Err(CoreError::Unauthorized(INVALID_TOKEN.into()));
    }
    Ok(())
}
