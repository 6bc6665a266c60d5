//! Wire models for the auth endpoints.
//!
//! Resource payloads are deliberately not modeled: tenants and tournaments
//! pass through as opaque `serde_json::Value` maps.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Payload for the login endpoint.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Payload for the refresh endpoint.
#[derive(Debug, Serialize)]
pub struct RefreshRequest<'a> {
    pub refresh_token: &'a str,
}

/// Token pair returned by the login and refresh endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Lifetime of the access token in seconds. Some responses omit it.
    #[serde(default = "default_expires_in")]
    pub expires_in: i64,
}

fn default_expires_in() -> i64 {
    constants::auth::DEFAULT_TOKEN_TTL_SECONDS
}
