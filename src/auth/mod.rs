//! Token state held by the client between requests.

use chrono::{DateTime, Duration, Utc};
use std::fmt;

use crate::constants;
use crate::models::TokenResponse;

/// User credentials, provided once at construction and never mutated.
#[derive(Clone)]
pub struct Credentials {
    pub email: String,
    password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Credentials {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Bearer token pair currently held by the client.
///
/// `expires_at` always describes the held `access_token`: it is computed once
/// when the token is stored and replaced together with it on login/refresh.
#[derive(Debug, Clone)]
pub struct TokenState {
    access_token: String,
    refresh_token: Option<String>,
    expires_at: DateTime<Utc>,
}

impl TokenState {
    /// Builds token state from an auth endpoint response, computing the
    /// expiry from the reported lifetime.
    pub fn from_response(response: TokenResponse, now: DateTime<Utc>) -> Self {
        TokenState {
            expires_at: now + Duration::seconds(response.expires_in),
            access_token: response.access_token,
            refresh_token: response.refresh_token,
        }
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }

    /// Whether the access token should no longer be sent. A token counts as
    /// expired slightly before its reported expiry so the refresh happens
    /// before the server starts answering 401.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now + Duration::seconds(constants::auth::TOKEN_EXPIRY_LEEWAY_SECONDS) >= self.expires_at
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_response(expires_in: i64) -> TokenResponse {
        serde_json::from_value(serde_json::json!({
            "access_token": "access",
            "refresh_token": "refresh",
            "expires_in": expires_in,
        }))
        .unwrap()
    }

    #[test]
    fn test_expiry_computed_from_lifetime() {
        let now = Utc::now();
        let state = TokenState::from_response(token_response(900), now);
        assert_eq!(state.expires_at(), now + Duration::seconds(900));
        assert_eq!(state.access_token(), "access");
        assert_eq!(state.refresh_token(), Some("refresh"));
    }

    #[test]
    fn test_fresh_token_is_not_expired() {
        let now = Utc::now();
        let state = TokenState::from_response(token_response(900), now);
        assert!(!state.is_expired_at(now));
    }

    #[test]
    fn test_past_expiry_is_expired() {
        let now = Utc::now();
        let state = TokenState::from_response(token_response(900), now);
        assert!(state.is_expired_at(now + Duration::seconds(901)));
    }

    #[test]
    fn test_token_expires_early_within_leeway() {
        let now = Utc::now();
        let leeway = constants::auth::TOKEN_EXPIRY_LEEWAY_SECONDS;
        let state = TokenState::from_response(token_response(900), now);
        // One second into the leeway window the token already counts as expired.
        assert!(state.is_expired_at(now + Duration::seconds(900 - leeway + 1)));
        assert!(!state.is_expired_at(now + Duration::seconds(900 - leeway - 1)));
    }

    #[test]
    fn test_zero_lifetime_is_immediately_expired() {
        let now = Utc::now();
        let state = TokenState::from_response(token_response(0), now);
        assert!(state.is_expired_at(now));
    }

    #[test]
    fn test_missing_refresh_token() {
        let response: TokenResponse =
            serde_json::from_value(serde_json::json!({"access_token": "access"})).unwrap();
        let state = TokenState::from_response(response, Utc::now());
        assert!(state.refresh_token().is_none());
    }

    #[test]
    fn test_credentials_debug_redacts_password() {
        let credentials = Credentials::new("user@example.com", "hunter2");
        let debug = format!("{credentials:?}");
        assert!(debug.contains("user@example.com"));
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("<redacted>"));
    }
}
