//! Crate-wide constants and configuration values
//!
//! This module centralizes all magic numbers and endpoint paths
//! to improve maintainability and make the client more configurable.

/// Default base URL of the Playtomic API. Overridable via config file or env.
pub const DEFAULT_BASE_URL: &str = "https://api.playtomic.io";

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 100;

/// Token lifetime handling
pub mod auth {
    /// Token lifetime assumed when the auth endpoint omits `expires_in` (10 minutes)
    pub const DEFAULT_TOKEN_TTL_SECONDS: i64 = 600;

    /// Seconds before the reported expiry at which a token is already treated
    /// as expired, so a refresh happens before the server starts rejecting it
    pub const TOKEN_EXPIRY_LEEWAY_SECONDS: i64 = 30;

    /// Login endpoint path
    pub const LOGIN_PATH: &str = "/v3/auth/login";

    /// Refresh endpoint path
    pub const REFRESH_PATH: &str = "/v3/auth/refresh";
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for base URL override
    pub const API_URL: &str = "PLAYTOMIC_API_URL";

    /// Environment variable for HTTP timeout override in seconds (default: 30)
    pub const HTTP_TIMEOUT: &str = "PLAYTOMIC_HTTP_TIMEOUT";
}
