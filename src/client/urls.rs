//! URL building utilities for API endpoints

use crate::constants;

/// Joins the base URL and a path, tolerating a trailing slash on the base.
fn join(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

/// Builds the login URL.
///
/// # Example
/// ```
/// use playtomic_client::client::build_login_url;
///
/// let url = build_login_url("https://api.playtomic.io");
/// assert_eq!(url, "https://api.playtomic.io/v3/auth/login");
/// ```
pub fn build_login_url(base_url: &str) -> String {
    join(base_url, constants::auth::LOGIN_PATH)
}

/// Builds the token refresh URL.
///
/// # Example
/// ```
/// use playtomic_client::client::build_refresh_url;
///
/// let url = build_refresh_url("https://api.playtomic.io");
/// assert_eq!(url, "https://api.playtomic.io/v3/auth/refresh");
/// ```
pub fn build_refresh_url(base_url: &str) -> String {
    join(base_url, constants::auth::REFRESH_PATH)
}

/// Builds an API URL from an endpoint path.
///
/// # Example
/// ```
/// use playtomic_client::client::build_api_url;
///
/// let url = build_api_url("https://api.playtomic.io/", "/v1/tenants/123");
/// assert_eq!(url, "https://api.playtomic.io/v1/tenants/123");
/// ```
pub fn build_api_url(base_url: &str, path: &str) -> String {
    join(base_url, path)
}

/// Builds the path for fetching a tenant by id.
pub fn tenant_path(tenant_id: &str) -> String {
    format!("/v1/tenants/{tenant_id}")
}

/// Builds the path for creating a tenant.
pub fn tenants_path() -> String {
    "/v2/tenants".to_string()
}

/// Builds the path for fetching a tournament by id.
pub fn tournament_path(tournament_id: &str) -> String {
    format!("/v2/tournaments/{tournament_id}")
}

/// Builds the path for creating a tournament.
pub fn tournaments_path() -> String {
    "/v2/tournaments".to_string()
}
