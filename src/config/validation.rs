use crate::error::PlaytomicError;

/// Validates the configuration settings
///
/// # Arguments
/// * `base_url` - The API base URL to validate
/// * `http_timeout_seconds` - HTTP timeout to validate
///
/// # Returns
/// * `Ok(())` - Configuration is valid
/// * `Err(PlaytomicError)` - Configuration validation failed
///
/// # Validation Rules
/// - Base URL cannot be empty
/// - Base URL must be a valid URL or domain name
/// - Timeout must be greater than zero
pub fn validate_config(base_url: &str, http_timeout_seconds: u64) -> Result<(), PlaytomicError> {
    if base_url.is_empty() {
        return Err(PlaytomicError::config_error("Base URL cannot be empty"));
    }

    // Check if the base URL looks like a valid URL or domain
    if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
        // If it doesn't start with protocol, it should at least look like a domain
        if !base_url.contains('.') && !base_url.starts_with("localhost") {
            return Err(PlaytomicError::config_error(
                "Base URL must be a valid URL or domain name",
            ));
        }
    }

    if http_timeout_seconds == 0 {
        return Err(PlaytomicError::config_error(
            "HTTP timeout must be greater than zero",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_https_url() {
        assert!(validate_config("https://api.playtomic.io", 30).is_ok());
    }

    #[test]
    fn test_valid_localhost_url() {
        assert!(validate_config("http://localhost:8080", 30).is_ok());
    }

    #[test]
    fn test_bare_domain_accepted() {
        assert!(validate_config("api.playtomic.io", 30).is_ok());
    }

    #[test]
    fn test_empty_base_url_rejected() {
        let result = validate_config("", 30);
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), PlaytomicError::Config(_)));
    }

    #[test]
    fn test_garbage_base_url_rejected() {
        assert!(validate_config("not-a-url", 30).is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let result = validate_config("https://api.playtomic.io", 0);
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), PlaytomicError::Config(_)));
    }
}
