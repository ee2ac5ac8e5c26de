use crate::error::AppError;
use std::net::SocketAddr;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - API domain cannot be empty and must look like a URL or domain name
/// - Player id cannot be empty or contain path separators
/// - Bind address must parse as `host:port`
/// - HTTP timeout must be at least one second
/// - If a log file path is provided it cannot be empty, and its parent
///   directory must exist or be creatable
pub fn validate_config(
    api_domain: &str,
    player_id: &str,
    bind_address: &str,
    http_timeout_seconds: u64,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    if api_domain.is_empty() {
        return Err(AppError::config_error(format!(
            "API domain cannot be empty. Set {} or run with --config <API_DOMAIN>",
            crate::constants::env_vars::API_DOMAIN
        )));
    }

    if !api_domain.starts_with("http://") && !api_domain.starts_with("https://") {
        // Without a protocol it should at least look like a domain
        if !api_domain.contains('.') && !api_domain.starts_with("localhost") {
            return Err(AppError::config_error(
                "API domain must be a valid URL or domain name",
            ));
        }
    }

    if player_id.trim().is_empty() {
        return Err(AppError::config_error("Player id cannot be empty"));
    }
    if player_id.contains('/') || player_id.contains('?') {
        return Err(AppError::config_error(format!(
            "Player id '{player_id}' contains invalid characters"
        )));
    }

    if bind_address.parse::<SocketAddr>().is_err() {
        return Err(AppError::config_error(format!(
            "Bind address '{bind_address}' must be of the form host:port"
        )));
    }

    if http_timeout_seconds == 0 {
        return Err(AppError::config_error("HTTP timeout must be at least 1 second"));
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

/// Normalises an API domain for storage.
///
/// Bare domains get an `https://` prefix and plain `http://` is upgraded,
/// except for loopback development servers which keep `http://`.
pub fn normalize_api_domain(api_domain: &str) -> String {
    let trimmed = api_domain.trim().trim_end_matches('/');
    if trimmed.starts_with("https://") {
        return trimmed.to_string();
    }
    if let Some(rest) = trimmed.strip_prefix("http://") {
        if rest.starts_with("localhost") || rest.starts_with("127.0.0.1") {
            return trimmed.to_string();
        }
        return format!("https://{rest}");
    }
    format!("https://{trimmed}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate_domain(domain: &str) -> Result<(), AppError> {
        validate_config(domain, "jamesle01", "127.0.0.1:3000", 30, &None)
    }

    #[test]
    fn test_valid_domains() {
        assert!(validate_domain("https://api.example.com").is_ok());
        assert!(validate_domain("http://localhost:8080").is_ok());
        assert!(validate_domain("api.example.com").is_ok());
        assert!(validate_domain("localhost:8080").is_ok());
    }

    #[test]
    fn test_invalid_domains() {
        assert!(validate_domain("").is_err());
        assert!(validate_domain("not-a-domain").is_err());
    }

    #[test]
    fn test_invalid_player_id() {
        let result =
            validate_config("https://api.example.com", "  ", "127.0.0.1:3000", 30, &None);
        assert!(matches!(result, Err(AppError::Config(_))));
        let result = validate_config(
            "https://api.example.com",
            "james/le01",
            "127.0.0.1:3000",
            30,
            &None,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_bind_address() {
        let result =
            validate_config("https://api.example.com", "jamesle01", "localhost", 30, &None);
        assert!(result.is_err());
        let result =
            validate_config("https://api.example.com", "jamesle01", "0.0.0.0:8080", 30, &None);
        assert!(result.is_ok());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let result =
            validate_config("https://api.example.com", "jamesle01", "127.0.0.1:3000", 0, &None);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_log_path_rejected() {
        let result = validate_config(
            "https://api.example.com",
            "jamesle01",
            "127.0.0.1:3000",
            30,
            &Some(String::new()),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_normalize_api_domain() {
        assert_eq!(normalize_api_domain("api.example.com"), "https://api.example.com");
        assert_eq!(normalize_api_domain("http://api.example.com/"), "https://api.example.com");
        assert_eq!(normalize_api_domain("https://api.example.com"), "https://api.example.com");
        assert_eq!(normalize_api_domain("http://localhost:8080"), "http://localhost:8080");
        assert_eq!(normalize_api_domain("http://127.0.0.1:9000"), "http://127.0.0.1:9000");
    }
}
