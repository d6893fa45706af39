//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use super::config::{client_config, ApiConfig};

/// Get the base URL for API requests
///
/// Uses the configured origin when present, otherwise constructs it from the
/// current window location and the configured backend port.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let config = client_config();
    let window_origin = web_sys::window().map(|window| {
        let location = window.location();
        let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
        let hostname = location
            .hostname()
            .unwrap_or_else(|_| "127.0.0.1".to_string());
        (protocol, hostname)
    });
    resolve_api_base(&config.api, window_origin)
}

/// Resolve the API base from config and the page's (protocol, hostname)
pub fn resolve_api_base(config: &ApiConfig, window_origin: Option<(String, String)>) -> String {
    if let Some(origin) = &config.origin {
        return origin.trim_end_matches('/').to_string();
    }
    match window_origin {
        Some((protocol, hostname)) => format!("{}//{}:{}", protocol, hostname, config.port),
        None => String::new(),
    }
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path (should start with "/api/")
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/s1/billboards/b1");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(origin: Option<&str>) -> ApiConfig {
        ApiConfig {
            port: 3000,
            origin: origin.map(str::to_string),
        }
    }

    #[test]
    fn test_base_from_window_location() {
        let base = resolve_api_base(
            &config(None),
            Some(("https:".to_string(), "admin.loja.com".to_string())),
        );
        assert_eq!(base, "https://admin.loja.com:3000");
    }

    #[test]
    fn test_configured_origin_wins() {
        let base = resolve_api_base(
            &config(Some("https://api.loja.com/")),
            Some(("http:".to_string(), "localhost".to_string())),
        );
        assert_eq!(base, "https://api.loja.com");
    }

    #[test]
    fn test_no_window() {
        assert_eq!(resolve_api_base(&config(None), None), "");
    }
}
