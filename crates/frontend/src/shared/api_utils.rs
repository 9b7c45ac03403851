//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing the API base URL.

use super::config::ApiConfig;

/// Get the base URL for API requests
///
/// Uses `base_url` from the config when set, otherwise constructs it from the
/// current window location with the configured backend port.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base(config: &ApiConfig) -> String {
    if let Some(base_url) = &config.base_url {
        return base_url.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, config.port)
}
