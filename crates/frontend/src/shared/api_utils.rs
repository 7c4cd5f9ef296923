//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use super::config::AppConfig;

/// Port the hotel service listens on when it is served next to the UI
pub const API_PORT: u16 = 8000;

/// Derive the API base URL from the current window location,
/// using port 8000 and the `/api` prefix of the hotel service.
///
/// Returns `None` outside a browser.
pub fn window_api_base() -> Option<String> {
    let window = web_sys::window()?;
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    Some(format!("{}//{}:{}/api", protocol, hostname, API_PORT))
}

/// Get the base URL for API requests
pub fn api_base() -> String {
    AppConfig::global().api_base_url.clone()
}

/// Build a full API URL from a service path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/hoteles/3");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
