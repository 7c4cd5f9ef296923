//! Runtime configuration of the admin UI.
//!
//! Values are baked in at build time through environment variables:
//! - `HOTEL_API_URL`: base URL of the hotel service (e.g. `https://api.example.com/api`)
//! - `HOTEL_API_TIMEOUT_MS`: request timeout in milliseconds (default 5000)

use once_cell::sync::Lazy;

pub const DEFAULT_TIMEOUT_MS: u32 = 5000;
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub request_timeout_ms: u32,
}

static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    let config = AppConfig::resolve(
        option_env!("HOTEL_API_URL"),
        option_env!("HOTEL_API_TIMEOUT_MS"),
        super::api_utils::window_api_base(),
    );
    log::info!(
        "API base: {}, timeout: {} ms",
        config.api_base_url,
        config.request_timeout_ms
    );
    config
});

impl AppConfig {
    pub fn global() -> &'static AppConfig {
        &CONFIG
    }

    /// Explicit URL wins, then the one derived from the window location
    pub fn resolve(
        configured_url: Option<&str>,
        configured_timeout: Option<&str>,
        window_base: Option<String>,
    ) -> Self {
        let api_base_url = configured_url
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| s.trim_end_matches('/').to_string())
            .or(window_base)
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        Self {
            api_base_url,
            request_timeout_ms: parse_timeout(configured_timeout),
        }
    }
}

/// Zero, negative and non-numeric values fall back to [`DEFAULT_TIMEOUT_MS`]
pub fn parse_timeout(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.trim().parse::<u32>().ok())
        .filter(|ms| *ms > 0)
        .unwrap_or(DEFAULT_TIMEOUT_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_url_wins() {
        let config = AppConfig::resolve(
            Some("https://hotels.example.com/api/"),
            None,
            Some("http://localhost:8000/api".into()),
        );
        assert_eq!(config.api_base_url, "https://hotels.example.com/api");
        assert_eq!(config.request_timeout_ms, DEFAULT_TIMEOUT_MS);
    }

    #[test]
    fn test_window_then_default() {
        let config = AppConfig::resolve(Some("  "), None, Some("http://10.0.0.5:8000/api".into()));
        assert_eq!(config.api_base_url, "http://10.0.0.5:8000/api");

        let config = AppConfig::resolve(None, None, None);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE);
    }

    #[test]
    fn test_timeout_parsing() {
        assert_eq!(parse_timeout(Some("2500")), 2500);
        assert_eq!(parse_timeout(Some("0")), DEFAULT_TIMEOUT_MS);
        assert_eq!(parse_timeout(Some("-1")), DEFAULT_TIMEOUT_MS);
        assert_eq!(parse_timeout(Some("soon")), DEFAULT_TIMEOUT_MS);
        assert_eq!(parse_timeout(None), DEFAULT_TIMEOUT_MS);
    }
}
