//! Backend Configuration
//!
//! The only environment-driven switch: whether a hosted backend is
//! configured. Without one, the fixture source serves demo data.

use reqwest::Url;
use serde::{Deserialize, Serialize};

/// Environment variable holding the backend base URL
pub const BACKEND_URL_VAR: &str = "LEARNHUB_BACKEND_URL";
/// Environment variable holding the backend's public (anon) API key
pub const BACKEND_KEY_VAR: &str = "LEARNHUB_BACKEND_ANON_KEY";

/// Connection settings for the hosted backend
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    pub url: Option<String>,
    pub anon_key: Option<String>,
}

impl BackendConfig {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            anon_key: Some(anon_key.into()),
        }
    }

    /// No backend: demo mode
    pub fn unconfigured() -> Self {
        Self::default()
    }

    /// Build from optional raw values (e.g. `option_env!` at compile time)
    pub fn from_values(url: Option<&str>, anon_key: Option<&str>) -> Self {
        Self {
            url: url.map(str::to_string),
            anon_key: anon_key.map(str::to_string),
        }
    }

    /// Read `LEARNHUB_BACKEND_URL` / `LEARNHUB_BACKEND_ANON_KEY` from the process environment
    pub fn from_env() -> Self {
        Self {
            url: std::env::var(BACKEND_URL_VAR).ok(),
            anon_key: std::env::var(BACKEND_KEY_VAR).ok(),
        }
    }

    /// True when both values are present and the URL is http(s)
    pub fn is_configured(&self) -> bool {
        self.credentials().is_some()
    }

    /// `(url, anon_key)` when configured
    pub fn credentials(&self) -> Option<(&str, &str)> {
        let url = self.url.as_deref().map(str::trim).filter(|u| !u.is_empty())?;
        let key = self.anon_key.as_deref().map(str::trim).filter(|k| !k.is_empty())?;

        let parsed = Url::parse(url).ok()?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return None;
        }
        Some((url, key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unconfigured_by_default() {
        assert!(!BackendConfig::unconfigured().is_configured());
    }

    #[test]
    fn test_configured() {
        let config = BackendConfig::new("https://abc.backend.example", "anon-key");
        assert_eq!(
            config.credentials(),
            Some(("https://abc.backend.example", "anon-key"))
        );
    }

    #[test]
    fn test_blank_or_partial_values() {
        assert!(!BackendConfig::from_values(Some("https://x.example"), None).is_configured());
        assert!(!BackendConfig::from_values(None, Some("key")).is_configured());
        assert!(!BackendConfig::from_values(Some("   "), Some("key")).is_configured());
        assert!(!BackendConfig::from_values(Some("https://x.example"), Some("")).is_configured());
    }

    #[test]
    fn test_rejects_non_http_url() {
        assert!(!BackendConfig::new("your-project-url", "key").is_configured());
        assert!(!BackendConfig::new("ftp://files.example", "key").is_configured());
    }

    #[test]
    fn test_from_env() {
        std::env::set_var(BACKEND_URL_VAR, "https://env.backend.example");
        std::env::set_var(BACKEND_KEY_VAR, "env-key");
        let config = BackendConfig::from_env();
        assert_eq!(
            config.credentials(),
            Some(("https://env.backend.example", "env-key"))
        );

        std::env::remove_var(BACKEND_KEY_VAR);
        let config = BackendConfig::from_env();
        assert_eq!(config.anon_key, None);
        assert!(!config.is_configured());

        std::env::remove_var(BACKEND_URL_VAR);
        assert_eq!(BackendConfig::from_env(), BackendConfig::unconfigured());
    }

    #[test]
    fn test_trims_whitespace() {
        let config = BackendConfig::new(" http://localhost:54321 ", " key ");
        assert_eq!(config.credentials(), Some(("http://localhost:54321", "key")));
    }
}
