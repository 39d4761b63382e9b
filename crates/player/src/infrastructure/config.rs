//! Client configuration
//!
//! Desktop builds read the environment; the browser build talks to the
//! backend that served the page.

use anyhow::Context;

pub const API_BASE_ENV: &str = "SKIRMISH_API_BASE";
pub const REQUEST_TIMEOUT_ENV: &str = "SKIRMISH_REQUEST_TIMEOUT_MS";
pub const INIT_DATA_ENV: &str = "SKIRMISH_INIT_DATA";
pub const SHELL_ENV: &str = "SKIRMISH_SHELL";

pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Default request timeout in milliseconds (2 minutes)
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 120_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Scheme + host (+ port) without a trailing slash; empty means same origin
    pub api_base: String,
    /// Whole-request deadline, enforced by reqwest on desktop and by an
    /// abort timer in the browser
    pub request_timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}

impl ClientConfig {
    /// Build from explicit values; blank values fall back to defaults.
    pub fn from_values(api_base: Option<&str>, timeout_ms: Option<&str>) -> anyhow::Result<Self> {
        let api_base = api_base
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_API_BASE)
            .trim_end_matches('/')
            .to_string();

        let request_timeout_ms = match timeout_ms.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => raw
                .parse::<u64>()
                .with_context(|| format!("{REQUEST_TIMEOUT_ENV} must be milliseconds, got {raw:?}"))?,
            None => DEFAULT_REQUEST_TIMEOUT_MS,
        };

        Ok(Self {
            api_base,
            request_timeout_ms,
        })
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> anyhow::Result<Self> {
        let api_base = std::env::var(API_BASE_ENV).ok();
        let timeout = std::env::var(REQUEST_TIMEOUT_ENV).ok();
        Self::from_values(api_base.as_deref(), timeout.as_deref())
    }

    /// Same-origin backend: the page origin is the API base.
    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> anyhow::Result<Self> {
        let origin = web_sys::window()
            .context("no window object")?
            .location()
            .origin()
            .map_err(|e| anyhow::anyhow!("failed to read page origin: {:?}", e))?;
        Ok(Self {
            api_base: origin.trim_end_matches('/').to_string(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        })
    }

    /// Deadline for browser timers, which only take 32-bit delays
    pub fn browser_timeout_ms(&self) -> u32 {
        u32::try_from(self.request_timeout_ms).unwrap_or(u32::MAX)
    }

    /// Join a request path (which starts with `/`) onto the base
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_use_defaults() {
        let config = ClientConfig::from_values(None, Some("  ")).unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn trailing_slash_is_dropped() {
        let config = ClientConfig::from_values(Some("https://dnd.example.org/"), None).unwrap();
        assert_eq!(config.url_for("/campaigns"), "https://dnd.example.org/campaigns");
    }

    #[test]
    fn invalid_timeout_is_an_error() {
        let err = ClientConfig::from_values(None, Some("soon")).unwrap_err();
        assert!(err.to_string().contains(REQUEST_TIMEOUT_ENV));
    }

    #[test]
    fn explicit_timeout_is_used() {
        let config = ClientConfig::from_values(None, Some("5000")).unwrap();
        assert_eq!(config.request_timeout_ms, 5000);
        assert_eq!(config.browser_timeout_ms(), 5000);
    }

    #[test]
    fn browser_timeout_saturates() {
        let config = ClientConfig::from_values(None, Some("99999999999")).unwrap();
        assert_eq!(config.browser_timeout_ms(), u32::MAX);
    }
}
