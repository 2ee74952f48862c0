//! API configuration.
//!
//! Defaults point at the public listing API. Environment variables override
//! the defaults and command-line flags override the environment.

/// Default base URL of the listing API.
pub const DEFAULT_BASE_URL: &str = "https://mars.udacity.com";

/// Path of the listing collection, relative to the base URL.
pub const LISTINGS_PATH: &str = "realestate";

/// Environment variable overriding the base URL.
pub const ENV_BASE_URL: &str = "MARSVIEW_API_URL";

/// Environment variable overriding the user agent.
pub const ENV_USER_AGENT: &str = "MARSVIEW_USER_AGENT";

/// Connection settings for the listing API.
///
/// # Example
///
/// ```
/// use marsview::config::ApiConfig;
///
/// let config = ApiConfig::default().with_base_url("http://localhost:8080/");
/// assert_eq!(config.listings_url(), "http://localhost:8080/realestate");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Base URL, with or without a trailing slash
    pub base_url: String,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: format!("marsview/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ApiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Defaults overlaid with `MARSVIEW_API_URL` and `MARSVIEW_USER_AGENT`.
    ///
    /// Empty values are ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(url) = non_empty_var(ENV_BASE_URL) {
            config = config.with_base_url(url);
        }
        if let Some(agent) = non_empty_var(ENV_USER_AGENT) {
            config = config.with_user_agent(agent);
        }

        config
    }

    /// Full URL of the listing collection.
    pub fn listings_url(&self) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), LISTINGS_PATH)
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.user_agent.starts_with("marsview/"));
        assert_eq!(config.listings_url(), "https://mars.udacity.com/realestate");
    }

    #[test]
    fn test_listings_url_trailing_slashes() {
        let config = ApiConfig::new().with_base_url("http://127.0.0.1:9000//");
        assert_eq!(config.listings_url(), "http://127.0.0.1:9000/realestate");
    }

    #[test]
    fn test_builder_setters() {
        let config = ApiConfig::new()
            .with_base_url("http://example.test")
            .with_user_agent("agent/2");
        assert_eq!(config.base_url, "http://example.test");
        assert_eq!(config.user_agent, "agent/2");
    }
}
