use serde::Deserialize;

/// Default per-request fetch timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default User-Agent header sent with every sitemap request
pub const DEFAULT_USER_AGENT: &str = concat!("sitemap-sorter/", env!("CARGO_PKG_VERSION"));

/// Main configuration structure for Sitemap-Sorter
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub fetcher: FetcherConfig,
}

/// HTTP fetch configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FetcherConfig {
    /// Per-request timeout (seconds)
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header value
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}
