use crate::error::WynnError;
use std::env;

pub const DEFAULT_BASE_URL: &str = "https://api.wynncraft.com";
pub const DEFAULT_API_VERSION: &str = "v3";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub api_version: String,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            user_agent: format!("wynn_api/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Config {
    /// Points the client at another host, e.g. a local mock server.
    pub fn with_base_url(base_url: &str) -> Self {
        Config {
            base_url: base_url.trim_end_matches('/').to_string(),
            ..Config::default()
        }
    }

    pub fn from_env() -> Result<Self, WynnError> {
        dotenvy::dotenv().ok();

        let mut config = Config::default();

        if let Ok(base_url) = env::var("WYNN_API_BASE_URL") {
            url::Url::parse(&base_url).map_err(|e| {
                WynnError::ConfigError(format!("WYNN_API_BASE_URL is not a valid URL: {}", e))
            })?;
            config.base_url = base_url.trim_end_matches('/').to_string();
        }

        if let Ok(version) = env::var("WYNN_API_VERSION") {
            let version = version.trim_matches('/').to_string();
            if version.is_empty() {
                return Err(WynnError::ConfigError(
                    "WYNN_API_VERSION must not be empty".to_string(),
                ));
            }
            config.api_version = version;
        }

        Ok(config)
    }

    /// Full URL for an API path such as `/player/Salted?fullResult`.
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}/{}{}", self.base_url, self.api_version, path)
    }
}
