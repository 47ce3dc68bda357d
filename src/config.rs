use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the search aggregation backend.
    pub base_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
    pub max_retries: u32,
    /// The backend caps each source's items; mirrored here for display.
    pub max_results_per_source: usize,
}

impl Config {
    pub fn load() -> Result<Self> {
        let base_url = std::env::var("SHOP_COMPARE_BASE_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:5000".to_string());

        Url::parse(&base_url)
            .map_err(|e| Error::Config(format!("bad base URL {base_url}: {e}")))?;

        Ok(Config {
            base_url: base_url.trim_end_matches('/').to_string(),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string(),
            timeout_secs: 25,
            max_retries: 3,
            max_results_per_source: 5,
        })
    }

    /// Build a config pointing at an explicit backend, used by tests.
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let mut config = Self::load()?;
        Url::parse(base_url)
            .map_err(|e| Error::Config(format!("bad base URL {base_url}: {e}")))?;
        config.base_url = base_url.trim_end_matches('/').to_string();
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn with_base_url_strips_trailing_slash() {
        let config = Config::with_base_url("http://localhost:9000/").unwrap();
        assert_eq!(config.base_url, "http://localhost:9000");
    }

    #[test]
    fn rejects_unparseable_base_url() {
        assert!(Config::with_base_url("not a url").is_err());
    }
}
