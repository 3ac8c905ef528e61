//! Server-side configuration read from the environment.

use anyhow::Context;
use reqwest::Url;

pub const MARKETPLACE_API_URL_VAR: &str = "MARKETPLACE_API_URL";
const DEFAULT_MARKETPLACE_API_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq)]
pub struct MarketplaceApiConfig {
    /// Always ends with `/` so endpoint paths join below it.
    pub base_url: Url,
}

impl MarketplaceApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let raw = std::env::var(MARKETPLACE_API_URL_VAR).unwrap_or(DEFAULT_MARKETPLACE_API_URL.to_string());
        Self::from_base_url(&raw).with_context(|| format!("{MARKETPLACE_API_URL_VAR} is not a valid URL: {raw:?}"))
    }

    pub fn from_base_url(raw: &str) -> anyhow::Result<Self> {
        let mut raw = raw.trim().to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        let base_url = Url::parse(&raw).context("Failed to parse marketplace API url")?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("marketplace API url cannot be used as a base: {raw}");
        }
        Ok(Self { base_url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_trailing_slash_so_paths_nest() {
        let config = MarketplaceApiConfig::from_base_url("https://api.example.com/v1").unwrap();
        assert_eq!(config.base_url.join("search/").unwrap().as_str(), "https://api.example.com/v1/search/");
    }

    #[test]
    fn rejects_garbage() {
        assert!(MarketplaceApiConfig::from_base_url("not a url").is_err());
        assert!(MarketplaceApiConfig::from_base_url("mailto:someone@example.com").is_err());
    }
}
